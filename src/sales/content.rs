//! Static offer page copy

/// Buyer names shown in the purchase popup
pub const RECENT_BUYERS: [&str; 8] = [
    "Ana S. de São Paulo",
    "Carla M. de Minas",
    "Juliana F. do Rio",
    "Beatriz L. do Sul",
    "Fernanda C. de Goiás",
    "Patrícia R. da Bahia",
    "Mariana K. de SP",
    "Bruna T. do Paraná",
];

/// Carousel testimonials
pub const CAROUSEL: [&str; 4] = [
    "Me sinto outra mulher. O inchaço sumiu e minhas roupas voltaram a servir!",
    "Fiz o teste e não me arrependo. 5kg a menos em duas semanas!",
    "Meu marido elogiou minha nova energia. O chá realmente funciona.",
    "Simples, natural e eficaz. Melhor investimento que fiz.",
];

pub const BEFORE: [&str; 4] = [
    "Metabolismo Lento",
    "Retenção de Líquido",
    "Baixa Energia",
    "Inchaço Abdominal",
];

pub const AFTER: [&str; 4] = [
    "Barriga Chapada",
    "Metabolismo Rápido",
    "Alta Disposição",
    "Autoestima Alta",
];

/// Bonus title and stated value
pub const BONUSES: [(&str, &str); 5] = [
    ("BÔNUS 1: Plano de Aceleração Natural – 30 Dias", "R$ 97,00"),
    ("BÔNUS 2: Rotina de Foco e Disciplina Diária", "R$ 67,00"),
    ("BÔNUS 3: Método Equilíbrio Alimentar", "R$ 87,00"),
    ("BÔNUS 4: Aula Especial – Hábitos que Aceleram Resultados", "R$ 127,00"),
    ("BÔNUS 5: Comunidade Exclusiva Chá Seca Barriga 21D", "R$ 97,00"),
];

pub const BONUS_TOTAL: &str = "R$ 475,00";
pub const PRICE_FROM: &str = "R$ 497,00";
pub const PRICE: &str = "R$ 37,00";
pub const CTA: &str = "QUERO O CHÁ SECA BARRIGA 21D AGORA!";

pub const GUARANTEE: &str = "Você tem 30 dias completos para testar o Chá Seca Barriga 21D. \
    Se não ficar satisfeita, devolvemos 100% do seu dinheiro. Sem perguntas. Sem burocracia.";

/// Alternative and its cost
pub const COMPARISON: [(&str, &str); 4] = [
    ("Remédios e suplementos (1 mês)", "R$ 1.500"),
    ("Nutricionistas e terapias particulares", "R$ 800 por consulta"),
    ("Academia + Personal Trainer", "R$ 1.200 por mês"),
    ("Tratamentos clínicos avançados", "R$ 20.000"),
];

/// Question and answer
pub const FAQ: [(&str, &str); 5] = [
    (
        "Como eu recebo o acesso ao plano?",
        "O acesso é enviado imediatamente para o seu e-mail após a confirmação do pagamento. \
         Você poderá acessar pelo celular, tablet ou computador.",
    ),
    (
        "Preciso comprar ingredientes caros?",
        "Não! O protocolo utiliza ingredientes naturais, baratos e fáceis de encontrar \
         em qualquer mercado ou feira.",
    ),
    (
        "Funciona para todas as idades?",
        "Sim, o método é 100% natural e adaptável para mulheres de 18 a 60+ anos, \
         respeitando as particularidades de cada metabolismo.",
    ),
    (
        "E se eu não gostar?",
        "Você tem 30 dias de garantia incondicional. Se não gostar, devolvemos 100% do seu dinheiro.",
    ),
    (
        "Quais são as formas de pagamento?",
        "Aceitamos Cartão de Crédito e PIX. O pagamento é único, sem mensalidades.",
    ),
];

/// Week milestone and what changes by then
pub const JOURNEY: [(&str, &str); 3] = [
    (
        "7 Dias: Primeira Semana",
        "Você começa a entrar na rotina dos chás. Sente mais leveza, menos inchaço \
         e mais consciência nas suas escolhas do dia a dia.",
    ),
    (
        "14 Dias: Segunda Semana",
        "Seu corpo começa a responder à nova rotina. As roupas vestem melhor e você \
         se sente mais disposta e mais confiante.",
    ),
    (
        "21 Dias: Terceira Semana",
        "A constância faz a diferença. Mais disciplina, mais energia e mais satisfação \
         com seu progresso.",
    ),
];
