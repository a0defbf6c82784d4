//! Quiz step catalog
//!
//! The quiz is a fixed array of step descriptors indexed by position.
//! Option labels double as the stored answer values.

use crate::models::{Answers, ListField, TextField};

/// Token in headings replaced with the answered name
pub const NAME_TOKEN: &str = "{name}";

/// A selectable option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    /// Stored answer value and display text
    pub label: &'static str,
    /// Optional leading icon
    pub icon: Option<&'static str>,
    /// Optional secondary line
    pub detail: Option<&'static str>,
}

impl Choice {
    const fn plain(label: &'static str) -> Self {
        Self { label, icon: None, detail: None }
    }

    const fn icon(icon: &'static str, label: &'static str) -> Self {
        Self { label, icon: Some(icon), detail: None }
    }

    const fn detailed(icon: &'static str, label: &'static str, detail: &'static str) -> Self {
        Self { label, icon: Some(icon), detail: Some(detail) }
    }
}

/// What a step asks for and how it advances
#[derive(Debug, Clone, PartialEq)]
pub enum StepKind {
    /// Landing screen with a call to action
    Intro { cta: &'static str },
    /// Informational screen (testimonials, pitches)
    Info { cta: &'static str },
    /// One choice, recorded and advanced immediately
    SingleSelect { field: TextField, options: Vec<Choice> },
    /// Any number of choices, advanced by an explicit continue
    MultiSelect { field: ListField, options: Vec<Choice> },
    /// Free text entry
    TextInput { field: TextField, placeholder: &'static str },
    /// Bounded numeric entry
    NumberInput { field: TextField, unit: &'static str, placeholder: &'static str },
    /// Derived BMI display built from earlier answers
    BmiReport,
}

/// One screen of the quiz
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Heading, may contain [`NAME_TOKEN`]
    pub title: &'static str,
    /// Supporting text under the heading
    pub body: Option<&'static str>,
    pub kind: StepKind,
}

impl Step {
    fn new(title: &'static str, kind: StepKind) -> Self {
        Self { title, body: None, kind }
    }

    fn with_body(mut self, body: &'static str) -> Self {
        self.body = Some(body);
        self
    }

    /// Heading with the name token substituted
    pub fn heading(&self, answers: &Answers) -> String {
        self.title.replace(NAME_TOKEN, answers.display_name())
    }

    /// Options offered by select steps, empty otherwise
    pub fn options(&self) -> &[Choice] {
        match &self.kind {
            StepKind::SingleSelect { options, .. } | StepKind::MultiSelect { options, .. } => {
                options
            }
            _ => &[],
        }
    }

    /// Whether the step needs an explicit continue action
    pub fn needs_continue(&self) -> bool {
        !matches!(self.kind, StepKind::SingleSelect { .. })
    }

    /// Whether the step's advance precondition holds for these answers
    pub fn is_satisfied(&self, answers: &Answers) -> bool {
        match &self.kind {
            StepKind::Intro { .. } | StepKind::Info { .. } | StepKind::BmiReport => true,
            StepKind::SingleSelect { field, .. } => !answers.text(*field).is_empty(),
            StepKind::MultiSelect { field, .. } => !answers.list(*field).is_empty(),
            StepKind::TextInput { field, .. } | StepKind::NumberInput { field, .. } => {
                !answers.text(*field).is_empty()
            }
        }
    }

    /// Label of the continue button
    pub fn cta(&self) -> &'static str {
        match &self.kind {
            StepKind::Intro { cta } | StepKind::Info { cta } => *cta,
            StepKind::TextInput { .. } => "Enviar",
            _ => "Continuar",
        }
    }
}

/// Build the full step sequence
pub fn steps() -> Vec<Step> {
    vec![
        // 0
        Step::new(
            "EMAGREÇA EM ATÉ 21 DIAS COM O CHÁ SECA BARRIGA 21D SIMPLES, NATURAL E SEM SOFRIMENTO",
            StepKind::Intro { cta: "FAÇA O TESTE GRATUITO" },
        )
        .with_body(
            "Atenção: essa receita está disponível por tempo limitado. Ao sair desta página, \
             você pode perder o acesso ao Chá Seca Barriga 21D.",
        ),
        // 1
        Step::new(
            "Qual é o objetivo com seu corpo?",
            StepKind::MultiSelect {
                field: ListField::Goals,
                options: vec![
                    Choice::plain("Perder peso"),
                    Choice::plain("Queimar gordura no fígado"),
                    Choice::plain("Eliminar a retenção de líquidos"),
                    Choice::plain("Acelerar o metabolismo"),
                    Choice::plain("Aumento na expectativa de vida"),
                    Choice::plain("Emagrecer na menopausa"),
                    Choice::plain("Acabar com desejo de comer besteira"),
                    Choice::plain("Redução nos níveis de colesterol"),
                ],
            },
        )
        .with_body("Escolha seus maiores interesses abaixo:"),
        // 2
        Step::new(
            "Quantos quilos você deseja perder?",
            StepKind::SingleSelect {
                field: TextField::WeightGoalRange,
                options: vec![
                    Choice::plain("Até 5kg"),
                    Choice::plain("De 6 a 10 kg"),
                    Choice::plain("De 11 a 15 kg"),
                    Choice::plain("De 16 a 20 kg"),
                    Choice::plain("Mais de 20 kg"),
                ],
            },
        )
        .with_body("O protocolo Rotina dos chás bariátricos ajuda a eliminar gordura de forma acelerada."),
        // 3
        Step::new(
            "Qual seu Sexo?",
            StepKind::SingleSelect {
                field: TextField::Gender,
                options: vec![Choice::plain("Masculino"), Choice::plain("Feminino")],
            },
        )
        .with_body(
            "O sexo biológico é um fator que afeta a sua TMB (taxa metabólica), \
             que determina quantas calorias você queima por dia.",
        ),
        // 4
        Step::new(
            "Em qual área do seu corpo você gostaria de reduzir mais gordura?",
            StepKind::SingleSelect {
                field: TextField::BodyPart,
                options: vec![
                    Choice::plain("Região dos Culotes"),
                    Choice::plain("Região das Coxas"),
                    Choice::plain("Região do Abdômen (barriga)"),
                    Choice::plain("Região dos Glúteos"),
                    Choice::plain("Região dos Braços"),
                ],
            },
        ),
        // 5
        Step::new(
            "Vamos criar um Plano Personalizado de Emagrecimento com Chás Bariátricos, focado nas suas necessidades.",
            StepKind::SingleSelect {
                field: TextField::AgeRange,
                options: vec![
                    Choice::plain("18 a 26"),
                    Choice::plain("27 a 38"),
                    Choice::plain("39 a 50"),
                    Choice::plain("46+"),
                ],
            },
        )
        .with_body("Selecione sua idade abaixo:"),
        // 6
        Step::new(
            "Veja o Resultado dos CHÁ SECA BARRIGA 21D na vida da Jéssica",
            StepKind::Info { cta: "Continuar" },
        )
        .with_body(
            "\"Eu já tinha tentado de tudo, mas nada funcionava. O Chá Seca Barriga mudou minha vida! \
             Em menos de um mês eu recuperei roupas que não serviam há anos.\" - Jéssica S.",
        ),
        // 7
        Step::new(
            "Primeiro nos diga seu nome",
            StepKind::TextInput { field: TextField::Name, placeholder: "Digite o seu nome aqui" },
        ),
        // 8
        Step::new(
            "Qual é o seu tipo de corpo atual?",
            StepKind::SingleSelect {
                field: TextField::BodyType,
                options: vec![
                    Choice::plain("Regular"),
                    Choice::plain("Flácido"),
                    Choice::plain("Sobrepeso"),
                ],
            },
        )
        .with_body("Vamos personalizar os Chás que funcionem para seu tipo de corpo."),
        // 9
        Step::new(
            "{name}, como o seu peso afeta sua vida?",
            StepKind::SingleSelect {
                field: TextField::LifeImpact,
                options: vec![
                    Choice::icon("🤦", "Tenho vergonha de tirar fotos"),
                    Choice::icon("😞", "Meu parceiro está preocupado com minha saúde"),
                    Choice::icon("😢", "Sinto-me julgado por amigos e colegas"),
                    Choice::icon("💔", "Evito encontros românticos por não me sentir atraente"),
                    Choice::icon("👋", "Nenhuma das opções"),
                ],
            },
        ),
        // 10
        Step::new(
            "Você se sente satisfeita com a sua aparência física atual?",
            StepKind::SingleSelect {
                field: TextField::Satisfaction,
                options: vec![
                    Choice::icon("😢", "Não, porque me sinto acima do peso e isso afeta minha autoestima"),
                    Choice::icon("😞", "Sim, mas sei que posso melhorar minha saúde"),
                    Choice::icon("😪", "Não, gostaria de perder peso para melhorar meu bem-estar"),
                    Choice::icon("🤦", "Não, minha aparência física não corresponde aos meus objetivos de saúde"),
                ],
            },
        ),
        // 11
        Step::new(
            "Você enfrenta alguma dificuldade no dia a dia devido ao peso?",
            StepKind::SingleSelect {
                field: TextField::Difficulty,
                options: vec![
                    Choice::icon("🤦", "Subir as escadas"),
                    Choice::icon("🪑", "Se sentar"),
                    Choice::icon("🦵", "Agachar"),
                    Choice::icon("🛏️", "Deitar na cama"),
                    Choice::icon("😶", "Outros"),
                    Choice::icon("✅", "Não tenho dificuldades"),
                ],
            },
        )
        .with_body("Selecione abaixo"),
        // 12
        Step::new(
            "Suas respostas são parecidas com as delas...",
            StepKind::Info { cta: "EU TAMBÉM QUERO" },
        )
        .with_body(
            "Isso significa que você também pode se beneficiar da nossa CHÁ SECA BARRIGA 21D, \
             assim como milhares de mulheres que já transformaram suas vidas.",
        ),
        // 13
        Step::new(
            "O que te impede de emagrecer?",
            StepKind::SingleSelect {
                field: TextField::Obstacle,
                options: vec![
                    Choice::detailed("⏰", "Falta de tempo", "Rotina agitada."),
                    Choice::detailed("😬", "Autocontrole", "Dificuldade em resistir a tentações alimentares."),
                    Choice::detailed(
                        "💸",
                        "Financeiro",
                        "Achar opções saudáveis mais caras do que alimentos processados.",
                    ),
                ],
            },
        ),
        // 14
        Step::new("Te entendemos!", StepKind::Info { cta: "Continuar" }).with_body(
            "CHÁ SECA BARRIGA 21D age enquanto você dorme, queimando gordura de forma acelerada!",
        ),
        // 15
        Step::new(
            "{name}, quais desses benefícios gostaria de ter?",
            StepKind::MultiSelect {
                field: ListField::Benefits,
                options: vec![
                    Choice::plain("Sono mais profundo"),
                    Choice::plain("Menos dores e inflamações"),
                    Choice::plain("Mais energia e disposição ao longo do dia"),
                    Choice::plain("Redução do estresse e ansiedade"),
                    Choice::plain("Aumento da autoestima e confiança"),
                    Choice::plain("Proteção contra doenças metabólicas"),
                    Choice::plain("Emagrecer sem esforço e sem efeito sanfona"),
                ],
            },
        )
        .with_body("Vamos personalizar a sua fórmula para maximizar seus resultados."),
        // 16
        Step::new("Histórias Reais de Transformação!", StepKind::Info { cta: "Continuar" }).with_body(
            "\"Sempre fui cética com chás, mas estava desesperada. Na primeira semana desinchei muito! \
             O sono melhorou, a ansiedade diminuiu e as roupas começaram a folgar. \
             Foram 9kg eliminados de forma natural, sem passar fome.\"",
        ),
        // 17
        Step::new(
            "Qual é o seu peso atual?",
            StepKind::NumberInput { field: TextField::CurrentWeight, unit: "KG", placeholder: "Ex: 75.5" },
        )
        .with_body("Estamos quase lá! Vamos ajustar seu plano de acordo com seu corpo."),
        // 18
        Step::new(
            "Qual é a sua altura?",
            StepKind::NumberInput { field: TextField::Height, unit: "CM", placeholder: "Ex: 165" },
        )
        .with_body("Sua altura também influencia no metabolismo!"),
        // 19
        Step::new(
            "Qual é o seu peso desejado?",
            StepKind::NumberInput { field: TextField::DesiredWeight, unit: "KG", placeholder: "Ex: 48" },
        )
        .with_body("Estamos quase lá! Vamos ajustar seu plano de acordo com seu corpo."),
        // 20
        Step::new("ATENÇÃO, {name}!", StepKind::BmiReport).with_body(
            "Pelas suas respostas, seu corpo tá no modo ACÚMULO DE GORDURA. \
             Se não agir HOJE, essa situação tende a PIORAR.",
        ),
        // 21
        Step::new(
            "Como é a sua rotina diária?",
            StepKind::SingleSelect {
                field: TextField::Routine,
                options: vec![
                    Choice::icon("🤯", "Trabalho fora e tenho uma rotina agitada"),
                    Choice::icon("🤭", "Trabalho em casa e tenho uma rotina flexível"),
                    Choice::icon("👨‍👩‍👧", "Em casa cuidando da família"),
                    Choice::icon("😶", "Outro"),
                ],
            },
        )
        .with_body("Vamos personalizar seu plano conforme sua Rotina diária"),
        // 22
        Step::new(
            "Quantas horas de sono você costuma ter por noite?",
            StepKind::SingleSelect {
                field: TextField::SleepHours,
                options: vec![
                    Choice::icon("⏰", "Menos de 5 horas"),
                    Choice::icon("⏰", "Entre 5 e 7 horas"),
                    Choice::icon("⏰", "Entre 7 e 9 horas"),
                    Choice::icon("⏰", "Mais de 9 horas"),
                ],
            },
        )
        .with_body("A qualidade do seu sono impacta diretamente no seu emagrecimento!"),
        // 23
        Step::new(
            "Quantos copos de água você bebe por dia?",
            StepKind::SingleSelect {
                field: TextField::WaterIntake,
                options: vec![
                    Choice::icon("☕", "Apenas chá ou café"),
                    Choice::icon("💧", "1-2 copos por dia"),
                    Choice::icon("💧", "2-6 copos por dia"),
                    Choice::icon("💧", "Mais de 6 copos"),
                ],
            },
        )
        .with_body("Seu nível de hidratação também influencia na sua perda de peso."),
        // 24
        Step::new(
            "Qual dessas frutas você costuma preferir mais no seu dia a dia?",
            StepKind::MultiSelect {
                field: ListField::Fruits,
                options: vec![
                    Choice::icon("🍉", "Melancia"),
                    Choice::icon("🍇", "Uva"),
                    Choice::icon("🥑", "Abacate"),
                    Choice::icon("🥝", "Kiwi"),
                    Choice::icon("🍑", "Pêssego"),
                    Choice::icon("🥭", "Manga"),
                ],
            },
        )
        .with_body("Suas preferências alimentares também ajudam no processo! Escolha quantas quiser"),
    ]
}
