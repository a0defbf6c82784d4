use proptest::prelude::*;
use quizfunnel::models::{metrics, AnswerUpdate, Answers, ListField};
use quizfunnel::quiz::catalog;
use quizfunnel::quiz::input::accept_numeric_edit;
use quizfunnel::quiz::{QuizSequencer, Step, StepKind, Transition};

fn single_select_steps() -> Vec<Step> {
    catalog::steps()
        .into_iter()
        .filter(|step| matches!(step.kind, StepKind::SingleSelect { .. }))
        .collect()
}

const GOALS: [&str; 4] = [
    "Perder peso",
    "Acelerar o metabolismo",
    "Emagrecer na menopausa",
    "Redução nos níveis de colesterol",
];

proptest! {
    #[test]
    fn prop_single_select_records_and_advances(step_pick in 0usize..64, option_pick in 0usize..64) {
        let steps = single_select_steps();
        let step = steps[step_pick % steps.len()].clone();
        let option = option_pick % step.options().len();
        let expected_label = step.options()[option].label.to_string();
        let field = match &step.kind {
            StepKind::SingleSelect { field, .. } => *field,
            _ => unreachable!("filtered to single-select steps"),
        };

        let mut quiz = QuizSequencer::with_steps(vec![step, catalog::steps()[0].clone()], 200.0);
        let mut answers = Answers::new();
        let effect = quiz.select(option, &answers);

        prop_assert_eq!(effect.transition, Transition::Advanced);
        prop_assert_eq!(quiz.index(), 1);
        prop_assert_eq!(effect.update.clone(), Some(AnswerUpdate::Set(field, expected_label.clone())));

        answers.apply(effect.update.unwrap());
        prop_assert_eq!(answers.text(field), expected_label.as_str());
    }

    #[test]
    fn prop_toggle_twice_restores_membership(
        initial in proptest::collection::vec(0usize..GOALS.len(), 0..8),
        pick in 0usize..GOALS.len(),
    ) {
        let mut answers = Answers::new();
        for i in initial {
            answers.apply(AnswerUpdate::Toggle(ListField::Goals, GOALS[i].to_string()));
        }
        let mut before = answers.goals.clone();
        before.sort();

        answers.apply(AnswerUpdate::Toggle(ListField::Goals, GOALS[pick].to_string()));
        prop_assert_ne!(
            answers.contains(ListField::Goals, GOALS[pick]),
            before.iter().any(|goal| goal == GOALS[pick])
        );
        answers.apply(AnswerUpdate::Toggle(ListField::Goals, GOALS[pick].to_string()));

        let mut after = answers.goals.clone();
        after.sort();
        prop_assert_eq!(after, before);
    }

    #[test]
    fn prop_numeric_limit(value in 0u32..10_000) {
        let accepted = accept_numeric_edit(&value.to_string(), 200.0);
        prop_assert_eq!(accepted, value <= 200);
    }

    #[test]
    fn prop_numeric_rejects_non_numeric(text in "[0-9]*[a-zA-Z\\-+ ][0-9]*") {
        prop_assert!(!accept_numeric_edit(&text, 200.0));
    }

    #[test]
    fn prop_bmi_matches_formula(weight in 30u32..=200, height in 100u32..=220) {
        let meters = f64::from(height) / 100.0;
        let expected = (f64::from(weight) / (meters * meters) * 10.0).round() / 10.0;
        let bmi = metrics::bmi(&weight.to_string(), &height.to_string());
        prop_assert!((bmi - expected).abs() < 1e-9);
        prop_assert!(bmi > 0.0);
    }

    #[test]
    fn prop_bmi_degrades_to_zero(weight in "[a-z]{0,6}", height in 100u32..=220) {
        prop_assert_eq!(metrics::bmi(&weight, &height.to_string()), 0.0);
    }
}

#[test]
fn test_reference_bmi() {
    assert_eq!(metrics::bmi("70", "175"), 22.9);
    assert_eq!(metrics::format_bmi(metrics::bmi("70", "175")), "22.9");
}
