//! Property-based tests using proptest

use proptest::prelude::*;
use sentic_polarity::*;

fn record(value: f64) -> ConceptRecord {
    ConceptRecord {
        sentics: Sentics::default(),
        mood_tags: ("#joy".into(), "#sadness".into()),
        polarity_value: value,
        polarity_intensity: "neutral".into(),
        semantics: vec![],
    }
}

const WORDS: &[&str] = &[
    "el", "servicio", "producto", "es", "muy", "bueno", "malo", "excelente", "atención", "del",
    "personal", "lento", "rápido", "nunca", "pero", "aunque", "comida", "precio", "caro", ",",
];

fn engine_with(values: &[f64]) -> SenticEngine<HeuristicParser> {
    let concepts = [
        "bueno servicio",
        "excelente atención",
        "malo producto",
        "lento servicio",
        "caro precio",
        "bueno",
    ];
    let lexicon = Lexicon::from_records(
        concepts
            .iter()
            .zip(values.iter().chain(std::iter::repeat(&0.5)))
            .map(|(c, v)| (*c, record(*v))),
    );
    SenticEngine::new(lexicon, TriggerTables::default(), HeuristicParser::default()).unwrap()
}

fn message() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 0..12).prop_map(|words| words.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_flat_score_obeys_threshold_law(
        text in message(),
        values in prop::collection::vec(-1.0f64..1.0, 6),
    ) {
        let engine = engine_with(&values);
        let result = engine.score(&text);

        let expected = if result.value > 0.10 {
            PolarityLabel::Positive
        } else if result.value < -0.10 {
            PolarityLabel::Negative
        } else {
            PolarityLabel::Neutral
        };
        prop_assert_eq!(result.label, expected);
    }

    #[test]
    fn test_scoring_is_idempotent(
        text in message(),
        values in prop::collection::vec(-1.0f64..1.0, 6),
    ) {
        let engine = engine_with(&values);
        let first = engine.score_with_discourse(&text);
        let second = engine.score_with_discourse(&text);

        prop_assert_eq!(first.value, second.value);
        prop_assert_eq!(first.label, second.label);
        prop_assert_eq!(first.trace, second.trace);
    }

    #[test]
    fn test_resolve_is_deterministic(concept in "[a-zñ ]{0,20}") {
        let engine = engine_with(&[0.4]);
        let a = engine.resolve(&concept).cloned();
        let b = engine.resolve(&concept).cloned();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn test_blank_input_is_neutral(text in "[ \t\n]{0,10}") {
        let engine = engine_with(&[0.9]);
        let result = engine.score_with_discourse(&text);

        prop_assert_eq!(result.label, PolarityLabel::Neutral);
        prop_assert_eq!(result.value, 0.0);
        prop_assert!(result.trace.is_empty());
    }

    #[test]
    fn test_split_at_connector_beyond_guard(
        left in "[a-z]{8,12}( [a-z]{2,8}){0,3}",
        right in "[a-z]{2,8}( [a-z]{2,8}){0,3}",
        comma_left in any::<bool>(),
    ) {
        let connector = "ninguno";
        let triggers = TriggerTables::new([connector], Vec::<&str>::new());
        prop_assume!(!left.contains(connector) && !right.contains(connector));

        let left = if comma_left { format!("{left}, y más ") } else { format!("{left} ") };
        let text = format!("{left}{connector} {right}");
        let (l, r) = split_conjuncts(&triggers, &text).unwrap();

        prop_assert_eq!(l, left);
        prop_assert!(r.starts_with(connector));
    }

    #[test]
    fn test_labels_within_value_range(
        text in message(),
        values in prop::collection::vec(-1.0f64..1.0, 6),
    ) {
        let engine = engine_with(&values);
        let result = engine.score_with_discourse(&text);
        prop_assert!(result.value.is_finite());
        prop_assert!(result.value.abs() <= 2.0);
    }
}
