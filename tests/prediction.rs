use checker_core::{CheckerError, PipelineConfig, SymptomChecker, TrainingRecord};
use std::path::Path;

fn scenario_records() -> Vec<TrainingRecord> {
    vec![
        TrainingRecord::new(
            "fever cough fatigue",
            "Flu",
            "Rest and hydrate",
            "Paracetamol as needed",
        ),
        TrainingRecord::new(
            "chest pain shortness of breath",
            "Cardiac Event",
            "Call emergency services",
            "Aspirin if not allergic",
        ),
    ]
}

fn bundled() -> SymptomChecker {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/symptoms_data.csv");
    SymptomChecker::from_path(&path, PipelineConfig::default()).unwrap()
}

#[test]
fn flu_query_returns_flu_guidance() {
    let checker = SymptomChecker::from_records(scenario_records(), PipelineConfig::default()).unwrap();
    let d = checker.predict_disease("cough fever tired").unwrap();
    assert_eq!(d.disease, "Flu");
    assert_eq!(d.immediate_action, "Rest and hydrate");
    assert_eq!(d.prescription, "Paracetamol as needed");

    let (disease, action, prescription): (String, String, String) = d.into();
    assert_eq!((disease.as_str(), action.as_str()), ("Flu", "Rest and hydrate"));
    assert_eq!(prescription, "Paracetamol as needed");
}

#[test]
fn blank_input_never_reaches_the_classifier() {
    let checker = SymptomChecker::from_records(scenario_records(), PipelineConfig::default()).unwrap();
    for text in ["", "   "] {
        let err = checker.predict_disease(text).unwrap_err();
        assert!(matches!(err, CheckerError::EmptyInput));
        assert!(err.is_recoverable());
    }
    assert!(matches!(checker.rank_conditions("", 3), Err(CheckerError::EmptyInput)));
}

#[test]
fn unseen_words_still_produce_a_training_label() {
    let checker = bundled();
    let d = checker.predict_disease("xyzzy plugh qwerty").unwrap();
    assert!(checker.store().labels().contains(&d.disease.as_str()));
    assert!(!d.immediate_action.is_empty());
}

#[test]
fn repeated_calls_are_deterministic() {
    let checker = bundled();
    let first = checker.predict_disease("headache and nausea").unwrap();
    for _ in 0..5 {
        assert_eq!(checker.predict_disease("headache and nausea").unwrap(), first);
    }
}

#[test]
fn separate_fits_agree() {
    let queries = [
        "fever cough fatigue",
        "crushing chest pressure",
        "itchy rash",
        "xyzzy",
        "frequent urination and thirst",
    ];
    let a = bundled();
    let b = bundled();
    for q in queries {
        assert_eq!(a.predict_disease(q).unwrap(), b.predict_disease(q).unwrap());
        assert_eq!(a.rank_conditions(q, 3).unwrap(), b.rank_conditions(q, 3).unwrap());
    }
}

#[test]
fn every_class_has_guidance() {
    let checker = bundled();
    for label in checker.pipeline().classes() {
        assert!(checker.store().lookup(label).is_ok(), "no guidance for {}", label);
    }
}

#[test]
fn legacy_smoke_queries() {
    let checker = bundled();
    let cases = [
        ("fever cough fatigue", "Flu"),
        ("chest pain shortness of breath", "Heart Attack"),
        ("headache nausea sensitivity to light", "Migraine"),
        ("persistent cough weight loss", "Tuberculosis"),
        ("joint pain stiffness swelling", "Rheumatoid Arthritis"),
    ];
    for (query, expected) in cases {
        assert_eq!(checker.predict_disease(query).unwrap().disease, expected, "query: {}", query);
    }
}

#[test]
fn ranking_is_truncated_and_led_by_the_prediction() {
    let checker = bundled();
    let ranked = checker.rank_conditions("wheezing at night", 3).unwrap();
    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0].0, checker.predict_disease("wheezing at night").unwrap().disease);
    assert!(ranked.windows(2).all(|w| w[0].1 >= w[1].1));
}

#[test]
fn duplicate_label_keeps_last_guidance_end_to_end() {
    let mut records = scenario_records();
    records.push(TrainingRecord::new(
        "high fever chills",
        "Flu",
        "See a doctor if fever persists",
        "Oseltamivir",
    ));
    let checker = SymptomChecker::from_records(records, PipelineConfig::default()).unwrap();
    let d = checker.predict_disease("fever chills").unwrap();
    assert_eq!(d.disease, "Flu");
    assert_eq!(d.immediate_action, "See a doctor if fever persists");
    assert_eq!(d.prescription, "Oseltamivir");
}

#[test]
fn single_condition_dataset_cannot_initialize() {
    let records = vec![
        TrainingRecord::new("fever", "Flu", "Rest", "Paracetamol"),
        TrainingRecord::new("cough", "Flu", "Rest", "Paracetamol"),
    ];
    let err = SymptomChecker::from_records(records, PipelineConfig::default()).unwrap_err();
    assert!(matches!(err, CheckerError::InsufficientData { .. }));
}

#[test]
fn checker_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SymptomChecker>();

    let checker = bundled();
    let expected = checker.predict_disease("burning urination").unwrap();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| checker.predict_disease("burning urination").unwrap()))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}
