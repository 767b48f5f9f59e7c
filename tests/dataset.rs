use checker_core::{CheckerError, PipelineConfig, ReferenceStore, SymptomChecker};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

fn csv_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn loads_quoted_fields_from_disk() {
    let file = csv_file(
        "symptom_text,disease,immediate_action,prescription\n\
         \"fever, cough\",Flu,\"Rest, hydrate\",Paracetamol\n\
         chest pain,Cardiac Event,Call emergency services,Aspirin\n",
    );
    let store = ReferenceStore::from_path(file.path()).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.records()[0].symptom_text, "fever, cough");
    assert_eq!(store.lookup("Flu").unwrap().immediate_action, "Rest, hydrate");
}

#[test]
fn missing_file_is_a_load_error() {
    let err = ReferenceStore::from_path(Path::new("/nonexistent/symptoms.csv")).unwrap_err();
    assert!(matches!(err, CheckerError::DataLoad { .. }));

    let err = SymptomChecker::from_path(Path::new("/nonexistent/symptoms.csv"), PipelineConfig::default())
        .unwrap_err();
    assert!(matches!(err, CheckerError::DataLoad { .. }));
}

#[test]
fn missing_column_is_a_load_error() {
    let file = csv_file("symptom_text,disease\nfever,Flu\n");
    let err = ReferenceStore::from_path(file.path()).unwrap_err();
    assert!(matches!(err, CheckerError::DataLoad { .. }));
}

#[test]
fn header_only_file_cannot_train() {
    let file = csv_file("symptom_text,disease,immediate_action,prescription\n");
    let err = SymptomChecker::from_path(file.path(), PipelineConfig::default()).unwrap_err();
    assert!(matches!(err, CheckerError::InsufficientData { .. }));
}

#[test]
fn config_file_is_applied() {
    let mut config_file = NamedTempFile::new().unwrap();
    write!(config_file, r#"{{"classifier": {{"max_iter": 5}}}}"#).unwrap();
    let config = PipelineConfig::from_file(config_file.path()).unwrap();

    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/symptoms_data.csv");
    let checker = SymptomChecker::from_path(&path, config).unwrap();
    assert!(checker.pipeline().iterations() <= 5);
    assert_eq!(checker.pipeline().config().classifier.max_iter, 5);
}

#[test]
fn bundled_dataset_is_consistent() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/symptoms_data.csv");
    let store = ReferenceStore::from_path(&path).unwrap();
    assert!(store.labels().len() >= 5);
    for record in store.records() {
        let guidance = store.lookup(&record.disease).unwrap();
        assert_eq!(guidance.immediate_action, record.immediate_action);
        assert_eq!(guidance.prescription, record.prescription);
    }
}
