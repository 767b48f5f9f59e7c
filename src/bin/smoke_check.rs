// Smoke run of the bundled dataset against a handful of typical queries.
// Run with: cargo run --bin smoke_check
// src/bin/smoke_check.rs
use checker_core::{PipelineConfig, SymptomChecker};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("warn").init();

    let checker =
        SymptomChecker::from_path(Path::new("data/symptoms_data.csv"), PipelineConfig::default())?;
    let test_cases = [
        "fever cough fatigue",
        "chest pain shortness of breath",
        "headache nausea sensitivity to light",
        "persistent cough weight loss",
        "joint pain stiffness swelling",
    ];

    println!("=== Symptom Checker Smoke Results ===\n");
    for (i, symptoms) in test_cases.iter().enumerate() {
        match checker.predict_disease(symptoms) {
            Ok(d) => {
                println!("Test {}: {}", i + 1, symptoms);
                println!("  Disease: {}", d.disease);
                println!("  Action: {}", d.immediate_action);
                println!("  Prescription: {}", d.prescription);
            }
            Err(e) => println!("Test {} failed: {}", i + 1, e),
        }
        println!("{}", "-".repeat(50));
    }
    Ok(())
}
