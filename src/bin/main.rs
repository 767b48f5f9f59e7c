use anyhow::{Context, Result};
use checker_core::{CheckerError, Diagnosis, PipelineConfig, SymptomChecker, SCREENING_ADVISORY};
use clap::Parser;
use crossterm::style::Stylize;
use serde::Serialize;
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DATASET_PATH: &str = "data/symptoms_data.csv";

/// AI Symptom Checker: describe your symptoms, get a predicted condition with
/// treatment suggestions.
#[derive(Parser, Debug)]
#[command(name = "symptom-check", version)]
struct Args {
    /// Reference dataset (CSV with symptom_text, disease, immediate_action, prescription)
    #[arg(long, default_value = DATASET_PATH)]
    data: PathBuf,

    /// Optional JSON file with pipeline hyperparameters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also list the N most probable conditions
    #[arg(long, default_value_t = 0)]
    top: usize,

    /// Print results as JSON instead of styled text
    #[arg(long)]
    json: bool,

    /// Check these symptoms once and exit instead of prompting
    symptoms: Vec<String>,
}

#[derive(Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    diagnosis: &'a Diagnosis,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    ranking: Vec<(String, f64)>,
    advisory: &'static str,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => PipelineConfig::from_file(path)?,
        None => PipelineConfig::default(),
    };
    let checker = SymptomChecker::from_path(&args.data, config)
        .with_context(|| format!("could not initialize from '{}'", args.data.display()))?;
    info!(
        conditions = checker.pipeline().classes().len(),
        "symptom checker ready"
    );

    if !args.symptoms.is_empty() {
        let text = args.symptoms.join(" ");
        return check(&checker, &text, &args).map_err(Into::into);
    }

    println!("{}", "AI Symptom Checker. Type 'exit' to quit.".bold());
    println!("---------------------------------------------------------------");
    loop {
        print!("\nDescribe your symptoms > ");
        stdout().flush()?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        match input.trim() {
            "exit" => break,
            text => match check(&checker, text, &args) {
                Ok(()) => {}
                Err(e) if e.is_recoverable() => {
                    println!("{}", "Please enter your symptoms.".yellow());
                }
                Err(e) => {
                    error!("prediction failed: {}", e);
                    return Err(e.into());
                }
            },
        }
    }
    Ok(())
}

fn check(checker: &SymptomChecker, text: &str, args: &Args) -> Result<(), CheckerError> {
    let diagnosis = checker.predict_disease(text)?;
    let ranking = if args.top > 0 {
        checker.rank_conditions(text, args.top)?
    } else {
        Vec::new()
    };

    if args.json {
        let report = Report { diagnosis: &diagnosis, ranking, advisory: SCREENING_ADVISORY };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => error!("could not encode report: {}", e),
        }
        return Ok(());
    }

    println!("\n{} {}", "Predicted Disease:".green().bold(), diagnosis.disease);
    println!("{} {}", "Immediate Action:".cyan().bold(), diagnosis.immediate_action);
    println!("{}\n  {}", "Prescription:".bold(), diagnosis.prescription);
    if !ranking.is_empty() {
        println!("\n{}", "Most likely conditions:".bold());
        for (i, (disease, p)) in ranking.iter().enumerate() {
            println!("  {}. {} ({:.1}%)", i + 1, disease, p * 100.0);
        }
    }
    println!("\n{}", SCREENING_ADVISORY.dark_grey());
    Ok(())
}
