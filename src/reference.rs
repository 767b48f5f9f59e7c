// File: src/reference.rs
use crate::core::types::{Guidance, TrainingRecord};
use crate::error::{CheckerError, Result};
use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// Required columns, each with the legacy header accepted in its place.
const REQUIRED_COLUMNS: [(&str, &str); 4] = [
    ("symptom_text", "Symptoms"),
    ("disease", "Disease"),
    ("immediate_action", "Immediate Action"),
    ("prescription", "Prescription"),
];

/// The reference dataset plus its disease -> guidance table.
///
/// When a disease label appears on several rows the last row wins. That
/// collapse is kept as-is and logged, since the dataset gives no way to tell
/// which row was intended.
#[derive(Debug, Clone)]
pub struct ReferenceStore {
    records: Vec<TrainingRecord>,
    guidance: HashMap<String, Guidance>,
}

impl ReferenceStore {
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .map_err(|e| CheckerError::data_load(format!("{}: {}", path.display(), e)))?;
        let store = Self::from_reader(file)?;
        info!(path = %path.display(), rows = store.len(), "reference dataset loaded");
        Ok(store)
    }

    /// Reads CSV with a header row from any source.
    pub fn from_reader<R: Read>(source: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);

        let headers = reader.headers()?.clone();
        for (column, legacy) in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column || h == legacy) {
                return Err(CheckerError::data_load(format!(
                    "missing required column '{}'",
                    column
                )));
            }
        }

        let records = reader
            .deserialize()
            .collect::<std::result::Result<Vec<TrainingRecord>, _>>()?;
        Ok(Self::from_records(records))
    }

    pub fn from_records(records: Vec<TrainingRecord>) -> Self {
        let mut guidance = HashMap::with_capacity(records.len());
        for record in &records {
            let entry = Guidance {
                immediate_action: record.immediate_action.clone(),
                prescription: record.prescription.clone(),
            };
            if let Some(previous) = guidance.insert(record.disease.clone(), entry) {
                if previous != guidance[&record.disease] {
                    warn!(
                        disease = %record.disease,
                        "duplicate disease label with different guidance, keeping the last row"
                    );
                }
            }
        }
        Self { records, guidance }
    }

    pub fn lookup(&self, disease: &str) -> Result<&Guidance> {
        self.guidance
            .get(disease)
            .ok_or_else(|| CheckerError::UnknownDisease { disease: disease.to_string() })
    }

    pub fn records(&self) -> &[TrainingRecord] {
        &self.records
    }

    /// Distinct disease labels in sorted order.
    pub fn labels(&self) -> Vec<&str> {
        self.guidance
            .keys()
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Number of dataset rows, duplicates included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
