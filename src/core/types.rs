// src/core/types.rs
use serde::{Deserialize, Serialize};

/// Index of a class (distinct disease label) inside a fitted classifier.
pub type ClassId = usize;

/// Index of a term inside the fitted vocabulary.
pub type TermId = usize;

/// Sparse document vector: `(term, weight)` pairs sorted by term.
pub type SparseVector = Vec<(TermId, f64)>;

/// One row of the reference dataset.
/// The aliases accept the column names of the legacy `symptoms_data.csv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingRecord {
    #[serde(alias = "Symptoms")]
    pub symptom_text: String,
    #[serde(alias = "Disease")]
    pub disease: String,
    #[serde(alias = "Immediate Action")]
    pub immediate_action: String,
    #[serde(alias = "Prescription")]
    pub prescription: String,
}

impl TrainingRecord {
    pub fn new(
        symptom_text: impl Into<String>,
        disease: impl Into<String>,
        immediate_action: impl Into<String>,
        prescription: impl Into<String>,
    ) -> Self {
        Self {
            symptom_text: symptom_text.into(),
            disease: disease.into(),
            immediate_action: immediate_action.into(),
            prescription: prescription.into(),
        }
    }
}

/// The value side of the reference lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guidance {
    pub immediate_action: String,
    pub prescription: String,
}

/// The three-part answer handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnosis {
    pub disease: String,
    pub immediate_action: String,
    pub prescription: String,
}

impl From<Diagnosis> for (String, String, String) {
    fn from(d: Diagnosis) -> Self {
        (d.disease, d.immediate_action, d.prescription)
    }
}
