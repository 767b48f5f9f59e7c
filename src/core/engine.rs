use crate::config::PipelineConfig;
use crate::core::pipeline::InferencePipeline;
use crate::core::types::{Diagnosis, TrainingRecord};
use crate::error::{CheckerError, Result};
use crate::reference::ReferenceStore;
use std::path::Path;

/// The checker is the store and the fitted pipeline, both built from the
/// same dataset. Construct one at startup and hand out `&SymptomChecker`.
#[derive(Debug, Clone)]
pub struct SymptomChecker {
    store: ReferenceStore,
    pipeline: InferencePipeline,
}

impl SymptomChecker {
    pub fn new(store: ReferenceStore, config: PipelineConfig) -> Result<Self> {
        let pipeline = InferencePipeline::trained(store.records(), config)?;
        Ok(Self { store, pipeline })
    }

    pub fn from_path(path: &Path, config: PipelineConfig) -> Result<Self> {
        Self::new(ReferenceStore::from_path(path)?, config)
    }

    pub fn from_records(records: Vec<TrainingRecord>, config: PipelineConfig) -> Result<Self> {
        Self::new(ReferenceStore::from_records(records), config)
    }

    /// Predicted disease plus its guidance from the reference table.
    ///
    /// Always commits to some label for non-blank text, even text unrelated to
    /// any training row. Callers should present the result as screening
    /// advice, not a diagnosis.
    pub fn predict_disease(&self, text: &str) -> Result<Diagnosis> {
        if text.trim().is_empty() {
            return Err(CheckerError::EmptyInput);
        }
        let disease = self.pipeline.predict(text)?;
        let guidance = self.store.lookup(disease)?;
        Ok(Diagnosis {
            disease: disease.to_string(),
            immediate_action: guidance.immediate_action.clone(),
            prescription: guidance.prescription.clone(),
        })
    }

    /// The `count` most probable conditions with their probabilities.
    pub fn rank_conditions(&self, text: &str, count: usize) -> Result<Vec<(String, f64)>> {
        if text.trim().is_empty() {
            return Err(CheckerError::EmptyInput);
        }
        Ok(self
            .pipeline
            .predict_proba(text)?
            .into_iter()
            .take(count)
            .map(|(label, p)| (label.to_string(), p))
            .collect())
    }

    pub fn store(&self) -> &ReferenceStore {
        &self.store
    }

    pub fn pipeline(&self) -> &InferencePipeline {
        &self.pipeline
    }
}
