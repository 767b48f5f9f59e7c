// File: src/core/pipeline.rs
use crate::config::PipelineConfig;
use crate::core::classifier::SoftmaxClassifier;
use crate::core::types::{ClassId, TrainingRecord};
use crate::core::vectorizer::TfIdfVectorizer;
use crate::error::{CheckerError, Result};
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Vectorizer and classifier learned together in one `fit`.
#[derive(Debug, Clone)]
struct FittedModel {
    vectorizer: TfIdfVectorizer,
    classifier: SoftmaxClassifier,
    /// Distinct disease labels, sorted. Index is the `ClassId`.
    classes: Vec<String>,
}

/// Symptom text in, disease label out.
///
/// Built unfitted with [`InferencePipeline::new`] and trained once with
/// [`InferencePipeline::fit`]. After that every method takes `&self`, so one
/// fitted pipeline can serve any number of threads.
#[derive(Debug, Clone)]
pub struct InferencePipeline {
    config: PipelineConfig,
    fitted: Option<FittedModel>,
}

impl InferencePipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config, fitted: None }
    }

    /// Builds and fits in one call.
    pub fn trained(records: &[TrainingRecord], config: PipelineConfig) -> Result<Self> {
        let mut pipeline = Self::new(config);
        pipeline.fit(records)?;
        Ok(pipeline)
    }

    pub fn fit(&mut self, records: &[TrainingRecord]) -> Result<()> {
        self.config.validate()?;
        if records.is_empty() {
            return Err(CheckerError::insufficient_data("training corpus is empty"));
        }

        let classes: Vec<String> = records
            .iter()
            .map(|r| r.disease.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        if classes.len() < 2 {
            return Err(CheckerError::insufficient_data(format!(
                "need at least two distinct disease labels, found {}",
                classes.len()
            )));
        }

        let mut vectorizer = TfIdfVectorizer::new(&self.config.vectorizer)?;
        let corpus: Vec<&str> = records.iter().map(|r| r.symptom_text.as_str()).collect();
        vectorizer.fit(corpus.as_slice());

        let samples: Vec<_> = corpus.iter().map(|doc| vectorizer.transform(doc)).collect();
        let targets: Vec<ClassId> = records
            .iter()
            .filter_map(|r| classes.binary_search(&r.disease).ok())
            .collect();

        let classifier = SoftmaxClassifier::fit(
            &samples,
            &targets,
            classes.len(),
            vectorizer.vocabulary_size(),
            &self.config.classifier,
        );

        info!(
            records = records.len(),
            classes = classes.len(),
            vocabulary = vectorizer.vocabulary_size(),
            iterations = classifier.iterations(),
            "inference pipeline fitted"
        );

        self.fitted = Some(FittedModel { vectorizer, classifier, classes });
        Ok(())
    }

    fn model(&self) -> Result<&FittedModel> {
        self.fitted.as_ref().ok_or(CheckerError::NotFitted)
    }

    /// Most probable disease label for `text`. Tokens never seen during fit
    /// carry no weight; text made only of such tokens still gets a label.
    pub fn predict(&self, text: &str) -> Result<&str> {
        let model = self.model()?;
        if text.trim().is_empty() {
            return Err(CheckerError::EmptyInput);
        }
        let features = model.vectorizer.transform(text);
        let class = model.classifier.predict(&features);
        debug!(known_terms = features.len(), label = %model.classes[class], "prediction");
        Ok(model.classes[class].as_str())
    }

    /// Full class distribution, most probable first. Equal probabilities keep
    /// label order.
    pub fn predict_proba(&self, text: &str) -> Result<Vec<(&str, f64)>> {
        let model = self.model()?;
        if text.trim().is_empty() {
            return Err(CheckerError::EmptyInput);
        }
        let features = model.vectorizer.transform(text);
        let mut ranked: Vec<(&str, f64)> = model
            .classes
            .iter()
            .map(String::as_str)
            .zip(model.classifier.probabilities(&features))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        Ok(ranked)
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    pub fn classes(&self) -> &[String] {
        self.fitted.as_ref().map(|m| m.classes.as_slice()).unwrap_or(&[])
    }

    pub fn vocabulary_size(&self) -> usize {
        self.fitted.as_ref().map_or(0, |m| m.vectorizer.vocabulary_size())
    }

    pub fn iterations(&self) -> usize {
        self.fitted.as_ref().map_or(0, |m| m.classifier.iterations())
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }
}
