// File: src/config.rs
use crate::error::{CheckerError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Hyperparameters for both pipeline stages. Every field has a default, so an
/// empty JSON object `{}` is a valid config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub vectorizer: VectorizerConfig,
    pub classifier: ClassifierConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorizerConfig {
    /// Fold text to lowercase before tokenizing.
    pub lowercase: bool,
    /// Shortest run of word characters kept as a token.
    pub min_token_len: usize,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self { lowercase: true, min_token_len: 2 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Inverse L2 regularization strength.
    pub c: f64,
    /// Upper bound on gradient descent steps.
    pub max_iter: usize,
    /// Stop once every gradient component is below this.
    pub tol: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self { c: 1.0, max_iter: 1000, tol: 1e-4 }
    }
}

impl PipelineConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CheckerError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .map_err(|e| CheckerError::config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.vectorizer.min_token_len == 0 {
            return Err(CheckerError::config("vectorizer.min_token_len must be at least 1"));
        }
        let c = self.classifier.c;
        if !c.is_finite() || c <= 0.0 {
            return Err(CheckerError::config("classifier.c must be a positive number"));
        }
        if self.classifier.max_iter == 0 {
            return Err(CheckerError::config("classifier.max_iter must be at least 1"));
        }
        if self.classifier.tol.is_nan() || self.classifier.tol < 0.0 {
            return Err(CheckerError::config("classifier.tol must not be negative"));
        }
        Ok(())
    }
}
