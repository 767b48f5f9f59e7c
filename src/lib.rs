// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod reference;

pub use crate::config::PipelineConfig;
pub use crate::core::engine::SymptomChecker;
pub use crate::core::pipeline::InferencePipeline;
pub use crate::core::types::{Diagnosis, Guidance, TrainingRecord};
pub use crate::error::{CheckerError, Result};
pub use crate::reference::ReferenceStore;

/// Shown next to every result by the front-ends.
pub const SCREENING_ADVISORY: &str =
    "This is a screening tool, not a diagnosis. Consult a medical professional.";
