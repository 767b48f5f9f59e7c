pub mod classifier;
pub mod engine;
pub mod pipeline;
pub mod types;
pub mod vectorizer;
