// File: src/core/vectorizer.rs
use crate::config::VectorizerConfig;
use crate::core::types::{SparseVector, TermId};
use crate::error::{CheckerError, Result};
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};

/// TF-IDF vectorizer over a bag of lowercase word tokens.
///
/// The vocabulary is indexed in alphabetical order so that two fits over the
/// same corpus produce identical feature layouts regardless of hash seeds.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    token_pattern: Regex,
    lowercase: bool,
    vocabulary: BTreeMap<String, TermId>,
    /// Smoothed inverse document frequency, indexed by `TermId`.
    idf: Vec<f64>,
    n_documents: usize,
}

impl TfIdfVectorizer {
    pub fn new(config: &VectorizerConfig) -> Result<Self> {
        // Runs of at least `min_token_len` word characters; punctuation and
        // whitespace separate tokens.
        let pattern = format!(r"\b\w{{{},}}\b", config.min_token_len);
        let token_pattern =
            Regex::new(&pattern).map_err(|e| CheckerError::config(e.to_string()))?;
        Ok(Self {
            token_pattern,
            lowercase: config.lowercase,
            vocabulary: BTreeMap::new(),
            idf: Vec::new(),
            n_documents: 0,
        })
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let folded;
        let text = if self.lowercase {
            folded = text.to_lowercase();
            folded.as_str()
        } else {
            text
        };
        self.token_pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Learns the vocabulary and IDF weights from the corpus.
    /// `idf(t) = ln((1 + n) / (1 + df(t))) + 1`, so a term present in every
    /// document still keeps a weight of 1.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) {
        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for doc in documents {
            let unique: BTreeSet<String> = self.tokenize(doc.as_ref()).into_iter().collect();
            for token in unique {
                *document_frequency.entry(token).or_insert(0) += 1;
            }
        }

        let n = documents.len() as f64;
        self.n_documents = documents.len();
        self.vocabulary.clear();
        self.idf = Vec::with_capacity(document_frequency.len());
        for (id, (term, df)) in document_frequency.into_iter().enumerate() {
            self.idf.push(((1.0 + n) / (1.0 + df as f64)).ln() + 1.0);
            self.vocabulary.insert(term, id);
        }
    }

    /// Raw counts times IDF, L2-normalized. Unknown tokens are dropped, so a
    /// document made only of unseen words maps to the empty vector.
    pub fn transform(&self, document: &str) -> SparseVector {
        let mut counts: BTreeMap<TermId, f64> = BTreeMap::new();
        for token in self.tokenize(document) {
            if let Some(&id) = self.vocabulary.get(&token) {
                *counts.entry(id).or_insert(0.0) += 1.0;
            }
        }

        let mut vector: SparseVector = counts
            .into_iter()
            .map(|(id, count)| (id, count * self.idf[id]))
            .collect();

        let norm = vector.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in vector.iter_mut() {
                *w /= norm;
            }
        }
        vector
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn n_documents(&self) -> usize {
        self.n_documents
    }

    pub fn term_id(&self, term: &str) -> Option<TermId> {
        self.vocabulary.get(term).copied()
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.term_id(term).map(|id| self.idf[id])
    }
}
