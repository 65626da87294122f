//! Per-domain interview question bank — configuration data with shuffled
//! sampling, mirroring how the platform front-end drafts an interview.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use rand::seq::SliceRandom;

/// Question sets compiled into the binary; overridable via
/// `QUESTION_BANK_PATH`.
const BUILTIN_QUESTION_BANK: &str = include_str!("../data/questions.json");

/// Bank served for domains without questions of their own.
const FALLBACK_DOMAIN: &str = "Software Development";

/// Questions returned when the caller does not ask for a specific count.
pub const DEFAULT_QUESTION_COUNT: usize = 5;

#[derive(Debug, Clone)]
pub struct QuestionBank {
    banks: HashMap<String, Vec<String>>,
}

impl QuestionBank {
    pub fn builtin() -> Self {
        Self {
            banks: serde_json::from_str(BUILTIN_QUESTION_BANK)
                .expect("embedded question bank data is valid JSON"),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read question bank file {}", path.display()))?;
        let banks = serde_json::from_str(&raw)
            .with_context(|| format!("Question bank file {} is not valid JSON", path.display()))?;
        Ok(Self { banks })
    }

    /// Returns the bank for a domain, falling back to the default bank for
    /// unknown domains. Empty only if the fallback itself is unconfigured.
    pub fn questions_for(&self, domain: &str) -> &[String] {
        self.banks
            .get(domain)
            .or_else(|| self.banks.get(FALLBACK_DOMAIN))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Samples up to `count` distinct questions in shuffled order.
    pub fn sample(&self, domain: &str, count: usize) -> Vec<String> {
        let mut pool: Vec<String> = self.questions_for(domain).to_vec();
        pool.shuffle(&mut rand::thread_rng());
        pool.truncate(count);
        pool
    }

    pub fn domain_count(&self) -> usize {
        self.banks.len()
    }
}
