//! Lazy cache of normalized job text, keyed by job identifier.
//!
//! The original dataset records are never mutated; normalized title/intro
//! forms are derived state that lives here instead of on the record. Entries
//! are computed on first use and recomputed if missing, so a cold cache is
//! always valid — just slower.

use std::collections::HashMap;

use crate::normalize::normalize_text;
use crate::record::JobRecord;

/// Normalized search text for one job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    /// Normalized form of the job title.
    pub title: String,
    /// Normalized form of the job intro.
    pub intro: String,
}

impl NormalizedText {
    /// Computes the normalized form of a record's searchable text.
    ///
    /// Only `title` and `intro` participate in text search; spec values are
    /// enumerated tokens handled by the categorical gate.
    pub fn of(job: &JobRecord) -> Self {
        Self {
            title: normalize_text(&job.title),
            intro: normalize_text(&job.intro),
        }
    }
}

/// Identifier-keyed cache of [`NormalizedText`], populated lazily.
#[derive(Debug, Default)]
pub struct NormalizedCache {
    entries: HashMap<String, NormalizedText>,
}

impl NormalizedCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the normalized text for `job`, computing and storing it on
    /// first access.
    pub fn get_or_insert(&mut self, job: &JobRecord) -> &NormalizedText {
        self.entries
            .entry(job.job_id.clone())
            .or_insert_with(|| NormalizedText::of(job))
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops all cached entries. Use after swapping in a new dataset so stale
    /// identifiers cannot shadow fresh text.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
