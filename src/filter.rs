//! The job filter: categorical gate plus normalized substring search.
//!
//! [`JobFilter`] is a pure transformation of its three inputs — the job
//! collection, the free-text query, and the active [`FilterSelection`] — and
//! is re-run from scratch on every change to query or selection. The only
//! state it carries is a lazy [`NormalizedCache`] of derived text, which never
//! affects results, only how often normalization is recomputed.
//!
//! Each job is judged independently in input order:
//!
//! 1. **Categorical gate** — [`matches_selection`]: exact, case-sensitive,
//!    conjunctive membership over the constrained categories.
//! 2. **Text gate** — only evaluated for jobs that passed the categorical
//!    gate. An empty normalized query passes automatically; otherwise the
//!    normalized query must be an unanchored substring of the normalized
//!    title OR the normalized intro. No tokenization, no ranking, no fuzzy
//!    matching.
//!
//! The result is a fresh collection on every call; the input is never
//! mutated, order is preserved, and the full matching subset is returned
//! without pagination.

use std::time::Instant;

use tracing::debug;

use crate::cache::NormalizedCache;
use crate::metrics::metrics_recorder;
use crate::normalize::normalize_text;
use crate::record::JobRecord;
use crate::selection::{matches_selection, FilterSelection};

/// Stateless-by-contract filter engine with a lazy normalization cache.
#[derive(Debug, Default)]
pub struct JobFilter {
    cache: NormalizedCache,
}

impl JobFilter {
    /// Creates a filter with a cold cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies both gates to `jobs` and returns the matching subset.
    ///
    /// This is a stable filter, not a sort: survivors keep their input order.
    /// Missing title/intro behave as empty strings; a job with no spec values
    /// simply fails any constrained category.
    pub fn filter<'a>(
        &mut self,
        jobs: &'a [JobRecord],
        query: &str,
        selection: &FilterSelection,
    ) -> Vec<&'a JobRecord> {
        let start = Instant::now();
        // The query is normalized exactly like the stored text; comparisons
        // are never done on raw text.
        let normalized_query = normalize_text(query);

        let matched: Vec<&JobRecord> = jobs
            .iter()
            .filter(|&job| {
                if !matches_selection(job, selection) {
                    return false;
                }
                if normalized_query.is_empty() {
                    return true;
                }
                let text = self.cache.get_or_insert(job);
                text.title.contains(&normalized_query) || text.intro.contains(&normalized_query)
            })
            .collect();

        let latency = start.elapsed();
        debug!(
            query_len = normalized_query.len(),
            input_count = jobs.len(),
            hit_count = matched.len(),
            elapsed_micros = latency.as_micros() as u64,
            "filter_jobs"
        );
        if let Some(recorder) = metrics_recorder() {
            recorder.record_filter(latency, jobs.len(), matched.len());
        }

        matched
    }

    /// Read access to the normalization cache, mainly for diagnostics.
    pub fn cache(&self) -> &NormalizedCache {
        &self.cache
    }

    /// Drops cached normalized text. Call after swapping datasets.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

/// One-shot convenience wrapper around [`JobFilter::filter`].
///
/// Builds a throwaway cache per call. Callers filtering repeatedly over the
/// same collection (every keystroke) should hold a [`JobFilter`] instead so
/// normalization is computed once per job.
pub fn filter_jobs<'a>(
    jobs: &'a [JobRecord],
    query: &str,
    selection: &FilterSelection,
) -> Vec<&'a JobRecord> {
    JobFilter::new().filter(jobs, query, selection)
}
