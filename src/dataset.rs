//! Dataset loading and the filter-option catalog.
//!
//! The job collection is loaded once from a bundled JSON array and is
//! read-only for the life of the process. [`JobDataset`] wraps that collection
//! and offers lookup by identifier (used by detail-page routing) plus the
//! distinct category values the filter UI presents as checkboxes.

use std::collections::{BTreeSet, HashSet};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::time::Instant;

use serde::Serialize;
use tracing::{info, warn, Level};

use crate::error::DatasetError;
use crate::record::JobRecord;

/// Distinct category values present in a dataset, sorted ascending.
///
/// Empty values are omitted. The UI renders each list as the options of one
/// filter section.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub regions: Vec<String>,
    pub industries: Vec<String>,
    pub experience_levels: Vec<String>,
}

/// An immutable collection of job records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDataset {
    jobs: Vec<JobRecord>,
}

impl JobDataset {
    /// Wraps an already-deserialized collection, enforcing identifier
    /// uniqueness.
    pub fn new(jobs: Vec<JobRecord>) -> Result<Self, DatasetError> {
        let start = Instant::now();
        let span = tracing::span!(Level::INFO, "dataset.load", job_count = jobs.len());
        let _guard = span.enter();

        let mut seen: HashSet<&str> = HashSet::with_capacity(jobs.len());
        for job in &jobs {
            if !seen.insert(&job.job_id) {
                warn!(job_id = %job.job_id, "dataset_duplicate_id");
                return Err(DatasetError::DuplicateJobId(job.job_id.clone()));
            }
        }

        info!(
            job_count = jobs.len(),
            elapsed_micros = start.elapsed().as_micros() as u64,
            "dataset_loaded"
        );
        Ok(Self { jobs })
    }

    /// Parses a dataset from a JSON array of job objects.
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let jobs: Vec<JobRecord> = serde_json::from_str(json)?;
        Self::new(jobs)
    }

    /// Reads and parses a dataset from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut buffered = io::BufReader::new(reader);
        let mut json = String::new();
        buffered.read_to_string(&mut json)?;
        Self::from_json_str(&json)
    }

    /// Reads and parses a dataset from a file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        Self::from_reader(File::open(path)?)
    }

    /// The full collection, in dataset order.
    pub fn jobs(&self) -> &[JobRecord] {
        &self.jobs
    }

    /// Looks up a job by its stable identifier.
    pub fn get(&self, job_id: &str) -> Option<&JobRecord> {
        self.jobs.iter().find(|job| job.job_id == job_id)
    }

    /// Number of records in the dataset.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// True when the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Collects the distinct non-empty values of each filterable category.
    pub fn filter_options(&self) -> FilterOptions {
        fn distinct<'a>(
            jobs: &'a [JobRecord],
            pick: impl Fn(&'a JobRecord) -> Option<&'a String>,
        ) -> Vec<String> {
            jobs.iter()
                .filter_map(pick)
                .filter(|value| !value.is_empty())
                .collect::<BTreeSet<&String>>()
                .into_iter()
                .cloned()
                .collect()
        }

        FilterOptions {
            regions: distinct(&self.jobs, |job| job.specs.region.as_ref()),
            industries: distinct(&self.jobs, |job| job.specs.industry.as_ref()),
            experience_levels: distinct(&self.jobs, |job| job.specs.experience_level.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATASET: &str = r#"[
        {
            "jobId": "j-1",
            "title": "Backend Engineer",
            "intro": "Build APIs",
            "specs": { "region": "North", "industry": "Tech", "experienceLevel": "Senior" }
        },
        {
            "jobId": "j-2",
            "title": "Sales Lead",
            "intro": "Drive revenue",
            "specs": { "region": "South", "industry": "Retail" }
        },
        {
            "jobId": "j-3",
            "title": "Analyst",
            "specs": { "region": "North", "industry": "Tech", "experienceLevel": "Junior" }
        }
    ]"#;

    #[test]
    fn loads_and_preserves_order() {
        let dataset = JobDataset::from_json_str(DATASET).expect("dataset loads");
        let ids: Vec<&str> = dataset.jobs().iter().map(|j| j.job_id.as_str()).collect();
        assert_eq!(ids, vec!["j-1", "j-2", "j-3"]);
        assert_eq!(dataset.len(), 3);
        assert!(!dataset.is_empty());
    }

    #[test]
    fn lookup_by_identifier() {
        let dataset = JobDataset::from_json_str(DATASET).expect("dataset loads");
        assert_eq!(dataset.get("j-2").map(|j| j.title.as_str()), Some("Sales Lead"));
        assert!(dataset.get("j-404").is_none());
    }

    #[test]
    fn duplicate_identifier_rejected() {
        let json = r#"[
            { "jobId": "j-1", "title": "A" },
            { "jobId": "j-1", "title": "B" }
        ]"#;
        let err = JobDataset::from_json_str(json).expect_err("duplicate must fail");
        match err {
            DatasetError::DuplicateJobId(id) => assert_eq!(id, "j-1"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_json_surfaces_parse_error() {
        let err = JobDataset::from_json_str("{ not json").expect_err("parse must fail");
        assert!(matches!(err, DatasetError::Json(_)));
    }

    #[test]
    fn filter_options_are_distinct_and_sorted() {
        let dataset = JobDataset::from_json_str(DATASET).expect("dataset loads");
        let options = dataset.filter_options();
        assert_eq!(options.regions, vec!["North", "South"]);
        assert_eq!(options.industries, vec!["Retail", "Tech"]);
        // j-2 has no experience level; only the present values appear.
        assert_eq!(options.experience_levels, vec!["Junior", "Senior"]);
    }

    #[test]
    fn empty_dataset_is_valid() {
        let dataset = JobDataset::from_json_str("[]").expect("empty dataset loads");
        assert!(dataset.is_empty());
        assert_eq!(dataset.filter_options(), FilterOptions::default());
    }
}
