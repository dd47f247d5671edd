//! Core data model for job listings.
//!
//! A [`JobRecord`] is one listing from the bundled dataset. Records are loaded
//! once and never mutated; every derived view (normalized text, filtered
//! subsets) is computed outside the record so the source data stays pristine.
//!
//! The JSON field names follow the dataset's camelCase convention
//! (`jobId`, `experienceLevel`), so the bundled file deserializes directly.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Categorical attributes of a job listing.
///
/// The well-known categories are explicit optional fields; anything else the
/// dataset carries lands in `extra` so forward-compatible categories survive a
/// round trip without schema changes. Values are enumerated display tokens
/// (`"North Holland"`, `"Senior"`), matched exactly by the categorical gate —
/// they are controlled vocabulary, not free text, and are never normalized.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JobSpecs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_per_week: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<String>,
    /// Open extension map for categories the schema does not name yet.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

/// One job listing.
///
/// Immutable after load. The identifier is opaque, unique within the
/// collection, and stable across runs; external collaborators use it for
/// routing and lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    /// Opaque identifier, unique within the dataset.
    pub job_id: String,
    /// Display title. Participates in text search.
    pub title: String,
    /// Free-text introduction; may carry HTML markup. Participates in text
    /// search (after normalization); teaser truncation downstream operates on
    /// the raw markup-bearing form.
    #[serde(default)]
    pub intro: String,
    /// Categorical attributes. A missing mapping means no value for any
    /// category.
    #[serde(default)]
    pub specs: JobSpecs,
    /// Posting date in whole seconds since epoch. Absent means unknown —
    /// never defaulted to "now".
    #[serde(default, with = "posting_date", skip_serializing_if = "Option::is_none")]
    pub date: Option<i64>,
    /// Recruiter display name, when the listing carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recruiter: Option<String>,
}

/// Serde helpers for the posting date field.
///
/// Older dataset exports wrapped the timestamp in an object with a
/// single-element array (`{"timestamp": [1714060800]}`); newer ones store the
/// bare number. Deserialization accepts both plus `null`; serialization always
/// emits the bare number.
pub mod posting_date {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Seconds(i64),
        Legacy { timestamp: Vec<i64> },
    }

    pub fn serialize<S>(date: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(secs) => serializer.serialize_i64(*secs),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Raw>::deserialize(deserializer)?;
        Ok(match raw {
            None => None,
            Some(Raw::Seconds(secs)) => Some(secs),
            // An empty legacy array means the export had no date at all.
            Some(Raw::Legacy { timestamp }) => timestamp.first().copied(),
        })
    }
}
