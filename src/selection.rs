//! Filter selections and the categorical gate.
//!
//! A [`FilterSelection`] is the set of category constraints a user has active
//! at one point in time: regions, industries, and experience levels. An empty
//! set for a category means "no constraint on this category", not "exclude
//! everything".
//!
//! The categorical gate ([`matches_selection`]) is exact and case-sensitive:
//! spec values are controlled vocabulary, not free text, so they are compared
//! as enumerated tokens without normalization. This is deliberately asymmetric
//! with the diacritic-insensitive text gate applied by the job filter.

use serde::{Deserialize, Serialize};

use crate::record::JobRecord;

/// Active category constraints for one filter invocation.
///
/// Cheap to clone and serde-friendly so the presentation layer can persist or
/// transmit it as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FilterSelection {
    /// Selected `region` values; empty means unconstrained.
    #[serde(default)]
    pub regions: Vec<String>,
    /// Selected `industry` values; empty means unconstrained.
    #[serde(default)]
    pub industries: Vec<String>,
    /// Selected `experienceLevel` values; empty means unconstrained.
    #[serde(default)]
    pub experience_levels: Vec<String>,
}

impl FilterSelection {
    /// A selection with no constraints in any category.
    pub fn none() -> Self {
        Self::default()
    }

    /// True when no category carries a constraint.
    pub fn is_unconstrained(&self) -> bool {
        self.regions.is_empty() && self.industries.is_empty() && self.experience_levels.is_empty()
    }

    /// Drops all constraints, matching the "clear filters" action in the UI.
    pub fn clear(&mut self) {
        self.regions.clear();
        self.industries.clear();
        self.experience_levels.clear();
    }
}

/// The categorical gate: does this job satisfy every constrained category?
///
/// Conjunctive across categories — the job must satisfy regions AND industries
/// AND experience levels simultaneously. For each non-empty category set the
/// job must carry a value in the corresponding spec field and that value must
/// be a member of the set, compared exactly (case-sensitive, no
/// normalization). A job missing the field is rejected whenever that category
/// is constrained.
pub fn matches_selection(job: &JobRecord, selection: &FilterSelection) -> bool {
    category_allows(&selection.regions, job.specs.region.as_deref())
        && category_allows(&selection.industries, job.specs.industry.as_deref())
        && category_allows(
            &selection.experience_levels,
            job.specs.experience_level.as_deref(),
        )
}

fn category_allows(selected: &[String], value: Option<&str>) -> bool {
    if selected.is_empty() {
        return true;
    }
    match value {
        Some(value) => selected.iter().any(|s| s == value),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::JobSpecs;

    fn job(region: Option<&str>, industry: Option<&str>, level: Option<&str>) -> JobRecord {
        JobRecord {
            job_id: "j-1".into(),
            title: "Test".into(),
            intro: String::new(),
            specs: JobSpecs {
                region: region.map(Into::into),
                industry: industry.map(Into::into),
                experience_level: level.map(Into::into),
                ..Default::default()
            },
            date: None,
            recruiter: None,
        }
    }

    #[test]
    fn unconstrained_selection_matches_everything() {
        let selection = FilterSelection::none();
        assert!(matches_selection(&job(None, None, None), &selection));
        assert!(matches_selection(&job(Some("North"), None, None), &selection));
    }

    #[test]
    fn constrained_category_requires_membership() {
        let selection = FilterSelection {
            regions: vec!["North".into(), "East".into()],
            ..Default::default()
        };
        assert!(matches_selection(&job(Some("North"), None, None), &selection));
        assert!(!matches_selection(&job(Some("South"), None, None), &selection));
    }

    #[test]
    fn missing_field_rejected_under_constraint() {
        let selection = FilterSelection {
            industries: vec!["Tech".into()],
            ..Default::default()
        };
        assert!(!matches_selection(&job(Some("North"), None, None), &selection));
    }

    #[test]
    fn gate_is_conjunctive_across_categories() {
        let selection = FilterSelection {
            regions: vec!["North".into()],
            experience_levels: vec!["Senior".into()],
            ..Default::default()
        };
        assert!(matches_selection(
            &job(Some("North"), None, Some("Senior")),
            &selection
        ));
        // Right region, wrong level.
        assert!(!matches_selection(
            &job(Some("North"), None, Some("Junior")),
            &selection
        ));
        // Right level, wrong region.
        assert!(!matches_selection(
            &job(Some("South"), None, Some("Senior")),
            &selection
        ));
    }

    #[test]
    fn categorical_match_is_exact_and_case_sensitive() {
        let selection = FilterSelection {
            regions: vec!["North".into()],
            ..Default::default()
        };
        assert!(!matches_selection(&job(Some("north"), None, None), &selection));
        assert!(!matches_selection(&job(Some("North Holland"), None, None), &selection));
    }

    #[test]
    fn clear_drops_all_constraints() {
        let mut selection = FilterSelection {
            regions: vec!["North".into()],
            industries: vec!["Tech".into()],
            experience_levels: vec!["Senior".into()],
        };
        assert!(!selection.is_unconstrained());
        selection.clear();
        assert!(selection.is_unconstrained());
    }
}
