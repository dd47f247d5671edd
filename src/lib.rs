//! Search and filter engine for a static job-listing board.
//!
//! This crate holds the part of the board that has a real algorithmic
//! contract: text normalization and multi-field filtering over an in-memory
//! job collection. Page rendering, routing, and form handling live with the
//! presentation collaborator and are out of scope here.
//!
//! ## What we do
//!
//! - Fold accented Latin text to a canonical lowercase form ([`normalize_text`])
//! - Gate jobs on exact categorical selections ([`matches_selection`])
//! - Match free-text queries by normalized substring over title and intro
//!   ([`JobFilter`], [`filter_jobs`])
//! - Load the bundled JSON dataset and derive the filter-option catalog
//!   ([`JobDataset`])
//! - Produce card teasers and display dates from the raw record ([`teaser`])
//!
//! ## Pure function guarantee
//!
//! Filtering is a pure function of (jobs, query, selection). No I/O, no clock
//! calls, no locale dependence beyond the fixed fold table. Same inputs, same
//! output collection, in the same order, on any machine.
//!
//! ## Invariants worth knowing
//!
//! - The job collection is loaded once and never mutated; normalized text is
//!   derived state held in a separate identifier-keyed cache.
//! - The categorical gate is exact and case-sensitive (controlled
//!   vocabulary); the text gate is case- and diacritic-insensitive. That
//!   asymmetry is intentional.
//! - Every call returns a fresh collection preserving input order, with no
//!   result cap.
//! - Missing fields degrade to non-matches; nothing in the filter path
//!   returns an error.

mod cache;
mod dataset;
mod error;
mod filter;
mod metrics;
mod normalize;
mod record;
mod selection;
mod teaser;

pub use crate::cache::{NormalizedCache, NormalizedText};
pub use crate::dataset::{FilterOptions, JobDataset};
pub use crate::error::DatasetError;
pub use crate::filter::{filter_jobs, JobFilter};
pub use crate::metrics::{set_filter_metrics, FilterMetrics};
pub use crate::normalize::normalize_text;
pub use crate::record::{JobRecord, JobSpecs};
pub use crate::selection::{matches_selection, FilterSelection};
pub use crate::teaser::{
    format_posting_date, strip_html, teaser, DATE_NOT_AVAILABLE, TEASER_MAX_CHARS,
};
