//! Personalized email bodies from performance reports.
//!
//! For each client report the merge extracts the headline metrics, combines
//! them with the top convictions shared by every client, and substitutes the
//! result into a text template:
//! - `convictions` - conviction list loading and top-N selection
//! - `metrics` - metric extraction from plain-text report exports
//! - `template` - placeholder substitution and client naming
//! - `generator` - directory-level orchestration and output files
//! - `demo` - sample inputs for trying the tool out

pub mod convictions;
pub mod metrics;
pub mod template;
pub mod generator;
pub mod demo;

pub use convictions::{Conviction, format_convictions, load_convictions, top_convictions};
pub use metrics::{ReportMetrics, extract_metrics};
pub use template::{Recipient, client_name_from_stem, render};
pub use generator::{MailmergeConfig, RunSummary, run};

use thiserror::Error;

/// Default number of convictions quoted in each email.
pub const DEFAULT_TOP_CONVICTIONS: usize = 3;

/// Input errors detected while reading merge sources.
#[derive(Debug, Error)]
pub enum MailmergeError {
    #[error("line {line}: expected `Model,YTD%,Commentary`")]
    MalformedConviction { line: usize },

    #[error("line {line}: invalid YTD% value '{value}'")]
    InvalidReturn { line: usize, value: String },

    #[error("unsupported conviction file '{0}' (expected .csv or .json)")]
    UnsupportedFormat(String),

    #[error("invalid conviction JSON: {0}")]
    Json(#[from] serde_json::Error),
}
