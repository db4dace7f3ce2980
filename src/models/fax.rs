//! Fax transaction model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{FaxCallInfo, FaxFile};

/// One fax transaction.
///
/// This is the canonical record shape. Not every endpoint returns the full
/// record — the identifier-listing endpoint omits files and call details,
/// and a fax that has not completed yet has no `date` — so everything
/// except `id` is optional or defaulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Fax {
    /// Unique fax identifier.
    pub id: String,

    /// Transmission direction.
    #[serde(default)]
    pub direction: Option<FaxDirection>,

    /// Completion timestamp; absent for faxes still in flight.
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,

    /// Number of pages transmitted.
    #[serde(default)]
    pub page_count: u32,

    /// Number of pages in the source document.
    #[serde(default)]
    pub doc_page_count: u32,

    /// Delivery status as reported by the service (e.g. "Completed").
    #[serde(default)]
    pub status: Option<String>,

    /// User-assigned tag.
    #[serde(default)]
    pub tag: Option<String>,

    /// Document format (e.g. "pdf").
    #[serde(default)]
    pub format: Option<String>,

    /// User-assigned job name.
    #[serde(default)]
    pub job_name: Option<String>,

    /// Rendering quality (e.g. "Fine").
    #[serde(default)]
    pub fax_quality: Option<String>,

    /// Account-level filter value.
    #[serde(default)]
    pub filter_value: Option<String>,

    /// Identity that created the fax.
    #[serde(default)]
    pub created_by: Option<String>,

    /// Submission channel (e.g. "Api", "Portal").
    #[serde(default)]
    pub created_via: Option<String>,

    /// Login the fax belongs to.
    #[serde(default)]
    pub login_id: Option<String>,

    /// Attached document payloads.
    #[serde(default)]
    pub fax_files: Vec<FaxFile>,

    /// Per-call delivery attempt details.
    #[serde(default)]
    pub fax_call_info_list: Vec<FaxCallInfo>,
}

impl Fax {
    /// Whether this fax was received rather than sent.
    pub fn is_inbound(&self) -> bool {
        self.direction == Some(FaxDirection::Inbound)
    }

    /// Whether this fax was sent rather than received.
    pub fn is_outbound(&self) -> bool {
        self.direction == Some(FaxDirection::Outbound)
    }

    /// Whether the record carries at least one document payload.
    pub fn has_document(&self) -> bool {
        !self.fax_files.is_empty()
    }

    /// The first attached document, if any.
    pub fn first_file(&self) -> Option<&FaxFile> {
        self.fax_files.first()
    }
}

/// Transmission direction of a fax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaxDirection {
    /// Received by the account.
    Inbound,
    /// Sent from the account.
    Outbound,
}

impl std::fmt::Display for FaxDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FaxDirection::Inbound => write!(f, "Inbound"),
            FaxDirection::Outbound => write!(f, "Outbound"),
        }
    }
}
