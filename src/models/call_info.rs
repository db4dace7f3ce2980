//! Per-call delivery attempt model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One leg of a phone-call delivery attempt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FaxCallInfo {
    /// Call identifier.
    #[serde(default)]
    pub call_id: Option<String>,

    /// Pages transmitted during this call.
    #[serde(default)]
    pub call_page_count: u32,

    /// When the call completed.
    #[serde(default)]
    pub completed_utc: Option<DateTime<Utc>>,

    /// Numeric filter flag.
    #[serde(default)]
    pub filter_flag: i32,

    /// Originating phone number.
    #[serde(default)]
    pub orig_number: Option<String>,

    /// Originating CSID exchanged during call setup.
    #[serde(default, rename = "OrigCSID")]
    pub orig_csid: Option<String>,

    /// Call result code (e.g. "Success").
    #[serde(default)]
    pub result: Option<String>,

    /// Terminating CSID exchanged during call setup.
    #[serde(default, rename = "TermCSID")]
    pub term_csid: Option<String>,

    /// Terminating phone number.
    #[serde(default)]
    pub term_number: Option<String>,
}
