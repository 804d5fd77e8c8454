//! Comment entity.

use ecoreport_common::Timestamp;
use serde::{Deserialize, Serialize};

use super::barangay::Barangay;

/// Comment model. Comments are never edited, only deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: String,
    /// The report this comment belongs to.
    pub report_id: String,
    pub commenter_name: String,
    pub commenter_phone_number: String,
    pub commenter_barangay: Barangay,
    pub comment_text: String,
    pub comment_timestamp: Timestamp,
}

/// Everything the comment workflow hands to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub report_id: String,
    pub commenter_name: String,
    pub commenter_phone_number: String,
    pub commenter_barangay: Barangay,
    pub comment_text: String,
}

impl Model {
    /// Build a comment stamped at `now`.
    #[must_use]
    pub fn from_new(id: String, input: NewComment, now: Timestamp) -> Self {
        Self {
            id,
            report_id: input.report_id,
            commenter_name: input.commenter_name,
            commenter_phone_number: input.commenter_phone_number,
            commenter_barangay: input.commenter_barangay,
            comment_text: input.comment_text,
            comment_timestamp: now,
        }
    }
}
