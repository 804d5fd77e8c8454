//! Report entity.

use std::fmt;
use std::str::FromStr;

use ecoreport_common::Timestamp;
use serde::{Deserialize, Serialize};

use super::barangay::Barangay;

/// Report status.
///
/// Ordered by meaning (`Reported → Verified → Action Taken → Resolved`) with
/// `Invalid/Spam` as a side branch. No transition graph is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReportStatus {
    #[serde(rename = "Reported")]
    #[default]
    Reported,
    #[serde(rename = "Verified")]
    Verified,
    #[serde(rename = "Action Taken")]
    ActionTaken,
    #[serde(rename = "Resolved")]
    Resolved,
    #[serde(rename = "Invalid/Spam")]
    InvalidSpam,
}

impl ReportStatus {
    /// Every status, in workflow order.
    pub const ALL: [Self; 5] = [
        Self::Reported,
        Self::Verified,
        Self::ActionTaken,
        Self::Resolved,
        Self::InvalidSpam,
    ];

    /// Display name, identical to the serialized form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Reported => "Reported",
            Self::Verified => "Verified",
            Self::ActionTaken => "Action Taken",
            Self::Resolved => "Resolved",
            Self::InvalidSpam => "Invalid/Spam",
        }
    }

    /// Whether this status conventionally ends the workflow.
    ///
    /// Informational only: terminal reports can still be moved anywhere.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Resolved | Self::InvalidSpam)
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| format!("Unknown report status: {s}"))
    }
}

/// Issue category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueCategory {
    #[serde(rename = "Illegal Dumping")]
    IllegalDumping,
    #[serde(rename = "Blocked Drainage/Canal")]
    BlockedDrainage,
    #[serde(rename = "Water Pollution - Visual")]
    WaterPollution,
    #[serde(rename = "Air Pollution - Visual/Odor")]
    AirPollution,
    #[serde(rename = "Uncollected Garbage")]
    UncollectedGarbage,
    #[serde(rename = "Damaged Public Facility")]
    DamagedPublicFacility,
    #[serde(rename = "Lack of Shade/Tree Issue")]
    LackOfShade,
}

impl IssueCategory {
    /// Every category, in display order.
    pub const ALL: [Self; 7] = [
        Self::IllegalDumping,
        Self::BlockedDrainage,
        Self::WaterPollution,
        Self::AirPollution,
        Self::UncollectedGarbage,
        Self::DamagedPublicFacility,
        Self::LackOfShade,
    ];

    /// Display name, identical to the serialized form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::IllegalDumping => "Illegal Dumping",
            Self::BlockedDrainage => "Blocked Drainage/Canal",
            Self::WaterPollution => "Water Pollution - Visual",
            Self::AirPollution => "Air Pollution - Visual/Odor",
            Self::UncollectedGarbage => "Uncollected Garbage",
            Self::DamagedPublicFacility => "Damaged Public Facility",
            Self::LackOfShade => "Lack of Shade/Tree Issue",
        }
    }
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssueCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown issue category: {s}"))
    }
}

/// An evidence image reference. The store never dereferences these URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportImage {
    /// Full-resolution image URL.
    pub url: String,
    /// Thumbnail URL.
    pub thumbnail: String,
}

/// Report model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: String,
    /// Reporter snapshot, captured at submission.
    pub reporter_name: String,
    /// Only shown verbatim to admins.
    pub reporter_phone_number: String,
    pub reporter_barangay: Barangay,
    pub issue_description: String,
    pub issue_category: IssueCategory,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landmark: Option<String>,
    pub images: Vec<ReportImage>,
    pub status: ReportStatus,
    pub submission_timestamp: Timestamp,
    pub last_updated_timestamp: Timestamp,
    pub upvote_count: u64,
    /// Number of live comments referencing this report.
    pub comment_count: u64,
}

/// Everything the submission workflow hands to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReport {
    pub reporter_name: String,
    pub reporter_phone_number: String,
    pub reporter_barangay: Barangay,
    pub issue_description: String,
    pub issue_category: IssueCategory,
    pub latitude: f64,
    pub longitude: f64,
    pub street: Option<String>,
    pub landmark: Option<String>,
    pub images: Vec<ReportImage>,
}

impl Model {
    /// Build a fresh report: status `Reported`, zero counters, both timestamps at `now`.
    #[must_use]
    pub fn from_new(id: String, input: NewReport, now: Timestamp) -> Self {
        Self {
            id,
            reporter_name: input.reporter_name,
            reporter_phone_number: input.reporter_phone_number,
            reporter_barangay: input.reporter_barangay,
            issue_description: input.issue_description,
            issue_category: input.issue_category,
            latitude: input.latitude,
            longitude: input.longitude,
            street: input.street,
            landmark: input.landmark,
            images: input.images,
            status: ReportStatus::default(),
            submission_timestamp: now,
            last_updated_timestamp: now,
            upvote_count: 0,
            comment_count: 0,
        }
    }

    /// Record a mutation at `now`.
    ///
    /// Never moves `last_updated_timestamp` behind `submission_timestamp`, even
    /// if the clock stepped backwards.
    pub fn touch(&mut self, now: Timestamp) {
        self.last_updated_timestamp = now.max(self.submission_timestamp);
    }
}
