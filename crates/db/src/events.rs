//! Events the comment table emits for the report table.
//!
//! The comment table owns comments; the report table owns the counters
//! derived from them. Counter changes travel as a [`CommentEvent`] so neither
//! side reaches into the other's rows.

/// A change in the set of comments attached to one report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentEvent {
    /// One comment was attached.
    Added {
        /// Parent report.
        report_id: String,
    },
    /// One comment was removed.
    Removed {
        /// Parent report.
        report_id: String,
    },
    /// Every comment of the report was removed at once.
    Cleared {
        /// Parent report.
        report_id: String,
    },
}

impl CommentEvent {
    /// The report whose counter this event adjusts.
    #[must_use]
    pub fn report_id(&self) -> &str {
        match self {
            Self::Added { report_id } | Self::Removed { report_id } | Self::Cleared { report_id } => {
                report_id
            }
        }
    }

    /// Counter delta, or `None` when the counter is reset instead.
    #[must_use]
    pub const fn delta(&self) -> Option<i64> {
        match self {
            Self::Added { .. } => Some(1),
            Self::Removed { .. } => Some(-1),
            Self::Cleared { .. } => None,
        }
    }
}
