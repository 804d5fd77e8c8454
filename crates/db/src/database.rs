//! The in-memory database handle.

use std::sync::Arc;

use ecoreport_common::{AppResult, SharedClock, SystemClock, Timestamp};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::entities::{Comment, Report};
use crate::repositories::{CommentStore, CommentTable, ReportStore, ReportTable};

/// Both tables behind one lock.
///
/// Every mutation, including its cascade into the other table, runs under a
/// single write guard, so no observer ever sees a half-applied cascade.
#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub(crate) reports: ReportTable,
    pub(crate) comments: CommentTable,
}

/// Shared handle to the in-memory tables.
///
/// Cloning is cheap; all clones see the same data.
#[derive(Clone, Debug)]
pub struct Database {
    tables: Arc<RwLock<Tables>>,
    clock: SharedClock,
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}

impl Database {
    /// Create an empty database stamped by the wall clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an empty database stamped by `clock`.
    #[must_use]
    pub fn with_clock(clock: SharedClock) -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables::default())),
            clock,
        }
    }

    /// Report store over this database.
    #[must_use]
    pub fn reports(&self) -> ReportStore {
        ReportStore::new(self.clone())
    }

    /// Comment store over this database.
    #[must_use]
    pub fn comments(&self) -> CommentStore {
        CommentStore::new(self.clone())
    }

    /// Replace the contents with a snapshot of records.
    ///
    /// Ids and timestamps are kept as given. Comment counters are recomputed
    /// from `comments`, whatever the incoming reports claim.
    pub async fn restore(&self, reports: Vec<Report>, comments: Vec<Comment>) -> AppResult<()> {
        let mut fresh = Tables::default();

        for report in reports {
            fresh.reports.restore(report);
        }
        for comment in comments {
            fresh.reports.ensure_live(&comment.report_id)?;
            fresh.comments.insert(comment);
        }
        fresh.reports.recount(|id| fresh.comments.count_for(id));

        let (report_count, comment_count) = (fresh.reports.len(), fresh.comments.len());
        *self.tables.write().await = fresh;

        tracing::info!(
            reports = report_count,
            comments = comment_count,
            "Restored database snapshot"
        );
        Ok(())
    }

    pub(crate) fn now(&self) -> Timestamp {
        self.clock.now()
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().await
    }
}
