//! Report store.

use std::collections::HashMap;

use ecoreport_common::{AppError, AppResult, IdGenerator, Timestamp};

use crate::database::Database;
use crate::entities::{
    ReportStatus,
    report::{self, NewReport},
};
use crate::events::CommentEvent;

/// Report rows, keyed by id.
#[derive(Debug, Default)]
pub(crate) struct ReportTable {
    rows: HashMap<String, report::Model>,
}

impl ReportTable {
    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn contains(&self, id: &str) -> bool {
        self.rows.contains_key(id)
    }

    pub(crate) fn get(&self, id: &str) -> AppResult<&report::Model> {
        self.rows
            .get(id)
            .ok_or_else(|| AppError::NotFound(format!("Report {id} not found")))
    }

    fn get_mut(&mut self, id: &str) -> AppResult<&mut report::Model> {
        self.rows
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("Report {id} not found")))
    }

    /// Fails with `ReportNotFound` unless `id` is live.
    pub(crate) fn ensure_live(&self, id: &str) -> AppResult<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(AppError::ReportNotFound(id.to_string()))
        }
    }

    fn insert(&mut self, model: report::Model) {
        self.rows.insert(model.id.clone(), model);
    }

    /// Insert a snapshot row, repairing the timestamp ordering if needed.
    pub(crate) fn restore(&mut self, mut model: report::Model) {
        let last_updated = model.last_updated_timestamp;
        model.touch(last_updated);
        self.insert(model);
    }

    fn remove(&mut self, id: &str) -> AppResult<report::Model> {
        self.rows
            .remove(id)
            .ok_or_else(|| AppError::NotFound(format!("Report {id} not found")))
    }

    fn values(&self) -> impl Iterator<Item = &report::Model> {
        self.rows.values()
    }

    /// Overwrite every comment counter with `count_for(id)`, leaving timestamps alone.
    pub(crate) fn recount(&mut self, count_for: impl Fn(&str) -> u64) {
        for report in self.rows.values_mut() {
            report.comment_count = count_for(&report.id);
        }
    }

    /// Apply a comment event to the parent's counter.
    ///
    /// Fails with `ReportNotFound` and changes nothing if the parent is gone.
    pub(crate) fn apply(&mut self, event: &CommentEvent, now: Timestamp) -> AppResult<()> {
        let report_id = event.report_id();
        self.ensure_live(report_id)?;

        match event.delta() {
            Some(delta) => {
                self.increment_comment_count(report_id, delta, now)?;
            }
            None => {
                let report = self.get_mut(report_id)?;
                report.comment_count = 0;
                report.touch(now);
            }
        }
        Ok(())
    }

    /// Shift the comment counter by `delta`, clamped at zero.
    pub(crate) fn increment_comment_count(
        &mut self,
        id: &str,
        delta: i64,
        now: Timestamp,
    ) -> AppResult<&report::Model> {
        let report = self.get_mut(id)?;
        report.comment_count = report.comment_count.saturating_add_signed(delta);
        report.touch(now);
        Ok(report)
    }
}

/// Report store: sole owner of report aggregates, their status and counters.
#[derive(Clone)]
pub struct ReportStore {
    db: Database,
    id_gen: IdGenerator,
}

impl ReportStore {
    /// Create a new report store.
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self {
            db,
            id_gen: IdGenerator::new(),
        }
    }

    /// List every live report. Order is unspecified; callers sort.
    pub async fn list(&self) -> Vec<report::Model> {
        let tables = self.db.read().await;
        tables.reports.values().cloned().collect()
    }

    /// Get a report by ID.
    pub async fn get(&self, id: &str) -> AppResult<report::Model> {
        let tables = self.db.read().await;
        tables.reports.get(id).cloned()
    }

    /// Create a report with status `Reported` and zero counters.
    ///
    /// No validation happens here; the submission workflow owns that.
    pub async fn create(&self, input: NewReport) -> AppResult<report::Model> {
        let id = self.id_gen.generate();
        let mut tables = self.db.write().await;
        let model = report::Model::from_new(id, input, self.db.now());
        tables.reports.insert(model.clone());

        tracing::info!(
            report_id = %model.id,
            category = %model.issue_category,
            "Report created"
        );
        Ok(model)
    }

    /// Overwrite the status. Any status may move to any other.
    pub async fn update_status(
        &self,
        id: &str,
        status: ReportStatus,
    ) -> AppResult<report::Model> {
        let mut tables = self.db.write().await;
        let now = self.db.now();
        let report = tables.reports.get_mut(id)?;
        let previous = report.status;
        report.status = status;
        report.touch(now);

        tracing::info!(report_id = %id, from = %previous, to = %status, "Report status updated");
        Ok(report.clone())
    }

    /// Add one upvote. Duplicate upvotes from the same caller are not detected.
    pub async fn upvote(&self, id: &str) -> AppResult<report::Model> {
        let mut tables = self.db.write().await;
        let now = self.db.now();
        let report = tables.reports.get_mut(id)?;
        report.upvote_count = report.upvote_count.saturating_add(1);
        report.touch(now);

        tracing::debug!(report_id = %id, upvotes = report.upvote_count, "Report upvoted");
        Ok(report.clone())
    }

    /// Delete a report together with all of its comments.
    pub async fn delete(&self, id: &str) -> AppResult<report::Model> {
        let mut tables = self.db.write().await;
        let report = tables.reports.remove(id)?;
        let removed = tables.comments.remove_all_for_report(id);

        tracing::info!(
            report_id = %id,
            comments_removed = removed.len(),
            "Report deleted"
        );
        Ok(report)
    }
}
