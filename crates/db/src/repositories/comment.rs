//! Comment store.

use std::collections::{HashMap, HashSet};

use ecoreport_common::{AppError, AppResult, IdGenerator};

use crate::database::Database;
use crate::entities::comment::{self, NewComment};
use crate::events::CommentEvent;

/// Comment rows, keyed by id, with a per-report index.
#[derive(Debug, Default)]
pub(crate) struct CommentTable {
    rows: HashMap<String, comment::Model>,
    by_report: HashMap<String, HashSet<String>>,
}

impl CommentTable {
    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn get(&self, id: &str) -> AppResult<&comment::Model> {
        self.rows
            .get(id)
            .ok_or_else(|| AppError::NotFound(format!("Comment {id} not found")))
    }

    pub(crate) fn count_for(&self, report_id: &str) -> u64 {
        self.by_report
            .get(report_id)
            .map_or(0, |ids| ids.len() as u64)
    }

    /// Comments of one report, newest first.
    pub(crate) fn list_by_report(&self, report_id: &str) -> Vec<comment::Model> {
        let mut comments: Vec<comment::Model> = self
            .by_report
            .get(report_id)
            .into_iter()
            .flatten()
            .filter_map(|id| self.rows.get(id))
            .cloned()
            .collect();

        comments.sort_by(|a, b| {
            b.comment_timestamp
                .cmp(&a.comment_timestamp)
                .then_with(|| b.id.cmp(&a.id))
        });
        comments
    }

    pub(crate) fn insert(&mut self, model: comment::Model) -> CommentEvent {
        let event = CommentEvent::Added {
            report_id: model.report_id.clone(),
        };
        self.by_report
            .entry(model.report_id.clone())
            .or_default()
            .insert(model.id.clone());
        self.rows.insert(model.id.clone(), model);
        event
    }

    fn remove(&mut self, id: &str) -> AppResult<(comment::Model, CommentEvent)> {
        let model = self
            .rows
            .remove(id)
            .ok_or_else(|| AppError::NotFound(format!("Comment {id} not found")))?;

        if let Some(ids) = self.by_report.get_mut(&model.report_id) {
            ids.remove(id);
            if ids.is_empty() {
                self.by_report.remove(&model.report_id);
            }
        }

        let event = CommentEvent::Removed {
            report_id: model.report_id.clone(),
        };
        Ok((model, event))
    }

    /// Remove every comment of a report without emitting per-comment events.
    pub(crate) fn remove_all_for_report(&mut self, report_id: &str) -> Vec<comment::Model> {
        self.by_report
            .remove(report_id)
            .into_iter()
            .flatten()
            .filter_map(|id| self.rows.remove(&id))
            .collect()
    }
}

/// Comment store: sole owner of comments.
///
/// Every change to a report's comment set is forwarded to the report table as
/// a [`CommentEvent`] under the same write guard.
#[derive(Clone)]
pub struct CommentStore {
    db: Database,
    id_gen: IdGenerator,
}

impl CommentStore {
    /// Create a new comment store.
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self {
            db,
            id_gen: IdGenerator::new(),
        }
    }

    /// Comments of a report, newest first.
    ///
    /// An unknown report yields an empty list rather than an error.
    pub async fn list_by_report(&self, report_id: &str) -> Vec<comment::Model> {
        let tables = self.db.read().await;
        tables.comments.list_by_report(report_id)
    }

    /// Get a comment by ID.
    pub async fn get(&self, id: &str) -> AppResult<comment::Model> {
        let tables = self.db.read().await;
        tables.comments.get(id).cloned()
    }

    /// Attach a comment to a live report and bump its counter.
    pub async fn create(&self, input: NewComment) -> AppResult<comment::Model> {
        let id = self.id_gen.generate();
        let mut tables = self.db.write().await;
        tables.reports.ensure_live(&input.report_id)?;

        let now = self.db.now();
        let model = comment::Model::from_new(id, input, now);
        let event = tables.comments.insert(model.clone());
        tables.reports.apply(&event, now)?;

        tracing::info!(
            comment_id = %model.id,
            report_id = %model.report_id,
            "Comment created"
        );
        Ok(model)
    }

    /// Delete a comment and decrement its report's counter.
    pub async fn delete(&self, id: &str) -> AppResult<comment::Model> {
        let mut tables = self.db.write().await;
        let report_id = tables.comments.get(id)?.report_id.clone();
        tables.reports.ensure_live(&report_id)?;

        let (model, event) = tables.comments.remove(id)?;
        tables.reports.apply(&event, self.db.now())?;

        tracing::info!(comment_id = %id, report_id = %report_id, "Comment deleted");
        Ok(model)
    }

    /// Delete every comment of a report.
    ///
    /// No per-comment events are emitted. If the report is still live its
    /// counter is reset to zero in the same step.
    pub async fn delete_all_for_report(&self, report_id: &str) -> AppResult<Vec<comment::Model>> {
        let mut tables = self.db.write().await;
        let removed = tables.comments.remove_all_for_report(report_id);

        if tables.reports.contains(report_id) {
            let event = CommentEvent::Cleared {
                report_id: report_id.to_string(),
            };
            tables.reports.apply(&event, self.db.now())?;
        }

        tracing::info!(
            report_id = %report_id,
            comments_removed = removed.len(),
            "Comments cleared"
        );
        Ok(removed)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::entities::{Barangay, IssueCategory, report::NewReport};
    use chrono::{Duration, TimeZone, Utc};
    use ecoreport_common::ManualClock;
    use std::sync::Arc;

    fn new_report() -> NewReport {
        NewReport {
            reporter_name: "Antonio Reyes".to_string(),
            reporter_phone_number: "09123456788".to_string(),
            reporter_barangay: Barangay::Rosario,
            issue_description: "Dark smoke".to_string(),
            issue_category: IssueCategory::AirPollution,
            latitude: 14.358_127,
            longitude: 121.062_331,
            street: None,
            landmark: None,
            images: Vec::new(),
        }
    }

    fn new_comment(report_id: &str, text: &str) -> NewComment {
        NewComment {
            report_id: report_id.to_string(),
            commenter_name: "Ronaldo Mendoza".to_string(),
            commenter_phone_number: "09654321987".to_string(),
            commenter_barangay: Barangay::Rosario,
            comment_text: text.to_string(),
        }
    }

    fn setup() -> (Database, ManualClock) {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2025, 3, 29, 19, 45, 0).unwrap());
        (Database::with_clock(Arc::new(clock.clone())), clock)
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let (db, clock) = setup();
        let report = db.reports().create(new_report()).await.unwrap();
        let comments = db.comments();

        let first = comments.create(new_comment(&report.id, "first")).await.unwrap();
        clock.advance(Duration::minutes(1));
        let second = comments.create(new_comment(&report.id, "second")).await.unwrap();

        let listed = comments.list_by_report(&report.id).await;
        assert_eq!(listed, vec![second, first]);
    }

    #[tokio::test]
    async fn test_list_unknown_report_is_empty() {
        let (db, _) = setup();
        assert!(db.comments().list_by_report("nowhere").await.is_empty());
    }

    #[tokio::test]
    async fn test_create_on_missing_report_leaves_no_trace() {
        let (db, _) = setup();
        let result = db.comments().create(new_comment("missing", "hello")).await;

        match result {
            Err(AppError::ReportNotFound(id)) => assert_eq!(id, "missing"),
            other => panic!("Expected ReportNotFound, got {other:?}"),
        }
        assert!(db.comments().list_by_report("missing").await.is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_comment_is_not_found() {
        let (db, _) = setup();
        assert!(matches!(
            db.comments().delete("nope").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_comment_events_refresh_parent_timestamp() {
        let (db, clock) = setup();
        let report = db.reports().create(new_report()).await.unwrap();

        clock.advance(Duration::hours(1));
        let comment = db
            .comments()
            .create(new_comment(&report.id, "worse at night"))
            .await
            .unwrap();

        let parent = db.reports().get(&report.id).await.unwrap();
        assert_eq!(parent.last_updated_timestamp, comment.comment_timestamp);
        assert_eq!(parent.comment_count, 1);
    }

    #[tokio::test]
    async fn test_delete_all_for_live_report_resets_counter() {
        let (db, _) = setup();
        let report = db.reports().create(new_report()).await.unwrap();
        let comments = db.comments();
        comments.create(new_comment(&report.id, "a")).await.unwrap();
        comments.create(new_comment(&report.id, "b")).await.unwrap();

        let removed = comments.delete_all_for_report(&report.id).await.unwrap();
        assert_eq!(removed.len(), 2);
        assert_eq!(db.reports().get(&report.id).await.unwrap().comment_count, 0);
        assert!(comments.list_by_report(&report.id).await.is_empty());
    }

    #[test]
    fn test_table_index_tracks_removals() {
        let now = Utc.with_ymd_and_hms(2025, 3, 29, 19, 45, 0).unwrap();
        let mut table = CommentTable::default();
        table.insert(comment::Model::from_new("c1".to_string(), new_comment("r1", "x"), now));
        table.insert(comment::Model::from_new("c2".to_string(), new_comment("r1", "y"), now));
        assert_eq!(table.count_for("r1"), 2);

        let (_, event) = table.remove("c1").unwrap();
        assert_eq!(
            event,
            CommentEvent::Removed {
                report_id: "r1".to_string()
            }
        );
        assert_eq!(table.count_for("r1"), 1);

        table.remove("c2").unwrap();
        assert_eq!(table.count_for("r1"), 0);
        assert_eq!(table.len(), 0);
    }
}
