//! Report service: citizen submissions and the admin dashboard.

use ecoreport_common::{AppError, AppResult, config::SubmissionConfig};
use ecoreport_db::{
    entities::{Barangay, IssueCategory, Report, ReportImage, ReportStatus, report::NewReport},
    repositories::ReportStore,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::verification::VerificationService;
use crate::phone;

/// Input for submitting a report.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReportInput {
    #[validate(length(max = 100))]
    pub reporter_name: String,
    pub reporter_phone_number: String,
    pub reporter_barangay: Barangay,
    pub issue_description: String,
    pub issue_category: IssueCategory,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    pub street: String,
    pub landmark: String,
    #[serde(default)]
    pub images: Vec<ReportImage>,
    /// Token from a completed phone verification.
    pub verification_token: String,
}

/// Listing order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportSort {
    #[default]
    Newest,
    Oldest,
    MostUpvotes,
    MostComments,
}

/// Dashboard filter.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportQuery {
    pub status: Option<ReportStatus>,
    /// Case-insensitive match on reporter name, area, category or description.
    pub search: Option<String>,
    #[serde(default)]
    pub sort: ReportSort,
}

/// Report count for one status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: ReportStatus,
    pub count: usize,
}

/// Dashboard statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStats {
    pub total: usize,
    /// Reports not yet resolved or dismissed.
    pub open: usize,
    pub by_status: Vec<StatusCount>,
}

fn required(field: &str, value: &str) -> AppResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    Ok(value.to_string())
}

fn sort_reports(reports: &mut [Report], sort: ReportSort) {
    match sort {
        ReportSort::Newest => reports.sort_by(|a, b| {
            b.submission_timestamp
                .cmp(&a.submission_timestamp)
                .then_with(|| b.id.cmp(&a.id))
        }),
        ReportSort::Oldest => reports.sort_by(|a, b| {
            a.submission_timestamp
                .cmp(&b.submission_timestamp)
                .then_with(|| a.id.cmp(&b.id))
        }),
        ReportSort::MostUpvotes => reports.sort_by(|a, b| {
            b.upvote_count
                .cmp(&a.upvote_count)
                .then_with(|| b.submission_timestamp.cmp(&a.submission_timestamp))
                .then_with(|| b.id.cmp(&a.id))
        }),
        ReportSort::MostComments => reports.sort_by(|a, b| {
            b.comment_count
                .cmp(&a.comment_count)
                .then_with(|| b.submission_timestamp.cmp(&a.submission_timestamp))
                .then_with(|| b.id.cmp(&a.id))
        }),
    }
}

fn matches_search(report: &Report, needle: &str) -> bool {
    [
        report.reporter_name.as_str(),
        report.reporter_barangay.as_str(),
        report.issue_category.as_str(),
        report.issue_description.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Report service.
#[derive(Clone)]
pub struct ReportService {
    report_store: ReportStore,
    verification: VerificationService,
    limits: SubmissionConfig,
}

impl ReportService {
    /// Create a new report service.
    #[must_use]
    pub const fn new(
        report_store: ReportStore,
        verification: VerificationService,
        limits: SubmissionConfig,
    ) -> Self {
        Self {
            report_store,
            verification,
            limits,
        }
    }

    /// Validate a submission, spend its verification token and store it.
    pub async fn submit(&self, input: SubmitReportInput) -> AppResult<Report> {
        input.validate()?;

        let reporter_name = required("Name", &input.reporter_name)?;
        if !phone::is_valid(&input.reporter_phone_number) {
            return Err(AppError::Validation(format!(
                "Phone number must have {} digits",
                phone::PHONE_DIGITS
            )));
        }
        let issue_description = required("Description", &input.issue_description)?;
        if issue_description.chars().count() > self.limits.max_description_length {
            return Err(AppError::Validation(format!(
                "Description must be at most {} characters",
                self.limits.max_description_length
            )));
        }
        let street = required("Street", &input.street)?;
        let landmark = required("Landmark", &input.landmark)?;

        if input.images.is_empty() {
            return Err(AppError::Validation(
                "At least one image is required".to_string(),
            ));
        }
        if input.images.len() > self.limits.max_images {
            return Err(AppError::Validation(format!(
                "At most {} images are allowed",
                self.limits.max_images
            )));
        }
        if input
            .images
            .iter()
            .any(|img| img.url.trim().is_empty() || img.thumbnail.trim().is_empty())
        {
            return Err(AppError::Validation(
                "Every image needs a url and a thumbnail".to_string(),
            ));
        }

        self.verification
            .consume(&input.verification_token, &input.reporter_phone_number)
            .await?;

        self.report_store
            .create(NewReport {
                reporter_name,
                reporter_phone_number: phone::normalize(&input.reporter_phone_number),
                reporter_barangay: input.reporter_barangay,
                issue_description,
                issue_category: input.issue_category,
                latitude: input.latitude,
                longitude: input.longitude,
                street: Some(street),
                landmark: Some(landmark),
                images: input.images,
            })
            .await
    }

    /// All reports in `sort` order.
    pub async fn list(&self, sort: ReportSort) -> Vec<Report> {
        let mut reports = self.report_store.list().await;
        sort_reports(&mut reports, sort);
        reports
    }

    /// Get a report by ID.
    pub async fn get(&self, id: &str) -> AppResult<Report> {
        self.report_store.get(id).await
    }

    /// Upvote a report.
    pub async fn upvote(&self, id: &str) -> AppResult<Report> {
        self.report_store.upvote(id).await
    }

    /// Set a report's status.
    pub async fn update_status(&self, id: &str, status: ReportStatus) -> AppResult<Report> {
        self.report_store.update_status(id, status).await
    }

    /// Delete a report and its comments.
    pub async fn delete(&self, id: &str) -> AppResult<Report> {
        self.report_store.delete(id).await
    }

    /// Filter, search and sort reports for the dashboard.
    pub async fn query(&self, query: &ReportQuery) -> Vec<Report> {
        let needle = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let mut reports: Vec<Report> = self
            .report_store
            .list()
            .await
            .into_iter()
            .filter(|r| query.status.is_none_or(|status| r.status == status))
            .filter(|r| needle.as_deref().is_none_or(|n| matches_search(r, n)))
            .collect();

        sort_reports(&mut reports, query.sort);
        reports
    }

    /// Report totals per status.
    pub async fn stats(&self) -> ReportStats {
        let reports = self.report_store.list().await;
        let by_status = ReportStatus::ALL
            .into_iter()
            .map(|status| StatusCount {
                status,
                count: reports.iter().filter(|r| r.status == status).count(),
            })
            .collect();

        ReportStats {
            total: reports.len(),
            open: reports.iter().filter(|r| !r.status.is_terminal()).count(),
            by_status,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::services::verification::DEMO_CODE;
    use chrono::{Duration, TimeZone, Utc};
    use ecoreport_common::{ManualClock, SharedClock, config::VerificationConfig};
    use ecoreport_db::Database;
    use std::sync::Arc;

    struct Fixture {
        service: ReportService,
        verification: VerificationService,
        clock: ManualClock,
    }

    fn fixture() -> Fixture {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2025, 4, 1, 10, 30, 0).unwrap());
        let shared: SharedClock = Arc::new(clock.clone());
        let db = Database::with_clock(shared.clone());
        let verification = VerificationService::new(VerificationConfig::default(), shared);
        let service = ReportService::new(
            db.reports(),
            verification.clone(),
            SubmissionConfig::default(),
        );
        Fixture {
            service,
            verification,
            clock,
        }
    }

    async fn token(verification: &VerificationService, phone_number: &str) -> String {
        let challenge = verification.request_code(phone_number).await.unwrap();
        verification
            .verify(&challenge.challenge_id, DEMO_CODE)
            .await
            .unwrap()
            .token
    }

    fn input(verification_token: String) -> SubmitReportInput {
        SubmitReportInput {
            reporter_name: " Juan Dela Cruz ".to_string(),
            reporter_phone_number: "0912-345-6789".to_string(),
            reporter_barangay: Barangay::Landayan,
            issue_description: "Large pile of garbage dumped near the creek.".to_string(),
            issue_category: IssueCategory::IllegalDumping,
            latitude: 14.355_573,
            longitude: 121.055_078,
            street: "National Road".to_string(),
            landmark: "Landayan bridge".to_string(),
            images: vec![ReportImage {
                url: "https://img.example/1.jpg".to_string(),
                thumbnail: "https://img.example/1_t.jpg".to_string(),
            }],
            verification_token,
        }
    }

    type Edit = Box<dyn FnOnce(&mut SubmitReportInput)>;

    fn edit(f: impl FnOnce(&mut SubmitReportInput) + 'static) -> Edit {
        Box::new(f)
    }

    async fn submit_with(
        f: &Fixture,
        change: impl FnOnce(&mut SubmitReportInput),
    ) -> AppResult<Report> {
        let mut input = input(token(&f.verification, "09123456789").await);
        change(&mut input);
        f.service.submit(input).await
    }

    #[tokio::test]
    async fn test_submit_stores_normalized_report() {
        let f = fixture();
        let report = submit_with(&f, |_| {}).await.unwrap();

        assert_eq!(report.reporter_name, "Juan Dela Cruz");
        assert_eq!(report.reporter_phone_number, "09123456789");
        assert_eq!(report.status, ReportStatus::Reported);
        assert_eq!(report.street.as_deref(), Some("National Road"));
        assert_eq!(f.service.get(&report.id).await.unwrap(), report);
    }

    #[tokio::test]
    async fn test_submit_rejects_invalid_fields() {
        let f = fixture();
        let cases = [
            edit(|i| i.reporter_name = "  ".to_string()),
            edit(|i| i.reporter_phone_number = "0912345".to_string()),
            edit(|i| i.issue_description = String::new()),
            edit(|i| i.issue_description = "x".repeat(2001)),
            edit(|i| i.street = String::new()),
            edit(|i| i.landmark = " ".to_string()),
            edit(|i| i.images.clear()),
            edit(|i| i.images = vec![i.images[0].clone(); 4]),
            edit(|i| i.images[0].thumbnail = String::new()),
            edit(|i| i.latitude = 91.0),
            edit(|i| i.longitude = -180.5),
        ];

        for edit in cases {
            let result = submit_with(&f, edit).await;
            assert!(matches!(result, Err(AppError::Validation(_))), "{result:?}");
        }
        assert!(f.service.list(ReportSort::Newest).await.is_empty());
    }

    #[tokio::test]
    async fn test_submit_requires_matching_verification() {
        let f = fixture();
        let other = token(&f.verification, "09876543210").await;

        let result = f.service.submit(input(other)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        let result = f.service.submit(input("made-up".to_string())).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_query_filters_searches_and_sorts() {
        let f = fixture();
        let first = submit_with(&f, |_| {}).await.unwrap();
        f.clock.advance(Duration::hours(1));
        let second = submit_with(&f, |i| {
            i.reporter_name = "Maria Santos".to_string();
            i.reporter_barangay = Barangay::SanVicente;
            i.issue_category = IssueCategory::BlockedDrainage;
            i.issue_description = "Clogged canal".to_string();
        })
        .await
        .unwrap();
        f.service.upvote(&first.id).await.unwrap();
        f.service
            .update_status(&second.id, ReportStatus::Verified)
            .await
            .unwrap();

        let ids = |reports: Vec<Report>| reports.into_iter().map(|r| r.id).collect::<Vec<_>>();

        let newest = f.service.query(&ReportQuery::default()).await;
        assert_eq!(ids(newest), vec![second.id.clone(), first.id.clone()]);

        let oldest = ReportQuery {
            sort: ReportSort::Oldest,
            ..ReportQuery::default()
        };
        assert_eq!(ids(f.service.query(&oldest).await), vec![first.id.clone(), second.id.clone()]);

        let popular = ReportQuery {
            sort: ReportSort::MostUpvotes,
            ..ReportQuery::default()
        };
        assert_eq!(ids(f.service.query(&popular).await)[0], first.id);

        let verified = ReportQuery {
            status: Some(ReportStatus::Verified),
            ..ReportQuery::default()
        };
        assert_eq!(ids(f.service.query(&verified).await), vec![second.id.clone()]);

        for term in ["san vicente", "DRAINAGE", "maria", "canal"] {
            let search = ReportQuery {
                search: Some(term.to_string()),
                ..ReportQuery::default()
            };
            assert_eq!(ids(f.service.query(&search).await), vec![second.id.clone()], "{term}");
        }

        let blank = ReportQuery {
            search: Some("   ".to_string()),
            ..ReportQuery::default()
        };
        assert_eq!(f.service.query(&blank).await.len(), 2);
    }

    #[tokio::test]
    async fn test_stats_counts_every_status() {
        let f = fixture();
        let a = submit_with(&f, |_| {}).await.unwrap();
        submit_with(&f, |_| {}).await.unwrap();
        f.service
            .update_status(&a.id, ReportStatus::Resolved)
            .await
            .unwrap();

        let stats = f.service.stats().await;
        assert_eq!(stats.total, 2);
        assert_eq!(stats.open, 1);
        assert_eq!(stats.by_status.len(), ReportStatus::ALL.len());

        let count = |status: ReportStatus| {
            stats
                .by_status
                .iter()
                .find(|c| c.status == status)
                .unwrap()
                .count
        };
        assert_eq!(count(ReportStatus::Reported), 1);
        assert_eq!(count(ReportStatus::Resolved), 1);
        assert_eq!(count(ReportStatus::Verified), 0);
    }

    #[test]
    fn test_sort_deserializes_kebab_case() {
        let query: ReportQuery =
            serde_json::from_str(r#"{"sort":"most-upvotes","status":"Action Taken"}"#).unwrap();
        assert_eq!(query.sort, ReportSort::MostUpvotes);
        assert_eq!(query.status, Some(ReportStatus::ActionTaken));
    }

    #[test]
    fn test_sort_defaults_to_newest() {
        let query: ReportQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.sort, ReportSort::Newest);
        let sort: ReportSort = serde_json::from_str(r#""most-comments""#).unwrap();
        assert_eq!(sort, ReportSort::MostComments);
    }
}
