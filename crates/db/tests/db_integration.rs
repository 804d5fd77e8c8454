//! Store integration tests.
//!
//! Drive `ReportStore` and `CommentStore` together through the public API and
//! check the cascade behaviour end to end.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use ecoreport_common::AppError;
use ecoreport_db::{
    Database,
    entities::{
        Barangay, IssueCategory, ReportImage, ReportStatus, comment::NewComment,
        report::NewReport,
    },
};

fn new_report(images: Vec<ReportImage>) -> NewReport {
    NewReport {
        reporter_name: "Juan Dela Cruz".to_string(),
        reporter_phone_number: "09123456789".to_string(),
        reporter_barangay: Barangay::Landayan,
        issue_description: "Large pile of garbage dumped near the creek.".to_string(),
        issue_category: IssueCategory::IllegalDumping,
        latitude: 14.355_573,
        longitude: 121.055_078,
        street: Some("National Road".to_string()),
        landmark: Some("Landayan bridge".to_string()),
        images,
    }
}

fn img1() -> Vec<ReportImage> {
    vec![ReportImage {
        url: "https://img.example/img1.jpg".to_string(),
        thumbnail: "https://img.example/img1_thumb.jpg".to_string(),
    }]
}

fn new_comment(report_id: &str) -> NewComment {
    NewComment {
        report_id: report_id.to_string(),
        commenter_name: "Pedro Penduko".to_string(),
        commenter_phone_number: "09123498765".to_string(),
        commenter_barangay: Barangay::Landayan,
        comment_text: "I also saw this yesterday.".to_string(),
    }
}

#[tokio::test]
async fn test_new_report_defaults() {
    let db = Database::new();
    let report = db.reports().create(new_report(img1())).await.unwrap();

    assert_eq!(report.status, ReportStatus::Reported);
    assert_eq!(report.comment_count, 0);
    assert_eq!(report.upvote_count, 0);
    assert_eq!(report.images, img1());
    assert_eq!(report.submission_timestamp, report.last_updated_timestamp);
}

#[tokio::test]
async fn test_double_upvote_counts_twice() {
    let db = Database::new();
    let reports = db.reports();
    let report = reports.create(new_report(img1())).await.unwrap();

    reports.upvote(&report.id).await.unwrap();
    let after = reports.upvote(&report.id).await.unwrap();

    assert_eq!(after.upvote_count, 2);
    assert_eq!(reports.get(&report.id).await.unwrap().upvote_count, 2);
}

#[tokio::test]
async fn test_comment_on_live_and_missing_report() {
    let db = Database::new();
    let report = db.reports().create(new_report(img1())).await.unwrap();

    db.comments().create(new_comment(&report.id)).await.unwrap();
    assert_eq!(db.reports().get(&report.id).await.unwrap().comment_count, 1);

    let result = db.comments().create(new_comment("missing")).await;
    assert!(matches!(result, Err(AppError::ReportNotFound(_))));
    assert_eq!(db.reports().get(&report.id).await.unwrap().comment_count, 1);
}

#[tokio::test]
async fn test_create_then_delete_comment() {
    let db = Database::new();
    let report = db.reports().create(new_report(img1())).await.unwrap();
    let comment = db.comments().create(new_comment(&report.id)).await.unwrap();

    let removed = db.comments().delete(&comment.id).await.unwrap();
    assert_eq!(removed, comment);
    assert_eq!(db.reports().get(&report.id).await.unwrap().comment_count, 0);
    assert!(matches!(
        db.comments().get(&comment.id).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_delete_report_cascades_to_comments() {
    let db = Database::new();
    let report = db.reports().create(new_report(img1())).await.unwrap();
    let c1 = db.comments().create(new_comment(&report.id)).await.unwrap();
    let c2 = db.comments().create(new_comment(&report.id)).await.unwrap();

    let deleted = db.reports().delete(&report.id).await.unwrap();
    assert_eq!(deleted.id, report.id);
    assert_eq!(deleted.comment_count, 2);

    assert!(matches!(
        db.reports().get(&report.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(db.comments().list_by_report(&report.id).await.is_empty());
    assert!(db.comments().get(&c1.id).await.is_err());
    assert!(db.comments().get(&c2.id).await.is_err());
    assert!(matches!(
        db.comments().delete(&c1.id).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_delete_report_leaves_other_reports_alone() {
    let db = Database::new();
    let doomed = db.reports().create(new_report(img1())).await.unwrap();
    let kept = db.reports().create(new_report(img1())).await.unwrap();
    db.comments().create(new_comment(&doomed.id)).await.unwrap();
    let survivor = db.comments().create(new_comment(&kept.id)).await.unwrap();

    db.reports().delete(&doomed.id).await.unwrap();

    assert_eq!(
        db.comments().list_by_report(&kept.id).await,
        vec![survivor]
    );
    assert_eq!(db.reports().get(&kept.id).await.unwrap().comment_count, 1);
    assert_eq!(db.reports().list().await.len(), 1);
}

#[tokio::test]
async fn test_resolved_back_to_reported() {
    let db = Database::new();
    let reports = db.reports();
    let report = reports.create(new_report(img1())).await.unwrap();

    reports
        .update_status(&report.id, ReportStatus::Resolved)
        .await
        .unwrap();
    let reopened = reports
        .update_status(&report.id, ReportStatus::Reported)
        .await
        .unwrap();

    assert_eq!(reopened.status, ReportStatus::Reported);
}

#[tokio::test]
async fn test_every_status_reachable_from_every_status() {
    let db = Database::new();
    let reports = db.reports();
    let report = reports.create(new_report(img1())).await.unwrap();

    for from in ReportStatus::ALL {
        for to in ReportStatus::ALL {
            reports.update_status(&report.id, from).await.unwrap();
            let updated = reports.update_status(&report.id, to).await.unwrap();
            assert_eq!(updated.status, to, "{from} -> {to}");
        }
    }
}

#[tokio::test]
async fn test_reads_are_repeatable() {
    let db = Database::new();
    let report = db.reports().create(new_report(img1())).await.unwrap();
    db.comments().create(new_comment(&report.id)).await.unwrap();

    let first = db.reports().get(&report.id).await.unwrap();
    let second = db.reports().get(&report.id).await.unwrap();
    assert_eq!(first, second);

    let listed_once = db.comments().list_by_report(&report.id).await;
    let listed_twice = db.comments().list_by_report(&report.id).await;
    assert_eq!(listed_once, listed_twice);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_comment_storm_keeps_count_exact() {
    let db = Database::new();
    let report = db.reports().create(new_report(img1())).await.unwrap();

    let mut handles = Vec::new();
    for i in 0..64 {
        let db = db.clone();
        let report_id = report.id.clone();
        handles.push(tokio::spawn(async move {
            let comment = db.comments().create(new_comment(&report_id)).await?;
            db.reports().upvote(&report_id).await?;
            if i % 2 == 0 {
                db.comments().delete(&comment.id).await?;
            }
            Ok::<_, AppError>(())
        }));
    }
    for handle in handles {
        handle.await.expect("task panicked").unwrap();
    }

    let after = db.reports().get(&report.id).await.unwrap();
    let live = db.comments().list_by_report(&report.id).await;
    assert_eq!(after.comment_count, 32);
    assert_eq!(live.len(), 32);
    assert_eq!(after.upvote_count, 64);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_delete_racing_comments_never_orphans() {
    let db = Database::new();
    let report = db.reports().create(new_report(img1())).await.unwrap();

    let mut handles = Vec::new();
    for _ in 0..32 {
        let db = db.clone();
        let report_id = report.id.clone();
        handles.push(tokio::spawn(async move {
            // Either lands before the delete or fails with ReportNotFound
            match db.comments().create(new_comment(&report_id)).await {
                Ok(_) | Err(AppError::ReportNotFound(_)) => {}
                Err(other) => panic!("unexpected error: {other}"),
            }
        }));
    }
    let deleter = {
        let db = db.clone();
        let report_id = report.id.clone();
        tokio::spawn(async move { db.reports().delete(&report_id).await })
    };

    for handle in handles {
        handle.await.expect("task panicked");
    }
    deleter.await.expect("task panicked").unwrap();

    assert!(db.comments().list_by_report(&report.id).await.is_empty());
}
