//! Demo records for development instances.
//!
//! Loaded through [`Database::restore`], so comment counters are derived from
//! the seeded comments rather than stored.

use chrono::{TimeZone, Utc};
use ecoreport_common::{AppError, AppResult, Timestamp};

use crate::database::Database;
use crate::entities::{
    Barangay, Comment, IssueCategory, Report, ReportImage, ReportStatus,
};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> AppResult<Timestamp> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .ok_or_else(|| AppError::Internal("Invalid fixture timestamp".to_string()))
}

fn image(url: &str) -> Vec<ReportImage> {
    vec![ReportImage {
        url: url.to_string(),
        thumbnail: url.to_string(),
    }]
}

fn report(
    id: &str,
    reporter: (&str, &str, Barangay),
    description: &str,
    category: IssueCategory,
    (latitude, longitude): (f64, f64),
    image_url: &str,
    status: ReportStatus,
    (submitted, updated): (Timestamp, Timestamp),
    upvote_count: u64,
) -> Report {
    Report {
        id: id.to_string(),
        reporter_name: reporter.0.to_string(),
        reporter_phone_number: reporter.1.to_string(),
        reporter_barangay: reporter.2,
        issue_description: description.to_string(),
        issue_category: category,
        latitude,
        longitude,
        street: None,
        landmark: None,
        images: image(image_url),
        status,
        submission_timestamp: submitted,
        last_updated_timestamp: updated,
        upvote_count,
        comment_count: 0,
    }
}

fn comment(
    id: &str,
    report_id: &str,
    commenter: (&str, &str, Barangay),
    text: &str,
    timestamp: Timestamp,
) -> Comment {
    Comment {
        id: id.to_string(),
        report_id: report_id.to_string(),
        commenter_name: commenter.0.to_string(),
        commenter_phone_number: commenter.1.to_string(),
        commenter_barangay: commenter.2,
        comment_text: text.to_string(),
        comment_timestamp: timestamp,
    }
}

/// The demo reports.
pub fn demo_reports() -> AppResult<Vec<Report>> {
    Ok(vec![
        report(
            "1",
            ("Juan Dela Cruz", "09123456789", Barangay::Landayan),
            "Large pile of garbage dumped near the creek. It's blocking water flow and causing bad odor in the area.",
            IssueCategory::IllegalDumping,
            (14.355_573, 121.055_078),
            "https://www.esc.nsw.gov.au/__data/assets/image/0011/164873/varieties/bannerLrg.jpg",
            ReportStatus::Reported,
            (at(2025, 4, 1, 10, 30)?, at(2025, 4, 1, 10, 30)?),
            5,
        ),
        report(
            "2",
            ("Maria Santos", "09876543210", Barangay::SanVicente),
            "Clogged canal causing flooding during rainy days. Water doesn't drain properly and creates stagnant pools.",
            IssueCategory::BlockedDrainage,
            (14.362_342, 121.048_741),
            "https://www.researchgate.net/profile/Lazarus-Justin/publication/344456427/figure/fig1/AS:942356937322507@1601686810670/Plastic-waste-blocking-drains.png",
            ReportStatus::Verified,
            (at(2025, 4, 2, 14, 15)?, at(2025, 4, 3, 9, 20)?),
            12,
        ),
        report(
            "3",
            ("Antonio Reyes", "09123456788", Barangay::Rosario),
            "Factory emitting dark smoke throughout the day. Air quality is poor and residents are complaining of respiratory issues.",
            IssueCategory::AirPollution,
            (14.358_127, 121.062_331),
            "https://www8.gmanews.tv/webpics/v3/2012/11/thumb-econ-pplant1.jpg",
            ReportStatus::ActionTaken,
            (at(2025, 3, 28, 8, 45)?, at(2025, 4, 4, 11, 10)?),
            25,
        ),
        report(
            "4",
            ("Elena Gomez", "09187654321", Barangay::SantoNino),
            "Water in the creek has turned greenish-black with visible oil slicks. Dead fish spotted floating on the surface.",
            IssueCategory::WaterPollution,
            (14.351_982, 121.057_266),
            "https://www.thegef.org/sites/default/files/Laguna-de-Bay-Tayuman-Bridge_870.jpg",
            ReportStatus::Resolved,
            (at(2025, 3, 25, 16, 20)?, at(2025, 4, 2, 13, 45)?),
            18,
        ),
        report(
            "5",
            ("Ramon Ortega", "09765432109", Barangay::Narra),
            "Community playground equipment is damaged. The slide has sharp edges and some bolts are loose, creating safety hazards for children.",
            IssueCategory::DamagedPublicFacility,
            (14.364_520, 121.053_185),
            "https://i0.wp.com/www.middleeastmonitor.com/wp-content/uploads/2024/10/GettyImages-2160516358.jpg?fit=1200%2C800&ssl=1",
            ReportStatus::Verified,
            (at(2025, 4, 3, 9, 10)?, at(2025, 4, 4, 8, 30)?),
            8,
        ),
    ])
}

/// The demo comments.
pub fn demo_comments() -> AppResult<Vec<Comment>> {
    Ok(vec![
        comment(
            "1",
            "1",
            ("Pedro Penduko", "09123498765", Barangay::Landayan),
            "I also saw this yesterday. It's getting worse and attracting stray animals.",
            at(2025, 4, 1, 15, 45)?,
        ),
        comment(
            "2",
            "1",
            ("Linda Garcia", "09567891234", Barangay::Landayan),
            "This has been a problem for weeks now. Please address this issue asap.",
            at(2025, 4, 2, 9, 30)?,
        ),
        comment(
            "3",
            "2",
            ("Miguel Castro", "09234567891", Barangay::SanVicente),
            "During the last heavy rain, the water reached our doorsteps because of this clogged canal.",
            at(2025, 4, 2, 18, 20)?,
        ),
        comment(
            "4",
            "2",
            ("Sophia Rivera", "09876123456", Barangay::SanRoque),
            "This affects the neighboring barangays too. We need proper drainage maintenance.",
            at(2025, 4, 3, 10, 15)?,
        ),
        comment(
            "5",
            "3",
            ("Ronaldo Mendoza", "09654321987", Barangay::Rosario),
            "My children have been coughing because of this. The smoke is worst in the evenings.",
            at(2025, 3, 29, 19, 45)?,
        ),
    ])
}

/// Replace the database contents with the demo records.
pub async fn seed_demo_data(db: &Database) -> AppResult<()> {
    db.restore(demo_reports()?, demo_comments()?).await
}
