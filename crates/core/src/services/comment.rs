//! Comment service.

use ecoreport_common::{AppError, AppResult, config::SubmissionConfig};
use ecoreport_db::{
    entities::{Barangay, Comment, comment::NewComment},
    repositories::CommentStore,
};
use serde::Deserialize;
use validator::Validate;

use super::verification::VerificationService;
use crate::phone;

/// Input for commenting on a report.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitCommentInput {
    #[validate(length(min = 1))]
    pub report_id: String,
    #[validate(length(max = 100))]
    pub commenter_name: String,
    pub commenter_phone_number: String,
    pub commenter_barangay: Barangay,
    pub comment_text: String,
    pub verification_token: String,
}

/// Comment service.
#[derive(Clone)]
pub struct CommentService {
    comment_store: CommentStore,
    verification: VerificationService,
    limits: SubmissionConfig,
}

impl CommentService {
    /// Create a new comment service.
    #[must_use]
    pub const fn new(
        comment_store: CommentStore,
        verification: VerificationService,
        limits: SubmissionConfig,
    ) -> Self {
        Self {
            comment_store,
            verification,
            limits,
        }
    }

    /// Validate a comment, spend its verification token and attach it.
    ///
    /// If the report is gone by the time the comment is stored, the token is
    /// handed back so the commenter can use it elsewhere.
    pub async fn submit(&self, input: SubmitCommentInput) -> AppResult<Comment> {
        input.validate()?;

        let commenter_name = input.commenter_name.trim();
        if commenter_name.is_empty() {
            return Err(AppError::Validation("Name is required".to_string()));
        }
        if !phone::is_valid(&input.commenter_phone_number) {
            return Err(AppError::Validation(format!(
                "Phone number must have {} digits",
                phone::PHONE_DIGITS
            )));
        }
        let comment_text = input.comment_text.trim();
        if comment_text.is_empty() {
            return Err(AppError::Validation("Comment is required".to_string()));
        }
        if comment_text.chars().count() > self.limits.max_comment_length {
            return Err(AppError::Validation(format!(
                "Comment must be at most {} characters",
                self.limits.max_comment_length
            )));
        }

        let spent = self
            .verification
            .consume(&input.verification_token, &input.commenter_phone_number)
            .await?;

        let result = self
            .comment_store
            .create(NewComment {
                report_id: input.report_id,
                commenter_name: commenter_name.to_string(),
                commenter_phone_number: phone::normalize(&input.commenter_phone_number),
                commenter_barangay: input.commenter_barangay,
                comment_text: comment_text.to_string(),
            })
            .await;

        if let Err(AppError::ReportNotFound(_)) = &result {
            self.verification.refund(spent).await;
        }
        result
    }

    /// Comments on a report, newest first.
    pub async fn list(&self, report_id: &str) -> Vec<Comment> {
        self.comment_store.list_by_report(report_id).await
    }

    /// Delete a comment.
    pub async fn delete(&self, id: &str) -> AppResult<Comment> {
        self.comment_store.delete(id).await
    }
}
