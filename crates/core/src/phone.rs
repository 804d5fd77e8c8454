//! Phone number helpers and the public redaction of contact details.

use std::sync::LazyLock;

use ecoreport_db::entities::{Comment, Report};
use regex::Regex;

/// Number of digits in a Philippine mobile number (`09XXXXXXXXX`).
pub const PHONE_DIGITS: usize = 11;

/// Digits left visible by [`mask`].
const VISIBLE_DIGITS: usize = 4;

#[allow(clippy::unwrap_used)]
static NON_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9]").unwrap());

/// Strip everything but ASCII digits.
#[must_use]
pub fn normalize(raw: &str) -> String {
    NON_DIGIT.replace_all(raw, "").into_owned()
}

/// Whether `raw` holds exactly [`PHONE_DIGITS`] ASCII digits once formatting is stripped.
#[must_use]
pub fn is_valid(raw: &str) -> bool {
    normalize(raw).chars().count() == PHONE_DIGITS
}

/// Replace every digit but the last four with `*`, keeping formatting characters.
#[must_use]
pub fn mask(raw: &str) -> String {
    let digits = raw.chars().filter(char::is_ascii_digit).count();
    let hidden = digits.saturating_sub(VISIBLE_DIGITS);

    let mut seen = 0;
    raw.chars()
        .map(|c| {
            if c.is_ascii_digit() {
                seen += 1;
                if seen <= hidden {
                    return '*';
                }
            }
            c
        })
        .collect()
}

/// Shorten a name to its first word and the initial of its last word.
///
/// `"Juan Dela Cruz"` becomes `"Juan C."`. A single-word name is returned as is.
#[must_use]
pub fn short_name(full_name: &str) -> String {
    let mut words = full_name.split_whitespace();
    let Some(first) = words.next() else {
        return String::new();
    };
    match words.next_back().and_then(|last| last.chars().next()) {
        Some(initial) => format!("{first} {initial}."),
        None => first.to_string(),
    }
}

/// Public view of a report.
#[must_use]
pub fn redact_report(mut report: Report) -> Report {
    report.reporter_phone_number = mask(&report.reporter_phone_number);
    report
}

/// Public view of a comment.
#[must_use]
pub fn redact_comment(mut comment: Comment) -> Comment {
    comment.commenter_name = short_name(&comment.commenter_name);
    comment.commenter_phone_number = mask(&comment.commenter_phone_number);
    comment
}
