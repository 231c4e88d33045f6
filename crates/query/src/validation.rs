//! Validation of review submissions.
//!
//! Checks run in a fixed order and the first failure wins, so a request
//! with several problems always reports the same one.

use serde::Deserialize;
use thiserror::Error;

/// A review as submitted by a user, before validation
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    pub user_name: Option<String>,
    pub rating: i32,
    pub comment: Option<String>,
}

/// Why a review submission was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewRejection {
    #[error("User name is required")]
    MissingUserName,

    #[error("Rating must be between 1 and 5 stars")]
    RatingOutOfRange,

    #[error("Review comment is required")]
    MissingComment,

    #[error("Review must be at least 5 words")]
    CommentTooShort,
}

pub const MIN_COMMENT_WORDS: usize = 5;

type Check = fn(&ReviewRequest) -> Result<(), ReviewRejection>;

const CHECKS: [Check; 4] = [
    check_user_name,
    check_rating,
    check_comment_present,
    check_comment_length,
];

/// Run every check in order, stopping at the first failure
pub fn validate_review(request: &ReviewRequest) -> Result<(), ReviewRejection> {
    CHECKS.iter().try_for_each(|check| check(request))
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

fn check_user_name(request: &ReviewRequest) -> Result<(), ReviewRejection> {
    if is_blank(request.user_name.as_deref()) {
        return Err(ReviewRejection::MissingUserName);
    }
    Ok(())
}

fn check_rating(request: &ReviewRequest) -> Result<(), ReviewRejection> {
    if !(1..=5).contains(&request.rating) {
        return Err(ReviewRejection::RatingOutOfRange);
    }
    Ok(())
}

fn check_comment_present(request: &ReviewRequest) -> Result<(), ReviewRejection> {
    if is_blank(request.comment.as_deref()) {
        return Err(ReviewRejection::MissingComment);
    }
    Ok(())
}

fn check_comment_length(request: &ReviewRequest) -> Result<(), ReviewRejection> {
    let words = request
        .comment
        .as_deref()
        .map_or(0, |c| c.split_whitespace().count());
    if words < MIN_COMMENT_WORDS {
        return Err(ReviewRejection::CommentTooShort);
    }
    Ok(())
}
