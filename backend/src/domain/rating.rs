//! Ratings users leave on recipes.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{RatingId, RecipeId, UserId};

/// Recipe title shown on a rating whose recipe no longer exists.
pub const DELETED_RECIPE: &str = "Deleted recipe";

/// Raised when a score falls outside `0..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("score must be between 0 and 5 (got {value})")]
pub struct ScoreValidationError {
    value: i64,
}

/// Rating score, an integer from 0 to 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    /// Lowest possible score.
    pub const MIN: Self = Self(0);
    /// Highest possible score.
    pub const MAX: Self = Self(5);

    /// Validate a raw score.
    pub fn new(value: i64) -> Result<Self, ScoreValidationError> {
        u8::try_from(value)
            .ok()
            .filter(|score| *score <= Self::MAX.0)
            .map(Self)
            .ok_or(ScoreValidationError { value })
    }

    /// Raw score value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Score {
    type Error = ScoreValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Rating entity. At most one exists per (recipe, user) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    /// Stable identifier.
    pub id: RatingId,
    /// Score between 0 and 5.
    pub score: Score,
    /// Optional free-text review.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Rated recipe.
    pub recipe_id: RecipeId,
    /// Author of the rating.
    pub user_id: UserId,
    /// When the rating was recorded.
    pub created_at: DateTime<Utc>,
}

/// Rating annotated with the display name of the user who posted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingWithPoster {
    /// The stored rating.
    #[serde(flatten)]
    pub rating: Rating,
    /// Display name of the author, or `Deleted User`.
    pub poster: String,
}

/// Rating joined with its recipe title and poster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingDetail {
    /// The stored rating.
    #[serde(flatten)]
    pub rating: Rating,
    /// Title of the rated recipe, or `Deleted recipe`.
    pub recipe_title: String,
    /// Display name of the author, or `Deleted User`.
    pub poster: String,
}

/// Unvalidated rating submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingDraft {
    /// Recipe being rated.
    pub recipe_id: RecipeId,
    /// Raw score, validated into a [`Score`].
    pub score: i64,
    /// Optional free-text review.
    #[serde(default)]
    pub comment: Option<String>,
}
