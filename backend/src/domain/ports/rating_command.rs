//! Driving ports for submitting and reading ratings.

use async_trait::async_trait;

use crate::domain::{Error, Rating, RatingDetail, RatingDraft, RatingId, UserId};

/// Use-case port for rating submission.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RatingCommand: Send + Sync {
    /// Record `user`'s rating. A second rating of the same recipe conflicts.
    async fn submit(&self, user: &UserId, draft: RatingDraft) -> Result<Rating, Error>;
}

/// Use-case port for rating lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RatingQuery: Send + Sync {
    /// Rating joined with its recipe title and poster name.
    async fn rating_detail(&self, id: &RatingId) -> Result<RatingDetail, Error>;
}
