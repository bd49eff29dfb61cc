//! Rating submission and lookup.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::info;

use super::ports::{EntityStore, EntityStoreError, RatingCommand, RatingQuery};
use super::store_error::map_store_error;
use super::{
    DELETED_RECIPE, DELETED_USER, Error, Rating, RatingDetail, RatingDraft, RatingId, Score,
    UserId,
};

/// Service implementing [`RatingCommand`] and [`RatingQuery`].
#[derive(Clone)]
pub struct RatingService {
    store: EntityStore,
    clock: Arc<dyn Clock>,
}

impl RatingService {
    /// Create the service. `clock` stamps `created_at` on new ratings.
    pub fn new(store: EntityStore, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }
}

#[async_trait]
impl RatingCommand for RatingService {
    async fn submit(&self, user: &UserId, draft: RatingDraft) -> Result<Rating, Error> {
        let score = Score::new(draft.score).map_err(|err| {
            Error::invalid_request(err.to_string()).with_details(json!({ "field": "score" }))
        })?;
        let recipe_id = draft.recipe_id;
        if self
            .store
            .recipes
            .find_by_id(&recipe_id)
            .await
            .map_err(map_store_error)?
            .is_none()
        {
            return Err(Error::not_found(format!("recipe {recipe_id} not found")));
        }

        let rating = Rating {
            id: RatingId::random(),
            score,
            comment: draft.comment,
            recipe_id,
            user_id: *user,
            created_at: self.clock.utc(),
        };
        match self.store.ratings.insert_unique(&rating).await {
            Ok(()) => {
                info!(rating_id = %rating.id, recipe_id = %recipe_id, "rating recorded");
                Ok(rating)
            }
            Err(EntityStoreError::Conflict { .. }) => Err(Error::conflict(
                "user has already rated this recipe",
            )
            .with_details(json!({ "recipeId": recipe_id, "userId": user }))),
            Err(err) => Err(map_store_error(err)),
        }
    }
}

#[async_trait]
impl RatingQuery for RatingService {
    async fn rating_detail(&self, id: &RatingId) -> Result<RatingDetail, Error> {
        let rating = self
            .store
            .ratings
            .find_by_id(id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::not_found(format!("rating {id} not found")))?;
        let recipe_title = self
            .store
            .recipes
            .find_by_id(&rating.recipe_id)
            .await
            .map_err(map_store_error)?
            .map_or_else(|| DELETED_RECIPE.to_owned(), |recipe| recipe.title);
        let poster = self
            .store
            .users
            .find_by_id(&rating.user_id)
            .await
            .map_err(map_store_error)?
            .map_or_else(|| DELETED_USER.to_owned(), |user| user.username.to_string());
        Ok(RatingDetail {
            rating,
            recipe_title,
            poster,
        })
    }
}

#[cfg(test)]
#[path = "rating_service_tests.rs"]
mod tests;
