//! Rating aggregation shared by rankings, statistics, and recipe detail.
//!
//! Averages are plain arithmetic means with no weighting. An empty input has
//! no average: the functions return `None` rather than dividing by zero.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use super::ports::{RatingFilter, RatingRepository};
use super::store_error::map_store_error;
use super::{DELETED_USER, Error, Rating, RatingWithPoster, RecipeId, User};

/// Arithmetic mean of `sum` over `count` items, or `None` when `count` is 0.
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    reason = "entity counts stay far below 2^52 so the conversion is exact"
)]
pub fn mean(sum: u64, count: usize) -> Option<f64> {
    (count > 0).then(|| sum as f64 / count as f64)
}

/// Mean score of `ratings`, or `None` when there are none.
///
/// # Examples
/// ```
/// use dishared::domain::average_score;
///
/// assert_eq!(average_score(&[]), None);
/// ```
#[must_use]
pub fn average_score(ratings: &[Rating]) -> Option<f64> {
    let sum = ratings
        .iter()
        .map(|rating| u64::from(rating.score.value()))
        .sum();
    mean(sum, ratings.len())
}

/// Group ratings by recipe, preserving input order within each group.
pub fn group_by_recipe(
    ratings: impl IntoIterator<Item = Rating>,
) -> BTreeMap<RecipeId, Vec<Rating>> {
    let mut groups: BTreeMap<RecipeId, Vec<Rating>> = BTreeMap::new();
    for rating in ratings {
        groups.entry(rating.recipe_id).or_default().push(rating);
    }
    groups
}

/// Attach each rating's poster username, falling back to "Deleted User".
#[must_use]
pub fn annotate_with_poster(ratings: Vec<Rating>, users: &[User]) -> Vec<RatingWithPoster> {
    let names: HashMap<_, _> = users
        .iter()
        .map(|user| (user.id, user.username.as_str()))
        .collect();
    ratings
        .into_iter()
        .map(|rating| {
            let poster = names
                .get(&rating.user_id)
                .map_or(DELETED_USER, |name| *name)
                .to_owned();
            RatingWithPoster { rating, poster }
        })
        .collect()
}

/// Store-backed access to a recipe's ratings.
#[derive(Clone)]
pub struct RatingAggregator {
    ratings: Arc<dyn RatingRepository>,
}

impl RatingAggregator {
    /// Create an aggregator over the rating repository.
    pub fn new(ratings: Arc<dyn RatingRepository>) -> Self {
        Self { ratings }
    }

    /// Every rating of `recipe`, in store order.
    pub async fn ratings_for(&self, recipe: &RecipeId) -> Result<Vec<Rating>, Error> {
        self.ratings
            .find(&RatingFilter::for_recipe(*recipe))
            .await
            .map_err(map_store_error)
    }

    /// Mean score of `recipe`, or `None` when it has no ratings.
    pub async fn average_for(&self, recipe: &RecipeId) -> Result<Option<f64>, Error> {
        let ratings = self.ratings_for(recipe).await?;
        Ok(average_score(&ratings))
    }
}

#[cfg(test)]
#[path = "rating_aggregator_tests.rs"]
mod tests;
