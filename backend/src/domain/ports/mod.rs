//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) describe what the engine needs from the
//! entity store. Driving ports (`*Query`, `*Command`) describe the use-cases
//! inbound adapters call.

mod macros;
pub(crate) use macros::define_port_error;

mod entity_store;
mod ingredient_repository;
mod rating_command;
mod rating_repository;
mod recipe_command;
mod recipe_detail_query;
mod recipe_ranking_query;
mod recipe_repository;
mod recipe_search_query;
mod recipe_stats_query;
mod user_repository;

pub use entity_store::{EntityStore, EntityStoreError};
#[cfg(test)]
pub use ingredient_repository::MockIngredientRepository;
pub use ingredient_repository::{IngredientFilter, IngredientRepository};
pub use rating_command::{RatingCommand, RatingQuery};
#[cfg(test)]
pub use rating_command::{MockRatingCommand, MockRatingQuery};
#[cfg(test)]
pub use rating_repository::MockRatingRepository;
pub use rating_repository::{RatingFilter, RatingRepository};
#[cfg(test)]
pub use recipe_command::MockRecipeCommand;
pub use recipe_command::RecipeCommand;
#[cfg(test)]
pub use recipe_detail_query::MockRecipeDetailQuery;
pub use recipe_detail_query::RecipeDetailQuery;
#[cfg(test)]
pub use recipe_ranking_query::MockRecipeRankingQuery;
pub use recipe_ranking_query::{
    DEFAULT_LIMIT, PopularRecipe, PopularRequest, RecipeRankingQuery, TrendingEntry,
    resolve_limit,
};
#[cfg(test)]
pub use recipe_repository::MockRecipeRepository;
pub use recipe_repository::{RecipeFilter, RecipeRepository};
#[cfg(test)]
pub use recipe_search_query::MockRecipeSearchQuery;
pub use recipe_search_query::{
    IngredientFilterRequest, IngredientMatch, RecipeSearchQuery, SearchCriteria,
};
#[cfg(test)]
pub use recipe_stats_query::MockRecipeStatsQuery;
pub use recipe_stats_query::{
    Contributor, DifficultyCount, IngredientUsage, RecipeStats, RecipeStatsQuery,
};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserFilter, UserRepository};
