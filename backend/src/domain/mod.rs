//! Domain primitives, aggregation logic, and discovery services.
//!
//! Purpose: define the recipe-sharing entities and the analytics computed
//! over them. Services receive an explicit [`ports::EntityStore`] handle at
//! construction and never persist derived values; every ranking, average,
//! and statistic is recomputed from the store on demand.
//!
//! Public surface:
//! - Entities and value objects (`User`, `Recipe`, `Ingredient`, `Rating`,
//!   the id newtypes, `Score`, `Difficulty`, `TimeWindow`).
//! - Aggregation helpers (`average_score`, `group_by_recipe`,
//!   `annotate_with_poster`, `similar_recipes`, `compute_stats`).
//! - Services implementing the driving ports in [`ports`].
//! - `Error` and `ErrorCode`, the transport-agnostic failure payload.

pub mod ports;

mod error;
mod ids;
mod ingredient;
mod ingredient_resolver;
mod ranking_service;
mod rating;
mod rating_aggregator;
mod rating_service;
mod recipe;
mod recipe_command_service;
mod recipe_detail;
mod recipe_detail_service;
mod search_service;
mod similarity;
mod stats_service;
mod store_error;
mod time_window;
mod trace_id;
mod user;

#[cfg(test)]
pub(crate) mod fixtures;

pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::ids::{IdValidationError, IngredientId, RatingId, RecipeId, UserId};
pub use self::ingredient::{Ingredient, IngredientName, IngredientNameValidationError};
pub use self::ingredient_resolver::IngredientResolver;
pub use self::ranking_service::RecipeRankingService;
pub use self::rating::{
    DELETED_RECIPE, Rating, RatingDetail, RatingDraft, RatingWithPoster, Score,
    ScoreValidationError,
};
pub use self::rating_aggregator::{
    RatingAggregator, annotate_with_poster, average_score, group_by_recipe, mean,
};
pub use self::rating_service::RatingService;
pub use self::recipe::{
    Difficulty, DifficultyParseError, IngredientInput, Recipe, RecipeDraft, RecipeIngredient,
    RecipeValidationError, ValidRecipeDraft,
};
pub use self::recipe_command_service::RecipeCommandService;
pub use self::recipe_detail::{DetailedIngredient, RecipeDetail, RecipeDetailComposer};
pub use self::recipe_detail_service::RecipeDetailService;
pub use self::search_service::RecipeSearchService;
pub use self::similarity::similar_recipes;
pub use self::stats_service::{RecipeStatsService, TOP_CONTRIBUTORS, compute_stats};
pub use self::time_window::{CreationRange, TimeWindow, TimeWindowError, trending_periods};
pub use self::trace_id::TraceId;
pub use self::user::{DELETED_USER, RecipeOwner, User, Username, UsernameValidationError};
