//! HTTP inbound adapter exposing the discovery engine under `/api/v1`.

pub mod error;
pub mod health;
pub mod ratings;
pub mod recipe_mutations;
pub mod recipes;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub(crate) mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register the API routes and extractor error handlers on a scope.
///
/// Fixed `/recipes/...` paths are registered before `/recipes/{id}`.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use dishared::inbound::http::configure_api;
///
/// let _app = App::new().service(web::scope("/api/v1").configure(configure_api));
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    validation::configure_extractors(cfg);
    cfg.service(recipes::search_recipes)
        .service(recipes::latest_recipes)
        .service(recipes::popular_recipes)
        .service(recipes::trending_recipes)
        .service(recipes::recipe_stats)
        .service(recipes::recipes_with_ingredients)
        .service(recipes::recipes_without_ingredients)
        .service(recipes::recipes_by_user)
        .service(recipes::similar_recipes)
        .service(recipe_mutations::create_recipe)
        .service(recipes::recipe_detail)
        .service(recipe_mutations::update_recipe)
        .service(recipe_mutations::delete_recipe)
        .service(ratings::submit_rating)
        .service(ratings::rating_detail);
}
