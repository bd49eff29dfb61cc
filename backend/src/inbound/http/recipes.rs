//! Read-only recipe discovery endpoints.
//!
//! ```text
//! GET /api/v1/recipes?s=egg&difficulty=easy&timeMin=5&timeMax=30&minRating=3
//! GET /api/v1/recipes/latest?limit=5
//! GET /api/v1/recipes/popular?limit=5&year=2024&month=6
//! GET /api/v1/recipes/trending?limit=5
//! GET /api/v1/recipes/stats
//! GET /api/v1/recipes/ingredients?ings=eggs,salt
//! GET /api/v1/recipes/wo-ingredients?ings=sugar
//! GET /api/v1/recipes/user/{username}
//! GET /api/v1/recipes/similar/{id}
//! GET /api/v1/recipes/{id}
//! ```
//!
//! `/recipes/{id}` must be registered after every fixed `/recipes/...` path
//! so the literal segments win.

use actix_web::{get, web};
use serde::Deserialize;

use crate::domain::ports::{
    IngredientFilterRequest, IngredientMatch, PopularRecipe, PopularRequest, RecipeStats,
    SearchCriteria, TrendingEntry,
};
use crate::domain::{Difficulty, Error, Recipe, RecipeDetail, RecipeId, TimeWindow, Username};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{Reason, field_error, parse_id, parse_score, split_list};

/// Query string of `GET /recipes`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// Free-text needle matched against title and description.
    pub s: Option<String>,
    /// Difficulty name, matched case-insensitively.
    pub difficulty: Option<String>,
    /// Inclusive lower bound on preparation minutes.
    pub time_min: Option<u32>,
    /// Inclusive upper bound on preparation minutes.
    pub time_max: Option<u32>,
    /// Lowest individual score a matching rating may have.
    pub min_rating: Option<i64>,
    /// Highest individual score a matching rating may have.
    pub max_rating: Option<i64>,
}

impl TryFrom<SearchParams> for SearchCriteria {
    type Error = Error;

    fn try_from(params: SearchParams) -> Result<Self, Self::Error> {
        let difficulty = params
            .difficulty
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| {
                raw.parse::<Difficulty>().map_err(|err| {
                    field_error("difficulty", Reason::InvalidChoice, err.to_string())
                })
            })
            .transpose()?;
        Ok(Self {
            text: params
                .s
                .map(|text| text.trim().to_owned())
                .filter(|text| !text.is_empty()),
            difficulty,
            prep_time_min: params.time_min,
            prep_time_max: params.time_max,
            rating_min: parse_score(params.min_rating, "minRating")?,
            rating_max: parse_score(params.max_rating, "maxRating")?,
        })
    }
}

/// `?limit=` for the ranked listings.
#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    /// Maximum number of recipes returned.
    pub limit: Option<usize>,
}

/// `?limit=&year=&month=` for the popularity ranking.
#[derive(Debug, Default, Deserialize)]
pub struct PopularParams {
    /// Maximum number of recipes returned.
    pub limit: Option<usize>,
    /// Calendar year the ratings must fall in.
    pub year: Option<i32>,
    /// Calendar month (1-12) the ratings must fall in.
    pub month: Option<u32>,
}

/// `?ings=a,b` for the ingredient filters.
#[derive(Debug, Default, Deserialize)]
pub struct IngredientParams {
    /// Comma-separated ingredient names.
    pub ings: Option<String>,
}

impl IngredientParams {
    fn into_request(self, mode: IngredientMatch) -> IngredientFilterRequest {
        IngredientFilterRequest {
            names: self.ings.as_deref().map(split_list).unwrap_or_default(),
            mode,
        }
    }
}

/// Search recipes by text, difficulty, preparation time, and rating bounds.
#[get("/recipes")]
pub async fn search_recipes(
    state: web::Data<HttpState>,
    query: web::Query<SearchParams>,
) -> ApiResult<web::Json<Vec<Recipe>>> {
    let criteria = SearchCriteria::try_from(query.into_inner())?;
    state.search.search(criteria).await.map(web::Json)
}

/// Newest recipes first.
#[get("/recipes/latest")]
pub async fn latest_recipes(
    state: web::Data<HttpState>,
    query: web::Query<LimitParams>,
) -> ApiResult<web::Json<Vec<Recipe>>> {
    state.ranking.latest(query.limit).await.map(web::Json)
}

/// Highest average score, optionally within a calendar window.
#[get("/recipes/popular")]
pub async fn popular_recipes(
    state: web::Data<HttpState>,
    query: web::Query<PopularParams>,
) -> ApiResult<web::Json<Vec<PopularRecipe>>> {
    let PopularParams { limit, year, month } = query.into_inner();
    let request = PopularRequest {
        limit,
        window: TimeWindow { year, month },
    };
    state.ranking.popular(request).await.map(web::Json)
}

/// Biggest month-over-month rise in average score.
#[get("/recipes/trending")]
pub async fn trending_recipes(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<LimitParams>,
) -> ApiResult<web::Json<Vec<TrendingEntry>>> {
    session.require_user_id()?;
    state.ranking.trending(query.limit).await.map(web::Json)
}

/// Corpus-wide statistics.
#[get("/recipes/stats")]
pub async fn recipe_stats(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<RecipeStats>> {
    session.require_user_id()?;
    state.stats.stats().await.map(web::Json)
}

/// Recipes using at least one of the listed ingredients.
#[get("/recipes/ingredients")]
pub async fn recipes_with_ingredients(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<IngredientParams>,
) -> ApiResult<web::Json<Vec<Recipe>>> {
    session.require_user_id()?;
    let request = query.into_inner().into_request(IngredientMatch::Include);
    state.search.by_ingredients(request).await.map(web::Json)
}

/// Recipes using none of the listed ingredients.
#[get("/recipes/wo-ingredients")]
pub async fn recipes_without_ingredients(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<IngredientParams>,
) -> ApiResult<web::Json<Vec<Recipe>>> {
    session.require_user_id()?;
    let request = query.into_inner().into_request(IngredientMatch::Exclude);
    state.search.by_ingredients(request).await.map(web::Json)
}

/// Every recipe owned by `username`, hydrated.
#[get("/recipes/user/{username}")]
pub async fn recipes_by_user(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<RecipeDetail>>> {
    session.require_user_id()?;
    let username = Username::new(path.as_str())
        .map_err(|err| field_error("username", Reason::InvalidChoice, err.to_string()))?;
    state.detail.by_username(&username).await.map(web::Json)
}

/// Recipes sharing at least one ingredient with `{id}`.
#[get("/recipes/similar/{id}")]
pub async fn similar_recipes(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<Recipe>>> {
    let id: RecipeId = parse_id(&path, "id")?;
    state.detail.similar(&id).await.map(web::Json)
}

/// Fully hydrated recipe.
#[get("/recipes/{id}")]
pub async fn recipe_detail(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<RecipeDetail>> {
    let id: RecipeId = parse_id(&path, "id")?;
    state.detail.detail(&id).await.map(web::Json)
}

#[cfg(test)]
#[path = "recipes_tests.rs"]
mod tests;
