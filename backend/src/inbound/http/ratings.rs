//! Rating endpoints.
//!
//! ```text
//! POST /api/v1/ratings       {"recipeId":"…","score":4,"comment":"Lovely"}
//! GET  /api/v1/ratings/{id}
//! ```

use actix_web::{HttpResponse, get, post, web};

use crate::domain::{RatingDetail, RatingDraft, RatingId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_id;

/// Rate a recipe as the signed-in user. A second rating of the same recipe
/// by the same user is `409 Conflict`.
#[post("/ratings")]
pub async fn submit_rating(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<RatingDraft>,
) -> ApiResult<HttpResponse> {
    let user = session.require_user_id()?;
    let rating = state.ratings.submit(&user, payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(rating))
}

/// A rating with its recipe title and poster.
#[get("/ratings/{id}")]
pub async fn rating_detail(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<RatingDetail>> {
    let id: RatingId = parse_id(&path, "id")?;
    state.rating_query.rating_detail(&id).await.map(web::Json)
}
