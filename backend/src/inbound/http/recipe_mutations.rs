//! Recipe authoring endpoints.
//!
//! ```text
//! POST   /api/v1/recipes       {"title":"Omelette","steps":["Whisk","Fry"],"difficulty":"easy",
//!                               "ingredients":[{"name":"Eggs","quantity":2}]}
//! PUT    /api/v1/recipes/{id}  same body as POST
//! DELETE /api/v1/recipes/{id}
//! ```

use actix_web::{HttpResponse, delete, post, put, web};
use tracing::debug;

use crate::domain::{Recipe, RecipeDraft, RecipeId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_id;

/// Create a recipe owned by the signed-in user. Responds `201 Created`.
#[post("/recipes")]
pub async fn create_recipe(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<RecipeDraft>,
) -> ApiResult<HttpResponse> {
    let owner = session.require_user_id()?;
    let recipe: Recipe = state.recipes.create(&owner, payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(recipe))
}

/// Replace the content of a recipe the caller owns.
#[put("/recipes/{id}")]
pub async fn update_recipe(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<RecipeDraft>,
) -> ApiResult<web::Json<Recipe>> {
    let caller = session.require_user_id()?;
    let id: RecipeId = parse_id(&path, "id")?;
    state
        .recipes
        .update(&caller, &id, payload.into_inner())
        .await
        .map(web::Json)
}

/// Delete a recipe the caller owns, along with its ratings. Responds
/// `204 No Content`.
#[delete("/recipes/{id}")]
pub async fn delete_recipe(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let caller = session.require_user_id()?;
    let id: RecipeId = parse_id(&path, "id")?;
    state.recipes.delete(&caller, &id).await?;
    debug!(recipe_id = %id, "recipe delete acknowledged");
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::{Value, json};

    use crate::domain::UserId;
    use crate::domain::fixtures::seeded_store;
    use crate::inbound::http::test_utils::{json_body, session_cookie, store_state, test_app};

    fn with_field(mut draft: Value, key: &str, value: Value) -> Value {
        draft
            .as_object_mut()
            .expect("draft object")
            .insert(key.to_owned(), value);
        draft
    }

    fn omelette() -> Value {
        json!({
            "title": "  Omelette ",
            "steps": ["Whisk", " ", "Fry"],
            "preparationTime": 10,
            "difficulty": "Medium",
            "ingredients": [
                {"name": "Eggs", "quantity": 2},
                {"name": " eggs "},
                {"name": "Olive  Oil", "quantity": 1.5, "unit": "tbsp"}
            ]
        })
    }

    #[actix_web::test]
    async fn create_update_delete_round() {
        let store = seeded_store(&[], &[], &[], &[]).await;
        let app = test::init_service(test_app(store_state(store))).await;
        let owner = UserId::random();
        let cookie = session_cookie(&app, &owner).await;

        let created = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/recipes")
                .cookie(cookie.clone())
                .set_json(omelette())
                .to_request(),
        )
        .await;
        assert_eq!(created.status(), StatusCode::CREATED);
        let body = json_body(created).await;
        assert_eq!(body.get("title").and_then(Value::as_str), Some("Omelette"));
        assert_eq!(body.get("steps"), Some(&json!(["Whisk", "Fry"])));
        assert_eq!(
            body.get("userId").and_then(Value::as_str),
            Some(owner.to_string().as_str())
        );
        let ingredients = body
            .get("ingredients")
            .and_then(Value::as_array)
            .expect("ingredients");
        assert_eq!(ingredients.len(), 3);
        assert_eq!(
            ingredients.first().and_then(|i| i.get("ingredientId")),
            ingredients.get(1).and_then(|i| i.get("ingredientId")),
        );
        let id = body
            .get("id")
            .and_then(Value::as_str)
            .expect("recipe id")
            .to_owned();

        let revised = with_field(omelette(), "title", json!("Spanish omelette"));
        let updated = test::call_service(
            &app,
            test::TestRequest::put()
                .uri(&format!("/api/v1/recipes/{id}"))
                .cookie(cookie.clone())
                .set_json(revised)
                .to_request(),
        )
        .await;
        assert_eq!(updated.status(), StatusCode::OK);
        let body = json_body(updated).await;
        assert_eq!(
            body.get("title").and_then(Value::as_str),
            Some("Spanish omelette")
        );
        assert_eq!(body.get("id").and_then(Value::as_str), Some(id.as_str()));

        let deleted = test::call_service(
            &app,
            test::TestRequest::delete()
                .uri(&format!("/api/v1/recipes/{id}"))
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

        let gone = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/api/v1/recipes/{id}"))
                .to_request(),
        )
        .await;
        assert_eq!(gone.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn anonymous_create_is_unauthorised() {
        let store = seeded_store(&[], &[], &[], &[]).await;
        let app = test::init_service(test_app(store_state(store))).await;

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/recipes")
                .set_json(omelette())
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn invalid_draft_names_the_field() {
        let store = seeded_store(&[], &[], &[], &[]).await;
        let app = test::init_service(test_app(store_state(store))).await;
        let cookie = session_cookie(&app, &UserId::random()).await;
        let draft = with_field(omelette(), "steps", json!([]));

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/recipes")
                .cookie(cookie)
                .set_json(draft)
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body = json_body(res).await;
        assert_eq!(
            body.pointer("/details/field").and_then(Value::as_str),
            Some("steps")
        );
    }

    #[actix_web::test]
    async fn malformed_body_is_bad_request() {
        let store = seeded_store(&[], &[], &[], &[]).await;
        let app = test::init_service(test_app(store_state(store))).await;
        let cookie = session_cookie(&app, &UserId::random()).await;

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/recipes")
                .cookie(cookie)
                .set_json(json!({"steps": ["no title"]}))
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body = json_body(res).await;
        assert_eq!(
            body.pointer("/details/field").and_then(Value::as_str),
            Some("body")
        );
    }

    #[actix_web::test]
    async fn only_the_owner_may_delete() {
        let store = seeded_store(&[], &[], &[], &[]).await;
        let app = test::init_service(test_app(store_state(store))).await;
        let owner_cookie = session_cookie(&app, &UserId::random()).await;
        let created = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/recipes")
                .cookie(owner_cookie)
                .set_json(omelette())
                .to_request(),
        )
        .await;
        let body = json_body(created).await;
        let id = body.get("id").and_then(Value::as_str).expect("recipe id");
        let intruder_cookie = session_cookie(&app, &UserId::random()).await;

        let res = test::call_service(
            &app,
            test::TestRequest::delete()
                .uri(&format!("/api/v1/recipes/{id}"))
                .cookie(intruder_cookie)
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::FORBIDDEN);
    }
}
