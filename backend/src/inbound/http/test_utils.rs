//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpResponse, test, web};
use serde_json::Value;

use crate::domain::fixtures::fixture_clock;
use crate::domain::ports::{
    EntityStore, MockRatingCommand, MockRatingQuery, MockRecipeCommand, MockRecipeDetailQuery,
    MockRecipeRankingQuery, MockRecipeSearchQuery, MockRecipeStatsQuery,
};
use crate::domain::{Error, UserId};
use crate::inbound::http::configure_api;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Session middleware with a throwaway key and a non-`Secure` cookie named
/// `session`, suitable for plain-HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Stand-in for the authentication collaborator: `POST /test/login/{id}`
/// signs the given user in.
pub fn configure_login(cfg: &mut web::ServiceConfig) {
    cfg.route("/test/login/{id}", web::post().to(login));
}

async fn login(session: SessionContext, id: web::Path<String>) -> Result<HttpResponse, Error> {
    let user = UserId::new(id.as_str())
        .map_err(|err| Error::invalid_request(err.to_string()))?;
    session.persist_user(&user)?;
    Ok(HttpResponse::NoContent().finish())
}

/// Sign `user` in through [`configure_login`] and return the session cookie.
pub async fn session_cookie<S>(app: &S, user: &UserId) -> Cookie<'static>
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let res = test::call_service(
        app,
        test::TestRequest::post()
            .uri(&format!("/test/login/{user}"))
            .to_request(),
    )
    .await;
    assert!(res.status().is_success(), "test login failed: {}", res.status());
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie")
        .into_owned()
}

/// App serving `/api/v1` over `state`, with sessions and the test login
/// route.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(test_session_middleware())
        .app_data(web::Data::new(state))
        .configure(configure_login)
        .service(web::scope("/api/v1").configure(configure_api))
}

/// State whose ports all panic when called; tests replace the ones they use.
pub fn unused_state() -> HttpState {
    HttpState {
        search: Arc::new(MockRecipeSearchQuery::new()),
        ranking: Arc::new(MockRecipeRankingQuery::new()),
        stats: Arc::new(MockRecipeStatsQuery::new()),
        detail: Arc::new(MockRecipeDetailQuery::new()),
        recipes: Arc::new(MockRecipeCommand::new()),
        ratings: Arc::new(MockRatingCommand::new()),
        rating_query: Arc::new(MockRatingQuery::new()),
    }
}

/// State backed by a seeded in-memory store and the fixture clock.
pub fn store_state(store: EntityStore) -> HttpState {
    HttpState::from_entity_store(store, fixture_clock())
}

/// Read a JSON response body.
pub async fn json_body(res: ServiceResponse) -> Value {
    test::read_body_json(res).await
}
