//! Shared helpers for the backend integration suites.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpResponse, test, web};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use dishared::Trace;
use dishared::domain::ports::EntityStore;
use dishared::domain::{Error, UserId};
use dishared::inbound::http::configure_api;
use dishared::inbound::http::session::SessionContext;
use dishared::inbound::http::state::HttpState;

/// Clock frozen mid-June 2024.
pub struct FrozenClock;

impl Clock for FrozenClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0)
            .single()
            .expect("valid instant")
    }
}

pub fn frozen_clock() -> Arc<dyn Clock> {
    Arc::new(FrozenClock)
}

async fn login(session: SessionContext, id: web::Path<String>) -> Result<HttpResponse, Error> {
    let user = UserId::new(id.as_str()).map_err(|err| Error::invalid_request(err.to_string()))?;
    session.persist_user(&user)?;
    Ok(HttpResponse::NoContent().finish())
}

/// Full application over `store`, with trace ids, sessions, and a
/// `POST /test/login/{id}` stand-in for the auth collaborator.
pub fn app(
    store: EntityStore,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let session = SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build();
    App::new()
        .app_data(web::Data::new(HttpState::from_entity_store(
            store,
            frozen_clock(),
        )))
        .wrap(session)
        .wrap(Trace)
        .route("/test/login/{id}", web::post().to(login))
        .service(web::scope("/api/v1").configure(configure_api))
}

/// Sign `user` in and return the session cookie.
pub async fn sign_in<S>(app: &S, user: &UserId) -> Cookie<'static>
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
    assert!(res.status().is_success(), "sign in failed: {}", res.status());
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie")
        .into_owned()
}
