//! Cookie-session access for handlers.
//!
//! The authentication collaborator issues the session and stores the caller's
//! user id under [`USER_ID_KEY`]. Handlers only read it back through
//! [`SessionContext`]; the engine trusts the stored identity as-is.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{Error, UserId};

/// Session key holding the authenticated user's id.
pub const USER_ID_KEY: &str = "user_id";

/// Extractor wrapping the Actix session with identity helpers.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Wrap an Actix session.
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Store `user_id` as the authenticated caller.
    ///
    /// # Errors
    /// Returns an internal error when the session cannot be serialised.
    pub fn persist_user(&self, user_id: &UserId) -> Result<(), Error> {
        self.0
            .insert(USER_ID_KEY, user_id.to_string())
            .map_err(|err| Error::internal(format!("failed to persist session: {err}")))
    }

    /// Authenticated caller, if the session carries a well-formed id.
    ///
    /// A malformed id is logged and treated as anonymous.
    ///
    /// # Errors
    /// Returns an internal error when the session cannot be read.
    pub fn user_id(&self) -> Result<Option<UserId>, Error> {
        let Some(raw) = self
            .0
            .get::<String>(USER_ID_KEY)
            .map_err(|err| Error::internal(format!("failed to read session: {err}")))?
        else {
            return Ok(None);
        };
        match UserId::new(&raw) {
            Ok(id) => Ok(Some(id)),
            Err(err) => {
                warn!(error = %err, "ignoring malformed user id in session");
                Ok(None)
            }
        }
    }

    /// Authenticated caller or `401 Unauthorized`.
    ///
    /// # Errors
    /// Returns [`crate::domain::ErrorCode::Unauthorized`] when no user is
    /// signed in.
    pub fn require_user_id(&self) -> Result<UserId, Error> {
        self.user_id()?
            .ok_or_else(|| Error::unauthorized("login required"))
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let session = Session::from_request(req, payload);
        Box::pin(async move { session.await.map(Self::new) })
    }
}
