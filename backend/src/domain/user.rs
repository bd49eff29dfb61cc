//! Users as seen by the discovery engine.
//!
//! Credentials are issued by the external authentication collaborator; the
//! engine only stores an opaque hash and never serialises it.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{RecipeId, UserId};

/// Username shown on recipes when the owning user no longer exists.
pub const DELETED_USER: &str = "Deleted User";

/// Validation errors returned by [`Username::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsernameValidationError {
    /// The username was empty once trimmed.
    #[error("username must not be empty")]
    Empty,
}

/// Unique public handle of a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Validate and construct a username, trimming surrounding whitespace.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UsernameValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UsernameValidationError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the username text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Registered user.
///
/// `recipes` lists the recipes the user has published, in creation order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Stable identifier.
    pub id: UserId,
    /// Unique display name.
    pub username: Username,
    /// Unique contact address.
    pub email: String,
    /// Password hash owned by the auth collaborator.
    #[serde(skip_serializing)]
    pub credential_hash: String,
    /// Published recipes, oldest first.
    pub recipes: Vec<RecipeId>,
}

impl User {
    /// Build a user with no published recipes.
    pub fn new(
        id: UserId,
        username: Username,
        email: impl Into<String>,
        credential_hash: impl Into<String>,
    ) -> Self {
        Self {
            id,
            username,
            email: email.into(),
            credential_hash: credential_hash.into(),
            recipes: Vec::new(),
        }
    }
}

/// Owner block embedded in recipe details.
///
/// Falls back to [`DELETED_USER`] with no id or email when the owner has been
/// removed from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeOwner {
    /// Owner id; absent for a deleted owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    /// Display name, or `Deleted User`.
    pub username: String,
    /// Contact address; absent for a deleted owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl RecipeOwner {
    /// Placeholder owner for recipes whose user no longer exists.
    #[must_use]
    pub fn deleted() -> Self {
        Self {
            id: None,
            username: DELETED_USER.to_owned(),
            email: None,
        }
    }
}

impl From<&User> for RecipeOwner {
    fn from(user: &User) -> Self {
        Self {
            id: Some(user.id),
            username: user.username.to_string(),
            email: Some(user.email.clone()),
        }
    }
}
