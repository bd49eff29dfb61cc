//! Driven port for user persistence.

use async_trait::async_trait;

use crate::domain::{RecipeId, User, UserId, Username};

use super::EntityStoreError;

/// Selection criteria for [`UserRepository::find`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    /// Restrict to these ids. `None` selects every user.
    pub ids: Option<Vec<UserId>>,
}

impl UserFilter {
    /// Select every user.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Select the users with the given ids.
    #[must_use]
    pub fn with_ids(ids: Vec<UserId>) -> Self {
        Self { ids: Some(ids) }
    }

    /// Whether `user` satisfies the filter.
    #[must_use]
    pub fn matches(&self, user: &User) -> bool {
        self.ids.as_ref().is_none_or(|ids| ids.contains(&user.id))
    }
}

/// Port for reading and registering users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Users matching `filter`, in insertion order.
    async fn find(&self, filter: &UserFilter) -> Result<Vec<User>, EntityStoreError>;

    /// Look up a user by id.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, EntityStoreError>;

    /// Look up a user by exact username.
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, EntityStoreError>;

    /// Register a user.
    ///
    /// Fails with [`EntityStoreError::Conflict`] when the id, username, or
    /// email is already taken.
    async fn insert(&self, user: &User) -> Result<(), EntityStoreError>;

    /// Append `recipe` to the owner's recipe list. A missing user is ignored.
    async fn append_recipe(
        &self,
        user: &UserId,
        recipe: &RecipeId,
    ) -> Result<(), EntityStoreError>;
}
