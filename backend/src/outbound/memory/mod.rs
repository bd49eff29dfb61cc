//! In-memory entity store implementing every repository port.
//!
//! All tables live behind one `RwLock`. Uniqueness checks and the writes they
//! guard happen under a single write guard, so conditional inserts are
//! atomic with respect to concurrent callers. A poisoned lock is reported as
//! a connection failure.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{
    EntityStore, EntityStoreError, IngredientFilter, IngredientRepository, RatingFilter,
    RatingRepository, RecipeFilter, RecipeRepository, UserFilter, UserRepository,
};
use crate::domain::{
    Ingredient, IngredientName, Rating, RatingId, Recipe, RecipeId, User, UserId, Username,
};

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    recipes: Vec<Recipe>,
    ingredients: Vec<Ingredient>,
    ratings: Vec<Rating>,
}

/// Process-local entity store. Entities are returned in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryEntityStore {
    tables: RwLock<Tables>,
}

impl InMemoryEntityStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store and wrap it in an [`EntityStore`] handle.
    #[must_use]
    pub fn entity_store() -> EntityStore {
        EntityStore::from_shared(&Arc::new(Self::new()))
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, EntityStoreError> {
        self.tables
            .read()
            .map_err(|_| EntityStoreError::connection("in-memory store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, EntityStoreError> {
        self.tables
            .write()
            .map_err(|_| EntityStoreError::connection("in-memory store lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryEntityStore {
    async fn find(&self, filter: &UserFilter) -> Result<Vec<User>, EntityStoreError> {
        let tables = self.read()?;
        Ok(tables
            .users
            .iter()
            .filter(|user| filter.matches(user))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, EntityStoreError> {
        let tables = self.read()?;
        Ok(tables.users.iter().find(|user| user.id == *id).cloned())
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, EntityStoreError> {
        let tables = self.read()?;
        Ok(tables
            .users
            .iter()
            .find(|user| user.username == *username)
            .cloned())
    }

    async fn insert(&self, user: &User) -> Result<(), EntityStoreError> {
        let mut tables = self.write()?;
        if let Some(existing) = tables.users.iter().find(|existing| {
            existing.id == user.id
                || existing.username == user.username
                || existing.email.eq_ignore_ascii_case(&user.email)
        }) {
            let key = if existing.id == user.id {
                format!("id={}", user.id)
            } else if existing.username == user.username {
                format!("username={}", user.username)
            } else {
                format!("email={}", user.email)
            };
            return Err(EntityStoreError::conflict("user", key));
        }
        tables.users.push(user.clone());
        Ok(())
    }

    async fn append_recipe(
        &self,
        user: &UserId,
        recipe: &RecipeId,
    ) -> Result<(), EntityStoreError> {
        let mut tables = self.write()?;
        match tables.users.iter_mut().find(|existing| existing.id == *user) {
            Some(owner) => owner.recipes.push(*recipe),
            None => debug!(user_id = %user, "recipe owner missing; skipping recipe link"),
        }
        Ok(())
    }
}

#[async_trait]
impl RecipeRepository for InMemoryEntityStore {
    async fn find(&self, filter: &RecipeFilter) -> Result<Vec<Recipe>, EntityStoreError> {
        let tables = self.read()?;
        Ok(tables
            .recipes
            .iter()
            .filter(|recipe| filter.matches(recipe))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &RecipeId) -> Result<Option<Recipe>, EntityStoreError> {
        let tables = self.read()?;
        Ok(tables.recipes.iter().find(|recipe| recipe.id == *id).cloned())
    }

    async fn insert(&self, recipe: &Recipe) -> Result<(), EntityStoreError> {
        let mut tables = self.write()?;
        if tables.recipes.iter().any(|existing| existing.id == recipe.id) {
            return Err(EntityStoreError::conflict(
                "recipe",
                format!("id={}", recipe.id),
            ));
        }
        tables.recipes.push(recipe.clone());
        Ok(())
    }

    async fn update(&self, recipe: &Recipe) -> Result<bool, EntityStoreError> {
        let mut tables = self.write()?;
        Ok(
            match tables
                .recipes
                .iter_mut()
                .find(|existing| existing.id == recipe.id)
            {
                Some(slot) => {
                    *slot = recipe.clone();
                    true
                }
                None => false,
            },
        )
    }

    async fn delete(&self, id: &RecipeId) -> Result<bool, EntityStoreError> {
        let mut tables = self.write()?;
        let before = tables.recipes.len();
        tables.recipes.retain(|recipe| recipe.id != *id);
        if tables.recipes.len() == before {
            return Ok(false);
        }
        tables.ratings.retain(|rating| rating.recipe_id != *id);
        for user in &mut tables.users {
            user.recipes.retain(|recipe| recipe != id);
        }
        Ok(true)
    }
}

#[async_trait]
impl IngredientRepository for InMemoryEntityStore {
    async fn find(
        &self,
        filter: &IngredientFilter,
    ) -> Result<Vec<Ingredient>, EntityStoreError> {
        let tables = self.read()?;
        Ok(tables
            .ingredients
            .iter()
            .filter(|ingredient| filter.matches(ingredient))
            .cloned()
            .collect())
    }

    async fn find_by_name(
        &self,
        name: &IngredientName,
    ) -> Result<Option<Ingredient>, EntityStoreError> {
        let tables = self.read()?;
        Ok(tables
            .ingredients
            .iter()
            .find(|ingredient| ingredient.name == *name)
            .cloned())
    }

    async fn insert_unique(&self, ingredient: &Ingredient) -> Result<(), EntityStoreError> {
        let mut tables = self.write()?;
        if tables
            .ingredients
            .iter()
            .any(|existing| existing.name == ingredient.name || existing.id == ingredient.id)
        {
            return Err(EntityStoreError::conflict(
                "ingredient",
                format!("name={}", ingredient.name),
            ));
        }
        tables.ingredients.push(ingredient.clone());
        Ok(())
    }
}

#[async_trait]
impl RatingRepository for InMemoryEntityStore {
    async fn find(&self, filter: &RatingFilter) -> Result<Vec<Rating>, EntityStoreError> {
        let tables = self.read()?;
        Ok(tables
            .ratings
            .iter()
            .filter(|rating| filter.matches(rating))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &RatingId) -> Result<Option<Rating>, EntityStoreError> {
        let tables = self.read()?;
        Ok(tables.ratings.iter().find(|rating| rating.id == *id).cloned())
    }

    async fn insert_unique(&self, rating: &Rating) -> Result<(), EntityStoreError> {
        let mut tables = self.write()?;
        if tables.ratings.iter().any(|existing| {
            existing.id == rating.id
                || (existing.recipe_id == rating.recipe_id && existing.user_id == rating.user_id)
        }) {
            return Err(EntityStoreError::conflict(
                "rating",
                format!("recipe={} user={}", rating.recipe_id, rating.user_id),
            ));
        }
        tables.ratings.push(rating.clone());
        Ok(())
    }
}
