//! Builders shared by domain service tests.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use super::ports::EntityStore;
use super::{
    Difficulty, Ingredient, IngredientId, IngredientName, Rating, RatingId, Recipe,
    RecipeIngredient, RecipeId, Score, User, UserId, Username,
};
use crate::outbound::memory::InMemoryEntityStore;

/// Clock frozen at a fixed instant.
pub(crate) struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

/// Mid-June 2024, so the trending periods are May and June.
pub(crate) fn fixture_now() -> DateTime<Utc> {
    at(2024, 6, 15)
}

pub(crate) fn fixture_clock() -> Arc<dyn Clock> {
    Arc::new(FixtureClock {
        utc_now: fixture_now(),
    })
}

pub(crate) fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .expect("valid fixture instant")
}

pub(crate) fn user(name: &str) -> User {
    User::new(
        UserId::random(),
        Username::new(name).expect("fixture username"),
        format!("{}@example.com", name.to_lowercase()),
        "fixture-hash",
    )
}

pub(crate) fn ingredient(name: &str) -> Ingredient {
    Ingredient::new(
        IngredientId::random(),
        IngredientName::new(name).expect("fixture ingredient"),
    )
}

pub(crate) fn recipe(owner: &User, title: &str, ingredients: &[&Ingredient]) -> Recipe {
    Recipe {
        id: RecipeId::random(),
        title: title.to_owned(),
        description: None,
        steps: vec!["Cook".to_owned()],
        preparation_time: Some(5),
        difficulty: Difficulty::Easy,
        owner: owner.id,
        ingredients: ingredients
            .iter()
            .map(|ingredient| RecipeIngredient {
                ingredient_id: ingredient.id,
                quantity: None,
                unit: None,
            })
            .collect(),
        created_at: fixture_now(),
    }
}

pub(crate) fn rating(
    recipe: &Recipe,
    user: &User,
    score: i64,
    created_at: DateTime<Utc>,
) -> Rating {
    Rating {
        id: RatingId::random(),
        score: Score::new(score).expect("fixture score"),
        comment: None,
        recipe_id: recipe.id,
        user_id: user.id,
        created_at,
    }
}

/// In-memory store pre-populated with the given entities.
pub(crate) async fn seeded_store(
    users: &[&User],
    ingredients: &[&Ingredient],
    recipes: &[&Recipe],
    ratings: &[&Rating],
) -> EntityStore {
    let store = EntityStore::from_shared(&Arc::new(InMemoryEntityStore::default()));
    for user in users {
        store.users.insert(user).await.expect("seed user");
    }
    for ingredient in ingredients {
        store
            .ingredients
            .insert_unique(ingredient)
            .await
            .expect("seed ingredient");
    }
    for recipe in recipes {
        store.recipes.insert(recipe).await.expect("seed recipe");
    }
    for rating in ratings {
        store.ratings.insert_unique(rating).await.expect("seed rating");
    }
    store
}
