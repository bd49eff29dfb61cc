//! Demo dataset loaded into an empty entity store at startup.
//!
//! Recipes and ratings go through the same command services the HTTP API
//! uses, so ingredient names are resolved canonically and every write obeys
//! the store's uniqueness rules.

mod catalogue;

use std::collections::HashMap;
use std::sync::Arc;

use mockable::Clock;
use thiserror::Error;
use tracing::info;

use crate::domain::ports::{
    EntityStore, EntityStoreError, RatingCommand, RecipeCommand, RecipeFilter, UserFilter,
};
use crate::domain::{
    Error, IngredientInput, IngredientResolver, RatingDraft, RatingService, RecipeCommandService,
    RecipeDraft, RecipeId, User, UserId, Username, UsernameValidationError,
};

use self::catalogue::{DemoRecipe, INGREDIENTS, RATINGS, RECIPES, USERS};

/// Credential marker for demo accounts. It matches no password, so demo
/// users can author content but cannot sign in.
pub const LOCKED_CREDENTIAL: &str = "!";

/// Errors raised while seeding the demo dataset.
#[derive(Debug, Error)]
pub enum DemoDataError {
    /// The store rejected a direct write or read.
    #[error("entity store error while seeding demo data: {0}")]
    Store(#[from] EntityStoreError),
    /// A domain service rejected a demo entity.
    #[error("demo data rejected: {0}")]
    Domain(#[from] Error),
    /// A demo username failed validation.
    #[error("demo username rejected: {0}")]
    Username(#[from] UsernameValidationError),
    /// The catalogue refers to a user or recipe it does not define.
    #[error("demo catalogue references unknown {kind} {name:?}")]
    UnknownReference {
        /// Entity kind of the dangling reference.
        kind: &'static str,
        /// Name used by the reference.
        name: &'static str,
    },
}

/// What [`seed_demo_data`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoSeedOutcome {
    /// The catalogue was written.
    Applied {
        /// Users created.
        users: usize,
        /// Canonical ingredients resolved.
        ingredients: usize,
        /// Recipes created.
        recipes: usize,
        /// Ratings submitted.
        ratings: usize,
    },
    /// The store already held users or recipes; nothing was written.
    Skipped,
}

/// Load the demo catalogue into `store` unless it already holds data.
///
/// # Errors
/// Returns [`DemoDataError`] when any write fails. Writes made before the
/// failure are kept.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use dishared::demo_data::{DemoSeedOutcome, seed_demo_data};
/// use dishared::outbound::memory::InMemoryEntityStore;
/// use mockable::DefaultClock;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let store = InMemoryEntityStore::entity_store();
/// let outcome = seed_demo_data(&store, Arc::new(DefaultClock)).await.expect("seeded");
/// assert!(matches!(outcome, DemoSeedOutcome::Applied { recipes: 6, .. }));
/// # });
/// ```
pub async fn seed_demo_data(
    store: &EntityStore,
    clock: Arc<dyn Clock>,
) -> Result<DemoSeedOutcome, DemoDataError> {
    if !store.users.find(&UserFilter::all()).await?.is_empty()
        || !store.recipes.find(&RecipeFilter::all()).await?.is_empty()
    {
        info!(reason = "store not empty", "demo data seeding skipped");
        return Ok(DemoSeedOutcome::Skipped);
    }

    let users = seed_users(store).await?;

    let resolver = IngredientResolver::new(Arc::clone(&store.ingredients));
    for name in INGREDIENTS {
        resolver.resolve(name).await?;
    }

    let recipe_service = RecipeCommandService::new(store.clone(), Arc::clone(&clock));
    let mut recipes: HashMap<&'static str, RecipeId> = HashMap::new();
    for demo in RECIPES {
        let author = lookup(&users, "user", demo.author)?;
        let recipe = recipe_service.create(&author, draft(demo)).await?;
        recipes.insert(demo.title, recipe.id);
    }

    let rating_service = RatingService::new(store.clone(), clock);
    for demo in RATINGS {
        let rater = lookup(&users, "user", demo.rater)?;
        let recipe_id = lookup(&recipes, "recipe", demo.recipe)?;
        rating_service
            .submit(
                &rater,
                RatingDraft {
                    recipe_id,
                    score: demo.score,
                    comment: Some(demo.comment.to_owned()),
                },
            )
            .await?;
    }

    let outcome = DemoSeedOutcome::Applied {
        users: users.len(),
        ingredients: INGREDIENTS.len(),
        recipes: recipes.len(),
        ratings: RATINGS.len(),
    };
    info!(?outcome, "demo data seeded");
    Ok(outcome)
}

async fn seed_users(store: &EntityStore) -> Result<HashMap<&'static str, UserId>, DemoDataError> {
    let mut users = HashMap::new();
    for demo in USERS {
        let user = User::new(
            UserId::random(),
            Username::new(demo.username)?,
            demo.email,
            LOCKED_CREDENTIAL,
        );
        store.users.insert(&user).await?;
        users.insert(demo.username, user.id);
    }
    Ok(users)
}

fn lookup<T: Copy>(
    known: &HashMap<&'static str, T>,
    kind: &'static str,
    name: &'static str,
) -> Result<T, DemoDataError> {
    known
        .get(name)
        .copied()
        .ok_or(DemoDataError::UnknownReference { kind, name })
}

fn draft(demo: &DemoRecipe) -> RecipeDraft {
    RecipeDraft {
        title: demo.title.to_owned(),
        description: Some(demo.description.to_owned()),
        steps: demo.steps.iter().map(|step| (*step).to_owned()).collect(),
        preparation_time: Some(demo.preparation_time),
        difficulty: demo.difficulty.to_owned(),
        ingredients: demo
            .ingredients
            .iter()
            .map(|line| IngredientInput {
                name: line.name.to_owned(),
                quantity: Some(line.quantity),
                unit: Some(line.unit.to_owned()),
            })
            .collect(),
    }
}
