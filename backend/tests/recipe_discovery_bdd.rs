//! Behavioural tests for recipe discovery over the in-memory store.

#[expect(
    dead_code,
    reason = "Shared helpers include functions used only by the HTTP suite."
)]
mod common;

use std::collections::HashMap;
use std::sync::Arc;

use dishared::domain::ports::{
    EntityStore, IngredientFilter, PopularRequest, RatingCommand, RecipeCommand,
    RecipeDetailQuery, RecipeRankingQuery, RecipeSearchQuery, SearchCriteria,
};
use dishared::domain::{
    Difficulty, ErrorCode, IngredientInput, RatingAggregator, RatingDraft, RatingService, Recipe,
    RecipeCommandService, RecipeDetailService, RecipeDraft, RecipeId, RecipeRankingService,
    RecipeSearchService, TimeWindow, User, UserId, Username,
};
use dishared::outbound::memory::InMemoryEntityStore;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use tokio::runtime::Runtime;

#[derive(Clone)]
struct RuntimeHandle(Arc<Runtime>);

#[derive(Default, ScenarioState)]
struct DiscoveryWorld {
    runtime: Slot<RuntimeHandle>,
    store: Slot<EntityStore>,
    users: Slot<HashMap<String, UserId>>,
    recipes: Slot<HashMap<String, RecipeId>>,
    average: Slot<Option<f64>>,
    titles: Slot<Vec<String>>,
    most_popular: Slot<RecipeId>,
    failure: Slot<ErrorCode>,
}

impl DiscoveryWorld {
    fn runtime(&self) -> Arc<Runtime> {
        self.runtime.get().expect("runtime should be set").0
    }

    fn store(&self) -> EntityStore {
        self.store.get().expect("store should be set")
    }

    fn user(&self, name: &str) -> UserId {
        self.users
            .get()
            .and_then(|users| users.get(name).copied())
            .unwrap_or_else(|| panic!("unknown user {name}"))
    }

    fn recipe(&self, title: &str) -> RecipeId {
        self.recipes
            .get()
            .and_then(|recipes| recipes.get(title).copied())
            .unwrap_or_else(|| panic!("unknown recipe {title}"))
    }

    fn publish(&self, author: &str, title: &str, ingredients: &[&str]) {
        let owner = self.user(author);
        let draft = RecipeDraft {
            title: title.to_owned(),
            description: None,
            steps: vec!["Cook the eggs.".to_owned()],
            preparation_time: Some(5),
            difficulty: "easy".to_owned(),
            ingredients: ingredients
                .iter()
                .map(|name| IngredientInput {
                    name: (*name).to_owned(),
                    quantity: Some(1.0),
                    unit: Some("unit".to_owned()),
                })
                .collect(),
        };
        let service = RecipeCommandService::new(self.store(), common::frozen_clock());
        let recipe = self
            .runtime()
            .block_on(service.create(&owner, draft))
            .expect("recipe should be created");
        let mut recipes = self.recipes.get().unwrap_or_default();
        recipes.insert(title.to_owned(), recipe.id);
        self.recipes.set(recipes);
    }

    fn rate(&self, rater: &str, title: &str, score: i64) -> Result<(), ErrorCode> {
        let draft = RatingDraft {
            recipe_id: self.recipe(title),
            score,
            comment: None,
        };
        let service = RatingService::new(self.store(), common::frozen_clock());
        self.runtime()
            .block_on(service.submit(&self.user(rater), draft))
            .map(drop)
            .map_err(|err| err.code())
    }

    fn record_titles(&self, recipes: Vec<Recipe>) {
        self.titles
            .set(recipes.into_iter().map(|recipe| recipe.title).collect());
    }
}

#[fixture]
fn world() -> DiscoveryWorld {
    DiscoveryWorld::default()
}

#[given("a catalogue of scrambled eggs and boiled eggs")]
fn a_catalogue_of_scrambled_eggs_and_boiled_eggs(world: &DiscoveryWorld) {
    let runtime = Arc::new(Runtime::new().expect("create runtime"));
    let store = InMemoryEntityStore::entity_store();
    let mut users = HashMap::new();
    for name in ["Alvaro", "Bobby", "Charlie"] {
        let user = User::new(
            UserId::random(),
            Username::new(name).expect("username"),
            format!("{}@gmail.com", name.to_lowercase()),
            "!",
        );
        runtime
            .block_on(store.users.insert(&user))
            .expect("user should be stored");
        users.insert(name.to_owned(), user.id);
    }
    world.runtime.set(RuntimeHandle(runtime));
    world.store.set(store);
    world.users.set(users);

    world.publish("Alvaro", "Scrambled eggs", &["Eggs", "Salt"]);
    world.publish("Bobby", "Boiled eggs", &["Eggs"]);
    for (rater, title, score) in [
        ("Alvaro", "Scrambled eggs", 5),
        ("Bobby", "Scrambled eggs", 3),
        ("Alvaro", "Boiled eggs", 4),
    ] {
        world
            .rate(rater, title, score)
            .expect("rating should be recorded");
    }
}

#[given("{user} publishes {title} using {ingredient}")]
fn user_publishes_title_using_ingredient(
    world: &DiscoveryWorld,
    user: String,
    title: String,
    ingredient: String,
) {
    world.publish(&user, &title, &[ingredient.as_str()]);
}

#[when("the average rating of {title} is requested")]
fn the_average_rating_of_title_is_requested(world: &DiscoveryWorld, title: String) {
    let aggregator = RatingAggregator::new(world.store().ratings);
    let average = world
        .runtime()
        .block_on(aggregator.average_for(&world.recipe(&title)))
        .expect("average should be computed");
    world.average.set(average);
}

#[when("recipes similar to {title} are requested")]
fn recipes_similar_to_title_are_requested(world: &DiscoveryWorld, title: String) {
    let service = RecipeDetailService::new(world.store());
    let similar = world
        .runtime()
        .block_on(service.similar(&world.recipe(&title)))
        .expect("similar recipes should load");
    world.record_titles(similar);
}

#[when("easy recipes are searched")]
fn easy_recipes_are_searched(world: &DiscoveryWorld) {
    let service = RecipeSearchService::new(world.store());
    let criteria = SearchCriteria {
        difficulty: Some(Difficulty::Easy),
        ..SearchCriteria::default()
    };
    let found = world
        .runtime()
        .block_on(service.search(criteria))
        .expect("search should succeed");
    world.record_titles(found);
}

#[when("the single most popular recipe is requested")]
fn the_single_most_popular_recipe_is_requested(world: &DiscoveryWorld) {
    let service = RecipeRankingService::new(world.store(), common::frozen_clock());
    let request = PopularRequest {
        limit: Some(1),
        window: TimeWindow::default(),
    };
    let ranked = world
        .runtime()
        .block_on(service.popular(request))
        .expect("ranking should succeed");
    let [top] = ranked.as_slice() else {
        panic!("expected exactly one popular recipe, got {}", ranked.len());
    };
    assert!((top.average_rating - 4.0).abs() < f64::EPSILON);
    world.most_popular.set(top.recipe.id);
}

#[when("{user} rates {title} again")]
fn user_rates_title_again(world: &DiscoveryWorld, user: String, title: String) {
    let failure = world
        .rate(&user, &title, 1)
        .expect_err("second rating should be rejected");
    world.failure.set(failure);
}

#[then("the average rating is {expected}")]
fn the_average_rating_is(world: &DiscoveryWorld, expected: f64) {
    let average = world
        .average
        .get()
        .expect("average should be recorded")
        .expect("recipe should have ratings");
    assert!((average - expected).abs() < f64::EPSILON);
}

#[then("there is no average rating")]
fn there_is_no_average_rating(world: &DiscoveryWorld) {
    let average = world.average.get().expect("average should be recorded");
    assert_eq!(average, None);
}

#[then("the recipes are {titles}")]
fn the_recipes_are(world: &DiscoveryWorld, titles: String) {
    let expected: Vec<String> = titles.split(", ").map(str::to_owned).collect();
    assert_eq!(world.titles.get().expect("titles should be recorded"), expected);
}

#[then("it is the recipe with the lower id")]
fn it_is_the_recipe_with_the_lower_id(world: &DiscoveryWorld) {
    let lower = world
        .recipe("Scrambled eggs")
        .min(world.recipe("Boiled eggs"));
    assert_eq!(
        world.most_popular.get().expect("popular recipe should be recorded"),
        lower
    );
}

#[then("the request fails with conflict")]
fn the_request_fails_with_conflict(world: &DiscoveryWorld) {
    assert_eq!(
        world.failure.get().expect("failure should be recorded"),
        ErrorCode::Conflict
    );
}

#[then("exactly one ingredient is named eggs")]
fn exactly_one_ingredient_is_named_eggs(world: &DiscoveryWorld) {
    let store = world.store();
    let ingredients = world
        .runtime()
        .block_on(store.ingredients.find(&IngredientFilter::all()))
        .expect("ingredients should load");
    let eggs = ingredients
        .iter()
        .filter(|ingredient| ingredient.name.as_str() == "eggs")
        .count();
    assert_eq!(eggs, 1);
}

#[scenario(
    path = "tests/features/recipe_discovery.feature",
    name = "Averages are computed per recipe"
)]
fn averages_are_computed_per_recipe(world: DiscoveryWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/recipe_discovery.feature",
    name = "Unrated recipes have no average"
)]
fn unrated_recipes_have_no_average(world: DiscoveryWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/recipe_discovery.feature",
    name = "Similar recipes share an ingredient"
)]
fn similar_recipes_share_an_ingredient(world: DiscoveryWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/recipe_discovery.feature",
    name = "Searching by difficulty keeps store order"
)]
fn searching_by_difficulty_keeps_store_order(world: DiscoveryWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/recipe_discovery.feature",
    name = "Popularity ties are broken by recipe id"
)]
fn popularity_ties_are_broken_by_recipe_id(world: DiscoveryWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/recipe_discovery.feature",
    name = "A second rating by the same user conflicts"
)]
fn a_second_rating_by_the_same_user_conflicts(world: DiscoveryWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/recipe_discovery.feature",
    name = "Ingredient names resolve to one canonical ingredient"
)]
fn ingredient_names_resolve_to_one_canonical_ingredient(world: DiscoveryWorld) {
    drop(world);
}
