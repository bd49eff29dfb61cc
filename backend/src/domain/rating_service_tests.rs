//! Tests for rating submission and lookup.

use super::*;
use crate::domain::fixtures::{fixture_clock, fixture_now, rating, recipe, seeded_store, user};
use crate::domain::ports::{
    MockIngredientRepository, MockRatingRepository, MockRecipeRepository, MockUserRepository,
    RatingFilter,
};
use crate::domain::{ErrorCode, RecipeId};
use rstest::rstest;

fn draft(recipe_id: RecipeId, score: i64) -> RatingDraft {
    RatingDraft {
        recipe_id,
        score,
        comment: Some("Tasty".to_owned()),
    }
}

#[tokio::test]
async fn submit_records_rating_at_clock_time() {
    let owner = user("Alvaro");
    let dish = recipe(&owner, "Omelette", &[]);
    let store = seeded_store(&[&owner], &[], &[&dish], &[]).await;
    let service = RatingService::new(store, fixture_clock());

    let recorded = service
        .submit(&owner.id, draft(dish.id, 4))
        .await
        .expect("recorded");

    assert_eq!(recorded.score.value(), 4);
    assert_eq!(recorded.created_at, fixture_now());
}

#[tokio::test]
async fn second_rating_for_same_pair_conflicts_and_is_not_stored() {
    let owner = user("Alvaro");
    let rater = user("Bobby");
    let dish = recipe(&owner, "Omelette", &[]);
    let store = seeded_store(&[&owner, &rater], &[], &[&dish], &[]).await;
    let service = RatingService::new(store.clone(), fixture_clock());

    service
        .submit(&rater.id, draft(dish.id, 5))
        .await
        .expect("first rating");
    let err = service
        .submit(&rater.id, draft(dish.id, 1))
        .await
        .expect_err("duplicate rating");

    assert_eq!(err.code(), ErrorCode::Conflict);
    let stored = store
        .ratings
        .find(&RatingFilter::for_recipe(dish.id))
        .await
        .expect("ratings");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored.first().map(|r| r.score.value()), Some(5));
}

#[rstest]
#[case(-1)]
#[case(6)]
#[tokio::test]
async fn out_of_range_score_is_rejected_before_store_access(#[case] score: i64) {
    let mut recipes = MockRecipeRepository::new();
    recipes.expect_find_by_id().never();
    let mut ratings = MockRatingRepository::new();
    ratings.expect_insert_unique().never();
    let store = EntityStore::new(
        Arc::new(MockUserRepository::new()),
        Arc::new(recipes),
        Arc::new(MockIngredientRepository::new()),
        Arc::new(ratings),
    );
    let service = RatingService::new(store, fixture_clock());

    let err = service
        .submit(&UserId::random(), draft(RecipeId::random(), score))
        .await
        .expect_err("invalid score");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}

#[tokio::test]
async fn rating_an_unknown_recipe_is_not_found() {
    let store = seeded_store(&[], &[], &[], &[]).await;
    let service = RatingService::new(store, fixture_clock());

    let err = service
        .submit(&UserId::random(), draft(RecipeId::random(), 3))
        .await
        .expect_err("unknown recipe");

    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn rating_detail_joins_title_and_poster() {
    let owner = user("Charlie");
    let dish = recipe(&owner, "Gazpacho", &[]);
    let review = rating(&dish, &owner, 5, fixture_now());
    let store = seeded_store(&[&owner], &[], &[&dish], &[&review]).await;
    let service = RatingService::new(store, fixture_clock());

    let detail = service.rating_detail(&review.id).await.expect("detail");

    assert_eq!(detail.recipe_title, "Gazpacho");
    assert_eq!(detail.poster, "Charlie");
}

#[tokio::test]
async fn rating_detail_falls_back_when_recipe_and_user_are_gone() {
    let ghost = user("Ghost");
    let lost = recipe(&ghost, "Lost", &[]);
    let review = rating(&lost, &ghost, 1, fixture_now());
    let store = seeded_store(&[], &[], &[], &[&review]).await;
    let service = RatingService::new(store, fixture_clock());

    let detail = service.rating_detail(&review.id).await.expect("detail");

    assert_eq!(detail.recipe_title, "Deleted recipe");
    assert_eq!(detail.poster, "Deleted User");
}

#[tokio::test]
async fn unknown_rating_is_not_found() {
    let store = seeded_store(&[], &[], &[], &[]).await;
    let err = RatingService::new(store, fixture_clock())
        .rating_detail(&RatingId::random())
        .await
        .expect_err("unknown rating");
    assert_eq!(err.code(), ErrorCode::NotFound);
}
