//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see driving ports, so
//! route tests can swap in mocks without touching the entity store.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{
    EntityStore, RatingCommand, RatingQuery, RecipeCommand, RecipeDetailQuery,
    RecipeRankingQuery, RecipeSearchQuery, RecipeStatsQuery,
};
use crate::domain::{
    RatingService, RecipeCommandService, RecipeDetailService, RecipeRankingService,
    RecipeSearchService, RecipeStatsService,
};

/// Port implementations backing the HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Text, field and ingredient search.
    pub search: Arc<dyn RecipeSearchQuery>,
    /// Popular, trending and latest listings.
    pub ranking: Arc<dyn RecipeRankingQuery>,
    /// Corpus statistics.
    pub stats: Arc<dyn RecipeStatsQuery>,
    /// Hydrated recipe views and similarity.
    pub detail: Arc<dyn RecipeDetailQuery>,
    /// Recipe create, update and delete.
    pub recipes: Arc<dyn RecipeCommand>,
    /// Rating submission.
    pub ratings: Arc<dyn RatingCommand>,
    /// Rating lookup.
    pub rating_query: Arc<dyn RatingQuery>,
}

impl HttpState {
    /// Wire every port to the domain services over `store`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use dishared::inbound::http::state::HttpState;
    /// use dishared::outbound::memory::InMemoryEntityStore;
    /// use mockable::DefaultClock;
    ///
    /// let state = HttpState::from_entity_store(
    ///     InMemoryEntityStore::entity_store(),
    ///     Arc::new(DefaultClock),
    /// );
    /// let _data = actix_web::web::Data::new(state);
    /// ```
    #[must_use]
    pub fn from_entity_store(store: EntityStore, clock: Arc<dyn Clock>) -> Self {
        let ratings = Arc::new(RatingService::new(store.clone(), Arc::clone(&clock)));
        Self {
            search: Arc::new(RecipeSearchService::new(store.clone())),
            ranking: Arc::new(RecipeRankingService::new(store.clone(), Arc::clone(&clock))),
            stats: Arc::new(RecipeStatsService::new(store.clone())),
            detail: Arc::new(RecipeDetailService::new(store.clone())),
            recipes: Arc::new(RecipeCommandService::new(store, clock)),
            ratings: ratings.clone(),
            rating_query: ratings,
        }
    }
}
