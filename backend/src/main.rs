//! DiShared engine entry-point: loads settings, optionally seeds demo data,
//! and serves the HTTP API.

mod server;

use std::sync::Arc;

use actix_web::cookie::SameSite;
use actix_web::web;
use mockable::{Clock, DefaultClock};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use dishared::demo_data::seed_demo_data;
use dishared::inbound::http::health::HealthState;
use dishared::outbound::memory::InMemoryEntityStore;

use server::{ServerConfig, ServerSettings, create_server, load_session_key};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(err) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %err, "tracing init failed");
    }

    let settings = ServerSettings::load()
        .map_err(|err| std::io::Error::other(format!("invalid configuration: {err}")))?;
    let bind_addr = settings.bind_addr().map_err(|err| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("invalid bind address: {err}"),
        )
    })?;
    let key = load_session_key(&settings.session_key_file(), settings.session_allow_ephemeral)?;

    let store = InMemoryEntityStore::entity_store();
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    if settings.seed_demo {
        let outcome = seed_demo_data(&store, Arc::clone(&clock))
            .await
            .map_err(std::io::Error::other)?;
        info!(?outcome, "demo data loaded");
    }

    let config = ServerConfig::new(key, settings.cookie_secure(), SameSite::Lax, bind_addr)
        .with_entity_store(store)
        .with_clock(clock);
    let health_state = web::Data::new(HealthState::new());
    info!(%bind_addr, "starting server");
    create_server(health_state, config)?.await
}
