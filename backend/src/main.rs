//! Server entry-point: loads settings, prepares the store and serves pages.

mod server;

use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use stockroom::inbound::http::health::HealthState;
use stockroom::inbound::http::session_config::{
    BuildMode, fingerprint::key_fingerprint, session_settings_from_env,
};
use stockroom::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use stockroom::settings::AppSettings;

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().map_err(|e| eyre!("failed to load settings: {e}"))?;
    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .wrap_err("invalid session configuration")?;
    info!(
        fingerprint = %key_fingerprint(&session.key),
        source = %session.key_source,
        "session key loaded"
    );

    let mut config = ServerConfig::new(session, settings.bind_addr());
    match settings.database_url()? {
        Some(url) => {
            let applied = run_pending_migrations(&url)
                .await
                .wrap_err("failed to apply database migrations")?;
            info!(applied, "database migrations complete");
            let pool = DbPool::new(
                PoolConfig::new(url).with_max_size(settings.db_max_connections()),
            )
            .await
            .map_err(|e| eyre!("failed to build database pool: {}", e.into_message()))?;
            config = config.with_db_pool(pool);
        }
        None => warn!("STOCKROOM_DATABASE_URL not set; using in-memory store (data is lost on exit)"),
    }

    let health_state = web::Data::new(HealthState::new());
    info!(addr = %settings.bind_addr(), "starting server");
    create_server(health_state, config)?.await?;
    Ok(())
}
