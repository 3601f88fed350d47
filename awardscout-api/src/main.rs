use std::net::SocketAddr;
use std::sync::Arc;
use anyhow::Context;
use awardscout_api::{app, AppState};
use awardscout_store::{app_config::Config, AirportDirectory, FixtureFlightSource};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "awardscout_api=debug,awardscout_store=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting AwardScout API on port {}", config.server.port);

    let airports = match &config.airports.path {
        Some(path) => AirportDirectory::load(path).await?,
        None => AirportDirectory::default(),
    };

    let flights = match &config.flights.fixture_path {
        Some(path) => FixtureFlightSource::load(path).await?,
        None => {
            tracing::warn!("No flight fixture configured, searches will return no flights");
            FixtureFlightSource::default()
        }
    };

    let app_state = AppState {
        airports: Arc::new(airports),
        flights: Arc::new(flights),
        allowed_origins: config.server.allowed_origins.clone(),
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}
