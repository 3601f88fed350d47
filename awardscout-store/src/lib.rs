pub mod app_config;
pub mod airport_repo;
pub mod flight_repo;

pub use airport_repo::AirportDirectory;
pub use flight_repo::FixtureFlightSource;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

pub(crate) async fn read_json<T: serde::de::DeserializeOwned>(path: &str) -> StoreResult<T> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|source| StoreError::Io {
        path: path.to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
        path: path.to_string(),
        source,
    })
}
