use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub airports: AirportsConfig,
    #[serde(default)]
    pub flights: FlightsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://localhost:5173".to_string(),
    ]
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AirportsConfig {
    /// JSON file shaped like the `/api/airports` body. Built-in list when unset.
    pub path: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct FlightsConfig {
    /// Route fixture served by the search endpoint. No flights when unset.
    pub fixture_path: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .set_default("server.port", 8000)?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `AWARDSCOUT_SERVER__PORT=9000`
            .add_source(config::Environment::with_prefix("AWARDSCOUT").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_default_when_missing() {
        let s = config::Config::builder()
            .set_default("server.port", 8000)
            .unwrap()
            .build()
            .unwrap();
        let cfg: Config = s.try_deserialize().expect("Failed to deserialize");

        assert_eq!(cfg.server.port, 8000);
        assert_eq!(cfg.server.allowed_origins.len(), 2);
        assert!(cfg.airports.path.is_none());
        assert!(cfg.flights.fixture_path.is_none());
    }
}
