use serde::{Deserialize, Serialize};
use crate::{CoreError, CoreResult};

/// An entry in the airport directory served to search clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airport {
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl Airport {
    pub fn new(code: &str, name: &str, city: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            city: Some(city.to_string()),
        }
    }

    /// Label used by selection lists, e.g. `LAX - Los Angeles International`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.code, self.name)
    }
}

/// Uppercases a three letter IATA code, rejecting anything else.
pub fn normalize_code(code: &str) -> CoreResult<String> {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return Err(CoreError::MissingAirport);
    }
    if trimmed.chars().count() != 3 {
        return Err(CoreError::InvalidAirportLength);
    }
    if !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CoreError::InvalidAirportCode(trimmed.to_string()));
    }
    Ok(trimmed.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_code_uppercases() {
        assert_eq!(normalize_code("lax").unwrap(), "LAX");
        assert_eq!(normalize_code(" jfk ").unwrap(), "JFK");
    }

    #[test]
    fn test_normalize_code_rejects_bad_input() {
        assert_eq!(normalize_code(""), Err(CoreError::MissingAirport));
        assert_eq!(normalize_code("LA"), Err(CoreError::InvalidAirportLength));
        assert_eq!(normalize_code("KLAX"), Err(CoreError::InvalidAirportLength));
        assert_eq!(
            normalize_code("L4X"),
            Err(CoreError::InvalidAirportCode("L4X".to_string()))
        );
    }

    #[test]
    fn test_airport_without_city_deserializes() {
        let json = r#"{ "code": "BOS", "name": "Logan International" }"#;
        let airport: Airport = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(airport.city, None);
        assert_eq!(airport.label(), "BOS - Logan International");
    }
}
