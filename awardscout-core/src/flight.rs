use serde::{Deserialize, Serialize};
use crate::pricing::calculate_cpp;

/// A single priced flight as returned by `/api/search`.
///
/// Every price field is optional: sources often know the award side of a
/// flight without the matching cash fare, or the other way around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub flight_number: String,
    pub departure_time: String,
    pub arrival_time: String,
    #[serde(default)]
    pub cash_price_usd: Option<f64>,
    #[serde(default)]
    pub points_required: Option<u64>,
    #[serde(default)]
    pub taxes_fees_usd: Option<f64>,
    /// Cents per point, derived server side.
    #[serde(default)]
    pub cpp: Option<f64>,
}

impl Flight {
    pub fn new(flight_number: &str, departure_time: &str, arrival_time: &str) -> Self {
        Self {
            flight_number: flight_number.to_string(),
            departure_time: departure_time.to_string(),
            arrival_time: arrival_time.to_string(),
            cash_price_usd: None,
            points_required: None,
            taxes_fees_usd: None,
            cpp: None,
        }
    }

    pub fn has_cpp(&self) -> bool {
        self.cpp.is_some()
    }

    /// Fill in `cpp` from the price fields when the source left it empty.
    /// A value supplied by the source is never overwritten.
    pub fn with_derived_cpp(mut self) -> Self {
        if self.cpp.is_none() {
            self.cpp = match (self.cash_price_usd, self.taxes_fees_usd, self.points_required) {
                (Some(cash), Some(taxes), Some(points)) => calculate_cpp(cash, taxes, points),
                _ => None,
            };
        }
        self
    }
}
