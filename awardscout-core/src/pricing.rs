use serde::{Deserialize, Serialize};
use crate::flight::Flight;

/// Award side of a flight: what it costs in points plus the cash co-pay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwardFare {
    pub flight_number: Option<String>,
    pub departure_time: Option<String>,
    #[serde(default)]
    pub arrival_time: Option<String>,
    #[serde(default)]
    pub points_required: Option<u64>,
    #[serde(default)]
    pub taxes_fees_usd: Option<f64>,
}

/// Cash side of a flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFare {
    pub flight_number: String,
    pub departure_time: String,
    #[serde(default)]
    pub cash_price_usd: Option<f64>,
}

/// Cents per point: the cash value each point buys once the award co-pay is
/// taken out, rounded to two decimals.
///
/// Returns `None` when the cash price or point cost is zero.
pub fn calculate_cpp(cash_price_usd: f64, taxes_fees_usd: f64, points_required: u64) -> Option<f64> {
    if cash_price_usd == 0.0 || points_required == 0 {
        return None;
    }
    let cpp = (cash_price_usd - taxes_fees_usd) / points_required as f64 * 100.0;
    cpp.is_finite().then(|| round_cents(cpp))
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Pair award fares with cash fares on flight number and departure time.
///
/// The output follows the award list. Award fares lacking a flight number or
/// departure time are dropped; an award fare with no cash counterpart is kept
/// with an empty cash price.
pub fn match_flights(award: &[AwardFare], cash: &[CashFare]) -> Vec<Flight> {
    let mut matched = Vec::with_capacity(award.len());

    for fare in award {
        let (Some(number), Some(departure)) = (&fare.flight_number, &fare.departure_time) else {
            tracing::debug!("Skipping award fare without flight number or departure time");
            continue;
        };

        let cash_price = cash
            .iter()
            .find(|c| &c.flight_number == number && &c.departure_time == departure)
            .and_then(|c| c.cash_price_usd);

        let flight = Flight {
            flight_number: number.clone(),
            departure_time: departure.clone(),
            arrival_time: fare.arrival_time.clone().unwrap_or_default(),
            cash_price_usd: cash_price,
            points_required: fare.points_required,
            taxes_fees_usd: fare.taxes_fees_usd,
            cpp: None,
        };
        matched.push(flight.with_derived_cpp());
    }

    matched
}
