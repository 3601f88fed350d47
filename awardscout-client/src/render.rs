//! Plain-text presentation of the search screen.

use std::fmt::Write;
use awardscout_core::{Flight, SearchMetadata, SearchRequest, SearchResult};
use chrono::{Datelike, NaiveDate};
use crate::state::{Phase, SearchState};

pub fn render(state: &SearchState) -> String {
    let mut out = String::new();

    if let Some(notice) = &state.airports_notice {
        let _ = writeln!(out, "! Airport list unavailable: {}", notice);
    }
    let _ = writeln!(out, "{}", form_line(&state.form, state));

    match &state.phase {
        Phase::Idle => {}
        Phase::Loading { .. } => out.push_str("Searching...\n"),
        Phase::Failed(message) => {
            let _ = writeln!(out, "x {}", message);
        }
        Phase::Results(result) => render_results(&mut out, result),
    }

    out
}

fn form_line(form: &SearchRequest, state: &SearchState) -> String {
    let name = |code: &str| {
        state
            .airports
            .iter()
            .find(|a| a.code == code)
            .map(|a| a.label())
            .unwrap_or_else(|| code.to_string())
    };
    format!(
        "From {} to {} on {} ({})",
        name(&form.origin),
        name(&form.destination),
        form.date,
        passengers(form.passengers)
    )
}

fn render_results(out: &mut String, result: &SearchResult) {
    out.push('\n');
    render_summary(out, &result.search_metadata, result);

    if result.flights.is_empty() {
        out.push_str("\nNo Flights Found\nTry adjusting your search criteria\n");
        return;
    }

    for flight in &result.flights {
        out.push('\n');
        render_card(out, flight);
    }
}

fn render_summary(out: &mut String, meta: &SearchMetadata, result: &SearchResult) {
    let _ = writeln!(out, "{} → {}", meta.origin, meta.destination);
    let _ = writeln!(out, "{} • {}", long_date(meta.date), passengers(meta.passengers));
    let _ = writeln!(out, "{} Flights Found", result.total_results);
    let _ = writeln!(out, "{} with CPP data", result.cpp_count());
}

pub fn render_card(out: &mut String, flight: &Flight) {
    let badge = if flight.has_cpp() { "CPP Available" } else { "Limited Data" };
    let _ = writeln!(out, "{}  [{}]", flight.flight_number, badge);
    let _ = writeln!(
        out,
        "  Departure {}  Arrival {}",
        flight.departure_time, flight.arrival_time
    );

    if let Some(cash) = flight.cash_price_usd {
        let _ = writeln!(out, "  Cash Price ${:.2}", cash);
    }
    if let Some(points) = flight.points_required {
        let _ = writeln!(out, "  Award Points {}", group_thousands(points));
    }
    if let Some(cpp) = flight.cpp {
        let _ = writeln!(out, "  Cents Per Point {:.2}¢", cpp);
    }
    if let Some(taxes) = flight.taxes_fees_usd {
        let _ = writeln!(out, "  Taxes & Fees: ${:.2}", taxes);
    }
}

fn passengers(count: i64) -> String {
    if count == 1 {
        "1 Passenger".to_string()
    } else {
        format!("{} Passengers", count)
    }
}

/// `Saturday, June 1st, 2024`
pub fn long_date(date: NaiveDate) -> String {
    let day = date.day();
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!(
        "{}, {} {}{}, {}",
        date.format("%A"),
        date.format("%B"),
        day,
        suffix,
        date.year()
    )
}

pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
