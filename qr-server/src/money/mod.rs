//! Money calculation utilities using rust_decimal for precision
//!
//! All calculations are done using `Decimal` internally, then converted to
//! `f64` for storage/serialization. Tickets and carts share the same formula:
//! a fixed 10% surtax on the subtotal, rounded half-up to 2 decimal places.

use rust_decimal::prelude::*;
use shared::models::{CartLine, CartTotals, TicketItem};

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Fixed 10% surtax applied to every subtotal
fn surtax_rate() -> Decimal {
    Decimal::new(10, 2) // 0.10
}

/// Convert f64 to Decimal for calculation
///
/// Input values are pre-validated at the boundary. If NaN/Infinity somehow
/// reaches here, logs an error and returns ZERO to avoid silent corruption.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// round2: round a raw amount to 2 decimal places, half-up
pub fn round2(value: f64) -> f64 {
    to_f64(to_decimal(value))
}

/// Subtotal over (quantity, unit_price) pairs
fn subtotal(pairs: impl Iterator<Item = (i32, f64)>) -> Decimal {
    pairs.fold(Decimal::ZERO, |acc, (qty, price)| {
        acc + Decimal::from(qty) * to_decimal(price)
    })
}

/// Ticket total: round2(subtotal * 1.10), fixed at creation time
pub fn ticket_total(items: &[TicketItem]) -> f64 {
    let sub = subtotal(items.iter().map(|it| (it.quantity, it.unit_price)));
    to_f64(sub * (Decimal::ONE + surtax_rate()))
}

/// Cart totals: subtotal, 10% surtax and rounded total
pub fn cart_totals(lines: &[CartLine]) -> CartTotals {
    let sub = subtotal(lines.iter().map(|l| (l.quantity, l.unit_price)));
    let tax = sub * surtax_rate();
    CartTotals {
        subtotal: to_f64(sub),
        tax: to_f64(tax),
        total: to_f64(sub + tax),
    }
}

#[cfg(test)]
mod tests;
