//! Money helpers.
//!
//! Amounts are accepted as [`Decimal`] and converted to integer cents exactly
//! once, rounding half away from zero. Everything past that boundary is `i64`
//! arithmetic.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{LedgerError, Result};

/// Minimum opening balance ($100.00), compared against the requested amount.
pub const MIN_OPENING_BALANCE: Decimal = Decimal::ONE_HUNDRED;

/// Round an amount to 2 decimal places and convert it to cents.
///
/// # Errors
///
/// Returns `LedgerError::InvalidAmount` if the amount does not fit in `i64` cents.
pub fn to_cents(amount: Decimal) -> Result<i64> {
    amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|cents| cents.to_i64())
        .ok_or_else(|| LedgerError::InvalidAmount(format!("{amount} is out of range")))
}

/// Smallest whole number of cents that covers `amount`.
///
/// Used to report what a rejected request needed; saturates at `i64::MAX`.
pub(crate) fn cents_covering(amount: Decimal) -> i64 {
    amount
        .round_dp_with_strategy(2, RoundingStrategy::AwayFromZero)
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|cents| cents.to_i64())
        .unwrap_or(i64::MAX)
}

/// Exact decimal value of a cent count.
#[must_use]
pub fn cents_to_decimal(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

/// Convert cents to a floating-point amount for display on the wire.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn cents_to_f64(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// Format cents as a dollar string, e.g. `$150.00`.
#[must_use]
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}${}.{:02}", abs / 100, abs % 100)
}
