//! Compute-Hour Pricing
//!
//! A fixed base fee plus a linear per-hour rate, in cents.

/// Base fee charged on every checkout ($10)
pub const BASE_FEE_CENTS: i64 = 1000;

/// Rate per compute hour ($5)
pub const HOURLY_RATE_CENTS: i64 = 500;

/// Compute hours used when the caller does not ask for a quantity
pub const DEFAULT_COMPUTE_HOURS: f64 = 10.0;

/// Price of `compute_hours` hours in cents.
///
/// No bound is enforced on the input. Fractional hours are rounded to the
/// nearest cent, since Stripe only accepts integer unit amounts. The float to
/// integer conversion saturates: prices beyond `i64` range become `i64::MAX`
/// or `i64::MIN` (and Stripe rejects them), while the metadata still carries
/// the requested hours.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn price_cents(compute_hours: f64) -> i64 {
    compute_hours
        .mul_add(HOURLY_RATE_CENTS as f64, BASE_FEE_CENTS as f64)
        .round() as i64
}
