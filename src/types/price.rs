//! Fixed-point auction prices.
//!
//! ## Overview
//!
//! Auction prices are stored as u64 scaled by 10^8 so that the red-black
//! ordering key `(price, item_id)` compares exactly. Floats would make
//! equal-looking prices compare unequal after arithmetic.
//!
//! ## Examples
//!
//! ```
//! use arcade_ledger::types::price::{to_fixed, from_fixed};
//!
//! let price = to_fixed("150.25").unwrap();
//! assert_eq!(price, 15_025_000_000);
//! assert_eq!(from_fixed(price), "150.25000000");
//! ```

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Scaling factor for fixed-point prices: 10^8
pub const SCALE: u64 = 100_000_000;

// ============================================================================
// Conversion Functions
// ============================================================================

/// Convert a decimal string to a fixed-point price
///
/// Returns `None` for negative, unparsable or out-of-range input.
///
/// ```
/// use arcade_ledger::types::price::to_fixed;
///
/// assert_eq!(to_fixed("1"), Some(100_000_000));
/// assert_eq!(to_fixed("0.00000001"), Some(1));
/// assert_eq!(to_fixed("-3"), None);
/// ```
pub fn to_fixed(s: &str) -> Option<u64> {
    let decimal = Decimal::from_str(s).ok()?;
    decimal_to_fixed(decimal)
}

/// Convert a Decimal to a fixed-point price, rounding to 8 places
pub fn decimal_to_fixed(d: Decimal) -> Option<u64> {
    if d.is_sign_negative() {
        return None;
    }

    let scaled = d.checked_mul(Decimal::from(SCALE))?;
    scaled.round_dp(0).to_u64()
}

/// Convert a fixed-point price back to a Decimal
pub fn fixed_to_decimal(value: u64) -> Decimal {
    Decimal::from(value) / Decimal::from(SCALE)
}

/// Render a fixed-point price with all 8 decimal places
///
/// ```
/// use arcade_ledger::types::price::from_fixed;
///
/// assert_eq!(from_fixed(5_000_000_000), "50.00000000");
/// ```
pub fn from_fixed(value: u64) -> String {
    format!("{:.8}", fixed_to_decimal(value))
}

/// Render a fixed-point price without trailing zeros
///
/// ```
/// use arcade_ledger::types::price::from_fixed_trimmed;
///
/// assert_eq!(from_fixed_trimmed(150_000_000), "1.5");
/// ```
pub fn from_fixed_trimmed(value: u64) -> String {
    format!("{}", fixed_to_decimal(value).normalize())
}
