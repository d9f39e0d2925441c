//! Car maximum speed field

use super::encoded::DecimalEncodedValue;

pub const KEY: &str = "max_speed";

/// Stored when no speed limit could be determined
pub const UNSET_SPEED: f64 = f64::INFINITY;

/// Speed used for "no limit" signs (e.g. German autobahns), also the cap
/// applied to every resolved speed
pub const UNLIMITED_SIGN_SPEED: f64 = 150.0;

pub const DEFAULT_BITS: u32 = 7;
pub const DEFAULT_FACTOR: f64 = 2.0;

/// Two-direction km/h field with `+inf` reserved as [`UNSET_SPEED`].
/// The default layout holds 0..=252 in steps of 2.
pub fn create() -> DecimalEncodedValue {
    create_with(DEFAULT_BITS, DEFAULT_FACTOR)
}

pub fn create_with(bits: u32, factor: f64) -> DecimalEncodedValue {
    DecimalEncodedValue::new(KEY, bits, factor, 0.0, true, true)
}
