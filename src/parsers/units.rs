//! Speed value extraction from OSM tag strings

use crate::ev::max_speed::UNLIMITED_SIGN_SPEED;

const KM_PER_MILE: f64 = 1.609344;
const KM_PER_NAUTICAL_MILE: f64 = 1.852;

/// Canonical speed for "walk" and living-street zone values
pub const WALK_SPEED: f64 = 6.0;

/// Unit suffixes and their km/h factor, matched against the end of the value
const UNITS: [(&str, f64); 5] = [
    ("km/h", 1.0),
    ("kmh", 1.0),
    ("kph", 1.0),
    ("mph", KM_PER_MILE),
    ("knots", KM_PER_NAUTICAL_MILE),
];

/// Parse a `maxspeed`-style value into km/h.
///
/// Accepts bare integers (km/h), integers with a unit suffix, `none`, `walk`
/// and zone values such as `DE:urban`. Anything else, including missing,
/// empty, signed, fractional or zero values, yields `None`.
///
/// ```
/// use butterfly_maxspeed::parsers::units::string_to_kmh;
///
/// assert_eq!(string_to_kmh(Some("50")), Some(50.0));
/// assert_eq!(string_to_kmh(Some("DE:urban")), Some(50.0));
/// assert_eq!(string_to_kmh(Some("signals")), None);
/// assert_eq!(string_to_kmh(None), None);
/// ```
pub fn string_to_kmh(value: Option<&str>) -> Option<f64> {
    let value = value?.trim();
    match value {
        "" => return None,
        "none" => return Some(UNLIMITED_SIGN_SPEED),
        "walk" => return Some(WALK_SPEED),
        _ => {}
    }

    if let Some((_, zone)) = value.split_once(':') {
        return zone_speed(zone);
    }

    let (number, factor) = UNITS
        .iter()
        .find_map(|(suffix, factor)| value.strip_suffix(suffix).map(|n| (n, *factor)))
        .unwrap_or((value, 1.0));

    let number = number.trim_end();
    if !number.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let magnitude: u32 = number.parse().ok()?;
    if magnitude == 0 {
        return None;
    }
    Some(f64::from(magnitude) * factor)
}

/// Implicit limits written as `<country>:<zone>`
fn zone_speed(zone: &str) -> Option<f64> {
    match zone {
        "urban" => Some(50.0),
        "rural" | "trunk" => Some(80.0),
        "motorway" => Some(UNLIMITED_SIGN_SPEED),
        "living_street" => Some(WALK_SPEED),
        _ => None,
    }
}
