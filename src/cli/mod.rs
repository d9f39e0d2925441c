//! CLI-specific utilities for butterfly-maxspeed
//!
//! Argument parsing helpers and the JSON report, kept apart from the library.

use serde::Serialize;

use butterfly_maxspeed::{CustomArea, WayAttributes};

/// Parse a `key=value` tag argument
pub fn parse_tag(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{arg}'")),
    }
}

/// One matched area per country code, in command-line order
pub fn areas_for_countries(codes: &[String]) -> Vec<CustomArea> {
    codes.iter().map(|code| CustomArea::with_country(code)).collect()
}

/// What the CLI prints for a resolved way.
/// Unset speeds (`+inf`) serialize as `null`.
#[derive(Debug, Serialize)]
pub struct Report {
    #[serde(flatten)]
    pub attributes: WayAttributes,
    pub edge_flags: Vec<u32>,
}
