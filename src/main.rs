//! # Butterfly-maxspeed CLI
//!
//! Resolves the speed limits and car access of a single way from tags given
//! on the command line. Meant for checking country rules and encodings, not
//! for processing OSM files.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use butterfly_maxspeed::{Config, SpatialRuleSet, Way};

mod cli;

/// Command-line interface for butterfly-maxspeed
#[derive(Parser)]
#[command(name = "butterfly-maxspeed")]
#[command(version, about = "Resolve OSM way speed limits and access with country rules")]
#[command(long_about = "Resolves car max speed and access for one way:
  butterfly-maxspeed -t highway=residential -t maxspeed=30
  butterfly-maxspeed -t highway=motorway -c DEU
  butterfly-maxspeed -t highway=living_street -c AUT --spatial-rule-set

Countries are applied in the order given, as if their areas matched the way.")]
struct Cli {
    /// Way tag as key=value (repeatable)
    #[arg(short, long = "tag", value_parser = cli::parse_tag)]
    tags: Vec<(String, String)>,

    /// ISO 3166-1 alpha-3 code of an area covering the way (repeatable)
    #[arg(short, long = "country")]
    countries: Vec<String>,

    /// Attach the countries to the way as a spatial rule set instead of matched areas
    #[arg(long)]
    spatial_rule_set: bool,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logging to stderr, RUST_LOG overrides the default level
    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into()))
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let config = match &cli.config {
        Some(path) => Config::from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default(),
    };
    let parsers = config.build().context("Invalid parser configuration")?;

    let mut way: Way = cli.tags.iter().cloned().collect();
    let areas = cli::areas_for_countries(&cli.countries);
    let areas = if cli.spatial_rule_set {
        let registry = config.registry()?;
        way.set_spatial_rule_set(SpatialRuleSet::from_areas(&registry, &areas));
        Vec::new()
    } else {
        areas
    };
    debug!(tags = cli.tags.len(), areas = areas.len(), "resolving way");

    let mut flags = parsers.create_edge_flags();
    let attributes = parsers.handle_way_tags(&mut flags, &way, &areas)?;

    let report = cli::Report {
        attributes,
        edge_flags: flags.words().to_vec(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
