//! Command-line client for forward and reverse geocoding and sun times.
//!
//! Prints JSON on stdout; logs go to stderr.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use sunwalk::models::DEFAULT_LOCATION_NAME;
use sunwalk::{calculate_times, Config, Location, PhotonClient, RequestOptions, DEFAULT_LOCATION};

#[derive(Parser, Debug)]
#[command(name = "query")]
#[command(about = "Geocoding queries against Photon")]
struct Args {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Cancel the request after this many seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Forward search for free text
    Search {
        /// Search text
        text: String,

        /// Bias latitude
        #[arg(long, allow_hyphen_values = true, requires = "lon")]
        lat: Option<f64>,

        /// Bias longitude
        #[arg(long, allow_hyphen_values = true, requires = "lat")]
        lon: Option<f64>,

        /// Number of results
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Reverse lookup of a coordinate (defaults to the centre of Germany)
    Reverse {
        #[arg(long, allow_hyphen_values = true, requires = "lon")]
        lat: Option<f64>,

        #[arg(long, allow_hyphen_values = true, requires = "lat")]
        lon: Option<f64>,

        /// Number of results
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Sunrise, sunset and twilight times (defaults to the centre of Germany)
    Times {
        #[arg(long, allow_hyphen_values = true, requires = "lon")]
        lat: Option<f64>,

        #[arg(long, allow_hyphen_values = true, requires = "lat")]
        lon: Option<f64>,

        /// Day to compute, YYYY-MM-DD (defaults to today, UTC)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    let cancel = CancellationToken::new();
    spawn_cancel_triggers(cancel.clone(), args.timeout_secs);

    match args.command {
        Command::Search {
            text,
            lat,
            lon,
            limit,
        } => {
            let options = request_options(limit, cancel);
            let places = photon_client(&config)?
                .search(&text, lat, lon, options)
                .await
                .with_context(|| format!("Search for '{}' failed", text))?;
            info!("{} places", places.len());
            print_json(&places)
        }
        Command::Reverse { lat, lon, limit } => {
            let location = location_or_default(lat, lon);
            let options = request_options(limit, cancel);
            let places = photon_client(&config)?
                .reverse(location.latitude, location.longitude, options)
                .await
                .with_context(|| {
                    format!(
                        "Reverse lookup of ({}, {}) failed",
                        location.latitude, location.longitude
                    )
                })?;
            info!("{} places", places.len());
            print_json(&places)
        }
        Command::Times { lat, lon, date } => {
            let location = location_or_default(lat, lon);
            let date = match date {
                Some(day) => day_noon(day)?,
                None => Utc::now(),
            };
            print_json(&calculate_times(
                location.latitude,
                location.longitude,
                date,
            ))
        }
    }
}

fn photon_client(config: &Config) -> Result<PhotonClient> {
    info!("Using Photon at {}", config.photon.base_url);
    PhotonClient::new(&config.photon).context("Failed to create Photon client")
}

/// Clap only lets both or neither through.
fn location_or_default(lat: Option<f64>, lon: Option<f64>) -> Location {
    match (lat, lon) {
        (Some(lat), Some(lon)) => Location::new(lat, lon),
        _ => {
            info!("No coordinates given, using {}", DEFAULT_LOCATION_NAME);
            DEFAULT_LOCATION
        }
    }
}

fn day_noon(day: NaiveDate) -> Result<DateTime<Utc>> {
    Ok(day
        .and_hms_opt(12, 0, 0)
        .with_context(|| format!("Invalid date {}", day))?
        .and_utc())
}

fn request_options(limit: Option<u32>, cancel: CancellationToken) -> RequestOptions {
    let options = RequestOptions::default().with_cancel(cancel);
    match limit {
        Some(limit) => options.with_limit(limit),
        None => options,
    }
}

/// Fire `cancel` on Ctrl-C or once the deadline passes.
fn spawn_cancel_triggers(cancel: CancellationToken, timeout_secs: Option<u64>) {
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling request");
            on_signal.cancel();
        }
    });

    if let Some(secs) = timeout_secs {
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(secs)).await;
            warn!("Deadline of {}s reached, cancelling request", secs);
            cancel.cancel();
        });
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
