// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Terraroute Contributors

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, LevelFilter};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use std::fs;
use std::path::PathBuf;
use terraroute_core::camera::{self, CameraTarget};
use terraroute_core::models::{find_airport, Airport, GeoPoint, RouteResult};
use terraroute_core::palette::{ColorSource, RandomColors};
use terraroute_core::selection::{self, Endpoint, Selection};
use terraroute_core::transform::{self, Primitives};
use terraroute_core::{ConfigManager, Event, GlobeSession, GlobeView, HttpRouteService, RouteService};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Backend base URL (overrides the config file)
    #[arg(short, long, env = "TERRAROUTE_API")]
    api: Option<String>,

    /// Config file to use instead of the per-user one
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// More log output (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List picker candidates, leaving out the airport chosen in the other picker
    Airports {
        #[arg(long)]
        other: Option<String>,
    },
    /// List countries that can be excluded
    Countries,
    /// Request a route from the backend and print what the globe would draw
    Route {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        /// Country codes to exclude
        #[arg(long = "exclude")]
        exclude: Vec<String>,
        #[arg(long, default_value_t = 1280)]
        width: u32,
        #[arg(long, default_value_t = 720)]
        height: u32,
        /// Fix the palette start for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Transform a saved route response without contacting the backend
    Render {
        /// JSON route response
        route: PathBuf,
        /// JSON airport list used for the hover labels
        #[arg(long)]
        airports: Option<PathBuf>,
        #[arg(long, default_value_t = 1280)]
        width: u32,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the active configuration
    Config,
}

/// Stands in for the globe; logs what it is told to draw.
struct LogView;

impl GlobeView for LogView {
    fn set_primitives(&mut self, primitives: &Primitives) {
        debug!(
            "draw: {} arcs, {} paths, {} labels",
            primitives.arcs.len(),
            primitives.paths.len(),
            primitives.labels.len()
        );
    }

    fn set_size(&mut self, width: u32, height: u32) {
        debug!("resize: {}x{}", width, height);
    }

    fn point_of_view(&mut self, target: CameraTarget) {
        debug!(
            "camera: lat={:.2} lng={:.2} altitude={}",
            target.lat, target.lng, target.altitude
        );
    }
}

fn color_source(seed: Option<u64>) -> Box<dyn ColorSource> {
    match seed {
        Some(seed) => Box::new(RandomColors::seeded(seed)),
        None => Box::new(RandomColors::from_entropy()),
    }
}

/// Airport record for a route endpoint that is missing from the local list.
fn stand_in(code: &str, point: Option<&GeoPoint>) -> Airport {
    let point = point.copied().unwrap_or(GeoPoint::new(0.0, 0.0));
    Airport {
        iata: code.to_string(),
        name: code.to_string(),
        city: String::new(),
        country: String::new(),
        continent: String::new(),
        latitude: point.lat,
        longitude: point.lng,
    }
}

fn render(route: &RouteResult, airports: &[Airport], width: u32, seed: Option<u64>) -> serde_json::Value {
    let path = route.path.as_deref().unwrap_or_default();
    let endpoint = |code: &str, point: Option<&GeoPoint>| {
        find_airport(airports, code)
            .cloned()
            .unwrap_or_else(|| stand_in(code, point))
    };

    let mut selection = Selection::new();
    selection.set(Endpoint::Departure, Some(endpoint(&route.route.departure, path.first())));
    selection.set(Endpoint::Destination, Some(endpoint(&route.route.destination, path.last())));

    let mut colors = color_source(seed);
    let primitives = transform::transform(Some(route), &selection, airports, colors.as_mut());
    let camera = camera::plan(&primitives, width);
    serde_json::json!({ "primitives": primitives, "camera": camera })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    TermLogger::init(
        level,
        ConfigBuilder::new().build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("Failed to initialise logging")?;

    let manager = match &cli.config {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new(),
    };
    let mut config = manager.load()?;
    if let Some(api) = cli.api {
        config.api_base_url = api;
    }

    match cli.command {
        Commands::Airports { other } => {
            let service = HttpRouteService::new(&config)?;
            let airports = service.airports()?;
            let other = match other.as_deref() {
                Some(code) => Some(
                    find_airport(&airports, code)
                        .ok_or_else(|| anyhow::anyhow!("Unknown airport code '{}'", code))?
                        .clone(),
                ),
                None => None,
            };
            for option in selection::candidates(&airports, other.as_ref()) {
                println!("{}", option.label);
            }
        }
        Commands::Countries => {
            let service = HttpRouteService::new(&config)?;
            for option in selection::country_options(&service.countries()?) {
                println!("{} | {}", option.country.code, option.label);
            }
        }
        Commands::Route {
            from,
            to,
            exclude,
            width,
            height,
            seed,
        } => {
            let service = HttpRouteService::new(&config)?;
            let mut view = LogView;
            let mut session = GlobeSession::mount(width, height, color_source(seed), &mut view)
                .with_forward_exclusions(config.forward_excluded_countries);
            session.load_reference_data(&service, &mut view)?;

            for (endpoint, code) in [(Endpoint::Departure, from), (Endpoint::Destination, to)] {
                if find_airport(session.airports(), &code).is_none() {
                    anyhow::bail!("Unknown airport code '{}'", code);
                }
                session.dispatch(Event::Select(endpoint, Some(code)), &mut view);
            }
            session.dispatch(Event::ExcludeCountries(exclude), &mut view);

            let request = session
                .request()
                .context("Departure and destination must be different airports")?;
            session
                .fetch_route(&service, &mut view)
                .context("Route request failed")?;

            let out = serde_json::json!({
                "request": request,
                "primitives": session.primitives(),
                "camera": session.camera(),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Commands::Render {
            route,
            airports,
            width,
            seed,
        } => {
            let content = fs::read_to_string(&route)
                .with_context(|| format!("Failed to read {}", route.display()))?;
            let route: RouteResult =
                serde_json::from_str(&content).context("Failed to parse route response")?;
            let airports: Vec<Airport> = match airports {
                Some(path) => {
                    let content = fs::read_to_string(&path)
                        .with_context(|| format!("Failed to read {}", path.display()))?;
                    serde_json::from_str(&content).context("Failed to parse airport list")?
                }
                None => Vec::new(),
            };
            let out = render(&route, &airports, width, seed);
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Commands::Config => {
            println!("config file: {}", manager.path().display());
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use terraroute_core::models::{Distances, RouteRequest};

    fn saved_route() -> RouteResult {
        RouteResult {
            route: RouteRequest {
                departure: "JFK".to_string(),
                destination: "LHR".to_string(),
                borders: Vec::new(),
            },
            distances: Distances::new(5550.0, 2996.8),
            path: Some(vec![GeoPoint::new(40.64, -73.78), GeoPoint::new(51.47, -0.45)]),
            midpoint: GeoPoint::new(52.3, -38.4),
        }
    }

    #[test]
    fn test_render_without_airport_list_uses_code_labels() {
        let out = render(&saved_route(), &[], 1280, Some(3));
        assert_eq!(out["primitives"]["arcs"][0]["label"], "JFK --> LHR");
        assert_eq!(out["camera"]["altitude"], 2.0);
        assert_eq!(out["primitives"]["labels"].as_array().map(|l| l.len()), Some(3));
    }

    #[test]
    fn test_render_same_code_both_ends_draws_nothing() {
        let mut route = saved_route();
        route.route.destination = "JFK".to_string();
        let out = render(&route, &[], 800, Some(3));
        assert_eq!(out["primitives"]["arcs"].as_array().map(|a| a.len()), Some(0));
        assert_eq!(out["camera"]["lat"], 40.0);
    }
}
