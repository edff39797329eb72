use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use nearby_lib::catalog::catalog_source_from_config;
use nearby_lib::checklist::{default_items, process_steps, Checklist, JsonFileStore};
use nearby_lib::location::{
    FixedLocationProvider, LocationFailure, LocationProvider, UnavailableLocationProvider,
};
use nearby_lib::models::{Coordinate, DocumentCategory, SearchState};
use nearby_lib::proximity::format::{directions_url, format_distance, no_centers_message};
use nearby_lib::proximity::{NearbyCentersManager, NearbyListing};
use nearby_lib::utils::config::{sanitize_radius, NearbyConfig};
use nearby_lib::utils::env::load_env;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List service centers for a document, nearest first when a position is known
    Search {
        /// Document category (aadhar, pan, voter, passport)
        #[arg(long, default_value = "aadhar")]
        category: DocumentCategory,

        /// Your latitude in decimal degrees
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Your longitude in decimal degrees
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,

        /// Search radius in kilometers (defaults to SEARCH_RADIUS_KM or 100)
        #[arg(long)]
        radius: Option<f64>,

        /// Only show centers whose name or area contains this text
        #[arg(long, default_value = "")]
        query: String,
    },
    /// Show or update the document checklist for a category
    Checklist {
        #[arg(long, default_value = "aadhar")]
        category: DocumentCategory,

        /// Tick or untick the item at this position (starting at 1)
        #[arg(long)]
        toggle: Option<usize>,
    },
    /// List the supported document categories
    Categories,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    info!("Starting nearby center lookup");
    load_env();

    let cli = Cli::parse();
    let config = NearbyConfig::from_env();
    config.log_config();

    match cli.command {
        Command::Search {
            category,
            lat,
            lon,
            radius,
            query,
        } => {
            let position = match (lat, lon) {
                (Some(lat), Some(lon)) => Some((lat, lon)),
                _ => config.user_position(),
            };
            let radius_km = sanitize_radius(radius.unwrap_or(config.radius_km));
            run_search(&config, category, position, radius_km, query).await
        }
        Command::Checklist { category, toggle } => run_checklist(&config, category, toggle),
        Command::Categories => {
            for category in DocumentCategory::ALL {
                println!("{:<10} {}", category.key(), category.title());
            }
            Ok(())
        }
    }
}

async fn run_search(
    config: &NearbyConfig,
    category: DocumentCategory,
    position: Option<(f64, f64)>,
    radius_km: f64,
    query: String,
) -> Result<()> {
    let source = catalog_source_from_config(config)?;
    let catalog = source.load().await.context("Failed to load center catalog")?;
    let manager = NearbyCentersManager::new(catalog, config.location_timeout());

    let provider: Box<dyn LocationProvider> = match position {
        Some((lat, lon)) => {
            let origin = Coordinate::new(lat, lon).context("Invalid --lat/--lon")?;
            Box::new(FixedLocationProvider::new(origin))
        }
        None => {
            info!("No position supplied; listing centers without distances");
            Box::new(UnavailableLocationProvider::new(LocationFailure::ProviderError))
        }
    };

    let state = SearchState::new(category)
        .with_radius(radius_km)
        .with_query(query);
    let outcome = manager
        .search(provider.as_ref(), &state)
        .await
        .ok_or_else(|| anyhow!("Search was superseded by a newer request"))?;

    println!("{} centers", category.title());
    if let NearbyListing::Unranked { reason, .. } = &outcome.listing {
        println!("Distances unknown: {}", reason);
    }
    if outcome.listing.is_empty() {
        if outcome.listing.distances_known() {
            println!("{}", no_centers_message(radius_km));
        } else {
            println!("No centers listed for this document");
        }
        return Ok(());
    }

    for (index, (center, distance)) in outcome.listing.entries().into_iter().enumerate() {
        let rating = center
            .rating
            .map(|r| format!("  ★ {:.1}", r))
            .unwrap_or_default();
        println!("{:>2}. {}{}", index + 1, center.name, rating);
        println!("    {}", center.vicinity);
        if let Some(distance) = distance {
            println!("    {} away", format_distance(distance));
        }
        println!("    {}", directions_url(center.location)?);
    }
    Ok(())
}

fn run_checklist(
    config: &NearbyConfig,
    category: DocumentCategory,
    toggle: Option<usize>,
) -> Result<()> {
    let mut store = JsonFileStore::open(&config.checklist_store_path)?;
    let mut checklist = Checklist::load(&store, category, default_items(category))?;

    if let Some(position) = toggle {
        let index = position
            .checked_sub(1)
            .ok_or_else(|| anyhow!("Checklist positions start at 1"))?;
        checklist.toggle(&mut store, index)?;
    }

    println!(
        "{} - required documents ({}% complete)",
        category.title(),
        checklist.progress_percent()
    );
    for (index, (item, checked)) in checklist.entries().enumerate() {
        println!(
            "{:>2}. [{}] {}",
            index + 1,
            if checked { "x" } else { " " },
            item
        );
    }

    println!();
    println!("Process steps:");
    for (index, step) in process_steps(category).iter().enumerate() {
        println!("{:>2}. {}", index + 1, step);
    }
    Ok(())
}
