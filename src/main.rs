use clap::Parser;
use fetch_dogs::config::Settings;
use fetch_dogs::core::sort_by_distance;
use fetch_dogs::models::{Coordinates, LocationSearchRequest, LoginRequest};
use fetch_dogs::routes::commands::{Command, HELP};
use fetch_dogs::routes::{render, Navigation, Route, Router};
use fetch_dogs::{ApiClient, SearchController};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Search adoptable dogs from the terminal
#[derive(Debug, Parser)]
#[command(name = "fetch-dogs", version, about)]
struct Args {
    /// Name to log in with
    #[arg(long)]
    name: String,

    /// Email to log in with
    #[arg(long)]
    email: String,

    /// Configuration file (defaults to config/default.toml and config/local.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_logging(settings: &Settings) {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let args = Args::parse();

    let settings = match &args.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }?;

    init_logging(&settings);
    info!("Using dogs service at {}", settings.api.base_url);

    let api = ApiClient::from_settings(&settings.api)?;
    let router = Router::new(api.clone());

    if let Err(e) = api.login(&LoginRequest::new(args.name, args.email)).await {
        error!("Login failed: {}", e);
        eprintln!("Login failed: {}", e);
        std::process::exit(1);
    }

    match router.navigate(Route::Search.path()).await {
        Navigation::Render(Route::Search) => {}
        Navigation::Redirect { message, .. } => {
            eprintln!("{}", message);
            std::process::exit(1);
        }
        other => {
            eprintln!("Unexpected navigation: {:?}", other);
            std::process::exit(1);
        }
    }

    let controller = SearchController::with_options(
        api.clone(),
        settings.search.sort_order(),
        settings.search.page_size,
    );
    controller.mount().await;
    println!("{}", render::search_page(&controller.snapshot().await));
    println!("Type `help` for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };

        match command {
            Command::Breed(breed) => controller.set_breed(breed).await,
            Command::Zip(zip) => controller.set_zip_code(zip).await,
            Command::Sort(sort) => controller.set_sort(sort).await,
            Command::More => controller.load_next_page().await,
            Command::Favorite(id) => {
                let now = controller.toggle_favorite(&id).await;
                println!("{} {}", if now { "Favorited" } else { "Unfavorited" }, id);
                continue;
            }
            Command::Favorites => {
                let state = controller.snapshot().await;
                for id in &state.favorites {
                    println!("★ {}", id);
                }
                continue;
            }
            Command::Match => controller.generate_match().await,
            Command::ClearMatch => controller.clear_match().await,
            Command::Reset => controller.reset_filters().await,
            Command::Retry => controller.retry().await,
            Command::Breeds => {
                println!("{}", controller.snapshot().await.breeds.join(", "));
                continue;
            }
            Command::Near { lat, lon, radius_km } => {
                match api.search_locations(&LocationSearchRequest::near(lat, lon, radius_km)).await {
                    Ok(mut response) => {
                        sort_by_distance(&mut response.results, Coordinates { lat, lon });
                        for location in &response.results {
                            println!("{} {}, {}", location.zip_code, location.city, location.state);
                        }
                        println!("{} of {} shelters", response.results.len(), response.total);
                    }
                    Err(e) => println!("Location search failed: {}", e),
                }
                continue;
            }
            Command::Logout => {
                if let Err(e) = api.logout().await {
                    error!("Logout failed: {}", e);
                }
                break;
            }
            Command::Help => {
                println!("{}", HELP);
                continue;
            }
            Command::Quit => break,
        }

        println!("{}", render::search_page(&controller.snapshot().await));
    }

    Ok(())
}
