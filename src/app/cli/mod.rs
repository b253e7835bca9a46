//! CLI Adapter.

mod browse;
mod search;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::app::AppContext;
use crate::domain::configuration::load_config;
use crate::domain::{AppError, Category, ImageFallback, SearchConfig};
use crate::ports::{ImageProbe, NoopImageProbe};
use crate::services::{HttpImageProbe, HttpProductApi};

#[derive(Parser)]
#[command(name = "prodsearch")]
#[command(version)]
#[command(about = "Search the product catalog by category", long_about = None)]
struct Cli {
    /// Config file (defaults to ./prodsearch.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Log requests and state changes to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search one category and print a page of results
    #[clap(visible_alias = "s")]
    Search {
        /// Category to search (see `categories`)
        category: String,
        /// Page to show (clamped to the available pages)
        #[arg(short, long, default_value_t = 1)]
        page: usize,
        /// Check each image and show the fallback for broken ones
        #[arg(long)]
        verify_images: bool,
        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search and page through results interactively
    #[clap(visible_alias = "b")]
    Browse {
        /// Check each image and show the fallback for broken ones
        #[arg(long)]
        verify_images: bool,
    },
    /// List the categories that can be searched
    #[clap(visible_alias = "ls")]
    Categories,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Search { category, page, verify_images, json } => {
            search::run_search(cli.config.as_deref(), &category, page, verify_images, json)
        }
        Commands::Browse { verify_images } => {
            browse::run_browse(cli.config.as_deref(), verify_images)
        }
        Commands::Categories => {
            for category in Category::ALL {
                println!("{}", category);
            }
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt().with_max_level(level).with_writer(std::io::stderr).init();
}

/// Build the HTTP-backed context, with image probing only when requested.
fn with_context<T>(
    config_path: Option<&Path>,
    verify_images: bool,
    f: impl FnOnce(&AppContext<HttpProductApi, Box<dyn ImageProbe>>) -> Result<T, AppError>,
) -> Result<T, AppError> {
    let config: SearchConfig = load_config(config_path)?;
    let api = HttpProductApi::new(&config.api)?;
    let probe: Box<dyn ImageProbe> = if verify_images {
        Box::new(HttpImageProbe::new(config.api.timeout_secs)?)
    } else {
        Box::new(NoopImageProbe)
    };
    let ctx = AppContext::new(api, probe, ImageFallback::new(config.display.fallback_image));
    f(&ctx)
}
