//! Catalog Admin CLI - seed validation and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Check a seed file before deploying it
//! catalog-cli seed validate data/seed.yaml
//!
//! # Print the special login link of a user
//! catalog-cli link --base-url https://catalog.example.com --user-id 1 --role admin
//!
//! # Show what a category page would list
//! catalog-cli category data/seed.yaml "Электроника/Аксессуары" --page 1 --limit 25
//! ```
//!
//! # Commands
//!
//! - `seed validate` - Parse and check a seed file
//! - `link` - Print a special login link
//! - `category` - Print the products of a category page

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use catalog_admin::catalog::DEFAULT_ITEMS_PER_PAGE;
use catalog_admin_core::{Language, UserId, UserRole};

mod commands;

#[derive(Parser)]
#[command(name = "catalog-cli")]
#[command(author, version, about = "Catalog admin CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Work with seed files
    Seed {
        #[command(subcommand)]
        action: SeedAction,
    },
    /// Print the special login link of a user
    Link {
        /// Origin the admin panel is served from
        #[arg(short, long, env = "CATALOG_BASE_URL", default_value = "http://localhost:3002")]
        base_url: String,

        /// User ID
        #[arg(short, long)]
        user_id: UserId,

        /// Role of the user (`admin`, `editor`, `viewer`, `chinese_only`, `broker`, `victor`)
        #[arg(short, long)]
        role: UserRole,
    },
    /// Print the products a category page would show
    Category {
        /// Seed file to load
        file: PathBuf,

        /// Category path, e.g. `Электроника/Аксессуары`
        path: String,

        /// Page number (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Products per page
        #[arg(long, default_value_t = DEFAULT_ITEMS_PER_PAGE)]
        limit: usize,

        /// Language of product names (`ru`, `en`, `cn`)
        #[arg(long, default_value = "ru")]
        language: Language,
    },
}

#[derive(Subcommand)]
enum SeedAction {
    /// Parse a seed file and check it for problems
    Validate {
        /// Seed file to check
        file: PathBuf,

        /// Treat products no category page can reach as errors
        #[arg(long)]
        strict: bool,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed { action } => match action {
            SeedAction::Validate { file, strict } => {
                commands::seed::validate(&file, strict).await?;
            }
        },
        Commands::Link {
            base_url,
            user_id,
            role,
        } => commands::link::print(&base_url, user_id, role),
        Commands::Category {
            file,
            path,
            page,
            limit,
            language,
        } => {
            commands::category::show(&file, &path, page, limit, language).await?;
        }
    }
    Ok(())
}
