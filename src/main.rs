//! Petits-plats CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Browse interactively (default command)
//! petits-plats
//! petits-plats browse tarte
//!
//! # One-shot search with tags
//! petits-plats search tarte -a Four -i Beurre
//! petits-plats search --criteria '{"filters":{"appliance":["Blender"]}}' --json
//!
//! # Menus reachable from a search
//! petits-plats lists -i "Lait de coco"
//!
//! # A single recipe
//! petits-plats show 3
//! ```
//!
//! # Configuration
//!
//! Settings live in the user's config directory
//! (`~/.config/petits-plats/config.toml` on Linux); `petits-plats config set
//! recipes_file=/path/to/recipes.json` switches the default collection.

use petits_plats::{
    AppError,
    cli::{Cli, Commands},
    commands::{self, OutputFormat},
    config::AppConfig,
    recipes::Catalog,
    render::CardStyle,
    search::SearchEngine,
};
use std::io;

type Result<T> = std::result::Result<T, AppError>;

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config_path = AppConfig::config_path()?;
    let config = AppConfig::load_from(&config_path)?;
    let quiet = cli.quiet || config.quiet;

    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    let command = cli.get_command();

    // Config and completions work without a recipe collection
    match &command {
        Commands::Config { command } => {
            return commands::config(config, command, &config_path, quiet, io::stdout());
        }
        Commands::Completions { shell } => {
            commands::completions(*shell, io::stdout());
            return Ok(());
        }
        _ => {}
    }

    let recipes_file = cli.recipes.as_deref().or(config.recipes_file.as_deref());
    let catalog = Catalog::load_or_embedded(recipes_file)?;
    let engine = SearchEngine::new(config.min_query_len);

    match command {
        Commands::Browse { query } => commands::browse(&catalog, &config, query.as_deref(), quiet),
        Commands::Search { filters, json, compact } => {
            let criteria = filters.to_criteria()?;
            let style = if compact || quiet { CardStyle::Compact } else { CardStyle::Full };
            commands::search(
                &catalog,
                &criteria,
                &engine,
                OutputFormat::from_json_flag(json),
                style,
                io::stdout(),
            )?;
            Ok(())
        }
        Commands::Lists { filters, json } => {
            let criteria = filters.to_criteria()?;
            commands::lists(&catalog, &criteria, &engine, OutputFormat::from_json_flag(json), io::stdout())?;
            Ok(())
        }
        Commands::Show { id, json } => {
            commands::show(&catalog, id, OutputFormat::from_json_flag(json), io::stdout())
        }
        Commands::Config { .. } | Commands::Completions { .. } => Ok(()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);
    run(&cli)
}
