//! Command-line interface definitions and parsing
//!
//! Defines the CLI structure for petits-plats using `clap`.
//!
//! # Commands
//!
//! - **browse**: Interactive search session (default)
//! - **search**: One-shot search, printing matching recipes
//! - **lists**: Ingredient/appliance/utensil menus for a search
//! - **show**: A single recipe card
//! - **config**: Inspect or change settings
//! - **completions**: Shell completion scripts
//!
//! Filters on `search` and `lists` are the same tags the browse session
//! offers: `-i` ingredient, `-a` appliance, `-u` utensil, each repeatable.

use crate::search::{Category, Criteria};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Tag filters shared by `search` and `lists`
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterArgs {
    /// Free-text query (3+ characters to take effect)
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Required ingredient (repeatable)
    #[arg(short = 'i', long = "ingredient", value_name = "LABEL")]
    pub ingredients: Vec<String>,

    /// Required appliance (repeatable)
    #[arg(short = 'a', long = "appliance", value_name = "LABEL")]
    pub appliances: Vec<String>,

    /// Required utensil (repeatable)
    #[arg(short = 'u', long = "utensil", value_name = "LABEL")]
    pub utensils: Vec<String>,

    /// Criteria document, e.g. '{"query":"tarte","filters":{"appliance":["Four"]}}'
    #[arg(long = "criteria", value_name = "JSON")]
    pub criteria: Option<String>,
}

impl FilterArgs {
    /// Build search criteria from the flags
    ///
    /// A `--criteria` document is the base; flags are merged on top.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if `--criteria` is not valid JSON.
    pub fn to_criteria(&self) -> Result<Criteria, serde_json::Error> {
        let mut criteria = match &self.criteria {
            Some(json) => Criteria::from_json(json)?,
            None => Criteria::new(),
        };

        let mut builder = Criteria::builder().query(self.query.clone().unwrap_or_default());
        for (category, labels) in [
            (Category::Ingredient, &self.ingredients),
            (Category::Appliance, &self.appliances),
            (Category::Utensil, &self.utensils),
        ] {
            for label in labels {
                builder = builder.filter(category, label.trim());
            }
        }

        criteria.merge(&builder.build());
        Ok(criteria)
    }
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the current configuration
    Show,

    /// Print the config file location
    Path,

    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., min_query_len=2)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., quiet)
        #[arg(value_name = "KEY")]
        key: String,
    },
}

#[derive(Parser, Debug)]
#[command(name = "petits-plats")]
#[command(about = "Search and filter a recipe collection", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Recipe file to load (overrides config)
    #[arg(long = "recipes", value_name = "FILE", global = true)]
    pub recipes: Option<PathBuf>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Debug logging
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Browse recipes interactively (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Initial query
        #[arg(value_name = "QUERY")]
        query: Option<String>,
    },

    /// Search recipes and print the matches
    #[command(visible_alias = "s")]
    Search {
        #[command(flatten)]
        filters: FilterArgs,

        /// Print results as JSON
        #[arg(long = "json")]
        json: bool,

        /// One line per recipe instead of full cards
        #[arg(long = "compact")]
        compact: bool,
    },

    /// Show the ingredient, appliance and utensil menus for a search
    #[command(visible_alias = "l")]
    Lists {
        #[command(flatten)]
        filters: FilterArgs,

        /// Print lists as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Show one recipe by id
    Show {
        /// Recipe id
        id: u32,

        /// Print the recipe as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse { query: None })
    }
}
