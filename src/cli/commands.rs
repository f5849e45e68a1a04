use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::CATALOG_ENV;

#[derive(Parser, Debug)]
#[command(name = "stencil")]
#[command(version, about = "Map messaging template placeholders to catalog values")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Load templates and items from a YAML or JSON file instead of the built-in catalog
    #[arg(long, global = true, env = CATALOG_ENV, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available templates
    List {
        /// Only show templates in this category (transactional, marketing, utility)
        #[arg(long, short = 'c')]
        category: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the values a variable can be mapped to
    Items {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a template with its variables highlighted
    Show {
        /// Template ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Preview a template with chosen values
    Preview {
        /// Template ID
        id: String,

        /// Variable assignment in format "variable=item" where item is a key or label
        /// (can be specified multiple times)
        #[arg(long = "set", short = 's', value_name = "VARIABLE=ITEM")]
        assignments: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Save a template configuration once every variable is mapped
    Save {
        /// Template ID
        id: String,

        /// Variable assignment in format "variable=item" where item is a key or label
        /// (can be specified multiple times)
        #[arg(long = "set", short = 's', value_name = "VARIABLE=ITEM")]
        assignments: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
