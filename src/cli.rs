//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// sdgen structured data generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory, the config file is resolved against it
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: sdgen.toml)
    #[arg(short = 'C', long, default_value = "sdgen.toml")]
    pub config: PathBuf,

    /// Render as of this date (YYYY-MM-DD) instead of today, for reproducible output
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the script tags a page would carry
    ///
    /// Without items, renders the site-wide set (home and listing pages).
    Render {
        /// Item snapshots (.toml/.json) or directories of them
        items: Vec<PathBuf>,

        /// Commerce snapshot applied to product items
        #[arg(long)]
        commerce: Option<PathBuf>,
    },

    /// Print the editor preview for one item
    Preview {
        /// Item snapshot (.toml/.json)
        item: PathBuf,

        /// Commerce snapshot for a product item
        #[arg(long)]
        commerce: Option<PathBuf>,
    },

    /// Embed the item's script tags into an HTML page's <head>
    Inject {
        /// Item snapshot (.toml/.json)
        item: PathBuf,

        /// HTML page to read
        #[arg(long)]
        html: PathBuf,

        /// Where to write the result (default: overwrite the page)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Commerce snapshot for a product item
        #[arg(long)]
        commerce: Option<PathBuf>,
    },

    /// List selectable entity types
    Types {
        /// Include the per-item override choices
        #[arg(long)]
        overrides: bool,
    },

    /// Parse an opening-hours string and print the specification
    Hours {
        /// e.g. "Mo-Fr 08:30-17:00, Sa 09:00-13:00"
        spec: String,
    },
}
