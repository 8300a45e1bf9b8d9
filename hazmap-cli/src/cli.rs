use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hazmap", about = "Hazard-exposure choropleth pipeline", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render polygon features from a SPARQL results payload
    Render {
        /// Path to a SPARQL SELECT results JSON file (.srj)
        #[arg(long)]
        results: PathBuf,

        /// Geometry table CSV for the join path; omit when the query
        /// returns geometry directly in a WKT column
        #[arg(long)]
        table: Option<PathBuf>,

        /// CSV column holding the municipality name
        #[arg(long, default_value = "NAME_IT")]
        name_column: String,

        /// CSV column holding the WKT geometry
        #[arg(long, default_value = "SHAPE")]
        wkt_column: String,

        /// Pretty-print the output JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Print the normalized result rows without rendering
    Rows {
        /// Path to a SPARQL SELECT results JSON file (.srj)
        #[arg(long)]
        results: PathBuf,
    },
}
