//! Rendered output formatting.
//!
//! Features go to stdout as JSON (pipeable into a map layer or `jq`);
//! pass statistics go to stderr so they never corrupt the payload.

use colored::Colorize;
use serde::Serialize;

use hazmap_bindings::RowSet;
use hazmap_render::{RenderPass, RenderStats};

use crate::error::{CliError, CliResult};

/// Initial view for the map consumer, centered on the domain.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct InitialView {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
}

impl Default for InitialView {
    fn default() -> Self {
        Self {
            latitude: 46.6,
            longitude: 11.3,
            zoom: 8,
        }
    }
}

#[derive(Serialize)]
struct RenderDocument<'a> {
    view: InitialView,
    features: &'a [hazmap_render::RenderableFeature],
}

/// Write the feature document to stdout.
pub fn print_features(pass: &RenderPass, pretty: bool) -> CliResult<()> {
    let doc = RenderDocument {
        view: InitialView::default(),
        features: &pass.features,
    };
    let json = if pretty {
        serde_json::to_string_pretty(&doc)
    } else {
        serde_json::to_string(&doc)
    }
    .map_err(|e| CliError::Output(format!("cannot serialize features: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Write a one-line pass summary to stderr.
pub fn print_stats(stats: &RenderStats) {
    let dropped = stats.skipped_missing_geometry + stats.skipped_invalid_geometry;
    eprintln!(
        "{} {} of {} rows rendered ({} without geometry, {} invalid)",
        "render:".green().bold(),
        stats.features_rendered,
        stats.rows_processed,
        stats.skipped_missing_geometry,
        stats.skipped_invalid_geometry,
    );
    if dropped > 0 {
        eprintln!(
            "{} the map will omit {dropped} row(s); run with --verbose for per-row detail",
            "note:".cyan().bold(),
        );
    }
}

/// Write normalized rows to stdout as tab-separated text.
pub fn print_rows(rows: &RowSet) {
    println!("{}", rows.columns().join("\t"));
    for row in rows.rows() {
        let line: Vec<&str> = row
            .cells()
            .iter()
            .map(|c| c.as_deref().unwrap_or(""))
            .collect();
        println!("{}", line.join("\t"));
    }
}
