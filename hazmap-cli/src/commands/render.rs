use std::path::Path;

use hazmap_bindings::ResultSet;
use hazmap_render::{PipelineConfig, RenderPipeline};
use hazmap_spatial::GeometryTable;

use crate::error::{CliError, CliResult};
use crate::output;

pub fn run(
    results_path: &Path,
    table_path: Option<&Path>,
    name_column: &str,
    wkt_column: &str,
    pretty: bool,
) -> CliResult<()> {
    let payload = std::fs::read_to_string(results_path).map_err(|e| {
        CliError::Input(format!("cannot read {}: {e}", results_path.display()))
    })?;
    let results = ResultSet::from_json(&payload)?;

    let pipeline = RenderPipeline::new(PipelineConfig::default())?;

    // Table present → join path; otherwise the query must carry WKT itself.
    let pass = match table_path {
        Some(path) => {
            let table = GeometryTable::from_csv_path(path, name_column, wkt_column)?;
            pipeline.render_joined(&results, &table)?
        }
        None => pipeline.render_direct(&results)?,
    };

    output::print_features(&pass, pretty)?;
    output::print_stats(&pass.stats);
    Ok(())
}
