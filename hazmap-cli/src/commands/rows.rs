use std::path::Path;

use hazmap_bindings::{ResultSet, RowSet};

use crate::error::{CliError, CliResult};
use crate::output;

pub fn run(results_path: &Path) -> CliResult<()> {
    let payload = std::fs::read_to_string(results_path).map_err(|e| {
        CliError::Input(format!("cannot read {}: {e}", results_path.display()))
    })?;
    let results = ResultSet::from_json(&payload)?;
    output::print_rows(&RowSet::from_results(&results));
    Ok(())
}
