use colored::Colorize;
use std::fmt;
use std::process;

/// Exit codes for the CLI.
pub const EXIT_ERROR: i32 = 1;

/// Unified error type for CLI operations.
pub enum CliError {
    /// Error from the render pipeline.
    Render(hazmap_render::RenderError),
    /// Error decoding the results payload.
    Bindings(hazmap_bindings::BindingsError),
    /// Error loading the geometry table.
    Spatial(hazmap_spatial::SpatialError),
    /// Bad file path or unreadable input.
    Input(String),
    /// Failure writing the rendered output.
    Output(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Render(e) => write!(f, "{} {e}", "error:".red().bold()),
            CliError::Bindings(e) => write!(f, "{} {e}", "error:".red().bold()),
            CliError::Spatial(e) => write!(f, "{} {e}", "error:".red().bold()),
            CliError::Input(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Output(msg) => write!(f, "{} {msg}", "error:".red().bold()),
        }
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<hazmap_render::RenderError> for CliError {
    fn from(e: hazmap_render::RenderError) -> Self {
        CliError::Render(e)
    }
}

impl From<hazmap_bindings::BindingsError> for CliError {
    fn from(e: hazmap_bindings::BindingsError) -> Self {
        CliError::Bindings(e)
    }
}

impl From<hazmap_spatial::SpatialError> for CliError {
    fn from(e: hazmap_spatial::SpatialError) -> Self {
        CliError::Spatial(e)
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Print the error and terminate with its exit code.
pub fn exit_with_error(e: CliError) -> ! {
    eprintln!("{e}");
    process::exit(EXIT_ERROR);
}
