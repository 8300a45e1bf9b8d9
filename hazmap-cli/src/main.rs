mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use error::exit_with_error;

fn init_tracing(cli: &Cli) {
    // CLI tracing policy:
    //   --quiet  → always "off"
    //   --verbose → "debug" level, including per-row drop diagnostics
    //   default  → "off" (clean terminal, JSON on stdout only)
    //   RUST_LOG → honoured only with --verbose, for finer-grained control.
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "debug".into())
    } else {
        tracing_subscriber::EnvFilter::new("off")
    };

    let ansi = !(cli.no_color || std::env::var_os("NO_COLOR").is_some());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    init_tracing(&cli);

    if let Err(e) = run(cli) {
        exit_with_error(e);
    }
}

fn run(cli: Cli) -> error::CliResult<()> {
    match cli.command {
        Commands::Render {
            results,
            table,
            name_column,
            wkt_column,
            pretty,
        } => commands::render::run(&results, table.as_deref(), &name_column, &wkt_column, pretty),

        Commands::Rows { results } => commands::rows::run(&results),
    }
}
