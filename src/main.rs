mod cli;
mod commands;

use std::path::Path;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = hbs_context::config::load_config(cli.config.as_deref().map(Path::new))?;

    match cli.command {
        Commands::Generate {
            path,
            output,
            seed,
            suffix,
            overwrite,
            dry_run,
        } => commands::generate::run(&config, path, output, seed, suffix, overwrite, dry_run),
        Commands::Scan { path } => commands::scan::run(path),
    }
}

fn init_logging(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
