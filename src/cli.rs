use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "hbs-context",
    about = "Infer a starter JSON context file from a Handlebars template",
    version
)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file to use instead of the user config
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the context file for a template, or for every template in a directory
    Generate {
        /// Template file or directory of templates
        path: String,

        /// Output file (single template only; default: <template>.json)
        #[arg(short, long)]
        output: Option<String>,

        /// Seed for reproducible sample values
        #[arg(long)]
        seed: Option<u64>,

        /// Suffix appended to the template path to name the context file
        #[arg(long)]
        suffix: Option<String>,

        /// Overwrite existing context files
        #[arg(long)]
        overwrite: bool,

        /// Print the context instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the each-scope tree of a template
    Scan {
        /// Template file to scan
        path: String,
    },
}
