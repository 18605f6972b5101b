#![allow(unused_assignments)]

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ContextError {
    #[error("Each scope '{path}' opened at {line}:{column} is never closed")]
    #[diagnostic(help("Add a matching {{{{/each}}}} for every {{{{#each}}}} block"))]
    UnterminatedScope {
        path: String,
        line: usize,
        column: usize,
    },

    #[error("Found {{{{/each}}}} at {line}:{column} without an open each scope")]
    #[diagnostic(help("Remove the stray closing marker or add the missing {{{{#each}}}}"))]
    UnmatchedClose { line: usize, column: usize },

    #[error("Context file already exists: {path}")]
    #[diagnostic(help("Use --overwrite to replace the existing context file"))]
    OutputExists { path: PathBuf },

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize context")]
    Json {
        #[source]
        source: serde_json::Error,
    },

    #[error("Config file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Failed to parse config file {path}")]
    #[diagnostic(help("Check the TOML syntax in your config file"))]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config: {reason}")]
    ConfigInvalid { reason: String },

    #[error("Glob pattern error: {pattern}")]
    GlobPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid arguments: {reason}")]
    InvalidArguments { reason: String },
}

pub type Result<T> = std::result::Result<T, ContextError>;
