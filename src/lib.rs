pub mod config;
pub mod discover;
pub mod error;
pub mod extract;
pub mod path;
pub mod sample;
pub mod scope;
pub mod shape;

use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::Rng;
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::discover::find_templates;
use crate::error::{ContextError, Result};
use crate::sample::SampleValues;

/// The inferred data shape of a template, as a JSON object.
pub type ContextTree = Map<String, Value>;

/// Infer the context tree for a template, drawing sample values from OS entropy.
pub fn generate_context(template: &str) -> Result<ContextTree> {
    generate_context_with(template, &mut SampleValues::from_os_rng())
}

/// Infer the context tree for a template with caller-supplied sample values.
pub fn generate_context_with<R: Rng>(
    template: &str,
    samples: &mut SampleValues<R>,
) -> Result<ContextTree> {
    let root = scope::scan(template)?;
    Ok(shape::build(&root, samples))
}

/// Serialize a context tree as pretty JSON with two-space indentation.
pub fn to_json(tree: &ContextTree) -> Result<String> {
    serde_json::to_string_pretty(tree).map_err(|e| ContextError::Json { source: e })
}

/// The file a template's context is written to by default: `<template><suffix>`.
pub fn default_output_path(template: &Path, suffix: &str) -> PathBuf {
    let mut name = template.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

/// Options for generating the context file of a single template.
pub struct GenerateOptions {
    pub template: PathBuf,
    /// Output file. If None, `<template><suffix>` is used.
    pub output: Option<PathBuf>,
    pub suffix: String,
    /// Replace an existing context file instead of failing.
    pub overwrite: bool,
    /// Fixed seed for reproducible sample values.
    pub seed: Option<u64>,
}

/// A context file that has been computed but not yet written.
#[derive(Debug)]
pub struct ContextPlan {
    pub template: PathBuf,
    pub output: PathBuf,
    pub json: String,
}

/// Options for generating context files for every template under a directory.
pub struct DirectoryOptions {
    pub dir: PathBuf,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub suffix: String,
    pub overwrite: bool,
    pub seed: Option<u64>,
}

/// Plans for a directory run, plus templates skipped because their context file exists.
#[derive(Debug)]
pub struct DirectoryPlan {
    pub plans: Vec<ContextPlan>,
    pub skipped: Vec<PathBuf>,
}

fn sample_values(seed: Option<u64>) -> SampleValues<StdRng> {
    match seed {
        Some(seed) => SampleValues::seeded(seed),
        None => SampleValues::from_os_rng(),
    }
}

/// Read a template, infer its context and serialize it, without writing anything.
///
/// Fails with [`ContextError::OutputExists`] when the target file exists and
/// overwriting was not requested.
pub fn plan_generation(options: &GenerateOptions) -> Result<ContextPlan> {
    let mut samples = sample_values(options.seed);
    plan_template(
        &options.template,
        options.output.as_deref(),
        &options.suffix,
        options.overwrite,
        &mut samples,
    )
}

fn plan_template<R: Rng>(
    template: &Path,
    output: Option<&Path>,
    suffix: &str,
    overwrite: bool,
    samples: &mut SampleValues<R>,
) -> Result<ContextPlan> {
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(template, suffix));

    let text = std::fs::read_to_string(template).map_err(|e| ContextError::Io {
        context: format!("reading {}", template.display()),
        source: e,
    })?;

    // Parse errors take precedence over an existing context file.
    let tree = generate_context_with(&text, samples)?;

    if output.exists() && !overwrite {
        return Err(ContextError::OutputExists { path: output });
    }

    let json = to_json(&tree)?;

    Ok(ContextPlan {
        template: template.to_path_buf(),
        output,
        json,
    })
}

/// Plan context files for every matching template under a directory.
///
/// Templates that already have a context file are skipped unless overwriting.
/// A template that fails to parse aborts the whole run, whether or not its
/// context file exists.
pub fn plan_directory(options: &DirectoryOptions) -> Result<DirectoryPlan> {
    let templates = find_templates(&options.dir, &options.include, &options.exclude)?;
    let mut samples = sample_values(options.seed);
    let mut plans = Vec::new();
    let mut skipped = Vec::new();

    for template in templates {
        match plan_template(
            &template,
            None,
            &options.suffix,
            options.overwrite,
            &mut samples,
        ) {
            Ok(plan) => plans.push(plan),
            Err(ContextError::OutputExists { path }) => {
                warn!(
                    template = %template.display(),
                    output = %path.display(),
                    "context file exists, skipping"
                );
                skipped.push(template);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(DirectoryPlan { plans, skipped })
}

/// Write a planned context file, creating parent directories as needed.
pub fn execute_generation(plan: &ContextPlan) -> Result<PathBuf> {
    if let Some(parent) = plan.output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| ContextError::Io {
                context: format!("creating directory {}", parent.display()),
                source: e,
            })?;
        }
    }

    std::fs::write(&plan.output, &plan.json).map_err(|e| ContextError::Io {
        context: format!("writing {}", plan.output.display()),
        source: e,
    })?;

    info!(output = %plan.output.display(), "wrote context file");
    Ok(plan.output.clone())
}

/// Generate and write the context file for a single template.
pub fn generate(options: &GenerateOptions) -> Result<PathBuf> {
    let plan = plan_generation(options)?;
    execute_generation(&plan)
}
