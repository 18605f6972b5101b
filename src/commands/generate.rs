use std::path::PathBuf;

use console::style;
use hbs_context::config::ContextConfig;
use hbs_context::error::ContextError;
use hbs_context::{
    execute_generation, plan_directory, plan_generation, ContextPlan, DirectoryOptions,
    GenerateOptions,
};
use miette::Result;

#[allow(clippy::too_many_arguments)]
pub fn run(
    config: &ContextConfig,
    path: String,
    output: Option<String>,
    seed: Option<u64>,
    suffix: Option<String>,
    overwrite: bool,
    dry_run: bool,
) -> Result<()> {
    let path = PathBuf::from(path);
    let seed = seed.or(config.sample.seed);
    let suffix = suffix.unwrap_or_else(|| config.output.suffix.clone());
    let overwrite = overwrite || config.output.overwrite;

    if suffix.is_empty() && output.is_none() {
        return Err(ContextError::InvalidArguments {
            reason: "--suffix must not be empty".into(),
        }
        .into());
    }

    if path.is_dir() {
        if output.is_some() {
            return Err(ContextError::InvalidArguments {
                reason: "--output cannot be used when generating for a directory".into(),
            }
            .into());
        }

        let options = DirectoryOptions {
            dir: path,
            include: config.discover.include.clone(),
            exclude: config.discover.exclude.clone(),
            suffix,
            overwrite,
            seed,
        };
        let plan = plan_directory(&options)?;

        for file in &plan.plans {
            if dry_run {
                println!(
                    "{} {}",
                    style("==>").cyan().bold(),
                    style(file.output.display()).cyan()
                );
                println!("{}", file.json);
            } else {
                execute_generation(file)?;
                print_written(file);
            }
        }

        for template in &plan.skipped {
            println!(
                "  {} {} (context file exists)",
                style("skip  ").yellow(),
                template.display()
            );
        }

        println!(
            "\nSummary: {} generated, {} skipped",
            plan.plans.len(),
            plan.skipped.len()
        );

        if dry_run {
            println!(
                "\n{} Dry run \u{2014} no files written.",
                style("\u{2139}").blue().bold()
            );
        }
    } else {
        let options = GenerateOptions {
            template: path,
            output: output.map(PathBuf::from),
            suffix,
            overwrite,
            seed,
        };
        let plan = plan_generation(&options)?;

        if dry_run {
            println!("{}", plan.json);
        } else {
            execute_generation(&plan)?;
            print_written(&plan);
        }
    }

    Ok(())
}

fn print_written(plan: &ContextPlan) {
    println!(
        "{} {} {} {}",
        style("\u{2713}").green().bold(),
        plan.template.display(),
        style("->").dim(),
        style(plan.output.display()).cyan()
    );
}
