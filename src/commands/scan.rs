use std::path::Path;

use console::style;
use hbs_context::error::ContextError;
use hbs_context::extract::expression_paths;
use hbs_context::scope::{scan, Scope};
use miette::Result;

const PREVIEW_LEN: usize = 40;

pub fn run(path: String) -> Result<()> {
    let template = Path::new(&path);
    let text = std::fs::read_to_string(template).map_err(|e| ContextError::Io {
        context: format!("reading {}", template.display()),
        source: e,
    })?;

    let root = scan(&text)?;

    println!(
        "{} {}",
        style("Scopes in").bold(),
        style(template.display()).cyan()
    );
    print_scope(&root, 1);

    Ok(())
}

fn print_scope(scope: &Scope, depth: usize) {
    let indent = "  ".repeat(depth);
    let label = if scope.is_root() {
        style("root".to_string()).green().bold()
    } else if scope.iteration_path().is_empty() {
        style("each <no path>".to_string()).red()
    } else {
        style(format!("each {}", scope.iteration_path().join("."))).yellow()
    };

    let expressions = expression_paths(&scope.body).len();
    println!(
        "{indent}{label}  {}",
        style(format!(
            "{expressions} expression(s), {} child scope(s)",
            scope.children.len()
        ))
        .dim()
    );

    let preview = body_preview(&scope.body);
    if !preview.is_empty() {
        println!("{indent}  {}", style(preview).dim());
    }

    for child in &scope.children {
        print_scope(child, depth + 1);
    }
}

/// Whitespace-collapsed start of a body.
fn body_preview(body: &str) -> String {
    let collapsed = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() > PREVIEW_LEN {
        let cut: String = collapsed.chars().take(PREVIEW_LEN).collect();
        format!("{cut}\u{2026}")
    } else {
        collapsed
    }
}
