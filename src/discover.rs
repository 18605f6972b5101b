use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

use crate::error::{ContextError, Result};

pub const DEFAULT_INCLUDE: &[&str] = &["**/*.hbs", "**/*.handlebars"];

/// Find template files under `dir` whose relative path matches `include` and
/// not `exclude`. Results are sorted.
pub fn find_templates(dir: &Path, include: &[String], exclude: &[String]) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ContextError::Io {
            context: format!("reading directory {}", dir.display()),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
        });
    }

    let include_set = build_glob_set(include)?;
    let exclude_set = build_glob_set(exclude)?;
    let mut templates = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }

        let rel_path = entry
            .path()
            .strip_prefix(dir)
            .expect("entry must be under dir");

        if include_set.is_match(rel_path) && !exclude_set.is_match(rel_path) {
            templates.push(entry.path().to_path_buf());
        }
    }

    templates.sort();
    Ok(templates)
}

fn build_glob_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| ContextError::GlobPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| ContextError::GlobPattern {
        pattern: "<combined>".into(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn defaults() -> Vec<String> {
        DEFAULT_INCLUDE.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_finds_templates_recursively() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("emails/partials")).unwrap();
        fs::write(dir.path().join("welcome.hbs"), "{{name}}").unwrap();
        fs::write(dir.path().join("emails/reset.handlebars"), "{{link}}").unwrap();
        fs::write(dir.path().join("emails/partials/footer.hbs"), "").unwrap();
        fs::write(dir.path().join("welcome.hbs.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let found = find_templates(dir.path(), &defaults(), &[]).unwrap();
        let rel: Vec<_> = found
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            rel,
            [
                PathBuf::from("emails/partials/footer.hbs"),
                PathBuf::from("emails/reset.handlebars"),
                PathBuf::from("welcome.hbs"),
            ]
        );
    }

    #[test]
    fn test_exclude_patterns() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("partials")).unwrap();
        fs::write(dir.path().join("page.hbs"), "").unwrap();
        fs::write(dir.path().join("partials/header.hbs"), "").unwrap();

        let found =
            find_templates(dir.path(), &defaults(), &["partials/**".to_string()]).unwrap();
        assert_eq!(found, [dir.path().join("page.hbs")]);
    }

    #[test]
    fn test_invalid_glob_errors() {
        let dir = tempfile::tempdir().unwrap();
        let result = find_templates(dir.path(), &["[".to_string()], &[]);
        assert!(matches!(
            result.unwrap_err(),
            ContextError::GlobPattern { ref pattern, .. } if pattern == "["
        ));
    }

    #[test]
    fn test_missing_directory_errors() {
        let result = find_templates(Path::new("/nonexistent/templates"), &defaults(), &[]);
        assert!(matches!(result.unwrap_err(), ContextError::Io { .. }));
    }
}
