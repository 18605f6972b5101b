use std::sync::LazyLock;

use rand::Rng;
use regex_lite::Regex;
use serde_json::{Map, Value};
use tracing::debug;

use crate::path::path_segments;
use crate::sample::SampleValues;
use crate::ContextTree;

/// `{{ expr }}` or `{{{ expr }}}`, skipping partials (`>`), block openers (`#`),
/// block closers (`/`) and comments (`!`), however the marker is spaced.
static EXPRESSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\{?~?\s*([^\s>#/!~}][^}]*?)\s*~?\}\}\}?").expect("valid regex")
});

/// Field paths referenced by the expression tokens of `body`, in source order.
///
/// Tokens that reduce to no segments (`{{this}}`, `{{.}}`) are skipped.
pub fn expression_paths(body: &str) -> Vec<Vec<String>> {
    EXPRESSION
        .captures_iter(body)
        .filter_map(|caps| caps.get(1))
        .map(|inner| path_segments(inner.as_str()))
        .filter(|segments| !segments.is_empty())
        .collect()
}

/// Build the nested object implied by every expression in `body`.
pub fn extract<R: Rng>(body: &str, samples: &mut SampleValues<R>) -> ContextTree {
    let mut paths = expression_paths(body);
    // Shorter paths first; the sort is stable so equal lengths keep source order.
    paths.sort_by_key(Vec::len);
    debug!(count = paths.len(), "extracted expression paths");

    let mut tree = ContextTree::new();
    for path in &paths {
        merge_path(&mut tree, path, samples);
    }
    tree
}

/// Insert one path into `tree`.
///
/// Missing intermediate segments become objects and a missing leaf gets a
/// sample value. Existing entries are never overwritten; if an intermediate
/// segment already holds a scalar the rest of the path is dropped.
pub fn merge_path<R: Rng>(tree: &mut ContextTree, path: &[String], samples: &mut SampleValues<R>) {
    let Some((leaf, parents)) = path.split_last() else {
        return;
    };

    let mut scope = tree;
    for segment in parents {
        let entry = scope
            .entry(segment.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        match entry {
            Value::Object(next) => scope = next,
            _ => return,
        }
    }

    scope
        .entry(leaf.clone())
        .or_insert_with(|| samples.sample(leaf));
}
