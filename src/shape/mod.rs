use rand::Rng;
use serde_json::{Map, Value};
use tracing::warn;

use crate::extract::extract;
use crate::sample::SampleValues;
use crate::scope::Scope;
use crate::ContextTree;

/// Assemble the context tree for a scanned template.
pub fn build<R: Rng>(root: &Scope, samples: &mut SampleValues<R>) -> ContextTree {
    shape_of(root, samples)
}

/// The object a scope's own expressions and its nested each blocks imply.
///
/// Each child scope becomes a one-element array stored at its iteration path.
/// Intermediate segments of a dotted path are merged into existing objects; the
/// array itself replaces whatever the body expressions put at that key.
pub fn shape_of<R: Rng>(scope: &Scope, samples: &mut SampleValues<R>) -> ContextTree {
    let mut tree = extract(&scope.body, samples);

    for child in &scope.children {
        let path = child.iteration_path();
        if path.is_empty() {
            warn!(
                offset = child.span.start,
                "skipping {{{{#each}}}} without an iteration path"
            );
            continue;
        }

        let element = shape_of(child, samples);
        insert_at(&mut tree, path, Value::Array(vec![Value::Object(element)]));
    }

    tree
}

fn insert_at(tree: &mut ContextTree, path: &[String], value: Value) {
    match path {
        [] => {}
        [leaf] => {
            tree.insert(leaf.clone(), value);
        }
        [head, rest @ ..] => {
            let entry = tree
                .entry(head.clone())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            if let Value::Object(next) = entry {
                insert_at(next, rest, value);
            }
        }
    }
}
