use std::sync::LazyLock;

use regex_lite::Regex;
use tracing::debug;

use super::{Scope, ScopeKind};
use crate::error::{ContextError, Result};
use crate::path::path_segments;

/// `{{#each a.b}}`, `{{ # each x as |v k| }}`, `{{~#each items~}}`, and a bare `{{#each}}`.
/// The path group stops at the first whitespace so block parameters stay out of it.
static OPEN_EACH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{~?\s*#\s*each(?:\s+([\w./@$-]+))?(?:\s[^}]*)?\s*~?\}\}")
        .expect("valid regex")
});

static CLOSE_EACH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{~?\s*/\s*each\s*~?\}\}").expect("valid regex"));

enum Marker {
    Open {
        start: usize,
        end: usize,
        raw_path: String,
    },
    Close {
        start: usize,
        end: usize,
    },
}

/// Split a template into its tree of each scopes.
///
/// Every closing marker closes the innermost open scope. A scope left open at
/// end of input, or a closing marker with nothing open, is an error.
pub fn scan(text: &str) -> Result<Scope> {
    let (root, _) = scan_scope(text, 0, 0, ScopeKind::Root)?;
    Ok(root)
}

fn scan_scope(
    text: &str,
    opened_at: usize,
    body_start: usize,
    kind: ScopeKind,
) -> Result<(Scope, usize)> {
    let mut body = String::new();
    let mut children = Vec::new();
    let mut cursor = body_start;

    loop {
        match next_marker(text, cursor) {
            Some(Marker::Open {
                start,
                end,
                raw_path,
            }) => {
                body.push_str(&text[cursor..start]);
                debug!(path = %raw_path, offset = start, "opening each scope");
                let child_kind = ScopeKind::Each {
                    path: path_segments(&raw_path),
                };
                let (child, child_end) = scan_scope(text, start, end, child_kind)?;
                children.push(child);
                cursor = child_end;
            }
            Some(Marker::Close { start, end }) => {
                if matches!(kind, ScopeKind::Root) {
                    let (line, column) = line_column(text, start);
                    return Err(ContextError::UnmatchedClose { line, column });
                }
                body.push_str(&text[cursor..start]);
                debug!(offset = start, "closing each scope");
                let scope = Scope {
                    kind,
                    body,
                    children,
                    span: opened_at..end,
                };
                return Ok((scope, end));
            }
            None => {
                if let ScopeKind::Each { path } = &kind {
                    let (line, column) = line_column(text, opened_at);
                    return Err(ContextError::UnterminatedScope {
                        path: path.join("."),
                        line,
                        column,
                    });
                }
                body.push_str(&text[cursor..]);
                let scope = Scope {
                    kind,
                    body,
                    children,
                    span: opened_at..text.len(),
                };
                return Ok((scope, text.len()));
            }
        }
    }
}

fn next_marker(text: &str, cursor: usize) -> Option<Marker> {
    let rest = &text[cursor..];

    let open = OPEN_EACH.captures(rest).and_then(|caps| {
        let whole = caps.get(0)?;
        let raw_path = caps
            .get(1)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        Some(Marker::Open {
            start: cursor + whole.start(),
            end: cursor + whole.end(),
            raw_path,
        })
    });

    let close = CLOSE_EACH.find(rest).map(|m| Marker::Close {
        start: cursor + m.start(),
        end: cursor + m.end(),
    });

    match (open, close) {
        (Some(open), Some(close)) => {
            if marker_start(&open) < marker_start(&close) {
                Some(open)
            } else {
                Some(close)
            }
        }
        (open, close) => open.or(close),
    }
}

fn marker_start(marker: &Marker) -> usize {
    match marker {
        Marker::Open { start, .. } | Marker::Close { start, .. } => *start,
    }
}

/// 1-based line and column of a byte offset.
fn line_column(text: &str, offset: usize) -> (usize, usize) {
    let before = &text[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}
