//! Configuration section flattening.
//!
//! # Responsibilities
//! - Resolve a colon-delimited path inside the host's configuration tree
//! - Flatten every leaf under the resolved node into key/value pairs
//! - Contribute nothing (not an error) when the path does not resolve
//!
//! # Path Grammar
//! Segments are separated by `:`. A segment descending into an array must
//! parse as a zero-based index, so `Node1:Node2:1` addresses the second
//! element of the array at `Node1.Node2`. This grammar is the documented
//! contract of the merger.

use serde_json::Value;

/// Flatten the subtree addressed by `path` into `(name, value)` pairs.
///
/// Each leaf contributes one pair keyed by its local property name (the last
/// path segment leading to it), in the tree's declaration order. Sibling
/// leaves in different nested nodes may collide on local name; callers append
/// pairs in order, so the last one flattened wins.
pub fn flatten_section(tree: &Value, path: &str) -> Vec<(String, String)> {
    let Some(node) = resolve_path(tree, path) else {
        tracing::debug!(path, "configuration section not found, merging nothing");
        return Vec::new();
    };

    let local_name = path.rsplit(':').next().unwrap_or(path);
    let mut entries = Vec::new();
    collect_leaves(node, local_name, &mut entries);
    entries
}

/// Descend the tree one segment at a time. `None` if any segment is missing
/// or descends into a scalar.
fn resolve_path<'a>(tree: &'a Value, path: &str) -> Option<&'a Value> {
    let mut node = tree;
    for segment in path.split(':') {
        node = match node {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(node)
}

fn collect_leaves(node: &Value, name: &str, out: &mut Vec<(String, String)>) {
    match node {
        Value::Object(map) => {
            for (key, child) in map {
                collect_leaves(child, key, out);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                collect_leaves(child, &index.to_string(), out);
            }
        }
        // Valueless nodes have no string rendering.
        Value::Null => {}
        Value::String(text) => out.push((name.to_string(), text.clone())),
        other => out.push((name.to_string(), other.to_string())),
    }
}
