use crate::{cond::Context, extract::ColumnSet};

use std::collections::HashMap;

/// Alias of the single column produced by [`ColumnSet::select_json`].
pub const JSON_OUTPUT: &str = "json_output";

struct Node<'a> {
    key: &'a str,
    value: &'a str,
    is_slice: bool,
    children: Vec<usize>,
}

impl ColumnSet {
    /// Renders the fields as one nested `JSON_OBJECT` expression aliased
    /// `json_output`.
    ///
    /// Placement follows each field's JSON path. Records become nested
    /// `JSON_OBJECT`s, collections `JSON_ARRAYAGG(JSON_OBJECT(..))`. A field
    /// whose parent path was not emitted is logged and left out. Gated by
    /// `selectif`.
    pub fn select_json(&self, cx: &Context) -> String {
        let mut nodes: Vec<Node<'_>> = vec![];
        let mut roots = vec![];
        let mut by_path: HashMap<&str, usize> = HashMap::new();

        for field in self.enabled(cx, Some("selectif")) {
            let json = &field.json;
            if json.name.is_empty() || json.name == "-" {
                continue;
            }

            let position = nodes.len();
            let node = Node {
                key: &json.name,
                value: field.meta_non_empty("select").unwrap_or(&field.name),
                is_slice: field.is_slice,
                children: vec![],
            };

            if json.full_path.matches('/').count() < 2 {
                roots.push(position);
            } else {
                let parent_path = match json.full_path.rfind('/') {
                    Some(at) => &json.full_path[..at],
                    None => "",
                };
                let Some(&parent) = by_path.get(parent_path) else {
                    tracing::warn!(
                        path = %json.full_path,
                        field = field.field_name,
                        "JSON projection parent not emitted; skipping field"
                    );
                    continue;
                };
                nodes[parent].children.push(position);
            }

            nodes.push(node);
            by_path.insert(json.full_path.as_str(), position);
        }

        format!("JSON_OBJECT({}) AS {JSON_OUTPUT}", render(&nodes, &roots))
    }
}

fn render(nodes: &[Node<'_>], positions: &[usize]) -> String {
    let mut parts = vec![];

    for &position in positions {
        let node = &nodes[position];

        if node.children.is_empty() {
            if !node.value.is_empty() && node.value != "-" {
                parts.push(format!("'{}', {}", node.key, node.value));
            }
        } else if node.is_slice {
            parts.push(format!(
                "'{}', JSON_ARRAYAGG(JSON_OBJECT({}))",
                node.key,
                render(nodes, &node.children)
            ));
        } else {
            parts.push(format!(
                "'{}', JSON_OBJECT({})",
                node.key,
                render(nodes, &node.children)
            ));
        }
    }

    parts.join(", ")
}
