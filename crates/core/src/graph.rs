//! Root → category → entry graph for the journal visualization.
//!
//! The graph is recomputed from stored rows on every read and handed to a
//! force-directed renderer on the client. [`build_tree`] is pure: it never
//! touches the database and never fails.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::types::DbId;

/// Node id of the single root node.
pub const ROOT_NODE_ID: &str = "user";

/// Node id of the synthetic bucket holding entries without a known category.
pub const UNCATEGORIZED_NODE_ID: &str = "cat-uncategorized";

/// Display name of the synthetic bucket.
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// Number of content characters kept in an entry leaf's preview.
pub const PREVIEW_CHARS: usize = 40;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// The category fields the graph needs.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRef<'a> {
    pub id: DbId,
    pub name: &'a str,
}

/// The entry fields the graph needs.
#[derive(Debug, Clone, Copy)]
pub struct EntryRef<'a> {
    pub id: DbId,
    pub title: &'a str,
    pub content: &'a str,
    pub category_id: Option<DbId>,
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    User,
    Category,
    Entry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub name: String,
    /// Entries under a category node. Absent on other kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// Truncated content of an entry node. Absent on other kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
}

/// Node/link lists in the shape force-graph renderers consume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JournalGraph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

// ---------------------------------------------------------------------------
// Shaping
// ---------------------------------------------------------------------------

/// Build the three-level journal graph.
///
/// Every category passed in gets a node linked from the root, even when no
/// entry references it. An entry whose `category_id` is null or does not match
/// any passed category is attached to the synthetic "Uncategorized" node,
/// which exists only when at least one such entry does.
///
/// Node order: root, categories (input order), synthetic bucket, entries
/// (input order).
pub fn build_tree(
    entries: &[EntryRef<'_>],
    categories: &[CategoryRef<'_>],
    viewer_label: &str,
) -> JournalGraph {
    let known: HashSet<DbId> = categories.iter().map(|c| c.id).collect();

    let resolved: Vec<Option<DbId>> = entries
        .iter()
        .map(|e| e.category_id.filter(|id| known.contains(id)))
        .collect();

    let mut counts: HashMap<Option<DbId>, usize> = HashMap::new();
    for key in &resolved {
        *counts.entry(*key).or_default() += 1;
    }

    let mut graph = JournalGraph::default();

    graph.nodes.push(GraphNode {
        id: ROOT_NODE_ID.to_string(),
        kind: NodeKind::User,
        name: viewer_label.to_string(),
        count: None,
        preview: None,
    });

    let mut emitted: HashSet<DbId> = HashSet::new();
    for category in categories {
        if !emitted.insert(category.id) {
            continue;
        }
        let node_id = category_node_id(Some(category.id));
        graph.nodes.push(GraphNode {
            id: node_id.clone(),
            kind: NodeKind::Category,
            name: category.name.to_string(),
            count: Some(counts.get(&Some(category.id)).copied().unwrap_or(0)),
            preview: None,
        });
        graph.links.push(link(ROOT_NODE_ID, node_id));
    }

    if let Some(&orphans) = counts.get(&None) {
        graph.nodes.push(GraphNode {
            id: UNCATEGORIZED_NODE_ID.to_string(),
            kind: NodeKind::Category,
            name: UNCATEGORIZED_LABEL.to_string(),
            count: Some(orphans),
            preview: None,
        });
        graph.links.push(link(ROOT_NODE_ID, UNCATEGORIZED_NODE_ID.to_string()));
    }

    for (entry, category_id) in entries.iter().zip(resolved) {
        let node_id = format!("entry-{}", entry.id);
        graph.nodes.push(GraphNode {
            id: node_id.clone(),
            kind: NodeKind::Entry,
            name: entry.title.to_string(),
            count: None,
            preview: Some(preview(entry.content)),
        });
        graph.links.push(link(&category_node_id(category_id), node_id));
    }

    graph
}

fn category_node_id(category_id: Option<DbId>) -> String {
    match category_id {
        Some(id) => format!("cat-{id}"),
        None => UNCATEGORIZED_NODE_ID.to_string(),
    }
}

fn link(source: &str, target: String) -> GraphLink {
    GraphLink {
        source: source.to_string(),
        target,
    }
}

/// First [`PREVIEW_CHARS`] characters of `content`, with an ellipsis when cut.
fn preview(content: &str) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}…")
    } else {
        head
    }
}
