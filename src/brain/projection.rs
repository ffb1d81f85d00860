//! Brain-view projection
//!
//! Maps a focus note's neighborhood into nodes and edges. Roles are assigned
//! first-wins in the fixed order focus > parent > child > sibling: a note
//! already emitted keeps its group, but every relationship it appears in
//! still produces its edge. Each id therefore occurs at most once in `nodes`,
//! while `links` has exactly one entry per neighborhood row.

use crate::brain::models::{BrainGraph, EndpointRef, GraphLink, GraphNode, LinkKind, NodeGroup};
use crate::notes::models::{BrainView, NoteSummary};
use std::collections::HashSet;

/// Project a brain view into a renderable graph.
///
/// Pure and total: no I/O, no errors. A malformed view with the same id in
/// two roles is precedence-resolved rather than rejected.
pub fn project(view: &BrainView) -> BrainGraph {
    let mut graph = BrainGraph::default();
    let mut seen: HashSet<&str> = HashSet::new();

    push_node(&mut graph, &mut seen, &view.focus, NodeGroup::Focus);

    for parent in &view.parents {
        push_node(&mut graph, &mut seen, parent, NodeGroup::Parent);
        graph.links.push(GraphLink {
            source: EndpointRef::Id(parent.id.clone()),
            target: EndpointRef::Id(view.focus.id.clone()),
            kind: LinkKind::Parent,
        });
    }

    for child in &view.children {
        push_node(&mut graph, &mut seen, child, NodeGroup::Child);
        graph.links.push(GraphLink {
            source: EndpointRef::Id(view.focus.id.clone()),
            target: EndpointRef::Id(child.id.clone()),
            kind: LinkKind::Child,
        });
    }

    // Sibling edges radiate from the focus as a display convention; they
    // carry no hierarchy claim.
    for sibling in &view.siblings {
        push_node(&mut graph, &mut seen, sibling, NodeGroup::Sibling);
        graph.links.push(GraphLink {
            source: EndpointRef::Id(view.focus.id.clone()),
            target: EndpointRef::Id(sibling.id.clone()),
            kind: LinkKind::Sibling,
        });
    }

    graph
}

fn push_node<'a>(
    graph: &mut BrainGraph,
    seen: &mut HashSet<&'a str>,
    note: &'a NoteSummary,
    group: NodeGroup,
) {
    if seen.insert(&note.id) {
        graph.nodes.push(GraphNode {
            id: note.id.clone(),
            title: note.title.clone(),
            group,
            x: None,
            y: None,
        });
    }
}
