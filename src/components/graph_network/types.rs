use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;

/// Identifier of a node, unique within a [`Graph`].
pub type NodeId = i64;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Node {
	pub id: NodeId,
	pub x: f64,
	pub y: f64,
	pub children: Vec<NodeId>,
}

impl Node {
	/// Child ids joined for display, e.g. `"2, 3"`.
	pub fn children_label(&self) -> String {
		self.children
			.iter()
			.map(NodeId::to_string)
			.collect::<Vec<_>>()
			.join(", ")
	}
}

/// Derived edge identity, rendered as `"{source}-{target}"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EdgeId(String);

impl EdgeId {
	pub fn new(source: NodeId, target: NodeId) -> Self {
		Self(format!("{source}-{target}"))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for EdgeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
	pub id: EdgeId,
	pub source: NodeId,
	pub target: NodeId,
}

/// Nodes keyed by id, in the order they appeared in the source document.
///
/// Built through [`Graph::from_json`], which guarantees every key matches its
/// node's `id` and every child resolves.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
	pub(super) nodes: IndexMap<NodeId, Node>,
}

impl Graph {
	pub fn get(&self, id: NodeId) -> Option<&Node> {
		self.nodes.get(&id)
	}

	pub fn nodes(&self) -> impl Iterator<Item = &Node> {
		self.nodes.values()
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Every parent/child pair, parents in insertion order, children in list order.
	pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
		self.nodes.values().flat_map(|node| {
			node.children.iter().map(move |&child| Edge {
				id: EdgeId::new(node.id, child),
				source: node.id,
				target: child,
			})
		})
	}

	pub fn edge_count(&self) -> usize {
		self.nodes.values().map(|n| n.children.len()).sum()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn node(id: NodeId, x: f64, y: f64, children: &[NodeId]) -> Node {
		Node {
			id,
			x,
			y,
			children: children.to_vec(),
		}
	}

	fn graph(nodes: Vec<Node>) -> Graph {
		Graph {
			nodes: nodes.into_iter().map(|n| (n.id, n)).collect(),
		}
	}

	#[test]
	fn edge_id_joins_source_and_target() {
		assert_eq!(EdgeId::new(1, 2).as_str(), "1-2");
		assert_eq!(EdgeId::new(-4, 10).to_string(), "-4-10");
	}

	#[test]
	fn edges_follow_insertion_and_child_order() {
		let g = graph(vec![
			node(3, 0.0, 0.0, &[1, 2]),
			node(1, 5.0, 5.0, &[2]),
			node(2, 9.0, 9.0, &[]),
		]);
		let ids: Vec<String> = g.edges().map(|e| e.id.to_string()).collect();
		assert_eq!(ids, ["3-1", "3-2", "1-2"]);
		assert_eq!(g.edge_count(), 3);
	}

	#[test]
	fn children_label_is_comma_joined() {
		assert_eq!(node(1, 0.0, 0.0, &[2, 3, 4]).children_label(), "2, 3, 4");
		assert_eq!(node(1, 0.0, 0.0, &[]).children_label(), "");
	}
}
