use log::{debug, warn};

use super::types::{EdgeId, Graph, Node, NodeId};

/// What the user last clicked. Edge and node selections exclude each other.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Selection {
	#[default]
	None,
	Edge {
		id: EdgeId,
		source: NodeId,
		target: NodeId,
	},
	Node(Node),
}

/// Transient selection state owned by one mounted renderer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphSelection {
	selection: Selection,
	annotation: String,
}

impl GraphSelection {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn click_edge(&mut self, id: EdgeId, source: NodeId, target: NodeId) {
		debug!("edge {id} selected");
		self.selection = Selection::Edge { id, source, target };
		self.annotation.clear();
	}

	/// Select the node keyed by `id`. Unknown ids leave the state untouched
	/// and return `false`.
	pub fn click_node(&mut self, graph: &Graph, id: NodeId) -> bool {
		let Some(node) = graph.get(id) else {
			warn!("click on unknown node {id}");
			return false;
		};
		debug!("node {id} selected");
		self.selection = Selection::Node(node.clone());
		self.annotation.clear();
		true
	}

	pub fn set_annotation(&mut self, text: String) {
		self.annotation = text;
	}

	pub fn annotation(&self) -> &str {
		&self.annotation
	}

	pub fn highlighted_edge(&self) -> Option<&EdgeId> {
		match &self.selection {
			Selection::Edge { id, .. } => Some(id),
			_ => None,
		}
	}

	pub fn is_highlighted(&self, id: &EdgeId) -> bool {
		self.highlighted_edge() == Some(id)
	}

	pub fn selected_pair(&self) -> Option<(NodeId, NodeId)> {
		match self.selection {
			Selection::Edge { source, target, .. } => Some((source, target)),
			_ => None,
		}
	}

	pub fn selected_node(&self) -> Option<&Node> {
		match &self.selection {
			Selection::Node(node) => Some(node),
			_ => None,
		}
	}

	pub fn has_selection(&self) -> bool {
		self.selection != Selection::None
	}
}
