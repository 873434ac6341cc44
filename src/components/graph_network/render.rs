use std::fmt;

use super::types::{EdgeId, Graph, NodeId};

pub const NODE_RADIUS: f64 = 10.0;
pub const LABEL_OFFSET_Y: f64 = 3.0;
pub const VIEW_MARGIN: f64 = 20.0;

const EMPTY_VIEW: ViewBox = ViewBox {
	min_x: 0.0,
	min_y: 0.0,
	width: 800.0,
	height: 600.0,
};

#[derive(Clone, Debug, PartialEq)]
pub struct EdgeShape {
	pub id: EdgeId,
	pub source: NodeId,
	pub target: NodeId,
	pub x1: f64,
	pub y1: f64,
	pub x2: f64,
	pub y2: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NodeShape {
	pub id: NodeId,
	pub cx: f64,
	pub cy: f64,
	pub r: f64,
	pub label: String,
	pub label_y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBox {
	pub min_x: f64,
	pub min_y: f64,
	pub width: f64,
	pub height: f64,
}

impl fmt::Display for ViewBox {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} {} {} {}",
			self.min_x, self.min_y, self.width, self.height
		)
	}
}

/// Everything the renderer draws for one graph, edges before nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
	pub edges: Vec<EdgeShape>,
	pub nodes: Vec<NodeShape>,
	pub view_box: ViewBox,
}

impl Scene {
	pub fn build(graph: &Graph, node_radius: f64) -> Self {
		// Graph guarantees children resolve; filter_map only guards the lookup.
		let edges = graph
			.edges()
			.filter_map(|edge| {
				let (from, to) = (graph.get(edge.source)?, graph.get(edge.target)?);
				Some(EdgeShape {
					id: edge.id,
					source: edge.source,
					target: edge.target,
					x1: from.x,
					y1: from.y,
					x2: to.x,
					y2: to.y,
				})
			})
			.collect();

		let nodes = graph
			.nodes()
			.map(|node| NodeShape {
				id: node.id,
				cx: node.x,
				cy: node.y,
				r: node_radius,
				label: node.id.to_string(),
				label_y: node.y + LABEL_OFFSET_Y,
			})
			.collect();

		Self {
			edges,
			nodes,
			view_box: fit_view(graph, node_radius + VIEW_MARGIN),
		}
	}
}

fn fit_view(graph: &Graph, pad: f64) -> ViewBox {
	let mut bounds: Option<(f64, f64, f64, f64)> = None;
	for node in graph.nodes() {
		let (x, y) = (node.x, node.y);
		bounds = Some(match bounds {
			None => (x, y, x, y),
			Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
		});
	}
	let Some((x0, y0, x1, y1)) = bounds else {
		return EMPTY_VIEW;
	};
	ViewBox {
		min_x: x0 - pad,
		min_y: y0 - pad,
		width: (x1 - x0) + 2.0 * pad,
		height: (y1 - y0) + 2.0 * pad,
	}
}
