use indexmap::IndexMap;
use serde_json::Value;

use super::types::{Graph, Node, NodeId};

/// Why a submitted document was not accepted as a graph.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
	#[error("Invalid JSON data")]
	Syntax(#[source] serde_json::Error),
	#[error("Invalid graph data: {0}")]
	Schema(#[from] SchemaError),
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SchemaError {
	#[error("expected an object of nodes, found {found}")]
	NotAnObject { found: &'static str },
	#[error("key {key:?} is not an integer node id")]
	InvalidKey { key: String },
	#[error("node {key:?} is malformed: {reason}")]
	InvalidNode { key: String, reason: String },
	#[error("node {key:?} declares id {id}")]
	IdMismatch { key: String, id: NodeId },
	#[error("node {id} appears more than once")]
	DuplicateNode { id: NodeId },
	#[error("node {node} lists unknown child {child}")]
	DanglingChild { node: NodeId, child: NodeId },
}

/// Parse and validate a JSON document into a [`Graph`].
pub fn parse_graph(text: &str) -> Result<Graph, DataError> {
	let value: Value = serde_json::from_str(text).map_err(DataError::Syntax)?;
	Ok(Graph::from_json(value)?)
}

fn kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}

impl Graph {
	pub fn from_json(value: Value) -> Result<Self, SchemaError> {
		let map = match value {
			Value::Object(map) => map,
			other => return Err(SchemaError::NotAnObject { found: kind(&other) }),
		};

		let mut nodes = IndexMap::with_capacity(map.len());
		for (key, raw) in map {
			let Ok(key_id) = key.trim().parse::<NodeId>() else {
				return Err(SchemaError::InvalidKey { key });
			};
			let node: Node = match serde_json::from_value(raw) {
				Ok(node) => node,
				Err(e) => {
					return Err(SchemaError::InvalidNode {
						key,
						reason: e.to_string(),
					});
				}
			};
			if node.id != key_id {
				return Err(SchemaError::IdMismatch { key, id: node.id });
			}
			if nodes.insert(key_id, node).is_some() {
				return Err(SchemaError::DuplicateNode { id: key_id });
			}
		}

		for node in nodes.values() {
			if let Some(&child) = node.children.iter().find(|c| !nodes.contains_key(*c)) {
				return Err(SchemaError::DanglingChild {
					node: node.id,
					child,
				});
			}
		}

		Ok(Self { nodes })
	}
}
