use leptos::prelude::*;
use log::{debug, info, warn};
use web_sys::MouseEvent;

use crate::components::graph_network::{DataError, Graph, GraphNetwork, parse_graph};

/// Result of a successful submit.
#[derive(Debug, PartialEq)]
pub enum Loaded {
	Replaced(Graph),
	Unchanged,
}

/// Parse `text` against the active dataset. An identical dataset reports
/// [`Loaded::Unchanged`] so the mounted renderer keeps its selection.
pub fn load_graph(text: &str, active: Option<&Graph>) -> Result<Loaded, DataError> {
	let graph = parse_graph(text)?;
	if active == Some(&graph) {
		return Ok(Loaded::Unchanged);
	}
	if graph.is_empty() {
		info!("loaded empty graph");
	} else {
		info!(
			"loaded graph: {} nodes, {} edges",
			graph.len(),
			graph.edge_count()
		);
	}
	Ok(Loaded::Replaced(graph))
}

fn notify(message: &str) {
	let Some(window) = web_sys::window() else {
		return;
	};
	if let Err(e) = window.alert_with_message(message) {
		warn!("alert failed: {e:?}");
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let buffer = RwSignal::new(String::new());
	// Written only when a different dataset is accepted; each write remounts the renderer.
	let data = RwSignal::new(None::<Graph>);

	let on_submit = move |_: MouseEvent| {
		let outcome = buffer.with_untracked(|text| {
			data.with_untracked(|active| load_graph(text, active.as_ref()))
		});
		match outcome {
			Ok(Loaded::Replaced(graph)) => data.set(Some(graph)),
			Ok(Loaded::Unchanged) => debug!("submitted graph matches the active one"),
			Err(err) => {
				warn!("rejected graph input: {err:?}");
				notify(&err.to_string());
			}
		}
	};

	view! {
		<div class="app">
			<header class="header">
				<h1 style="text-align: center">"Graph Network"</h1>
				<div class="json-input">
					<textarea
						placeholder="Enter JSON data"
						prop:value=move || buffer.get()
						on:input=move |ev| buffer.set(event_target_value(&ev))
					/>
					<button on:click=on_submit>"Submit"</button>
				</div>
			</header>
			<main class="main">
				{move || match data.get() {
					Some(graph) => view! { <GraphNetwork data=graph /> }.into_any(),
					None => view! { <div class="no-data">"No data available"</div> }.into_any(),
				}}
			</main>
			<footer class="footer">"Powered by Leptos and Rust"</footer>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const TWO_NODES: &str = r#"{"1":{"id":1,"x":0,"y":0,"children":[2]},"2":{"id":2,"x":10,"y":10,"children":[]}}"#;

	fn replaced(outcome: Result<Loaded, DataError>) -> Graph {
		match outcome {
			Ok(Loaded::Replaced(graph)) => graph,
			other => panic!("expected a new dataset, got {other:?}"),
		}
	}

	#[test]
	fn first_valid_submit_loads_dataset() {
		let graph = replaced(load_graph(TWO_NODES, None));
		assert_eq!(graph.len(), 2);
		assert_eq!(graph.edge_count(), 1);
	}

	#[test]
	fn different_graph_replaces_active() {
		let active = replaced(load_graph(TWO_NODES, None));
		let next = replaced(load_graph(
			r#"{"5":{"id":5,"x":1,"y":1,"children":[]}}"#,
			Some(&active),
		));
		let ids: Vec<_> = next.nodes().map(|n| n.id).collect();
		assert_eq!(ids, [5]);
	}

	#[test]
	fn identical_graph_is_unchanged() {
		let active = replaced(load_graph(TWO_NODES, None));
		let spaced = r#"{ "1": {"id": 1, "x": 0, "y": 0, "children": [2]},
			"2": {"id": 2, "x": 10, "y": 10, "children": []} }"#;
		assert_eq!(load_graph(spaced, Some(&active)).unwrap(), Loaded::Unchanged);
	}

	#[test]
	fn same_nodes_in_another_order_are_unchanged() {
		let active = replaced(load_graph(TWO_NODES, None));
		let reordered = r#"{"2":{"id":2,"x":10,"y":10,"children":[]},"1":{"id":1,"x":0,"y":0,"children":[2]}}"#;
		assert_eq!(
			load_graph(reordered, Some(&active)).unwrap(),
			Loaded::Unchanged
		);
	}

	#[test]
	fn moved_node_is_a_new_dataset() {
		let active = replaced(load_graph(TWO_NODES, None));
		let moved = r#"{"1":{"id":1,"x":0,"y":0,"children":[2]},"2":{"id":2,"x":40,"y":10,"children":[]}}"#;
		assert_eq!(replaced(load_graph(moved, Some(&active))).get(2).unwrap().x, 40.0);
	}

	#[test]
	fn invalid_json_is_a_syntax_error() {
		let active = replaced(load_graph(TWO_NODES, None));
		let err = load_graph("{bad", Some(&active)).unwrap_err();
		assert!(matches!(err, DataError::Syntax(_)));
		assert_eq!(err.to_string(), "Invalid JSON data");
	}

	#[test]
	fn invalid_json_without_dataset_fails() {
		assert!(load_graph("{bad", None).is_err());
	}

	#[test]
	fn schema_error_names_the_reason() {
		let err = load_graph(r#"{"1":{"id":1,"x":0,"y":0,"children":[9]}}"#, None).unwrap_err();
		assert!(matches!(err, DataError::Schema(_)));
		assert_eq!(
			err.to_string(),
			"Invalid graph data: node 1 lists unknown child 9"
		);
	}
}
