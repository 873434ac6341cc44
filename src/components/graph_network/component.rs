use leptos::prelude::*;
use log::debug;
use web_sys::MouseEvent;

use super::render::{EdgeShape, NODE_RADIUS, NodeShape, Scene};
use super::state::GraphSelection;
use super::types::Graph;

#[component]
pub fn GraphNetwork(
	data: Graph,
	#[prop(default = NODE_RADIUS)] node_radius: f64,
) -> impl IntoView {
	let scene = Scene::build(&data, node_radius);
	debug!(
		"mounting graph view: {} nodes, {} edges",
		scene.nodes.len(),
		scene.edges.len()
	);
	let data = StoredValue::new(data);
	let selection = RwSignal::new(GraphSelection::new());

	let edges = scene
		.edges
		.into_iter()
		.map(|edge| {
			let EdgeShape {
				id,
				source,
				target,
				x1,
				y1,
				x2,
				y2,
			} = edge;
			let key = id.clone();
			let class = move || {
				if selection.with(|s| s.is_highlighted(&key)) {
					"edge highlighted"
				} else {
					"edge"
				}
			};
			let on_click =
				move |_: MouseEvent| selection.update(|s| s.click_edge(id.clone(), source, target));
			view! { <line x1=x1 y1=y1 x2=x2 y2=y2 class=class on:click=on_click /> }
		})
		.collect_view();

	let nodes = scene
		.nodes
		.into_iter()
		.map(|node| {
			let NodeShape {
				id,
				cx,
				cy,
				r,
				label,
				label_y,
			} = node;
			let on_click = move |_: MouseEvent| {
				data.with_value(|graph| {
					selection.update(|s| {
						s.click_node(graph, id);
					})
				})
			};
			view! {
				<g class="node-group" on:click=on_click>
					<circle cx=cx cy=cy r=r class="node" />
					<text
						x=cx
						y=label_y
						class="node-number"
						text-anchor="middle"
						alignment-baseline="middle"
						fill="#fff"
					>
						{label}
					</text>
				</g>
			}
		})
		.collect_view();

	view! {
		<div class="graph-container">
			<svg class="graph-svg" viewBox=scene.view_box.to_string()>
				{edges}
				{nodes}
			</svg>
			<SelectionPanel selection=selection />
		</div>
	}
}

#[component]
fn SelectionPanel(selection: RwSignal<GraphSelection>) -> impl IntoView {
	// Memos keep annotation keystrokes from rebuilding the panel.
	let pair = Memo::new(move |_| selection.with(|s| s.selected_pair()));
	let node = Memo::new(move |_| selection.with(|s| s.selected_node().cloned()));
	let has_selection = Memo::new(move |_| selection.with(|s| s.has_selection()));

	let pair_view = move || {
		pair.get().map(|(source, target)| {
			view! { <div class="selected-nodes">{format!("Nodes: {source} - {target}")}</div> }
		})
	};

	let node_view = move || {
		node.get().map(|node| {
			view! {
				<div class="selected-node">
					<h3>{format!("Node {}", node.id)}</h3>
					<p>{format!("X: {}", node.x)}</p>
					<p>{format!("Y: {}", node.y)}</p>
					<p>{format!("Children: {}", node.children_label())}</p>
				</div>
			}
		})
	};

	let annotation = move || {
		has_selection.get().then(|| {
			view! {
				<textarea
					class="annotation"
					placeholder="Additional information"
					prop:value=move || selection.with(|s| s.annotation().to_owned())
					on:input=move |ev| selection.update(|s| s.set_annotation(event_target_value(&ev)))
				/>
			}
		})
	};

	view! {
		<div class="additional-info">
			{pair_view}
			{node_view}
			{annotation}
		</div>
	}
}
