use leptos::prelude::*;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="app">
			<h1>"Uh oh!"</h1>
			<p>"This page does not exist."</p>
			<a href="/">"Back to the graph"</a>
		</div>
	}
}
