use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::graph_visualization::GraphVisualization;
use crate::config::AttributeSettings;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let query = use_query_map();
	let settings = query.with_untracked(|q| AttributeSettings::from_lookup(|key| q.get(key)));

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="container">
				<h1 class="page-title">"Interactive Cluster Visualization"</h1>
				<GraphVisualization settings=settings />
			</div>
		</ErrorBoundary>
	}
}
