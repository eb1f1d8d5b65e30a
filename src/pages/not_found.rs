use leptos::prelude::*;
use leptos_router::components::A;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="container">
			<h1>"Page not found"</h1>
			<p>
				<A href="/">"Back to the graph"</A>
			</p>
		</div>
	}
}
