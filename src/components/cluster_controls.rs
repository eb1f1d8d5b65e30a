//! Side panel of the cluster view. Only "Refresh Graph" acts on the graph;
//! the query, manual and refine forms just log what was entered.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use log::info;

#[component]
pub fn ClusterControls(#[prop(into)] on_refresh: Callback<()>) -> impl IntoView {
	let query = RwSignal::new(String::new());
	let manual_cluster = RwSignal::new(String::new());
	let manual_explanation = RwSignal::new(String::new());
	let refine_category = RwSignal::new(String::new());

	let submit_query = move |_: MouseEvent| {
		info!("Query submitted: {}", query.get_untracked());
	};
	let submit_manual = move |_: MouseEvent| {
		info!("Manual cluster: {}", manual_cluster.get_untracked());
		info!("Explanation: {}", manual_explanation.get_untracked());
	};
	let submit_refine = move |_: MouseEvent| {
		info!("Refine category: {}", refine_category.get_untracked());
	};

	view! {
		<div class="card cluster-controls">
			<h2 class="card-title">"Cluster Management"</h2>
			<div class="field">
				<label for="query">"Cluster Query"</label>
				<input id="query" placeholder="Enter clustering query" bind:value=query />
				<button class="button" on:click=submit_query>
					"Submit Query"
				</button>
			</div>
			<div class="field">
				<label for="manual-cluster">"Manual Cluster"</label>
				<input
					id="manual-cluster"
					placeholder="Enter cluster name"
					bind:value=manual_cluster
				/>
				<textarea
					placeholder="Explanation for the cluster"
					prop:value=move || manual_explanation.get()
					on:input=move |ev| manual_explanation.set(event_target_value(&ev))
				/>
				<button class="button" on:click=submit_manual>
					"Add Manual Cluster"
				</button>
			</div>
			<div class="field">
				<label for="refine-category">"Refine Category"</label>
				<input
					id="refine-category"
					placeholder="Enter refinement query"
					bind:value=refine_category
				/>
				<button class="button" on:click=submit_refine>
					"Refine Category"
				</button>
			</div>
			<button class="button" on:click=move |_| on_refresh.run(())>
				"Refresh Graph"
			</button>
		</div>
	}
}
