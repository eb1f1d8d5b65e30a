use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use log::{debug, info};

use crate::components::cluster_controls::ClusterControls;
use crate::components::force_graph::{
	ForceGraphCanvas, ForceGraphHandle, GraphData, GraphLink, GraphNode,
};
use crate::components::pie_chart::PieChart;
use crate::config::ClusterSettings;
use crate::graph::aggregate::cluster_breakdown;
use crate::graph::clustered::ClusterGraph;

const CHARGE: f32 = 10.0;
const LINK_DISTANCE: f64 = 30.0;
const CENTER_STRENGTH: f64 = 0.05;
const COLLIDE_SCALE: f64 = 2.0;
const COOLDOWN_TICKS: u32 = 5000;
const NODE_REL_SIZE: f64 = 6.0;

impl From<&ClusterGraph> for GraphData {
	fn from(graph: &ClusterGraph) -> Self {
		GraphData {
			nodes: graph
				.nodes
				.iter()
				.map(|n| GraphNode {
					id: n.id.clone(),
					color: n.color.clone(),
					val: n.val as f64,
				})
				.collect(),
			links: graph
				.links
				.iter()
				.map(|l| GraphLink {
					source: l.source.clone(),
					target: l.target.clone(),
				})
				.collect(),
		}
	}
}

/// Star-shaped clusters; right-click a node to remove it.
#[component]
pub fn ClusterView() -> impl IntoView {
	let query = use_query_map();
	let settings = query.with_untracked(|q| ClusterSettings::from_lookup(|key| q.get(key)));
	let graph = RwSignal::new(ClusterGraph::generate(settings.clusters, settings.leaves));
	let handle = ForceGraphHandle::default();

	let pie = Memo::new(move |_| graph.with(|g| cluster_breakdown(&g.nodes)));
	let data = Signal::derive(move || graph.with(|g| GraphData::from(g)));

	// Runs once on mount.
	Effect::new(move |_| {
		handle.configure(|f| {
			f.charge = CHARGE;
			f.link_distance = Some(LINK_DISTANCE);
			f.center = Some(CENTER_STRENGTH);
			f.collide = Some(COLLIDE_SCALE);
			f.cooldown_ticks = COOLDOWN_TICKS;
		});
	});

	let on_right_click = move |id: String| {
		graph.update(|g| *g = g.without_node(&id));
		debug!("{} nodes left after removing {id}", graph.with_untracked(|g| g.nodes.len()));
	};

	let on_refresh = move |_: ()| {
		info!("Regenerating {} clusters", settings.clusters);
		graph.set(ClusterGraph::generate(settings.clusters, settings.leaves));
		handle.reheat();
	};

	let on_engine_stop = move |_: ()| {
		handle.configure(|f| f.center = None);
	};

	view! {
		<div class="card cluster-view">
			<ClusterControls on_refresh=on_refresh />
			<div class="graph-fill">
				<ForceGraphCanvas
					data=data
					handle=handle
					fullscreen=true
					background="#ffffff"
					node_rel_size=NODE_REL_SIZE
					grid=true
					on_node_right_click=on_right_click
					on_engine_stop=on_engine_stop
				/>
			</div>
			<div class="pie-corner">
				<PieChart data=pie outer_radius=60.0 show_labels=true />
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn graph_data_carries_weights_and_links() {
		let graph = ClusterGraph::generate(2, 3).without_node("0-1");
		let data = GraphData::from(&graph);

		assert_eq!(data.nodes.len(), graph.nodes.len());
		assert_eq!(data.links.len(), 5);
		assert_eq!(data.nodes[0].id, "cluster-0");
		assert_eq!(data.nodes[0].val, 2.0);
		assert_eq!(data.nodes[1].val, 1.0);
		assert_eq!(data.nodes[0].color, graph.nodes[0].color);
		assert!(
			data.links
				.iter()
				.all(|l| graph.links.iter().any(|k| k.source == l.source && k.target == l.target))
		);
	}
}
