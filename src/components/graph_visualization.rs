//! People linked and coloured by a selectable attribute.

use leptos::prelude::*;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use web_sys::Event;

use super::force_graph::{
	ForceGraphCanvas, ForceGraphHandle, ForceSettings, GraphData, GraphLink, GraphNode,
};
use super::pie_chart::PieChart;
use crate::config::AttributeSettings;
use crate::graph::aggregate::attribute_breakdown;
use crate::graph::attributes::{Attribute, AttributeGraph};

const FIT_PADDING: f64 = 100.0;

impl From<&AttributeGraph> for GraphData {
	fn from(graph: &AttributeGraph) -> Self {
		let attribute = graph.attribute;
		GraphData {
			nodes: graph
				.nodes
				.iter()
				.map(|n| GraphNode {
					id: n.id.clone(),
					color: attribute.color_of(n.category.get(attribute)).into(),
					val: 1.0,
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

fn browser_rng() -> SmallRng {
	SmallRng::seed_from_u64((js_sys::Math::random() * u64::MAX as f64) as u64)
}

#[component]
pub fn GraphVisualization(settings: AttributeSettings) -> impl IntoView {
	let graph = RwSignal::new(AttributeGraph::generate(
		settings.nodes,
		settings.cluster_by,
		&mut browser_rng(),
	));
	let hovered = RwSignal::new(None::<String>);
	let handle = ForceGraphHandle::new(ForceSettings {
		damping: 0.6,
		cooldown_ticks: 100,
		..Default::default()
	});
	info!("Generated {} nodes", settings.nodes);

	let cluster_by = Memo::new(move |_| graph.with(|g| g.attribute));
	let stats = Memo::new(move |_| graph.with(|g| attribute_breakdown(&g.nodes, g.attribute)));
	let data = Signal::derive(move || graph.with(|g| GraphData::from(g)));

	let on_select = move |ev: Event| {
		let Ok(attribute) = event_target_value(&ev).parse::<Attribute>() else {
			return;
		};
		debug!("Clustering by {attribute}");
		graph.update(|g| g.relink(attribute));
	};

	let on_hover = move |id: Option<String>| hovered.set(id);
	let on_engine_stop = move |_: ()| handle.zoom_to_fit(FIT_PADDING);

	let tooltip = move || {
		let id = hovered.get()?;
		graph.with(|g| {
			let node = g.node(&id)?;
			Some(view! {
				<div class="tooltip">
					"Node: " {node.name.clone()} <br />
					{g.attribute.key()} ": " {node.category.get(g.attribute)}
				</div>
			})
		})
	};

	view! {
		<div class="card graph-visualization">
			<div class="toolbar">
				<select class="select" on:change=on_select>
					{Attribute::ALL
						.into_iter()
						.map(|attribute| {
							view! {
								<option
									value=attribute.key()
									selected=move || cluster_by.get() == attribute
								>
									{attribute.title()}
								</option>
							}
						})
						.collect_view()}
				</select>
				<div class="pie-small">
					<PieChart data=stats outer_radius=40.0 inner_radius=20.0 />
				</div>
			</div>
			<div class="graph-frame">
				<ForceGraphCanvas
					data=data
					handle=handle
					width=Some(800.0)
					height=Some(600.0)
					background="#ffffff"
					link_width=0.5
					node_rel_size=7.5
					on_node_hover=on_hover
					on_engine_stop=on_engine_stop
				/>
				{tooltip}
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn nodes_are_recoloured_on_relink() {
		let mut graph = AttributeGraph::generate(30, Attribute::Department, &mut SmallRng::seed_from_u64(5));
		let by_department = GraphData::from(&graph);
		for (node, person) in by_department.nodes.iter().zip(&graph.nodes) {
			assert_eq!(node.id, person.id);
			assert_eq!(node.color, Attribute::Department.color_of(person.category.department));
			assert_eq!(node.val, 1.0);
		}

		graph.relink(Attribute::Location);
		let by_location = GraphData::from(&graph);
		assert_eq!(by_location.links.len(), graph.links.len());
		for (node, person) in by_location.nodes.iter().zip(&graph.nodes) {
			assert_eq!(node.color, Attribute::Location.color_of(person.category.location));
		}
	}
}
