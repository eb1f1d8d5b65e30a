//! Percentage breakdowns of the live node set, one entry per category.

use std::collections::BTreeMap;

use indexmap::IndexMap;

use super::attributes::{Attribute, PersonNode};
use super::clustered::ClusterNode;

/// One pie slice: label, share of the total in percent, and colour.
#[derive(Clone, Debug, PartialEq)]
pub struct AggregateEntry {
	pub label: String,
	pub value: f64,
	pub color: String,
}

fn percentages(buckets: impl IntoIterator<Item = (String, usize, String)>) -> Vec<AggregateEntry> {
	let buckets: Vec<_> = buckets.into_iter().collect();
	let total: usize = buckets.iter().map(|(_, count, _)| count).sum();
	if total == 0 {
		return Vec::new();
	}
	buckets
		.into_iter()
		.map(|(label, count, color)| AggregateEntry {
			label,
			value: count as f64 / total as f64 * 100.0,
			color,
		})
		.collect()
}

/// Leaf share per cluster, in ascending cluster order. Hubs are not counted.
pub fn cluster_breakdown(nodes: &[ClusterNode]) -> Vec<AggregateEntry> {
	let mut counts: BTreeMap<usize, (usize, &str)> = BTreeMap::new();
	for node in nodes.iter().filter(|n| !n.is_hub()) {
		counts.entry(node.cluster).or_insert((0, node.color.as_str())).0 += 1;
	}
	percentages(
		counts
			.into_iter()
			.map(|(cluster, (count, color))| (format!("Cluster {cluster}"), count, color.to_owned())),
	)
}

/// Share of each `attribute` value, in order of first appearance.
pub fn attribute_breakdown(nodes: &[PersonNode], attribute: Attribute) -> Vec<AggregateEntry> {
	let mut counts: IndexMap<&str, usize> = IndexMap::new();
	for node in nodes {
		*counts.entry(node.category.get(attribute)).or_default() += 1;
	}
	percentages(
		counts
			.into_iter()
			.map(|(value, count)| (value.to_owned(), count, attribute.color_of(value).to_owned())),
	)
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;
	use crate::graph::attributes::AttributeGraph;
	use crate::graph::clustered::ClusterGraph;

	fn total(entries: &[AggregateEntry]) -> f64 {
		entries.iter().map(|e| e.value).sum()
	}

	#[test]
	fn fresh_clusters_split_evenly() {
		let graph = ClusterGraph::generate(5, 10);
		let pie = cluster_breakdown(&graph.nodes);
		assert_eq!(pie.len(), 5);
		for (i, entry) in pie.iter().enumerate() {
			assert_eq!(entry.label, format!("Cluster {i}"));
			assert!((entry.value - 20.0).abs() < 1e-9);
		}
		assert_eq!(pie[1].color, graph.nodes[11].color);
	}

	#[test]
	fn shares_track_removals() {
		let graph = ClusterGraph::generate(3, 4).without_node("0-0").without_node("cluster-2");
		let pie = cluster_breakdown(&graph.nodes);
		assert_eq!(pie.len(), 2);
		assert!((pie[0].value - 300.0 / 7.0).abs() < 1e-9);
		assert!((total(&pie) - 100.0).abs() < 1e-9);
	}

	#[test]
	fn hub_only_graph_has_no_slices() {
		let graph = ClusterGraph::generate(3, 0);
		assert_eq!(graph.nodes.len(), 3);
		assert!(cluster_breakdown(&graph.nodes).is_empty());
	}

	#[test]
	fn empty_input_yields_empty_breakdown() {
		assert!(cluster_breakdown(&[]).is_empty());
		assert!(attribute_breakdown(&[], Attribute::Location).is_empty());
	}

	#[test]
	fn attribute_shares_sum_to_hundred() {
		let mut rng = SmallRng::seed_from_u64(99);
		let graph = AttributeGraph::generate(137, Attribute::Department, &mut rng);
		for attribute in Attribute::ALL {
			let pie = attribute_breakdown(&graph.nodes, attribute);
			assert!(!pie.is_empty() && pie.len() <= attribute.domain().len());
			assert!((total(&pie) - 100.0).abs() < 1e-9);
			assert_eq!(pie[0].label, graph.nodes[0].category.get(attribute));
			for entry in &pie {
				assert_eq!(entry.color, attribute.color_of(&entry.label));
			}
		}
	}
}
