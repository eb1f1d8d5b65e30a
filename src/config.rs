//! Page settings, overridable from the URL query string.

use std::str::FromStr;

use log::warn;

use crate::graph::attributes::{Attribute, NUM_NODES};
use crate::graph::clustered::{NODES_PER_CLUSTER, NUM_CLUSTERS};

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
	match lookup(key) {
		Some(raw) => raw.parse().unwrap_or_else(|_| {
			warn!("Ignoring invalid `{key}` value {raw:?}");
			default
		}),
		None => default,
	}
}

/// Largest counts accepted from the query string.
pub const MAX_CLUSTERS: usize = 50;
pub const MAX_LEAVES: usize = 200;
pub const MAX_NODES: usize = 1000;

fn clamp_to(key: &str, value: usize, max: usize) -> usize {
	if value > max {
		warn!("Clamping `{key}` from {value} to {max}");
		return max;
	}
	value
}

/// `/clusters?clusters=<C>&leaves=<L>`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClusterSettings {
	pub clusters: usize,
	pub leaves: usize,
}

impl Default for ClusterSettings {
	fn default() -> Self {
		Self {
			clusters: NUM_CLUSTERS,
			leaves: NODES_PER_CLUSTER,
		}
	}
}

impl ClusterSettings {
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
		let defaults = Self::default();
		Self {
			clusters: clamp_to(
				"clusters",
				parse_or(&lookup, "clusters", defaults.clusters),
				MAX_CLUSTERS,
			),
			leaves: clamp_to("leaves", parse_or(&lookup, "leaves", defaults.leaves), MAX_LEAVES),
		}
	}
}

/// `/?nodes=<N>&by=<attribute>`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttributeSettings {
	pub nodes: usize,
	pub cluster_by: Attribute,
}

impl Default for AttributeSettings {
	fn default() -> Self {
		Self {
			nodes: NUM_NODES,
			cluster_by: Attribute::default(),
		}
	}
}

impl AttributeSettings {
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
		let defaults = Self::default();
		Self {
			nodes: clamp_to("nodes", parse_or(&lookup, "nodes", defaults.nodes), MAX_NODES),
			cluster_by: parse_or(&lookup, "by", defaults.cluster_by),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;
	use crate::graph::clustered::ClusterGraph;

	fn query(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
		let map: HashMap<String, String> = pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();
		move |key| map.get(key).cloned()
	}

	#[test]
	fn missing_keys_use_defaults() {
		assert_eq!(ClusterSettings::from_lookup(query(&[])), ClusterSettings::default());
		assert_eq!(AttributeSettings::from_lookup(query(&[])), AttributeSettings::default());
		assert_eq!(AttributeSettings::default().nodes, 200);
	}

	#[test]
	fn overrides_are_parsed() {
		let settings = ClusterSettings::from_lookup(query(&[("clusters", "12"), ("leaves", "0")]));
		assert_eq!(settings, ClusterSettings { clusters: 12, leaves: 0 });

		let settings = AttributeSettings::from_lookup(query(&[("by", "location"), ("nodes", "50")]));
		assert_eq!(settings.cluster_by, Attribute::Location);
		assert_eq!(settings.nodes, 50);
	}

	#[test]
	fn oversized_counts_are_clamped() {
		let huge = usize::MAX.to_string();
		let settings = ClusterSettings::from_lookup(query(&[("clusters", "51"), ("leaves", huge.as_str())]));
		assert_eq!(
			settings,
			ClusterSettings {
				clusters: MAX_CLUSTERS,
				leaves: MAX_LEAVES
			}
		);
		let graph = ClusterGraph::generate(1, settings.leaves);
		assert_eq!(graph.nodes.len(), MAX_LEAVES + 1);
		assert_eq!(graph.nodes[0].val, MAX_LEAVES as u32);

		let settings = AttributeSettings::from_lookup(query(&[("nodes", "100000")]));
		assert_eq!(settings.nodes, MAX_NODES);
		let settings = AttributeSettings::from_lookup(query(&[("nodes", "1000")]));
		assert_eq!(settings.nodes, 1000);
	}

	#[test]
	fn invalid_values_fall_back() {
		let settings = ClusterSettings::from_lookup(query(&[("clusters", "-3"), ("leaves", "many")]));
		assert_eq!(settings, ClusterSettings::default());
		let settings = AttributeSettings::from_lookup(query(&[("by", "salary")]));
		assert_eq!(settings.cluster_by, Attribute::Department);
	}
}
