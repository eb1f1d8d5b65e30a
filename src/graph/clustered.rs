//! Star-shaped clusters: one hub per cluster with leaves linked to it.

use log::debug;

use super::Link;
use super::palette::generate_palette;

pub const NUM_CLUSTERS: usize = 5;
pub const NODES_PER_CLUSTER: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeRole {
	Hub,
	Leaf,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClusterNode {
	pub id: String,
	pub cluster: usize,
	pub color: String,
	/// Hubs start at their leaf count, leaves stay at 1.
	pub val: u32,
	pub role: NodeRole,
}

impl ClusterNode {
	pub fn is_hub(&self) -> bool {
		self.role == NodeRole::Hub
	}
}

/// Id of the hub node for `cluster`.
pub fn hub_id(cluster: usize) -> String {
	format!("cluster-{cluster}")
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClusterGraph {
	pub nodes: Vec<ClusterNode>,
	pub links: Vec<Link>,
}

impl ClusterGraph {
	/// Builds `clusters` hubs, each followed by its `leaves` leaf nodes.
	pub fn generate(clusters: usize, leaves: usize) -> Self {
		let palette = generate_palette(clusters);
		let mut nodes = Vec::with_capacity(clusters.saturating_mul(leaves.saturating_add(1)));
		let mut links = Vec::with_capacity(clusters.saturating_mul(leaves));
		let weight = u32::try_from(leaves).unwrap_or(u32::MAX);

		for (cluster, color) in palette.into_iter().enumerate() {
			let hub = hub_id(cluster);
			nodes.push(ClusterNode {
				id: hub.clone(),
				cluster,
				color: color.into(),
				val: weight,
				role: NodeRole::Hub,
			});

			for i in 0..leaves {
				let id = format!("{cluster}-{i}");
				links.push(Link::new(id.clone(), hub.clone()));
				nodes.push(ClusterNode {
					id,
					cluster,
					color: color.into(),
					val: 1,
					role: NodeRole::Leaf,
				});
			}
		}

		Self { nodes, links }
	}

	pub fn node(&self, id: &str) -> Option<&ClusterNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Returns the graph with `id` removed.
	///
	/// Removing a hub drops its whole cluster. Removing a leaf decrements the
	/// hub's `val` (never below 1) and drops the hub once `val` reaches 1.
	/// Unknown ids leave the graph unchanged.
	pub fn without_node(&self, id: &str) -> Self {
		let Some(node) = self.node(id) else {
			return self.clone();
		};

		if node.is_hub() {
			let cluster = node.cluster;
			debug!("Removing cluster {cluster}");
			let in_cluster = |id: &str| {
				self.node(id).is_some_and(|n| n.cluster == cluster)
			};
			return Self {
				nodes: self
					.nodes
					.iter()
					.filter(|n| n.cluster != cluster)
					.cloned()
					.collect(),
				links: self
					.links
					.iter()
					.filter(|l| !in_cluster(&l.source) && !in_cluster(&l.target))
					.cloned()
					.collect(),
			};
		}

		debug!("Removing leaf {id}");
		let hub = hub_id(node.cluster);
		let mut nodes: Vec<ClusterNode> = self.nodes.iter().filter(|n| n.id != id).cloned().collect();
		let mut hub_removed = false;
		if let Some(parent) = nodes.iter_mut().find(|n| n.id == hub) {
			parent.val = parent.val.saturating_sub(1).max(1);
			hub_removed = parent.val == 1;
		}
		if hub_removed {
			debug!("Hub {hub} has no leaves left");
			nodes.retain(|n| n.id != hub);
		}

		let links = self
			.links
			.iter()
			.filter(|l| !l.touches(id) && !(hub_removed && l.touches(&hub)))
			.cloned()
			.collect();

		Self { nodes, links }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn generates_hubs_leaves_and_links() {
		for (c, l) in [(1, 1), (3, 4), (NUM_CLUSTERS, NODES_PER_CLUSTER)] {
			let graph = ClusterGraph::generate(c, l);
			let hubs = graph.nodes.iter().filter(|n| n.is_hub()).count();
			assert_eq!(hubs, c);
			assert_eq!(graph.nodes.len() - hubs, c * l);
			assert_eq!(graph.links.len(), c * l);

			for leaf in graph.nodes.iter().filter(|n| !n.is_hub()) {
				let links: Vec<_> = graph.links.iter().filter(|k| k.touches(&leaf.id)).collect();
				assert_eq!(links.len(), 1);
				assert_eq!(links[0].target, hub_id(leaf.cluster));
			}
		}
	}

	#[test]
	fn hubs_precede_their_leaves() {
		let graph = ClusterGraph::generate(2, 2);
		let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, ["cluster-0", "0-0", "0-1", "cluster-1", "1-0", "1-1"]);
		assert_eq!(graph.nodes[0].val, 2);
		assert_eq!(graph.nodes[1].val, 1);
		assert_eq!(graph.nodes[0].color, graph.nodes[2].color);
		assert_ne!(graph.nodes[0].color, graph.nodes[3].color);
	}

	#[test]
	fn removing_leaf_decrements_hub() {
		let graph = ClusterGraph::generate(NUM_CLUSTERS, NODES_PER_CLUSTER);
		let after = graph.without_node("0-3");

		assert_eq!(after.nodes.len(), 54);
		assert_eq!(after.links.len(), 49);
		assert!(after.node("0-3").is_none());
		assert_eq!(after.node("cluster-0").map(|n| n.val), Some(9));
		assert!(after.links.iter().all(|l| !l.touches("0-3")));
	}

	#[test]
	fn removing_hub_drops_cluster() {
		let graph = ClusterGraph::generate(NUM_CLUSTERS, NODES_PER_CLUSTER).without_node("cluster-1");

		assert_eq!(graph.nodes.len(), 44);
		assert_eq!(graph.links.len(), 40);
		assert!(graph.nodes.iter().all(|n| n.cluster != 1));
		assert!(
			graph
				.links
				.iter()
				.all(|l| !l.source.starts_with("1-") && l.target != "cluster-1")
		);
	}

	#[test]
	fn removals_compose() {
		let graph = ClusterGraph::generate(NUM_CLUSTERS, NODES_PER_CLUSTER)
			.without_node("0-3")
			.without_node("cluster-1");

		assert_eq!(graph.nodes.len(), 43);
		assert_eq!(graph.links.len(), 39);
		assert_eq!(graph.node("cluster-0").map(|n| n.val), Some(9));
	}

	#[test]
	fn hub_disappears_when_val_reaches_one() {
		let mut graph = ClusterGraph::generate(1, 3);
		graph = graph.without_node("0-0");
		assert_eq!(graph.node("cluster-0").map(|n| n.val), Some(2));

		graph = graph.without_node("0-1");
		assert!(graph.node("cluster-0").is_none());
		assert_eq!(graph.nodes.len(), 1);
		assert!(graph.links.is_empty());
	}

	#[test]
	fn removing_sole_leaf_removes_hub() {
		let graph = ClusterGraph::generate(2, 1).without_node("1-0");
		assert!(graph.node("cluster-1").is_none());
		assert_eq!(graph.nodes.len(), 2);
		assert_eq!(graph.links.len(), 1);
	}

	#[test]
	fn unknown_id_is_noop() {
		let graph = ClusterGraph::generate(2, 2);
		assert_eq!(graph.without_node("nope"), graph);
		let emptied = graph.without_node("cluster-0").without_node("cluster-1");
		assert_eq!(emptied.without_node("cluster-0"), emptied);
		assert!(emptied.nodes.is_empty());
	}
}
