use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::forces::{self, Body};
use super::types::{ForceSettings, GraphData};

pub const HIT_RADIUS: f64 = 6.0;
const INITIAL_SPREAD: f64 = 100.0;

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub id: String,
	pub color: String,
	pub radius: f64,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
	pub neighbors: HashSet<DefaultNodeIdx>,
	pub highlight_t: f64,
	pub prev_node: Option<DefaultNodeIdx>,
	pub prev_neighbors: HashSet<DefaultNodeIdx>,
	delay_t: f64,
}

pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	data: GraphData,
	settings: ForceSettings,
	node_rel_size: f64,
	ticks: u32,
	slots: Vec<DefaultNodeIdx>,
	slot_of: HashMap<DefaultNodeIdx, usize>,
	edges: Vec<(DefaultNodeIdx, DefaultNodeIdx)>,
}

impl ForceGraphState {
	pub fn new(
		data: &GraphData,
		settings: ForceSettings,
		node_rel_size: f64,
		width: f64,
		height: f64,
	) -> Self {
		let mut state = Self {
			graph: ForceGraph::new(parameters(&settings)),
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
			animation_running: true,
			data: data.clone(),
			settings,
			node_rel_size,
			ticks: 0,
			slots: Vec::new(),
			slot_of: HashMap::new(),
			edges: Vec::new(),
		};
		state.rebuild();
		state
	}

	/// Recreates the engine from `self.data`, keeping the position and anchor
	/// of every node whose id survives.
	fn rebuild(&mut self) {
		let mut previous = HashMap::new();
		self.graph.visit_nodes(|node| {
			previous.insert(
				node.data.user_data.id.clone(),
				(node.x(), node.y(), node.data.is_anchor),
			);
		});

		let mut graph = ForceGraph::new(parameters(&self.settings));
		let mut id_to_idx = HashMap::new();
		self.slots.clear();
		self.slot_of.clear();
		self.edges.clear();

		let count = self.data.nodes.len().max(1) as f64;
		for (i, node) in self.data.nodes.iter().enumerate() {
			let (x, y, is_anchor) = previous.get(&node.id).copied().unwrap_or_else(|| {
				let angle = (i as f64) * 2.0 * PI / count;
				(
					(INITIAL_SPREAD * angle.cos()) as f32,
					(INITIAL_SPREAD * angle.sin()) as f32,
					false,
				)
			});

			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor,
				user_data: NodeInfo {
					id: node.id.clone(),
					color: node.color.clone(),
					radius: node.val.max(0.0).sqrt() * self.node_rel_size,
				},
			});
			id_to_idx.insert(node.id.clone(), idx);
			self.slot_of.insert(idx, self.slots.len());
			self.slots.push(idx);
		}

		for link in &self.data.links {
			if let (Some(&src), Some(&tgt)) =
				(id_to_idx.get(&link.source), id_to_idx.get(&link.target))
			{
				graph.add_edge(src, tgt, EdgeData::default());
				self.edges.push((src, tgt));
			}
		}

		self.graph = graph;
		self.drag = DragState::default();
		self.hover = HoverState::default();
	}

	pub fn set_data(&mut self, data: &GraphData) {
		self.data = data.clone();
		self.rebuild();
		self.reheat();
	}

	pub fn set_settings(&mut self, settings: &ForceSettings) {
		if *settings == self.settings {
			return;
		}
		self.settings = settings.clone();
		self.rebuild();
	}

	pub fn reheat(&mut self) {
		self.ticks = 0;
		self.animation_running = true;
	}

	pub fn node_id(&self, idx: DefaultNodeIdx) -> Option<String> {
		let mut id = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				id = Some(node.data.user_data.id.clone());
			}
		});
		id
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			// world-space, scales with zoom like nodes
			if (dx * dx + dy * dy).sqrt() < node.data.user_data.radius.max(HIT_RADIUS) {
				found = Some(node.index());
			}
		});
		found
	}

	/// Returns whether the hovered node changed.
	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) -> bool {
		if self.hover.node == node {
			return false;
		}
		let was_hovering = self.hover.node.is_some();

		// Save previous state for fade-out
		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
			self.hover.prev_neighbors = std::mem::take(&mut self.hover.neighbors);
		} else {
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}

		self.hover.node = node;
		self.hover.neighbors.clear();

		if let Some(idx) = node {
			if !was_hovering {
				self.hover.delay_t = 0.0;
			}
			for &(src, tgt) in &self.edges {
				if src == idx {
					self.hover.neighbors.insert(tgt);
				} else if tgt == idx {
					self.hover.neighbors.insert(src);
				}
			}
		}
		true
	}

	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx)
			|| self.hover.neighbors.contains(&idx)
			|| self.hover.prev_node == Some(idx)
			|| self.hover.prev_neighbors.contains(&idx)
	}

	pub fn is_hovered(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx) || self.hover.prev_node == Some(idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	/// Advances the simulation. Returns `true` on the tick the engine stops.
	pub fn tick(&mut self, dt: f32) -> bool {
		self.advance_highlight(dt);
		if !self.animation_running {
			return false;
		}

		self.graph.update(dt);
		self.apply_forces();
		self.ticks += 1;
		if self.ticks >= self.settings.cooldown_ticks {
			self.animation_running = false;
			return true;
		}
		false
	}

	fn apply_forces(&mut self) {
		let mut bodies = vec![Body::default(); self.slots.len()];
		self.graph.visit_nodes(|node| {
			if let Some(&slot) = self.slot_of.get(&node.index()) {
				bodies[slot] = Body {
					x: node.x(),
					y: node.y(),
					radius: node.data.user_data.radius,
					anchored: node.data.is_anchor,
				};
			}
		});
		let edges: Vec<(usize, usize)> = self
			.edges
			.iter()
			.filter_map(|(a, b)| Some((*self.slot_of.get(a)?, *self.slot_of.get(b)?)))
			.collect();

		forces::apply(&mut bodies, &edges, &self.settings);

		let slot_of = &self.slot_of;
		self.graph.visit_nodes_mut(|node| {
			if let Some(body) = slot_of.get(&node.index()).and_then(|&s| bodies.get(s)) {
				node.data.x = body.x;
				node.data.y = body.y;
			}
		});
	}

	fn advance_highlight(&mut self, dt: f32) {
		let (target, delay, speed) = if self.hover.node.is_some() {
			(1.0, 0.08, 1.8)
		} else {
			(0.0, 0.0, 1.26)
		};

		if self.hover.node.is_some() {
			self.hover.delay_t = (self.hover.delay_t + dt as f64).min(delay);
			if self.hover.delay_t >= delay {
				self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			}
		} else {
			self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			if self.hover.highlight_t < 0.01 {
				self.hover.highlight_t = 0.0;
				self.hover.prev_node = None;
				self.hover.prev_neighbors.clear();
			}
		}
	}

	/// Scales and centres the view so every node fits with `padding` pixels
	/// to spare.
	pub fn zoom_to_fit(&mut self, padding: f64) {
		let mut bounds: Option<(f64, f64, f64, f64)> = None;
		self.graph.visit_nodes(|node| {
			let (x, y, r) = (node.x() as f64, node.y() as f64, node.data.user_data.radius);
			bounds = Some(match bounds {
				None => (x - r, y - r, x + r, y + r),
				Some((x0, y0, x1, y1)) => (x0.min(x - r), y0.min(y - r), x1.max(x + r), y1.max(y + r)),
			});
		});
		let Some((x0, y0, x1, y1)) = bounds else {
			return;
		};

		let (avail_w, avail_h) = (
			(self.width - 2.0 * padding).max(1.0),
			(self.height - 2.0 * padding).max(1.0),
		);
		let (bw, bh) = ((x1 - x0).max(1e-3), (y1 - y0).max(1e-3));
		let k = (avail_w / bw).min(avail_h / bh).clamp(0.1, 10.0);
		let (cx, cy) = ((x0 + x1) / 2.0, (y0 + y1) / 2.0);
		self.transform = ViewTransform {
			x: self.width / 2.0 - cx * k,
			y: self.height / 2.0 - cy * k,
			k,
		};
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

fn parameters(settings: &ForceSettings) -> SimulationParameters {
	SimulationParameters {
		force_charge: settings.charge,
		force_spring: settings.spring,
		force_max: 100.0,
		node_speed: 3000.0,
		damping_factor: settings.damping,
	}
}
