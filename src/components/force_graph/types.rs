use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: String,
	pub color: String,
	/// Size weight; the drawn radius grows with its square root.
	pub val: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphLink {
	pub source: String,
	pub target: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}

/// Simulation forces layered on top of the `force_graph` engine.
#[derive(Clone, Debug, PartialEq)]
pub struct ForceSettings {
	pub charge: f32,
	pub spring: f32,
	pub damping: f32,
	/// Rest length links are pulled towards.
	pub link_distance: Option<f64>,
	/// Strength of the pull of the centroid towards the origin.
	pub center: Option<f64>,
	/// Collision radius per node is `sqrt(val) * collide`.
	pub collide: Option<f64>,
	/// Ticks after which the simulation stops.
	pub cooldown_ticks: u32,
}

impl Default for ForceSettings {
	fn default() -> Self {
		Self {
			charge: 150.0,
			spring: 0.05,
			damping: 0.9,
			link_distance: None,
			center: None,
			collide: None,
			cooldown_ticks: 300,
		}
	}
}

/// Remote control for a mounted [`ForceGraphCanvas`](super::ForceGraphCanvas).
#[derive(Clone, Copy, Debug)]
pub struct ForceGraphHandle {
	pub(super) forces: RwSignal<ForceSettings>,
	pub(super) reheat: RwSignal<u64>,
	pub(super) fit: RwSignal<Option<f64>>,
}

impl ForceGraphHandle {
	pub fn new(forces: ForceSettings) -> Self {
		Self {
			forces: RwSignal::new(forces),
			reheat: RwSignal::new(0),
			fit: RwSignal::new(None),
		}
	}

	pub fn configure(&self, f: impl FnOnce(&mut ForceSettings)) {
		self.forces.update(f);
	}

	/// Restarts the simulation cooldown.
	pub fn reheat(&self) {
		self.reheat.update(|n| *n += 1);
	}

	pub fn zoom_to_fit(&self, padding: f64) {
		self.fit.set(Some(padding));
	}
}

impl Default for ForceGraphHandle {
	fn default() -> Self {
		Self::new(ForceSettings::default())
	}
}

/// Presentation options for the canvas.
#[derive(Clone, Debug)]
pub struct CanvasStyle {
	pub background: String,
	pub link_color: String,
	pub link_width: f64,
	pub node_rel_size: f64,
	pub grid: bool,
}
