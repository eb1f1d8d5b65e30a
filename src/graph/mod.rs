//! Synthetic graph data: generation, removal and aggregate breakdowns.

pub mod aggregate;
pub mod attributes;
pub mod clustered;
pub mod palette;

/// An undirected link between two node ids.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Link {
	pub source: String,
	pub target: String,
}

impl Link {
	pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
		}
	}

	/// Whether either endpoint is `id`.
	pub fn touches(&self, id: &str) -> bool {
		self.source == id || self.target == id
	}
}
