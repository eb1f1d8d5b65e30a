//! Categorical colour palette shared by every graph view.

/// The ten-hue categorical palette used for clusters and attribute values.
pub const COLORS: &[&str] = &[
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

/// Returns `count` colours, cycling through [`COLORS`] when more are requested.
pub fn generate_palette(count: usize) -> Vec<&'static str> {
	COLORS.iter().copied().cycle().take(count).collect()
}

/// Colour for the `index`-th category.
pub fn color_at(index: usize) -> &'static str {
	COLORS[index % COLORS.len()]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn palette_is_deterministic() {
		assert_eq!(generate_palette(5), generate_palette(5));
		assert_eq!(generate_palette(5)[0], "#1f77b4");
	}

	#[test]
	fn empty_request_yields_no_colors() {
		assert!(generate_palette(0).is_empty());
	}

	#[test]
	fn palette_repeats_past_base_size() {
		let colors = generate_palette(23);
		assert_eq!(colors.len(), 23);
		assert_eq!(colors[10], colors[0]);
		assert_eq!(colors[22], color_at(22));
	}
}
