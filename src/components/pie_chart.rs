//! SVG pie chart over an ordered list of aggregate entries.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use leptos::prelude::*;

use crate::graph::aggregate::AggregateEntry;

#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
	pub path: String,
	pub color: String,
	pub title: String,
	pub label: String,
	pub label_x: f64,
	pub label_y: f64,
}

fn point(radius: f64, angle: f64) -> (f64, f64) {
	(radius * angle.cos(), radius * angle.sin())
}

fn ring(radius: f64, clockwise: bool) -> String {
	let sweep = u8::from(clockwise);
	format!(
		"M {r} 0 A {r} {r} 0 1 {sweep} {n} 0 A {r} {r} 0 1 {sweep} {r} 0 Z",
		r = radius,
		n = -radius,
	)
}

/// Lays out `entries` clockwise from twelve o'clock, centred on the origin.
pub fn slices(entries: &[AggregateEntry], outer: f64, inner: f64) -> Vec<Slice> {
	let total: f64 = entries.iter().map(|e| e.value).sum();
	if total <= 0.0 {
		return Vec::new();
	}

	let mut start = -FRAC_PI_2;
	entries
		.iter()
		.map(|entry| {
			let sweep = entry.value / total * TAU;
			let end = start + sweep;
			let path = if sweep >= TAU - 1e-9 {
				if inner > 0.0 {
					format!("{} {}", ring(outer, true), ring(inner, false))
				} else {
					ring(outer, true)
				}
			} else {
				let large = u8::from(sweep > PI);
				let ((ox0, oy0), (ox1, oy1)) = (point(outer, start), point(outer, end));
				if inner > 0.0 {
					let ((ix0, iy0), (ix1, iy1)) = (point(inner, start), point(inner, end));
					format!(
						"M {ox0} {oy0} A {outer} {outer} 0 {large} 1 {ox1} {oy1} L {ix1} {iy1} A {inner} {inner} 0 {large} 0 {ix0} {iy0} Z"
					)
				} else {
					format!("M {ox0} {oy0} A {outer} {outer} 0 {large} 1 {ox1} {oy1} L 0 0 Z")
				}
			};
			let label_radius = if inner > 0.0 { (outer + inner) / 2.0 } else { outer * 0.6 };
			let (label_x, label_y) = point(label_radius, start + sweep / 2.0);
			start = end;

			Slice {
				path,
				color: entry.color.clone(),
				title: format!("{}: {:.1}%", entry.label, entry.value),
				label: format!("{:.0}%", entry.value / total * 100.0),
				label_x,
				label_y,
			}
		})
		.collect()
}

#[component]
pub fn PieChart(
	#[prop(into)] data: Signal<Vec<AggregateEntry>>,
	#[prop(default = 60.0)] outer_radius: f64,
	#[prop(default = 0.0)] inner_radius: f64,
	#[prop(default = false)] show_labels: bool,
) -> impl IntoView {
	let view_box = format!(
		"{} {} {} {}",
		-outer_radius,
		-outer_radius,
		2.0 * outer_radius,
		2.0 * outer_radius
	);

	view! {
		<svg class="pie-chart" viewBox=view_box width="100%" height="100%">
			{move || {
				slices(&data.get(), outer_radius, inner_radius)
					.into_iter()
					.map(|slice| {
						view! {
							<g>
								<path
									d=slice.path
									fill=slice.color
									fill-rule="evenodd"
									stroke="#ffffff"
									stroke-width="1"
								>
									<title>{slice.title}</title>
								</path>
								{show_labels
									.then(|| {
										view! {
											<text
												x=format!("{:.2}", slice.label_x)
												y=format!("{:.2}", slice.label_y)
												text-anchor="middle"
												dominant-baseline="central"
												font-size="10"
												fill="#ffffff"
											>
												{slice.label}
											</text>
										}
									})}
							</g>
						}
					})
					.collect_view()
			}}
		</svg>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn entry(label: &str, value: f64) -> AggregateEntry {
		AggregateEntry {
			label: label.into(),
			value,
			color: "#1f77b4".into(),
		}
	}

	#[test]
	fn empty_data_draws_nothing() {
		assert!(slices(&[], 60.0, 0.0).is_empty());
	}

	#[test]
	fn single_entry_is_full_disc() {
		let pie = slices(&[entry("Cluster 0", 100.0)], 60.0, 0.0);
		assert_eq!(pie.len(), 1);
		assert_eq!(pie[0].label, "100%");
		assert!(!pie[0].path.contains("L 0 0"));

		let donut = slices(&[entry("HR", 100.0)], 40.0, 20.0);
		assert_eq!(donut[0].path.matches('M').count(), 2);
	}

	#[test]
	fn labels_show_rounded_shares() {
		let pie = slices(
			&[entry("a", 20.0), entry("b", 20.0), entry("c", 60.0)],
			60.0,
			0.0,
		);
		let labels: Vec<&str> = pie.iter().map(|s| s.label.as_str()).collect();
		assert_eq!(labels, ["20%", "20%", "60%"]);
		assert_eq!(pie[2].title, "c: 60.0%");
		assert!(pie[2].path.contains(" 0 1 1 "));
		assert!(pie[0].path.contains(" 0 0 1 "));
		// first slice sits right of twelve o'clock
		assert!(pie[0].label_x > 0.0 && pie[0].label_y < 0.0);
	}
}
