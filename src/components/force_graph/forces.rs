//! Centering, link-length and collision passes run after each engine step.

use super::types::ForceSettings;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Body {
	pub x: f32,
	pub y: f32,
	pub radius: f64,
	pub anchored: bool,
}

const LINK_STRENGTH: f64 = 0.1;
const COLLIDE_STRENGTH: f64 = 0.7;

/// Applies the optional forces in `settings` to `bodies` in place.
pub fn apply(bodies: &mut [Body], edges: &[(usize, usize)], settings: &ForceSettings) {
	if let Some(rest) = settings.link_distance {
		for &(a, b) in edges {
			let (Some(&pa), Some(&pb)) = (bodies.get(a), bodies.get(b)) else {
				continue;
			};
			let (dx, dy) = ((pb.x - pa.x) as f64, (pb.y - pa.y) as f64);
			let dist = (dx * dx + dy * dy).sqrt();
			if dist < 1e-6 {
				continue;
			}
			let shift = (dist - rest) / dist * LINK_STRENGTH * 0.5;
			nudge(bodies, a, dx * shift, dy * shift);
			nudge(bodies, b, -dx * shift, -dy * shift);
		}
	}

	if let Some(collide) = settings.collide {
		for i in 0..bodies.len() {
			for j in i + 1..bodies.len() {
				let (pa, pb) = (bodies[i], bodies[j]);
				let (dx, dy) = ((pb.x - pa.x) as f64, (pb.y - pa.y) as f64);
				let dist = (dx * dx + dy * dy).sqrt();
				let min = (pa.radius + pb.radius) * collide;
				if dist >= min || dist < 1e-6 {
					continue;
				}
				let shift = (min - dist) / dist * COLLIDE_STRENGTH * 0.5;
				nudge(bodies, i, -dx * shift, -dy * shift);
				nudge(bodies, j, dx * shift, dy * shift);
			}
		}
	}

	if let Some(strength) = settings.center {
		let free = bodies.iter().filter(|b| !b.anchored).count();
		if free > 0 {
			let (sx, sy) = bodies
				.iter()
				.filter(|b| !b.anchored)
				.fold((0.0, 0.0), |(sx, sy), b| (sx + b.x as f64, sy + b.y as f64));
			let (cx, cy) = (sx / free as f64, sy / free as f64);
			for i in 0..bodies.len() {
				nudge(bodies, i, -cx * strength, -cy * strength);
			}
		}
	}
}

fn nudge(bodies: &mut [Body], i: usize, dx: f64, dy: f64) {
	if let Some(body) = bodies.get_mut(i).filter(|b| !b.anchored) {
		body.x += dx as f32;
		body.y += dy as f32;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn body(x: f32, y: f32) -> Body {
		Body {
			x,
			y,
			radius: 1.0,
			anchored: false,
		}
	}

	fn dist(a: Body, b: Body) -> f64 {
		(((b.x - a.x) as f64).powi(2) + ((b.y - a.y) as f64).powi(2)).sqrt()
	}

	#[test]
	fn no_optional_forces_is_noop() {
		let mut bodies = vec![body(1.0, 2.0), body(3.0, 4.0)];
		let before = bodies.clone();
		apply(&mut bodies, &[(0, 1)], &ForceSettings::default());
		assert_eq!(bodies, before);
	}

	#[test]
	fn links_move_towards_rest_length() {
		let settings = ForceSettings {
			link_distance: Some(30.0),
			..Default::default()
		};
		let mut bodies = vec![body(0.0, 0.0), body(100.0, 0.0)];
		apply(&mut bodies, &[(0, 1)], &settings);
		let d = dist(bodies[0], bodies[1]);
		assert!(d < 100.0 && d > 30.0);
	}

	#[test]
	fn collisions_push_apart() {
		let settings = ForceSettings {
			collide: Some(2.0),
			..Default::default()
		};
		let mut bodies = vec![body(0.0, 0.0), body(1.0, 0.0)];
		apply(&mut bodies, &[], &settings);
		assert!(dist(bodies[0], bodies[1]) > 1.0);
	}

	#[test]
	fn centering_moves_centroid_to_origin() {
		let settings = ForceSettings {
			center: Some(1.0),
			..Default::default()
		};
		let mut bodies = vec![body(10.0, 10.0), body(30.0, 10.0)];
		apply(&mut bodies, &[], &settings);
		assert!((bodies[0].x + 10.0).abs() < 1e-4);
		assert!((bodies[1].x - 10.0).abs() < 1e-4);
		assert!(bodies[0].y.abs() < 1e-4);
	}

	#[test]
	fn anchored_bodies_stay_put() {
		let settings = ForceSettings {
			link_distance: Some(10.0),
			center: Some(1.0),
			..Default::default()
		};
		let mut bodies = vec![
			Body {
				anchored: true,
				..body(50.0, 0.0)
			},
			body(0.0, 0.0),
		];
		apply(&mut bodies, &[(0, 1)], &settings);
		assert_eq!((bodies[0].x, bodies[0].y), (50.0, 0.0));
	}
}
