use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::ForceGraphState;
use super::types::CanvasStyle;

const GRID_SPACING: f64 = 20.0;

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &ForceGraphState, style: &CanvasStyle, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(&style.background);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	if style.grid {
		draw_grid(state, ctx);
	}
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, style, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_grid(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str("rgba(200, 200, 200, 0.1)");
	ctx.set_line_width(1.0);
	let mut x = 0.0;
	while x <= state.width {
		ctx.begin_path();
		ctx.move_to(x, 0.0);
		ctx.line_to(x, state.height);
		ctx.stroke();
		x += GRID_SPACING;
	}
	let mut y = 0.0;
	while y <= state.height {
		ctx.begin_path();
		ctx.move_to(0.0, y);
		ctx.line_to(state.width, y);
		ctx.stroke();
		y += GRID_SPACING;
	}
}

fn draw_edges(state: &ForceGraphState, style: &CanvasStyle, ctx: &CanvasRenderingContext2d) {
	let width = style.link_width / state.transform.k;
	let (has_highlight, t) = (
		state.has_active_highlight(),
		ease_out_cubic(state.hover.highlight_t),
	);
	ctx.set_stroke_style_str(&style.link_color);

	state.graph.visit_edges(|n1, n2, _| {
		let is_highlighted = state.is_highlighted(n1.index()) && state.is_highlighted(n2.index());

		// t=0: every edge at full alpha; t=1: highlighted edges thicken, others fade
		let (alpha, line_width) = match (has_highlight, is_highlighted) {
			(false, _) => (1.0, width),
			(true, true) => (1.0, width * (1.0 + t)),
			(true, false) => (1.0 - 0.75 * t, width),
		};

		ctx.set_global_alpha(alpha);
		ctx.set_line_width(line_width);
		ctx.begin_path();
		ctx.move_to(n1.x() as f64, n1.y() as f64);
		ctx.line_to(n2.x() as f64, n2.y() as f64);
		ctx.stroke();
	});
	ctx.set_global_alpha(1.0);
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let (has_highlight, t, k) = (
		state.has_active_highlight(),
		ease_out_cubic(state.hover.highlight_t),
		state.transform.k,
	);

	state.graph.visit_nodes(|node| {
		let idx = node.index();
		if has_highlight && state.is_highlighted(idx) {
			return;
		}
		let info = &node.data.user_data;
		let (x, y) = (node.x() as f64, node.y() as f64);
		let (alpha, radius) = (1.0 - 0.7 * t, info.radius * (1.0 - 0.15 * t));

		ctx.set_global_alpha(alpha);
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&info.color);
		ctx.fill();
		ctx.set_global_alpha(1.0);
	});

	if !has_highlight {
		return;
	}

	state.graph.visit_nodes(|node| {
		let idx = node.index();
		if !state.is_highlighted(idx) {
			return;
		}
		let info = &node.data.user_data;
		let (x, y) = (node.x() as f64, node.y() as f64);
		let is_hovered = state.is_hovered(idx);
		let is_neighbor =
			state.hover.neighbors.contains(&idx) || state.hover.prev_neighbors.contains(&idx);

		let (radius, glow_radius) = if is_hovered {
			(info.radius * (1.0 + 0.35 * t), info.radius * (1.8 + 1.2 * t))
		} else if is_neighbor {
			(info.radius * (1.0 + 0.2 * t), info.radius * (1.4 + 0.6 * t))
		} else {
			(info.radius, 0.0)
		};

		if glow_radius > 0.0 && t > 0.01 {
			if let Ok(gradient) = ctx.create_radial_gradient(x, y, radius * 0.3, x, y, glow_radius) {
				let alpha = if is_hovered { 0.35 * t } else { 0.2 * t };
				let _ = gradient.add_color_stop(0.0, &format!("rgba(120, 120, 140, {})", alpha));
				let _ = gradient.add_color_stop(0.6, &format!("rgba(160, 170, 200, {})", alpha * 0.3));
				let _ = gradient.add_color_stop(1.0, "rgba(255, 255, 255, 0)");
				ctx.begin_path();
				let _ = ctx.arc(x, y, glow_radius, 0.0, 2.0 * PI);
				#[allow(deprecated)]
				ctx.set_fill_style(&gradient);
				ctx.fill();
			}
		}

		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&info.color);
		ctx.fill();

		if is_hovered && t > 0.01 {
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius + 2.0 / k, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(&format!("rgba(60, 60, 60, {})", 0.7 * t));
			ctx.set_line_width(1.5 / k);
			ctx.stroke();
		}
	});
}
