use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::router::EdgePath;
use super::state::StoryGraphState;
use super::types::StoryNode;

const BACKGROUND: &str = "#f9fafb";
const EDGE_COLOR: &str = "#e5e7eb";
const EDGE_HIGHLIGHT: &str = "#6366f1";
const EDGE_HOVER: &str = "#8b5cf6";
const AUTHOR_COLOR: &str = "#4b5563";
/// Opacity applied to everything outside a non-empty highlight set.
const DIM_NODE_ALPHA: f64 = 0.5;
const DIM_EDGE_ALPHA: f64 = 0.3;

pub fn render(state: &StoryGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);

	ctx.save();
	let (ox, oy) = state.render_offset();
	let scale = state.focus.transform.scale;
	let (cx, cy) = (state.width / 2.0, state.height / 2.0);
	let _ = ctx.translate(ox + cx, oy + cy);
	let _ = ctx.scale(scale, scale);
	let _ = ctx.translate(-cx, -cy);

	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_edges(state: &StoryGraphState, ctx: &CanvasRenderingContext2d) {
	let dimming = !state.highlight.is_empty();
	let hovered = state.pointer.hovered_node();

	for edge in state.routed_edges() {
		let is_highlighted =
			state.highlight.contains(&edge.source) && state.highlight.contains(&edge.target);
		let is_hovered = hovered == Some(edge.source) || hovered == Some(edge.target);

		match edge.path {
			EdgePath::Line { from, to } => {
				let (color, width, alpha) = if is_highlighted {
					(EDGE_HIGHLIGHT, 3.0, 1.0)
				} else if is_hovered {
					(EDGE_HOVER, 2.5, 0.8)
				} else if dimming {
					(EDGE_COLOR, 2.0, DIM_EDGE_ALPHA)
				} else {
					(EDGE_COLOR, 2.0, 1.0)
				};
				ctx.set_global_alpha(alpha);
				ctx.set_stroke_style_str(color);
				ctx.set_line_width(width);
				ctx.begin_path();
				ctx.move_to(from.0, from.1);
				ctx.line_to(to.0, to.1);
				ctx.stroke();
			}
			EdgePath::Cubic { from, c1, c2, to } => {
				// Curved edges take the source story's color.
				let color = state
					.store
					.get(edge.source)
					.map(|n| n.color.clone())
					.unwrap_or_else(|| EDGE_COLOR.to_owned());
				let alpha = if is_highlighted {
					1.0
				} else if dimming {
					DIM_EDGE_ALPHA
				} else {
					0.6
				};
				ctx.set_global_alpha(alpha);
				ctx.set_stroke_style_str(&color);
				ctx.set_line_width(2.0);
				ctx.begin_path();
				ctx.move_to(from.0, from.1);
				ctx.bezier_curve_to(c1.0, c1.1, c2.0, c2.1, to.0, to.1);
				ctx.stroke();

				// Small dots mark the attachment points.
				ctx.set_fill_style_str(&color);
				for point in [from, to] {
					ctx.begin_path();
					let _ = ctx.arc(point.0, point.1, 3.0, 0.0, 2.0 * PI);
					ctx.fill();
				}
			}
		}
	}
	ctx.set_global_alpha(1.0);
}

fn draw_nodes(state: &StoryGraphState, ctx: &CanvasRenderingContext2d) {
	let dimming = !state.highlight.is_empty();

	// Dimmed layer first, highlighted nodes on top of it.
	for node in state.store.nodes() {
		if !state.highlight.contains(&node.id) {
			ctx.set_global_alpha(if dimming { DIM_NODE_ALPHA } else { 1.0 });
			draw_node(state, ctx, node, false);
		}
	}
	ctx.set_global_alpha(1.0);
	for node in state.store.nodes() {
		if state.highlight.contains(&node.id) {
			draw_node(state, ctx, node, true);
		}
	}
}

fn draw_node(
	state: &StoryGraphState,
	ctx: &CanvasRenderingContext2d,
	node: &StoryNode,
	highlighted: bool,
) {
	let (x, y) = state.effective_position(node);
	let hovered = state.pointer.hovered_node() == Some(node.id)
		|| state.pointer.dragged_node() == Some(node.id);
	let radius = if hovered {
		node.size * 1.15 / 2.0
	} else {
		node.size / 2.0
	};

	ctx.begin_path();
	let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
	// Translucent body over a solid border, like the DOM layer this
	// replaces: color + hex alpha suffix.
	let body_alpha = if highlighted || hovered { "40" } else { "20" };
	ctx.set_fill_style_str(&format!("{}{}", node.color, body_alpha));
	ctx.fill();
	ctx.set_stroke_style_str(node.border_color.as_deref().unwrap_or(&node.color));
	ctx.set_line_width(2.0);
	ctx.stroke();

	if highlighted {
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius + 4.0, 0.0, 2.0 * PI);
		ctx.set_stroke_style_str(&node.color);
		ctx.set_line_width(2.0);
		ctx.stroke();
	}

	if node.is_starting_point {
		let _ = ctx.set_line_dash(&js_sys::Array::of2(
			&JsValue::from_f64(4.0),
			&JsValue::from_f64(4.0),
		));
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius + 8.0, 0.0, 2.0 * PI);
		ctx.set_stroke_style_str(&node.color);
		ctx.set_line_width(1.5);
		ctx.stroke();
		let _ = ctx.set_line_dash(&js_sys::Array::new());
	}

	ctx.set_text_align("center");
	ctx.set_fill_style_str(&node.color);
	ctx.set_font("12px sans-serif");
	let _ = ctx.fill_text(&node.title, x, y - 2.0);
	ctx.set_fill_style_str(AUTHOR_COLOR);
	ctx.set_font("10px sans-serif");
	let _ = ctx.fill_text(&node.author, x, y + 12.0);
}
