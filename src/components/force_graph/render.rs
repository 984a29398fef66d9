//! Canvas projection of the simulation state.
//!
//! Runs once per tick: every link is re-drawn from its endpoints' current
//! positions, every node from its current center. Holds no state of its own
//! and writes none back; the session is read-only here.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::GraphSession;
use super::theme::group_color;

/// Renders the complete graph to the canvas.
pub fn render(session: &GraphSession, ctx: &CanvasRenderingContext2d) {
	draw_background(session, ctx);
	draw_links(session, ctx);
	draw_nodes(session, ctx);
	draw_tooltip(session, ctx);
}

fn draw_background(session: &GraphSession, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(&session.theme.background.to_css());
	ctx.fill_rect(0.0, 0.0, session.width, session.height);
}

fn draw_links(session: &GraphSession, ctx: &CanvasRenderingContext2d) {
	let theme = &session.theme;
	for (id, link) in session.graph.links.iter().enumerate() {
		let source = &session.graph.bodies[link.source];
		let target = &session.graph.bodies[link.target];

		let highlight = session.hover.link_progress(id);
		let stroke = theme.link.lerp(theme.link_highlight, highlight);
		ctx.set_stroke_style_str(&stroke.to_css());
		ctx.set_line_width(link.weight.sqrt());

		ctx.begin_path();
		ctx.move_to(source.x, source.y);
		ctx.line_to(target.x, target.y);
		ctx.stroke();
	}
}

fn draw_nodes(session: &GraphSession, ctx: &CanvasRenderingContext2d) {
	let visual = &session.visual;
	for (id, node) in session.graph.nodes.iter().enumerate() {
		let body = &session.graph.bodies[id];
		let radius =
			visual.node_radius * session.hover.radius_multiplier(id, visual.radius_expand);

		ctx.begin_path();
		let _ = ctx.arc(body.x, body.y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&group_color(node.group).to_css());
		ctx.fill();

		ctx.set_stroke_style_str(&session.theme.node_border.to_css());
		ctx.set_line_width(1.5);
		ctx.stroke();
	}
}

fn draw_tooltip(session: &GraphSession, ctx: &CanvasRenderingContext2d) {
	let Some(id) = session.hover.hovered() else {
		return;
	};
	let node = &session.graph.nodes[id];
	let body = &session.graph.bodies[id];
	let expand = session.visual.radius_expand;
	let radius = session.visual.node_radius * session.hover.radius_multiplier(id, expand);

	ctx.set_fill_style_str(&session.theme.label.to_css());
	ctx.set_font("12px sans-serif");
	let label = match node.url {
		Some(_) => format!("{} \u{2197}", node.name),
		None => node.name.clone(),
	};
	let _ = ctx.fill_text(&label, body.x + radius + 6.0, body.y + 4.0);
}
