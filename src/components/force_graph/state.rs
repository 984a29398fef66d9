//! The per-visualization session object.
//!
//! Owns the graph, the simulation engine, the adjacency index, interaction
//! state, and configuration for one loaded document. Constructed once per
//! load; replaced wholesale when the host re-issues a load. Every event
//! handler and the animation loop operate on this object through named
//! methods, so ownership of mutated state stays auditable: the engine is the
//! only writer of positions and velocities, the drag controller the only
//! writer of pins.

use super::adjacency::AdjacencyIndex;
use super::config::{PhysicsConfig, VisualConfig};
use super::graph::{Graph, GraphError, NodeId};
use super::interaction::{DragController, HoverHighlight};
use super::simulation::Simulation;
use super::theme::Theme;
use super::types::GraphDocument;

/// Everything one visualization session owns.
pub struct GraphSession {
	pub graph: Graph,
	pub adjacency: AdjacencyIndex,
	pub sim: Simulation,
	pub drag: DragController,
	pub hover: HoverHighlight,
	pub visual: VisualConfig,
	pub physics: PhysicsConfig,
	pub theme: Theme,
	pub width: f64,
	pub height: f64,
}

impl GraphSession {
	/// Build a session from a parsed document and surface dimensions.
	/// Fails on any validation error; no partial session is produced.
	pub fn new(doc: &GraphDocument, width: f64, height: f64) -> Result<Self, GraphError> {
		let visual = VisualConfig::for_surface(width, height);
		let physics = PhysicsConfig::default();
		let graph = Graph::from_document(doc, visual.link_base_distance, width, height)?;
		let adjacency = AdjacencyIndex::build(&graph);
		let hover = HoverHighlight::new(graph.node_count(), graph.links.len());
		let sim = Simulation::new(&physics, width, height);

		Ok(Self {
			graph,
			adjacency,
			sim,
			drag: DragController::default(),
			hover,
			visual,
			physics,
			theme: Theme::default(),
			width,
			height,
		})
	}

	/// Swap in a new document atomically: the existing graph stays in place
	/// unless the whole replacement validates. Adjacency and interaction
	/// state are rebuilt, the engine restarts hot.
	pub fn replace_document(&mut self, doc: &GraphDocument) -> Result<(), GraphError> {
		let graph =
			Graph::from_document(doc, self.visual.link_base_distance, self.width, self.height)?;
		self.adjacency = AdjacencyIndex::build(&graph);
		self.hover = HoverHighlight::new(graph.node_count(), graph.links.len());
		self.drag = DragController::default();
		self.graph = graph;
		self.sim = Simulation::new(&self.physics, self.width, self.height);
		Ok(())
	}

	/// One cooperative pass: a simulation step (when the engine is active)
	/// and a hover animation tick. Returns true when anything visible
	/// changed, i.e. the frame needs redrawing.
	pub fn tick(&mut self, dt: f64) -> bool {
		let stepped = self.sim.step(&mut self.graph);
		let animating = self.hover.animating();
		self.hover.tick(dt, self.visual.transition_duration);
		stepped || animating
	}

	/// Topmost node whose hit radius contains the point, if any.
	pub fn node_at_position(&self, x: f64, y: f64) -> Option<NodeId> {
		let hit = self.visual.hit_radius;
		let mut found = None;
		for (id, body) in self.graph.bodies.iter().enumerate() {
			let (dx, dy) = (body.x - x, body.y - y);
			if (dx * dx + dy * dy).sqrt() < hit {
				found = Some(id);
			}
		}
		found
	}

	pub fn begin_drag(&mut self, node: NodeId) {
		let wake = self.physics.drag_wake_target;
		self.drag.start(node, &mut self.graph, &mut self.sim, wake);
		// The pointer is on the grabbed node and keeps tracking it for the
		// rest of the gesture, so the highlight follows it too.
		self.hover.set_hover(Some(node), &self.adjacency);
	}

	pub fn drag_to(&mut self, x: f64, y: f64) {
		self.drag.drag_to(&mut self.graph, x, y);
	}

	pub fn end_drag(&mut self) {
		self.drag.end(&mut self.graph, &mut self.sim);
	}

	pub fn set_hover(&mut self, node: Option<NodeId>) {
		self.hover.set_hover(node, &self.adjacency);
	}

	pub fn node_url(&self, node: NodeId) -> Option<&str> {
		self.graph.nodes[node].url.as_deref()
	}

	/// Adopt new surface dimensions: visual sizes are re-derived, link rest
	/// distances recomputed from the new base, and the centering target
	/// moved.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.visual = VisualConfig::for_surface(width, height);
		self.sim
			.set_link_distances(&mut self.graph, self.visual.link_base_distance);
		if let Some(center) = &mut self.sim.center {
			center.x = width / 2.0;
			center.y = height / 2.0;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::types::{DocLink, DocNode};

	fn two_node_doc() -> GraphDocument {
		GraphDocument {
			nodes: vec![
				DocNode {
					name: "A".into(),
					group: 1,
					url: None,
				},
				DocNode {
					name: "B".into(),
					group: 1,
					url: Some("https://example.com".into()),
				},
			],
			links: vec![DocLink {
				source: 0,
				target: 1,
				value: 2.0,
			}],
		}
	}

	#[test]
	fn end_to_end_two_node_document() {
		let mut session = GraphSession::new(&two_node_doc(), 600.0, 600.0).unwrap();
		assert_eq!(session.graph.node_count(), 2);
		assert_eq!(session.graph.links.len(), 1);
		assert_eq!(session.graph.nodes[0].id, 0);
		assert_eq!(session.graph.nodes[1].id, 1);

		// base distance 0.05 * 600 = 30, value 2 -> rest 15.
		let rest = session.graph.links[0].distance;
		assert_eq!(rest, 15.0);

		let separation = |s: &GraphSession| {
			let (a, b) = (&s.graph.bodies[0], &s.graph.bodies[1]);
			((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
		};

		let mut ticks = 0;
		while session.tick(0.016) {
			ticks += 1;
			assert!(ticks < 400, "session must converge");
		}

		let settled = separation(&session);
		assert!(
			(settled - rest).abs() < rest * 0.5,
			"separation {settled} should settle near rest {rest}"
		);
	}

	#[test]
	fn hit_testing_uses_the_configured_radius() {
		let mut session = GraphSession::new(&two_node_doc(), 600.0, 600.0).unwrap();
		session.graph.bodies[0].x = 100.0;
		session.graph.bodies[0].y = 100.0;
		session.graph.bodies[1].x = 500.0;
		session.graph.bodies[1].y = 500.0;

		let hit = session.visual.hit_radius;
		assert_eq!(session.node_at_position(100.0, 100.0), Some(0));
		assert_eq!(
			session.node_at_position(100.0 + hit - 0.5, 100.0),
			Some(0)
		);
		assert_eq!(session.node_at_position(300.0, 300.0), None);
		assert_eq!(session.node_at_position(500.0, 501.0), Some(1));
	}

	#[test]
	fn replace_document_is_atomic() {
		let mut session = GraphSession::new(&two_node_doc(), 600.0, 600.0).unwrap();

		// Invalid replacement: old graph must survive untouched.
		let bad = GraphDocument {
			nodes: vec![DocNode {
				name: "solo".into(),
				group: 0,
				url: None,
			}],
			links: vec![DocLink {
				source: 0,
				target: 9,
				value: 1.0,
			}],
		};
		assert!(session.replace_document(&bad).is_err());
		assert_eq!(session.graph.node_count(), 2);

		// Valid replacement swaps everything.
		let good = GraphDocument {
			nodes: vec![DocNode {
				name: "solo".into(),
				group: 0,
				url: None,
			}],
			links: vec![],
		};
		session.replace_document(&good).unwrap();
		assert_eq!(session.graph.node_count(), 1);
		assert!(session.sim.active(), "engine restarts hot");
	}

	#[test]
	fn resize_rescales_link_distances() {
		let mut session = GraphSession::new(&two_node_doc(), 600.0, 600.0).unwrap();
		assert_eq!(session.graph.links[0].distance, 15.0);

		session.resize(1200.0, 1200.0);
		// base distance 0.05 * 1200 = 60, value 2 -> rest 30.
		assert_eq!(session.graph.links[0].distance, 30.0);
		let center = session.sim.center.as_ref().unwrap();
		assert_eq!((center.x, center.y), (600.0, 600.0));
	}

	#[test]
	fn starting_a_drag_moves_the_hover_to_the_grabbed_node() {
		let mut session = GraphSession::new(&two_node_doc(), 600.0, 600.0).unwrap();

		session.set_hover(Some(1));
		session.begin_drag(0);
		assert_eq!(session.hover.hovered(), Some(0));

		session.end_drag();
		assert_eq!(session.hover.hovered(), Some(0));
	}

	#[test]
	fn drag_and_hover_flow_through_the_session() {
		let mut session = GraphSession::new(&two_node_doc(), 600.0, 600.0).unwrap();

		session.begin_drag(0);
		assert!(session.graph.bodies[0].pinned());
		session.drag_to(50.0, 50.0);
		assert_eq!(session.graph.bodies[0].pin, Some((50.0, 50.0)));
		session.end_drag();
		assert!(!session.graph.bodies[0].pinned());

		session.set_hover(Some(1));
		session.tick(0.3);
		assert_eq!(session.hover.node_progress(1), 1.0);
		assert_eq!(session.node_url(1), Some("https://example.com"));
	}
}
