//! Pointer interaction: drag-to-pin and hover highlighting.
//!
//! The drag controller is a per-gesture state machine over at most one node.
//! Starting a drag wakes the simulation and pins the node at its current
//! simulated position; each move re-pins it at the pointer; ending the drag
//! clears the pin and lets the energy target fall back to zero. Pin state
//! never outlives the gesture.
//!
//! Hover is an independent toggle. Each node and link carries a highlight
//! progress in `[0, 1]` advanced linearly over the configured transition
//! duration, so an enter followed by an exit returns the visuals exactly to
//! baseline. Hover never writes node positions, so it can coexist with a
//! drag on another node.

use super::adjacency::AdjacencyIndex;
use super::graph::{Graph, LinkId, NodeId};
use super::simulation::Simulation;

/// Tracks the node being dragged, if any.
#[derive(Clone, Debug, Default)]
pub struct DragController {
	node: Option<NodeId>,
}

impl DragController {
	pub fn node(&self) -> Option<NodeId> {
		self.node
	}

	pub fn is_dragging(&self) -> bool {
		self.node.is_some()
	}

	/// Begin a gesture on `node`: wake the simulation and freeze the node at
	/// its current simulated position.
	pub fn start(
		&mut self,
		node: NodeId,
		graph: &mut Graph,
		sim: &mut Simulation,
		wake_target: f64,
	) {
		// A stray second press ends the previous gesture first, keeping pin
		// presence 1:1 with the active drag.
		if let Some(previous) = self.node.take() {
			graph.bodies[previous].pin = None;
		}
		let body = &mut graph.bodies[node];
		body.pin = Some((body.x, body.y));
		self.node = Some(node);
		sim.raise_energy(wake_target);
	}

	/// Move the pinned position to the pointer location.
	pub fn drag_to(&mut self, graph: &mut Graph, x: f64, y: f64) {
		if let Some(node) = self.node {
			graph.bodies[node].pin = Some((x, y));
		}
	}

	/// End the gesture: release the pin and let the simulation re-converge.
	pub fn end(&mut self, graph: &mut Graph, sim: &mut Simulation) {
		if let Some(node) = self.node.take() {
			graph.bodies[node].pin = None;
			sim.raise_energy(0.0);
		}
	}
}

/// Animated hover highlight over nodes and their incident links.
pub struct HoverHighlight {
	hovered: Option<NodeId>,
	node_progress: Vec<f64>,
	link_progress: Vec<f64>,
	highlighted_links: Vec<LinkId>,
}

impl HoverHighlight {
	pub fn new(node_count: usize, link_count: usize) -> Self {
		Self {
			hovered: None,
			node_progress: vec![0.0; node_count],
			link_progress: vec![0.0; link_count],
			highlighted_links: Vec::new(),
		}
	}

	pub fn hovered(&self) -> Option<NodeId> {
		self.hovered
	}

	/// Switch the hovered node. Incident links come from the adjacency
	/// index, never from drawn elements.
	pub fn set_hover(&mut self, node: Option<NodeId>, adjacency: &AdjacencyIndex) {
		if self.hovered == node {
			return;
		}
		self.hovered = node;
		self.highlighted_links = match node {
			Some(n) => adjacency.incident(n).to_vec(),
			None => Vec::new(),
		};
	}

	/// Advance all progress values toward their targets.
	pub fn tick(&mut self, dt: f64, transition_duration: f64) {
		let rate = if transition_duration > 0.0 {
			dt / transition_duration
		} else {
			1.0
		};
		for (id, t) in self.node_progress.iter_mut().enumerate() {
			let target = if self.hovered == Some(id) { 1.0 } else { 0.0 };
			*t = move_toward(*t, target, rate);
		}
		for (id, t) in self.link_progress.iter_mut().enumerate() {
			let target = if self.highlighted_links.contains(&id) {
				1.0
			} else {
				0.0
			};
			*t = move_toward(*t, target, rate);
		}
	}

	pub fn node_progress(&self, node: NodeId) -> f64 {
		self.node_progress[node]
	}

	pub fn link_progress(&self, link: LinkId) -> f64 {
		self.link_progress[link]
	}

	/// Drawn radius multiplier for a node under the given expansion factor.
	pub fn radius_multiplier(&self, node: NodeId, expand: f64) -> f64 {
		1.0 + (expand - 1.0) * self.node_progress[node]
	}

	/// True while any node or link is visually off baseline.
	pub fn animating(&self) -> bool {
		self.hovered.is_some()
			|| self.node_progress.iter().any(|&t| t > 0.0)
			|| self.link_progress.iter().any(|&t| t > 0.0)
	}
}

fn move_toward(value: f64, target: f64, rate: f64) -> f64 {
	if value < target {
		(value + rate).min(target)
	} else {
		(value - rate).max(target)
	}
}
