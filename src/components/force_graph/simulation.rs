//! Force simulation engine.
//!
//! Owns the energy ("alpha") cooling state and advances node bodies one
//! discrete step at a time under three composable forces: many-body
//! repulsion, link springs, and a centering correction. Each force scales
//! with the current energy, which decays geometrically toward an adjustable
//! target; once energy falls below the configured floor the step becomes a
//! no-op and the engine stays idle until [`Simulation::raise_energy`] lifts
//! the target again.
//!
//! Pinned bodies still exert forces on their neighbors but are excluded from
//! integration: their position is clamped to the pin every step.

use super::config::PhysicsConfig;
use super::graph::{Graph, NodeBody};

/// Floor on pairwise distance, keeps the repulsion term finite.
const MIN_DISTANCE: f64 = 1.0;

/// Spring force pulling each link's endpoints toward its rest distance.
#[derive(Clone, Debug)]
pub struct LinkForce {
	pub stiffness: f64,
}

/// Pairwise force between all bodies. Negative strength repels.
#[derive(Clone, Debug)]
pub struct ManyBodyForce {
	pub strength: f64,
}

/// Pulls the centroid of all bodies toward a fixed point.
#[derive(Clone, Debug)]
pub struct CenterForce {
	pub x: f64,
	pub y: f64,
	pub strength: f64,
}

impl ManyBodyForce {
	fn apply(&self, bodies: &mut [NodeBody], alpha: f64) {
		let n = bodies.len();
		for i in 0..n {
			for j in (i + 1)..n {
				let mut dx = bodies[j].x - bodies[i].x;
				let dy = bodies[j].y - bodies[i].y;
				if dx == 0.0 && dy == 0.0 {
					dx = 1e-6;
				}
				let d2 = (dx * dx + dy * dy).max(MIN_DISTANCE * MIN_DISTANCE);
				let f = self.strength * alpha / d2;
				bodies[i].vx += dx * f;
				bodies[i].vy += dy * f;
				bodies[j].vx -= dx * f;
				bodies[j].vy -= dy * f;
			}
		}
	}
}

impl LinkForce {
	fn apply(&self, graph: &mut Graph, alpha: f64) {
		let Graph { links, bodies, .. } = graph;
		for link in links.iter() {
			let (s, t) = (link.source, link.target);
			if s == t {
				continue;
			}
			// Measure against post-velocity positions (semi-implicit Euler).
			let mut dx = bodies[t].x + bodies[t].vx - bodies[s].x - bodies[s].vx;
			let mut dy = bodies[t].y + bodies[t].vy - bodies[s].y - bodies[s].vy;
			if dx == 0.0 && dy == 0.0 {
				dx = 1e-6;
				dy = 1e-6;
			}
			let dist = (dx * dx + dy * dy).sqrt();
			let f = (dist - link.distance) / dist * self.stiffness * alpha * 0.5;
			dx *= f;
			dy *= f;
			bodies[t].vx -= dx;
			bodies[t].vy -= dy;
			bodies[s].vx += dx;
			bodies[s].vy += dy;
		}
	}
}

impl CenterForce {
	fn apply(&self, bodies: &mut [NodeBody]) {
		if bodies.is_empty() {
			return;
		}
		let n = bodies.len() as f64;
		let (mut sx, mut sy) = (0.0, 0.0);
		for body in bodies.iter() {
			sx += body.x;
			sy += body.y;
		}
		let ox = (sx / n - self.x) * self.strength;
		let oy = (sy / n - self.y) * self.strength;
		for body in bodies.iter_mut() {
			body.x -= ox;
			body.y -= oy;
		}
	}
}

/// The engine: cooling state plus the configured force set.
///
/// Each force is individually removable; a distance update requested while
/// the link force is absent is reported and skipped rather than failing.
pub struct Simulation {
	alpha: f64,
	alpha_target: f64,
	alpha_min: f64,
	alpha_decay: f64,
	velocity_decay: f64,
	pub link: Option<LinkForce>,
	pub charge: Option<ManyBodyForce>,
	pub center: Option<CenterForce>,
}

impl Simulation {
	/// Engine with the standard three forces centered on the surface.
	pub fn new(physics: &PhysicsConfig, width: f64, height: f64) -> Self {
		Self {
			alpha: 1.0,
			alpha_target: 0.0,
			alpha_min: physics.alpha_min,
			alpha_decay: physics.alpha_decay,
			velocity_decay: physics.velocity_decay,
			link: Some(LinkForce {
				stiffness: physics.spring_stiffness,
			}),
			charge: Some(ManyBodyForce {
				strength: physics.repulsion_strength,
			}),
			center: Some(CenterForce {
				x: width / 2.0,
				y: height / 2.0,
				strength: physics.centering_strength,
			}),
		}
	}

	/// Current energy value.
	pub fn alpha(&self) -> f64 {
		self.alpha
	}

	/// Whether the engine still schedules steps.
	pub fn active(&self) -> bool {
		self.alpha >= self.alpha_min || self.alpha_target >= self.alpha_min
	}

	/// Move the energy target. The only way interaction code perturbs the
	/// cooling state: a target above the floor wakes an idle engine, a zero
	/// target lets it re-converge.
	pub fn raise_energy(&mut self, target: f64) {
		self.alpha_target = target.clamp(0.0, 1.0);
	}

	/// Recompute every link's rest distance from its weight.
	///
	/// Skipped with a warning when the link force has been removed; the
	/// simulation keeps running with the distances it has.
	pub fn set_link_distances(&self, graph: &mut Graph, base_distance: f64) {
		if self.link.is_none() {
			log::warn!("link force not configured, keeping existing link distances");
			return;
		}
		for link in &mut graph.links {
			link.distance = base_distance / link.weight;
		}
	}

	/// Advance the system one step. Returns false without touching the graph
	/// when the engine is idle.
	pub fn step(&mut self, graph: &mut Graph) -> bool {
		if !self.active() {
			return false;
		}
		self.alpha += (self.alpha_target - self.alpha) * self.alpha_decay;
		let alpha = self.alpha;

		if let Some(charge) = &self.charge {
			charge.apply(&mut graph.bodies, alpha);
		}
		if let Some(link) = &self.link {
			link.apply(graph, alpha);
		}
		if let Some(center) = &self.center {
			center.apply(&mut graph.bodies);
		}

		for body in &mut graph.bodies {
			if let Some((px, py)) = body.pin {
				body.x = px;
				body.y = py;
				body.vx = 0.0;
				body.vy = 0.0;
				continue;
			}
			body.vx *= 1.0 - self.velocity_decay;
			body.vy *= 1.0 - self.velocity_decay;
			body.x += body.vx;
			body.y += body.vy;
		}
		true
	}
}
