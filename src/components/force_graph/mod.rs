//! Force-directed graph visualization component.
//!
//! Turns a JSON graph document into an interactive node-link diagram on an
//! HTML canvas:
//! - Physics-based positioning: many-body repulsion, weighted link springs,
//!   and a centering force, cooled by a decaying energy value
//! - Drag-to-pin: a dragged node is held at the pointer while the rest of
//!   the layout redistributes around it
//! - Hover highlighting: the node grows and its incident links take a
//!   highlight stroke, animated over a configured transition
//!
//! # Example
//!
//! ```ignore
//! use force_viz::{ForceGraphCanvas, GraphDocument};
//!
//! let doc: GraphDocument = serde_json::from_str(
//!     r#"{ "nodes": [{ "name": "A", "group": 1 }, { "name": "B", "group": 1 }],
//!          "links": [{ "source": 0, "target": 1, "value": 2 }] }"#,
//! )?;
//!
//! view! { <ForceGraphCanvas data=doc.into() fullscreen=true /> }
//! ```

pub mod adjacency;
mod component;
pub mod config;
pub mod graph;
pub mod interaction;
mod render;
pub mod simulation;
pub mod state;
pub mod theme;
pub mod types;

pub use component::ForceGraphCanvas;
pub use graph::{Graph, GraphError};
pub use state::GraphSession;
pub use types::{DocLink, DocNode, GraphDocument};
