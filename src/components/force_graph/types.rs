//! Input document schema for the force graph component.
//!
//! Matches the JSON layout the host serves:
//! `{ "nodes": [{ "name", "group", "url"? }], "links": [{ "source", "target", "value" }] }`.

use serde::Deserialize;

/// A node entry in the input document.
#[derive(Clone, Debug, Deserialize)]
pub struct DocNode {
	/// Display name, also used for the hover tooltip.
	pub name: String,
	/// Small integer used for categorical coloring.
	pub group: u32,
	/// Optional external link opened when the node is clicked.
	#[serde(default)]
	pub url: Option<String>,
}

/// A link entry in the input document.
///
/// `source` and `target` are zero-based indices into the `nodes` array in
/// document order. They become node identifiers unchanged.
#[derive(Clone, Debug, Deserialize)]
pub struct DocLink {
	pub source: usize,
	pub target: usize,
	/// Link weight. Must be a positive finite number; validated at load.
	pub value: f64,
}

/// Complete input document: nodes and links.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GraphDocument {
	pub nodes: Vec<DocNode>,
	pub links: Vec<DocLink>,
}
