//! force-viz: interactive force-directed node-link diagrams.
//!
//! Fetches a JSON graph document from a host-supplied URL and renders it as
//! a physics-laid-out node-link diagram with drag and hover interaction.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, error, info};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

pub mod components;

pub use components::force_graph::{
	DocLink, DocNode, ForceGraphCanvas, Graph, GraphDocument, GraphError, GraphSession,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("force-viz: logging initialized");
}

/// URL of the graph document, read from the `data-graph-src` attribute on
/// the document body. Defaults to `graph.json` next to the page.
fn graph_source_url() -> String {
	web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.body())
		.and_then(|b| b.get_attribute("data-graph-src"))
		.unwrap_or_else(|| "graph.json".to_string())
}

/// Fetch and parse the input document.
///
/// Any failure here is fatal to the visualization session: the caller gets
/// the error and no partial document. Retries are the host's business.
async fn fetch_document(url: &str) -> Result<GraphDocument, GraphError> {
	let fetch_err = |e: wasm_bindgen::JsValue| GraphError::Fetch(format!("{e:?}"));

	let opts = RequestInit::new();
	opts.set_method("GET");
	opts.set_mode(RequestMode::Cors);
	let request = Request::new_with_str_and_init(url, &opts).map_err(fetch_err)?;

	let window = web_sys::window().ok_or_else(|| GraphError::Fetch("no window".into()))?;
	let response = JsFuture::from(window.fetch_with_request(&request))
		.await
		.map_err(fetch_err)?;
	let response: Response = response
		.dyn_into()
		.map_err(|_| GraphError::Fetch("not a Response".into()))?;
	if !response.ok() {
		return Err(GraphError::Fetch(format!("HTTP {}", response.status())));
	}

	let body = JsFuture::from(response.text().map_err(fetch_err)?)
		.await
		.map_err(fetch_err)?;
	let body = body
		.as_string()
		.ok_or_else(|| GraphError::Fetch("body is not text".into()))?;

	let doc: GraphDocument = serde_json::from_str(&body)?;
	info!(
		"force-viz: loaded {} nodes, {} links from {url}",
		doc.nodes.len(),
		doc.links.len()
	);
	Ok(doc)
}

/// Main application component.
///
/// Loads the graph document asynchronously and mounts the visualization
/// once the whole document has parsed; a failed load renders nothing.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let (doc, set_doc) = signal(None::<GraphDocument>);
	wasm_bindgen_futures::spawn_local(async move {
		let url = graph_source_url();
		match fetch_document(&url).await {
			Ok(d) => set_doc.set(Some(d)),
			Err(err) => error!("force-viz: failed to load {url}: {err}"),
		}
	});

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Graph Visualization" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-graph">
			{move || {
				doc.get().map(|d| {
					let data = Signal::derive(move || d.clone());
					view! { <ForceGraphCanvas data=data fullscreen=true /> }
				})
			}}
		</div>
	}
}
