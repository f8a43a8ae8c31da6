//! Browser entry point: mounts the learning path app.

use learning_path_graph::{App, init_logging};
use leptos::prelude::*;

// Linked through the library; named here to satisfy `unused_crate_dependencies`.
use console_error_panic_hook as _;
use console_log as _;
use js_sys as _;
use leptos_meta as _;
use leptos_router as _;
use log as _;
use wasm_bindgen as _;
use web_sys as _;

fn main() {
	init_logging();
	mount_to_body(App);
}
