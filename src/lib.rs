//! Leptos client-side app wiring and routes.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod components;
mod i18n;
mod pages;

// Top-Level pages
use crate::i18n::{Lang, provide_i18n};
use crate::pages::home::Home;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// Routes `/:lang` to the homepage; `/` and unknown paths redirect to the
/// browser's language.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();
	let detected = Lang::detect();
	let i18n = provide_i18n(detected);
	let home_path = format!("/{}", detected.code());
	let fallback_path = home_path.clone();

	view! {
		<Html attr:lang=move || i18n.lang().code() attr:dir="ltr" attr:data-theme="light" />

		// sets the document title
		<Title text=move || i18n.t("title") />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=move || view! { <Redirect path=fallback_path.clone() /> }>
				<Route path=path!("/") view=move || view! { <Redirect path=home_path.clone() /> } />
				<Route path=path!("/:lang") view=Home />
			</Routes>
		</Router>
	}
}
