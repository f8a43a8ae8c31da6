use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::learning_path::LearningPathGraph;
use crate::i18n::{Lang, use_i18n};

/// Page at `/:lang`: applies the URL language and hosts the graph.
#[component]
pub fn Home() -> impl IntoView {
	let i18n = use_i18n();
	let params = use_params_map();
	let navigate = use_navigate();

	let redirect = navigate.clone();
	Effect::new(move |_| {
		let code = params.with(|p| p.get("lang")).unwrap_or_default();
		let lang = i18n.change_language(&code);
		if lang.code() != code {
			redirect(
				&format!("/{}", lang.code()),
				NavigateOptions {
					replace: true,
					..Default::default()
				},
			);
		}
	});

	let switch_language = move |lang: Lang| navigate(&format!("/{}", lang.code()), Default::default());
	let (to_en, to_fr) = (switch_language.clone(), switch_language);

	view! {
		<div class="fullscreen-graph">
			<LearningPathGraph fullscreen=true />
			<div class="graph-overlay">
				<h1>{move || i18n.t("title")}</h1>
				<p class="subtitle">{move || i18n.t("description")}</p>
				<p class="hint">{move || i18n.t("graph.hint")}</p>
				<div class="lang-switch">
					<button on:click=move |_| to_en(Lang::En)>{move || i18n.t("lang.en")}</button>
					<button on:click=move |_| to_fr(Lang::Fr)>{move || i18n.t("lang.fr")}</button>
				</div>
			</div>
		</div>
	}
}
