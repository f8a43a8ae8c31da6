//! Static EN/FR string tables and the language context shared by the pages.

use leptos::prelude::*;
use log::{info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Lang {
	En,
	#[default]
	Fr,
}

impl Lang {
	/// Used for unknown codes and looked up when a key is missing in the
	/// active language.
	pub const FALLBACK: Lang = Lang::Fr;

	pub fn code(self) -> &'static str {
		match self {
			Lang::En => "en",
			Lang::Fr => "fr",
		}
	}

	/// Accepts only the two-letter codes used in URLs.
	pub fn from_code(code: &str) -> Option<Self> {
		match code {
			"en" => Some(Lang::En),
			"fr" => Some(Lang::Fr),
			_ => None,
		}
	}

	/// Maps a BCP 47 tag such as `fr-CA` to a supported language.
	pub fn from_navigator(tag: &str) -> Self {
		if tag.starts_with("fr") {
			Lang::Fr
		} else {
			Lang::En
		}
	}

	/// Language of the browser, or the default outside one.
	pub fn detect() -> Self {
		web_sys::window()
			.and_then(|w| w.navigator().language())
			.map(|tag| Self::from_navigator(&tag))
			.unwrap_or_default()
	}
}

const EN: &[(&str, &str)] = &[
	("title", "Learning path"),
	(
		"description",
		"Follow the path from the command line to full-stack frameworks.",
	),
	(
		"graph.hint",
		"Hover a course to reveal its actions. Drag to pan, scroll to zoom.",
	),
	("lang.en", "English"),
	("lang.fr", "Français"),
];

const FR: &[(&str, &str)] = &[
	("title", "Parcours d'apprentissage"),
	(
		"description",
		"Suivez le parcours, de la ligne de commande aux frameworks full-stack.",
	),
	(
		"graph.hint",
		"Survolez un cours pour afficher ses actions. Glissez pour déplacer, défilez pour zoomer.",
	),
	("lang.en", "English"),
	("lang.fr", "Français"),
];

fn table(lang: Lang) -> &'static [(&'static str, &'static str)] {
	match lang {
		Lang::En => EN,
		Lang::Fr => FR,
	}
}

fn lookup(lang: Lang, key: &str) -> Option<&'static str> {
	table(lang)
		.iter()
		.find(|(k, _)| *k == key)
		.map(|(_, v)| *v)
}

/// Active language first, then [`Lang::FALLBACK`], then the key itself.
pub fn translate(lang: Lang, key: &str) -> &str {
	lookup(lang, key)
		.or_else(|| lookup(Lang::FALLBACK, key))
		.unwrap_or(key)
}

/// Reactive handle on the current language.
#[derive(Clone, Copy, Debug)]
pub struct I18n {
	lang: RwSignal<Lang>,
}

impl I18n {
	pub fn new(lang: Lang) -> Self {
		Self {
			lang: RwSignal::new(lang),
		}
	}

	pub fn lang(&self) -> Lang {
		self.lang.get()
	}

	pub fn t(&self, key: &'static str) -> &'static str {
		translate(self.lang.get(), key)
	}

	pub fn set_lang(&self, lang: Lang) {
		if self.lang.get_untracked() != lang {
			info!("language changed to {}", lang.code());
			self.lang.set(lang);
		}
	}

	/// Unknown codes switch to [`Lang::FALLBACK`]. Returns the language now
	/// active.
	pub fn change_language(&self, code: &str) -> Lang {
		let lang = Lang::from_code(code).unwrap_or_else(|| {
			warn!("unsupported language {code:?}, using {}", Lang::FALLBACK.code());
			Lang::FALLBACK
		});
		self.set_lang(lang);
		lang
	}
}

pub fn provide_i18n(lang: Lang) -> I18n {
	let i18n = I18n::new(lang);
	provide_context(i18n);
	i18n
}

pub fn use_i18n() -> I18n {
	use_context::<I18n>().unwrap_or_else(|| {
		warn!("no i18n context, providing one");
		provide_i18n(Lang::detect())
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn codes_round_trip_and_reject_others() {
		for lang in [Lang::En, Lang::Fr] {
			assert_eq!(Lang::from_code(lang.code()), Some(lang));
		}
		assert_eq!(Lang::from_code("de"), None);
		assert_eq!(Lang::from_code("EN"), None);
		assert_eq!(Lang::from_code(""), None);
	}

	#[test]
	fn navigator_tags() {
		assert_eq!(Lang::from_navigator("fr"), Lang::Fr);
		assert_eq!(Lang::from_navigator("fr-CA"), Lang::Fr);
		assert_eq!(Lang::from_navigator("en-GB"), Lang::En);
		assert_eq!(Lang::from_navigator("de-DE"), Lang::En);
	}

	#[test]
	fn tables_share_keys() {
		for (key, _) in EN {
			assert!(lookup(Lang::Fr, key).is_some(), "fr is missing {key}");
		}
		for (key, _) in FR {
			assert!(lookup(Lang::En, key).is_some(), "en is missing {key}");
		}
	}

	#[test]
	fn translate_falls_back_to_key() {
		assert_eq!(translate(Lang::En, "title"), "Learning path");
		assert_eq!(translate(Lang::Fr, "title"), "Parcours d'apprentissage");
		assert_eq!(translate(Lang::En, "no.such.key"), "no.such.key");
	}

	#[test]
	fn change_language_uses_fallback_on_unknown_code() {
		let owner = Owner::new();
		owner.with(|| {
			let i18n = I18n::new(Lang::Fr);
			assert_eq!(i18n.change_language("en"), Lang::En);
			assert_eq!(i18n.lang(), Lang::En);
			assert_eq!(i18n.change_language("fr"), Lang::Fr);
			assert_eq!(i18n.lang(), Lang::Fr);

			i18n.change_language("en");
			assert_eq!(i18n.change_language("de"), Lang::FALLBACK);
			assert_eq!(i18n.lang(), Lang::FALLBACK);
			assert_eq!(i18n.t("title"), "Parcours d'apprentissage");
			assert_eq!(Lang::default(), Lang::FALLBACK);
		});
	}
}
