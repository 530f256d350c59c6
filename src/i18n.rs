// SPDX-License-Identifier: GPL-3.0-only

//! Localization support using fluent translations.
//!
//! Chrome strings (the panel title, button tooltips, toast category names)
//! are looked up through the `fl!` macro against the embedded `i18n/`
//! resources. Hosts call [`init`] once at startup with the desktop's
//! requested languages.

use i18n_embed::{
    fluent::{fluent_language_loader, FluentLanguageLoader},
    unic_langid::LanguageIdentifier,
    DefaultLocalizer, LanguageLoader, Localizer,
};
use rust_embed::RustEmbed;
use std::sync::LazyLock;

/// Embedded fluent translation resources.
#[derive(RustEmbed)]
#[folder = "i18n/"]
struct Localizations;

/// The shared language loader, initialized with the fallback language.
pub static LANGUAGE_LOADER: LazyLock<FluentLanguageLoader> = LazyLock::new(|| {
    let loader: FluentLanguageLoader = fluent_language_loader!();

    loader
        .load_fallback_language(&Localizations)
        .expect("Error while loading fallback language");

    loader
});

/// Request a localized string by message id.
#[macro_export]
macro_rules! fl {
    ($message_id:literal) => {{
        i18n_embed_fl::fl!($crate::i18n::LANGUAGE_LOADER, $message_id)
    }};

    ($message_id:literal, $($args:expr),*) => {{
        i18n_embed_fl::fl!($crate::i18n::LANGUAGE_LOADER, $message_id, $($args), *)
    }};
}

/// Returns the localizer to be used for this crate.
pub fn localizer() -> Box<dyn Localizer> {
    Box::from(DefaultLocalizer::new(&*LANGUAGE_LOADER, &Localizations))
}

/// Applies the requested languages to the shared loader.
///
/// Call once at startup, before any `fl!` lookup, with the languages
/// reported by `i18n_embed::DesktopLanguageRequester`.
pub fn init(requested_languages: &[LanguageIdentifier]) {
    if let Err(why) = localizer().select(requested_languages) {
        tracing::error!(%why, "error while loading fluent localizations");
    }
}
