//! Localized UI labels for `fleetdesk-ui`.
//!
//! Static strings live in Fluent bundles embedded at compile time:
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/fleetdesk-ui.ftl   (fallback, only shipped locale)
//! ```
//!
//! Lookups go through the `t!` macro after `init()` has run once:
//! ```ignore
//! crate::i18n::init();
//! let title = crate::t!("app-title");
//! let meta = crate::t!("stat-bookings-meta", days = "7");
//! ```
//!
//! Dashboard numbers and dates are formatted in Rust (`core::format`) and passed
//! in as pre-rendered strings, so Fluent never applies its own number formatting.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Translation macro routed through the shared loader.
///
/// ```ignore
/// t!("app-title")
/// t!("stat-pickups-meta", pending = "2")
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback bundle is `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "fleetdesk-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load the bundles (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            tracing::warn!("[i18n] failed selecting languages ({err}); continuing with fallback");
        }
        // Interpolated values are plain LTR text; skip the bidi isolation marks.
        LOADER.set_use_isolating(false);
    });
}

/// Embedded language identifiers, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
