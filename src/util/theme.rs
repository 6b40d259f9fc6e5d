//! Light/dark theme selection.
//!
//! Reads the stored `darkMode` preference, falling back to the system
//! `prefers-color-scheme`, and mirrors it onto `<html data-theme>`.
//!
//! TRADE-OFFS
//! ==========
//! Applying the attribute is browser-only; native builds no-op so preference
//! logic stays testable.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use super::settings::Settings;

/// Resolve the effective theme: stored preference first, then the system.
pub fn read_preference(settings: &Settings) -> bool {
    settings.preferences().dark_mode.unwrap_or_else(system_prefers_dark)
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme_name(enabled));
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = enabled;
    }
}

/// Flip the theme, persist it, and apply it. Returns the new value.
pub fn toggle(settings: &Settings, current: bool) -> bool {
    let next = !current;
    apply(next);
    let mut prefs = settings.preferences();
    prefs.dark_mode = Some(next);
    if let Err(e) = settings.save_preferences(&prefs) {
        log::warn!("failed to persist theme preference: {e}");
    }
    next
}

#[cfg(any(test, feature = "csr"))]
fn theme_name(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}
