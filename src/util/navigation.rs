//! Full-page navigation and current-location access.
//!
//! SYSTEM CONTEXT
//! ==============
//! Forced logout reloads the whole page so every in-memory signal starts
//! fresh. That side effect, and the "where am I" lookup the HTTP client uses to
//! detect demo pages, sit behind [`Navigator`] so tests can observe them.

#[cfg(test)]
use std::sync::{Arc, Mutex};

/// Path of the login entry point.
pub const LOGIN_PATH: &str = "/login";

/// Read the current location and perform hard (reloading) navigations.
pub trait Navigator: Send + Sync {
    /// Path plus query of the current document, e.g. `/demo/videos?x=1`.
    fn current_path(&self) -> String;

    /// Replace the document with `path`, discarding in-memory state.
    fn hard_redirect(&self, path: &str);
}

/// `window.location` navigator. A no-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn current_path(&self) -> String {
        #[cfg(feature = "csr")]
        {
            let Some(location) = web_sys::window().map(|w| w.location()) else {
                return String::new();
            };
            let path = location.pathname().unwrap_or_default();
            let search = location.search().unwrap_or_default();
            format!("{path}{search}")
        }
        #[cfg(not(feature = "csr"))]
        {
            String::new()
        }
    }

    fn hard_redirect(&self, path: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(path);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
        }
    }
}

/// Navigator with a settable location that records every redirect.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct RecordingNavigator {
    location: Arc<Mutex<String>>,
    redirects: Arc<Mutex<Vec<String>>>,
}

#[cfg(test)]
impl RecordingNavigator {
    #[must_use]
    pub fn at(path: &str) -> Self {
        let nav = Self::default();
        nav.set_location(path);
        nav
    }

    pub fn set_location(&self, path: &str) {
        if let Ok(mut location) = self.location.lock() {
            path.clone_into(&mut location);
        }
    }

    /// Every path passed to [`Navigator::hard_redirect`], oldest first.
    #[must_use]
    pub fn redirects(&self) -> Vec<String> {
        self.redirects.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.location.lock().map(|l| l.clone()).unwrap_or_default()
    }

    fn hard_redirect(&self, path: &str) {
        if let Ok(mut redirects) = self.redirects.lock() {
            redirects.push(path.to_owned());
        }
        self.set_location(path);
    }
}
