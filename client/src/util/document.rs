//! Document-level theme styling and the ambient color-scheme signal.
//!
//! The browser surface toggles the dark class on `<html>` and `<body>` and
//! mirrors the theme name into `data-theme` on `<html>`. Requires a browser
//! environment; SSR paths no-op and report no ambient preference.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use std::sync::{Arc, Mutex};

use crate::state::theme::Theme;
#[cfg(feature = "hydrate")]
use crate::state::theme::{DARK_CLASS, THEME_ATTRIBUTE};

/// Media query matched when the OS prefers dark UI.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";
/// Media query matched when the OS prefers light UI.
pub const PREFERS_LIGHT_QUERY: &str = "(prefers-color-scheme: light)";

/// Where the active theme becomes visible.
pub trait ThemeSurface: Send + Sync {
    /// Apply the theme marker. Idempotent.
    fn apply(&self, theme: Theme);

    /// Operating-environment color scheme, if it reports one.
    fn ambient(&self) -> Option<Theme>;
}

/// The live `document`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentSurface;

impl ThemeSurface for DocumentSurface {
    fn apply(&self, theme: Theme) {
        #[cfg(feature = "hydrate")]
        {
            let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(root) = doc.document_element() {
                let _ = root.class_list().toggle_with_force(DARK_CLASS, theme.is_dark());
                let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
            }
            if let Some(body) = doc.body() {
                let _ = body.class_list().toggle_with_force(DARK_CLASS, theme.is_dark());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = theme;
        }
    }

    fn ambient(&self) -> Option<Theme> {
        #[cfg(feature = "hydrate")]
        {
            let window = web_sys::window()?;
            let matches = |query: &str| {
                window
                    .match_media(query)
                    .ok()
                    .flatten()
                    .map_or(false, |mq| mq.matches())
            };
            if matches(PREFERS_DARK_QUERY) {
                Some(Theme::Dark)
            } else if matches(PREFERS_LIGHT_QUERY) {
                Some(Theme::Light)
            } else {
                None
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}

/// Recorded document state for a [`MemorySurface`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SurfaceSnapshot {
    pub root_dark: bool,
    pub body_dark: bool,
    pub data_theme: Option<String>,
    pub applications: usize,
}

/// Inspectable stand-in for the document. Clones share state.
#[derive(Clone, Debug, Default)]
pub struct MemorySurface {
    state: Arc<Mutex<SurfaceSnapshot>>,
    ambient: Option<Theme>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface whose environment reports `ambient`.
    pub fn with_ambient(ambient: Theme) -> Self {
        Self { ambient: Some(ambient), ..Self::default() }
    }

    pub fn snapshot(&self) -> SurfaceSnapshot {
        self.state.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn has_dark_marker(&self) -> bool {
        self.snapshot().root_dark
    }
}

impl ThemeSurface for MemorySurface {
    fn apply(&self, theme: Theme) {
        if let Ok(mut state) = self.state.lock() {
            state.root_dark = theme.is_dark();
            state.body_dark = theme.is_dark();
            state.data_theme = Some(theme.as_str().to_owned());
            state.applications += 1;
        }
    }

    fn ambient(&self) -> Option<Theme> {
        self.ambient
    }
}
