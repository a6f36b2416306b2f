//! Theme preference model and the runtime theme context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three parties decide which theme the document shows: the inline pre-paint
//! script emitted by the SSR shell, the server-rendered markup, and this
//! context once the app has hydrated. All of them resolve the effective theme
//! through [`resolve`] and read the same storage keys, so the class marker
//! applied before first paint is the one the context adopts on mount.
//!
//! DESIGN
//! ======
//! The context starts in [`first_pass_theme`] on both server and client so the
//! first client pass matches server markup. Stored or ambient preferences are
//! only adopted in [`ThemeContext::mount`], which runs from an effect after
//! hydration. After that the context is the single writer of document theme
//! state; every change goes through [`ThemeContext::set_theme`].

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use leptos::prelude::*;

use crate::state::mount::MountGate;
use crate::util::document::ThemeSurface;
use crate::util::pre_paint::pre_paint_theme;
use crate::util::storage::PreferenceStore;

/// Canonical storage key holding `"light"` or `"dark"`.
pub const THEME_KEY: &str = "theme";

/// Older boolean-as-string key (`"true"` means dark). Read for migration,
/// removed on the next explicit write.
pub const LEGACY_DARK_MODE_KEY: &str = "darkMode";

/// Class token placed on `<html>` and `<body>` while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

/// Attribute on `<html>` mirroring the active theme name.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Accepted values of [`THEME_KEY`]. Matched exactly; this is the format
/// [`write_preference`] produces and the pre-paint script embeds this table.
pub const STORED_THEMES: [(&str, Theme); 2] = [("light", Theme::Light), ("dark", Theme::Dark)];

/// Accepted values of [`LEGACY_DARK_MODE_KEY`], matched exactly.
pub const LEGACY_FLAGS: [(&str, Theme); 2] = [("true", Theme::Dark), ("false", Theme::Light)];

/// Visual theme applied to the document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::InvalidTheme(other.to_owned())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("invalid theme {0:?}: expected \"light\" or \"dark\"")]
    InvalidTheme(String),
    #[error("theme context used outside of <ThemeProvider>")]
    MissingProvider,
}

/// Theme used by the server render and the first client pass.
pub fn first_pass_theme() -> Theme {
    Theme::default()
}

/// Read the persisted preference, if any.
///
/// The canonical key wins; the legacy boolean key is consulted only when the
/// canonical one is absent or unrecognized. Values must match exactly, the
/// same comparison the pre-paint script makes. Unreadable storage counts as
/// no preference.
pub fn read_preference(store: &dyn PreferenceStore) -> Option<Theme> {
    if let Some(theme) = store.get(THEME_KEY).and_then(|raw| lookup_stored(&STORED_THEMES, &raw)) {
        return Some(theme);
    }
    store
        .get(LEGACY_DARK_MODE_KEY)
        .and_then(|raw| lookup_stored(&LEGACY_FLAGS, &raw))
}

/// Persist an explicit user choice under the canonical key.
pub fn write_preference(store: &dyn PreferenceStore, theme: Theme) {
    store.set(THEME_KEY, theme.as_str());
    store.remove(LEGACY_DARK_MODE_KEY);
}

/// Effective theme: stored preference, else ambient color scheme, else dark.
pub fn resolve(preference: Option<Theme>, ambient: Option<Theme>) -> Theme {
    preference.or(ambient).unwrap_or_default()
}

fn lookup_stored(table: &[(&str, Theme)], raw: &str) -> Option<Theme> {
    table.iter().find(|(value, _)| *value == raw).map(|(_, theme)| *theme)
}

/// Runtime handle to the active theme, provided by `ThemeProvider`.
#[derive(Clone)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
    gate: MountGate,
    store: Arc<dyn PreferenceStore>,
    surface: Arc<dyn ThemeSurface>,
}

impl ThemeContext {
    pub fn new(store: Arc<dyn PreferenceStore>, surface: Arc<dyn ThemeSurface>) -> Self {
        Self {
            theme: RwSignal::new(first_pass_theme()),
            gate: MountGate::new(),
            store,
            surface,
        }
    }

    /// Current theme (tracked).
    pub fn get_theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn get_theme_untracked(&self) -> Theme {
        self.theme.get_untracked()
    }

    /// Theme that theme-dependent markup should render right now.
    ///
    /// Stays on [`first_pass_theme`] until [`Self::mount`] has run so the
    /// hydrating pass reproduces server output exactly.
    pub fn rendered_theme(&self) -> Theme {
        self.gate.select(first_pass_theme(), self.theme.get())
    }

    /// Switch themes: update state, the document marker, and storage.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        self.surface.apply(theme);
        write_preference(self.store.as_ref(), theme);
    }

    /// Validating variant of [`Self::set_theme`] for untyped input.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidTheme`] when `raw` is not `light` or
    /// `dark`. Nothing is mutated in that case.
    pub fn set_theme_str(&self, raw: &str) -> Result<Theme, ThemeError> {
        let theme = raw.parse::<Theme>()?;
        self.set_theme(theme);
        Ok(theme)
    }

    pub fn toggle(&self) -> Theme {
        let next = self.get_theme_untracked().toggled();
        self.set_theme(next);
        next
    }

    /// Adopt the stored/ambient theme after the app has attached.
    ///
    /// Resolves exactly like the pre-paint script, so on a normal load this
    /// re-applies the marker that is already present. Storage is not written.
    pub fn mount(&self) -> Theme {
        let theme = pre_paint_theme(self.store.as_ref(), self.surface.as_ref());
        self.theme.set(theme);
        self.surface.apply(theme);
        self.gate.mark_mounted();
        theme
    }

    pub fn is_mounted(&self) -> bool {
        self.gate.is_mounted()
    }

    pub fn is_mounted_untracked(&self) -> bool {
        self.gate.is_mounted_untracked()
    }
}

impl fmt::Debug for ThemeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeContext")
            .field("theme", &self.theme.get_untracked())
            .field("mounted", &self.gate.is_mounted_untracked())
            .finish_non_exhaustive()
    }
}

/// Fetch the theme context from the nearest `ThemeProvider`.
///
/// # Errors
///
/// Returns [`ThemeError::MissingProvider`] when no provider is in scope.
pub fn try_use_theme() -> Result<ThemeContext, ThemeError> {
    use_context::<ThemeContext>().ok_or(ThemeError::MissingProvider)
}

/// Fetch the theme context, failing loudly when no provider is in scope.
///
/// # Panics
///
/// Panics outside of a `ThemeProvider`; that is a wiring bug, not a state the
/// UI should render around.
pub fn use_theme() -> ThemeContext {
    try_use_theme().unwrap_or_else(|err| panic!("{err}"))
}
