//! Provider for the runtime theme context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the routed app. Children render with the first-pass theme; the
//! mount effect then adopts whatever the pre-paint script already applied.

use std::sync::Arc;

use leptos::prelude::*;

use crate::state::theme::ThemeContext;
use crate::util::document::DocumentSurface;
use crate::util::storage::BrowserStorage;

/// Provide a [`ThemeContext`] backed by `localStorage` and the live document.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let ctx = ThemeContext::new(Arc::new(BrowserStorage), Arc::new(DocumentSurface));
    provide_context(ctx.clone());

    // Effects only run in the browser, after hydration.
    Effect::new(move || {
        if ctx.is_mounted_untracked() {
            return;
        }
        let theme = ctx.mount();
        #[cfg(feature = "hydrate")]
        log::debug!("theme mounted: {theme}");
        #[cfg(not(feature = "hydrate"))]
        let _ = theme;
    });

    children()
}
