use std::sync::Arc;

use super::*;
use crate::state::theme::{THEME_KEY, ThemeContext};
use crate::util::document::MemorySurface;
use crate::util::storage::MemoryStorage;

#[test]
fn icon_offers_the_other_theme() {
    assert_eq!(toggle_icon(Theme::Dark), "☀");
    assert_eq!(toggle_icon(Theme::Light), "☾");
}

#[test]
fn label_describes_the_action() {
    assert_eq!(toggle_label(Theme::Dark), "Switch to light mode");
    assert_eq!(toggle_label(Theme::Light), "Switch to dark mode");
}

#[test]
fn first_pass_icon_ignores_stored_light_preference() {
    let owner = Owner::new();
    owner.with(|| {
        let store = MemoryStorage::with_entries([(THEME_KEY, "light")]);
        let ctx = ThemeContext::new(Arc::new(store), Arc::new(MemorySurface::new()));
        assert_eq!(toggle_icon(ctx.rendered_theme()), "☀");
        ctx.mount();
        assert_eq!(toggle_icon(ctx.rendered_theme()), "☾");
    });
}
