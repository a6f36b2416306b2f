//! Light/dark toggle button.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::state::theme::{Theme, use_theme};

/// Button that flips the active theme.
///
/// The icon and label follow `rendered_theme`, so server markup and the
/// hydrating pass agree even when the visitor's stored theme differs.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    let icon = {
        let theme = theme.clone();
        move || toggle_icon(theme.rendered_theme())
    };
    let label = {
        let theme = theme.clone();
        move || toggle_label(theme.rendered_theme())
    };
    let on_click = move |_| {
        theme.toggle();
    };

    view! {
        <button
            class="btn theme-toggle"
            type="button"
            title=label.clone()
            aria-label=label
            on:click=on_click
        >
            {icon}
        </button>
    }
}

/// Icon for the action the button performs, not the current state.
fn toggle_icon(current: Theme) -> &'static str {
    match current {
        Theme::Dark => "☀",
        Theme::Light => "☾",
    }
}

fn toggle_label(current: Theme) -> &'static str {
    match current {
        Theme::Dark => "Switch to light mode",
        Theme::Light => "Switch to dark mode",
    }
}
