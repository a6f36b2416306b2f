//! Top navigation bar with the theme toggle.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::theme_toggle::ThemeToggle;

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <a href="/" class="site-header__brand">
                "Academy"
            </a>
            <nav class="site-header__nav">
                <A href="/">"Courses"</A>
                <A href="/admin/deploy">"Deploy"</A>
                <A href="/admin/deployment">"Releases"</A>
            </nav>
            <span class="site-header__spacer"></span>
            <ThemeToggle/>
        </header>
    }
}
