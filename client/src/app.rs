//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::site_header::SiteHeader;
use crate::components::theme_provider::ThemeProvider;
use crate::components::toast_host::ToastHost;
use crate::pages::{
    admin_deploy::AdminDeployPage, deployment::DeploymentPage, home::HomePage, not_found::NotFoundPage,
};
use crate::state::theme::{DARK_CLASS, first_pass_theme};
use crate::state::toast::ToastState;
use crate::util::pre_paint::pre_paint_script;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The root starts out in the first-pass theme and the pre-paint script runs
/// before any stylesheet, so a stored light preference is applied before the
/// first frame.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let theme = first_pass_theme();
    let root_class = if theme.is_dark() { DARK_CLASS } else { "" };

    view! {
        <!DOCTYPE html>
        <html lang="en" class=root_class data-theme=theme.as_str()>
            <head>
                <script inner_html=pre_paint_script()></script>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the toast queue and theme context, then sets up client-side
/// routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(ToastState::default());
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/academy.css"/>
        <Title text="Academy"/>

        <ThemeProvider>
            <Router>
                <SiteHeader/>
                <main class="site-main">
                    <Routes fallback=NotFoundPage>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=(StaticSegment("admin"), StaticSegment("deploy")) view=AdminDeployPage/>
                        <Route path=(StaticSegment("admin"), StaticSegment("deployment")) view=DeploymentPage/>
                    </Routes>
                </main>
            </Router>
            <ToastHost/>
        </ThemeProvider>
    }
}
