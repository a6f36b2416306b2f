//! Status badge and log viewer shared by the two deploy pages.

#[cfg(test)]
#[path = "deploy_panel_test.rs"]
mod deploy_panel_test;

use leptos::prelude::*;

use crate::state::deploy::DeployStatus;

#[component]
pub fn DeployStatusBadge(#[prop(into)] status: Signal<DeployStatus>) -> impl IntoView {
    view! {
        <span class=move || status_badge_class(status.get())>
            {move || status_badge_label(status.get())}
        </span>
    }
}

/// Backend log lines for the most recent run. Hidden while empty.
#[component]
pub fn DeployLog(#[prop(into)] lines: Signal<Vec<String>>) -> impl IntoView {
    view! {
        <Show when=move || !lines.get().is_empty()>
            <pre class="deploy-log">{move || lines.get().join("\n")}</pre>
        </Show>
    }
}

fn status_badge_class(status: DeployStatus) -> &'static str {
    match status {
        DeployStatus::Idle => "deploy-badge deploy-badge--idle",
        DeployStatus::Deploying => "deploy-badge deploy-badge--deploying",
        DeployStatus::Success => "deploy-badge deploy-badge--success",
        DeployStatus::Error => "deploy-badge deploy-badge--error",
    }
}

fn status_badge_label(status: DeployStatus) -> &'static str {
    match status {
        DeployStatus::Idle => "Idle",
        DeployStatus::Deploying => "Deploying",
        DeployStatus::Success => "Deployed",
        DeployStatus::Error => "Failed",
    }
}
