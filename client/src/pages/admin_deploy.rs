//! One-click deploy page backed by the admin endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the last deployment timestamp on mount and triggers
//! `POST /api/admin/deploy`. Failures stay on the page as status + toast.

use leptos::prelude::*;

use crate::components::deploy_panel::{DeployLog, DeployStatusBadge};
use crate::components::toast_host::notify;
use crate::state::deploy::DeployState;
use crate::state::mount::use_mount_gate;
use crate::state::toast::ToastState;
use crate::util::timestamp::format_optional_timestamp;

#[component]
pub fn AdminDeployPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let deploy = RwSignal::new(DeployState::default());
    let loaded = RwSignal::new(false);
    let gate = use_mount_gate();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_admin_last_deployment().await {
            Ok(last) => deploy.update(|d| d.last_deployment = last),
            Err(e) => log::warn!("last deployment lookup failed: {e}"),
        }
        loaded.set(true);
    });

    let last_label = move || {
        if gate.is_mounted() && loaded.get() {
            format_optional_timestamp(deploy.get().last_deployment.as_deref())
        } else {
            "Checking...".to_owned()
        }
    };

    let on_deploy = move |_| {
        if !deploy.try_update(DeployState::begin).unwrap_or(false) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::trigger_admin_deploy().await;
            if let Err(e) = &result {
                log::error!("admin deploy failed: {e}");
            }
            if let Some((kind, message)) = deploy.try_update(|d| d.finish(result)) {
                notify(toasts, kind, message);
            }
        });
    };
    #[cfg(not(feature = "hydrate"))]
    let _ = toasts;

    view! {
        <section class="admin-page">
            <h1>"Deploy site"</h1>
            <dl class="admin-page__facts">
                <dt>"Last deployment"</dt>
                <dd>{last_label}</dd>
                <dt>"Status"</dt>
                <dd>
                    <DeployStatusBadge status=Signal::derive(move || deploy.get().status)/>
                </dd>
            </dl>
            <button
                class="btn btn--primary"
                type="button"
                disabled=move || deploy.get().is_deploying()
                on:click=on_deploy
            >
                {move || if deploy.get().is_deploying() { "Deploying..." } else { "Deploy now" }}
            </button>
            <p class=move || format!("admin-page__message admin-page__message--{}", deploy.get().status.as_str())>
                {move || deploy.get().message.unwrap_or_default()}
            </p>
            <DeployLog lines=Signal::derive(move || deploy.get().logs)/>
        </section>
    }
}
