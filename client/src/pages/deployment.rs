//! Release page: deploy with notes, review commits, keep a notes history.
//!
//! SYSTEM CONTEXT
//! ==============
//! Talks to the `/api/deployment/*` endpoints. All three reads start after
//! hydration; the first failure is kept as a banner and the rest of the page
//! still works.

use leptos::prelude::*;

use crate::components::client_only::ClientOnly;
use crate::components::deploy_panel::{DeployLog, DeployStatusBadge};
use crate::components::toast_host::notify;
use crate::net::types::{Commit, DeploymentNote};
use crate::state::deploy::DeployState;
use crate::state::notes::NotesState;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::timestamp::{format_optional_timestamp, format_timestamp};

#[component]
pub fn DeploymentPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let deploy = RwSignal::new(DeployState::default());
    let notes = RwSignal::new(NotesState::default());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::api;

        match api::fetch_last_deployment().await {
            Ok(record) => notes.update(|n| n.last = Some(record)),
            Err(e) => notes.update(|n| n.note_load_error("the last deployment", &e.to_string())),
        }
        match api::fetch_commits().await {
            Ok(commits) => notes.update(|n| n.commits = commits),
            Err(e) => notes.update(|n| n.note_load_error("commits", &e.to_string())),
        }
        match api::fetch_notes().await {
            Ok(history) => notes.update(|n| n.set_history(history)),
            Err(e) => notes.update(|n| n.note_load_error("notes", &e.to_string())),
        }
    });

    let on_deploy = move |_| {
        let text = match notes.get_untracked().validated_draft() {
            Ok(text) => text,
            Err(prompt) => {
                notify(toasts, ToastKind::Info, prompt);
                return;
            }
        };
        if !deploy.try_update(DeployState::begin).unwrap_or(false) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::deploy_with_notes(&text).await;
            let deployed_at = result.as_ref().ok().map(|s| s.timestamp.clone());
            if let Some((kind, message)) = deploy.try_update(|d| d.finish(result)) {
                notify(toasts, kind, message);
            }
            if let Some(timestamp) = deployed_at {
                notes.update(|n| {
                    n.last = Some(crate::net::types::DeploymentRecord {
                        timestamp: Some(timestamp),
                        notes: Some(text),
                        ..Default::default()
                    });
                });
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = text;
    };

    let on_save = move |_| {
        if notes.get_untracked().saving {
            return;
        }
        let text = match notes.get_untracked().validated_draft() {
            Ok(text) => text,
            Err(prompt) => {
                notify(toasts, ToastKind::Info, prompt);
                return;
            }
        };
        notes.update(|n| n.saving = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let timestamp = crate::util::timestamp::now_rfc3339();
            match crate::net::api::save_notes(&text, &timestamp).await {
                Ok(_) => {
                    notes.update(|n| n.record_saved(DeploymentNote { timestamp, notes: text, deployment_id: None }));
                    notify(toasts, ToastKind::Success, "Notes saved");
                }
                Err(e) => {
                    log::warn!("saving notes failed: {e}");
                    notes.update(|n| n.saving = false);
                    notify(toasts, ToastKind::Error, format!("Saving notes failed: {e}"));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = text;
    };

    let last_timestamp = move || {
        format_optional_timestamp(notes.get().last.and_then(|record| record.timestamp).as_deref())
    };
    let last_notes = move || notes.get().last.and_then(|record| record.notes).unwrap_or_default();

    view! {
        <section class="deployment-page">
            <h1>"Releases"</h1>
            <Show when=move || notes.get().load_error.is_some()>
                <p class="deployment-page__error">{move || notes.get().load_error.unwrap_or_default()}</p>
            </Show>

            <div class="deployment-page__summary">
                <h2>"Last deployment"</h2>
                <ClientOnly fallback=|| view! { <p>"Checking..."</p> }>
                    <p class="deployment-page__when">{last_timestamp}</p>
                    <p class="deployment-page__notes">{last_notes}</p>
                </ClientOnly>
                <DeployStatusBadge status=Signal::derive(move || deploy.get().status)/>
            </div>

            <label class="deployment-page__label" for="deploy-notes">
                "Release notes"
            </label>
            <textarea
                id="deploy-notes"
                class="deployment-page__draft"
                rows="5"
                placeholder="What changed in this release?"
                prop:value=move || notes.get().draft
                on:input=move |ev| notes.update(|n| n.draft = event_target_value(&ev))
            ></textarea>
            <div class="deployment-page__actions">
                <button
                    class="btn btn--primary"
                    type="button"
                    disabled=move || deploy.get().is_deploying()
                    on:click=on_deploy
                >
                    {move || if deploy.get().is_deploying() { "Deploying..." } else { "Deploy with notes" }}
                </button>
                <button class="btn" type="button" disabled=move || notes.get().saving on:click=on_save>
                    {move || if notes.get().saving { "Saving..." } else { "Save notes" }}
                </button>
            </div>
            <p class="deployment-page__message">{move || deploy.get().message.unwrap_or_default()}</p>
            <DeployLog lines=Signal::derive(move || deploy.get().logs)/>

            <h2>"Recent commits"</h2>
            <ul class="commit-list">
                {move || notes.get().commits.into_iter().map(commit_row).collect::<Vec<_>>()}
            </ul>

            <h2>"Notes history"</h2>
            <ul class="notes-history">
                {move || notes.get().history.into_iter().map(note_row).collect::<Vec<_>>()}
            </ul>
        </section>
    }
}

fn commit_row(commit: Commit) -> impl IntoView {
    view! {
        <li class="commit-list__item">
            <code class="commit-list__hash">{commit.short_hash().to_owned()}</code>
            <span class="commit-list__subject">{commit.subject().to_owned()}</span>
            <span class="commit-list__meta">
                {format!("{} · {}", commit.author, format_timestamp(&commit.timestamp))}
            </span>
        </li>
    }
}

fn note_row(note: DeploymentNote) -> impl IntoView {
    view! {
        <li class="notes-history__item">
            <span class="notes-history__when">{format_timestamp(&note.timestamp)}</span>
            <p class="notes-history__text">{note.notes}</p>
        </li>
    }
}
