//! Render children only after the app has mounted in the browser.
//!
//! Server output and the hydrating pass both show `fallback`, so anything
//! derived from browser-only state cannot cause a hydration mismatch.

use leptos::prelude::*;

use crate::state::mount::use_mount_gate;

#[component]
pub fn ClientOnly(#[prop(optional, into)] fallback: ViewFn, children: ChildrenFn) -> impl IntoView {
    let gate = use_mount_gate();
    move || {
        if gate.is_mounted() {
            children()
        } else {
            fallback.run()
        }
    }
}
