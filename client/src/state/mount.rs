//! Mounted/unmounted flag for render-pass reconciliation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Server markup is produced without any browser state. Components that
//! branch on client-only information (stored theme, fetched data, viewport)
//! render their "not yet mounted" branch on the first client pass so
//! hydration sees identical markup, then switch once the gate opens.
//!
//! The gate is opened from an effect. Effects never run during SSR and run in
//! the browser only after hydration has attached, so the divergent branch can
//! only appear once the page is already interactive.

#[cfg(test)]
#[path = "mount_test.rs"]
mod mount_test;

use leptos::prelude::*;

/// Explicit two-state `mounted` flag.
#[derive(Clone, Copy, Debug)]
pub struct MountGate {
    mounted: RwSignal<bool>,
}

impl MountGate {
    pub fn new() -> Self {
        Self { mounted: RwSignal::new(false) }
    }

    pub fn mark_mounted(&self) {
        if !self.mounted.get_untracked() {
            self.mounted.set(true);
        }
    }

    /// Tracked read.
    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    pub fn is_mounted_untracked(&self) -> bool {
        self.mounted.get_untracked()
    }

    /// `before` until mounted, `after` from then on.
    pub fn select<T>(&self, before: T, after: T) -> T {
        if self.is_mounted() { after } else { before }
    }
}

impl Default for MountGate {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a gate that opens once the component has attached in the browser.
pub fn use_mount_gate() -> MountGate {
    let gate = MountGate::new();
    Effect::new(move || gate.mark_mounted());
    gate
}
