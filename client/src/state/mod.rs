//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`theme`, `deploy`, `notes`, `toast`) so pages
//! and components depend on small focused models. `mount` holds the
//! first-pass/mounted flag used for hydration-safe rendering.

pub mod deploy;
pub mod mount;
pub mod notes;
pub mod theme;
pub mod toast;
