//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and shared widgets while reading/writing
//! state from Leptos context providers.

pub mod client_only;
pub mod deploy_panel;
pub mod site_header;
pub mod theme_provider;
pub mod theme_toggle;
pub mod toast_host;
