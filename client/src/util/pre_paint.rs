//! Pre-paint theme initialization.
//!
//! The SSR shell inlines [`pre_paint_script`] at the top of `<head>`. It runs
//! synchronously while the document is parsed, before the first frame and
//! before the WASM bundle loads, so a returning light-mode visitor never sees
//! a dark flash. [`pre_paint_theme`] is the same decision expressed in Rust;
//! the hydrate entry point and `ThemeContext::mount` both go through it.
//!
//! The script and the Rust resolution share their keys, class token,
//! attribute name and accepted stored values through the constants in
//! `state::theme`; the value tables are embedded in the script as JSON
//! objects and matched exactly on both sides.

#[cfg(test)]
#[path = "pre_paint_test.rs"]
mod pre_paint_test;

use crate::state::theme::{
    DARK_CLASS, LEGACY_DARK_MODE_KEY, LEGACY_FLAGS, STORED_THEMES, THEME_ATTRIBUTE, THEME_KEY, Theme,
    read_preference, resolve,
};
use crate::util::document::{PREFERS_DARK_QUERY, PREFERS_LIGHT_QUERY, ThemeSurface};
use crate::util::storage::PreferenceStore;

/// Theme the pre-paint script picks for this storage + environment.
pub fn pre_paint_theme(store: &dyn PreferenceStore, surface: &dyn ThemeSurface) -> Theme {
    resolve(read_preference(store), surface.ambient())
}

/// Resolve and apply the pre-paint theme.
pub fn apply_pre_paint(store: &dyn PreferenceStore, surface: &dyn ThemeSurface) -> Theme {
    let theme = pre_paint_theme(store, surface);
    surface.apply(theme);
    theme
}

/// Inline JavaScript that applies the theme marker before first paint.
///
/// `<body>` does not exist yet while `<head>` executes, so the body marker is
/// mirrored on `DOMContentLoaded`; stylesheets key off the root marker.
pub fn pre_paint_script() -> String {
    let theme_key = js_string(THEME_KEY);
    let legacy_key = js_string(LEGACY_DARK_MODE_KEY);
    let stored = js_table(&STORED_THEMES);
    let legacy = js_table(&LEGACY_FLAGS);
    let class = js_string(DARK_CLASS);
    let attr = js_string(THEME_ATTRIBUTE);
    let dark_query = js_string(PREFERS_DARK_QUERY);
    let light_query = js_string(PREFERS_LIGHT_QUERY);
    format!(
        "(function(){{\
var T={stored};var L={legacy};\
var h=function(o,k){{return typeof k===\"string\"&&Object.prototype.hasOwnProperty.call(o,k)?o[k]:null;}};\
var t=null;\
try{{var s=window.localStorage;t=h(T,s.getItem({theme_key}));\
if(!t){{t=h(L,s.getItem({legacy_key}));}}}}catch(e){{t=null;}}\
if(!t&&window.matchMedia){{\
if(window.matchMedia({dark_query}).matches){{t=\"dark\";}}\
else if(window.matchMedia({light_query}).matches){{t=\"light\";}}}}\
if(!t){{t=\"dark\";}}\
var d=t===\"dark\",r=document.documentElement;\
r.classList.toggle({class},d);r.setAttribute({attr},t);\
var m=function(){{if(document.body){{document.body.classList.toggle({class},d);}}}};\
if(document.body){{m();}}else{{document.addEventListener(\"DOMContentLoaded\",m);}}\
}})();"
    )
}

/// Stored-value table as a JS object literal mapping raw value to theme name.
fn js_table(table: &[(&str, Theme)]) -> String {
    let map: serde_json::Map<String, serde_json::Value> = table
        .iter()
        .map(|(raw, theme)| ((*raw).to_owned(), serde_json::Value::from(theme.as_str())))
        .collect();
    serde_json::Value::Object(map).to_string()
}

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_owned())
}
