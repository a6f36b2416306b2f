use std::collections::BTreeMap;
use std::sync::Arc;

use leptos::prelude::Owner;

use super::*;
use crate::state::theme::{ThemeContext, first_pass_theme};
use crate::util::document::MemorySurface;
use crate::util::storage::{BrowserStorage, MemoryStorage};

fn store_for(legacy: Option<&str>) -> MemoryStorage {
    match legacy {
        Some(value) => MemoryStorage::with_entries([(LEGACY_DARK_MODE_KEY, value)]),
        None => MemoryStorage::new(),
    }
}

#[test]
fn pre_paint_and_mounted_context_agree_for_every_stored_flag() {
    for stored in [None, Some("true"), Some("false"), Some("false "), Some("maybe")] {
        let owner = Owner::new();
        owner.with(|| {
            let store = store_for(stored);
            let pre_paint_surface = MemorySurface::new();
            let before = apply_pre_paint(&store, &pre_paint_surface);

            let runtime_surface = MemorySurface::new();
            let ctx = ThemeContext::new(Arc::new(store.clone()), Arc::new(runtime_surface.clone()));
            let after = ctx.mount();

            assert_eq!(before, after, "stored {stored:?}");
            assert_eq!(pre_paint_surface.snapshot().root_dark, runtime_surface.snapshot().root_dark);
        });
    }
}

#[test]
fn absent_preference_matches_first_pass() {
    let theme = pre_paint_theme(&MemoryStorage::new(), &MemorySurface::new());
    assert_eq!(theme, first_pass_theme());
    assert_eq!(theme, Theme::Dark);
}

#[test]
fn stored_flags_map_to_expected_themes() {
    let surface = MemorySurface::new();
    assert_eq!(pre_paint_theme(&store_for(Some("true")), &surface), Theme::Dark);
    assert_eq!(pre_paint_theme(&store_for(Some("false")), &surface), Theme::Light);
}

#[test]
fn stored_preference_beats_ambient() {
    let store = MemoryStorage::with_entries([(THEME_KEY, "dark")]);
    assert_eq!(pre_paint_theme(&store, &MemorySurface::with_ambient(Theme::Light)), Theme::Dark);
}

#[test]
fn ambient_dark_without_preference_applies_dark_marker() {
    let surface = MemorySurface::with_ambient(Theme::Dark);
    assert_eq!(apply_pre_paint(&MemoryStorage::new(), &surface), Theme::Dark);
    assert!(surface.has_dark_marker());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn unavailable_storage_defaults_to_dark() {
    assert_eq!(pre_paint_theme(&BrowserStorage, &MemorySurface::new()), Theme::Dark);
}

#[test]
fn script_reads_both_keys_and_sets_marker() {
    let script = pre_paint_script();
    assert!(script.contains("getItem(\"theme\")"));
    assert!(script.contains("getItem(\"darkMode\")"));
    assert!(script.contains("classList.toggle(\"dark\",d)"));
    assert!(script.contains("setAttribute(\"data-theme\",t)"));
    assert!(script.contains("(prefers-color-scheme: dark)"));
}

#[test]
fn script_falls_back_to_dark_and_never_fetches() {
    let script = pre_paint_script();
    assert!(script.contains("if(!t){t=\"dark\";}"));
    assert!(script.contains("catch(e){t=null;}"));
    assert!(!script.contains("fetch"));
}

#[test]
fn script_braces_are_balanced() {
    let script = pre_paint_script();
    let open = script.matches('{').count();
    let close = script.matches('}').count();
    assert_eq!(open, close);
    assert!(script.starts_with("(function(){"));
    assert!(script.ends_with("})();"));
}

const STORED_SAMPLES: [Option<&str>; 10] = [
    None,
    Some("true"),
    Some("false"),
    Some("light"),
    Some("dark"),
    Some("purple"),
    Some(" light"),
    Some("false "),
    Some("Dark"),
    Some("__proto__"),
];

/// JSON object the script embeds between `start` and `end`.
fn embedded_table(script: &str, start: &str, end: &str) -> BTreeMap<String, String> {
    let from = script.find(start).expect("table start") + start.len();
    let to = from + script[from..].find(end).expect("table end");
    serde_json::from_str(&script[from..to]).expect("table is JSON")
}

/// The script's decision: canonical table, then legacy table, then ambient,
/// then dark. Lookups are exact own-property matches.
fn script_decision(script: &str, theme: Option<&str>, legacy: Option<&str>, ambient: Option<Theme>) -> Theme {
    let stored = embedded_table(script, "var T=", ";var L=");
    let flags = embedded_table(script, ";var L=", ";var h=");
    theme
        .and_then(|raw| stored.get(raw))
        .or_else(|| legacy.and_then(|raw| flags.get(raw)))
        .map(|name| name.parse::<Theme>().expect("table maps to a theme"))
        .or(ambient)
        .unwrap_or(Theme::Dark)
}

#[test]
fn script_and_rust_resolution_agree_on_every_stored_combination() {
    let script = pre_paint_script();
    assert!(script.contains("Object.prototype.hasOwnProperty.call(o,k)"));
    assert!(script.contains("if(!t){t=\"dark\";}"));

    for theme in STORED_SAMPLES {
        for legacy in STORED_SAMPLES {
            for ambient in [None, Some(Theme::Dark), Some(Theme::Light)] {
                let mut entries = Vec::new();
                if let Some(value) = theme {
                    entries.push((THEME_KEY, value));
                }
                if let Some(value) = legacy {
                    entries.push((LEGACY_DARK_MODE_KEY, value));
                }
                let store = MemoryStorage::with_entries(entries);
                let surface = match ambient {
                    Some(ambient) => MemorySurface::with_ambient(ambient),
                    None => MemorySurface::new(),
                };

                assert_eq!(
                    pre_paint_theme(&store, &surface),
                    script_decision(&script, theme, legacy, ambient),
                    "theme={theme:?} legacy={legacy:?} ambient={ambient:?}"
                );
            }
        }
    }
}

#[test]
fn script_tables_match_rust_tables() {
    let script = pre_paint_script();
    let stored = embedded_table(&script, "var T=", ";var L=");
    let flags = embedded_table(&script, ";var L=", ";var h=");
    for (raw, theme) in STORED_THEMES {
        assert_eq!(stored.get(raw).map(String::as_str), Some(theme.as_str()));
    }
    for (raw, theme) in LEGACY_FLAGS {
        assert_eq!(flags.get(raw).map(String::as_str), Some(theme.as_str()));
    }
    assert_eq!(stored.len(), STORED_THEMES.len());
    assert_eq!(flags.len(), LEGACY_FLAGS.len());
}
