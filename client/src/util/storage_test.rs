use super::*;

#[test]
fn memory_storage_round_trips_values() {
    let store = MemoryStorage::new();
    assert!(store.is_empty());
    store.set("theme", "light");
    assert_eq!(store.get("theme").as_deref(), Some("light"));
    store.set("theme", "dark");
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_storage_remove_is_silent_for_missing_keys() {
    let store = MemoryStorage::with_entries([("a", "1")]);
    store.remove("missing");
    store.remove("a");
    assert!(store.is_empty());
}

#[test]
fn memory_storage_clones_share_entries() {
    let store = MemoryStorage::new();
    let other = store.clone();
    other.set("k", "v");
    assert_eq!(store.get("k").as_deref(), Some("v"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_off_browser() {
    let store = BrowserStorage;
    store.set("theme", "light");
    assert_eq!(store.get("theme"), None);
    store.remove("theme");
}
