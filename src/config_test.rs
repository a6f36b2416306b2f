use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = SiteConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(
        cfg,
        SiteConfig { port: DEFAULT_PORT, api_upstream: None, api_timeout_secs: DEFAULT_API_TIMEOUT_SECS, site_root: None }
    );
}

#[test]
fn parses_overrides_and_trims_trailing_slash() {
    let cfg = SiteConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("API_UPSTREAM_URL", "https://deploy.example.test/"),
        ("API_TIMEOUT_SECS", "5"),
        ("SITE_ROOT", "/srv/site"),
    ]))
    .unwrap();

    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_upstream.as_deref(), Some("https://deploy.example.test"));
    assert_eq!(cfg.api_timeout_secs, 5);
    assert_eq!(cfg.site_root, Some(PathBuf::from("/srv/site")));
}

#[test]
fn invalid_numbers_fall_back_to_defaults() {
    let cfg = SiteConfig::from_lookup(lookup(&[("PORT", "eighty"), ("API_TIMEOUT_SECS", "-1")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_timeout_secs, DEFAULT_API_TIMEOUT_SECS);
}

#[test]
fn blank_upstream_is_treated_as_unset() {
    let cfg = SiteConfig::from_lookup(lookup(&[("API_UPSTREAM_URL", "  ")])).unwrap();
    assert_eq!(cfg.api_upstream, None);
}

#[test]
fn non_http_upstream_is_rejected() {
    let err = SiteConfig::from_lookup(lookup(&[("API_UPSTREAM_URL", "deploy.internal:9000")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidUpstream("deploy.internal:9000".to_owned()));
}
