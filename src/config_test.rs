use std::collections::HashMap;

use super::*;
use crate::admin::CredentialVerifier;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |var| map.get(var).cloned()
}

#[test]
fn from_lookup_defaults_match_site_keys() {
    let cfg = SiteConfig::from_lookup(|_| None).unwrap();
    assert_eq!(cfg, SiteConfig::default());
    assert_eq!(cfg.responses_key, "contactResponses");
    assert_eq!(cfg.session_key, "isAdminLoggedIn");
    assert_eq!(cfg.theme_key, "theme");
    assert!(cfg.admin.verify("admin", "admin123"));
    assert!((cfg.header_offset_px - 80.0).abs() < f64::EPSILON);
    assert!((cfg.section_offset_px - 100.0).abs() < f64::EPSILON);
}

#[test]
fn from_lookup_applies_overrides() {
    let cfg = SiteConfig::from_lookup(lookup_from(&[
        ("FOLIO_RESPONSES_KEY", "inbox"),
        ("FOLIO_ADMIN_USERNAME", "owner"),
        ("FOLIO_ADMIN_PASSWORD", "hunter2"),
        ("FOLIO_HEADER_OFFSET_PX", " 64 "),
    ]))
    .unwrap();
    assert_eq!(cfg.responses_key, "inbox");
    assert!(cfg.admin.verify("owner", "hunter2"));
    assert!(!cfg.admin.verify("admin", "admin123"));
    assert!((cfg.header_offset_px - 64.0).abs() < f64::EPSILON);
}

#[test]
fn from_lookup_empty_value_errors() {
    let err = SiteConfig::from_lookup(lookup_from(&[("FOLIO_ADMIN_PASSWORD", "")])).unwrap_err();
    assert_eq!(err, ConfigError::Empty { var: "FOLIO_ADMIN_PASSWORD".to_owned() });
    assert!(err.to_string().contains("FOLIO_ADMIN_PASSWORD"));
}

#[test]
fn from_lookup_bad_offset_errors() {
    for bad in ["abc", "-5", "NaN", "inf"] {
        let err = SiteConfig::from_lookup(lookup_from(&[("FOLIO_SECTION_OFFSET_PX", bad)])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { .. }), "expected error for {bad}");
    }
}

#[test]
fn config_vars_lists_every_variable() {
    let seen = std::cell::RefCell::new(Vec::new());
    SiteConfig::from_lookup(|var| {
        seen.borrow_mut().push(var.to_owned());
        None
    })
    .unwrap();
    let mut seen = seen.into_inner();
    seen.sort_unstable();
    let mut expected: Vec<String> = CONFIG_VARS.iter().map(|v| (*v).to_owned()).collect();
    expected.sort_unstable();
    assert_eq!(seen, expected);
}
