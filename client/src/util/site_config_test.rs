use super::*;

#[test]
fn build_var_unknown_name_is_none() {
    assert_eq!(build_var("PATH"), None);
    assert_eq!(build_var("FOLIO_SOMETHING_ELSE"), None);
}

#[test]
fn load_matches_lookup_when_valid() {
    if let Ok(expected) = SiteConfig::from_lookup(build_var) {
        assert_eq!(load(), expected);
    }
}

#[test]
fn load_always_yields_usable_keys() {
    let config = load();
    assert!(!config.responses_key.is_empty());
    assert!(!config.session_key.is_empty());
    assert!(!config.theme_key.is_empty());
}
