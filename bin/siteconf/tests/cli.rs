//! Integration tests for the siteconf commands.
//!
//! Only `test_check_config_with_env_override` touches the process
//! environment; the other tests never load a registry file with overrides.

use siteconf::cmd;
use siteconf_core::{Format, Registry};

#[test]
fn test_check_builtin_registry() {
    let result = cmd::check::check(None);
    assert!(!result.has_errors(), "{:?}", result.errors);
    assert!(!result.has_warnings(), "{:?}", result.warnings);
}

#[test]
fn test_check_config_with_env_override() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("site.toml");
    std::fs::write(&path, Registry::builtin().export(Format::Toml).unwrap()).expect("write");

    let result = cmd::check::check(Some(&path));
    assert!(!result.has_errors(), "{:?}", result.errors);
    assert!(!result.has_warnings(), "{:?}", result.warnings);

    // SAFETY: no other test in this binary reads the SITECONF__ variables.
    unsafe { std::env::set_var("SITECONF__SITE__URL", "https://paulinhoprado.dev/") };
    let warned = cmd::check::check(Some(&path));
    let strict = cmd::check::run(Some(&path), true);

    unsafe { std::env::set_var("SITECONF__SITE__LANG", "pt_BR") };
    let invalid = cmd::check::check(Some(&path));

    unsafe {
        std::env::remove_var("SITECONF__SITE__URL");
        std::env::remove_var("SITECONF__SITE__LANG");
    }

    assert!(!warned.has_errors(), "{:?}", warned.errors);
    assert_eq!(warned.warnings.len(), 1);
    assert!(warned.warnings[0].contains("trailing slash"));
    assert!(strict.unwrap_err().to_string().contains("strict mode"));

    assert_eq!(invalid.errors.len(), 1);
    assert!(invalid.errors[0].contains("site.lang"));
}

#[test]
fn test_export_then_check() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("site.json");

    cmd::export::run(None, Some(&path)).expect("export");
    let loaded = Registry::load(&path).expect("load");
    assert_eq!(loaded, Registry::builtin());
}

#[test]
fn test_tag_command() {
    assert!(cmd::tag::run(&["Front-end".to_string()]).is_ok());
    assert!(cmd::tag::run(&[]).is_ok());
    assert!(cmd::tag::run(&["Rust".to_string()]).is_err());
}
