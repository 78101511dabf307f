//! Check command - validate the registry

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use siteconf_core::Registry;

/// Longest description search engines show in full.
const MAX_DESCRIPTION_CHARS: usize = 160;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates the registry at `config_path`, or the compiled-in one when no
/// path is given.
pub fn run(config_path: Option<&Path>, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking registry");

    let result = check(config_path);

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Collect errors and warnings without printing a summary.
pub fn check(config_path: Option<&Path>) -> ValidationResult {
    let mut result = ValidationResult::default();

    println!("Checking registry...");
    let registry = match config_path {
        Some(path) => match Registry::load_with_env(path) {
            Ok(registry) => registry,
            Err(e) => {
                result.add_error(format!("{}: {e}", path.display()));
                println!("  ✗ Registry invalid: {e}");
                return result;
            }
        },
        None => {
            let registry = Registry::builtin();
            if let Err(e) = registry.validate() {
                result.add_error(format!("built-in registry: {e}"));
                println!("  ✗ Built-in registry invalid: {e}");
                return result;
            }
            registry
        }
    };
    println!("  ✓ Registry valid");

    println!("\nChecking registry values...");
    check_values(&registry, &mut result);

    result
}

/// Non-fatal issues that slip past `Registry::validate`.
fn check_values(registry: &Registry, result: &mut ValidationResult) {
    let site = &registry.site;

    if site.url.ends_with('/') {
        result.add_warning("site.url should not have a trailing slash");
    }

    let description_chars = site.description.chars().count();
    if description_chars > MAX_DESCRIPTION_CHARS {
        result.add_warning(format!(
            "site.description is {description_chars} characters, search engines truncate after \
             {MAX_DESCRIPTION_CHARS}"
        ));
    }

    if !site.default_og_image.starts_with('/') {
        result.add_warning("site.defaultOgImage should be a path inside public/, starting with '/'");
    }

    for link in registry.header.external.iter() {
        if link.url.starts_with("http://") {
            result.add_warning(format!("header link {:?} is not served over https", link.title));
        }
    }

    println!(
        "  ✓ {} internal link(s), {} external link(s), {} tag(s)",
        registry.header.internal.len(),
        registry.header.external.len(),
        registry.tags.len()
    );
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;

    #[test]
    fn test_builtin_passes() {
        let result = check(None);
        assert!(!result.has_errors(), "{:?}", result.errors);
        assert!(!result.has_warnings(), "{:?}", result.warnings);
        assert!(run(None, true).is_ok());
    }

    #[test]
    fn test_warnings_for_trailing_slash_and_http() {
        let mut registry = Registry::builtin();
        registry.site.url = Cow::Borrowed("https://paulinhoprado.dev/");
        registry.header.external.to_mut()[0].url = Cow::Borrowed("http://github.com/paulocesarjr");

        let mut result = ValidationResult::default();
        check_values(&registry, &mut result);

        assert_eq!(result.warnings.len(), 2);
        assert!(result.warnings[0].contains("trailing slash"));
        assert!(result.warnings[1].contains("\"GitHub\""));
    }

    #[test]
    fn test_warning_for_long_description() {
        let mut registry = Registry::builtin();
        registry.site.description = Cow::Owned("a".repeat(MAX_DESCRIPTION_CHARS + 1));

        let mut result = ValidationResult::default();
        check_values(&registry, &mut result);

        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("161 characters"));
    }

    #[test]
    fn test_strict_fails_on_warnings() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("site.json");
        let mut registry = Registry::builtin();
        registry.site.url = Cow::Borrowed("https://paulinhoprado.dev/");
        std::fs::write(&path, registry.to_json().unwrap()).expect("write");

        assert!(run(Some(&path), false).is_ok());
        let err = run(Some(&path), true).unwrap_err();
        assert!(err.to_string().contains("strict mode"));
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("site.json");
        let content = Registry::builtin()
            .to_json()
            .unwrap()
            .replace("\"/blog/\"", "\"blog/\"");
        std::fs::write(&path, content).expect("write");

        let result = check(Some(&path));
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("header.internal[0].url"));
        assert!(run(Some(&path), false).is_err());
    }
}
