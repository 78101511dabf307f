//! Export command - write the compiled-in registry as a data file

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use siteconf_core::{Format, Registry};

/// Run the export command.
///
/// Writes to `output` when given, stdout otherwise. Without an explicit
/// `format` the output file's extension decides, defaulting to JSON.
pub fn run(format: Option<Format>, output: Option<&Path>) -> Result<()> {
    let format = format
        .or_else(|| output.map(Format::from_path))
        .unwrap_or_default();
    tracing::info!(?format, ?output, "Exporting registry");

    let content = Registry::builtin().export(format)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .wrap_err_with(|| format!("Failed to create {}", parent.display()))?;
            }
            std::fs::write(path, content)
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            println!("✓ Wrote {}", path.display());
        }
        None => print!("{content}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_json_file_reloads() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("data").join("site.json");

        run(None, Some(&path)).expect("export");

        let loaded = Registry::load(&path).expect("load");
        assert_eq!(loaded, Registry::builtin());
    }

    #[test]
    fn test_export_format_overrides_extension() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("site.json");

        run(Some(Format::Toml), Some(&path)).expect("export");

        let content = std::fs::read_to_string(&path).expect("read");
        let parsed = Registry::from_toml(&content).expect("toml");
        assert_eq!(parsed, Registry::builtin());
    }
}
