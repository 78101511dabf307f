//! The whole registry as one value, for export and re-import.

use std::{borrow::Cow, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    aside::{ASIDE_TYPES, AsideKind},
    error::{CoreError, Result},
    nav::{HEADER, Header},
    site::{SITE, SiteMetadata},
    tags::{FRONTMATTER_TAGS, TagVocabulary},
};

/// Anchor target of the "skip to content" link.
pub const SKIP_NAV_ID: &str = "skip-to-content";

/// Prefix of environment overrides, e.g. `SITECONF__SITE__URL`.
pub const ENV_PREFIX: &str = "SITECONF";

/// The compiled-in registry.
pub const REGISTRY: Registry = Registry {
    skip_nav_id: Cow::Borrowed(SKIP_NAV_ID),
    asides: Cow::Borrowed(&ASIDE_TYPES),
    site: SITE,
    header: HEADER,
    tags: FRONTMATTER_TAGS,
};

/// Site metadata, header links, tag vocabulary, aside kinds and the
/// skip-nav anchor.
///
/// Scalars come first so the TOML form keeps them above its tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registry {
    pub skip_nav_id: Cow<'static, str>,
    pub asides: Cow<'static, [AsideKind]>,
    pub site: SiteMetadata,
    pub header: Header,
    pub tags: TagVocabulary,
}

impl Default for Registry {
    fn default() -> Self {
        REGISTRY
    }
}

impl Registry {
    /// The compiled-in registry.
    pub fn builtin() -> Self {
        REGISTRY
    }

    /// Load a registry from a TOML or JSON file (picked by extension) and
    /// validate it.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Registry file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let registry = match Format::from_path(path) {
            Format::Json => Self::from_json(&content),
            Format::Toml => Self::from_toml(&content),
        }
        .map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse registry file: {}", path.display()),
                e,
            )
        })?;

        registry.validate()?;
        tracing::debug!(path = %path.display(), tags = registry.tags.len(), "Loaded registry");
        Ok(registry)
    }

    /// Like [`Registry::load`], then overlay `SITECONF__SITE__*` environment
    /// variables on the site metadata.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        Self::load_with(path, environment())
    }

    fn load_with(path: &Path, env: config::Environment) -> Result<Self> {
        let mut registry = Self::load(path)?;
        registry.site.apply_env(env)?;
        registry.validate()?;
        Ok(registry)
    }

    /// Check every invariant, returning the first violation.
    pub fn validate(&self) -> Result<()> {
        self.site.validate()?;
        self.header.validate()?;
        self.tags.validate()?;
        self.validate_tags()?;
        self.validate_asides()?;

        if self.skip_nav_id.trim().is_empty() {
            return Err(CoreError::validation("skipNavId", "cannot be empty"));
        }
        if self.skip_nav_id.contains(char::is_whitespace) {
            return Err(CoreError::validation(
                "skipNavId",
                format!("{:?} is not a valid HTML id", self.skip_nav_id),
            ));
        }

        Ok(())
    }

    // Content tags resolve through `FrontmatterTag`, so a loaded vocabulary
    // must match the compiled one exactly.
    fn validate_tags(&self) -> Result<()> {
        if self.tags != FRONTMATTER_TAGS {
            return Err(CoreError::validation(
                "tags",
                format!(
                    "expected {:?}, found {:?}",
                    FRONTMATTER_TAGS.iter().map(|e| &*e.name).collect::<Vec<_>>(),
                    self.tags.iter().map(|e| &*e.name).collect::<Vec<_>>()
                ),
            ));
        }
        Ok(())
    }

    fn validate_asides(&self) -> Result<()> {
        if *self.asides != ASIDE_TYPES {
            return Err(CoreError::validation(
                "asides",
                format!(
                    "expected {:?}, found {:?}",
                    ASIDE_TYPES.map(AsideKind::as_str),
                    self.asides.iter().map(|k| k.as_str()).collect::<Vec<_>>()
                ),
            ));
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize in `format`.
    pub fn export(&self, format: Format) -> Result<String> {
        match format {
            Format::Json => self.to_json(),
            Format::Toml => self.to_toml(),
        }
    }
}

/// Data file format of an exported registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Json,
    Toml,
}

impl Format {
    /// `.json` files are JSON, everything else is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

pub(crate) fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
}
