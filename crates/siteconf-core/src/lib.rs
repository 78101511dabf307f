//! Siteconf Core Library
//!
//! Static site metadata, header navigation, the frontmatter tag vocabulary
//! and the aside kinds of the blog. Everything here is `const` data read by
//! the site generator and the content renderer at build time; reading it
//! performs no I/O and no validation.
//!
//! ```
//! use siteconf_core::{ASIDE_TYPES, FRONTMATTER_TAGS, SITE, SKIP_NAV_ID};
//!
//! assert_eq!(SITE.lang, "pt-BR");
//! assert_eq!(FRONTMATTER_TAGS.slug("Front-end"), Some("front-end"));
//! assert_eq!(ASIDE_TYPES.len(), 4);
//! assert_eq!(SKIP_NAV_ID, "skip-to-content");
//! ```
//!
//! [`Registry`] bundles all of it for export to, and loading from, JSON or
//! TOML files.

pub mod aside;
pub mod error;
pub mod nav;
pub mod registry;
pub mod site;
pub mod tags;
pub mod validate;

pub use aside::{ASIDE_TYPES, AsideKind};
pub use error::{CoreError, Result};
pub use nav::{ExternalLink, HEADER, Header, InternalLink, LinkProps, LinkTarget};
pub use registry::{ENV_PREFIX, Format, REGISTRY, Registry, SKIP_NAV_ID};
pub use site::{SITE, SiteMetadata};
pub use tags::{FRONTMATTER_TAGS, FrontmatterTag, TagEntry, TagVocabulary};
