//! Site-wide metadata.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    validate,
};

/// Metadata for the site, read for page titles, meta tags, RSS and sitemaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteMetadata {
    /// Base URL of the site, used in sitemap generation.
    pub url: Cow<'static, str>,

    /// Site-wide title.
    pub title: Cow<'static, str>,

    /// Used on the index page and as a fallback if no title is set.
    pub title_default: Cow<'static, str>,

    /// Used in meta tags, the RSS feed and other places.
    pub description: Cow<'static, str>,

    /// Language of the `<html>` tag.
    pub lang: Cow<'static, str>,

    /// Image inside `public/` used as the default og:image.
    pub default_og_image: Cow<'static, str>,

    /// Default author name added to meta tags.
    pub default_author: Cow<'static, str>,
}

/// The blog's metadata.
pub const SITE: SiteMetadata = SiteMetadata {
    url: Cow::Borrowed("https://paulinhoprado.dev"),
    title: Cow::Borrowed("paulinhoprado.dev"),
    title_default: Cow::Borrowed("paulinhoprado.dev"),
    description: Cow::Borrowed(
        "Me chamo Paulo Cesar Prado, sou Software Engineer na Globo.com e entusiasta em boas \
         práticas de programação.",
    ),
    lang: Cow::Borrowed("pt-BR"),
    default_og_image: Cow::Borrowed("/og-image.png"),
    default_author: Cow::Borrowed("Paulo Prado"),
};

impl SiteMetadata {
    /// `(key, value)` pairs in declaration order, keyed the way they are
    /// serialized.
    pub fn entries(&self) -> [(&'static str, &str); 7] {
        [
            ("url", &*self.url),
            ("title", &*self.title),
            ("titleDefault", &*self.title_default),
            ("description", &*self.description),
            ("lang", &*self.lang),
            ("defaultOgImage", &*self.default_og_image),
            ("defaultAuthor", &*self.default_author),
        ]
    }

    /// Get the full URL for a site path.
    pub fn url_for(&self, path: &str) -> String {
        let base = self.url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Document title for a page, falling back to `title_default`.
    pub fn page_title(&self, page: Option<&str>) -> String {
        match page.map(str::trim) {
            Some(page) if !page.is_empty() => format!("{page} | {}", self.title),
            _ => self.title_default.to_string(),
        }
    }

    /// Absolute URL of the default og:image.
    pub fn og_image_url(&self) -> String {
        self.url_for(&self.default_og_image)
    }

    /// Check that every field is set, `url` is absolute and `lang` is a
    /// language tag.
    pub fn validate(&self) -> Result<()> {
        for (key, value) in self.entries() {
            if value.trim().is_empty() {
                return Err(CoreError::validation(
                    format!("site.{key}"),
                    "cannot be empty",
                ));
            }
        }

        if !validate::is_absolute_url(&self.url) {
            return Err(CoreError::validation(
                "site.url",
                format!("{:?} is not an absolute http(s) URL", self.url),
            ));
        }

        if !validate::is_language_tag(&self.lang) {
            return Err(CoreError::validation(
                "site.lang",
                format!("{:?} is not a language tag", self.lang),
            ));
        }

        Ok(())
    }

    /// Overlay `SITECONF__SITE__*` style variables from `env` on top of these
    /// values.
    pub(crate) fn apply_env(&mut self, env: config::Environment) -> Result<()> {
        let settings = config::Config::builder().add_source(env).build()?;

        let fields: [(&str, &mut Cow<'static, str>); 7] = [
            ("site.url", &mut self.url),
            ("site.title", &mut self.title),
            ("site.title_default", &mut self.title_default),
            ("site.description", &mut self.description),
            ("site.lang", &mut self.lang),
            ("site.default_og_image", &mut self.default_og_image),
            ("site.default_author", &mut self.default_author),
        ];

        for (key, field) in fields {
            match settings.get_string(key) {
                Ok(value) => {
                    tracing::debug!(key, %value, "Overriding site metadata from environment");
                    *field = Cow::Owned(value);
                }
                Err(config::ConfigError::NotFound(_)) => {}
                Err(e) => return Err(e.into()),
            }
        }

        Ok(())
    }
}
