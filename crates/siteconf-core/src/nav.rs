//! Header navigation links.

use std::{borrow::Cow, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    validate,
};

/// Links shown in the header, each list in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Links to other subpages shown in the header navigation.
    pub internal: Cow<'static, [InternalLink]>,

    /// Off-site links (e.g. social media) shown on the right side of the header.
    pub external: Cow<'static, [ExternalLink]>,
}

/// Same-site navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalLink {
    pub title: Cow<'static, str>,
    /// Site path, always starting with `/`.
    pub url: Cow<'static, str>,
}

/// Off-site link with its presentation attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLink {
    pub title: Cow<'static, str>,
    /// Absolute `http(s)` URL.
    pub url: Cow<'static, str>,
    #[serde(default, skip_serializing_if = "LinkProps::is_empty")]
    pub props: LinkProps,
}

/// Presentation attributes for an external link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<LinkTarget>,
}

/// Browsing context an anchor opens in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkTarget {
    #[serde(rename = "_blank")]
    Blank,
    #[serde(rename = "_self")]
    SelfFrame,
    #[serde(rename = "_parent")]
    Parent,
    #[serde(rename = "_top")]
    Top,
}

const INTERNAL_LINKS: &[InternalLink] = &[
    InternalLink::new("Artigos", "/blog/"),
    InternalLink::new("Eu", "/eu/"),
];

const EXTERNAL_LINKS: &[ExternalLink] = &[
    ExternalLink::new("GitHub", "https://github.com/paulocesarjr", LinkProps::NEW_TAB),
    ExternalLink::new(
        "LinkedIn",
        "https://www.linkedin.com/in/paulinhoprado",
        LinkProps::NEW_TAB,
    ),
    ExternalLink::new("Dev.to", "https://dev.to/paulinhoprado", LinkProps::NEW_TAB),
];

/// Links used in the header.
pub const HEADER: Header = Header {
    internal: Cow::Borrowed(INTERNAL_LINKS),
    external: Cow::Borrowed(EXTERNAL_LINKS),
};

impl InternalLink {
    pub const fn new(title: &'static str, url: &'static str) -> Self {
        Self {
            title: Cow::Borrowed(title),
            url: Cow::Borrowed(url),
        }
    }
}

impl ExternalLink {
    pub const fn new(title: &'static str, url: &'static str, props: LinkProps) -> Self {
        Self {
            title: Cow::Borrowed(title),
            url: Cow::Borrowed(url),
            props,
        }
    }

    /// Anchor attributes besides `href`, in render order.
    ///
    /// A `_blank` target also gets `rel="noopener noreferrer"`.
    pub fn html_attributes(&self) -> Vec<(&'static str, &'static str)> {
        let mut attrs = Vec::new();
        if let Some(target) = self.props.target {
            attrs.push(("target", target.as_str()));
            if target == LinkTarget::Blank {
                attrs.push(("rel", "noopener noreferrer"));
            }
        }
        attrs
    }
}

impl LinkProps {
    /// Open the link in a new tab.
    pub const NEW_TAB: Self = Self {
        target: Some(LinkTarget::Blank),
    };

    pub fn is_empty(&self) -> bool {
        self.target.is_none()
    }
}

impl LinkTarget {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blank => "_blank",
            Self::SelfFrame => "_self",
            Self::Parent => "_parent",
            Self::Top => "_top",
        }
    }
}

impl fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LinkTarget {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "_blank" => Ok(Self::Blank),
            "_self" => Ok(Self::SelfFrame),
            "_parent" => Ok(Self::Parent),
            "_top" => Ok(Self::Top),
            other => Err(CoreError::UnknownLinkTarget(other.to_string())),
        }
    }
}

impl Header {
    /// Check titles are set, internal URLs are site paths and external URLs
    /// are absolute.
    pub fn validate(&self) -> Result<()> {
        for (i, link) in self.internal.iter().enumerate() {
            let field = format!("header.internal[{i}]");
            if link.title.trim().is_empty() {
                return Err(CoreError::validation(
                    format!("{field}.title"),
                    "cannot be empty",
                ));
            }
            if !validate::is_site_path(&link.url) {
                return Err(CoreError::validation(
                    format!("{field}.url"),
                    format!("{:?} must start with '/'", link.url),
                ));
            }
        }

        for (i, link) in self.external.iter().enumerate() {
            let field = format!("header.external[{i}]");
            if link.title.trim().is_empty() {
                return Err(CoreError::validation(
                    format!("{field}.title"),
                    "cannot be empty",
                ));
            }
            if !validate::is_absolute_url(&link.url) {
                return Err(CoreError::validation(
                    format!("{field}.url"),
                    format!("{:?} is not an absolute http(s) URL", link.url),
                ));
            }
        }

        Ok(())
    }
}
