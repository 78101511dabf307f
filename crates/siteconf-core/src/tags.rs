//! Frontmatter tag vocabulary.
//!
//! [`FrontmatterTag`] and [`FRONTMATTER_TAGS`] are generated from the same
//! list, so a tag can't exist in one and be missing from the other.

use std::{borrow::Cow, collections::HashSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    validate,
};

macro_rules! frontmatter_tags {
    ($($variant:ident => ($name:literal, $slug:literal)),+ $(,)?) => {
        /// A tag content may declare in its frontmatter.
        ///
        /// Serialized as its human-readable name.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum FrontmatterTag {
            $(
                #[serde(rename = $name)]
                $variant,
            )+
        }

        impl FrontmatterTag {
            /// Every tag, in display order.
            pub const ALL: &'static [FrontmatterTag] = &[$(FrontmatterTag::$variant),+];

            /// Human-readable name, as written in frontmatter.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            /// URL-safe slug.
            pub const fn slug(self) -> &'static str {
                match self {
                    $(Self::$variant => $slug,)+
                }
            }
        }

        const TAG_ENTRIES: &[TagEntry] = &[$(TagEntry::new($name, $slug)),+];
    };
}

frontmatter_tags! {
    Testes => ("Testes", "testes"),
    Algoritmos => ("Algoritmos", "algoritmos"),
    FrontEnd => ("Front-end", "front-end"),
}

/// Name to slug pairs, in display order.
pub const FRONTMATTER_TAGS: TagVocabulary = TagVocabulary {
    entries: Cow::Borrowed(TAG_ENTRIES),
};

impl FrontmatterTag {
    /// Look a tag up by its frontmatter name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|tag| tag.name() == name)
    }

    /// Look a tag up by its slug.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|tag| tag.slug() == slug)
    }

    /// Resolve the tag names of one content file, failing on the first name
    /// outside the vocabulary.
    pub fn resolve_all<I, S>(names: I) -> Result<Vec<Self>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names.into_iter().map(|name| name.as_ref().parse()).collect()
    }
}

impl fmt::Display for FrontmatterTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FrontmatterTag {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| CoreError::UnknownTag(s.to_string()))
    }
}

/// One vocabulary pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagEntry {
    pub name: Cow<'static, str>,
    pub slug: Cow<'static, str>,
}

impl TagEntry {
    pub const fn new(name: &'static str, slug: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            slug: Cow::Borrowed(slug),
        }
    }
}

impl From<FrontmatterTag> for TagEntry {
    fn from(tag: FrontmatterTag) -> Self {
        Self::new(tag.name(), tag.slug())
    }
}

/// Ordered, unique name to slug mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagVocabulary {
    entries: Cow<'static, [TagEntry]>,
}

impl TagVocabulary {
    pub fn new(entries: Vec<TagEntry>) -> Self {
        Self {
            entries: Cow::Owned(entries),
        }
    }

    /// Slug for a tag name.
    pub fn slug(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &*entry.slug)
    }

    /// Tag name for a slug.
    pub fn name_for_slug(&self, slug: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.slug == slug)
            .map(|entry| &*entry.name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.slug(name).is_some()
    }

    /// Entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = &TagEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check names and slugs are unique and slugs are URL-safe.
    pub fn validate(&self) -> Result<()> {
        let mut names = HashSet::new();
        let mut slugs = HashSet::new();

        for (i, entry) in self.entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(CoreError::validation(
                    format!("tags[{i}].name"),
                    "cannot be empty",
                ));
            }
            if !names.insert(&*entry.name) {
                return Err(CoreError::validation(
                    format!("tags[{i}].name"),
                    format!("duplicate tag name {:?}", entry.name),
                ));
            }
            if !validate::is_slug(&entry.slug) {
                return Err(CoreError::validation(
                    format!("tags[{i}].slug"),
                    format!("{:?} is not a URL-safe slug", entry.slug),
                ));
            }
            if !slugs.insert(&*entry.slug) {
                return Err(CoreError::validation(
                    format!("tags[{i}].slug"),
                    format!("duplicate slug {:?}", entry.slug),
                ));
            }
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a TagVocabulary {
    type Item = &'a TagEntry;
    type IntoIter = std::slice::Iter<'a, TagEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
