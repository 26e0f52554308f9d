//! Page sections and their identifiers.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Kind of block a section renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Navigation bar
    Header,
    /// Headline with call to action
    Hero,
    /// Feature grid
    Features,
    /// Pricing tiers
    Pricing,
    /// Page footer
    Footer,
    /// Customer quotes (reserved)
    Testimonials,
    /// Standalone call to action (reserved)
    Cta,
}

impl SectionKind {
    /// Every section kind, including the reserved ones.
    pub const ALL: [Self; 7] = [
        Self::Header,
        Self::Hero,
        Self::Features,
        Self::Pricing,
        Self::Footer,
        Self::Testimonials,
        Self::Cta,
    ];

    /// Returns the lowercase token used in documents.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Hero => "hero",
            Self::Features => "features",
            Self::Pricing => "pricing",
            Self::Footer => "footer",
            Self::Testimonials => "testimonials",
            Self::Cta => "cta",
        }
    }

    /// Reserved kinds can be stored but are not offered in the section palette.
    #[must_use]
    pub const fn is_reserved(&self) -> bool {
        matches!(self, Self::Testimonials | Self::Cta)
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == token)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown section type '{s}'. Must be one of: header, hero, features, pricing, footer, testimonials, cta"
                )
            })
    }
}

/// Opaque section identifier.
///
/// Only used for identity and removal, never for ordering. Imported
/// documents may carry any string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SectionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for SectionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One block in the page layout.
///
/// Equality compares `id` and `kind` only; `content` is an opaque payload
/// the editor never inspects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionItem {
    /// Stable identifier
    pub id: SectionId,
    /// Section kind
    #[serde(rename = "type")]
    pub kind: SectionKind,
    /// Free-form payload owned by the renderer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<serde_json::Value>,
}

impl SectionItem {
    /// Creates a section with a freshly generated id.
    #[must_use]
    pub fn new(kind: SectionKind) -> Self {
        Self {
            id: SectionId::generate(),
            kind,
            content: None,
        }
    }

    /// Creates a section with a caller-chosen id.
    pub fn with_id(id: impl Into<SectionId>, kind: SectionKind) -> Self {
        Self {
            id: id.into(),
            kind,
            content: None,
        }
    }

    /// Equality that also compares `content`.
    ///
    /// `==` only looks at id and kind; use this when the payload matters.
    #[must_use]
    pub fn is_identical(&self, other: &Self) -> bool {
        self == other && self.content == other.content
    }
}

impl PartialEq for SectionItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.kind == other.kind
    }
}

impl Eq for SectionItem {}
