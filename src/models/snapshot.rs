//! Page layout and configuration snapshots.

use crate::models::{SectionId, SectionItem, SectionKind, ThemeConfig, ThemeUpdate};
use serde::{Deserialize, Serialize};

/// Ordered list of sections, top to bottom.
///
/// Duplicate kinds are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layout {
    sections: Vec<SectionItem>,
}

impl Layout {
    /// Creates an empty layout.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    /// Builds a layout from section kinds, generating fresh ids.
    pub fn from_kinds(kinds: impl IntoIterator<Item = SectionKind>) -> Self {
        Self {
            sections: kinds.into_iter().map(SectionItem::new).collect(),
        }
    }

    /// Starting layout for a new page: header, hero, features.
    #[must_use]
    pub fn starter() -> Self {
        Self::from_kinds([SectionKind::Header, SectionKind::Hero, SectionKind::Features])
    }

    /// Appends a new section of `kind` and returns its id.
    pub fn add_section(&mut self, kind: SectionKind) -> SectionId {
        let item = SectionItem::new(kind);
        let id = item.id.clone();
        self.sections.push(item);
        id
    }

    /// Removes the first section with `id`.
    ///
    /// Unknown ids are ignored. Returns the removed section, if any.
    pub fn remove_section(&mut self, id: &SectionId) -> Option<SectionItem> {
        let index = self.sections.iter().position(|s| &s.id == id)?;
        Some(self.sections.remove(index))
    }

    /// Finds a section by id.
    #[must_use]
    pub fn get(&self, id: &SectionId) -> Option<&SectionItem> {
        self.sections.iter().find(|s| &s.id == id)
    }

    /// Returns true if a section with `id` exists.
    #[must_use]
    pub fn contains(&self, id: &SectionId) -> bool {
        self.get(id).is_some()
    }

    /// Sections in render order.
    #[must_use]
    pub fn sections(&self) -> &[SectionItem] {
        &self.sections
    }

    /// Section kinds in render order.
    pub fn kinds(&self) -> impl Iterator<Item = SectionKind> + '_ {
        self.sections.iter().map(|s| s.kind)
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns true if the layout has no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Equality that also compares section `content`.
    #[must_use]
    pub fn is_identical(&self, other: &Self) -> bool {
        self.sections.len() == other.sections.len()
            && self
                .sections
                .iter()
                .zip(&other.sections)
                .all(|(a, b)| a.is_identical(b))
    }
}

impl From<Vec<SectionItem>> for Layout {
    fn from(sections: Vec<SectionItem>) -> Self {
        Self { sections }
    }
}

/// Complete, independent copy of what the page looks like at one instant.
///
/// All fields are owned values, so `clone()` is a deep structural copy:
/// no stored snapshot can observe later edits to the live one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Theme settings
    pub theme: ThemeConfig,
    /// Sections in render order
    pub layout: Layout,
}

impl Snapshot {
    /// Creates a snapshot from its parts.
    #[must_use]
    pub const fn new(theme: ThemeConfig, layout: Layout) -> Self {
        Self { theme, layout }
    }

    /// Default theme with the starter layout.
    #[must_use]
    pub fn starter() -> Self {
        Self::new(ThemeConfig::default(), Layout::starter())
    }

    /// Merges theme fields. See [`ThemeConfig::set_theme_fields`].
    pub fn set_theme_fields(&mut self, update: ThemeUpdate) -> &ThemeConfig {
        self.theme.set_theme_fields(update)
    }

    /// Appends a section and returns its new id. See [`Layout::add_section`].
    pub fn add_section(&mut self, kind: SectionKind) -> SectionId {
        self.layout.add_section(kind)
    }

    /// Removes a section. See [`Layout::remove_section`].
    pub fn remove_section(&mut self, id: &SectionId) -> &Layout {
        self.layout.remove_section(id);
        &self.layout
    }

    /// Equality that also compares every section's `content`.
    #[must_use]
    pub fn is_identical(&self, other: &Self) -> bool {
        self.theme == other.theme && self.layout.is_identical(&other.layout)
    }

    /// Replaces theme and layout wholesale.
    pub fn replace_all(&mut self, theme: ThemeConfig, layout: Layout) -> &Self {
        self.theme = theme;
        self.layout = layout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_layout() {
        let layout = Layout::starter();
        let kinds: Vec<_> = layout.kinds().collect();
        assert_eq!(
            kinds,
            vec![SectionKind::Header, SectionKind::Hero, SectionKind::Features]
        );
    }

    #[test]
    fn test_add_section_appends() {
        let mut layout = Layout::starter();
        let id = layout.add_section(SectionKind::Pricing);

        assert_eq!(layout.len(), 4);
        assert_eq!(layout.sections().last().unwrap().id, id);
        assert_eq!(layout.sections().last().unwrap().kind, SectionKind::Pricing);
    }

    #[test]
    fn test_add_duplicate_kinds() {
        let mut layout = Layout::new();
        let a = layout.add_section(SectionKind::Hero);
        let b = layout.add_section(SectionKind::Hero);
        assert_ne!(a, b);
        assert_eq!(layout.len(), 2);
    }

    #[test]
    fn test_remove_section() {
        let mut layout = Layout::starter();
        let hero_id = layout.sections()[1].id.clone();

        let removed = layout.remove_section(&hero_id).unwrap();
        assert_eq!(removed.kind, SectionKind::Hero);
        assert_eq!(layout.len(), 2);
        assert!(!layout.contains(&hero_id));
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut layout = Layout::starter();
        let before = layout.clone();

        assert!(layout.remove_section(&SectionId::from("missing")).is_none());
        assert_eq!(layout, before);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Snapshot::starter();
        let mut copy = original.clone();

        copy.theme.primary_color = "#000000".to_string();
        let id = copy.add_section(SectionKind::Footer);
        assert!(copy.layout.contains(&id));

        assert_eq!(original.theme.primary_color, "#6366f1");
        assert_eq!(original.layout.len(), 3);
    }

    #[test]
    fn test_snapshot_add_section_returns_new_id() {
        let mut snapshot = Snapshot::starter();
        let id = snapshot.add_section(SectionKind::Pricing);

        assert_eq!(snapshot.layout.len(), 4);
        assert_eq!(snapshot.layout.sections()[3].id, id);
        assert_eq!(snapshot.layout.get(&id).unwrap().kind, SectionKind::Pricing);
    }

    #[test]
    fn test_is_identical_compares_content() {
        let original = Snapshot::starter();
        let mut edited = original.clone();
        edited.layout.sections[1].content = Some(serde_json::json!({"headline": "Spring sale"}));

        assert_eq!(original, edited);
        assert!(!original.is_identical(&edited));
        assert!(original.is_identical(&original.clone()));
    }

    #[test]
    fn test_replace_all() {
        let mut snapshot = Snapshot::starter();
        let layout = Layout::from_kinds([SectionKind::Footer]);
        let theme = ThemeConfig {
            dark_mode: true,
            ..ThemeConfig::default()
        };

        snapshot.replace_all(theme.clone(), layout.clone());
        assert_eq!(snapshot.theme, theme);
        assert_eq!(snapshot.layout, layout);
    }

    #[test]
    fn test_layout_serializes_as_array() {
        let layout = Layout::from(vec![SectionItem::with_id("1", SectionKind::Header)]);
        let json = serde_json::to_value(&layout).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["type"], "header");
    }
}
