//! Cuisine Tags
//!
//! An ordered, de-duplicated list of cuisine labels attached to a restaurant.

use std::string::ToString;

use smallvec::SmallVec;

/// Cuisine labels in display order, using `SmallVec<[String; 4]>` since restaurants rarely
/// carry more than a handful.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CuisineTags {
    tags: SmallVec<[String; 4]>,
}

impl CuisineTags {
    /// Create a tag list, dropping exact duplicates while keeping first-seen order.
    #[must_use]
    pub fn new(tags: impl IntoIterator<Item = String>) -> Self {
        let mut collection = Self::default();

        for tag in tags {
            collection.add(tag);
        }

        collection
    }

    /// Create a tag list from string slices.
    pub fn from_strs(tags: &[&str]) -> Self {
        Self::new(tags.iter().map(ToString::to_string))
    }

    /// Append a tag unless it is already present.
    pub fn add(&mut self, tag: String) {
        if !self.contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// Exact (case-sensitive) membership test, as used by category chips.
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Whether any tag contains `needle` as a substring. `needle` must already be lower-cased.
    pub fn any_contains_lowercase(&self, needle: &str) -> bool {
        self.tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
    }

    /// Iterate tags in display order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Number of tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether the list has no tags.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl From<Vec<String>> for CuisineTags {
    fn from(tags: Vec<String>) -> Self {
        Self::new(tags)
    }
}
