//! Document root and chapter tree.

use crate::content::Content;

/// Bibliography entry listed by the `References` marker.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReferenceEntry {
    /// Display name.
    pub name: String,
    /// Link target.
    pub url: String,
}

impl ReferenceEntry {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Numbered, nestable section.
///
/// The section number is not stored: it is the 1-based position among
/// siblings, prefixed with the parent's number.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chapter {
    /// Heading level (`h1`, `h2`, ...), at least 1.
    pub level: u32,
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub content: Vec<Content>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub chapters: Vec<Chapter>,
}

impl Chapter {
    /// Create an empty chapter.
    pub fn new(level: u32, title: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            content: Vec::new(),
            chapters: Vec::new(),
        }
    }

    /// Append a content item.
    #[must_use]
    pub fn with_content(mut self, item: impl Into<Content>) -> Self {
        self.content.push(item.into());
        self
    }

    /// Append a sub-chapter.
    #[must_use]
    pub fn with_chapter(mut self, chapter: Chapter) -> Self {
        self.chapters.push(chapter);
        self
    }

    /// Number of chapters in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.chapters.iter().map(Chapter::subtree_len).sum::<usize>()
    }
}

/// Root of the document tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    pub title: String,
    /// Content preceding the first chapter.
    #[cfg_attr(feature = "serde", serde(default))]
    pub content: Vec<Content>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub chapters: Vec<Chapter>,
    /// Bibliography in insertion order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub references: Vec<ReferenceEntry>,
}

impl Document {
    /// Create an empty document.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Append a top-level content item.
    #[must_use]
    pub fn with_content(mut self, item: impl Into<Content>) -> Self {
        self.content.push(item.into());
        self
    }

    /// Append a top-level chapter.
    #[must_use]
    pub fn with_chapter(mut self, chapter: Chapter) -> Self {
        self.chapters.push(chapter);
        self
    }

    /// Append a bibliography entry.
    #[must_use]
    pub fn with_reference(mut self, entry: ReferenceEntry) -> Self {
        self.references.push(entry);
        self
    }

    /// Total number of chapters at every depth.
    pub fn chapter_count(&self) -> usize {
        self.chapters.iter().map(Chapter::subtree_len).sum()
    }
}
