//! Inline content: runs of spans.

/// Numbered hyperlink into the document's bibliography.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reference {
    /// Number shown in the link label (`[index]`).
    pub index: usize,
    /// Link target.
    pub url: String,
}

/// A single inline markup unit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Span {
    /// Ordinary text.
    Plain(String),
    /// Text marked as added.
    Insertion(Text),
    /// Text marked as removed.
    Deletion(Text),
    /// Semantic identifier (type, function or concept name).
    Identifier(String),
    /// Inline code.
    CodeSpan(String),
    /// Numbered link, see [`Reference`].
    Reference(Reference),
}

impl Span {
    /// Plain text span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain(text.into())
    }

    /// Identifier span.
    pub fn identifier(text: impl Into<String>) -> Self {
        Self::Identifier(text.into())
    }

    /// Inline code span.
    pub fn code(text: impl Into<String>) -> Self {
        Self::CodeSpan(text.into())
    }

    /// Insertion wrapping `text`.
    pub fn insertion(text: impl Into<Text>) -> Self {
        Self::Insertion(text.into())
    }

    /// Deletion wrapping `text`.
    pub fn deletion(text: impl Into<Text>) -> Self {
        Self::Deletion(text.into())
    }

    /// Numbered reference link.
    pub fn reference(index: usize, url: impl Into<String>) -> Self {
        Self::Reference(Reference {
            index,
            url: url.into(),
        })
    }
}

/// Ordered run of inline spans.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Text {
    pub spans: Vec<Span>,
}

impl Text {
    /// Create text from a sequence of spans.
    #[must_use]
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// Text holding a single plain span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            spans: vec![Span::plain(text)],
        }
    }

    /// Append a span.
    #[must_use]
    pub fn with(mut self, span: Span) -> Self {
        self.spans.push(span);
        self
    }

    /// Whether this text is exactly one plain span equal to `value`.
    pub fn is_plain(&self, value: &str) -> bool {
        matches!(self.spans.as_slice(), [Span::Plain(s)] if s == value)
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Self::plain(value)
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Self::plain(value)
    }
}

impl From<Span> for Text {
    fn from(value: Span) -> Self {
        Self { spans: vec![value] }
    }
}

impl From<Vec<Span>> for Text {
    fn from(spans: Vec<Span>) -> Self {
        Self { spans }
    }
}

impl FromIterator<Span> for Text {
    fn from_iter<I: IntoIterator<Item = Span>>(iter: I) -> Self {
        Self {
            spans: iter.into_iter().collect(),
        }
    }
}
