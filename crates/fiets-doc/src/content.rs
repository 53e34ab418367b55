//! Block-level content items.

use crate::text::Text;

/// Preformatted code block.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Code {
    /// Raw body, emitted without escaping.
    pub body: String,
}

/// Unordered list of text entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct List {
    pub entries: Vec<Text>,
}

/// Ordered list of text entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderedList {
    pub entries: Vec<Text>,
}

/// Table as rows of cells.
///
/// There is no header flag: a header is inferred when rendering from a
/// separator row of `-` cells at index 1.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    pub rows: Vec<Vec<Text>>,
}

impl Table {
    /// Build a table from rows of plain strings.
    pub fn from_plain<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Text::plain).collect())
                .collect(),
        }
    }
}

/// Named anchor target.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdentifierDefinition {
    pub name: String,
}

/// Item of a chapter's (or the document's) content sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Content {
    /// Free-text paragraph.
    Text(Text),
    Code(Code),
    List(List),
    OrderedList(OrderedList),
    Table(Table),
    /// Marker: expands to the document's reference list.
    References,
    /// Marker: expands to the table of contents.
    Toc,
    IdentifierDefinition(IdentifierDefinition),
}

impl Content {
    /// Paragraph of plain text.
    pub fn paragraph(text: impl Into<Text>) -> Self {
        Self::Text(text.into())
    }

    /// Code block with a raw body.
    pub fn code(body: impl Into<String>) -> Self {
        Self::Code(Code { body: body.into() })
    }

    /// Unordered list.
    pub fn list<I, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Text>,
    {
        Self::List(List {
            entries: entries.into_iter().map(Into::into).collect(),
        })
    }

    /// Ordered list.
    pub fn ordered_list<I, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Text>,
    {
        Self::OrderedList(OrderedList {
            entries: entries.into_iter().map(Into::into).collect(),
        })
    }

    /// Identifier definition marker.
    pub fn identifier_definition(name: impl Into<String>) -> Self {
        Self::IdentifierDefinition(IdentifierDefinition { name: name.into() })
    }
}

impl From<Text> for Content {
    fn from(value: Text) -> Self {
        Self::Text(value)
    }
}

impl From<Table> for Content {
    fn from(value: Table) -> Self {
        Self::Table(value)
    }
}
