//! Immutable document model for fiets.
//!
//! A [`Document`] holds a title, leading [`Content`], a tree of [`Chapter`]s
//! and a bibliography of [`ReferenceEntry`] values. Inline content is a
//! [`Text`]: an ordered run of [`Span`]s.
//!
//! The model is built by an external parser and never mutated by consumers.
//! Both [`Span`] and [`Content`] are closed enums, so every consumer has to
//! handle every node kind.
//!
//! Enable the `serde` feature to (de)serialize document trees. Its tests live
//! in `tests/serde.rs` and run with `cargo test -p fiets-doc --features serde`.
//!
//! # Example
//!
//! ```
//! use fiets_doc::{Chapter, Content, Document, ReferenceEntry, Span, Text};
//!
//! let doc = Document::new("Proposal")
//!     .with_reference(ReferenceEntry::new("N4861", "https://wg21.link/n4861"))
//!     .with_chapter(
//!         Chapter::new(1, "Motivation")
//!             .with_content(Content::paragraph(
//!                 Text::plain("See ").with(Span::reference(1, "https://wg21.link/n4861")),
//!             ))
//!             .with_content(Content::References),
//!     );
//! assert_eq!(doc.chapter_count(), 1);
//! ```

mod content;
mod document;
mod text;

pub use content::{Code, Content, IdentifierDefinition, List, OrderedList, Table};
pub use document::{Chapter, Document, ReferenceEntry};
pub use text::{Reference, Span, Text};
