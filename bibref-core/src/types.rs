use serde::{Deserialize, Serialize};
use std::fmt;

// ===== CITATION VALUE TYPES =====
// These types implement the interchange contract with the external citation
// parser and the correlation pipeline. An endpoint serializes as
// {book, chapter, verse}; an Entity as {start, end}.

/// Opaque book identifier, value-equal only — no fuzzy matching at this
/// layer. OSIS ids in practice (e.g. "Luke", "1Cor", "Ps").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BookId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for BookId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A (chapter, verse) coordinate within a book.
///
/// The derived `Ord` compares chapter first, then verse — the total order
/// every range predicate in this crate is built on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Cv {
    pub chapter: u32,
    pub verse: u32,
}

impl Cv {
    pub fn new(chapter: u32, verse: u32) -> Self {
        Self { chapter, verse }
    }
}

impl fmt::Display for Cv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.chapter, self.verse)
    }
}

/// One endpoint of a citation range.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Anchor {
    pub book: BookId,
    pub chapter: u32,
    pub verse: u32,
}

impl Anchor {
    pub fn new(book: impl Into<BookId>, chapter: u32, verse: u32) -> Self {
        Self {
            book: book.into(),
            chapter,
            verse,
        }
    }

    /// The chapter/verse coordinate, without the book.
    pub fn cv(&self) -> Cv {
        Cv::new(self.chapter, self.verse)
    }
}

/// A book-scoped start–end interval representing part of a citation.
///
/// `start <= end` is the parser's responsibility and is not enforced here.
/// A range whose endpoints name different books is detectable via
/// [`Entity::ends_within_same_book`] but never auto-repaired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub start: Anchor,
    pub end: Anchor,
}

impl Entity {
    pub fn new(start: Anchor, end: Anchor) -> Self {
        Self { start, end }
    }

    /// Single-verse range: start and end are the same coordinate.
    pub fn point(book: impl Into<BookId>, chapter: u32, verse: u32) -> Self {
        let anchor = Anchor::new(book, chapter, verse);
        Self {
            start: anchor.clone(),
            end: anchor,
        }
    }

    /// Range within one book, from (c1, v1) to (c2, v2).
    pub fn span(book: impl Into<BookId>, start: (u32, u32), end: (u32, u32)) -> Self {
        let book = book.into();
        Self {
            start: Anchor::new(book.clone(), start.0, start.1),
            end: Anchor::new(book, end.0, end.1),
        }
    }

    /// False for cross-book single ranges, which downstream consumers
    /// cannot represent.
    pub fn ends_within_same_book(&self) -> bool {
        self.start.book == self.end.book
    }
}

/// One top-level parse group emitted by the citation parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseGroup {
    pub entities: Vec<Entity>,
}

impl ParseGroup {
    pub fn new(entities: Vec<Entity>) -> Self {
        Self { entities }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cv_orders_by_chapter_then_verse() {
        assert!(Cv::new(2, 1) > Cv::new(1, 30));
        assert!(Cv::new(3, 4) < Cv::new(3, 5));
        assert_eq!(Cv::new(7, 7), Cv::new(7, 7));
    }

    #[test]
    fn entity_detects_cross_book_range() {
        let same = Entity::span("Luke", (2, 3), (3, 10));
        assert!(same.ends_within_same_book());

        let cross = Entity::new(Anchor::new("Luke", 24, 53), Anchor::new("John", 1, 1));
        assert!(!cross.ends_within_same_book());
    }

    #[test]
    fn anchor_serializes_to_interchange_shape() {
        let anchor = Anchor::new("Matt", 5, 3);
        let json = serde_json::to_value(&anchor).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"book": "Matt", "chapter": 5, "verse": 3})
        );
    }
}
