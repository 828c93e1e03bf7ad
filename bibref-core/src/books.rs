use crate::error::ReferenceError;
use crate::types::BookId;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Czech liturgical abbreviations for the NAB canon, apocrypha included.
/// Keyed by OSIS book id — the ids the citation parser emits.
const CZECH_BOOKS: &[(&str, &str)] = &[
    // Old Testament
    ("Gen", "Gn"),
    ("Exod", "Ex"),
    ("Lev", "Lv"),
    ("Num", "Nm"),
    ("Deut", "Dt"),
    ("Josh", "Joz"),
    ("Judg", "Sd"),
    ("Ruth", "Rt"),
    ("1Sam", "1 Sam"),
    ("2Sam", "2 Sam"),
    ("1Kgs", "1 Král"),
    ("2Kgs", "2 Král"),
    ("1Chr", "1 Pa"),
    ("2Chr", "2 Pa"),
    ("Ezra", "Ezd"),
    ("Neh", "Neh"),
    ("Tob", "Tob"),
    ("Jdt", "Jdt"),
    ("Esth", "Est"),
    ("1Macc", "1 Mak"),
    ("2Macc", "2 Mak"),
    ("Job", "Job"),
    ("Ps", "Ž"),
    ("Prov", "Př"),
    ("Eccl", "Kaz"),
    ("Song", "Pís"),
    ("Wis", "Mdr"),
    ("Sir", "Sir"),
    ("Isa", "Iz"),
    ("Jer", "Jer"),
    ("Lam", "Pl"),
    ("Bar", "Bar"),
    ("Ezek", "Ez"),
    ("Dan", "Dan"),
    ("Hos", "Oz"),
    ("Joel", "Jl"),
    ("Amos", "Am"),
    ("Obad", "Abd"),
    ("Jonah", "Jon"),
    ("Mic", "Mich"),
    ("Nah", "Nah"),
    ("Hab", "Hab"),
    ("Zeph", "Sf"),
    ("Hag", "Ag"),
    ("Zech", "Za"),
    ("Mal", "Mal"),
    // New Testament
    ("Matt", "Mt"),
    ("Mark", "Mk"),
    ("Luke", "Lk"),
    ("John", "Jan"),
    ("Acts", "Sk"),
    ("Rom", "Řím"),
    ("1Cor", "1 Kor"),
    ("2Cor", "2 Kor"),
    ("Gal", "Gal"),
    ("Eph", "Ef"),
    ("Phil", "Fp"),
    ("Col", "Kol"),
    ("1Thess", "1 Sol"),
    ("2Thess", "2 Sol"),
    ("1Tim", "1 Tim"),
    ("2Tim", "2 Tim"),
    ("Titus", "Tit"),
    ("Phlm", "Flm"),
    ("Heb", "Žd"),
    ("Jas", "Jak"),
    ("1Pet", "1 Petr"),
    ("2Pet", "2 Petr"),
    ("1John", "1 Jan"),
    ("2John", "2 Jan"),
    ("3John", "3 Jan"),
    ("Jude", "Jud"),
    ("Rev", "Zj"),
];

/// Localized book-name lookup, keyed by the same book ids entities carry.
///
/// The table is contractually total over the supported canon (including
/// the apocryphal books the parser is configured to recognize); a miss is
/// a collaborator configuration error and surfaces as
/// [`ReferenceError::BookNotFound`], never a silent default.
#[derive(Debug, Clone)]
pub struct BookNames {
    names: HashMap<BookId, String>,
}

impl BookNames {
    pub fn new(names: HashMap<BookId, String>) -> Self {
        Self { names }
    }

    /// The builtin Czech table.
    pub fn czech() -> Self {
        Self {
            names: CZECH_BOOKS
                .iter()
                .map(|(id, name)| (BookId::new(*id), name.to_string()))
                .collect(),
        }
    }

    /// Load a book-name table from a JSON object of id -> name.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let names: HashMap<BookId, String> =
            serde_json::from_str(json).context("Failed to parse book-name table as JSON")?;
        Ok(Self::new(names))
    }

    /// Load a book-name table from a YAML file of id -> name.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read book-name table: {}", path.display()))?;
        let names: HashMap<BookId, String> = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse book-name table: {}", path.display()))?;
        Ok(Self::new(names))
    }

    pub fn name(&self, book: &BookId) -> Result<&str, ReferenceError> {
        self.names
            .get(book)
            .map(String::as_str)
            .ok_or_else(|| ReferenceError::BookNotFound(book.clone()))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
