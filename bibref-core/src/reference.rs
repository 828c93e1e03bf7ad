use crate::books::BookNames;
use crate::error::ReferenceError;
use crate::osis;
use crate::range::{matches_book, matches_range};
use crate::types::{Entity, ParseGroup};

/// The parsed result of one citation string: an ordered entity sequence.
///
/// Immutable after construction. Entity order is the parser's emission
/// order and is never resorted; all operations are pure reads, so sharing
/// a `Reference` across threads needs no locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    entities: Vec<Entity>,
}

impl Reference {
    /// Keep only the entities of the first top-level parse group.
    ///
    /// `None` when the parser found no citation — no groups, or a first
    /// group with no entities. A `Some` reference always holds at least
    /// one entity.
    pub fn from_groups(groups: Vec<ParseGroup>) -> Option<Self> {
        let first = groups.into_iter().next()?;
        if first.entities.is_empty() {
            return None;
        }
        Some(Self {
            entities: first.entities,
        })
    }

    /// Build directly from entities, bypassing the parser. Used by
    /// pipeline stages that already hold structured ranges.
    pub fn from_entities(entities: Vec<Entity>) -> Self {
        Self { entities }
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Canonical interchange notation (OSIS, bcv granularity).
    pub fn to_canonical(&self) -> String {
        osis::serialize(&self.entities)
    }

    /// Whether this citation overlaps `other`.
    ///
    /// Only the FIRST entity of `self` is tested, against every entity of
    /// `other` — the single-range assumption the correlation pipeline was
    /// built on. The check is therefore NOT symmetric for multi-entity
    /// citations; [`Reference::intersects_with_all`] is the strict
    /// cross-product variant.
    ///
    /// A cross-book first entity is a data-shape violation and fails with
    /// [`ReferenceError::CrossBookRange`]. An empty reference intersects
    /// nothing.
    pub fn intersects_with(&self, other: &Reference) -> Result<bool, ReferenceError> {
        match self.entities.first() {
            Some(entity) => {
                check_same_book(entity)?;
                Ok(other.entities.iter().any(|candidate| {
                    matches_book(entity, candidate) && matches_range(entity, candidate)
                }))
            }
            None => Ok(false),
        }
    }

    /// Strict variant of [`Reference::intersects_with`]: every entity of
    /// `self` is tested against every entity of `other`. Callers opt in
    /// explicitly where multi-entity citations matter.
    pub fn intersects_with_all(&self, other: &Reference) -> Result<bool, ReferenceError> {
        for entity in &self.entities {
            check_same_book(entity)?;
            if other
                .entities
                .iter()
                .any(|candidate| matches_book(entity, candidate) && matches_range(entity, candidate))
            {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Render one localized string per entity, in entity order.
    ///
    /// A book-id miss in `names` violates the collaborator contract and
    /// propagates as [`ReferenceError::BookNotFound`].
    pub fn to_localized_strings(&self, names: &BookNames) -> Result<Vec<String>, ReferenceError> {
        self.entities
            .iter()
            .map(|entity| {
                let book = names.name(&entity.start.book)?;
                Ok(format!("{} {}", book, verse_range(entity)))
            })
            .collect()
    }
}

fn check_same_book(entity: &Entity) -> Result<(), ReferenceError> {
    if entity.ends_within_same_book() {
        Ok(())
    } else {
        Err(ReferenceError::CrossBookRange {
            start: entity.start.book.clone(),
            end: entity.end.book.clone(),
        })
    }
}

/// The chapter/verse part of the localized rendering, rules in priority
/// order: single verse, single chapter, cross-chapter.
fn verse_range(entity: &Entity) -> String {
    let start = &entity.start;
    let end = &entity.end;
    if start.cv() == end.cv() {
        // Lk 2, 3
        format!("{}, {}", start.chapter, start.verse)
    } else if start.chapter == end.chapter {
        // Lk 2, 3-5
        format!("{}, {}-{}", start.chapter, start.verse, end.verse)
    } else {
        // Lk 2,3 - 3,10
        format!(
            "{},{} - {},{}",
            start.chapter, start.verse, end.chapter, end.verse
        )
    }
}
