use crate::config::ParserConfig;
use crate::parser::CitationParser;
use crate::types::{Anchor, Entity, ParseGroup};
use anyhow::Result;
use regex::Regex;

/// Reader for canonical interchange notation (OSIS at bcv granularity):
/// `Book.C.V` or `Book.C.V-Book.C.V`, sequences joined by `","`.
///
/// This is the one shipped [`CitationParser`]; locale grammars stay behind
/// the trait. All entities of a sequence land in a single parse group, in
/// textual order. Any malformed segment makes the whole parse yield no
/// groups — partial acceptance would hide data errors from the pipeline.
pub struct OsisParser {
    anchor: Regex,
}

impl OsisParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            anchor: Regex::new(r"^([0-9]?[A-Za-z]+)\.(\d+)\.(\d+)$")?,
        })
    }

    fn parse_anchor(&self, part: &str) -> Option<Anchor> {
        let caps = self.anchor.captures(part)?;
        Some(Anchor::new(
            &caps[1],
            caps[2].parse().ok()?,
            caps[3].parse().ok()?,
        ))
    }

    fn parse_entity(&self, segment: &str) -> Option<Entity> {
        match segment.split_once('-') {
            Some((start, end)) => Some(Entity::new(
                self.parse_anchor(start)?,
                self.parse_anchor(end)?,
            )),
            None => {
                let anchor = self.parse_anchor(segment)?;
                Some(Entity::new(anchor.clone(), anchor))
            }
        }
    }
}

impl CitationParser for OsisParser {
    fn parse(&self, text: &str, _config: &ParserConfig) -> Vec<ParseGroup> {
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }

        let mut entities = Vec::new();
        for segment in text.split(',') {
            match self.parse_entity(segment.trim()) {
                Some(entity) => entities.push(entity),
                None => return Vec::new(),
            }
        }
        vec![ParseGroup::new(entities)]
    }
}

/// Serialize one entity at bcv granularity, collapsing exact single verses.
pub fn format_entity(entity: &Entity) -> String {
    let start = &entity.start;
    let end = &entity.end;
    if start == end {
        format!("{}.{}.{}", start.book, start.chapter, start.verse)
    } else {
        format!(
            "{}.{}.{}-{}.{}.{}",
            start.book, start.chapter, start.verse, end.book, end.chapter, end.verse
        )
    }
}

/// Serialize an entity sequence to canonical interchange notation.
pub fn serialize(entities: &[Entity]) -> String {
    entities
        .iter()
        .map(format_entity)
        .collect::<Vec<_>>()
        .join(",")
}
