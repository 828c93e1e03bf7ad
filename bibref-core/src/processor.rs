use crate::books::BookNames;
use crate::config::ParserConfig;
use crate::error::ReferenceError;
use crate::normalize::Normalizer;
use crate::osis::OsisParser;
use crate::parser::CitationParser;
use crate::reference::Reference;
use anyhow::Result;

/// Front door for the correlation pipeline: wires a citation parser, a
/// locale normalizer and a book-name table behind the two named
/// constructors citations enter through.
pub struct CitationProcessor {
    parser: Box<dyn CitationParser + Send + Sync>,
    normalizer: Normalizer,
    book_names: BookNames,
    canonical_config: ParserConfig,
    locale_config: ParserConfig,
}

impl CitationProcessor {
    /// Create a CitationProcessor with full dependency injection.
    pub fn new_with_dependencies(
        parser: Box<dyn CitationParser + Send + Sync>,
        normalizer: Normalizer,
        book_names: BookNames,
    ) -> Self {
        Self {
            parser,
            normalizer,
            book_names,
            canonical_config: ParserConfig::canonical(),
            locale_config: ParserConfig::locale(),
        }
    }

    /// Convenience constructor: canonical-form parser, Czech rewrite table
    /// and Czech book names.
    pub fn czech() -> Result<Self> {
        Ok(Self::new_with_dependencies(
            Box::new(OsisParser::new()?),
            Normalizer::czech()?,
            BookNames::czech(),
        ))
    }

    /// Replace the book-name table (e.g. one loaded from a YAML file).
    pub fn set_book_names(&mut self, book_names: BookNames) {
        self.book_names = book_names;
    }

    pub fn book_names(&self) -> &BookNames {
        &self.book_names
    }

    /// Parse text already in canonical interchange notation.
    /// `None` when the parser finds no citation.
    pub fn from_canonical(&self, text: &str) -> Option<Reference> {
        Reference::from_groups(self.parser.parse(text, &self.canonical_config))
    }

    /// Normalize locale citation text, then parse it with the
    /// locale-appropriate configuration. `None` when the parser finds no
    /// citation.
    pub fn from_locale(&self, text: &str) -> Option<Reference> {
        let normalized = self.normalizer.apply(text);
        Reference::from_groups(self.parser.parse(&normalized, &self.locale_config))
    }

    /// Render a reference with this processor's book-name table.
    pub fn localize(&self, reference: &Reference) -> Result<Vec<String>, ReferenceError> {
        reference.to_localized_strings(&self.book_names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Entity;

    #[test]
    fn canonical_text_round_trips_through_the_processor() {
        let processor = CitationProcessor::czech().unwrap();
        let r = processor.from_canonical("Matt.1.1-Matt.1.5,Luke.2.3").unwrap();
        assert_eq!(
            r.entities(),
            &[
                Entity::span("Matt", (1, 1), (1, 5)),
                Entity::point("Luke", 2, 3),
            ]
        );
        let again = processor.from_canonical(&r.to_canonical()).unwrap();
        assert_eq!(again, r);
    }

    #[test]
    fn unparseable_text_is_no_citation() {
        let processor = CitationProcessor::czech().unwrap();
        assert!(processor.from_canonical("volume 7 of the lectionary").is_none());
        assert!(processor.from_canonical("").is_none());
    }

    #[test]
    fn localize_uses_the_configured_table() {
        let processor = CitationProcessor::czech().unwrap();
        let r = processor.from_canonical("Luke.2.3-Luke.2.5").unwrap();
        assert_eq!(processor.localize(&r).unwrap(), vec!["Lk 2, 3-5"]);
    }
}
