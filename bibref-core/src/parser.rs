use crate::config::ParserConfig;
use crate::types::ParseGroup;

/// Narrow contract over the external citation grammar.
///
/// Implementations turn citation text into ordered parse groups, each an
/// ordered entity sequence. Parse failure or unrecognized text yields an
/// empty vec, never an error — "no entities" is a valid, checkable state
/// for callers. The core consumes only the first group.
///
/// The seam exists so the real grammar can be swapped for a test double
/// without invoking grammar machinery in unit tests.
pub trait CitationParser {
    fn parse(&self, text: &str, config: &ParserConfig) -> Vec<ParseGroup>;
}
