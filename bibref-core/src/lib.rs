// Bibref Core Library
//
// Models biblical citations as comparable, localizable ranges.
// Main interface for constructing References from citation text and
// testing two citations for overlap.

pub mod books;
pub mod config;
pub mod error;
pub mod normalize;
pub mod osis;
pub mod parser;
pub mod processor;
pub mod range;
pub mod reference;
pub mod types;

// Re-export main types and functions for easy use
pub use books::BookNames;
pub use config::{OsisCompactionStrategy, ParserConfig, PunctuationStrategy, VersificationSystem};
pub use error::ReferenceError;
pub use normalize::{Normalizer, RewriteRule};
pub use osis::OsisParser;
pub use parser::CitationParser;
pub use processor::CitationProcessor;
pub use reference::Reference;
pub use types::*;
