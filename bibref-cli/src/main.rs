use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

// Import from bibref-core
use bibref_core::{BookNames, CitationProcessor, Normalizer, Reference};

#[derive(Parser)]
#[command(name = "bibref")]
#[command(about = "Normalize, compare and localize biblical citations")]
struct Args {
    /// Path to a custom book-name table (YAML, book id -> localized name).
    /// Defaults to the builtin Czech table.
    #[arg(short, long)]
    books: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rewrite locale citation text into the form the citation grammar recognizes
    Normalize {
        /// Citation text, e.g. "Žl 98(97)"
        text: String,
    },
    /// Parse a canonical-form citation and print its localized rendering
    Format {
        /// Canonical citation, e.g. "Luke.2.3-Luke.2.5"
        citation: String,

        /// Print the entity sequence as interchange JSON instead
        #[arg(long)]
        json: bool,
    },
    /// Test two canonical-form citations for overlap
    Intersects {
        /// Left-hand canonical citation (only its first range is tested)
        a: String,
        /// Right-hand canonical citation
        b: String,

        /// Test every range pair instead of only the first left-hand range
        #[arg(long)]
        all: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut processor = CitationProcessor::czech()?;
    if let Some(path) = &args.books {
        processor.set_book_names(BookNames::from_yaml_file(path)?);
    }

    match args.command {
        Command::Normalize { text } => {
            println!("{}", Normalizer::czech()?.apply(&text));
        }
        Command::Format { citation, json } => {
            let reference = parse_canonical(&processor, &citation)?;
            if json {
                println!("{}", serde_json::to_string_pretty(reference.entities())?);
            } else {
                for line in processor.localize(&reference)? {
                    println!("{line}");
                }
            }
        }
        Command::Intersects { a, b, all } => {
            let left = parse_canonical(&processor, &a)?;
            let right = parse_canonical(&processor, &b)?;
            let intersects = if all {
                left.intersects_with_all(&right)?
            } else {
                left.intersects_with(&right)?
            };
            println!("{intersects}");
        }
    }

    Ok(())
}

fn parse_canonical(processor: &CitationProcessor, text: &str) -> Result<Reference> {
    processor
        .from_canonical(text)
        .ok_or_else(|| anyhow!("No citation found in '{text}'"))
}
