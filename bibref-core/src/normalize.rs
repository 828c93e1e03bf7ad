use anyhow::Result;
use regex::Regex;

/// One entry of the rewrite table.
///
/// `Literal` rules bridge abbreviation aliases and replace only the first
/// occurrence; `Pattern` rules are generic cleanups and replace globally.
#[derive(Debug)]
pub enum RewriteRule {
    Literal { from: String, to: String },
    Pattern { regex: Regex, replacement: String },
}

impl RewriteRule {
    pub fn literal(from: &str, to: &str) -> Self {
        Self::Literal {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    pub fn pattern(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self::Pattern {
            regex: Regex::new(pattern)?,
            replacement: replacement.to_string(),
        })
    }

    fn apply(&self, text: &str) -> String {
        match self {
            Self::Literal { from, to } => text.replacen(from.as_str(), to, 1),
            Self::Pattern { regex, replacement } => {
                regex.replace_all(text, replacement.as_str()).into_owned()
            }
        }
    }
}

/// Rewrites non-canonical citation text into the form the external citation
/// grammar recognizes.
///
/// Rules are data and run strictly in table order — some target
/// abbreviations would be re-matched by a later rule if the order changed.
/// Application is total: unmatched input passes through unchanged.
#[derive(Debug)]
pub struct Normalizer {
    rules: Vec<RewriteRule>,
}

impl Normalizer {
    pub fn new(rules: Vec<RewriteRule>) -> Self {
        Self { rules }
    }

    /// The Czech rewrite table: abbreviation variants seen in lectionary
    /// datasets, bridged to the abbreviations the grammar knows, plus the
    /// generic cleanups (dual psalm numbering, `+` verse separator,
    /// sub-verse letters).
    pub fn czech() -> Result<Self> {
        let rules = vec![
            RewriteRule::literal("Žl ", "Ž "),
            RewriteRule::literal("žl ", "Ž "),
            RewriteRule::literal("Zach ", "Za "),
            RewriteRule::literal("Sof ", "Sf "),
            RewriteRule::literal("Žid ", "Žd "),
            RewriteRule::literal("Zid ", "Zd "),
            RewriteRule::literal("Nm ", "Num "),
            RewriteRule::literal("Flp ", "Fp "),
            RewriteRule::literal("Kron ", "Pa "),
            // probably a typo, but seen in the dataset
            RewriteRule::literal("Is ", "Iz "),
            // alternative psalm numberings, e.g. "Ž 98(97)"
            RewriteRule::pattern(r"\(\d+\)", "")?,
            // "+" as verse separator
            RewriteRule::pattern(r"\+", ".")?,
            // sub-verse letters, e.g. "12a"
            RewriteRule::pattern(r"(\d+)[abcde]+", "$1")?,
        ];
        Ok(Self::new(rules))
    }

    /// Apply the whole table, in order. Never fails.
    pub fn apply(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |acc, rule| rule.apply(&acc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn czech() -> Normalizer {
        Normalizer::czech().unwrap()
    }

    #[test]
    fn rewrites_psalm_alias_and_dual_numbering() {
        assert_eq!(czech().apply("Žl 98(97)"), "Ž 98");
        assert_eq!(czech().apply("žl 23"), "Ž 23");
    }

    #[test]
    fn rewrites_each_literal_alias() {
        let n = czech();
        assert_eq!(n.apply("Zach 9,9"), "Za 9,9");
        assert_eq!(n.apply("Sof 3,14"), "Sf 3,14");
        assert_eq!(n.apply("Žid 11,8"), "Žd 11,8");
        assert_eq!(n.apply("Zid 11,8"), "Zd 11,8");
        assert_eq!(n.apply("Nm 6,22"), "Num 6,22");
        assert_eq!(n.apply("Flp 2,6"), "Fp 2,6");
        assert_eq!(n.apply("1 Kron 15,3"), "1 Pa 15,3");
        assert_eq!(n.apply("Is 7,10"), "Iz 7,10");
    }

    #[test]
    fn normalizes_verse_separator_and_subverse_letters() {
        let n = czech();
        assert_eq!(n.apply("Lk 2,1+4"), "Lk 2,1.4");
        assert_eq!(n.apply("Mt 5,12a"), "Mt 5,12");
        assert_eq!(n.apply("Iz 61,1-2a.10ab"), "Iz 61,1-2.10");
    }

    #[test]
    fn literal_rules_replace_first_occurrence_only() {
        assert_eq!(czech().apply("Žl 1; Žl 2"), "Ž 1; Žl 2");
    }

    #[test]
    fn unmatched_input_passes_through() {
        assert_eq!(czech().apply("Mk 1,1-8"), "Mk 1,1-8");
        assert_eq!(czech().apply(""), "");
    }

    #[test]
    fn idempotent_on_rule_triggers() {
        let n = czech();
        for input in ["Žl 98(97)", "Zach 9,9", "Lk 2,1+4", "Mt 5,12a", "Is 7,10"] {
            let once = n.apply(input);
            assert_eq!(n.apply(&once), once, "not idempotent for {input:?}");
        }
    }
}
