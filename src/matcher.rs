use crate::error::Result;
use regex::Regex;

/// Options controlling how the pattern is interpreted and how the per-line
/// decision is made. Built once per invocation and never mutated.
#[derive(Debug, Clone, Default)]
pub struct MatchOptions {
    pub pattern: String,
    pub fixed: bool,
    pub ignore_case: bool,
    pub invert: bool,
}

/// How a compiled pattern tests a line of text.
#[derive(Debug, Clone)]
pub enum MatchStrategy {
    /// Literal substring containment; regex metacharacters have no meaning.
    Fixed(String),
    /// Compiled regular expression, unanchored.
    Regex(Regex),
}

/// Compiled per-line predicate with inversion baked in.
#[derive(Debug, Clone)]
pub struct Matcher {
    strategy: MatchStrategy,
    invert: bool,
}

impl Matcher {
    /// Compiles the pattern according to the options.
    ///
    /// In fixed-string mode the pattern is never handed to the regex engine,
    /// so compilation cannot fail and `-i` has no effect (matching the
    /// reference tool). In regex mode `-i` is applied as a whole-pattern
    /// `(?i)` prefix.
    pub fn build(options: &MatchOptions) -> Result<Self> {
        let strategy = if options.fixed {
            MatchStrategy::Fixed(options.pattern.clone())
        } else {
            let pattern = if options.ignore_case {
                format!("(?i){}", options.pattern)
            } else {
                options.pattern.clone()
            };
            MatchStrategy::Regex(Regex::new(&pattern)?)
        };

        Ok(Self {
            strategy,
            invert: options.invert,
        })
    }

    /// Raw predicate: does the pattern occur anywhere in `text`?
    pub fn is_match(&self, text: &str) -> bool {
        match &self.strategy {
            MatchStrategy::Fixed(pattern) => text.contains(pattern),
            MatchStrategy::Regex(regex) => regex.is_match(text),
        }
    }

    /// Final per-line decision with `-v` inversion applied.
    pub fn selects(&self, text: &str) -> bool {
        self.is_match(text) != self.invert
    }
}
