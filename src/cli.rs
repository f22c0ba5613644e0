use crate::config::Config;
use crate::engine::{OutputOptions, WindowOptions};
use crate::matcher::MatchOptions;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Search standard input for lines matching a pattern", long_about = None)]
pub struct Cli {
    /// Pattern to search for
    pub pattern: String,

    /// Print N lines of trailing context after matching lines
    #[clap(short = 'A', long = "after-context", value_name = "N", allow_hyphen_values = true)]
    pub after: Option<i64>,

    /// Print N lines of leading context before matching lines
    #[clap(short = 'B', long = "before-context", value_name = "N", allow_hyphen_values = true)]
    pub before: Option<i64>,

    /// Print N lines of context around matching lines; overrides -A and -B when non-zero
    #[clap(short = 'C', long = "context", value_name = "N", allow_hyphen_values = true)]
    pub context: Option<i64>,

    /// Suppress normal output; instead print a count of matching lines
    #[clap(short = 'c', long = "count")]
    pub count: bool,

    /// Ignore case distinctions in the pattern and input data
    #[clap(short = 'i', long = "ignore-case")]
    pub ignore_case: bool,

    /// Select non-matching lines
    #[clap(short = 'v', long = "invert-match")]
    pub invert: bool,

    /// Interpret the pattern as a fixed string, not a regular expression
    #[clap(short = 'F', long = "fixed-strings")]
    pub fixed: bool,

    /// Prefix each output line with its 1-based line number
    #[clap(short = 'n', long = "line-number")]
    pub numbered: bool,

    /// Write logs to this file instead of stderr
    #[clap(long, value_parser)]
    pub log: Option<PathBuf>,
}

impl Cli {
    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            pattern: self.pattern.clone(),
            fixed: self.fixed,
            ignore_case: self.ignore_case,
            invert: self.invert,
        }
    }

    /// Resolves the effective context counts: CLI flags over config-file
    /// defaults, the combined context value overriding both sides when
    /// non-zero, and negative counts clamped to zero. The engine only ever
    /// sees the resolved before/after pair.
    pub fn window_options(&self, config: &Config) -> WindowOptions {
        let before = self.before.or(config.search.before_context).unwrap_or(0);
        let after = self.after.or(config.search.after_context).unwrap_or(0);
        let context = self.context.or(config.search.context).unwrap_or(0);

        let (before, after) = if context != 0 {
            (context, context)
        } else {
            (before, after)
        };

        WindowOptions {
            before: before.max(0) as usize,
            after: after.max(0) as usize,
        }
    }

    pub fn output_options(&self, config: &Config) -> OutputOptions {
        OutputOptions {
            count_only: self.count,
            numbered: self.numbered || config.display.numbered.unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("linesift").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn pattern_is_required() {
        assert!(Cli::try_parse_from(["linesift"]).is_err());
    }

    #[test]
    fn context_overrides_before_and_after() {
        let cli = parse(&["-A", "1", "-B", "4", "-C", "2", "pat"]);
        let window = cli.window_options(&Config::default());
        assert_eq!(window, WindowOptions { before: 2, after: 2 });
    }

    #[test]
    fn zero_context_leaves_before_and_after_alone() {
        let cli = parse(&["-A", "1", "-B", "4", "-C", "0", "pat"]);
        let window = cli.window_options(&Config::default());
        assert_eq!(window, WindowOptions { before: 4, after: 1 });
    }

    #[test]
    fn negative_counts_are_clamped_to_zero() {
        let cli = parse(&["-A", "-3", "-B", "-1", "pat"]);
        let window = cli.window_options(&Config::default());
        assert_eq!(window, WindowOptions { before: 0, after: 0 });
    }

    #[test]
    fn cli_flags_win_over_config_defaults() {
        let config: Config = toml::from_str(
            r#"
            [search]
            after_context = 5
            "#,
        )
        .unwrap();
        let cli = parse(&["-A", "1", "pat"]);
        assert_eq!(cli.window_options(&config).after, 1);

        let cli = parse(&["pat"]);
        assert_eq!(cli.window_options(&config).after, 5);
    }
}
