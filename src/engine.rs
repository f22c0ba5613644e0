//! Core search engine: evaluates the matcher over the full line sequence and
//! materializes context windows or a match count.
use crate::format;
use crate::matcher::Matcher;
use crate::window::context_window;
use log::debug;

/// Effective context counts after the `-C` override and clamping have been
/// applied during option resolution. The engine itself has no notion of a
/// combined context value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowOptions {
    pub before: usize,
    pub after: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub count_only: bool,
    pub numbered: bool,
}

pub struct SearchEngine {
    matcher: Matcher,
    window: WindowOptions,
}

impl SearchEngine {
    pub fn new(matcher: Matcher, window: WindowOptions) -> Self {
        Self { matcher, window }
    }

    /// Runs the search over the fully materialized input.
    ///
    /// The match vector is computed exactly once and reused by both render
    /// paths. In count mode the result is a single decimal string and no
    /// window logic runs. Otherwise every selected line contributes its own
    /// window, in input order; overlapping windows are emitted independently.
    pub fn run(&self, lines: &[String], output: OutputOptions) -> Vec<String> {
        let selected: Vec<bool> = lines.iter().map(|line| self.matcher.selects(line)).collect();

        if output.count_only {
            let count = selected.iter().filter(|&&hit| hit).count();
            debug!("count mode: {count} matching lines");
            return vec![count.to_string()];
        }

        let mut rendered = Vec::new();
        for (index, hit) in selected.iter().enumerate() {
            if !*hit {
                continue;
            }
            let window = context_window(index, self.window.before, self.window.after, lines.len());
            for i in window {
                rendered.push(format::render(i, &lines[i], output.numbered));
            }
        }
        rendered
    }
}
