//! Heuristic detection of plot calls inside `if` blocks.
//!
//! Blocks are delimited by indentation alone. A line starting with `if `
//! opens a block; the first later line that is non-blank, not a `//` comment,
//! and indented at or left of the opening line closes it. Nesting is not
//! tracked: an inner `if` simply re-opens the block at its own indent.

use super::finding::{Finding, RuleId};

/// Call prefixes that must stay at global scope in v6.
pub const PLOT_FUNCTIONS: [&str; 5] = [
    "plotshape(",
    "plot(",
    "plotchar(",
    "plotcandle(",
    "plotarrow(",
];

const BLOCK_OPENER: &str = "if ";
/// `if not na(...)` guards are common and not treated as block openers.
const EXEMPT_OPENER: &str = "if not na(";
const COMMENT_MARKER: &str = "//";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockState {
    #[default]
    Outside,
    Inside {
        /// Leading whitespace width of the line that opened the block.
        indent: usize,
    },
}

impl BlockState {
    #[must_use]
    pub const fn is_inside(self) -> bool {
        matches!(self, Self::Inside { .. })
    }
}

/// Drives [`BlockState`] one line at a time.
#[derive(Debug, Default)]
pub struct PlotScopeTracker {
    state: BlockState,
}

impl PlotScopeTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> BlockState {
        self.state
    }

    /// Feeds the next line and returns the state that applies to it.
    pub fn advance(&mut self, line: &str) -> BlockState {
        let trimmed = line.trim();
        let indent = leading_whitespace(line);

        if opens_block(trimmed) {
            self.state = BlockState::Inside { indent };
        } else if let BlockState::Inside { indent: block_indent } = self.state
            && closes_block(trimmed, indent, block_indent)
        {
            self.state = BlockState::Outside;
        }

        self.state
    }
}

fn opens_block(trimmed: &str) -> bool {
    trimmed.starts_with(BLOCK_OPENER) && !trimmed.starts_with(EXEMPT_OPENER)
}

fn closes_block(trimmed: &str, indent: usize, block_indent: usize) -> bool {
    !trimmed.is_empty() && !trimmed.starts_with(COMMENT_MARKER) && indent <= block_indent
}

/// Width of the leading whitespace, counted in characters.
#[must_use]
pub fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

#[must_use]
pub fn contains_plot_call(trimmed: &str) -> bool {
    PLOT_FUNCTIONS.iter().any(|func| trimmed.contains(func))
}

/// Runs the placement check over `lines`, one error per offending line.
#[must_use]
pub fn check_plot_scope(lines: &[&str]) -> Vec<Finding> {
    let mut tracker = PlotScopeTracker::new();

    lines
        .iter()
        .enumerate()
        .filter_map(|(idx, line)| {
            let state = tracker.advance(line);
            let line_no = idx + 1;
            (state.is_inside() && contains_plot_call(line.trim())).then(|| {
                Finding::error(
                    RuleId::PlotInConditional,
                    format!(
                        "Line {line_no}: Plot function found inside 'if' block - not allowed in v6 global scope"
                    ),
                )
                .at_line(line_no)
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "plot_scope_tests.rs"]
mod tests;
