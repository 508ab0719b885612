//! Indentation stack.
//!
//! Open indentation levels from outermost to innermost, always starting
//! with the sentinel level `0` and strictly increasing toward the top.
//! One stack lives for exactly one tokenization run.

/// Structural effect of a line's indentation width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum IndentChange {
    /// Wider than the innermost level: one new level opened.
    Indent,
    /// Narrower: this many levels closed.
    Dedent(usize),
    /// Same as the innermost level.
    Same,
}

#[derive(Clone, Debug)]
pub(crate) struct IndentStack {
    levels: Vec<u32>,
}

impl IndentStack {
    pub(crate) fn new() -> Self {
        IndentStack { levels: vec![0] }
    }

    /// Innermost open level.
    #[inline]
    pub(crate) fn top(&self) -> u32 {
        self.levels.last().copied().unwrap_or(0)
    }

    /// Number of levels opened above the sentinel.
    #[cfg(test)]
    pub(crate) fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// Apply a line's indentation `width`.
    ///
    /// Returns `None` when `width` is narrower than the top but matches no
    /// open level; the stack is left untouched in that case.
    pub(crate) fn apply(&mut self, width: u32) -> Option<IndentChange> {
        let top = self.top();
        if width > top {
            self.levels.push(width);
            return Some(IndentChange::Indent);
        }
        if !self.levels.contains(&width) {
            return None;
        }
        let mut closed = 0;
        while self.top() > width {
            self.levels.pop();
            closed += 1;
        }
        if closed == 0 {
            Some(IndentChange::Same)
        } else {
            Some(IndentChange::Dedent(closed))
        }
    }
}
