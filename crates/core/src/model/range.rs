use std::fmt;

use super::line::{LineRef, Scheme};

/// Where the selector currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// Nothing selected.
    Idle,
    /// One line picked, not yet extended with a shift-click.
    SingleSelected,
    /// A two-ended range (possibly spanning a single line).
    RangeSelected,
}

/// The selected line range.
///
/// Both ends always share one scheme, and `start <= end` holds whenever an
/// end is present. Constructors normalize their input, so a range built from
/// `(25, 10)` is stored as `10..=25`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionRange {
    scheme: Scheme,
    start: u32,
    end: Option<u32>,
}

impl SelectionRange {
    /// A single-line selection that a later shift-click may extend.
    pub fn single(line: LineRef) -> Self {
        let range = Self {
            scheme: line.scheme,
            start: line.number,
            end: None,
        };
        range.debug_check();
        range
    }

    /// A two-ended range over `a` and `b` in either order.
    pub fn spanning(scheme: Scheme, a: u32, b: u32) -> Self {
        let range = Self {
            scheme,
            start: a.min(b),
            end: Some(a.max(b)),
        };
        range.debug_check();
        range
    }

    pub const fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub const fn start(&self) -> LineRef {
        LineRef::new(self.scheme, self.start)
    }

    /// The far end, or `None` for a single-line selection.
    pub fn end(&self) -> Option<LineRef> {
        self.end.map(|n| LineRef::new(self.scheme, n))
    }

    /// The last selected line: the end if there is one, else the start.
    pub fn last(&self) -> LineRef {
        LineRef::new(self.scheme, self.end.unwrap_or(self.start))
    }

    /// Inclusive numeric bounds.
    pub fn bounds(&self) -> (u32, u32) {
        (self.start, self.end.unwrap_or(self.start))
    }

    pub fn is_extended(&self) -> bool {
        self.end.is_some()
    }

    pub fn contains(&self, line: LineRef) -> bool {
        let (lo, hi) = self.bounds();
        line.scheme == self.scheme && (lo..=hi).contains(&line.number)
    }

    pub fn state(&self) -> SelectionState {
        if self.is_extended() {
            SelectionState::RangeSelected
        } else {
            SelectionState::SingleSelected
        }
    }

    /// URL fragment for this range, including the leading `#`.
    pub fn to_hash(&self) -> String {
        format!("#{self}")
    }

    fn debug_check(&self) {
        if let Some(end) = self.end {
            debug_assert!(self.start <= end, "range start {} after end {end}", self.start);
        }
        debug_assert!(self.start > 0, "line numbers are 1-based");
    }
}

/// `L10` or `L10-L25`, without the `#`.
impl fmt::Display for SelectionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start())?;
        if let Some(end) = self.end() {
            write!(f, "-{end}")?;
        }
        Ok(())
    }
}
