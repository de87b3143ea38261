use std::fmt;

/// Numbering scheme of a line anchor.
///
/// Source views number lines with `L`. Diff views additionally carry the
/// line numbers of the old file under `OL`. Bare numeric ids are accepted as
/// a last resort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// `OL42`: line of the old side of a diff.
    Old,
    /// `L42`: line of the displayed file.
    Primary,
    /// `42`
    Bare,
}

impl Scheme {
    /// Recognized schemes in matching order, longest token first. `Bare`
    /// matches everything and has to stay last.
    pub const MATCH_ORDER: [Scheme; 3] = [Scheme::Old, Scheme::Primary, Scheme::Bare];

    pub const fn token(self) -> &'static str {
        match self {
            Scheme::Old => "OL",
            Scheme::Primary => "L",
            Scheme::Bare => "",
        }
    }

    /// Split an anchor id into its scheme and the remaining text.
    ///
    /// Always succeeds because [`Scheme::Bare`] matches anything; whether the
    /// remainder is a number is the caller's business.
    pub fn split(token: &str) -> (Scheme, &str) {
        for scheme in Self::MATCH_ORDER {
            if let Some(rest) = token.strip_prefix(scheme.token()) {
                return (scheme, rest);
            }
        }
        (Scheme::Bare, token)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// One addressable line: a scheme plus a 1-based line number.
///
/// `Display` produces the anchor element id (`L42`, `OL7`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineRef {
    pub scheme: Scheme,
    pub number: u32,
}

impl LineRef {
    pub const fn new(scheme: Scheme, number: u32) -> Self {
        Self { scheme, number }
    }

    pub const fn primary(number: u32) -> Self {
        Self::new(Scheme::Primary, number)
    }

    pub const fn old(number: u32) -> Self {
        Self::new(Scheme::Old, number)
    }

    /// Id of the anchor element in the line-number column.
    pub fn anchor_id(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LineRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.scheme.token(), self.number)
    }
}
