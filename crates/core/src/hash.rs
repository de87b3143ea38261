//! URL fragment grammar for line selections.
//!
//! ```text
//! hash   := "#" line | "#" line "-" line
//! line   := prefix digits
//! prefix := "OL" | "L" | ""
//! ```
//!
//! Fragments that do not parse, or that name a line missing from the page,
//! mean "no selection". The `Result` forms exist for logging and tests.

use thiserror::Error;

use crate::dom::LineLookup;
use crate::model::{LineRef, Scheme, SelectionRange};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineIdError {
    #[error("`{0}` is not a line number")]
    InvalidNumber(String),
    #[error("no line anchor with id `{0}`")]
    MissingAnchor(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnchorError {
    #[error("empty fragment")]
    Empty,
    #[error("expected at most two lines, got {0}")]
    TooManyParts(usize),
    #[error("range mixes `{0}` and `{1}` line numbers")]
    MixedSchemes(Scheme, Scheme),
    #[error(transparent)]
    Line(#[from] LineIdError),
}

/// Parse a single anchor id such as `L42` or `OL7`.
///
/// The number must be plain decimal digits and at least 1, and `lookup` must
/// confirm that an anchor with exactly this id is on the page.
pub fn parse_line_id(token: &str, lookup: &impl LineLookup) -> Result<LineRef, LineIdError> {
    let (scheme, digits) = Scheme::split(token);
    let number = parse_digits(digits).ok_or_else(|| LineIdError::InvalidNumber(token.to_string()))?;
    if !lookup.is_line_anchor(token) {
        return Err(LineIdError::MissingAnchor(token.to_string()));
    }
    Ok(LineRef::new(scheme, number))
}

/// Parse a fragment (with or without the leading `#`) into a selection.
///
/// One token gives a single-line selection, two tokens a normalized range
/// (`#L25-L10` is read as `#L10-L25`).
pub fn parse_line_range_anchor(
    hash: &str,
    lookup: &impl LineLookup,
) -> Result<SelectionRange, AnchorError> {
    let fragment = hash.strip_prefix('#').unwrap_or(hash);
    if fragment.is_empty() {
        return Err(AnchorError::Empty);
    }

    let parts: Vec<&str> = fragment.split('-').collect();
    match parts.as_slice() {
        [line] => Ok(SelectionRange::single(parse_line_id(line, lookup)?)),
        [first, last] => {
            let first = parse_line_id(first, lookup)?;
            let last = parse_line_id(last, lookup)?;
            if first.scheme != last.scheme {
                return Err(AnchorError::MixedSchemes(first.scheme, last.scheme));
            }
            Ok(SelectionRange::spanning(first.scheme, first.number, last.number))
        }
        _ => Err(AnchorError::TooManyParts(parts.len())),
    }
}

/// [`parse_line_id`], with failure as absence.
pub fn line_id(token: &str, lookup: &impl LineLookup) -> Option<LineRef> {
    parse_line_id(token, lookup).ok()
}

/// [`parse_line_range_anchor`], with failure as absence.
pub fn line_range_anchor(hash: &str, lookup: &impl LineLookup) -> Option<SelectionRange> {
    parse_line_range_anchor(hash, lookup).ok()
}

fn parse_digits(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok().filter(|&n| n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Anchors `L1..=L100` and `OL1..=OL50`.
    fn page(id: &str) -> bool {
        match Scheme::split(id) {
            (Scheme::Primary, n) => n.parse::<u32>().is_ok_and(|n| (1..=100).contains(&n)),
            (Scheme::Old, n) => n.parse::<u32>().is_ok_and(|n| (1..=50).contains(&n)),
            (Scheme::Bare, _) => false,
        }
    }

    #[test]
    fn parses_single_line() {
        assert_eq!(parse_line_id("L42", &page), Ok(LineRef::primary(42)));
        assert_eq!(parse_line_id("OL7", &page), Ok(LineRef::old(7)));
    }

    #[test]
    fn rejects_bad_numbers() {
        for token in ["L", "Lx", "L-1", "L+4", "L 4", "L0", "L99999999999"] {
            assert_eq!(
                parse_line_id(token, &|_: &str| true),
                Err(LineIdError::InvalidNumber(token.to_string())),
                "{token}"
            );
        }
    }

    #[test]
    fn missing_anchor_is_an_error() {
        assert_eq!(
            parse_line_id("L99999", &page),
            Err(LineIdError::MissingAnchor("L99999".into()))
        );
        assert_eq!(line_id("L99999", &page), None);
    }

    #[test]
    fn lookup_sees_exact_token() {
        // `L007` parses as 7, but only an element named `L007` counts.
        let only_l7 = |id: &str| id == "L7";
        assert_eq!(line_id("L007", &only_l7), None);
        assert_eq!(line_id("L7", &only_l7), Some(LineRef::primary(7)));
    }

    #[test]
    fn parses_ranges_and_swaps_reversed() {
        let forward = parse_line_range_anchor("#L10-L25", &page).unwrap();
        let reversed = parse_line_range_anchor("#L25-L10", &page).unwrap();
        assert_eq!(forward, reversed);
        assert_eq!(forward.bounds(), (10, 25));
        assert_eq!(
            parse_line_range_anchor("#OL7-OL9", &page).unwrap(),
            SelectionRange::spanning(Scheme::Old, 7, 9)
        );
    }

    #[test]
    fn single_token_is_unextended() {
        let range = parse_line_range_anchor("#L42", &page).unwrap();
        assert_eq!(range, SelectionRange::single(LineRef::primary(42)));
    }

    #[test]
    fn rejects_malformed_fragments() {
        assert_eq!(parse_line_range_anchor("#", &page), Err(AnchorError::Empty));
        assert_eq!(parse_line_range_anchor("", &page), Err(AnchorError::Empty));
        assert_eq!(
            parse_line_range_anchor("#L1-L2-L3", &page),
            Err(AnchorError::TooManyParts(3))
        );
        assert_eq!(
            parse_line_range_anchor("#L5-OL9", &page),
            Err(AnchorError::MixedSchemes(Scheme::Primary, Scheme::Old))
        );
        assert!(matches!(
            parse_line_range_anchor("#L5-", &page),
            Err(AnchorError::Line(LineIdError::InvalidNumber(_)))
        ));
        assert_eq!(line_range_anchor("#L10-L99999", &page), None);
        assert_eq!(line_range_anchor("#search", &page), None);
    }

    #[test]
    fn round_trips_through_serialization() {
        let ranges = [
            SelectionRange::single(LineRef::primary(1)),
            SelectionRange::single(LineRef::old(50)),
            SelectionRange::spanning(Scheme::Primary, 3, 3),
            SelectionRange::spanning(Scheme::Primary, 100, 1),
            SelectionRange::spanning(Scheme::Old, 7, 9),
        ];
        for range in ranges {
            assert_eq!(line_range_anchor(&range.to_hash(), &page), Some(range));
        }
    }
}
