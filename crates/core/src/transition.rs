use crate::model::{LineRef, SelectionRange};

/// Next selection after a click on `clicked`.
///
/// A plain click, a click without a current selection, or a click in another
/// numbering scheme starts over with a single line. A shift-click in the same
/// scheme extends or shrinks the current selection:
///
/// - the first shift-click after a plain click spans from the start to the
///   clicked line;
/// - below the range moves the start, above the range moves the end;
/// - inside the range moves the nearer boundary, and a click exactly in the
///   middle moves the end.
pub fn transition(current: Option<&SelectionRange>, clicked: LineRef, shift: bool) -> SelectionRange {
    let Some(current) = current.filter(|range| shift && range.scheme() == clicked.scheme) else {
        return SelectionRange::single(clicked);
    };

    let scheme = current.scheme();
    let line = clicked.number;
    let Some(end) = current.end() else {
        return SelectionRange::spanning(scheme, current.start().number, line);
    };

    let (start, end) = (current.start().number, end.number);
    let (start, end) = if line < start {
        (line, end)
    } else if line > end {
        (start, line)
    } else if line - start < end - line {
        (line, end)
    } else {
        (start, line)
    };

    let next = SelectionRange::spanning(scheme, start, end);
    tracing::trace!(from = %current, to = %next, "range transition");
    next
}
