//! Marks the selected lines in the page.
//!
//! The line-number column and the code column are separate sibling chains,
//! so each is walked on its own from the first selected line to the last.

use crate::config::ViewerConfig;
use crate::dom::LineDom;
use crate::model::{LineRef, SelectionRange};

/// Remove the highlight class from every element carrying it.
pub fn clear<D: LineDom>(dom: &mut D, config: &ViewerConfig) {
    for node in dom.elements_with_class(&config.highlight_class) {
        dom.remove_class(&node, &config.highlight_class);
    }
}

/// Replace the current highlight with `range`.
///
/// Returns the number of elements marked. Rendering the same range twice
/// leaves the page as it was after the first call.
pub fn render<D: LineDom>(dom: &mut D, config: &ViewerConfig, range: &SelectionRange) -> usize {
    clear(dom, config);

    let first = range.start();
    let last = range.last();
    let mut marked = 0;

    if let Some(first_row) = row_of(dom, config, first) {
        let last_row = row_of(dom, config, last);
        marked += mark_siblings(dom, &config.highlight_class, first_row, last_row.as_ref());
    }

    let first_code = dom.element_by_id(&config.code_line_id(first));
    if let Some(first_code) = first_code {
        let last_code = dom.element_by_id(&config.code_line_id(last));
        marked += mark_siblings(dom, &config.highlight_class, first_code, last_code.as_ref());
    }

    marked
}

/// Scroll so the first selected line sits below the top bar.
pub fn scroll_to<D: LineDom>(dom: &mut D, config: &ViewerConfig, range: &SelectionRange) {
    let Some(anchor) = dom.element_by_id(&range.start().anchor_id()) else {
        return;
    };
    let top = config.scroll.scroll_top_for(dom.offset_top(&anchor));
    dom.set_scroll_top(top);
}

/// Element of the line-number column holding the anchor of `line`.
///
/// Usually the anchor's parent. In diff views that parent may be a wrapper
/// marking the line as added or removed, and the row is one level up.
fn row_of<D: LineDom>(dom: &D, config: &ViewerConfig, line: LineRef) -> Option<D::Node> {
    let anchor = dom.element_by_id(&line.anchor_id())?;
    let parent = dom.parent(&anchor)?;
    if is_row(dom, config, &parent) {
        Some(parent)
    } else {
        dom.parent(&parent)
    }
}

fn is_row<D: LineDom>(dom: &D, config: &ViewerConfig, node: &D::Node) -> bool {
    dom.tag_name(node).eq_ignore_ascii_case(&config.row_tag)
        && !config
            .diff_wrapper_classes
            .iter()
            .any(|class| dom.has_class(node, class))
}

/// Add `class` to `first` and its following siblings up to and including
/// `last`. Without a `last`, or if it is never reached, the walk runs to the
/// end of the chain.
fn mark_siblings<D: LineDom>(
    dom: &mut D,
    class: &str,
    first: D::Node,
    last: Option<&D::Node>,
) -> usize {
    let mut count = 0;
    let mut current = Some(first);
    while let Some(node) = current {
        dom.add_class(&node, class);
        count += 1;
        if last == Some(&node) {
            break;
        }
        current = dom.next_sibling(&node);
    }
    count
}
