//! Capabilities the selector needs from the page.
//!
//! The browser bridge implements these over `web_sys`; tests implement them
//! over an in-memory tree.

/// Existence check for line anchors.
///
/// `true` only when an element with exactly this id exists *and* is a line
/// anchor (an `<a>` in the line-number column).
pub trait LineLookup {
    fn is_line_anchor(&self, id: &str) -> bool;
}

impl<F> LineLookup for F
where
    F: Fn(&str) -> bool,
{
    fn is_line_anchor(&self, id: &str) -> bool {
        self(id)
    }
}

/// Read and write access to the rendered document.
pub trait LineDom {
    /// Element handle. Equality must be identity.
    type Node: Clone + PartialEq;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;
    /// Upper-case tag name, as in `Element.tagName`.
    fn tag_name(&self, node: &Self::Node) -> String;
    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;
    /// Next element sibling; text nodes are skipped.
    fn next_sibling(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Every element currently carrying `class`.
    fn elements_with_class(&self, class: &str) -> Vec<Self::Node>;
    fn add_class(&mut self, node: &Self::Node, class: &str);
    fn remove_class(&mut self, node: &Self::Node, class: &str);

    /// Vertical offset of `node` inside the scrolling container.
    fn offset_top(&self, node: &Self::Node) -> f64;
    /// Scroll the container holding the source view.
    fn set_scroll_top(&mut self, top: f64);
}

/// [`LineLookup`] over a [`LineDom`]: the id must resolve to an element with
/// the given tag.
pub struct DomLookup<'a, D> {
    dom: &'a D,
    anchor_tag: &'a str,
}

impl<'a, D: LineDom> DomLookup<'a, D> {
    pub fn new(dom: &'a D, anchor_tag: &'a str) -> Self {
        Self { dom, anchor_tag }
    }
}

impl<D: LineDom> LineLookup for DomLookup<'_, D> {
    fn is_line_anchor(&self, id: &str) -> bool {
        self.dom
            .element_by_id(id)
            .is_some_and(|el| self.dom.tag_name(&el).eq_ignore_ascii_case(self.anchor_tag))
    }
}
