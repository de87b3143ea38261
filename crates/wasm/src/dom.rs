use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};
use xref_view_core::LineDom;

/// [`LineDom`] over the live document.
pub struct WebDom {
    document: Document,
    /// Element scrolled to reveal a selection (`.wrapper`). Missing on
    /// layouts where the window itself scrolls, in which case nothing is
    /// scrolled.
    scroller: Option<Element>,
}

impl WebDom {
    pub fn new(document: Document, scroller: Option<Element>) -> Self {
        Self { document, scroller }
    }
}

impl LineDom for WebDom {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn tag_name(&self, node: &Element) -> String {
        node.tag_name()
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn parent(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn next_sibling(&self, node: &Element) -> Option<Element> {
        node.next_element_sibling()
    }

    fn elements_with_class(&self, class: &str) -> Vec<Element> {
        // The collection is live; snapshot it before classes get removed.
        let live = self.document.get_elements_by_class_name(class);
        (0..live.length()).filter_map(|i| live.item(i)).collect()
    }

    fn add_class(&mut self, node: &Element, class: &str) {
        if let Err(e) = node.class_list().add_1(class) {
            web_sys::console::error_1(&format!("xref: cannot add class {class}: {e:?}").into());
        }
    }

    fn remove_class(&mut self, node: &Element, class: &str) {
        if let Err(e) = node.class_list().remove_1(class) {
            web_sys::console::error_1(&format!("xref: cannot remove class {class}: {e:?}").into());
        }
    }

    fn offset_top(&self, node: &Element) -> f64 {
        node.dyn_ref::<HtmlElement>()
            .map_or(0.0, |el| f64::from(el.offset_top()))
    }

    fn set_scroll_top(&mut self, top: f64) {
        if let Some(scroller) = &self.scroller {
            scroller.set_scroll_top(top.round() as i32);
        }
    }
}
