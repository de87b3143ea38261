use crate::config::ViewerConfig;
use crate::dom::{DomLookup, LineDom};
use crate::hash;
use crate::highlight;
use crate::model::{SelectionRange, SelectionState};
use crate::transition::transition;

/// Modifier keys held during a click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        meta: false,
    };

    /// Ctrl/Cmd-click opens the link in a new tab; the selector stays out.
    pub const fn opens_new_tab(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// What the event handler should do after a click.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClickResponse {
    /// Suppress the browser's own navigation.
    pub prevent_default: bool,
    /// New URL fragment to publish, if the selection changed.
    pub hash: Option<String>,
}

/// Owns the selection of one source page and keeps the page in sync with it.
#[derive(Debug, Clone, Default)]
pub struct LineRangeController {
    config: ViewerConfig,
    selection: Option<SelectionRange>,
}

impl LineRangeController {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            selection: None,
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn selection(&self) -> Option<&SelectionRange> {
        self.selection.as_ref()
    }

    pub fn state(&self) -> SelectionState {
        self.selection
            .as_ref()
            .map_or(SelectionState::Idle, SelectionRange::state)
    }

    /// Restore the selection from the fragment the page was opened with.
    pub fn on_load<D: LineDom>(&mut self, hash: &str, dom: &mut D) {
        self.apply_hash(hash, dom);
    }

    /// Re-read the fragment after a `hashchange`.
    ///
    /// The previous highlight is always dropped first, so a fragment that no
    /// longer names a line leaves the page unmarked.
    pub fn on_hash_change<D: LineDom>(&mut self, hash: &str, dom: &mut D) {
        self.apply_hash(hash, dom);
    }

    /// Handle a click inside the line-number column.
    ///
    /// `target_id` is the id of the clicked element. Clicks on anything but a
    /// line anchor are swallowed without touching the selection.
    pub fn on_click<D: LineDom>(
        &mut self,
        target_id: &str,
        modifiers: Modifiers,
        dom: &mut D,
    ) -> ClickResponse {
        if modifiers.opens_new_tab() {
            return ClickResponse::default();
        }

        let clicked = {
            let lookup = DomLookup::new(&*dom, &self.config.anchor_tag);
            hash::parse_line_id(target_id, &lookup)
        };
        let clicked = match clicked {
            Ok(line) => line,
            Err(err) => {
                tracing::debug!(target_id, %err, "click outside a line anchor");
                return ClickResponse {
                    prevent_default: true,
                    hash: None,
                };
            }
        };

        let next = transition(self.selection.as_ref(), clicked, modifiers.shift);
        highlight::render(dom, &self.config, &next);
        self.selection = Some(next);

        ClickResponse {
            prevent_default: true,
            hash: Some(next.to_hash()),
        }
    }

    fn apply_hash<D: LineDom>(&mut self, hash: &str, dom: &mut D) {
        highlight::clear(dom, &self.config);

        let parsed = {
            let lookup = DomLookup::new(&*dom, &self.config.anchor_tag);
            hash::parse_line_range_anchor(hash, &lookup)
        };
        match parsed {
            Ok(range) => {
                let marked = highlight::render(dom, &self.config, &range);
                highlight::scroll_to(dom, &self.config, &range);
                tracing::debug!(%range, marked, "selection restored from fragment");
                self.selection = Some(range);
            }
            Err(err) => {
                if !hash.is_empty() {
                    tracing::debug!(hash, %err, "fragment is not a line selection");
                }
                self.selection = None;
            }
        }
    }
}
