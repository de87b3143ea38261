use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{LineRef, Scheme};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid viewer config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Page conventions the selector relies on.
///
/// Every field has a default matching the markup produced by the source
/// view templates, so `{}` is a complete configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Class toggled on highlighted rows and code lines.
    pub highlight_class: String,
    /// Selector of the element holding the line-number column. Pages without
    /// it are not source views and get no handlers.
    pub line_numbers_selector: String,
    /// Selector of the element that scrolls the source view.
    pub scroll_container_selector: String,
    /// Tag name of line anchors.
    pub anchor_tag: String,
    /// Tag name of one row of the line-number column.
    pub row_tag: String,
    /// Classes of elements wrapping rows in diff views (added, removed...).
    pub diff_wrapper_classes: Vec<String>,
    /// Id prefix of code lines, followed by the line number.
    pub code_line_id_prefix: String,
    /// Same, for the old side of a diff (`OL` anchors).
    pub old_code_line_id_prefix: String,
    pub scroll: ScrollOffsets,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            highlight_class: "line-highlight".into(),
            line_numbers_selector: ".linenodiv".into(),
            scroll_container_selector: ".wrapper".into(),
            anchor_tag: "A".into(),
            row_tag: "SPAN".into(),
            diff_wrapper_classes: vec!["added".into(), "removed".into(), "changed".into()],
            code_line_id_prefix: "codeline-".into(),
            old_code_line_id_prefix: "old-codeline-".into(),
            scroll: ScrollOffsets::default(),
        }
    }
}

impl ViewerConfig {
    pub fn from_json(data: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(data)?)
    }

    /// Id of the code line matching `line`.
    pub fn code_line_id(&self, line: LineRef) -> String {
        let prefix = match line.scheme {
            Scheme::Old => &self.old_code_line_id_prefix,
            Scheme::Primary | Scheme::Bare => &self.code_line_id_prefix,
        };
        format!("{prefix}{}", line.number)
    }
}

/// Keeps a selected line clear of the fixed top bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollOffsets {
    /// Lines closer than this to the top use `fallback` instead.
    pub threshold: f64,
    pub fallback: f64,
    /// Added to the line's own offset.
    pub margin: f64,
}

impl Default for ScrollOffsets {
    fn default() -> Self {
        Self {
            threshold: 100.0,
            fallback: 200.0,
            margin: 100.0,
        }
    }
}

impl ScrollOffsets {
    /// Scroll position for an element at `offset_top`.
    pub fn scroll_top_for(&self, offset_top: f64) -> f64 {
        if offset_top < self.threshold {
            self.fallback
        } else {
            offset_top + self.margin
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_is_default() {
        assert_eq!(ViewerConfig::from_json("{}").unwrap(), ViewerConfig::default());
    }

    #[test]
    fn partial_override() {
        let config = ViewerConfig::from_json(
            r#"{ "highlight_class": "hl", "scroll": { "margin": 40 } }"#,
        )
        .unwrap();
        assert_eq!(config.highlight_class, "hl");
        assert_eq!(config.anchor_tag, "A");
        assert_eq!(config.scroll.margin, 40.0);
        assert_eq!(config.scroll.threshold, 100.0);
    }

    #[test]
    fn rejects_bad_json() {
        assert!(matches!(
            ViewerConfig::from_json(r#"{ "row_tag": 3 }"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn code_line_ids_follow_scheme() {
        let config = ViewerConfig::default();
        assert_eq!(config.code_line_id(LineRef::primary(12)), "codeline-12");
        assert_eq!(config.code_line_id(LineRef::old(12)), "old-codeline-12");
    }

    #[test]
    fn scroll_offset_clamps_near_top() {
        let scroll = ScrollOffsets::default();
        assert_eq!(scroll.scroll_top_for(0.0), 200.0);
        assert_eq!(scroll.scroll_top_for(99.0), 200.0);
        assert_eq!(scroll.scroll_top_for(100.0), 200.0);
        assert_eq!(scroll.scroll_top_for(450.0), 550.0);
    }
}
