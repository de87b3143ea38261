use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single autocomplete entry: `value` goes into the input, `label` is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub value: String,
    pub label: String,
}

/// Body of the autocomplete endpoint.
///
/// JSON bodies are either an array of values (label = value) or an object
/// mapping value to label. Anything that is not JSON is a prerendered HTML
/// fragment that replaces the result list as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionPayload {
    Json(Vec<Suggestion>),
    Html(String),
}

impl SuggestionPayload {
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(Value::Array(items)) => Self::Json(
                items
                    .iter()
                    .map(|item| {
                        let text = scalar_text(item);
                        Suggestion {
                            value: text.clone(),
                            label: text,
                        }
                    })
                    .collect(),
            ),
            Ok(Value::Object(map)) => Self::Json(
                map.iter()
                    .map(|(value, label)| Suggestion {
                        value: value.clone(),
                        label: scalar_text(label),
                    })
                    .collect(),
            ),
            _ => Self::Html(body.to_string()),
        }
    }

    /// JSON suggestions, empty for HTML payloads.
    pub fn suggestions(&self) -> &[Suggestion] {
        match self {
            Self::Json(items) => items,
            Self::Html(_) => &[],
        }
    }

    /// Whether there is nothing to show (an empty JSON list or blank HTML).
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Json(items) => items.is_empty(),
            Self::Html(html) => html.trim().is_empty(),
        }
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn array_body_uses_value_as_label() {
        let payload = SuggestionPayload::from_body(r#"["kstat", "kstatfs"]"#);
        assert_eq!(
            payload.suggestions(),
            &[
                Suggestion {
                    value: "kstat".into(),
                    label: "kstat".into()
                },
                Suggestion {
                    value: "kstatfs".into(),
                    label: "kstatfs".into()
                },
            ]
        );
    }

    #[test]
    fn object_body_maps_value_to_label() {
        let payload = SuggestionPayload::from_body(r#"{"v6.1": "Linux 6.1"}"#);
        assert_eq!(payload.suggestions()[0].value, "v6.1");
        assert_eq!(payload.suggestions()[0].label, "Linux 6.1");
    }

    #[test]
    fn empty_json_is_empty() {
        assert!(SuggestionPayload::from_body("[]").is_empty());
        assert!(SuggestionPayload::from_body("{}").is_empty());
    }

    #[test]
    fn non_json_is_html() {
        let payload = SuggestionPayload::from_body("<li>kstat</li>");
        assert_eq!(payload, SuggestionPayload::Html("<li>kstat</li>".into()));
        assert!(payload.suggestions().is_empty());
        assert!(!payload.is_empty());
    }
}
