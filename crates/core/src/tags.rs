//! Filtering of the version tag list in the sidebar.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// A version tag and the page it links to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub href: String,
}

/// A tag that matched the filter. `html` is the tag name with the matched
/// part wrapped in `<strong>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagMatch {
    pub href: String,
    pub html: String,
}

/// Tags whose name matches `filter`, case-insensitively, in input order.
///
/// The filter is a regular expression; one that does not compile is matched
/// literally. An empty filter matches nothing: the caller shows the full
/// version tree instead.
pub fn filter_tags(filter: &str, tags: &[Tag]) -> Vec<TagMatch> {
    if filter.is_empty() {
        return Vec::new();
    }
    let Some(pattern) = compile(filter) else {
        return Vec::new();
    };
    tags.iter()
        .filter_map(|tag| {
            let found = pattern.find(&tag.name)?;
            if found.as_str().is_empty() {
                return None;
            }
            let html = format!(
                "{}<strong>{}</strong>{}",
                &tag.name[..found.start()],
                found.as_str(),
                &tag.name[found.end()..],
            );
            Some(TagMatch {
                href: tag.href.clone(),
                html,
            })
        })
        .collect()
}

fn compile(filter: &str) -> Option<Regex> {
    RegexBuilder::new(filter)
        .case_insensitive(true)
        .build()
        .or_else(|err| {
            tracing::debug!(filter, %err, "tag filter is not a regex, matching literally");
            RegexBuilder::new(&regex::escape(filter))
                .case_insensitive(true)
                .build()
        })
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tags() -> Vec<Tag> {
        ["v6.1", "v6.10", "v5.15", "v6.1-rc1"]
            .into_iter()
            .map(|name| Tag {
                name: name.into(),
                href: format!("/linux/{name}/source"),
            })
            .collect()
    }

    #[test]
    fn highlights_first_match() {
        let found = filter_tags("6.1", &tags());
        assert_eq!(
            found,
            vec![
                TagMatch {
                    href: "/linux/v6.1/source".into(),
                    html: "v<strong>6.1</strong>".into()
                },
                TagMatch {
                    href: "/linux/v6.10/source".into(),
                    html: "v<strong>6.1</strong>0".into()
                },
                TagMatch {
                    href: "/linux/v6.1-rc1/source".into(),
                    html: "v<strong>6.1</strong>-rc1".into()
                },
            ]
        );
    }

    #[test]
    fn case_insensitive() {
        let found = filter_tags("RC", &tags());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].html, "v6.1-<strong>rc</strong>1");
    }

    #[test]
    fn regex_filters_work() {
        let found = filter_tags("^v5", &tags());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].href, "/linux/v5.15/source");
    }

    #[test]
    fn invalid_regex_matches_literally() {
        let tags = vec![Tag {
            name: "weird(tag".into(),
            href: "/x".into(),
        }];
        let found = filter_tags("d(t", &tags);
        assert_eq!(found[0].html, "weir<strong>d(t</strong>ag");
    }

    #[test]
    fn empty_filter_matches_nothing() {
        assert!(filter_tags("", &tags()).is_empty());
    }
}
