//! Links from cross-reference results into source views.

use serde::Serialize;
use xref_view_protocol::{IdentResponse, SymbolEntry};

use crate::model::LineRef;

/// `/{project}/{version}/source/{path}#L{line}`.
pub fn source_link(project: &str, version: &str, path: &str, line: u32) -> String {
    let path = path.trim_start_matches('/');
    let anchor = LineRef::primary(line);
    format!("/{project}/{version}/source/{path}#{anchor}")
}

/// One line of a lookup result, with the code preview the backend sent for
/// it, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineLink<'a> {
    pub line: u32,
    pub href: String,
    pub peek: Option<&'a str>,
}

/// Links of one file in a lookup result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryLinks<'a> {
    pub path: &'a str,
    pub kind: Option<&'a str>,
    pub lines: Vec<LineLink<'a>>,
}

/// A whole lookup response resolved into links, grouped like the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentLinks<'a> {
    pub definitions: Vec<EntryLinks<'a>>,
    pub references: Vec<EntryLinks<'a>>,
    pub documentations: Vec<EntryLinks<'a>>,
}

impl<'a> IdentLinks<'a> {
    pub fn new(project: &str, version: &str, response: &'a IdentResponse) -> Self {
        let group = |entries: &'a [SymbolEntry]| -> Vec<EntryLinks<'a>> {
            entries
                .iter()
                .map(|entry| EntryLinks {
                    path: &entry.path,
                    kind: entry.kind.as_deref(),
                    lines: line_links(project, version, response, entry),
                })
                .collect()
        };
        Self {
            definitions: group(&response.definitions),
            references: group(&response.references),
            documentations: group(&response.documentations),
        }
    }
}

/// Per-line links of `entry`, each carrying its preview from `response`.
pub fn line_links<'a>(
    project: &str,
    version: &str,
    response: &'a IdentResponse,
    entry: &SymbolEntry,
) -> Vec<LineLink<'a>> {
    entry
        .line
        .iter()
        .map(|line| LineLink {
            line,
            href: source_link(project, version, &entry.path, line),
            peek: response.peek(&entry.path, line),
        })
        .collect()
}
