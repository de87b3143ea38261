use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Source snippets attached to an ident lookup: `path -> line -> text`.
pub type Peeks = BTreeMap<String, BTreeMap<u32, String>>;

/// Response body of the symbol cross-reference endpoint
/// (`/api/ident/{project}/{ident}?version=..&family=..`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentResponse {
    #[serde(default)]
    pub definitions: Vec<SymbolEntry>,
    #[serde(default)]
    pub references: Vec<SymbolEntry>,
    #[serde(default)]
    pub documentations: Vec<SymbolEntry>,
    /// Only present when the backend was asked for inline previews.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peeks: Option<Peeks>,
}

impl IdentResponse {
    /// Parse a response body.
    pub fn from_json(data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(data)
    }

    /// Source text of `line` in `path`, if the backend sent a preview for it.
    pub fn peek(&self, path: &str, line: u32) -> Option<&str> {
        self.peeks
            .as_ref()?
            .get(path)?
            .get(&line)
            .map(String::as_str)
    }

    /// Whether the lookup found nothing at all.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty() && self.references.is_empty() && self.documentations.is_empty()
    }
}

/// One file in which a symbol is defined, referenced or documented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolEntry {
    pub path: String,
    pub line: LineList,
    /// Definition kind (`"struct"`, `"function"`, ...). `null` for references.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Line numbers of a [`SymbolEntry`].
///
/// The backend sends either a bare number (`1`) or a comma-joined string
/// (`"78,142"`). Serializes back to the comma-joined form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineList(Vec<u32>);

impl LineList {
    pub fn new(lines: Vec<u32>) -> Self {
        Self(lines)
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn first(&self) -> Option<u32> {
        self.0.first().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    fn parse_joined(text: &str) -> Result<Self, std::num::ParseIntError> {
        text.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for LineList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

// --- Serde ---

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLineList {
    Number(u32),
    Joined(String),
}

impl Serialize for LineList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LineList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawLineList::deserialize(deserializer)? {
            RawLineList::Number(n) => Ok(Self(vec![n])),
            RawLineList::Joined(text) => {
                Self::parse_joined(&text).map_err(serde::de::Error::custom)
            }
        }
    }
}
