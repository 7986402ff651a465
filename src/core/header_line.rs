use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One `name=value` pair from a header line, value already unquoted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPair {
    pub name: String,
    pub value: String,
}

impl TagPair {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The tags of a parsed header line, in the order they were written.
///
/// A repeated tag name keeps the position of its first occurrence and the
/// value of its last.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParsedHeaderLine {
    tags: IndexMap<String, String>,
}

impl ParsedHeaderLine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.tags.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render back to `<name=value,...>` form, quoting values where needed
    #[must_use]
    pub fn to_line(&self) -> String {
        self.to_string()
    }
}

// Tag order is part of a line's identity, so compare entry by entry
// rather than as maps.
impl PartialEq for ParsedHeaderLine {
    fn eq(&self, other: &Self) -> bool {
        self.tags.len() == other.tags.len() && self.tags.iter().eq(other.tags.iter())
    }
}

impl Eq for ParsedHeaderLine {}

impl From<Vec<TagPair>> for ParsedHeaderLine {
    fn from(pairs: Vec<TagPair>) -> Self {
        pairs.into_iter().collect()
    }
}

impl FromIterator<TagPair> for ParsedHeaderLine {
    fn from_iter<I: IntoIterator<Item = TagPair>>(iter: I) -> Self {
        Self {
            tags: iter.into_iter().map(|p| (p.name, p.value)).collect(),
        }
    }
}

impl std::fmt::Display for ParsedHeaderLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{name}=")?;
            if needs_quoting(value) {
                write!(f, "\"{}\"", escape_value(value))?;
            } else {
                write!(f, "{value}")?;
            }
        }
        write!(f, ">")
    }
}

/// A value must be quoted if written bare it would split, be trimmed, or be
/// read back as a quoted value.
fn needs_quoting(value: &str) -> bool {
    value
        .chars()
        .any(|c| matches!(c, ',' | '"' | '\\' | '<' | '>') || c.is_whitespace())
}

/// Escape a value for use inside double quotes
#[must_use]
pub fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
