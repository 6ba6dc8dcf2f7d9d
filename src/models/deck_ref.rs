//! Relative, category-qualified name of a stored deck, e.g. `languages/spanish`.
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DeckReference(String);

impl DeckReference {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeckReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DeckReference {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for DeckReference {
    fn from(value: String) -> Self {
        Self(value)
    }
}
