use core::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, DomainResult, ValueObject};

/// Display name of a product, which doubles as its identity key.
///
/// The original spelling is kept for display. Equality and hashing compare
/// names char by char under a case-insensitive key, so `"Widget"`,
/// `"widget"` and `"WIDGET"` are the same name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductName(String);

impl ProductName {
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a raw name.
    pub fn matches(&self, other: &str) -> bool {
        folded(&self.0).eq(folded(other))
    }
}

/// Per-char comparison key: simple uppercase, then simple lowercase.
///
/// Going through uppercase first merges forms that only meet there (`σ`, `ς`
/// and `Σ`; `ı` and `i`). Simple mappings keep one char per char: a
/// multi-char uppercase (`ß` -> `SS`) leaves the char as is, and the one
/// multi-char lowercase (`İ` -> `i̇`) keeps its base letter.
fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    let upper = match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    };
    upper.to_lowercase().next().unwrap_or(upper)
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().map(fold_char)
}

impl PartialEq for ProductName {
    fn eq(&self, other: &Self) -> bool {
        self.matches(&other.0)
    }
}

impl Eq for ProductName {}

impl Hash for ProductName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in folded(&self.0) {
            c.hash(state);
        }
    }
}

impl ValueObject for ProductName {}

impl core::fmt::Display for ProductName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ProductName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ProductName {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProductName> for String {
    fn from(value: ProductName) -> Self {
        value.0
    }
}

impl AsRef<str> for ProductName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
