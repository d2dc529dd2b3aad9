//! Category enumeration for the asset scan.
//!
//! The category list is explicit configuration handed to the indexer, not a
//! constant baked into it. The default is the full 11-category set; smaller
//! deployments override it via `ASSET_CATEGORIES`.

use crate::error::CoreError;

/// Default category list, in the order the client renders its pickers.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "base",
    "boca",
    "barba",
    "cejas",
    "nariz",
    "ojos",
    "orejas",
    "peinado",
    "ropa",
    "espalda",
    "accesorio",
];

/// Ordered set of category names to scan.
///
/// Order is significant: it determines both scan order and the key order of
/// the serialized index. Names must be unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySet(Vec<String>);

impl CategorySet {
    /// Build a set from an ordered list of names.
    ///
    /// Rejects empty sets and duplicate names.
    pub fn new<I, S>(names: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        if names.is_empty() {
            return Err(CoreError::Validation(
                "Category set must contain at least one category".into(),
            ));
        }

        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(CoreError::Validation(format!(
                    "Duplicate category '{name}'"
                )));
            }
        }

        Ok(Self(names))
    }

    /// Parse a comma-separated list (the `ASSET_CATEGORIES` env var format).
    ///
    /// Whitespace around entries is trimmed; blank entries are dropped.
    pub fn parse_list(list: &str) -> Result<Self, CoreError> {
        Self::new(
            list.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        )
    }

    /// Iterate category names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self(DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect())
    }
}
