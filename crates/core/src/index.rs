//! Directory scan producing the full asset index.
//!
//! One read-only pass over `<base>/<category>/*.png` per category, grouped
//! via [`GroupKey`] and merged via [`AssetGroup::apply`]. Missing
//! directories yield empty listings; only real I/O failures are errors.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::category::CategorySet;
use crate::error::CoreError;
use crate::group::{AssetGroup, AssetVariant, GroupKey};

/// Reserved subdirectory for category-independent shared assets.
pub const SHARED_DIR: &str = "_shared";

/// Composition guide image looked up under [`SHARED_DIR`].
pub const GUIDE_FILENAME: &str = "base-guia.png";

/// Category-independent metadata block.
///
/// `guide` is omitted from the JSON entirely when the shared guide image is
/// absent, so the client can probe with a plain `in` check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Meta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guide: Option<String>,
}

/// Complete scan snapshot: one listing per category plus the meta block.
///
/// Serializes as a single flat JSON object, category keys first (in
/// [`CategorySet`] order) and `meta` last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetIndex {
    pub categories: IndexMap<String, Vec<AssetGroup>>,
    pub meta: Meta,
}

impl Serialize for AssetIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len() + 1))?;
        for (category, listing) in &self.categories {
            map.serialize_entry(category, listing)?;
        }
        map.serialize_entry("meta", &self.meta)?;
        map.end()
    }
}

/// Scan `base` and build the index for `categories`.
///
/// Asset URLs are synthesized as `<public_prefix>/<category>/<filename>`;
/// the prefix must match the static-file mount serving `base`.
pub fn scan_index(
    base: &Path,
    categories: &CategorySet,
    public_prefix: &str,
) -> Result<AssetIndex, CoreError> {
    let mut index = IndexMap::with_capacity(categories.len());

    for category in categories.iter() {
        let listing = scan_category(&base.join(category), category, public_prefix)?;
        index.insert(category.to_string(), listing);
    }

    let meta = scan_meta(base, public_prefix);

    Ok(AssetIndex {
        categories: index,
        meta,
    })
}

/// Scan one category directory into an ordered listing.
///
/// A missing or non-directory path is an empty listing, not an error.
fn scan_category(
    dir: &Path,
    category: &str,
    public_prefix: &str,
) -> Result<Vec<AssetGroup>, CoreError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut filenames = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        // Non-UTF-8 names cannot appear in a JSON listing; skip them.
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if name.ends_with(".png") {
            filenames.push(name);
        }
    }
    filenames.sort();

    // BTreeMap keyed by GroupKey gives the listing order for free.
    let mut grouped: BTreeMap<GroupKey, AssetGroup> = BTreeMap::new();
    for name in &filenames {
        let key = GroupKey::extract(name);
        let variant = AssetVariant::classify(name);
        let url = format!("{public_prefix}/{category}/{name}");
        grouped
            .entry(key.clone())
            .or_insert_with(|| AssetGroup::new(&key))
            .apply(variant, name, url);
    }

    Ok(grouped.into_values().collect())
}

/// Probe for the shared composition guide.
fn scan_meta(base: &Path, public_prefix: &str) -> Meta {
    let guide_path = base.join(SHARED_DIR).join(GUIDE_FILENAME);
    let guide = guide_path
        .is_file()
        .then(|| format!("{public_prefix}/{SHARED_DIR}/{GUIDE_FILENAME}"));
    Meta { guide }
}
