//! Asset grouping: key extraction, variant classification, and merge.
//!
//! Files in one category pair up by a shared numeric suffix:
//! `peinado-07.png` (lineart) and `peinado-fondo-07.png` (background) both
//! key to `"07"` and merge into a single [`AssetGroup`]. A file without a
//! numeric suffix keys by its full name and stays a singleton.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Trailing numeric suffix just before the `.png` extension.
static KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-(\d+)\.png$").expect("valid regex"));

/// Marker substring that flags a file as the background variant.
const BACKGROUND_MARKER: &str = "-fondo-";

// ---------------------------------------------------------------------------
// Group key
// ---------------------------------------------------------------------------

/// Grouping key with an explicit total order.
///
/// Numeric keys sort before name keys; numeric keys compare by integer value
/// (raw digit string as tiebreak, so `"7"` and `"07"` stay distinct), name
/// keys compare lexicographically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupKey {
    Numeric { value: u64, raw: String },
    Name(String),
}

impl GroupKey {
    /// Extract the key for a filename.
    ///
    /// A trailing `-<digits>.png` suffix yields the digit string verbatim
    /// (`"07"` stays `"07"`); anything else keys by the full filename. A
    /// digit run too long for `u64` is treated as a name key.
    pub fn extract(filename: &str) -> Self {
        if let Some(caps) = KEY_RE.captures(filename) {
            let raw = &caps[1];
            if let Ok(value) = raw.parse::<u64>() {
                return Self::Numeric {
                    value,
                    raw: raw.to_string(),
                };
            }
        }
        Self::Name(filename.to_string())
    }

    /// The key as it appears in the `id` field of the JSON output.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Numeric { raw, .. } => raw,
            Self::Name(name) => name,
        }
    }
}

impl Ord for GroupKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (
                Self::Numeric { value: a, raw: ra },
                Self::Numeric { value: b, raw: rb },
            ) => a.cmp(b).then_with(|| ra.cmp(rb)),
            (Self::Numeric { .. }, Self::Name(_)) => Ordering::Less,
            (Self::Name(_), Self::Numeric { .. }) => Ordering::Greater,
            (Self::Name(a), Self::Name(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for GroupKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Variant classification
// ---------------------------------------------------------------------------

/// Role of a file within its group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetVariant {
    /// The foreground drawing. Owns the `lineart` and `name` fields.
    Lineart,
    /// The `-fondo-` background fill. Owns the `fondo` field.
    Background,
}

impl AssetVariant {
    /// Classify a filename: the `-fondo-` marker means background.
    pub fn classify(filename: &str) -> Self {
        if filename.contains(BACKGROUND_MARKER) {
            Self::Background
        } else {
            Self::Lineart
        }
    }
}

// ---------------------------------------------------------------------------
// Asset group
// ---------------------------------------------------------------------------

/// One entry in a category listing.
///
/// Absent fields serialize as explicit `null`s; the client checks each role
/// independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetGroup {
    pub id: String,
    pub name: Option<String>,
    pub lineart: Option<String>,
    pub fondo: Option<String>,
}

impl AssetGroup {
    /// Empty group for a key.
    pub fn new(key: &GroupKey) -> Self {
        Self {
            id: key.as_str().to_string(),
            name: None,
            lineart: None,
            fondo: None,
        }
    }

    /// Merge one file into the group.
    ///
    /// Each variant sets only the fields it owns, last write wins per field.
    /// With sorted enumeration order the result is deterministic even if two
    /// files of the same role collide on a key.
    pub fn apply(&mut self, variant: AssetVariant, filename: &str, url: String) {
        match variant {
            AssetVariant::Lineart => {
                self.name = Some(filename.to_string());
                self.lineart = Some(url);
            }
            AssetVariant::Background => {
                self.fondo = Some(url);
            }
        }
    }
}
