//! Domain logic for the sticker asset index.
//!
//! Pure filesystem-to-JSON grouping: scan category directories of PNG
//! assets, pair lineart and background variants that share a numeric
//! suffix, and produce an ordered, client-consumable index. No HTTP
//! types live here.

pub mod category;
pub mod error;
pub mod group;
pub mod index;

pub use category::CategorySet;
pub use error::CoreError;
pub use group::{AssetGroup, AssetVariant, GroupKey};
pub use index::{scan_index, AssetIndex, Meta};
