//! Tri-state fields for partial updates.
//!
//! Update shapes use `Option<T>` for columns that cannot be null (absent or
//! `null` both mean "keep") and `Option<Option<T>>` for nullable columns:
//!
//! | JSON            | Rust               | effect    |
//! |-----------------|--------------------|-----------|
//! | field missing   | `None`             | keep      |
//! | `"field": null` | `Some(None)`       | clear     |
//! | `"field": v`    | `Some(Some(v))`    | overwrite |
//!
//! Nullable fields must be declared with
//! `#[serde(default, deserialize_with = "crate::patch::double_option")]`
//! so serde can tell a missing key from an explicit `null`.

use serde::{Deserialize, Deserializer};

/// Deserializes a present field into `Some(..)`, keeping `null` as `Some(None)`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
