//! # Enum Metadata
//!
//! Descriptions and custom attributes for enum variants, looked up without
//! hand-written `match` tables.
//!
//! * Attach metadata with `#[derive(EnumMeta)]` and the `#[description(...)]` /
//!   `#[attribute(...)]` variant attributes; the derive compiles it into trait impls.
//! * Look up a single value with [`EnumMetaExt`] (`attribute`, `description`).
//! * Walk every variant with [`Enum`] (`values`, `descriptions`, `attributes`,
//!   `description_pairs`, `attribute_pairs`).
//!
//! Only fieldless enums can derive [`EnumMeta`], so asking [`Enum`] to walk a
//! non-enum type is a compile error rather than a runtime failure.
//!
//! ## Example
//!
//! ```rust
//! use enum_meta::prelude::*;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub struct Rank {
//!     pub order: i32,
//!     pub label: &'static str,
//! }
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, EnumMeta)]
//! pub enum Stage {
//!     #[description("Draft document")]
//!     #[attribute(Rank { order: 1, label: "One" })]
//!     Draft,
//!     #[attribute(Rank { order: 2, label: "Two" })]
//!     Published,
//! }
//!
//! assert_eq!(Stage::Draft.description(), "Draft document");
//! assert_eq!(Stage::Published.attribute::<Rank>().map(|r| r.label), Some("Two"));
//!
//! let descriptions: Vec<_> = Enum::<Stage>::descriptions().collect();
//! assert_eq!(descriptions, ["Draft document", "Published"]);
//! ```

extern crate self as enum_meta;

mod error;
mod lookup;
mod walker;

pub use crate::error::{EnumMetaError, EnumMetaErrorExt, Result};
pub use crate::lookup::{Description, EnumMeta, EnumMetaExt, HasAttribute};
pub use crate::walker::Enum;
pub use enum_meta_derive::EnumMeta;

pub mod prelude {
    pub use crate::{Description, Enum, EnumMeta, EnumMetaExt, HasAttribute};
}
