#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for `enum-meta`.
//! Rust has no runtime reflection, so the metadata attached to enum variants is
//! compiled into trait impls by [`macro@EnumMeta`]. The runtime crate re-exports the
//! derive, so consumers normally depend on `enum-meta` only:
//! ```toml
//! [dependencies]
//! enum-meta = { path = "../crates/enum-meta" }
//! ```
//!
//! See each macro’s docstring for examples; they are `ignore`d to avoid compiling in this crate,
//! but should be copied into consuming crates’ tests as needed.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derives `enum_meta::EnumMeta` and one `enum_meta::HasAttribute<Kind>` impl per attribute kind.
///
/// # Variant Attributes
///
/// * `#[description("...")]` or `#[description = "..."]` - display text, at most one per variant.
/// * `#[attribute(expr, ...)]` - one or more metadata values. The kind is read from the
///   expression:
///     * `Kind { field: value }` and `Kind(value)` - the struct path.
///     * `Kind::new(args)` - the path without its last segment.
///     * `Kind` - a unit struct.
///     * `Kind = expr` - explicit kind for any other expression.
///
/// A call whose last path segment is capitalized is read as a tuple struct, so an enum
/// tuple variant such as `Color::Rgb(1, 2, 3)` is taken as kind `Color::Rgb`; write
/// `Color = Color::Rgb(1, 2, 3)` instead.
///
/// Kinds are matched by their spelling. Write a kind the same way on every variant and in
/// `kinds(..)`: `Rank` and `self::Rank` produce two conflicting `HasAttribute` impls.
///
/// # Container Attributes
///
/// * `#[meta(crate = "path")]` - path of the runtime crate when it is re-exported.
/// * `#[meta(kinds(A, B))]` - kinds that get a `HasAttribute` impl even when no variant uses them.
///
/// # Errors
/// Emits a compile-time error if the input is not an enum, a variant carries fields,
/// a variant has two descriptions, or an attribute kind cannot be inferred.
///
/// # Example
///
/// ```rust,ignore
/// use enum_meta::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// pub struct Rank {
///     pub order: i32,
///     pub label: &'static str,
/// }
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, EnumMeta)]
/// pub enum Stage {
///     #[description("Draft document")]
///     #[attribute(Rank { order: 1, label: "One" })]
///     Draft,
///     #[attribute(Rank { order: 2, label: "Two" })]
///     Published,
/// }
///
/// assert_eq!(Stage::Draft.description(), "Draft document");
/// assert_eq!(Stage::Published.description(), "Published");
/// assert_eq!(Stage::Published.attribute::<Rank>().map(|r| r.order), Some(2));
/// ```
#[proc_macro_derive(EnumMeta, attributes(meta, description, attribute))]
pub fn enum_meta(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::meta::expand_derive(input).into()
}

/// Attribute macro for declaring the error enums of this workspace.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to `Result<T, ErrorName>`.
/// * **Internal Fallback**: Provides `From<&'static str>` and `From<String>` implementations
///   if an `Internal` variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Every variant uses named fields.
/// 3. A `context` field, when present, is `Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use enum_meta_derive::meta_error;
/// use std::borrow::Cow;
///
/// #[meta_error]
/// pub enum LookupError {
///     #[error("Missing entry{}: {key}", format_context(.context))]
///     Missing { key: String, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn meta_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
