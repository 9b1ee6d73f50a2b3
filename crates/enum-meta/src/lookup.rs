//! Per-value metadata lookup.
//!
//! [`EnumMeta`] and [`HasAttribute`] are implemented by `#[derive(EnumMeta)]`;
//! [`EnumMetaExt`] adds the lookup methods to every such enum.

use std::fmt;

/// Built-in metadata kind holding the display text of a variant.
///
/// Attached with `#[description("...")]`. When a variant has none,
/// [`EnumMetaExt::description`] falls back to the variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Description(&'static str);

impl Description {
    #[must_use]
    pub const fn new(text: &'static str) -> Self {
        Self(text)
    }

    #[must_use]
    pub const fn text(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Metadata of kind `A` attached to enum variants.
pub trait HasAttribute<A> {
    /// Every attribute of kind `A` on this variant, in declaration order.
    ///
    /// The values are built on each call.
    fn attributes(&self) -> Vec<A>;
}

/// A fieldless enum whose variants are known at compile time.
pub trait EnumMeta: Sized + Clone + 'static + HasAttribute<Description> {
    /// All variants in declaration order.
    const VARIANTS: &'static [Self];

    /// Variant identifiers, index-aligned with [`EnumMeta::VARIANTS`].
    const NAMES: &'static [&'static str];

    /// The declared identifier of this variant (not its discriminant).
    fn name(&self) -> &'static str;
}

/// Lookup methods available on every [`EnumMeta`] value.
pub trait EnumMetaExt: EnumMeta {
    /// First attribute of kind `A` attached to this variant, if any.
    fn attribute<A>(&self) -> Option<A>
    where
        Self: HasAttribute<A>,
    {
        HasAttribute::<A>::attributes(self).into_iter().next()
    }

    fn has_attribute<A>(&self) -> bool
    where
        Self: HasAttribute<A>,
    {
        self.attribute::<A>().is_some()
    }

    /// The raw [`Description`] attribute, without the name fallback.
    fn description_attribute(&self) -> Option<Description> {
        self.attribute::<Description>()
    }

    /// Description text of this variant, or its name when none is attached.
    fn description(&self) -> &'static str {
        self.description_attribute().map_or_else(|| self.name(), |d| d.text())
    }
}

impl<E: EnumMeta> EnumMetaExt for E {}
