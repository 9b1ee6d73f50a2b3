use crate::error::{EnumMetaError, Result};
use crate::lookup::{EnumMeta, EnumMetaExt, HasAttribute};
use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

/// Bulk operations over every variant of `E`, in declaration order.
///
/// `Enum` is never constructed; it only carries the type parameter. Each call
/// builds a fresh iterator over the compile-time table of `E`, so two calls
/// always yield the same sequence.
///
/// Only enums deriving [`EnumMeta`](crate::EnumMeta) are accepted:
///
/// ```compile_fail
/// let values: Vec<f64> = enum_meta::Enum::<f64>::values().collect();
/// ```
pub struct Enum<E>(PhantomData<fn() -> E>);

impl<E> fmt::Debug for Enum<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Enum").field(&type_name::<E>()).finish()
    }
}

impl<E: EnumMeta> Enum<E> {
    /// Every variant of `E`.
    pub fn values() -> impl ExactSizeIterator<Item = E> + DoubleEndedIterator + Clone {
        E::VARIANTS.iter().cloned()
    }

    /// Variant identifiers of `E`.
    pub fn names() -> impl ExactSizeIterator<Item = &'static str> + DoubleEndedIterator + Clone {
        E::NAMES.iter().copied()
    }

    /// Description of every variant, falling back to the variant name.
    pub fn descriptions() -> impl ExactSizeIterator<Item = &'static str> + DoubleEndedIterator + Clone
    {
        E::VARIANTS.iter().map(|e| e.description())
    }

    /// First attribute of kind `A` for every variant.
    ///
    /// Variants without one yield `None`, so the length always matches [`Enum::values`].
    pub fn attributes<A>() -> impl ExactSizeIterator<Item = Option<A>> + DoubleEndedIterator + Clone
    where
        E: HasAttribute<A>,
    {
        E::VARIANTS.iter().map(|e| e.attribute::<A>())
    }

    /// `(variant, description)` pairs.
    pub fn description_pairs()
    -> impl ExactSizeIterator<Item = (E, &'static str)> + DoubleEndedIterator + Clone {
        E::VARIANTS.iter().map(|e| (e.clone(), e.description()))
    }

    /// `(variant, first attribute of kind A)` pairs.
    pub fn attribute_pairs<A>()
    -> impl ExactSizeIterator<Item = (E, Option<A>)> + DoubleEndedIterator + Clone
    where
        E: HasAttribute<A>,
    {
        E::VARIANTS.iter().map(|e| (e.clone(), e.attribute::<A>()))
    }

    #[must_use]
    pub const fn len() -> usize {
        E::VARIANTS.len()
    }

    #[must_use]
    pub const fn is_empty() -> bool {
        E::VARIANTS.is_empty()
    }

    /// Finds the variant declared as `name` (case-sensitive).
    ///
    /// # Errors
    /// Returns [`EnumMetaError::UnknownName`] if no variant has that identifier.
    pub fn from_name(name: &str) -> Result<E> {
        let position = E::NAMES.iter().position(|candidate| *candidate == name);
        position.map(|i| E::VARIANTS[i].clone()).ok_or_else(|| {
            tracing::debug!(enum_name = type_name::<E>(), name, "No variant with this name");
            EnumMetaError::UnknownName {
                enum_name: type_name::<E>(),
                name: name.to_owned(),
                context: None,
            }
        })
    }

    /// Finds the first variant whose [`description`](EnumMetaExt::description) equals `description`.
    ///
    /// The name fallback applies, so a variant without a description matches its own name.
    ///
    /// # Errors
    /// Returns [`EnumMetaError::UnknownDescription`] if no variant matches.
    pub fn from_description(description: &str) -> Result<E> {
        E::VARIANTS.iter().find(|e| e.description() == description).cloned().ok_or_else(|| {
            tracing::debug!(
                enum_name = type_name::<E>(),
                description,
                "No variant with this description"
            );
            EnumMetaError::UnknownDescription {
                enum_name: type_name::<E>(),
                description: description.to_owned(),
                context: None,
            }
        })
    }
}
