use enum_meta::prelude::*;
use enum_meta::{EnumMetaError, EnumMetaErrorExt};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weight(pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unused;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumMeta)]
#[meta(kinds(Unused))]
pub enum Planet {
    #[description("Closest to the sun")]
    #[attribute(Weight(1))]
    Mercury,
    Venus,
    #[attribute(Weight(3), Weight(30))]
    Earth,
    #[description = "The red one"]
    Mars,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumMeta)]
pub enum Bare {
    North,
    East,
    South,
    West,
}

#[test]
fn bare_enum_descriptions_are_names() {
    let descriptions: Vec<_> = Enum::<Bare>::descriptions().collect();
    let names: Vec<_> = Enum::<Bare>::values().map(|v| v.name()).collect();
    assert_eq!(descriptions, names);
}

#[test]
fn attribute_pairs_match_values_in_length_and_order() {
    let values: Vec<_> = Enum::<Planet>::values().collect();

    let weights: Vec<_> = Enum::<Planet>::attribute_pairs::<Weight>().map(|(k, _)| k).collect();
    let unused: Vec<_> = Enum::<Planet>::attribute_pairs::<Unused>().map(|(k, _)| k).collect();
    assert_eq!(weights, values);
    assert_eq!(unused, values);
    assert_eq!(Enum::<Planet>::attributes::<Unused>().len(), Enum::<Planet>::len());
    assert!(Enum::<Planet>::attributes::<Unused>().all(|a| a.is_none()));
}

#[test]
fn first_attribute_is_reported() {
    let weights: Vec<_> = Enum::<Planet>::attributes::<Weight>().collect();
    assert_eq!(weights, [Some(Weight(1)), None, Some(Weight(3)), None]);
}

#[test]
fn description_pairs_zip_values_and_descriptions() {
    let expected: Vec<_> = Enum::<Planet>::values().zip(Enum::<Planet>::descriptions()).collect();
    let pairs: Vec<_> = Enum::<Planet>::description_pairs().collect();
    assert_eq!(pairs, expected);
    assert_eq!(pairs[3], (Planet::Mars, "The red one"));
}

#[test]
fn context_is_attached_to_lookup_errors() {
    let err = Enum::<Planet>::from_name("Pluto").context("reading catalog").unwrap_err();
    assert!(matches!(err, EnumMetaError::UnknownName { ref context, .. } if context.is_some()));
    assert!(err.to_string().contains("(reading catalog)"));
}

proptest! {
    #[test]
    fn unknown_names_are_rejected(name in "[a-zA-Z]{0,12}") {
        let known = Enum::<Planet>::names().any(|n| n == name);
        prop_assert_eq!(Enum::<Planet>::from_name(&name).is_ok(), known);
    }

    #[test]
    fn names_round_trip(index in 0usize..4) {
        let planet = Planet::VARIANTS[index];
        prop_assert_eq!(Enum::<Planet>::from_name(planet.name()), Ok(planet));
        prop_assert_eq!(Enum::<Planet>::from_description(planet.description()), Ok(planet));
    }
}
