//! Property-based tests for the round-trip and robustness guarantees.
//!
//! Molecules are generated from the standard catalog so that every generated
//! tree can be decoded again through the same lookup table.

use chemform::tokenizer::tokenize;
use chemform::{
    element_from_str, molecule_from_str, parse_formula, to_string, Component, Element, Molecule,
    PeriodicTable,
};
use proptest::prelude::*;

fn standard_element() -> impl Strategy<Value = Element> {
    (1u32..=118, -4i32..=4).prop_map(|(number, charge)| {
        PeriodicTable::standard()
            .get(number)
            .unwrap()
            .clone()
            .with_charge(charge)
    })
}

fn molecule() -> impl Strategy<Value = Molecule> {
    let leaf = prop::collection::vec((standard_element(), 1u32..20), 1..5).prop_map(|parts| {
        let components = parts
            .into_iter()
            .map(|(element, count)| Component::new(element, count).unwrap())
            .collect();
        Molecule::new(components).unwrap()
    });

    leaf.prop_recursive(3, 24, 4, |inner| {
        prop::collection::vec(
            prop_oneof![
                (standard_element(), 1u32..10)
                    .prop_map(|(element, count)| Component::new(element, count).unwrap()),
                (inner, 1u32..5)
                    .prop_map(|(molecule, count)| Component::new(molecule, count).unwrap()),
            ],
            1..4,
        )
        .prop_map(|components| Molecule::new(components).unwrap())
    })
}

/// Formulas built from real symbols, optional counts and bracket groups.
fn formula() -> impl Strategy<Value = String> {
    let symbol = prop::sample::select(vec![
        "H", "He", "C", "N", "O", "Na", "Mg", "Al", "S", "Cl", "Ca", "Fe", "Cu", "Zn",
    ]);
    let count = prop::option::of(1u32..30);
    let item = (symbol, count).prop_map(|(symbol, count)| match count {
        Some(n) => format!("{symbol}{n}"),
        None => symbol.to_string(),
    });

    let flat = prop::collection::vec(item, 1..5).prop_map(|items| items.concat());
    flat.prop_recursive(3, 16, 4, |inner| {
        prop::collection::vec(
            prop_oneof![
                inner.clone(),
                (inner, prop::option::of(1u32..6)).prop_map(|(group, count)| match count {
                    Some(n) => format!("({group}){n}"),
                    None => format!("({group})"),
                }),
            ],
            1..4,
        )
        .prop_map(|parts| parts.concat())
    })
}

proptest! {
    #[test]
    fn prop_element_round_trip(element in standard_element()) {
        let decoded = element_from_str(&to_string(&element)).unwrap();
        // The element encoding carries no charge
        prop_assert_eq!(decoded, element.with_charge(0));
    }

    #[test]
    fn prop_molecule_round_trip(molecule in molecule()) {
        let table = PeriodicTable::standard();
        let text = to_string(&molecule);
        let decoded = molecule_from_str(&text, &table);
        prop_assert_eq!(decoded, Ok(molecule));
    }

    #[test]
    fn prop_rendering_is_idempotent(formula in formula()) {
        let table = PeriodicTable::standard();
        let parsed = parse_formula(&formula, &table).unwrap();
        let reparsed = parse_formula(&parsed.molecular_formula(), &table).unwrap();
        prop_assert_eq!(reparsed, parsed);
    }

    #[test]
    fn prop_charge_is_sum_of_parts(molecule in molecule()) {
        let expected: i64 = molecule
            .iter()
            .map(|c| c.particle().charge() * i64::from(c.count()))
            .sum();
        prop_assert_eq!(molecule.charge(), expected);
    }

    #[test]
    fn prop_tokenizer_never_panics(input in "\\PC*") {
        let _ = tokenize(&input);
    }

    #[test]
    fn prop_tokenizer_on_brace_soup(input in "[{},a1 ]{0,40}") {
        if let Ok(tokens) = tokenize(&input) {
            prop_assert!(!tokens.is_empty());
        }
    }

    #[test]
    fn prop_parser_never_panics(input in "[A-Za-z0-9() ]{0,24}") {
        let _ = parse_formula(&input, &PeriodicTable::standard());
    }
}
