use chemform::{
    element_from_str, molecule_from_str, parse_formula, parse_formula_with_options,
    particle_from_str, table_from_str, to_string, Component, Element, ElementLookup, Error,
    Molecule, ParseOptions, Particle, PeriodicTable,
};

fn table() -> PeriodicTable {
    PeriodicTable::standard()
}

#[test]
fn test_common_compounds() {
    let table = table();
    let cases = [
        ("H2O", 18.015),
        ("CO2", 44.009),
        ("NaCl", 58.44),
        ("C6H12O6", 180.156),
        ("H2SO4", 98.072),
        ("Fe2(SO4)3", 399.858),
        ("Ca3(PO4)2", 310.174),
    ];

    for (formula, mass) in cases {
        let molecule = parse_formula(formula, &table).unwrap();
        println!("{formula}: {:.3} g/mol", molecule.molar_mass());
        assert!(
            (molecule.molar_mass() - mass).abs() < 1e-3,
            "{formula}: {}",
            molecule.molar_mass()
        );
        assert_eq!(molecule.molecular_formula(), formula);
    }
}

#[test]
fn test_ammonium_sulfate_structure() {
    let table = table();
    let salt = parse_formula("(NH4)2SO4", &table).unwrap();
    let components = salt.components();
    assert_eq!(components.len(), 3);

    let ammonium = components[0].particle().as_molecule().unwrap();
    assert_eq!(components[0].count(), 2);
    assert_eq!(ammonium.molecular_formula(), "NH4");

    assert_eq!(components[1].particle().as_element().unwrap().symbol(), "S");
    assert_eq!(components[1].count(), 1);
    assert_eq!(components[2].particle().as_element().unwrap().symbol(), "O");
    assert_eq!(components[2].count(), 4);
}

#[test]
fn test_formula_errors() {
    let table = table();
    assert!(matches!(
        parse_formula("", &table),
        Err(Error::InvalidFormat { .. })
    ));
    assert!(matches!(
        parse_formula("Na(", &table),
        Err(Error::BracketImbalance { .. })
    ));
    assert_eq!(
        parse_formula("Qq", &table),
        Err(Error::ElementNotFound("Qq".to_string()))
    );
}

#[test]
fn test_error_messages_point_at_the_problem() {
    let table = table();
    let err = parse_formula("H2o", &table).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("index 2"), "{message}");
    assert!(message.contains("H2o"), "{message}");
}

#[test]
fn test_formula_survives_braced_round_trip() {
    let table = table();
    for formula in ["H2O", "(NH4)2SO4", "K4(Fe(CN)6)2", "CH3COOH", "Al2(SO4)3"] {
        let molecule = parse_formula(formula, &table).unwrap();
        let text = to_string(&molecule);
        let back = molecule_from_str(&text, &table).unwrap();
        assert_eq!(back, molecule, "{formula} via {text}");
    }
}

#[test]
fn test_rendering_is_idempotent() {
    let table = table();
    for formula in ["Ca(OH)2", "NH4(NO3)", "((CH3)3C)2O", "Mg(OH)", "C2H5OH"] {
        let once = parse_formula(formula, &table).unwrap();
        let twice = parse_formula(&once.molecular_formula(), &table).unwrap();
        assert_eq!(once, twice, "{formula}");
    }
}

#[test]
fn test_nested_groups_without_flattening() {
    let table = table();
    let nested = parse_formula_with_options("NH4(NO3)", &table, ParseOptions::nested()).unwrap();
    assert_eq!(nested.len(), 3);
    assert!(nested.components()[2].particle().is_molecule());
    assert_eq!(nested.molecular_formula(), "NH4NO3");
}

#[test]
fn test_charged_molecule_decoding() {
    let table = table();
    let sulfate = molecule_from_str("{M:2},{{16},{6},{1}},{{8},{-2},{4}}", &table).unwrap();
    assert_eq!(sulfate.charge(), -2);
    assert_eq!(sulfate.to_string(), "[SO4]2-");

    assert_eq!(table.get(16).unwrap().charge(), 0);
    assert_eq!(table.get(8).unwrap().charge(), 0);

    // Charges survive a second round trip
    let again = molecule_from_str(&to_string(&sulfate), &table).unwrap();
    assert_eq!(again, sulfate);
}

#[test]
fn test_table_insert_and_conflicts() {
    let mut table = PeriodicTable::new();
    let hydrogen = Element::new(1, 1, 1, 1.008, "hydrogen", "H").unwrap();
    table.insert(hydrogen.clone()).unwrap();

    let same_symbol = Element::new(2, 18, 1, 4.0026, "helium", "h").unwrap();
    assert!(matches!(
        table.insert(same_symbol),
        Err(Error::ConflictingElement(_))
    ));
    assert_eq!(table.len(), 1);
    assert_eq!(table.by_symbol("H"), Some(&hydrogen));
}

#[test]
fn test_custom_catalog_via_slice() {
    let catalog = vec![
        Element::new(1, 1, 1, 1.0, "protium", "H").unwrap(),
        Element::new(2, 1, 1, 2.0, "deuterium", "D").unwrap(),
        Element::new(8, 16, 2, 16.0, "oxygen", "O").unwrap(),
    ];
    let heavy_water = parse_formula("D2O", catalog.as_slice()).unwrap();
    assert!((heavy_water.molar_mass() - 20.0).abs() < 1e-12);
    assert_eq!(
        catalog.as_slice().by_name("DEUTERIUM").unwrap().symbol(),
        "D"
    );
}

#[test]
fn test_particle_helpers() {
    let table = table();
    let element = element_from_str(&to_string(table.get(79).unwrap())).unwrap();
    assert_eq!(element.name(), "gold");

    let particle = particle_from_str("{M:1},{{79},{3},{1}}", &table).unwrap();
    assert_eq!(particle.charge(), 3);
    assert_eq!(particle.to_string(), "[Au]3+");
}

#[test]
fn test_table_round_trip_with_gaps() {
    let mut table = PeriodicTable::with_capacity(20);
    let standard = PeriodicTable::standard();
    for number in [1, 6, 8, 20] {
        table.insert(standard.get(number).unwrap().clone()).unwrap();
    }
    let back = table_from_str(&to_string(&table)).unwrap();
    assert_eq!(back, table);
    assert_eq!(back.len(), 4);
}

#[test]
fn test_manual_molecule_matches_parsed() {
    let table = table();
    let h = table.by_symbol("H").unwrap().clone();
    let o = table.by_symbol("O").unwrap().clone();
    let built = Molecule::new(vec![
        Component::new(h, 2).unwrap(),
        Component::new(Particle::Element(o), 1).unwrap(),
    ])
    .unwrap();
    assert_eq!(built, parse_formula("H2O", &table).unwrap());
}

#[test]
fn test_serde_json_round_trip() {
    let table = table();
    let salt = parse_formula("(NH4)2SO4", &table).unwrap();
    let json = serde_json::to_string(&salt).unwrap();
    let back: Molecule = serde_json::from_str(&json).unwrap();
    assert_eq!(back, salt);
}
