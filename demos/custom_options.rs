//! Parser options and custom lookup tables.
//!
//! Run with: cargo run --example custom_options

use chemform::{parse_formula, parse_formula_with_options, Element, ParseOptions, PeriodicTable};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let table = PeriodicTable::standard();

    // Default: unit groups are spliced into their parent
    let flat = parse_formula("CH3(CH2)CH3", &table)?;
    println!("Default:       {} components", flat.len());

    // Keep every bracket group as a nested molecule
    let options = ParseOptions::new().with_flatten_unit_groups(false);
    let nested = parse_formula_with_options("CH3(CH2)CH3", &table, options)?;
    println!("Nested groups: {} components", nested.len());
    assert_eq!(flat.molecular_formula(), nested.molecular_formula());

    // Any element slice works as a lookup table
    let isotopes = vec![
        Element::new(1, 1, 1, 1.008, "protium", "H")?,
        Element::new(1, 1, 1, 2.014, "deuterium", "D")?,
        Element::new(8, 16, 2, 15.999, "oxygen", "O")?,
    ];
    let heavy_water = parse_formula("D2O", isotopes.as_slice())?;
    println!("\nD2O: {:.3} g/mol", heavy_water.molar_mass());

    Ok(())
}
