//! Parsing molecular formulas and reading their properties.
//!
//! Run with: cargo run --example simple

use chemform::{parse_formula, PeriodicTable};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let table = PeriodicTable::standard();

    for formula in ["H2O", "C6H12O6", "(NH4)2SO4", "Fe2(SO4)3"] {
        let molecule = parse_formula(formula, &table)?;
        println!("{formula}");
        println!("  molar mass: {:.3} g/mol", molecule.molar_mass());
        println!("  atoms:      {}", molecule.atom_count());
        for (symbol, count) in molecule.element_counts() {
            println!("    {symbol}: {count}");
        }
        assert_eq!(molecule.molecular_formula(), formula);
    }

    // Errors point at the offending character
    if let Err(err) = parse_formula("Fe2(SO4", &table) {
        println!("\nExpected failure: {err}");
    }

    Ok(())
}
