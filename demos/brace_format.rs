//! Encoding molecules and periodic tables in the brace format.
//!
//! Run with: cargo run --example brace_format

use chemform::{molecule_from_str, parse_formula, table_from_str, to_string, PeriodicTable};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let table = PeriodicTable::standard();

    // Serialize a parsed formula
    let salt = parse_formula("(NH4)2SO4", &table)?;
    let text = to_string(&salt);
    println!("(NH4)2SO4 encoded:\n{text}\n");

    // Deserialize it back
    let back = molecule_from_str(&text, &table)?;
    assert_eq!(back, salt);
    println!("✓ Round-trip successful");

    // Charges travel with each entry and never touch the catalog
    let sulfate = molecule_from_str("{M:2},{{16},{6},{1}},{{8},{-2},{4}}", &table)?;
    println!("Charged molecule: {sulfate}");
    assert_eq!(table.get(8).map(|o| o.charge()), Some(0));

    // Tables use an L: capacity header
    let mut small = PeriodicTable::with_capacity(10);
    for symbol in ["H", "C", "N", "O"] {
        if let Some(element) = table.by_symbol(symbol) {
            small.insert(element.clone())?;
        }
    }
    let encoded = to_string(&small);
    println!("\nSmall table:\n{encoded}");
    assert_eq!(table_from_str(&encoded)?, small);

    Ok(())
}
