//! Brace-format serialization.
//!
//! This module provides the [`Serializer`] buffer and the [`ToBraced`] trait
//! that converts particles and periodic tables into brace-delimited text.
//!
//! ## Overview
//!
//! Every value is written as a comma-separated list of `{...}` tokens:
//!
//! - **Element**: `{atomic number},{group},{period},{molar mass},{name},{symbol}`
//! - **Molecule**: `{M:n}` followed by `n` entries `{{ref},{charge},{count}}`,
//!   where `ref` is an atomic number or a nested molecule wrapped in braces
//! - **Periodic table**: `{L:capacity}` followed by one `{element}` per occupied slot
//!
//! Serialization cannot fail: only valid values can be constructed.
//!
//! ## Usage
//!
//! Most users should use [`crate::to_string`]:
//!
//! ```rust
//! use chemform::{parse_formula, to_string, PeriodicTable};
//!
//! let table = PeriodicTable::standard();
//! let water = parse_formula("H2O", &table).unwrap();
//! assert_eq!(to_string(&water), "{M:2},{{1},{0},{2}},{{8},{0},{1}}");
//! ```
//!
//! ## Direct Serializer Usage
//!
//! Several values can be written into one buffer:
//!
//! ```rust
//! use chemform::{PeriodicTable, Serializer};
//!
//! let table = PeriodicTable::standard();
//! let mut serializer = Serializer::new();
//! serializer.write_element(table.get(6).unwrap());
//! assert_eq!(serializer.into_inner(), "{6},{14},{2},{12.011},{carbon},{C}");
//! ```

use crate::tokenizer::{CLOSE_BRACE, OPEN_BRACE, SEPARATOR};
use crate::{Element, Molecule, Particle, PeriodicTable};

/// Count prefix of a serialized molecule.
pub const MOLECULE_PREFIX: &str = "M:";

/// Capacity prefix of a serialized periodic table.
pub const TABLE_PREFIX: &str = "L:";

/// The brace-format serializer.
///
/// Accumulates output in an internal buffer; retrieve it with
/// [`Serializer::into_inner`].
#[derive(Debug, Default)]
pub struct Serializer {
    output: String,
}

impl Serializer {
    pub fn new() -> Self {
        Serializer {
            output: String::with_capacity(64),
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    pub fn as_str(&self) -> &str {
        &self.output
    }

    #[inline]
    fn open(&mut self) {
        self.output.push(char::from(OPEN_BRACE));
    }

    #[inline]
    fn close(&mut self) {
        self.output.push(char::from(CLOSE_BRACE));
    }

    #[inline]
    fn separator(&mut self) {
        self.output.push(char::from(SEPARATOR));
    }

    /// Writes `{text}`.
    fn write_token(&mut self, text: &str) {
        self.open();
        self.output.push_str(text);
        self.close();
    }

    fn write_mass(&mut self, mass: f64) {
        self.open();
        let start = self.output.len();
        self.output.push_str(&mass.to_string());
        // Integral masses keep a fractional part so they read back as decimals
        if !self.output[start..].contains('.') {
            self.output.push_str(".0");
        }
        self.close();
    }

    pub fn write_element(&mut self, element: &Element) {
        self.write_token(&element.atomic_number().to_string());
        self.separator();
        self.write_token(&element.group().to_string());
        self.separator();
        self.write_token(&element.period().to_string());
        self.separator();
        self.write_mass(element.molar_mass());
        self.separator();
        self.write_token(element.name());
        self.separator();
        self.write_token(element.symbol());
    }

    pub fn write_molecule(&mut self, molecule: &Molecule) {
        self.write_token(&format!("{MOLECULE_PREFIX}{}", molecule.len()));

        for component in molecule {
            self.separator();
            self.open();

            self.open();
            match component.particle() {
                Particle::Element(element) => {
                    self.output.push_str(&element.atomic_number().to_string());
                }
                Particle::Molecule(nested) => {
                    self.open();
                    self.write_molecule(nested);
                    self.close();
                }
            }
            self.close();
            self.separator();
            self.write_token(&component.particle().charge().to_string());
            self.separator();
            self.write_token(&component.count().to_string());

            self.close();
        }
    }

    pub fn write_table(&mut self, table: &PeriodicTable) {
        self.write_token(&format!("{TABLE_PREFIX}{}", table.capacity()));
        for element in table {
            self.separator();
            self.open();
            self.write_element(element);
            self.close();
        }
    }
}

/// Values that have a brace-format encoding.
pub trait ToBraced {
    fn write_braced(&self, serializer: &mut Serializer);
}

impl ToBraced for Element {
    fn write_braced(&self, serializer: &mut Serializer) {
        serializer.write_element(self);
    }
}

impl ToBraced for Molecule {
    fn write_braced(&self, serializer: &mut Serializer) {
        serializer.write_molecule(self);
    }
}

impl ToBraced for Particle {
    fn write_braced(&self, serializer: &mut Serializer) {
        match self {
            Particle::Element(element) => serializer.write_element(element),
            Particle::Molecule(molecule) => serializer.write_molecule(molecule),
        }
    }
}

impl ToBraced for PeriodicTable {
    fn write_braced(&self, serializer: &mut Serializer) {
        serializer.write_table(self);
    }
}

impl<T: ToBraced + ?Sized> ToBraced for &T {
    fn write_braced(&self, serializer: &mut Serializer) {
        (**self).write_braced(serializer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Component;

    fn encode<T: ToBraced>(value: &T) -> String {
        let mut serializer = Serializer::new();
        value.write_braced(&mut serializer);
        serializer.into_inner()
    }

    fn standard(symbol: &str) -> Element {
        PeriodicTable::standard().by_symbol(symbol).unwrap().clone()
    }

    #[test]
    fn test_element() {
        assert_eq!(
            encode(&standard("H")),
            "{1},{1},{1},{1.008},{hydrogen},{H}"
        );
    }

    #[test]
    fn test_integral_mass_keeps_fraction() {
        let element = Element::new(6, 14, 2, 12.0, "carbon", "C").unwrap();
        assert_eq!(encode(&element), "{6},{14},{2},{12.0},{carbon},{C}");
    }

    #[test]
    fn test_element_charge_is_not_serialized() {
        let ion = standard("Na").with_charge(1);
        assert_eq!(encode(&ion), encode(&standard("Na")));
    }

    #[test]
    fn test_flat_molecule() {
        let water = Molecule::new(vec![
            Component::new(standard("H"), 2).unwrap(),
            Component::new(standard("O"), 1).unwrap(),
        ])
        .unwrap();
        assert_eq!(encode(&water), "{M:2},{{1},{0},{2}},{{8},{0},{1}}");
    }

    #[test]
    fn test_nested_molecule_and_charges() {
        let hydroxide = Molecule::new(vec![
            Component::new(standard("O").with_charge(-2), 1).unwrap(),
            Component::new(standard("H").with_charge(1), 1).unwrap(),
        ])
        .unwrap();
        let base = Molecule::new(vec![
            Component::new(standard("Ca").with_charge(2), 1).unwrap(),
            Component::new(hydroxide, 2).unwrap(),
        ])
        .unwrap();
        assert_eq!(
            encode(&base),
            "{M:2},{{20},{2},{1}},{{{M:2},{{8},{-2},{1}},{{1},{1},{1}}},{-1},{2}}"
        );
    }

    #[test]
    fn test_particle_dispatch() {
        let oxygen = standard("O");
        assert_eq!(encode(&Particle::from(oxygen.clone())), encode(&oxygen));
    }

    #[test]
    fn test_table() {
        let mut table = PeriodicTable::with_capacity(10);
        assert_eq!(encode(&table), "{L:10}");

        table.insert(standard("He")).unwrap();
        table.insert(standard("H")).unwrap();
        assert_eq!(
            encode(&table),
            "{L:10},{{1},{1},{1},{1.008},{hydrogen},{H}},{{2},{18},{1},{4.0026},{helium},{He}}"
        );
    }

    #[test]
    fn test_serializer_accumulates() {
        let mut serializer = Serializer::new();
        serializer.write_element(&standard("H"));
        assert!(serializer.as_str().ends_with("{H}"));
        serializer.write_element(&standard("He"));
        assert!(serializer.into_inner().ends_with("{helium},{He}"));
    }
}
