//! Molecules: ordered lists of particles with multiplicities.
//!
//! A [`Molecule`] is normally produced by [`crate::parse_formula`] or by
//! brace deserialization, but can also be assembled from [`Component`]s:
//!
//! ```rust
//! use chemform::{Component, Molecule, PeriodicTable};
//!
//! let table = PeriodicTable::standard();
//! let h = table.by_symbol("H").unwrap().clone();
//! let o = table.by_symbol("O").unwrap().clone();
//!
//! let water = Molecule::new(vec![
//!     Component::new(h, 2).unwrap(),
//!     Component::new(o, 1).unwrap(),
//! ])
//! .unwrap();
//!
//! assert_eq!(water.molecular_formula(), "H2O");
//! assert!((water.molar_mass() - 18.015).abs() < 1e-3);
//! ```

use crate::de::Deserializer;
use crate::formula::FormulaParser;
use crate::particle::write_charged;
use crate::table::ElementLookup;
use crate::{Component, Error, ParseOptions, Particle, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A composite particle: a non-empty, ordered sequence of components.
///
/// Equality is order-sensitive and compares both particles and counts. The
/// charge is always derived from the components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Component>", into = "Vec<Component>")]
pub struct Molecule {
    components: Vec<Component>,
}

impl Molecule {
    /// # Errors
    ///
    /// [`Error::EmptyMolecule`] if `components` is empty.
    pub fn new(components: Vec<Component>) -> Result<Self> {
        if components.is_empty() {
            return Err(Error::EmptyMolecule);
        }
        Ok(Molecule { components })
    }

    /// Parses a molecular formula such as `"Fe2(SO4)3"`.
    ///
    /// See [`crate::parse_formula`].
    pub fn from_formula<L>(formula: &str, lookup: &L) -> Result<Self>
    where
        L: ElementLookup + ?Sized,
    {
        FormulaParser::new(lookup, ParseOptions::default()).parse(formula)
    }

    /// Decodes a brace-serialized molecule, resolving atomic numbers via `lookup`.
    ///
    /// See [`crate::molecule_from_str`].
    pub fn from_braced<L>(data: &str, lookup: &L) -> Result<Self>
    where
        L: ElementLookup + ?Sized,
    {
        Deserializer::new(lookup).molecule(data)
    }

    /// Encodes this molecule in the brace format.
    pub fn to_braced(&self) -> String {
        crate::to_string(self)
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Component> {
        self.components.iter()
    }

    /// Number of distinct components (not atoms).
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `false` for every constructed molecule.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn molar_mass(&self) -> f64 {
        self.components
            .iter()
            .map(|c| c.particle().molar_mass() * f64::from(c.count()))
            .sum()
    }

    /// Sum of each component's charge times its count.
    ///
    /// Saturates at `i64::MIN` / `i64::MAX` when the exact sum is out of range;
    /// see [`Molecule::checked_charge`].
    pub fn charge(&self) -> i64 {
        let wide = self.wide_charge();
        i64::try_from(wide).unwrap_or(if wide < 0 { i64::MIN } else { i64::MAX })
    }

    /// Exact charge, or `None` if any partial sum overflows `i64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chemform::{parse_formula, PeriodicTable};
    ///
    /// let table = PeriodicTable::standard();
    /// let water = parse_formula("H2O", &table).unwrap();
    /// assert_eq!(water.checked_charge(), Some(0));
    /// ```
    pub fn checked_charge(&self) -> Option<i64> {
        self.components.iter().try_fold(0i64, |total, c| {
            let charge = match c.particle() {
                Particle::Element(element) => i64::from(element.charge()),
                Particle::Molecule(nested) => nested.checked_charge()?,
            };
            total.checked_add(charge.checked_mul(i64::from(c.count()))?)
        })
    }

    fn wide_charge(&self) -> i128 {
        self.components.iter().fold(0i128, |total, c| {
            let charge = match c.particle() {
                Particle::Element(element) => i128::from(element.charge()),
                Particle::Molecule(nested) => nested.wide_charge(),
            };
            total.saturating_add(charge.saturating_mul(i128::from(c.count())))
        })
    }

    /// Checks the molecule and every nested particle depth-first.
    pub fn is_valid(&self) -> bool {
        !self.components.is_empty() && self.components.iter().all(Component::is_valid)
    }

    /// Renders the neutral formula.
    ///
    /// Nested molecules are parenthesized only when their count exceeds 1, and a
    /// count suffix is written for every component with a count above 1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chemform::{parse_formula, PeriodicTable};
    ///
    /// let table = PeriodicTable::standard();
    /// let sulfate = parse_formula("Fe2(SO4)3", &table).unwrap();
    /// assert_eq!(sulfate.molecular_formula(), "Fe2(SO4)3");
    /// ```
    pub fn molecular_formula(&self) -> String {
        let mut output = String::new();
        self.write_formula(&mut output);
        output
    }

    fn write_formula(&self, output: &mut String) {
        for component in &self.components {
            let count = component.count();
            match component.particle() {
                Particle::Element(element) => output.push_str(element.symbol()),
                Particle::Molecule(nested) if count > 1 => {
                    output.push('(');
                    nested.write_formula(output);
                    output.push(')');
                }
                Particle::Molecule(nested) => nested.write_formula(output),
            }
            if count > 1 {
                output.push_str(&count.to_string());
            }
        }
    }

    /// Flattened composition: atoms per element symbol, in order of first appearance.
    ///
    /// Counts saturate at `u64::MAX`; use [`Molecule::checked_element_counts`]
    /// to detect overflow.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chemform::{parse_formula, PeriodicTable};
    ///
    /// let table = PeriodicTable::standard();
    /// let salt = parse_formula("(NH4)2SO4", &table).unwrap();
    /// let counts: Vec<_> = salt.element_counts().into_iter().collect();
    /// assert_eq!(
    ///     counts,
    ///     vec![("N".to_string(), 2), ("H".to_string(), 8), ("S".to_string(), 1), ("O".to_string(), 4)]
    /// );
    /// ```
    pub fn element_counts(&self) -> IndexMap<String, u64> {
        let mut counts = IndexMap::new();
        self.accumulate_counts(1, &mut counts, &|a, b| Some(a.saturating_mul(b)), &|a, b| {
            Some(a.saturating_add(b))
        });
        counts
    }

    /// Like [`Molecule::element_counts`], but `None` if any count overflows `u64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chemform::{parse_formula, PeriodicTable};
    ///
    /// let table = PeriodicTable::standard();
    /// let huge = parse_formula("((H4294967295)4294967295)4294967295", &table).unwrap();
    /// assert!(huge.checked_element_counts().is_none());
    /// assert_eq!(huge.element_counts().get("H"), Some(&u64::MAX));
    /// ```
    pub fn checked_element_counts(&self) -> Option<IndexMap<String, u64>> {
        let mut counts = IndexMap::new();
        self.accumulate_counts(1, &mut counts, &u64::checked_mul, &u64::checked_add)?;
        Some(counts)
    }

    fn accumulate_counts(
        &self,
        multiplier: u64,
        counts: &mut IndexMap<String, u64>,
        mul: &dyn Fn(u64, u64) -> Option<u64>,
        add: &dyn Fn(u64, u64) -> Option<u64>,
    ) -> Option<()> {
        for component in &self.components {
            let factor = mul(multiplier, u64::from(component.count()))?;
            match component.particle() {
                Particle::Element(element) => {
                    let entry = counts.entry(element.symbol().to_string()).or_insert(0);
                    *entry = add(*entry, factor)?;
                }
                Particle::Molecule(nested) => nested.accumulate_counts(factor, counts, mul, add)?,
            }
        }
        Some(())
    }

    /// Total number of atoms, expanding nested multiplicities. Saturates at `u64::MAX`.
    pub fn atom_count(&self) -> u64 {
        self.element_counts()
            .values()
            .fold(0u64, |total, &count| total.saturating_add(count))
    }

    /// Total number of atoms, or `None` on overflow.
    pub fn checked_atom_count(&self) -> Option<u64> {
        self.checked_element_counts()?
            .values()
            .try_fold(0u64, |total, &count| total.checked_add(count))
    }
}

impl<'a> IntoIterator for &'a Molecule {
    type Item = &'a Component;
    type IntoIter = std::slice::Iter<'a, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

impl TryFrom<Vec<Component>> for Molecule {
    type Error = Error;

    fn try_from(components: Vec<Component>) -> Result<Self> {
        Molecule::new(components)
    }
}

impl From<Molecule> for Vec<Component> {
    fn from(molecule: Molecule) -> Self {
        molecule.components
    }
}

impl fmt::Display for Molecule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_charged(f, &self.molecular_formula(), self.charge())
    }
}
