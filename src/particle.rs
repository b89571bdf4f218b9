//! The particle sum type shared by elements and molecules.
//!
//! [`Particle`] is what a [`Molecule`] is made of: each [`Component`] pairs a
//! particle with its multiplicity. Molar mass, formula text, charge and
//! equality dispatch on the variant.

use crate::{Element, Error, Molecule, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Either a single element or a molecule built from other particles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Particle {
    Element(Element),
    Molecule(Molecule),
}

impl Particle {
    /// Molar mass in g/mol.
    pub fn molar_mass(&self) -> f64 {
        match self {
            Particle::Element(element) => element.molar_mass(),
            Particle::Molecule(molecule) => molecule.molar_mass(),
        }
    }

    /// Neutral formula text (no charge annotation).
    pub fn molecular_formula(&self) -> String {
        match self {
            Particle::Element(element) => element.molecular_formula(),
            Particle::Molecule(molecule) => molecule.molecular_formula(),
        }
    }

    /// Net charge. Molecules derive theirs from their components.
    pub fn charge(&self) -> i64 {
        match self {
            Particle::Element(element) => i64::from(element.charge()),
            Particle::Molecule(molecule) => molecule.charge(),
        }
    }

    pub fn is_valid(&self) -> bool {
        match self {
            Particle::Element(element) => element.is_valid(),
            Particle::Molecule(molecule) => molecule.is_valid(),
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Particle::Element(element) => Some(element),
            Particle::Molecule(_) => None,
        }
    }

    pub fn as_molecule(&self) -> Option<&Molecule> {
        match self {
            Particle::Molecule(molecule) => Some(molecule),
            Particle::Element(_) => None,
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Particle::Element(_))
    }

    pub fn is_molecule(&self) -> bool {
        matches!(self, Particle::Molecule(_))
    }
}

impl From<Element> for Particle {
    fn from(element: Element) -> Self {
        Particle::Element(element)
    }
}

impl From<Molecule> for Particle {
    fn from(molecule: Molecule) -> Self {
        Particle::Molecule(molecule)
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Particle::Element(element) => element.fmt(f),
            Particle::Molecule(molecule) => molecule.fmt(f),
        }
    }
}

/// A particle together with how many times it occurs in its parent molecule.
///
/// # Examples
///
/// ```rust
/// use chemform::{Component, Element, Error};
///
/// let oxygen = Element::new(8, 16, 2, 15.999, "oxygen", "O").unwrap();
/// let part = Component::new(oxygen.clone(), 2).unwrap();
/// assert_eq!(part.count(), 2);
///
/// assert!(matches!(Component::new(oxygen, 0), Err(Error::InvalidEntryData(_))));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawComponent")]
pub struct Component {
    particle: Particle,
    count: u32,
}

impl Component {
    /// # Errors
    ///
    /// [`Error::InvalidEntryData`] if `count` is zero.
    pub fn new(particle: impl Into<Particle>, count: u32) -> Result<Self> {
        if count == 0 {
            return Err(Error::invalid_entry_data("particle count must be at least 1"));
        }
        Ok(Component {
            particle: particle.into(),
            count,
        })
    }

    pub fn particle(&self) -> &Particle {
        &self.particle
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn into_parts(self) -> (Particle, u32) {
        (self.particle, self.count)
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.count > 0 && self.particle.is_valid()
    }
}

#[derive(Deserialize)]
struct RawComponent {
    particle: Particle,
    count: u32,
}

impl TryFrom<RawComponent> for Component {
    type Error = Error;

    fn try_from(raw: RawComponent) -> Result<Self> {
        Component::new(raw.particle, raw.count)
    }
}

/// Writes `formula` with its charge annotation: `[formula]`, then the magnitude
/// when it exceeds 1, then the sign. Neutral particles are written bare.
pub(crate) fn write_charged(f: &mut fmt::Formatter<'_>, formula: &str, charge: i64) -> fmt::Result {
    if charge == 0 {
        return f.write_str(formula);
    }

    write!(f, "[{formula}]")?;
    let magnitude = charge.unsigned_abs();
    if magnitude > 1 {
        write!(f, "{magnitude}")?;
    }
    f.write_str(if charge > 0 { "+" } else { "-" })
}
