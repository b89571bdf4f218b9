//! Chemical elements.
//!
//! An [`Element`] is the leaf of every particle tree. Its six identity fields
//! are validated on construction and never change afterwards; only the charge
//! is mutable.
//!
//! ```rust
//! use chemform::Element;
//!
//! let oxygen = Element::new(8, 16, 2, 15.999, "Oxygen", "O").unwrap();
//! assert_eq!(oxygen.name(), "oxygen");
//! assert_eq!(oxygen.to_string(), "O");
//!
//! let oxide = oxygen.with_charge(-2);
//! assert_eq!(oxide.to_string(), "[O]2-");
//! ```

use crate::particle::write_charged;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated chemical element with a mutable charge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawElement")]
pub struct Element {
    atomic_number: u32,
    group: u32,
    period: u32,
    molar_mass: f64,
    name: String,
    symbol: String,
    charge: i32,
}

impl Element {
    /// Creates an element, validating fields in the order atomic number, group,
    /// period, molar mass, name, symbol.
    ///
    /// The name is stored lowercase and the symbol in Titlecase.
    ///
    /// # Errors
    ///
    /// Returns the field-specific error for the first field that fails validation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chemform::{Element, Error};
    ///
    /// let sodium = Element::new(11, 1, 3, 22.990, "SODIUM", "na").unwrap();
    /// assert_eq!(sodium.symbol(), "Na");
    ///
    /// let err = Element::new(0, 1, 1, 1.0, "nothing", "X").unwrap_err();
    /// assert_eq!(err, Error::InvalidAtomicNumber("0".to_string()));
    /// ```
    pub fn new(
        atomic_number: i64,
        group: i64,
        period: i64,
        molar_mass: f64,
        name: &str,
        symbol: &str,
    ) -> Result<Self> {
        ElementBuilder::new()
            .atomic_number(atomic_number)?
            .group(group)?
            .period(period)?
            .molar_mass(molar_mass)?
            .name(name)?
            .symbol(symbol)?
            .build()
    }

    /// Starts an [`ElementBuilder`].
    #[must_use]
    pub fn builder() -> ElementBuilder {
        ElementBuilder::new()
    }

    /// Builds an element from catalog data known to be valid.
    pub(crate) fn from_catalog(
        atomic_number: u32,
        group: u32,
        period: u32,
        molar_mass: f64,
        name: &str,
        symbol: &str,
    ) -> Self {
        let element = Element {
            atomic_number,
            group,
            period,
            molar_mass,
            name: name.to_string(),
            symbol: symbol.to_string(),
            charge: 0,
        };
        debug_assert!(element.is_valid(), "invalid catalog entry {symbol}");
        element
    }

    pub fn atomic_number(&self) -> u32 {
        self.atomic_number
    }

    pub fn group(&self) -> u32 {
        self.group
    }

    pub fn period(&self) -> u32 {
        self.period
    }

    pub fn molar_mass(&self) -> f64 {
        self.molar_mass
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn charge(&self) -> i32 {
        self.charge
    }

    pub fn set_charge(&mut self, charge: i32) {
        self.charge = charge;
    }

    /// Returns a copy of this element carrying `charge`.
    #[must_use]
    pub fn with_charge(mut self, charge: i32) -> Self {
        self.charge = charge;
        self
    }

    /// The formula of a single element is its symbol.
    pub fn molecular_formula(&self) -> String {
        self.symbol.clone()
    }

    /// Checks every field predicate.
    ///
    /// Always `true` for elements built through this crate's constructors, but
    /// kept as an explicit check for callers validating whole particle trees.
    pub fn is_valid(&self) -> bool {
        self.atomic_number > 0
            && self.group > 0
            && self.period > 0
            && is_valid_molar_mass(self.molar_mass)
            && is_valid_word(&self.name)
            && is_valid_word(&self.symbol)
    }

    /// Returns `true` if `other` shares this element's atomic number, name or symbol.
    ///
    /// Names and symbols are compared case-insensitively.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chemform::Element;
    ///
    /// let hydrogen = Element::new(1, 1, 1, 1.008, "hydrogen", "H").unwrap();
    /// let fake = Element::new(99, 1, 1, 2.0, "HYDROGEN", "Q").unwrap();
    /// assert!(hydrogen.conflicts(&fake));
    /// ```
    pub fn conflicts(&self, other: &Element) -> bool {
        self.atomic_number == other.atomic_number
            || self.name.eq_ignore_ascii_case(&other.name)
            || self.symbol.eq_ignore_ascii_case(&other.symbol)
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.charge == other.charge
            && self.atomic_number == other.atomic_number
            && self.group == other.group
            && self.period == other.period
            && self.molar_mass == other.molar_mass
            && self.name.eq_ignore_ascii_case(&other.name)
            && self.symbol.eq_ignore_ascii_case(&other.symbol)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_charged(f, &self.symbol, i64::from(self.charge))
    }
}

/// Field-by-field element construction.
///
/// Each setter validates its own input and fails independently, so the error
/// always names the field that was rejected.
///
/// # Examples
///
/// ```rust
/// use chemform::{Element, Error};
///
/// # fn main() -> chemform::Result<()> {
/// let carbon = Element::builder()
///     .atomic_number(6)?
///     .group(14)?
///     .period(2)?
///     .molar_mass(12.011)?
///     .name("carbon")?
///     .symbol("C")?
///     .build()?;
/// assert_eq!(carbon.atomic_number(), 6);
///
/// let err = Element::builder().symbol("C4").unwrap_err();
/// assert_eq!(err, Error::InvalidSymbol("C4".to_string()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ElementBuilder {
    atomic_number: Option<u32>,
    group: Option<u32>,
    period: Option<u32>,
    molar_mass: Option<f64>,
    name: Option<String>,
    symbol: Option<String>,
    charge: i32,
}

impl ElementBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// [`Error::InvalidAtomicNumber`] unless `value` is a positive `u32`.
    pub fn atomic_number(mut self, value: i64) -> Result<Self> {
        self.atomic_number = Some(positive(value, Error::InvalidAtomicNumber)?);
        Ok(self)
    }

    /// # Errors
    ///
    /// [`Error::InvalidGroupNumber`] unless `value` is a positive `u32`.
    pub fn group(mut self, value: i64) -> Result<Self> {
        self.group = Some(positive(value, Error::InvalidGroupNumber)?);
        Ok(self)
    }

    /// # Errors
    ///
    /// [`Error::InvalidPeriodNumber`] unless `value` is a positive `u32`.
    pub fn period(mut self, value: i64) -> Result<Self> {
        self.period = Some(positive(value, Error::InvalidPeriodNumber)?);
        Ok(self)
    }

    /// # Errors
    ///
    /// [`Error::InvalidMolarMass`] unless `value` is finite and positive.
    pub fn molar_mass(mut self, value: f64) -> Result<Self> {
        if !is_valid_molar_mass(value) {
            return Err(Error::InvalidMolarMass(value.to_string()));
        }
        self.molar_mass = Some(value);
        Ok(self)
    }

    /// # Errors
    ///
    /// [`Error::InvalidName`] unless `value` is non-empty and all ASCII letters.
    pub fn name(mut self, value: &str) -> Result<Self> {
        if !is_valid_word(value) {
            return Err(Error::InvalidName(value.to_string()));
        }
        self.name = Some(value.to_ascii_lowercase());
        Ok(self)
    }

    /// # Errors
    ///
    /// [`Error::InvalidSymbol`] unless `value` is non-empty and all ASCII letters.
    pub fn symbol(mut self, value: &str) -> Result<Self> {
        if !is_valid_word(value) {
            return Err(Error::InvalidSymbol(value.to_string()));
        }
        self.symbol = Some(titlecase(value));
        Ok(self)
    }

    #[must_use]
    pub fn charge(mut self, charge: i32) -> Self {
        self.charge = charge;
        self
    }

    /// Finishes the element.
    ///
    /// # Errors
    ///
    /// If a field was never set, returns that field's error with an empty raw
    /// value, checking fields in the fixed order.
    pub fn build(self) -> Result<Element> {
        let missing = String::new;
        Ok(Element {
            atomic_number: self
                .atomic_number
                .ok_or_else(|| Error::InvalidAtomicNumber(missing()))?,
            group: self.group.ok_or_else(|| Error::InvalidGroupNumber(missing()))?,
            period: self
                .period
                .ok_or_else(|| Error::InvalidPeriodNumber(missing()))?,
            molar_mass: self
                .molar_mass
                .ok_or_else(|| Error::InvalidMolarMass(missing()))?,
            name: self.name.ok_or_else(|| Error::InvalidName(missing()))?,
            symbol: self.symbol.ok_or_else(|| Error::InvalidSymbol(missing()))?,
            charge: self.charge,
        })
    }
}

/// Serde mirror of [`Element`]; deserialized values pass through the builder.
#[derive(Deserialize)]
struct RawElement {
    atomic_number: i64,
    group: i64,
    period: i64,
    molar_mass: f64,
    name: String,
    symbol: String,
    #[serde(default)]
    charge: i32,
}

impl TryFrom<RawElement> for Element {
    type Error = Error;

    fn try_from(raw: RawElement) -> Result<Self> {
        ElementBuilder::new()
            .atomic_number(raw.atomic_number)?
            .group(raw.group)?
            .period(raw.period)?
            .molar_mass(raw.molar_mass)?
            .name(&raw.name)?
            .symbol(&raw.symbol)?
            .charge(raw.charge)
            .build()
    }
}

fn positive(value: i64, err: fn(String) -> Error) -> Result<u32> {
    match u32::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(err(value.to_string())),
    }
}

fn is_valid_molar_mass(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Names and symbols: non-empty, ASCII letters only.
pub(crate) fn is_valid_word(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_alphabetic())
}

fn titlecase(value: &str) -> String {
    let lower = value.to_ascii_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => lower,
    }
}
