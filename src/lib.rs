//! # chemform
//!
//! Chemical formula parsing and rendering, plus a compact brace-delimited
//! serialization format for elements, molecules and periodic tables.
//!
//! ## What is in the box?
//!
//! - **Formula parser**: turns `"Fe2(SO4)3"` into a nested [`Molecule`] tree,
//!   resolving symbols through any [`ElementLookup`]
//! - **Formula renderer**: the inverse, with charge annotations such as `[SO4]2-`
//! - **Brace format**: `{M:2},{{1},{0},{2}},{{8},{0},{1}}` style encoding with
//!   precise, index-carrying errors for malformed input
//! - **Periodic table**: a built-in catalog of elements 1 to 118
//! - **Serde Compatible**: the data model derives `Serialize` / `Deserialize`
//!   with the same validation as the constructors
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! chemform = "0.1"
//! ```
//!
//! ### Parsing and Rendering Formulas
//!
//! ```rust
//! use chemform::{parse_formula, PeriodicTable};
//!
//! let table = PeriodicTable::standard();
//! let sulfate = parse_formula("Fe2(SO4)3", &table).unwrap();
//!
//! assert_eq!(sulfate.molecular_formula(), "Fe2(SO4)3");
//! assert!((sulfate.molar_mass() - 399.858).abs() < 1e-3);
//! assert_eq!(sulfate.element_counts().get("O"), Some(&12));
//! ```
//!
//! ### Brace Serialization
//!
//! ```rust
//! use chemform::{molecule_from_str, parse_formula, to_string, PeriodicTable};
//!
//! let table = PeriodicTable::standard();
//! let water = parse_formula("H2O", &table).unwrap();
//!
//! let text = to_string(&water);
//! assert_eq!(text, "{M:2},{{1},{0},{2}},{{8},{0},{1}}");
//!
//! let back = molecule_from_str(&text, &table).unwrap();
//! assert_eq!(back, water);
//! ```
//!
//! ### Charged Particles
//!
//! ```rust
//! use chemform::{molecule_from_str, PeriodicTable};
//!
//! let table = PeriodicTable::standard();
//! let ammonium = molecule_from_str("{M:2},{{7},{-3},{1}},{{1},{1},{4}}", &table).unwrap();
//!
//! assert_eq!(ammonium.charge(), 1);
//! assert_eq!(ammonium.to_string(), "[NH4]+");
//! ```
//!
//! ## Logging
//!
//! Parsing and decoding emit [`tracing`] events: entry points at debug level,
//! per-token progress at trace level, and skipped periodic-table entries at
//! warn level. No subscriber is installed by the library.
//!
//! ## Format Reference
//!
//! See the [`grammar`] module for both grammars with worked examples.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - Parsing formulas and reading molar masses
//! - **`brace_format.rs`** - Encoding and decoding molecules and tables
//! - **`custom_options.rs`** - Parser options and custom lookup tables
//!
//! Run any example with: `cargo run --example <name>`

pub mod de;
pub mod element;
pub mod error;
pub mod formula;
pub mod grammar;
pub mod molecule;
pub mod options;
pub mod particle;
pub mod ser;
mod standard;
pub mod table;
pub mod tokenizer;

pub use de::Deserializer;
pub use element::{Element, ElementBuilder};
pub use error::{Error, Result};
pub use formula::FormulaParser;
pub use molecule::Molecule;
pub use options::ParseOptions;
pub use particle::{Component, Particle};
pub use ser::{Serializer, ToBraced};
pub use table::{ElementLookup, PeriodicTable, MAX_ATOMIC_NUMBER};

use std::io;

/// Parse a molecular formula, resolving symbols through `lookup`.
///
/// # Examples
///
/// ```rust
/// use chemform::{parse_formula, PeriodicTable};
///
/// let table = PeriodicTable::standard();
/// let water = parse_formula("H2O", &table).unwrap();
/// assert!((water.molar_mass() - 18.015).abs() < 1e-3);
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`], [`Error::BracketImbalance`] or
/// [`Error::ElementNotFound`] for formulas that cannot be parsed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_formula<L>(formula: &str, lookup: &L) -> Result<Molecule>
where
    L: ElementLookup + ?Sized,
{
    parse_formula_with_options(formula, lookup, ParseOptions::default())
}

/// Parse a molecular formula with custom options.
///
/// # Examples
///
/// ```rust
/// use chemform::{parse_formula_with_options, ParseOptions, PeriodicTable};
///
/// let table = PeriodicTable::standard();
/// let nested = parse_formula_with_options("Ca(OH)", &table, ParseOptions::nested()).unwrap();
/// assert!(nested.components()[1].particle().is_molecule());
/// ```
///
/// # Errors
///
/// Same as [`parse_formula`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_formula_with_options<L>(
    formula: &str,
    lookup: &L,
    options: ParseOptions,
) -> Result<Molecule>
where
    L: ElementLookup + ?Sized,
{
    FormulaParser::new(lookup, options).parse(formula)
}

/// Serialize any [`ToBraced`] value to a brace-format string.
///
/// # Examples
///
/// ```rust
/// use chemform::{to_string, PeriodicTable};
///
/// let table = PeriodicTable::standard();
/// let helium = table.get(2).unwrap();
/// assert_eq!(to_string(helium), "{2},{18},{1},{4.0026},{helium},{He}");
/// ```
#[must_use]
pub fn to_string<T>(value: &T) -> String
where
    T: ?Sized + ToBraced,
{
    let mut serializer = Serializer::new();
    value.write_braced(&mut serializer);
    serializer.into_inner()
}

/// Serialize any [`ToBraced`] value to a writer.
///
/// # Examples
///
/// ```rust
/// use chemform::{to_writer, PeriodicTable};
///
/// let table = PeriodicTable::standard();
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, table.get(1).unwrap()).unwrap();
/// assert!(buffer.starts_with(b"{1},"));
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + ToBraced,
{
    writer
        .write_all(to_string(value).as_bytes())
        .map_err(|e| Error::io(&e.to_string()))
}

/// Deserialize an element from brace-format text.
///
/// # Examples
///
/// ```rust
/// use chemform::element_from_str;
///
/// let iron = element_from_str("{26},{8},{4},{55.845},{iron},{Fe}").unwrap();
/// assert_eq!(iron.symbol(), "Fe");
/// ```
///
/// # Errors
///
/// Returns a tokenizer error, [`Error::InvalidLength`], or the field-specific
/// error for the first invalid field.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn element_from_str(data: &str) -> Result<Element> {
    de::element_from_str(data)
}

/// Deserialize a molecule from brace-format text, resolving atomic numbers
/// through `lookup`.
///
/// # Errors
///
/// See [`Deserializer::molecule`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn molecule_from_str<L>(data: &str, lookup: &L) -> Result<Molecule>
where
    L: ElementLookup + ?Sized,
{
    Deserializer::new(lookup).molecule(data)
}

/// Deserialize an element or a molecule, whichever the text encodes.
///
/// # Examples
///
/// ```rust
/// use chemform::{particle_from_str, PeriodicTable};
///
/// let table = PeriodicTable::standard();
/// let particle = particle_from_str("{M:1},{{8},{0},{2}}", &table).unwrap();
/// assert_eq!(particle.molecular_formula(), "O2");
/// ```
///
/// # Errors
///
/// Returns the molecule or element decoding error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn particle_from_str<L>(data: &str, lookup: &L) -> Result<Particle>
where
    L: ElementLookup + ?Sized,
{
    de::particle_from_str(data, lookup)
}

/// Deserialize a periodic table. Invalid or conflicting entries are skipped.
///
/// # Errors
///
/// Returns a tokenizer error or a header error; see [`de::table_from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn table_from_str(data: &str) -> Result<PeriodicTable> {
    de::table_from_str(data)
}

/// Deserialize a molecule from an I/O stream of brace-format text.
///
/// # Examples
///
/// ```rust
/// use chemform::{molecule_from_reader, PeriodicTable};
/// use std::io::Cursor;
///
/// let table = PeriodicTable::standard();
/// let cursor = Cursor::new(b"{M:1},{{6},{0},{60}}");
/// let fullerene = molecule_from_reader(cursor, &table).unwrap();
/// assert_eq!(fullerene.molecular_formula(), "C60");
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, otherwise see [`molecule_from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn molecule_from_reader<R, L>(reader: R, lookup: &L) -> Result<Molecule>
where
    R: io::Read,
    L: ElementLookup + ?Sized,
{
    molecule_from_str(&read_all(reader)?, lookup)
}

/// Deserialize a periodic table from an I/O stream.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, otherwise see [`table_from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn table_from_reader<R>(reader: R) -> Result<PeriodicTable>
where
    R: io::Read,
{
    table_from_str(&read_all(reader)?)
}

fn read_all<R: io::Read>(mut reader: R) -> Result<String> {
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(string)
}
