//! Brace-format deserialization.
//!
//! This module decodes the text produced by [`crate::ser`] back into
//! elements, molecules and periodic tables.
//!
//! ## Overview
//!
//! - **Elements** decode on their own: six tokens, each validated in order.
//! - **Molecules** store atomic numbers, so decoding needs an
//!   [`ElementLookup`]; the [`Deserializer`] borrows one for its lifetime.
//! - **Periodic tables** are decoded leniently: entries that are malformed or
//!   conflict with earlier ones are skipped with a warning.
//!
//! Catalog elements are cloned into the decoded tree before their charge is
//! applied, so a lookup table is never modified.
//!
//! ## Usage
//!
//! ```rust
//! use chemform::{Deserializer, PeriodicTable};
//!
//! let table = PeriodicTable::standard();
//! let hydroxide = Deserializer::new(&table)
//!     .molecule("{M:2},{{8},{-2},{1}},{{1},{1},{1}}")
//!     .unwrap();
//!
//! assert_eq!(hydroxide.to_string(), "[OH]-");
//! assert_eq!(table.get(8).unwrap().charge(), 0);
//! ```

use crate::ser::{MOLECULE_PREFIX, TABLE_PREFIX};
use crate::table::ElementLookup;
use crate::tokenizer::{starts_with_count_prefix, tokenize};
use crate::{Component, Element, Error, Molecule, Particle, PeriodicTable, Result};
use tracing::{debug, instrument, trace, warn};

/// Number of fields in a serialized element.
pub const ELEMENT_FIELDS: usize = 6;

/// Largest `L:` capacity accepted when decoding a periodic table.
pub const MAX_TABLE_CAPACITY: usize = 4096;

/// Deepest molecule-inside-molecule nesting accepted when decoding.
pub const MAX_NESTING_DEPTH: usize = 64;

/// The brace-format molecule deserializer.
///
/// Resolves atomic numbers through the borrowed lookup table.
pub struct Deserializer<'l, L: ?Sized> {
    lookup: &'l L,
}

impl<'l, L> Deserializer<'l, L>
where
    L: ElementLookup + ?Sized,
{
    pub fn new(lookup: &'l L) -> Self {
        Deserializer { lookup }
    }

    /// Decodes a serialized molecule.
    ///
    /// A nested molecule entry's charge field must be an integer, but its
    /// value is not trusted: the nested charge is always derived from its own
    /// entries, and a differing declaration is logged at warn level.
    ///
    /// # Errors
    ///
    /// - tokenizer errors for malformed top-level text
    /// - [`Error::CountPrefixNotFound`] if the first token lacks `M:`
    /// - [`Error::MalformedEntry`] for a bad declared count, an entry count that
    ///   does not match it, an entry without exactly three fields, or nesting
    ///   deeper than [`MAX_NESTING_DEPTH`]
    /// - [`Error::InvalidEntryData`] for unparseable references, charges or
    ///   counts, or a total charge outside the `i64` range
    /// - [`Error::ElementNotFound`] for an atomic number missing from the lookup
    #[instrument(level = "debug", skip(self))]
    pub fn molecule(&self, data: &str) -> Result<Molecule> {
        self.molecule_at(data, 0)
    }

    /// Decodes either a molecule or an element, depending on whether the first
    /// token carries the `M:` prefix.
    pub fn particle(&self, data: &str) -> Result<Particle> {
        if starts_with_count_prefix(data, MOLECULE_PREFIX) {
            self.molecule(data).map(Particle::Molecule)
        } else {
            element_from_str(data).map(Particle::Element)
        }
    }

    fn molecule_at(&self, data: &str, depth: usize) -> Result<Molecule> {
        if depth > MAX_NESTING_DEPTH {
            return Err(Error::malformed_entry(format!(
                "molecule nesting exceeds {MAX_NESTING_DEPTH} levels"
            )));
        }

        let tokens = tokenize(data)?;
        let (header, entries) = tokens.split_first().ok_or(Error::EmptyInput)?;

        let declared = count_header(header, MOLECULE_PREFIX)?;
        if declared == 0 {
            return Err(Error::malformed_entry(format!(
                "molecule count must be at least 1 in {header:?}"
            )));
        }
        if entries.len() != declared {
            return Err(Error::malformed_entry(format!(
                "expected {declared} entries, found {}",
                entries.len()
            )));
        }

        let components = entries
            .iter()
            .map(|entry| self.component(entry, depth))
            .collect::<Result<Vec<_>>>()?;

        let molecule = Molecule::new(components)?;
        if molecule.checked_charge().is_none() {
            return Err(Error::invalid_entry_data("total charge is out of range"));
        }
        Ok(molecule)
    }

    /// Decodes one `{ref},{charge},{count}` entry.
    fn component(&self, entry: &str, depth: usize) -> Result<Component> {
        let fields = tokenize(entry)
            .map_err(|err| Error::malformed_entry(format!("{entry:?}: {err}")))?;
        let [reference, charge, count] = fields.as_slice() else {
            return Err(Error::malformed_entry(format!(
                "expected 3 fields in {entry:?}, found {}",
                fields.len()
            )));
        };
        let (reference, charge, count) = (reference.trim(), charge.trim(), count.trim());

        let particle = if reference.starts_with('{') {
            let nested = self.molecule_at(reference, depth + 1)?;
            let declared: i64 = charge
                .parse()
                .map_err(|_| Error::invalid_entry_data(format!("invalid charge {charge:?}")))?;
            let derived = nested.charge();
            if declared != derived {
                warn!(declared, derived, "ignoring declared charge of nested molecule");
            }
            Particle::Molecule(nested)
        } else {
            let atomic_number = reference
                .parse::<u32>()
                .ok()
                .filter(|&n| n > 0)
                .ok_or_else(|| {
                    Error::invalid_entry_data(format!("invalid atomic number {reference:?}"))
                })?;
            let catalog = self
                .lookup
                .by_atomic_number(atomic_number)
                .ok_or_else(|| Error::element_not_found(reference))?;
            let charge: i32 = charge
                .parse()
                .map_err(|_| Error::invalid_entry_data(format!("invalid charge {charge:?}")))?;
            trace!(atomic_number, charge, "resolved element entry");
            Particle::Element(catalog.clone().with_charge(charge))
        };

        let count = count
            .parse::<u32>()
            .ok()
            .filter(|&c| c > 0)
            .ok_or_else(|| Error::invalid_entry_data(format!("invalid count {count:?}")))?;

        Component::new(particle, count)
    }
}

/// Decodes a serialized element. The result has charge 0.
///
/// # Errors
///
/// - tokenizer errors for malformed text
/// - [`Error::InvalidLength`] unless there are exactly six tokens
/// - the field-specific `Invalid*` error, carrying the raw token, for the
///   first field that fails to parse or validate
pub fn element_from_str(data: &str) -> Result<Element> {
    let tokens = tokenize(data)?;
    let [number, group, period, mass, name, symbol] = tokens.as_slice() else {
        return Err(Error::InvalidLength {
            expected: ELEMENT_FIELDS,
            found: tokens.len(),
        });
    };

    let builder = Element::builder()
        .atomic_number(integer(number, Error::InvalidAtomicNumber)?)
        .map_err(|_| Error::InvalidAtomicNumber(number.to_string()))?
        .group(integer(group, Error::InvalidGroupNumber)?)
        .map_err(|_| Error::InvalidGroupNumber(group.to_string()))?
        .period(integer(period, Error::InvalidPeriodNumber)?)
        .map_err(|_| Error::InvalidPeriodNumber(period.to_string()))?;

    let mass_value: f64 = mass
        .trim()
        .parse()
        .map_err(|_| Error::InvalidMolarMass(mass.to_string()))?;

    builder
        .molar_mass(mass_value)
        .map_err(|_| Error::InvalidMolarMass(mass.to_string()))?
        .name(name.trim())
        .map_err(|_| Error::InvalidName(name.to_string()))?
        .symbol(symbol.trim())
        .map_err(|_| Error::InvalidSymbol(symbol.to_string()))?
        .build()
}

/// Decodes a serialized periodic table.
///
/// The `L:` header sizes the table. Each entry that decodes to an element and
/// fits without conflict is inserted; the rest are skipped and logged at warn
/// level.
///
/// # Errors
///
/// - tokenizer errors for malformed top-level text
/// - [`Error::CountPrefixNotFound`] if the first token lacks `L:`
/// - [`Error::MalformedEntry`] if the capacity does not parse or exceeds
///   [`MAX_TABLE_CAPACITY`]
#[instrument(level = "debug", skip(data), fields(len = data.len()))]
pub fn table_from_str(data: &str) -> Result<PeriodicTable> {
    let tokens = tokenize(data)?;
    let (header, entries) = tokens.split_first().ok_or(Error::EmptyInput)?;

    let capacity = count_header(header, TABLE_PREFIX)?;
    if capacity > MAX_TABLE_CAPACITY {
        return Err(Error::malformed_entry(format!(
            "table capacity {capacity} exceeds {MAX_TABLE_CAPACITY}"
        )));
    }

    let mut table = PeriodicTable::with_capacity(capacity);
    for (position, entry) in entries.iter().enumerate() {
        match element_from_str(entry).and_then(|element| table.insert(element)) {
            Ok(()) => trace!(position, "inserted table entry"),
            Err(err) => warn!(position, error = %err, "skipping table entry"),
        }
    }

    debug!(elements = table.len(), capacity, "decoded periodic table");
    Ok(table)
}

/// Decodes a serialized element or molecule. See [`Deserializer::particle`].
pub fn particle_from_str<L>(data: &str, lookup: &L) -> Result<Particle>
where
    L: ElementLookup + ?Sized,
{
    Deserializer::new(lookup).particle(data)
}

/// Parses the number after `prefix` in a header token such as `M:3`.
fn count_header(token: &str, prefix: &'static str) -> Result<usize> {
    let rest = token
        .trim()
        .strip_prefix(prefix)
        .ok_or_else(|| Error::count_prefix_not_found(prefix, token))?;
    rest.trim()
        .parse()
        .map_err(|_| Error::malformed_entry(format!("invalid count in {token:?}")))
}

fn integer(token: &str, err: fn(String) -> Error) -> Result<i64> {
    token.trim().parse().map_err(|_| err(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn molecule(data: &str) -> Result<Molecule> {
        Deserializer::new(&PeriodicTable::standard()).molecule(data)
    }

    #[test]
    fn test_element() {
        let hydrogen = element_from_str("{1},{1},{1},{1.008},{hydrogen},{H}").unwrap();
        assert_eq!(hydrogen.symbol(), "H");
        assert_eq!(hydrogen.molar_mass(), 1.008);
        assert_eq!(hydrogen.charge(), 0);
    }

    #[test]
    fn test_element_tokens_are_trimmed_and_canonicalized() {
        let sodium = element_from_str("{ 11 },{1},{3},{ 22.99 },{SODIUM},{nA}").unwrap();
        assert_eq!(sodium.atomic_number(), 11);
        assert_eq!(sodium.name(), "sodium");
        assert_eq!(sodium.symbol(), "Na");
    }

    #[test]
    fn test_element_wrong_length() {
        assert_eq!(
            element_from_str("{1},{1},{1},{1.0},{hydrogen}"),
            Err(Error::InvalidLength {
                expected: 6,
                found: 5
            })
        );
    }

    #[test]
    fn test_element_field_errors_carry_raw_token() {
        let cases = [
            ("{x},{1},{1},{1.0},{a},{A}", Error::InvalidAtomicNumber("x".into())),
            ("{0},{1},{1},{1.0},{a},{A}", Error::InvalidAtomicNumber("0".into())),
            ("{1},{-1},{1},{1.0},{a},{A}", Error::InvalidGroupNumber("-1".into())),
            ("{1},{1},{},{1.0},{a},{A}", Error::InvalidPeriodNumber("".into())),
            ("{1},{1},{1},{0.0},{a},{A}", Error::InvalidMolarMass("0.0".into())),
            ("{1},{1},{1},{NaN},{a},{A}", Error::InvalidMolarMass("NaN".into())),
            ("{1},{1},{1},{1.0},{a1},{A}", Error::InvalidName("a1".into())),
            ("{1},{1},{1},{1.0},{a},{H2}", Error::InvalidSymbol("H2".into())),
        ];
        for (data, expected) in cases {
            assert_eq!(element_from_str(data), Err(expected), "{data}");
        }
    }

    #[test]
    fn test_flat_molecule() {
        let water = molecule("{M:2},{{1},{0},{2}},{{8},{0},{1}}").unwrap();
        assert_eq!(water.molecular_formula(), "H2O");
        assert_eq!(water.components()[0].count(), 2);
    }

    #[test]
    fn test_nested_molecule() {
        let data = "{M:2},{{20},{2},{1}},{{{M:2},{{8},{-2},{1}},{{1},{1},{1}}},{-1},{2}}";
        let base = molecule(data).unwrap();
        assert_eq!(base.molecular_formula(), "Ca(OH)2");
        assert_eq!(base.charge(), 0);
        assert_eq!(crate::to_string(&base), data);
    }

    #[test]
    fn test_charge_is_applied_to_a_copy() {
        let table = PeriodicTable::standard();
        let ion = Deserializer::new(&table)
            .molecule("{M:1},{{11},{1},{1}}")
            .unwrap();
        assert_eq!(ion.charge(), 1);
        assert_eq!(table.get(11).unwrap().charge(), 0);
    }

    #[test]
    fn test_missing_prefix() {
        assert_eq!(
            molecule("{X:1},{{1},{0},{1}}"),
            Err(Error::count_prefix_not_found("M:", "X:1"))
        );
    }

    #[test]
    fn test_bad_declared_count() {
        assert!(matches!(molecule("{M:x},{{1},{0},{1}}"), Err(Error::MalformedEntry(_))));
        assert!(matches!(molecule("{M:0}"), Err(Error::MalformedEntry(_))));
        assert!(matches!(
            molecule("{M:2},{{1},{0},{1}}"),
            Err(Error::MalformedEntry(_))
        ));
    }

    #[test]
    fn test_entry_shape() {
        assert!(matches!(molecule("{M:1},{{1},{0}}"), Err(Error::MalformedEntry(_))));
        assert!(matches!(molecule("{M:1},{1,0,1}"), Err(Error::MalformedEntry(_))));
    }

    #[test]
    fn test_entry_values() {
        assert!(matches!(molecule("{M:1},{{H},{0},{1}}"), Err(Error::InvalidEntryData(_))));
        assert!(matches!(molecule("{M:1},{{1},{+x},{1}}"), Err(Error::InvalidEntryData(_))));
        assert!(matches!(molecule("{M:1},{{1},{0},{0}}"), Err(Error::InvalidEntryData(_))));
        assert_eq!(
            molecule("{M:1},{{200},{0},{1}}"),
            Err(Error::ElementNotFound("200".to_string()))
        );
    }

    #[test]
    fn test_nested_declared_charge_is_ignored() {
        let data = "{M:1},{{{M:2},{{8},{-2},{1}},{{1},{1},{1}}},{0},{1}}";
        let decoded = molecule(data).unwrap();
        assert_eq!(decoded.charge(), -1);
        assert_eq!(decoded.components()[0].particle().charge(), -1);
        assert_eq!(
            crate::to_string(&decoded),
            "{M:1},{{{M:2},{{8},{-2},{1}},{{1},{1},{1}}},{-1},{1}}"
        );

        let unparseable = "{M:1},{{{M:1},{{8},{-2},{1}}},{+x},{1}}";
        assert!(matches!(molecule(unparseable), Err(Error::InvalidEntryData(_))));
    }

    #[test]
    fn test_charge_out_of_range_is_rejected() {
        let ion = "{{1},{2147483647},{4294967295}}";
        let data = format!("{{M:1}},{{{{{{M:2}},{ion},{ion}}},{{0}},{{1}}}}");
        assert!(matches!(molecule(&data), Err(Error::InvalidEntryData(_))));

        let flat = format!("{{M:2}},{ion},{ion}");
        assert!(matches!(molecule(&flat), Err(Error::InvalidEntryData(_))));

        let single = format!("{{M:1}},{ion}");
        assert_eq!(
            molecule(&single).unwrap().charge(),
            i64::from(i32::MAX) * i64::from(u32::MAX)
        );
    }

    fn nest(levels: usize) -> String {
        (0..levels).fold("{M:1},{{1},{0},{1}}".to_string(), |inner, _| {
            format!("{{M:1}},{{{{{inner}}},{{0}},{{1}}}}")
        })
    }

    #[test]
    fn test_nesting_depth_is_capped() {
        let deepest = molecule(&nest(MAX_NESTING_DEPTH)).unwrap();
        assert_eq!(deepest.molecular_formula(), "H");
        assert!(matches!(
            molecule(&nest(MAX_NESTING_DEPTH + 1)),
            Err(Error::MalformedEntry(_))
        ));
        assert!(matches!(molecule(&nest(1_000)), Err(Error::MalformedEntry(_))));
    }

    #[test]
    fn test_particle_sniffing() {
        let table = PeriodicTable::standard();
        let element = particle_from_str("{8},{16},{2},{15.999},{oxygen},{O}", &table).unwrap();
        assert!(element.is_element());
        let molecule = particle_from_str("{M:1},{{8},{0},{2}}", &table).unwrap();
        assert!(molecule.is_molecule());
        assert!(particle_from_str("not braced", &table).is_err());
    }

    #[test]
    fn test_table_skips_bad_entries() {
        let data = "{L:4},{{1},{1},{1},{1.008},{hydrogen},{H}},{{x}},\
                    {{2},{18},{1},{4.0026},{hydrogen},{He}},\
                    {{9},{17},{2},{18.998},{fluorine},{F}},\
                    {{3},{1},{2},{6.94},{lithium},{Li}}";
        let table = table_from_str(data).unwrap();
        assert_eq!(table.capacity(), 4);
        assert_eq!(table.len(), 2);
        assert!(table.get(1).is_some());
        assert!(table.get(2).is_none());
        assert_eq!(table.get(3).unwrap().symbol(), "Li");
    }

    #[test]
    fn test_table_header_errors() {
        assert!(matches!(
            table_from_str("{M:4}"),
            Err(Error::CountPrefixNotFound { prefix: "L:", .. })
        ));
        assert!(matches!(table_from_str("{L:big}"), Err(Error::MalformedEntry(_))));
        assert!(matches!(table_from_str("{L:99999}"), Err(Error::MalformedEntry(_))));
        assert_eq!(table_from_str(""), Err(Error::EmptyInput));
    }

    #[test]
    fn test_table_round_trip() {
        let table = PeriodicTable::standard();
        assert_eq!(table_from_str(&crate::to_string(&table)).unwrap(), table);
    }
}
