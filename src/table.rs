//! The periodic table catalog and the lookup capability used by parsers.
//!
//! [`PeriodicTable`] stores at most one element per atomic number in
//! `1..=capacity`. Formula parsing and molecule deserialization only need the
//! read-only [`ElementLookup`] view of it.
//!
//! ```rust
//! use chemform::{ElementLookup, PeriodicTable};
//!
//! let table = PeriodicTable::standard();
//! assert_eq!(table.by_atomic_number(26).unwrap().symbol(), "Fe");
//! assert_eq!(table.by_name("IRON").unwrap().atomic_number(), 26);
//! assert!(table.by_symbol("fe").is_none()); // symbol lookup is exact
//! ```

use crate::standard::STANDARD_ELEMENTS;
use crate::{Element, Error, Result};

/// Highest atomic number in the built-in catalog.
pub const MAX_ATOMIC_NUMBER: u32 = 118;

/// Read-only element lookup consumed by the formula parser and deserializers.
pub trait ElementLookup {
    fn by_atomic_number(&self, atomic_number: u32) -> Option<&Element>;

    /// Exact, case-sensitive symbol match.
    fn by_symbol(&self, symbol: &str) -> Option<&Element>;

    /// Case-insensitive name match.
    fn by_name(&self, name: &str) -> Option<&Element>;
}

/// Fixed-capacity catalog of elements indexed by atomic number.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodicTable {
    slots: Vec<Option<Element>>,
}

impl Default for PeriodicTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PeriodicTable {
    /// Creates an empty table with room for atomic numbers 1 to 118.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(MAX_ATOMIC_NUMBER as usize)
    }

    /// Creates an empty table accepting atomic numbers `1..=capacity`.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        PeriodicTable {
            slots: vec![None; capacity],
        }
    }

    /// Creates a table populated with the built-in data for elements 1 to 118.
    #[must_use]
    pub fn standard() -> Self {
        PeriodicTable {
            slots: STANDARD_ELEMENTS
                .iter()
                .map(|&(number, group, period, mass, name, symbol)| {
                    Some(Element::from_catalog(number, group, period, mass, name, symbol))
                })
                .collect(),
        }
    }

    /// Decodes a table from the brace format. See [`crate::table_from_str`].
    pub fn from_braced(data: &str) -> Result<Self> {
        crate::de::table_from_str(data)
    }

    /// Encodes the table in the brace format.
    pub fn to_braced(&self) -> String {
        crate::to_string(self)
    }

    /// Highest atomic number this table can hold.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Iterates over the stored elements in ascending atomic-number order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> + '_ {
        self.slots.iter().flatten()
    }

    pub fn get(&self, atomic_number: u32) -> Option<&Element> {
        let index = (atomic_number as usize).checked_sub(1)?;
        self.slots.get(index)?.as_ref()
    }

    pub fn by_symbol(&self, symbol: &str) -> Option<&Element> {
        self.iter().find(|element| element.symbol() == symbol)
    }

    pub fn by_name(&self, name: &str) -> Option<&Element> {
        self.iter()
            .find(|element| element.name().eq_ignore_ascii_case(name))
    }

    /// Returns `true` if any stored element shares `candidate`'s atomic number,
    /// name or symbol.
    pub fn conflicts(&self, candidate: &Element) -> bool {
        self.iter().any(|existing| candidate.conflicts(existing))
    }

    /// Adds an element to its atomic-number slot.
    ///
    /// # Errors
    ///
    /// - [`Error::AtomicNumberOutOfRange`] if the atomic number exceeds the capacity
    /// - [`Error::ConflictingElement`] if an existing entry shares its atomic
    ///   number, name or symbol
    ///
    /// The table is unchanged when an error is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chemform::{Element, Error, PeriodicTable};
    ///
    /// let mut table = PeriodicTable::new();
    /// let hydrogen = Element::new(1, 1, 1, 1.008, "hydrogen", "H").unwrap();
    /// table.insert(hydrogen.clone()).unwrap();
    ///
    /// let impostor = Element::new(2, 18, 1, 4.0026, "hydrogen", "Hx").unwrap();
    /// assert!(matches!(table.insert(impostor), Err(Error::ConflictingElement(_))));
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn insert(&mut self, element: Element) -> Result<()> {
        let capacity = self.capacity();
        let index = element.atomic_number() as usize - 1;
        if index >= capacity {
            return Err(Error::AtomicNumberOutOfRange {
                atomic_number: element.atomic_number(),
                capacity,
            });
        }
        if self.conflicts(&element) {
            return Err(Error::ConflictingElement(element.symbol().to_string()));
        }
        self.slots[index] = Some(element);
        Ok(())
    }

    /// Removes and returns the element with `atomic_number`, if present.
    pub fn remove(&mut self, atomic_number: u32) -> Option<Element> {
        let index = (atomic_number as usize).checked_sub(1)?;
        self.slots.get_mut(index)?.take()
    }
}

impl ElementLookup for PeriodicTable {
    fn by_atomic_number(&self, atomic_number: u32) -> Option<&Element> {
        self.get(atomic_number)
    }

    fn by_symbol(&self, symbol: &str) -> Option<&Element> {
        PeriodicTable::by_symbol(self, symbol)
    }

    fn by_name(&self, name: &str) -> Option<&Element> {
        PeriodicTable::by_name(self, name)
    }
}

/// Plain element lists work as lookups too; useful for small ad-hoc catalogs.
impl ElementLookup for [Element] {
    fn by_atomic_number(&self, atomic_number: u32) -> Option<&Element> {
        self.iter().find(|e| e.atomic_number() == atomic_number)
    }

    fn by_symbol(&self, symbol: &str) -> Option<&Element> {
        self.iter().find(|e| e.symbol() == symbol)
    }

    fn by_name(&self, name: &str) -> Option<&Element> {
        self.iter().find(|e| e.name().eq_ignore_ascii_case(name))
    }
}

impl<'a> IntoIterator for &'a PeriodicTable {
    type Item = &'a Element;
    type IntoIter = std::iter::Flatten<std::slice::Iter<'a, Option<Element>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(number: i64, name: &str, symbol: &str) -> Element {
        Element::new(number, 1, 1, 1.0, name, symbol).unwrap()
    }

    #[test]
    fn test_standard_table_is_full() {
        let table = PeriodicTable::standard();
        assert_eq!(table.capacity(), 118);
        assert_eq!(table.len(), 118);
        assert_eq!(table.get(1).unwrap().symbol(), "H");
        assert_eq!(table.get(118).unwrap().symbol(), "Og");
        assert!(table.get(0).is_none());
        assert!(table.get(119).is_none());
    }

    #[test]
    fn test_lookups() {
        let table = PeriodicTable::standard();
        assert_eq!(table.by_symbol("Na").unwrap().atomic_number(), 11);
        assert!(table.by_symbol("NA").is_none());
        assert_eq!(table.by_name("Sodium").unwrap().symbol(), "Na");
        assert!(table.by_name("unobtainium").is_none());
    }

    #[test]
    fn test_insert_rejects_each_kind_of_conflict() {
        let mut table = PeriodicTable::new();
        table.insert(element(1, "hydrogen", "H")).unwrap();

        for duplicate in [
            element(1, "other", "Ot"),
            element(2, "HYDROGEN", "Q"),
            element(3, "third", "h"),
        ] {
            assert!(matches!(
                table.insert(duplicate),
                Err(Error::ConflictingElement(_))
            ));
        }
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(1).unwrap().name(), "hydrogen");
        assert!(table.get(2).is_none());
    }

    #[test]
    fn test_insert_rejects_out_of_range() {
        let mut table = PeriodicTable::with_capacity(2);
        assert_eq!(
            table.insert(element(3, "lithium", "Li")),
            Err(Error::AtomicNumberOutOfRange {
                atomic_number: 3,
                capacity: 2
            })
        );
        assert!(table.is_empty());
    }

    #[test]
    fn test_remove_frees_the_slot() {
        let mut table = PeriodicTable::standard();
        let removed = table.remove(8).unwrap();
        assert_eq!(removed.symbol(), "O");
        assert!(table.get(8).is_none());
        assert_eq!(table.len(), 117);
        assert!(table.remove(8).is_none());
        assert!(table.remove(0).is_none());

        table.insert(removed).unwrap();
        assert_eq!(table.len(), 118);
    }

    #[test]
    fn test_iteration_is_ordered() {
        let mut table = PeriodicTable::new();
        table.insert(element(5, "five", "Fv")).unwrap();
        table.insert(element(2, "two", "Tw")).unwrap();
        let numbers: Vec<u32> = table.iter().map(Element::atomic_number).collect();
        assert_eq!(numbers, vec![2, 5]);
    }

    #[test]
    fn test_slice_lookup() {
        let elements = vec![element(1, "hydrogen", "H"), element(8, "oxygen", "O")];
        let lookup: &[Element] = &elements;
        assert_eq!(lookup.by_atomic_number(8).unwrap().symbol(), "O");
        assert_eq!(lookup.by_symbol("H").unwrap().atomic_number(), 1);
        assert!(lookup.by_name("OXYGEN").is_some());
    }
}
