//! Molecular formula parsing.
//!
//! Turns formula text such as `"(NH4)2SO4"` into a [`Molecule`] tree, resolving
//! element symbols through an [`ElementLookup`].
//!
//! ## Grammar
//!
//! ```text
//! formula  := item+
//! item     := (symbol | "(" formula ")") count?
//! symbol   := [A-Z][a-z]*
//! count    := [0-9]+          (defaults to 1, must be positive)
//! ```
//!
//! Whitespace anywhere in the input is ignored. A count always belongs to the
//! symbol or bracket group immediately before it.
//!
//! ## Examples
//!
//! ```rust
//! use chemform::{parse_formula, Particle, PeriodicTable};
//!
//! let table = PeriodicTable::standard();
//! let salt = parse_formula("(NH4)2SO4", &table).unwrap();
//!
//! let first = &salt.components()[0];
//! assert_eq!(first.count(), 2);
//! assert!(matches!(first.particle(), Particle::Molecule(m) if m.molecular_formula() == "NH4"));
//! ```

use crate::table::ElementLookup;
use crate::{Component, Error, Molecule, ParseOptions, Result};
use tracing::{debug, instrument, trace};

/// Two-pass formula parser bound to a lookup table.
///
/// The first pass validates characters and bracket balance and counts the
/// top-level particles; the second pass resolves symbols, recurses into
/// bracket groups and reads multiplicities.
pub struct FormulaParser<'l, L: ?Sized> {
    lookup: &'l L,
    options: ParseOptions,
}

/// A top-level particle before its multiplicity is known.
enum Item {
    Element(crate::Element),
    Group(Vec<Component>),
}

impl<'l, L> FormulaParser<'l, L>
where
    L: ElementLookup + ?Sized,
{
    pub fn new(lookup: &'l L, options: ParseOptions) -> Self {
        FormulaParser { lookup, options }
    }

    /// Parses `formula` into a molecule.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidFormat`] for an empty formula, a bad leading character,
    ///   a stray lowercase letter, an unexpected character, an empty `()` group,
    ///   a zero / overflowing multiplicity, or brackets nested deeper than
    ///   [`ParseOptions::max_depth`]
    /// - [`Error::BracketImbalance`] for unmatched brackets
    /// - [`Error::ElementNotFound`] for a symbol missing from the lookup table
    #[instrument(level = "debug", skip(self))]
    pub fn parse(&self, formula: &str) -> Result<Molecule> {
        let stripped: String = formula.chars().filter(|c| !c.is_whitespace()).collect();
        let components = self.parse_range(&stripped, 0, stripped.len(), 0)?;
        let molecule = Molecule::new(components)?;
        debug!(components = molecule.len(), "parsed formula");
        Ok(molecule)
    }

    /// Parses `formula[start..end]` at bracket depth `depth`. Indices in errors
    /// are relative to `formula`.
    fn parse_range(
        &self,
        formula: &str,
        start: usize,
        end: usize,
        depth: usize,
    ) -> Result<Vec<Component>> {
        let expected = count_particles(formula, start, end)?;
        let bytes = formula.as_bytes();
        let mut components = Vec::with_capacity(expected);
        let mut pos = start;

        while pos < end {
            let (item, next) = match bytes[pos] {
                b'A'..=b'Z' => {
                    let symbol_end = pos
                        + 1
                        + bytes[pos + 1..end]
                            .iter()
                            .take_while(|b| b.is_ascii_lowercase())
                            .count();
                    let symbol = &formula[pos..symbol_end];
                    let element = self
                        .lookup
                        .by_symbol(symbol)
                        .cloned()
                        .ok_or_else(|| Error::element_not_found(symbol))?;
                    (Item::Element(element), symbol_end)
                }
                b'(' => {
                    if depth >= self.options.max_depth {
                        return Err(Error::invalid_format(
                            formula,
                            pos,
                            &format!(
                                "bracket nesting exceeds {} levels",
                                self.options.max_depth
                            ),
                        ));
                    }
                    let close = matching_bracket(formula, pos, end)?;
                    if close == pos + 1 {
                        return Err(Error::invalid_format(formula, pos, "empty bracket group"));
                    }
                    let inner = self.parse_range(formula, pos + 1, close, depth + 1)?;
                    (Item::Group(inner), close + 1)
                }
                _ => {
                    return Err(Error::invalid_format(
                        formula,
                        pos,
                        "multiplicity must follow a symbol or bracket group",
                    ))
                }
            };

            let (count, after) = read_multiplicity(formula, next, end)?;
            pos = after;

            match item {
                Item::Element(element) => {
                    trace!(symbol = element.symbol(), count, "element");
                    components.push(Component::new(element, count)?);
                }
                Item::Group(inner) if count == 1 && self.options.flatten_unit_groups => {
                    trace!(len = inner.len(), "spliced unit group");
                    components.extend(inner);
                }
                Item::Group(inner) => {
                    trace!(len = inner.len(), count, "nested group");
                    components.push(Component::new(Molecule::new(inner)?, count)?);
                }
            }
        }

        Ok(components)
    }
}

/// First pass: validates `formula[start..end]` and counts its top-level particles.
fn count_particles(formula: &str, start: usize, end: usize) -> Result<usize> {
    let bytes = formula.as_bytes();

    match bytes.get(start) {
        Some(b'(' | b'A'..=b'Z') if start < end => {}
        _ => {
            return Err(Error::invalid_format(
                formula,
                start,
                "formula must start with '(' or an uppercase letter",
            ))
        }
    }

    let mut depth = 0usize;
    let mut particles = 0usize;
    let mut in_symbol = false;

    for (index, &byte) in bytes.iter().enumerate().take(end).skip(start) {
        match byte {
            b'(' => {
                depth += 1;
                in_symbol = false;
            }
            b')' => {
                if depth == 0 {
                    return Err(Error::bracket_imbalance(formula, index));
                }
                depth -= 1;
                if depth == 0 {
                    particles += 1;
                }
            }
            // Group contents are checked when the group itself is parsed
            _ if depth > 0 => {}
            b'A'..=b'Z' => {
                particles += 1;
                in_symbol = true;
            }
            b'a'..=b'z' if in_symbol => {}
            b'a'..=b'z' => {
                return Err(Error::invalid_format(
                    formula,
                    index,
                    "lowercase letter must continue an element symbol",
                ))
            }
            b'0'..=b'9' => in_symbol = false,
            _ => {
                return Err(Error::invalid_format(
                    formula,
                    index,
                    "unexpected character",
                ))
            }
        }
    }

    if depth != 0 {
        return Err(Error::bracket_imbalance(formula, end));
    }
    if particles == 0 {
        return Err(Error::invalid_format(formula, start, "no particles found"));
    }

    Ok(particles)
}

/// Index of the `)` matching the `(` at `open`.
fn matching_bracket(formula: &str, open: usize, end: usize) -> Result<usize> {
    let mut depth = 0usize;
    for (index, &byte) in formula.as_bytes().iter().enumerate().take(end).skip(open) {
        match byte {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(index);
                }
            }
            _ => {}
        }
    }
    Err(Error::bracket_imbalance(formula, end))
}

/// Reads the digit run starting at `pos`; no digits means a multiplicity of 1.
fn read_multiplicity(formula: &str, pos: usize, end: usize) -> Result<(u32, usize)> {
    let digits = formula.as_bytes()[pos..end]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return Ok((1, pos));
    }

    let count: u32 = formula[pos..pos + digits]
        .parse()
        .map_err(|_| Error::invalid_format(formula, pos, "multiplicity is too large"))?;
    if count == 0 {
        return Err(Error::invalid_format(
            formula,
            pos,
            "multiplicity must be at least 1",
        ));
    }

    Ok((count, pos + digits))
}
