//! Configuration options for formula parsing.
//!
//! ## Examples
//!
//! ```rust
//! use chemform::{parse_formula_with_options, ParseOptions, PeriodicTable};
//!
//! let table = PeriodicTable::standard();
//!
//! // Default: a bracket group without a multiplicity is spliced into its parent
//! let flat = parse_formula_with_options("Ca(OH)", &table, ParseOptions::new()).unwrap();
//! assert_eq!(flat.len(), 3);
//!
//! // Keep every bracket group as a nested molecule
//! let options = ParseOptions::new().with_flatten_unit_groups(false);
//! let nested = parse_formula_with_options("Ca(OH)", &table, options).unwrap();
//! assert_eq!(nested.len(), 2);
//!
//! // Bound how deeply bracket groups may nest
//! let shallow = ParseOptions::new().with_max_depth(1);
//! assert!(parse_formula_with_options("((H)2)2", &table, shallow).is_err());
//! ```

/// Configuration options for [`crate::parse_formula_with_options`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Splice bracket groups with multiplicity 1 into the enclosing molecule.
    ///
    /// Formula rendering only parenthesizes groups that repeat, so with this on
    /// (the default) parsing a rendered formula gives back the same tree.
    pub flatten_unit_groups: bool,

    /// Deepest bracket-group nesting accepted. Top-level items are depth 0.
    pub max_depth: usize,
}

/// Default for [`ParseOptions::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 64;

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            flatten_unit_groups: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    /// Creates default options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chemform::ParseOptions;
    ///
    /// assert!(ParseOptions::new().flatten_unit_groups);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that keep every bracket group as its own nested molecule.
    #[must_use]
    pub fn nested() -> Self {
        ParseOptions {
            flatten_unit_groups: false,
            ..Self::default()
        }
    }

    /// Sets whether bracket groups with multiplicity 1 are spliced into their parent.
    #[must_use]
    pub fn with_flatten_unit_groups(mut self, flatten: bool) -> Self {
        self.flatten_unit_groups = flatten;
        self
    }

    /// Sets the deepest bracket-group nesting the parser accepts.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
