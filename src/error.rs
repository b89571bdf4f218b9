//! Error types for formula parsing and brace-format (de)serialization.
//!
//! Every fallible operation in the crate returns [`Result`], whose error side is
//! the single [`Error`] enum below. Variants are grouped by the layer that
//! produces them:
//!
//! - **Tokenizer**: [`Error::EmptyInput`], [`Error::ExpectedOpenBrace`],
//!   [`Error::ExpectedSeparator`], [`Error::ExpectedCloseBrace`]
//! - **Element**: one `Invalid*` variant per field plus [`Error::InvalidLength`]
//! - **Molecule**: [`Error::CountPrefixNotFound`], [`Error::ElementNotFound`],
//!   [`Error::MalformedEntry`], [`Error::InvalidEntryData`], [`Error::EmptyMolecule`]
//! - **Formula parser**: [`Error::InvalidFormat`], [`Error::BracketImbalance`],
//!   [`Error::ElementNotFound`]
//! - **Periodic table**: [`Error::ConflictingElement`], [`Error::AtomicNumberOutOfRange`]
//!
//! Each variant keeps the offending text (and index where one exists) so the
//! message can point at the problem.
//!
//! ## Examples
//!
//! ```rust
//! use chemform::{tokenizer::tokenize, Error};
//!
//! let err = tokenize("{a}{b}").unwrap_err();
//! assert_eq!(err.to_string(), "Expecting ',' at index 3: \"{a}{b}\"");
//! assert!(matches!(err, Error::ExpectedSeparator { index: 3, .. }));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The tokenizer received an empty string
    #[error("Expecting data at index 0: \"\"")]
    EmptyInput,

    /// A token did not start with `{`
    #[error("Expecting '{{' at index {index}: \"{data}\"")]
    ExpectedOpenBrace { index: usize, data: String },

    /// A closed token was not followed by `,`, or a `}` had no matching `{`
    #[error("Expecting ',' at index {index}: \"{data}\"")]
    ExpectedSeparator { index: usize, data: String },

    /// Input ended inside an open token
    #[error("Expecting '}}' at index {index}: \"{data}\"")]
    ExpectedCloseBrace { index: usize, data: String },

    #[error("Invalid atomic number: \"{0}\"")]
    InvalidAtomicNumber(String),

    #[error("Invalid group number: \"{0}\"")]
    InvalidGroupNumber(String),

    #[error("Invalid period number: \"{0}\"")]
    InvalidPeriodNumber(String),

    #[error("Invalid molar mass: \"{0}\"")]
    InvalidMolarMass(String),

    #[error("Invalid element name: \"{0}\"")]
    InvalidName(String),

    #[error("Invalid element symbol: \"{0}\"")]
    InvalidSymbol(String),

    /// Serialized element had the wrong number of fields
    #[error("Invalid element data length: expected {expected} fields, found {found}")]
    InvalidLength { expected: usize, found: usize },

    /// The leading count token (`M:` or `L:`) was missing
    #[error("Count prefix '{prefix}' not found in \"{found}\"")]
    CountPrefixNotFound { prefix: &'static str, found: String },

    /// A referenced element is not in the lookup table
    #[error("Element could not be found: \"{0}\"")]
    ElementNotFound(String),

    /// Structural problem with a serialized molecule or table entry
    #[error("Malformed entry: {0}")]
    MalformedEntry(String),

    /// An entry had the right shape but unusable values
    #[error("Invalid entry data: {0}")]
    InvalidEntryData(String),

    #[error("A molecule must contain at least one component")]
    EmptyMolecule,

    /// Formula contains a character or sequence that cannot be parsed
    #[error("Invalid formula format at index {index} in \"{formula}\": {msg}")]
    InvalidFormat {
        formula: String,
        index: usize,
        msg: String,
    },

    /// Formula brackets do not balance
    #[error("Detected bracket imbalance at index {index} in \"{formula}\"")]
    BracketImbalance { formula: String, index: usize },

    /// An element with the same atomic number, name or symbol is already present
    #[error("Element \"{0}\" conflicts with an existing table entry")]
    ConflictingElement(String),

    #[error("Atomic number {atomic_number} exceeds table capacity {capacity}")]
    AtomicNumberOutOfRange { atomic_number: u32, capacity: usize },

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    pub(crate) fn expected_open_brace(data: &str, index: usize) -> Self {
        Error::ExpectedOpenBrace {
            index,
            data: data.to_string(),
        }
    }

    pub(crate) fn expected_separator(data: &str, index: usize) -> Self {
        Error::ExpectedSeparator {
            index,
            data: data.to_string(),
        }
    }

    pub(crate) fn expected_close_brace(data: &str, index: usize) -> Self {
        Error::ExpectedCloseBrace {
            index,
            data: data.to_string(),
        }
    }

    /// Creates an invalid format error for a formula.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chemform::Error;
    ///
    /// let err = Error::invalid_format("H2o", 2, "lowercase letter without a symbol");
    /// assert!(err.to_string().contains("index 2"));
    /// ```
    pub fn invalid_format(formula: &str, index: usize, msg: &str) -> Self {
        Error::InvalidFormat {
            formula: formula.to_string(),
            index,
            msg: msg.to_string(),
        }
    }

    /// Creates a bracket imbalance error pointing at `index`.
    pub fn bracket_imbalance(formula: &str, index: usize) -> Self {
        Error::BracketImbalance {
            formula: formula.to_string(),
            index,
        }
    }

    /// Creates a missing count prefix error.
    pub fn count_prefix_not_found(prefix: &'static str, found: &str) -> Self {
        Error::CountPrefixNotFound {
            prefix,
            found: found.to_string(),
        }
    }

    /// Creates an error for a reference that the lookup table could not resolve.
    pub fn element_not_found(reference: &str) -> Self {
        Error::ElementNotFound(reference.to_string())
    }

    /// Creates a malformed entry error.
    pub fn malformed_entry<T: fmt::Display>(msg: T) -> Self {
        Error::MalformedEntry(msg.to_string())
    }

    /// Creates an invalid entry data error.
    pub fn invalid_entry_data<T: fmt::Display>(msg: T) -> Self {
        Error::InvalidEntryData(msg.to_string())
    }

    /// Creates an I/O error for reader/writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` for errors raised by the brace tokenizer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chemform::Error;
    ///
    /// assert!(Error::EmptyInput.is_tokenizer_error());
    /// assert!(!Error::EmptyMolecule.is_tokenizer_error());
    /// ```
    #[must_use]
    pub fn is_tokenizer_error(&self) -> bool {
        matches!(
            self,
            Error::EmptyInput
                | Error::ExpectedOpenBrace { .. }
                | Error::ExpectedSeparator { .. }
                | Error::ExpectedCloseBrace { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
