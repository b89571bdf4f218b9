//! Brace tokenizer.
//!
//! Splits brace-delimited, comma-separated text into its top-level tokens:
//!
//! ```rust
//! use chemform::tokenizer::tokenize;
//!
//! let tokens = tokenize("{1},{{2},{3}},{x}").unwrap();
//! assert_eq!(tokens, vec!["1", "{2},{3}", "x"]);
//! ```
//!
//! Only one level of braces is stripped per call. Nested content is returned
//! verbatim so callers can tokenize it again.

use crate::{Error, Result};

pub(crate) const OPEN_BRACE: u8 = b'{';
pub(crate) const CLOSE_BRACE: u8 = b'}';
pub(crate) const SEPARATOR: u8 = b',';

/// Tokenizes `data`, returning the content of each top-level `{...}` group.
///
/// # Errors
///
/// - [`Error::EmptyInput`] if `data` is empty
/// - [`Error::ExpectedOpenBrace`] if a token does not start with `{`
/// - [`Error::ExpectedSeparator`] if a closed token is not followed by `,`, or a
///   `}` has no matching `{`
/// - [`Error::ExpectedCloseBrace`] if the input ends inside a token
///
/// # Examples
///
/// ```rust
/// use chemform::{tokenizer::tokenize, Error};
///
/// assert_eq!(tokenize("{a},{b},{c}").unwrap(), vec!["a", "b", "c"]);
/// assert_eq!(tokenize(""), Err(Error::EmptyInput));
/// assert!(matches!(tokenize("{a"), Err(Error::ExpectedCloseBrace { index: 2, .. })));
/// ```
pub fn tokenize(data: &str) -> Result<Vec<&str>> {
    Scanner::new(data).run()
}

/// Strict variant of [`tokenize`]: malformed input yields `None` instead of an error.
///
/// # Examples
///
/// ```rust
/// use chemform::tokenizer::tokenize_strict;
///
/// assert_eq!(tokenize_strict("{a},{b}"), Some(vec!["a", "b"]));
/// assert_eq!(tokenize_strict("a,b"), None);
/// ```
#[must_use]
pub fn tokenize_strict(data: &str) -> Option<Vec<&str>> {
    Scanner::new(data).run().ok()
}

/// Single pass over the input, tracking brace depth and token boundaries.
struct Scanner<'a> {
    data: &'a str,
    depth: usize,
    token_start: usize,
    expecting_separator: bool,
}

impl<'a> Scanner<'a> {
    fn new(data: &'a str) -> Self {
        Scanner {
            data,
            depth: 0,
            token_start: 0,
            expecting_separator: false,
        }
    }

    fn run(mut self) -> Result<Vec<&'a str>> {
        if self.data.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut tokens = Vec::new();

        for (index, &byte) in self.data.as_bytes().iter().enumerate() {
            if self.expecting_separator {
                if byte != SEPARATOR {
                    return Err(Error::expected_separator(self.data, index));
                }
                self.expecting_separator = false;
                continue;
            }

            match byte {
                OPEN_BRACE => {
                    if self.depth == 0 {
                        self.token_start = index + 1;
                    }
                    self.depth += 1;
                }
                CLOSE_BRACE => {
                    if self.depth == 0 {
                        return Err(Error::expected_separator(self.data, index));
                    }
                    self.depth -= 1;
                    if self.depth == 0 {
                        // Both bounds sit next to ASCII braces, so the slice is on char boundaries
                        tokens.push(&self.data[self.token_start..index]);
                        self.expecting_separator = true;
                    }
                }
                _ if self.depth == 0 => {
                    return Err(Error::expected_open_brace(self.data, index));
                }
                _ => {}
            }
        }

        if self.depth != 0 {
            return Err(Error::expected_close_brace(self.data, self.data.len()));
        }

        Ok(tokens)
    }
}

/// Returns `true` if `data` is a single well-formed brace sequence whose first
/// token starts with `prefix`.
pub(crate) fn starts_with_count_prefix(data: &str, prefix: &str) -> bool {
    tokenize_strict(data)
        .and_then(|tokens| tokens.first().map(|first| first.trim_start().starts_with(prefix)))
        .unwrap_or(false)
}
