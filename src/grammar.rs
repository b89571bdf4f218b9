//! Text Format Reference
//!
//! This module documents the two textual notations understood by this library:
//! molecular formulas and the brace-delimited serialization format.
//!
//! # Molecular Formulas
//!
//! ```text
//! formula  := item+
//! item     := (symbol | "(" formula ")") count?
//! symbol   := [A-Z][a-z]*
//! count    := [0-9]+
//! ```
//!
//! **Rules**:
//! - Whitespace is removed before parsing: `"C6 H12 O6"` is `"C6H12O6"`
//! - A formula must start with `(` or an uppercase letter
//! - A lowercase letter may only continue a symbol; `H2o` and `(OH)e` are rejected
//! - Symbols are matched exactly against the lookup table: `NA` is `N` then `A`
//! - A count binds to the symbol or closing bracket directly before it
//! - Counts default to 1; an explicit `0` or a count above `u32::MAX` is rejected
//! - Empty groups `()` are rejected
//! - Groups nest at most [`crate::ParseOptions::max_depth`] levels (64 by default)
//!
//! | Formula | Structure |
//! |---------|-----------|
//! | `H2O` | H x2, O x1 |
//! | `(NH4)2SO4` | (N x1, H x4) x2, S x1, O x4 |
//! | `K4(Fe(CN)6)2` | K x4, (Fe x1, (C x1, N x1) x6) x2 |
//! | `Ca(OH)` | Ca x1, O x1, H x1 (unit group spliced, see below) |
//!
//! ## Unit Groups
//!
//! The renderer only writes parentheses around a nested molecule that repeats,
//! so `Ca(OH)` and `CaOH` render the same way. By default the parser splices a
//! bracket group with count 1 into its parent, which makes parsing a rendered
//! formula give back the tree it came from. [`crate::ParseOptions::nested`]
//! keeps every group as its own molecule instead.
//!
//! ## Charged Rendering
//!
//! `Display` on particles adds the charge after a bracketed formula:
//!
//! | Charge | Output |
//! |--------|--------|
//! | 0 | `SO4` |
//! | +1 | `[NH4]+` |
//! | -1 | `[OH]-` |
//! | -2 | `[SO4]2-` |
//!
//! # Brace Format
//!
//! ## Tokens
//!
//! ```text
//! list   := "{" content "}" ("," "{" content "}")* ","?
//! ```
//!
//! One level of braces is stripped per tokenization; braces inside `content`
//! are kept verbatim for the next level. No whitespace is allowed between
//! tokens. Tokenizer failures report the byte index of the offending character:
//!
//! | Input | Error |
//! |-------|-------|
//! | `""` | `EmptyInput` |
//! | `"a"` | `ExpectedOpenBrace` at 0 |
//! | `"{a}{b}"` | `ExpectedSeparator` at 3 |
//! | `"{a}}"` | `ExpectedSeparator` at 3 |
//! | `"{a"` | `ExpectedCloseBrace` at 2 |
//!
//! ## Elements
//!
//! ```text
//! {atomic number},{group},{period},{molar mass},{name},{symbol}
//! ```
//!
//! Example: `{26},{8},{4},{55.845},{iron},{Fe}`. Integral masses are written
//! with a fractional part (`{98.0}`). Tokens are trimmed before parsing. The
//! element charge is not part of this encoding.
//!
//! ## Molecules
//!
//! ```text
//! {M:n},{{ref},{charge},{count}},...
//! ```
//!
//! - `n` is the number of entries that follow
//! - `ref` is an atomic number, or a nested molecule wrapped in one extra brace pair
//! - `charge` is the charge of the entry's particle; for a nested molecule it
//!   must be an integer, but the decoded charge is always derived from the
//!   nested entries
//! - nested molecules may be at most 64 levels deep, and the total charge
//!   must fit in an `i64`
//! - `count` is the multiplicity, at least 1
//!
//! ```text
//! H2O      {M:2},{{1},{0},{2}},{{8},{0},{1}}
//! Ca(OH)2  {M:2},{{20},{2},{1}},{{{M:2},{{8},{-2},{1}},{{1},{1},{1}}},{-1},{2}}
//! ```
//!
//! ## Periodic Tables
//!
//! ```text
//! {L:capacity},{element},{element},...
//! ```
//!
//! Elements are listed in ascending atomic-number order, each wrapped in one
//! brace pair. When decoding, entries that fail to parse, exceed the capacity
//! or conflict with an earlier entry are skipped.
