// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

//! Error types and utilities.

use crate::parser::Rule;
pub use failure::Error;
use failure::Fail;

/// Either `Ok(T)` or `Err(failure::Error)`.
pub type Result<T> = ::std::result::Result<T, failure::Error>;

/// A parser error.
///
/// Malformed input is never an error: the parser keeps the links it could
/// match. These variants signal a parse tree that does not have the shape the
/// grammar promises.
#[derive(Clone, Eq, PartialEq, Debug, Fail)]
pub enum ParserError {
    /// Given invalid `Rule` variant to `from_rule`
    #[fail(display = "Expected a rule of type {} but given {} instead", _0, _1)]
    InvalidRule(Rule, Rule),

    /// A pair was expected but the parse tree ended early.
    #[fail(display = "Expected a rule of type {} but found nothing", _0)]
    MissingRule(Rule),
}
