// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

//! Parse and format HTTP `Link` header values as described by RFC 8288.
//!
//! A header is a list of links, each an opaque target plus ordered
//! `(name, value)` attribute pairs. It moves between three forms: the wire
//! string, the `LinkHeader` model and a plain-data form of nested tuples.
//!
//! ```
//! use linkheader::{parse, LinkHeader};
//!
//! let header = parse(r#"<http://example.com/foo>; rel="self", <http://example.com/>; rel = "up""#);
//!
//! assert_eq!(
//!     header.to_plain(),
//!     vec![
//!         ("http://example.com/foo".to_string(), vec![("rel".to_string(), "self".to_string())]),
//!         ("http://example.com/".to_string(), vec![("rel".to_string(), "up".to_string())]),
//!     ]
//! );
//!
//! assert_eq!(
//!     header.to_string(),
//!     r#"<http://example.com/foo>; rel="self", <http://example.com/>; rel="up""#
//! );
//!
//! assert_eq!(LinkHeader::from_plain(header.to_plain()), header);
//! ```

#[macro_use]
extern crate failure;

extern crate pest;
#[macro_use]
extern crate pest_derive;

pub mod attr;
pub mod error;
pub mod header;
pub mod link;
pub mod parser;
pub mod plain;

pub use header::LinkHeader;
pub use link::Link;
pub use parser::{parse, try_parse};
pub use plain::PlainLink;
