// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

//! Plain-data form of links, fit for generic structured formats like JSON.
//!
//! A link is a `(href, [(name, value), ...])` tuple and a header a list of
//! them:
//!
//! ```json
//! [
//!   ["http://example.com/foo", [["rel", "self"]]],
//!   ["http://example.com/", [["rel", "up"]]]
//! ]
//! ```

use crate::attr::AttrPair;

/// A link as an `(href, attr_pairs)` tuple.
pub type PlainLink = (String, Vec<AttrPair>);

#[cfg(feature = "json")]
mod json {
    use crate::error::Result;
    use crate::header::LinkHeader;
    use tracing::debug;

    impl LinkHeader {
        /// Serializes the header in its plain-data form as a JSON array.
        ///
        /// ```
        /// use linkheader::header::LinkHeader;
        ///
        /// let header = LinkHeader::new(vec![("http://example.com/", vec![("rel", "up")])]);
        ///
        /// assert_eq!(
        ///     header.to_json().unwrap(),
        ///     r#"[["http://example.com/",[["rel","up"]]]]"#
        /// );
        /// ```
        pub fn to_json(&self) -> Result<String> {
            Ok(serde_json::to_string(self)?)
        }

        /// Reads a header from its plain-data form as a JSON array.
        ///
        /// Entries that are not `[href, [[name, value], ...]]` are rejected.
        pub fn from_json(input: &str) -> Result<LinkHeader> {
            let header: LinkHeader = serde_json::from_str(input)?;
            debug!(links = header.len(), "read link header from json");

            Ok(header)
        }
    }

}
