// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

//! Link attributes and the quoting rules shared by the header formatter and
//! the HTML renderer.

use std::borrow::Cow;
use std::fmt::{self, Display};

/// A link attribute as a `(name, value)` pair, e.g. `("rel", "next")`.
///
/// Names may repeat within a link; the pair list keeps every occurrence.
pub type AttrPair = (String, String);

/// Backslash-escapes every double quote in `value`.
///
/// This is a single pass: a value that already carries `\"` gets its quote
/// escaped again but its backslash left alone, so escaping is not idempotent.
///
/// ```
/// use linkheader::attr::escape;
///
/// assert_eq!(escape("plain"), "plain");
/// assert_eq!(escape(r#"say "hi""#), r#"say \"hi\""#);
/// assert_eq!(escape(r#"a\"b"#), r#"a\\"b"#);
/// ```
pub fn escape(value: &str) -> Cow<'_, str> {
    if value.contains('"') {
        Cow::Owned(value.replace('"', "\\\""))
    } else {
        Cow::Borrowed(value)
    }
}

/// Reverses `escape` for the interior of a quoted string: `\"` becomes `"`.
///
/// No other escape sequence is recognised, `\\` and `\n` stay as they are.
///
/// ```
/// use linkheader::attr::unescape;
///
/// assert_eq!(unescape(r#"escaped \""#), "escaped \"");
/// assert_eq!(unescape(r#"back\\slash"#), r#"back\\slash"#);
/// ```
pub fn unescape(quoted: &str) -> Cow<'_, str> {
    if quoted.contains("\\\"") {
        Cow::Owned(quoted.replace("\\\"", "\""))
    } else {
        Cow::Borrowed(quoted)
    }
}

/// Borrowed view of an attribute pair that renders as `name="value"` with the
/// value escaped.
///
/// ```
/// use linkheader::attr::Attr;
///
/// let attr = Attr::new("title", r#"the "best" chapter"#);
///
/// assert_eq!(attr.to_string(), r#"title="the \"best\" chapter""#);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Attr<'a> {
    name: &'a str,
    value: &'a str,
}

impl<'a> Attr<'a> {
    pub fn new(name: &'a str, value: &'a str) -> Attr<'a> {
        Attr { name, value }
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn value(&self) -> &'a str {
        self.value
    }
}

impl<'a> From<&'a AttrPair> for Attr<'a> {
    fn from((name, value): &'a AttrPair) -> Attr<'a> {
        Attr::new(name, value)
    }
}

impl Display for Attr<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}=\"{}\"", self.name, escape(self.value))
    }
}
