// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use crate::attr::{Attr, AttrPair};
use crate::plain::PlainLink;
use std::collections::HashMap;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

/// Primitive representation of a link: a target and its attributes, without
/// any handling rules for "rel", "anchor", "hreflang", etc.
///
/// The href is opaque, it is neither validated nor normalised.
///
/// Two links are equal when they share the href and the same attribute pairs
/// regardless of their order. Duplicated pairs count.
///
/// ```
/// use linkheader::link::Link;
///
/// let a = Link::new("/", vec![("rel", "up"), ("title", "home")]);
/// let b = Link::new("/", vec![("title", "home"), ("rel", "up")]);
///
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), r#"</>; rel="up"; title="home""#);
/// ```
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "PlainLink", into = "PlainLink")
)]
#[derive(Clone)]
pub struct Link {
    href: String,
    attr_pairs: Vec<AttrPair>,
    attrs: OnceLock<HashMap<String, String>>,
}

impl Link {
    pub fn new<H, I, K, V>(href: H, attr_pairs: I) -> Link
    where
        H: Into<String>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Link {
            href: href.into(),
            attr_pairs: attr_pairs
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
            attrs: OnceLock::new(),
        }
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    /// The attributes in the order they were parsed or given.
    pub fn attr_pairs(&self) -> &[AttrPair] {
        &self.attr_pairs
    }

    /// The attributes keyed by name.
    ///
    /// Beware of repeated names: the last pair wins. Use `attr_pairs` when
    /// every occurrence matters.
    ///
    /// ```
    /// use linkheader::link::Link;
    ///
    /// let link = Link::new("/foo", vec![("rel", "self"), ("rel", "canonical")]);
    ///
    /// assert_eq!(link.attrs().len(), 1);
    /// assert_eq!(link.attrs()["rel"], "canonical");
    /// assert_eq!(link.attr_pairs().len(), 2);
    /// ```
    pub fn attrs(&self) -> &HashMap<String, String> {
        self.attrs
            .get_or_init(|| self.attr_pairs.iter().cloned().collect())
    }

    /// Looks up an attribute value by name, see `attrs`.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs().get(name).map(String::as_str)
    }

    /// Whether the link carries this exact attribute pair.
    pub fn has_attr(&self, name: &str, value: &str) -> bool {
        self.attr_pairs
            .iter()
            .any(|(n, v)| n == name && v == value)
    }

    /// Renders the link as an HTML `link` element.
    ///
    /// Attribute values are escaped the same way the header form does it.
    ///
    /// ```
    /// use linkheader::link::Link;
    ///
    /// let link = Link::new("http://example.com/foo", vec![("rel", "self")]);
    ///
    /// assert_eq!(link.to_html(), r#"<link href="http://example.com/foo" rel="self">"#);
    /// ```
    pub fn to_html(&self) -> String {
        let mut html = format!("<link href=\"{}\"", self.href);

        for attr in self.attrs_iter() {
            html.push(' ');
            html.push_str(&attr.to_string());
        }

        html.push('>');
        html
    }

    /// Converts the link into its plain-data form.
    pub fn to_plain(&self) -> PlainLink {
        (self.href.clone(), self.attr_pairs.clone())
    }

    /// Consumes the link and returns its plain-data form.
    pub fn into_plain(self) -> PlainLink {
        (self.href, self.attr_pairs)
    }

    fn attrs_iter(&self) -> impl Iterator<Item = Attr<'_>> {
        self.attr_pairs.iter().map(Attr::from)
    }

    fn sorted_pairs(&self) -> Vec<&AttrPair> {
        let mut pairs: Vec<&AttrPair> = self.attr_pairs.iter().collect();
        pairs.sort();
        pairs
    }
}

impl<H, K, V> From<(H, Vec<(K, V)>)> for Link
where
    H: Into<String>,
    K: Into<String>,
    V: Into<String>,
{
    fn from((href, attr_pairs): (H, Vec<(K, V)>)) -> Link {
        Link::new(href, attr_pairs)
    }
}

impl From<Link> for PlainLink {
    fn from(link: Link) -> PlainLink {
        link.into_plain()
    }
}

impl PartialEq for Link {
    fn eq(&self, other: &Link) -> bool {
        self.href == other.href
            && self.attr_pairs.len() == other.attr_pairs.len()
            && self.sorted_pairs() == other.sorted_pairs()
    }
}

impl Eq for Link {}

impl Hash for Link {
    fn hash<S: Hasher>(&self, state: &mut S) {
        self.href.hash(state);
        self.sorted_pairs().hash(state);
    }
}

impl Debug for Link {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter
            .debug_struct("Link")
            .field("href", &self.href)
            .field("attr_pairs", &self.attr_pairs)
            .finish()
    }
}

/// The header form: `<href>; name="value"; ...`.
impl Display for Link {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "<{}>", self.href)?;

        for attr in self.attrs_iter() {
            write!(formatter, "; {}", attr)?;
        }

        Ok(())
    }
}
