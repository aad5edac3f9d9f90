// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use crate::link::Link;
use crate::plain::PlainLink;
use std::fmt::{self, Display};
use std::iter::FromIterator;
use std::slice;

/// An ordered collection of links, the value of a `Link` header.
///
/// Links are given either as `Link` values or in their plain-data form:
///
/// ```
/// use linkheader::header::LinkHeader;
/// use linkheader::link::Link;
///
/// let from_links = LinkHeader::new(vec![
///     Link::new("http://example.com/foo", vec![("rel", "self")]),
///     Link::new("http://example.com/", vec![("rel", "up")]),
/// ]);
///
/// let from_plain = LinkHeader::new(vec![
///     ("http://example.com/foo", vec![("rel", "self")]),
///     ("http://example.com/", vec![("rel", "up")]),
/// ]);
///
/// assert_eq!(from_links, from_plain);
/// assert_eq!(
///     from_links.to_string(),
///     r#"<http://example.com/foo>; rel="self", <http://example.com/>; rel="up""#
/// );
/// ```
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LinkHeader {
    links: Vec<Link>,
}

impl LinkHeader {
    pub fn new<I, L>(links: I) -> LinkHeader
    where
        I: IntoIterator<Item = L>,
        L: Into<Link>,
    {
        links.into_iter().collect()
    }

    /// Builds a header from its plain-data form.
    pub fn from_plain(links: Vec<PlainLink>) -> LinkHeader {
        LinkHeader::new(links)
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Link> {
        self.links.iter()
    }

    /// Appends a link, given as a `Link` or in its plain-data form.
    pub fn push(&mut self, link: impl Into<Link>) {
        self.links.push(link.into());
    }

    /// Finds the first link carrying every given attribute pair.
    ///
    /// ```
    /// use linkheader::parse;
    ///
    /// let header = parse(r#"</a>; rel="up", </b>; rel="self"; type="json", </c>; rel="self""#);
    ///
    /// let link = header.find_link(&[("rel", "self")]).unwrap();
    /// assert_eq!(link.href(), "/b");
    ///
    /// let link = header.find_link(&[("type", "json"), ("rel", "self")]).unwrap();
    /// assert_eq!(link.href(), "/b");
    ///
    /// assert!(header.find_link(&[("rel", "up"), ("type", "json")]).is_none());
    /// ```
    pub fn find_link(&self, attr_pairs: &[(&str, &str)]) -> Option<&Link> {
        self.links.iter().find(|link| {
            attr_pairs
                .iter()
                .all(|(name, value)| link.has_attr(name, value))
        })
    }

    /// Renders every link as an HTML `link` element joined by `separator`.
    pub fn to_html(&self, separator: &str) -> String {
        self.links
            .iter()
            .map(Link::to_html)
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Converts the header into its plain-data form.
    pub fn to_plain(&self) -> Vec<PlainLink> {
        self.links.iter().map(Link::to_plain).collect()
    }

    /// Consumes the header and returns its plain-data form.
    pub fn into_plain(self) -> Vec<PlainLink> {
        self.links.into_iter().map(Link::into_plain).collect()
    }
}

impl<L: Into<Link>> FromIterator<L> for LinkHeader {
    fn from_iter<I: IntoIterator<Item = L>>(iter: I) -> LinkHeader {
        LinkHeader {
            links: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<L: Into<Link>> Extend<L> for LinkHeader {
    fn extend<I: IntoIterator<Item = L>>(&mut self, iter: I) {
        self.links.extend(iter.into_iter().map(Into::into));
    }
}

impl From<Vec<Link>> for LinkHeader {
    fn from(links: Vec<Link>) -> LinkHeader {
        LinkHeader { links }
    }
}

impl IntoIterator for LinkHeader {
    type Item = Link;
    type IntoIter = std::vec::IntoIter<Link>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.into_iter()
    }
}

impl<'a> IntoIterator for &'a LinkHeader {
    type Item = &'a Link;
    type IntoIter = slice::Iter<'a, Link>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.iter()
    }
}

/// The header form: links joined by `, `.
impl Display for LinkHeader {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        for (i, link) in self.links.iter().enumerate() {
            if i > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{}", link)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_fixture() -> Vec<PlainLink> {
        vec![
            (
                "http://example.com/".into(),
                vec![("rel".into(), "up".into()), ("meta".into(), "bar".into())],
            ),
            ("http://example.com/foo".into(), vec![("rel".into(), "self".into())]),
            ("http://example.com/".into(), vec![]),
        ]
    }

    #[test]
    fn from_plain() {
        let header = LinkHeader::from_plain(plain_fixture());

        assert_eq!(header.len(), 3);

        let link = &header.links()[0];
        assert_eq!(link.href(), "http://example.com/");
        assert_eq!(link.attr("rel"), Some("up"));
        assert_eq!(link.attr("meta"), Some("bar"));
    }

    #[test]
    fn to_plain() {
        assert_eq!(LinkHeader::from_plain(plain_fixture()).to_plain(), plain_fixture());
        assert_eq!(LinkHeader::from_plain(plain_fixture()).into_plain(), plain_fixture());
    }

    #[test]
    fn empty() {
        let header = LinkHeader::default();

        assert!(header.is_empty());
        assert_eq!(header.to_plain(), Vec::<PlainLink>::new());
        assert_eq!(header.to_string(), "");
        assert_eq!(header.to_html("\n"), "");
    }

    #[test]
    fn to_string() {
        assert_eq!(
            LinkHeader::from_plain(plain_fixture()).to_string(),
            r#"<http://example.com/>; rel="up"; meta="bar", <http://example.com/foo>; rel="self", <http://example.com/>"#
        );
    }

    #[test]
    fn to_string_escapes_quotes() {
        let header = LinkHeader::new(vec![("any old stuff!", vec![("a-token", "escaped \"")])]);

        assert_eq!(header.to_string(), r#"<any old stuff!>; a-token="escaped \"""#);
    }

    #[test]
    fn to_html() {
        let expected = [
            r#"<link href="http://example.com/" rel="up" meta="bar">"#,
            r#"<link href="http://example.com/foo" rel="self">"#,
            r#"<link href="http://example.com/">"#,
        ];
        let header = LinkHeader::from_plain(plain_fixture());

        assert_eq!(header.to_html("\n"), expected.join("\n"));
        assert_eq!(header.to_html("🔗"), expected.join("🔗"));
    }

    #[test]
    fn push_link() {
        let mut header = LinkHeader::default();
        let link = Link::new("http://example.com/foo", vec![("rel", "self")]);

        header.push(link.clone());

        assert_eq!(header.links(), &[link]);
    }

    #[test]
    fn push_plain() {
        let mut header = LinkHeader::default();

        header.push(("http://example.com/foo", vec![("rel", "self")]));

        assert_eq!(
            header.to_plain(),
            vec![("http://example.com/foo".to_string(), vec![("rel".to_string(), "self".to_string())])]
        );
    }

    #[test]
    fn extend_and_collect() {
        let mut header: LinkHeader = vec![("/a", vec![("rel", "first")])].into_iter().collect();

        header.extend(vec![("/b", vec![("rel", "next")])]);

        let hrefs: Vec<&str> = header.iter().map(Link::href).collect();
        assert_eq!(hrefs, vec!["/a", "/b"]);
    }

    #[test]
    fn order_matters() {
        let a = LinkHeader::new(vec![("/a", Vec::<(&str, &str)>::new()), ("/b", vec![])]);
        let b = LinkHeader::new(vec![("/b", Vec::<(&str, &str)>::new()), ("/a", vec![])]);

        assert_ne!(a, b);
    }

    #[test]
    fn find_link() {
        let header = LinkHeader::from_plain(plain_fixture());

        let link = header.find_link(&[("rel", "self")]).expect("Expect a link");
        assert_eq!(link.href(), "http://example.com/foo");

        assert!(header.find_link(&[("rel", "self"), ("meta", "bar")]).is_none());
        assert!(header.find_link(&[("rel", "down")]).is_none());
    }

    #[test]
    fn find_link_without_pairs() {
        let header = LinkHeader::from_plain(plain_fixture());

        assert_eq!(header.find_link(&[]), header.links().first());
    }
}
