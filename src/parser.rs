// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use crate::attr::{unescape, AttrPair};
use crate::error::{ParserError, Result};
use crate::header::LinkHeader;
use crate::link::Link;
use pest::iterators::Pair;
use pest::Parser;
use std::fmt::{self, Display};
use tracing::{debug, trace, warn};

#[derive(Parser)]
#[grammar = "rfc8288.pest"]
pub struct Rfc8288Parser;

impl Display for Rule {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{:?}", self)
    }
}

/// Parses a `Link` header value.
///
/// The parser is lenient: it keeps every link it can match from the start of
/// the input and drops whatever trailing content it cannot make sense of. An
/// absent header gives an empty collection.
///
/// ```
/// use linkheader::parse;
///
/// let header = parse(r#"<http://example.com/foo>; rel="self", <http://example.com/>; rel = "up""#);
///
/// assert_eq!(header.len(), 2);
/// assert_eq!(header.links()[1].attr("rel"), Some("up"));
///
/// assert!(parse(None).is_empty());
/// assert_eq!(parse("<http://example.com/>; rel=up, garbage").len(), 1);
/// ```
pub fn parse<'a>(input: impl Into<Option<&'a str>>) -> LinkHeader {
    let input = match input.into() {
        Some(input) => input,
        None => return LinkHeader::default(),
    };

    match try_parse(input) {
        Ok(header) => header,
        Err(err) => {
            warn!(error = %err, "link header grammar failed, returning no links");
            LinkHeader::default()
        }
    }
}

/// Parses a `Link` header value, surfacing failures of the grammar itself.
///
/// Malformed input is not a failure, see `parse`.
pub fn try_parse(input: &str) -> Result<LinkHeader> {
    let pair = Rfc8288Parser::parse(Rule::header, input)?
        .next()
        .ok_or(ParserError::MissingRule(Rule::header))?;

    let consumed = pair.as_span().end();
    if consumed < input.len() {
        debug!(
            consumed,
            ignored = input.len() - consumed,
            "ignoring unparsed trailing link header input"
        );
    }

    LinkHeader::from_rule(pair)
}

impl LinkHeader {
    pub fn from_rule(pair: Pair<Rule>) -> Result<LinkHeader> {
        ensure!(
            pair.as_rule() == Rule::header,
            ParserError::InvalidRule(Rule::header, pair.as_rule())
        );

        let mut links = vec![];

        for inner_pair in pair.into_inner() {
            let link = Link::from_rule(inner_pair)?;
            trace!(href = link.href(), attrs = link.attr_pairs().len(), "parsed link");
            links.push(link);
        }

        Ok(LinkHeader::from(links))
    }
}

impl Link {
    pub fn from_rule(pair: Pair<Rule>) -> Result<Link> {
        ensure!(
            pair.as_rule() == Rule::link,
            ParserError::InvalidRule(Rule::link, pair.as_rule())
        );

        let mut inner = pair.into_inner();

        let target = inner.next().ok_or(ParserError::MissingRule(Rule::href))?;
        ensure!(
            target.as_rule() == Rule::href,
            ParserError::InvalidRule(Rule::href, target.as_rule())
        );

        let attr_pairs = inner.map(attr_from_rule).collect::<Result<Vec<_>>>()?;

        Ok(Link::new(target.as_str(), attr_pairs))
    }
}

fn attr_from_rule(pair: Pair<Rule>) -> Result<AttrPair> {
    ensure!(
        pair.as_rule() == Rule::attr,
        ParserError::InvalidRule(Rule::attr, pair.as_rule())
    );

    let mut name = String::new();
    let mut value = None;

    for inner_pair in pair.into_inner() {
        match inner_pair.as_rule() {
            Rule::name => name.push_str(inner_pair.as_str()),

            Rule::token_value => value = Some(inner_pair.as_str().to_string()),

            Rule::quoted_value => {
                let text = inner_pair
                    .into_inner()
                    .next()
                    .ok_or(ParserError::MissingRule(Rule::quoted_text))?;
                value = Some(unescape(text.as_str()).into_owned());
            }

            rule => return Err(ParserError::InvalidRule(Rule::attr, rule).into()),
        }
    }

    let value = value.ok_or(ParserError::MissingRule(Rule::token_value))?;

    Ok((name, value))
}
