use linkheader::{parse, Link, LinkHeader};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

const TOKEN_CHARS: &[char] = &[
    'a', 'b', 'c', 'r', 'e', 'l', 'Z', '0', '9', '-', '_', '.', '!', '#', '$', '%', '&', '\'',
    '*', '+', '^', '`', '|', '~',
];

const HREF_CHARS: &[char] = &[
    'h', 't', 'p', ':', '/', '.', 'x', '?', '=', '&', ';', ',', '"', '<', ' ', '\\', 'é', '🔗',
];

const VALUE_CHARS: &[char] = &[
    'a', 'b', ' ', '"', ';', ',', '=', '<', '>', ':', '\'', 'ü', '\t',
];

fn string_from(g: &mut Gen, chars: &[char], min: usize) -> String {
    let len = min + usize::arbitrary(g) % 8;

    (0..len)
        .map(|_| *g.choose(chars).expect("non-empty alphabet"))
        .collect()
}

/// A header built only from data the grammar can carry: tokens for names,
/// hrefs without `>` or leading spaces, values without backslashes.
#[derive(Clone, Debug)]
struct WellFormed(LinkHeader);

impl Arbitrary for WellFormed {
    fn arbitrary(g: &mut Gen) -> WellFormed {
        let links = usize::arbitrary(g) % 5;

        let header = (0..links)
            .map(|_| {
                let mut href = string_from(g, HREF_CHARS, 0);
                if href.starts_with(' ') {
                    href.insert(0, '/');
                }

                let attrs = usize::arbitrary(g) % 4;
                let attr_pairs: Vec<(String, String)> = (0..attrs)
                    .map(|_| (string_from(g, TOKEN_CHARS, 1), string_from(g, VALUE_CHARS, 0)))
                    .collect();

                Link::new(href, attr_pairs)
            })
            .collect();

        WellFormed(header)
    }
}

#[quickcheck]
fn format_then_parse(header: WellFormed) -> bool {
    let WellFormed(header) = header;

    parse(header.to_string().as_str()) == header
}

#[quickcheck]
fn plain_then_back(header: WellFormed) -> bool {
    let WellFormed(header) = header;

    LinkHeader::from_plain(header.to_plain()) == header
}

#[quickcheck]
fn parse_keeps_link_count(header: WellFormed) -> bool {
    let WellFormed(header) = header;

    parse(header.to_string().as_str()).len() == header.len()
}

#[quickcheck]
fn parse_never_panics(input: String) -> bool {
    let header = parse(input.as_str());

    header.len() <= input.matches('<').count()
}

#[cfg(feature = "json")]
#[quickcheck]
fn json_then_back(header: WellFormed) -> bool {
    let WellFormed(header) = header;
    let json = header.to_json().expect("serializable header");

    LinkHeader::from_json(&json).expect("readable json") == header
}
