use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;
use url::Url;

/// Link header related errors
#[derive(Debug, Error, PartialEq)]
pub enum LinkHeaderError {
    #[error("Empty Link header")]
    Empty,

    #[error("Malformed link value: {0}")]
    MalformedLink(String),

    #[error("Link without rel parameter: {0}")]
    MissingRel(String),

    #[error("Invalid link target URL: {0}")]
    InvalidTarget(String),

    #[error("Link target has no page parameter: {0}")]
    MissingPageParameter(String),

    #[error("Invalid page number '{value}' in {target}")]
    InvalidPageNumber { value: String, target: String },
}

/// A single `<target>; rel="..."` entry of a Link header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Target URL as it appeared between the angle brackets
    pub target: String,

    /// Relation types, lower-cased
    pub relations: Vec<String>,
}

impl Link {
    pub fn has_relation(&self, relation: &str) -> bool {
        self.relations.iter().any(|r| r.eq_ignore_ascii_case(relation))
    }

    /// Value of the `page` query parameter of the target URL
    pub fn page_number(&self) -> Result<u32, LinkHeaderError> {
        let url = Url::parse(&self.target)
            .map_err(|_| LinkHeaderError::InvalidTarget(self.target.clone()))?;

        let value = url
            .query_pairs()
            .find(|(key, _)| key == "page")
            .map(|(_, value)| value.into_owned())
            .ok_or_else(|| LinkHeaderError::MissingPageParameter(self.target.clone()))?;

        match value.trim().parse::<u32>() {
            Ok(page) if page >= 1 => Ok(page),
            _ => Err(LinkHeaderError::InvalidPageNumber {
                value,
                target: self.target.clone(),
            }),
        }
    }
}

/// Parsed RFC 8288 `Link` response header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkHeader {
    links: Vec<Link>,
}

fn link_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^<(?P<target>[^>]*)>\s*(?P<params>(?:;.*)?)$")
            .expect("link pattern is a valid regex")
    })
}

impl LinkHeader {
    /// Parse the raw header value
    pub fn parse(value: &str) -> Result<Self, LinkHeaderError> {
        let mut links = Vec::new();

        for segment in split_link_values(value) {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }

            let captures = link_pattern()
                .captures(segment)
                .ok_or_else(|| LinkHeaderError::MalformedLink(segment.to_string()))?;

            let target = captures["target"].trim().to_string();
            let relations = parse_relations(&captures["params"]);
            if relations.is_empty() {
                return Err(LinkHeaderError::MissingRel(segment.to_string()));
            }

            links.push(Link { target, relations });
        }

        if links.is_empty() {
            return Err(LinkHeaderError::Empty);
        }

        Ok(Self { links })
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// First link carrying the given relation type
    pub fn find(&self, relation: &str) -> Option<&Link> {
        self.links.iter().find(|link| link.has_relation(relation))
    }

    pub fn has_relation(&self, relation: &str) -> bool {
        self.find(relation).is_some()
    }

    /// Page number advertised by the `last` relation, if present
    pub fn last_page(&self) -> Option<Result<u32, LinkHeaderError>> {
        self.find("last").map(Link::page_number)
    }
}

/// Split on commas that sit outside `<...>` and quoted strings
fn split_link_values(value: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut in_target = false;
    let mut in_quotes = false;
    let mut start = 0;

    for (idx, ch) in value.char_indices() {
        match ch {
            '<' if !in_quotes => in_target = true,
            '>' if !in_quotes => in_target = false,
            '"' if !in_target => in_quotes = !in_quotes,
            ',' if !in_target && !in_quotes => {
                segments.push(&value[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    segments.push(&value[start..]);
    segments
}

fn parse_relations(params: &str) -> Vec<String> {
    params
        .split(';')
        .filter_map(|param| {
            let (key, value) = param.split_once('=')?;
            if key.trim().eq_ignore_ascii_case("rel") {
                Some(value.trim().trim_matches('"').to_string())
            } else {
                None
            }
        })
        .flat_map(|value| {
            value
                .split_whitespace()
                .map(|rel| rel.to_ascii_lowercase())
                .collect::<Vec<_>>()
        })
        .collect()
}
