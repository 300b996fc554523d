//! Low-level nom parser functions for CSS declaration text.
//!
//! Catalog entries may give their base styles either as a property map or as
//! inline declaration text; both end up in a [`StyleMap`](crate::StyleMap).

use nom::branch::alt;
use nom::bytes::complete::{tag, take_while1};
use nom::character::complete::{char, multispace0};
use nom::combinator::{all_consuming, opt, recognize, value};
use nom::error::{Error as NomError, ErrorKind};
use nom::multi::{many1, separated_list0};
use nom::sequence::{delimited, pair, separated_pair};
use nom::{IResult, Parser};
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

// --- Helper Parsers ---

fn ws<'a, O, F>(inner: F) -> impl Parser<&'a str, Output = O, Error = NomError<&'a str>>
where
    F: Parser<&'a str, Output = O, Error = NomError<&'a str>>,
{
    delimited(multispace0, inner, multispace0)
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn property_name(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(pair(tag("--"), take_while1(is_name_char))),
        take_while1(is_name_char),
    ))
    .parse(input)
}

/// Consumes a value up to the next top-level `;`. Semicolons inside quotes or
/// parentheses (`url("data:image/png;base64,...")`) do not terminate the value.
fn property_value(input: &str) -> IResult<&str, &str> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut end = input.len();
    for (idx, c) in input.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, ';') if depth == 0 => {
                end = idx;
                break;
            }
            _ => {}
        }
    }
    let value = input[..end].trim();
    if value.is_empty() {
        return Err(nom::Err::Error(NomError::new(input, ErrorKind::TakeWhile1)));
    }
    Ok((&input[end..], value))
}

fn declaration(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(ws(property_name), char(':'), property_value).parse(input)
}

fn separator(input: &str) -> IResult<&str, ()> {
    value((), many1(ws(char(';')))).parse(input)
}

fn declarations(input: &str) -> IResult<&str, Vec<(&str, &str)>> {
    delimited(
        (multispace0, opt(separator)),
        separated_list0(separator, declaration),
        (opt(separator), multispace0),
    )
    .parse(input)
}

/// Parses declaration text into `(property, value)` pairs with normalized names.
pub fn parse_declarations(input: &str) -> Result<Vec<(String, String)>, StyleParseError> {
    let (_, pairs) = all_consuming(declarations)
        .parse(input)
        .map_err(|e| StyleParseError::Parse(format!("{} in '{}'", e, input)))?;
    Ok(pairs
        .into_iter()
        .map(|(p, v)| (normalize_property_name(p), v.to_string()))
        .collect())
}

/// Converts camelCase script-style names (`boxShadow`, `WebkitBackdropFilter`)
/// to CSS names (`box-shadow`, `-webkit-backdrop-filter`). Custom properties
/// and names that are already kebab-case pass through unchanged.
pub fn normalize_property_name(name: &str) -> String {
    let name = name.trim();
    if name.starts_with("--") {
        return name.to_string();
    }
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
