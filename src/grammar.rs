//! Shared lexical layer for the binding codecs: the canonical value grammar,
//! escaping and percent-encoding, and wildcard legality.
//!
//! The canonical form of a concrete attribute value is the CPE 2.3 formatted
//! string value syntax, lowercased: letters, digits, `.`, `-` and `_` appear
//! literally, every other punctuation character is backslash-quoted, and
//! unquoted wildcards are only legal as a leading/trailing `*` or a
//! leading/trailing run of `?`.

use crate::{component::Component, Error};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CANONICAL_VALUE: Regex = Regex::new(
        r##"^(?:\*|\?+)?(?:[a-z0-9._-]|\\[\\*?!"#$%&'()+,/:;<=>@\[\]^`{|}~])+(?:\*|\?+)?$"##
    )
    .expect("canonical value pattern");
}

/// One lexical unit of a canonical attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token {
    /// An unquoted literal character.
    Literal(char),
    /// A backslash-quoted character, kept quoted in canonical form.
    Quoted(char),
    /// Unquoted `*`: zero or more characters.
    MultiWild,
    /// Unquoted `?`: at most one character.
    OneWild,
}

impl Token {
    /// The character this token stands for, ignoring quoting.
    pub(crate) fn decoded(self) -> char {
        match self {
            Token::Literal(c) | Token::Quoted(c) => c,
            Token::MultiWild => '*',
            Token::OneWild => '?',
        }
    }

    pub(crate) fn is_wildcard(self) -> bool {
        matches!(self, Token::MultiWild | Token::OneWild)
    }
}

/// Splits a value into tokens, resolving backslash quoting.
///
/// Consecutive backslashes pair up left to right, so a quoted wildcard is
/// never mistaken for an active one.
pub(crate) fn tokenize(value: &str) -> Result<Vec<Token>, Error> {
    let mut tokens = Vec::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(quoted) => tokens.push(Token::Quoted(quoted)),
                None => return Err(Error::malformed("trailing escape character")),
            },
            '*' => tokens.push(Token::MultiWild),
            '?' => tokens.push(Token::OneWild),
            _ => tokens.push(Token::Literal(c)),
        }
    }
    Ok(tokens)
}

/// Validates a canonical value, distinguishing misplaced wildcards from
/// plain illegal characters in the reported reason.
pub(crate) fn validate_canonical(value: &str, attr: &str) -> Result<(), Error> {
    if CANONICAL_VALUE.is_match(value) {
        return Ok(());
    }
    match tokenize(value) {
        Ok(tokens) if tokens.iter().any(|t| t.is_wildcard()) => Err(Error::malformed(format!(
            "misplaced wildcard in attribute {attr}"
        ))),
        _ => Err(Error::malformed(format!(
            "invalid character in attribute {attr}"
        ))),
    }
}

/// Lowercases a WFN/FS value and reduces it to canonical form: quoting of
/// `.`, `-` and `_` is dropped, everything else is validated as-is.
pub(crate) fn normalize_value(raw: &str, attr: &str) -> Result<String, Error> {
    let lowered = raw.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    for token in tokenize(&lowered)? {
        match token {
            Token::Quoted(c) if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') => {
                out.push(c)
            }
            Token::Quoted(c) => {
                out.push('\\');
                out.push(c);
            }
            Token::Literal(c) => out.push(c),
            Token::MultiWild => out.push('*'),
            Token::OneWild => out.push('?'),
        }
    }
    validate_canonical(&out, attr)?;
    Ok(out)
}

/// Percent encoding of a single punctuation character, as a pure function.
pub(crate) fn percent_encode(c: char) -> Option<&'static str> {
    Some(match c {
        '!' => "%21",
        '"' => "%22",
        '#' => "%23",
        '$' => "%24",
        '%' => "%25",
        '&' => "%26",
        '\'' => "%27",
        '(' => "%28",
        ')' => "%29",
        '*' => "%2a",
        '+' => "%2b",
        ',' => "%2c",
        '/' => "%2f",
        ':' => "%3a",
        ';' => "%3b",
        '<' => "%3c",
        '=' => "%3d",
        '>' => "%3e",
        '?' => "%3f",
        '@' => "%40",
        '[' => "%5b",
        '\\' => "%5c",
        ']' => "%5d",
        '^' => "%5e",
        '`' => "%60",
        '{' => "%7b",
        '|' => "%7c",
        '}' => "%7d",
        '~' => "%7e",
        _ => return None,
    })
}

/// Inverse of [`percent_encode`], plus the unreserved escapes some producers
/// emit (`%2d`, `%2e`, `%5f`). `%01`/`%02` are wildcard markers and are
/// handled by the caller.
pub(crate) fn percent_decode(hex: &str) -> Option<char> {
    Some(match hex {
        "21" => '!',
        "22" => '"',
        "23" => '#',
        "24" => '$',
        "25" => '%',
        "26" => '&',
        "27" => '\'',
        "28" => '(',
        "29" => ')',
        "2a" => '*',
        "2b" => '+',
        "2c" => ',',
        "2d" => '-',
        "2e" => '.',
        "2f" => '/',
        "3a" => ':',
        "3b" => ';',
        "3c" => '<',
        "3d" => '=',
        "3e" => '>',
        "3f" => '?',
        "40" => '@',
        "5b" => '[',
        "5c" => '\\',
        "5d" => ']',
        "5e" => '^',
        "5f" => '_',
        "60" => '`',
        "7b" => '{',
        "7c" => '|',
        "7d" => '}',
        "7e" => '~',
        _ => return None,
    })
}

fn is_uri_unreserved(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '-' | '_')
}

/// Decodes the characters of one URI-bound component into canonical form.
///
/// The input is already lowercased. `%01` and `%02` decode to the one-char
/// and multi-char wildcards when the binding allows them (CPE 1.1 does not).
pub(crate) fn decode_uri_chars(
    field: &str,
    attr: &str,
    allow_wildcards: bool,
) -> Result<String, Error> {
    let mut out = String::with_capacity(field.len());
    let mut chars = field.chars();
    while let Some(c) = chars.next() {
        match c {
            '%' => {
                let hex: String = chars.by_ref().take(2).collect();
                match hex.as_str() {
                    "01" if allow_wildcards => out.push('?'),
                    "02" if allow_wildcards => out.push('*'),
                    _ => match percent_decode(&hex) {
                        Some(decoded) if is_uri_unreserved(decoded) => out.push(decoded),
                        Some(decoded) => {
                            out.push('\\');
                            out.push(decoded);
                        }
                        None => {
                            return Err(Error::malformed(format!(
                                "bad percent-encoding `%{hex}` in attribute {attr}"
                            )))
                        }
                    },
                }
            }
            c if is_uri_unreserved(c) => out.push(c),
            _ => {
                return Err(Error::malformed(format!(
                    "invalid character in attribute {attr}"
                )))
            }
        }
    }
    validate_canonical(&out, attr)?;
    Ok(out)
}

/// Encodes a canonical value for the URI binding.
pub(crate) fn encode_uri_chars(canonical: &str) -> String {
    let mut out = String::with_capacity(canonical.len());
    let mut chars = canonical.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if let Some(quoted) = chars.next() {
                    match percent_encode(quoted) {
                        Some(encoded) => out.push_str(encoded),
                        None => out.push(quoted),
                    }
                }
            }
            '*' => out.push_str("%02"),
            '?' => out.push_str("%01"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders a component for a URI field. OR-lists and negations (CPE 1.1
/// conversions) are rendered with their operators percent-encoded, so the
/// result reparses as a plain quoted value rather than tripping the
/// packed-edition detection; the operator semantics do not survive the
/// round trip. The logical values follow the URI conventions.
pub(crate) fn encode_uri_component(component: &Component) -> String {
    match component {
        Component::Any | Component::Undefined => String::new(),
        Component::NotApplicable => "-".to_owned(),
        Component::Value(v) => encode_uri_chars(v),
        Component::OrList(vs) => vs
            .iter()
            .map(|v| encode_uri_chars(v))
            .collect::<Vec<_>>()
            .join("%21"),
        Component::NotValue(v) => format!("%7e{}", encode_uri_chars(v)),
    }
}

/// Splits on `sep`, honoring backslash escapes (a `\:` inside a formatted
/// string field is not a separator).
pub(crate) fn split_escaped(text: &str, sep: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                current.push('\\');
                if let Some(quoted) = chars.next() {
                    current.push(quoted);
                }
            }
            c if c == sep => fields.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    fields.push(current);
    fields
}

/// The `part` attribute only admits the three system-type codes besides the
/// logical values.
pub(crate) fn validate_part(part: &Component) -> Result<(), Error> {
    match part {
        Component::Value(v) if !matches!(v.as_str(), "a" | "h" | "o") => Err(Error::malformed(
            format!("part must be one of `a`, `h`, `o`, found `{v}`"),
        )),
        _ => Ok(()),
    }
}

pub(crate) fn reject_whitespace(text: &str) -> Result<(), Error> {
    if text.chars().any(char::is_whitespace) {
        Err(Error::malformed("contains whitespace"))
    } else {
        Ok(())
    }
}
