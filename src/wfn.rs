//! The CPE 2.3 Well-Formed Name binding: `wfn:[part="a",vendor="mozilla",...]`.
//!
//! Only the 11 defined attribute names are legal, each at most once. String
//! values are double-quoted; the logical values are the bare `ANY` and `NA`
//! tokens. Unspecified attributes stay [`Component::Undefined`] until read
//! through the `ANY`-defaulting accessor.

use crate::{
    component::Component,
    grammar,
    name::{Attribute, CpeName, Naming},
    Error,
};

pub(crate) fn parse(text: &str) -> Result<CpeName, Error> {
    let body = text
        .strip_prefix("wfn:[")
        .and_then(|t| t.strip_suffix(']'))
        .ok_or_else(|| Error::malformed("missing `wfn:[...]` frame"))?;

    let mut components: [Component; 11] = Default::default();
    let mut seen = [false; 11];

    if !body.is_empty() {
        for pair in split_pairs(body)? {
            // a single space after the separating comma is tolerated
            let pair = pair.strip_prefix(' ').unwrap_or(&pair);
            grammar::reject_whitespace(pair)?;
            let (attr_name, value) = pair
                .split_once('=')
                .ok_or_else(|| Error::malformed("expected `attribute=value` pair"))?;
            let attr: Attribute = attr_name
                .parse()
                .map_err(|_| Error::malformed(format!("invalid attribute name `{attr_name}`")))?;
            if seen[attr.index()] {
                return Err(Error::malformed(format!("duplicate attribute `{attr}`")));
            }
            seen[attr.index()] = true;
            components[attr.index()] = parse_value(value, attr)?;
        }
    }

    grammar::validate_part(&components[Attribute::Part.index()])?;
    Ok(CpeName::from_parts(Naming::Wfn, components))
}

fn parse_value(value: &str, attr: Attribute) -> Result<Component, Error> {
    match value {
        "ANY" => Ok(Component::Any),
        "NA" => Ok(Component::NotApplicable),
        _ => {
            let inner = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .ok_or_else(|| {
                    Error::malformed(format!(
                        "expected a quoted string or ANY/NA for attribute {attr}"
                    ))
                })?;
            Ok(Component::Value(grammar::normalize_value(
                inner,
                attr.as_str(),
            )?))
        }
    }
}

/// Splits the WFN body on commas outside quoted values.
fn split_pairs(body: &str) -> Result<Vec<String>, Error> {
    let mut pairs = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                current.push('\\');
                if let Some(quoted) = chars.next() {
                    current.push(quoted);
                }
            }
            '"' => {
                in_quotes = !in_quotes;
                current.push('"');
            }
            ',' if !in_quotes => pairs.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    if in_quotes {
        return Err(Error::malformed("unterminated quoted value"));
    }
    pairs.push(current);
    if pairs.iter().any(|p| p.is_empty()) {
        return Err(Error::malformed("empty attribute-value pair"));
    }
    Ok(pairs)
}

pub(crate) fn render(components: &[Component; 11]) -> String {
    let mut out = String::from("wfn:[");
    let mut first = true;
    for attr in Attribute::ALL {
        let component = &components[attr.index()];
        if component.is_undefined() {
            continue;
        }
        if !first {
            out.push(',');
        }
        first = false;
        out.push_str(attr.as_str());
        out.push('=');
        match component {
            Component::Any => out.push_str("ANY"),
            Component::NotApplicable => out.push_str("NA"),
            other => {
                out.push('"');
                out.push_str(&render_value(other));
                out.push('"');
            }
        }
    }
    out.push(']');
    out
}

fn render_value(component: &Component) -> String {
    match component {
        Component::Value(v) => v.clone(),
        Component::OrList(vs) => vs.join("\\!"),
        Component::NotValue(v) => format!("\\~{v}"),
        // logical values are rendered by the caller
        _ => String::new(),
    }
}
