//! The CPE 1.1 binding: `cpe:/{hw}[/{os}[/{app}]]`.
//!
//! The part designator is positional: which slash-separated section an
//! element sits in decides between hardware, operating system and
//! application. Components within an element are positional too (vendor,
//! product, version, update, edition, language) and each may be a single
//! value, an OR-list (`v1!v2`) or a negation (`~v`); combining the two
//! operators in one component is malformed.

use crate::{
    component::Component,
    grammar,
    name::{Attribute, CpeName, Naming},
    Error,
};

pub(crate) fn parse(text: &str) -> Result<CpeName, Error> {
    grammar::reject_whitespace(text)?;
    let lowered = text.to_lowercase();
    let rest = lowered
        .strip_prefix("cpe:/")
        .ok_or_else(|| Error::malformed("missing `cpe:/` prefix"))?;

    let sections: Vec<&str> = rest.split('/').collect();
    if sections.len() > 3 {
        return Err(Error::malformed("wrong number of components"));
    }

    let mut components: [Component; 11] = Default::default();
    let occupied: Vec<(usize, &str)> = sections
        .iter()
        .enumerate()
        .filter(|(_, section)| !section.is_empty())
        .map(|(index, section)| (index, *section))
        .collect();
    match occupied[..] {
        [] => {}
        [(section, element)] => parse_element(section, element, &mut components)?,
        _ => {
            return Err(Error::malformed(
                "multiple platform parts in one identifier are not supported",
            ))
        }
    }

    Ok(CpeName::from_parts(Naming::Uri11, components))
}

fn parse_element(
    section: usize,
    element: &str,
    components: &mut [Component; 11],
) -> Result<(), Error> {
    if element.contains(';') {
        return Err(Error::malformed(
            "multiple elements in one part are not supported",
        ));
    }

    let code = match section {
        0 => "h",
        1 => "o",
        _ => "a",
    };
    components[Attribute::Part.index()] = Component::Value(code.to_owned());

    let mut fields: Vec<&str> = element.split(':').collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    // vendor through language, positionally
    if fields.len() > Attribute::LEGACY.len() - 1 {
        return Err(Error::malformed("wrong number of components"));
    }
    for (attr, field) in Attribute::LEGACY[1..].iter().zip(&fields) {
        components[attr.index()] = decode_component(field, *attr)?;
    }
    Ok(())
}

fn decode_component(raw: &str, attr: Attribute) -> Result<Component, Error> {
    if raw.is_empty() {
        return Ok(Component::Any);
    }
    let has_or = raw.contains('!');
    let has_not = raw.contains('~');
    if has_or && has_not {
        return Err(Error::malformed("operators '~' and '!' used together"));
    }
    if has_not {
        let value = match raw.strip_prefix('~') {
            Some(value) if !value.is_empty() && !value.contains('~') => value,
            _ => {
                return Err(Error::malformed(format!(
                    "operator '~' must prefix a single value in attribute {attr}"
                )))
            }
        };
        return Ok(Component::NotValue(decode_value(value, attr)?));
    }
    if has_or {
        let mut values = Vec::new();
        for alternative in raw.split('!') {
            if alternative.is_empty() {
                return Err(Error::malformed(format!(
                    "empty OR operand in attribute {attr}"
                )));
            }
            values.push(decode_value(alternative, attr)?);
        }
        return Ok(Component::OrList(values));
    }
    Ok(Component::Value(decode_value(raw, attr)?))
}

fn decode_value(raw: &str, attr: Attribute) -> Result<String, Error> {
    // 1.1 has no wildcard markers
    grammar::decode_uri_chars(raw, attr.as_str(), false)
}

pub(crate) fn render(components: &[Component; 11]) -> String {
    let mut fields: Vec<String> = Attribute::LEGACY[1..]
        .iter()
        .map(|attr| encode_component(&components[attr.index()]))
        .collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    let element = fields.join(":");

    let section = match &components[Attribute::Part.index()] {
        Component::Value(v) if v == "h" => 0,
        Component::Value(v) if v == "o" => 1,
        Component::Value(_) => 2,
        // no part designator at all; an empty element renders bare
        _ if element.is_empty() => return "cpe:/".to_owned(),
        _ => 2,
    };
    let mut sections = vec![String::new(); section + 1];
    sections[section] = element;
    format!("cpe:/{}", sections.join("/"))
}

fn encode_component(component: &Component) -> String {
    match component {
        // 1.1 has no logical values; wildcards and NA render as absent
        Component::Any | Component::Undefined | Component::NotApplicable => String::new(),
        Component::Value(v) => grammar::encode_uri_chars(v),
        Component::OrList(vs) => vs
            .iter()
            .map(|v| grammar::encode_uri_chars(v))
            .collect::<Vec<_>>()
            .join("!"),
        Component::NotValue(v) => format!("~{}", grammar::encode_uri_chars(v)),
    }
}
