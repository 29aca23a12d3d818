//! The URI binding shared by CPE 2.2 and the CPE 2.3 URI form:
//! `cpe:/part:vendor:product:version:update:edition:language`.
//!
//! Trailing empty components are trimmed at parse time and read as
//! [`Component::Undefined`]; components left blank before the last
//! specified one read as [`Component::Any`]. An edition field starting with
//! `~` is packed: it unpacks into `edition` plus the four extended
//! attributes, and is re-packed on render when any of those is defined.

use crate::{
    component::Component,
    grammar,
    name::{Attribute, CpeName, Naming},
    Error,
};
use log::debug;

pub(crate) fn parse(text: &str, naming: Naming) -> Result<CpeName, Error> {
    grammar::reject_whitespace(text)?;
    let lowered = text.to_lowercase();
    let rest = lowered
        .strip_prefix("cpe:/")
        .ok_or_else(|| Error::malformed("missing `cpe:/` prefix"))?;
    if rest.contains('/') {
        return Err(Error::malformed(
            "`/` part separators belong to the 1.1 binding",
        ));
    }

    let mut fields: Vec<&str> = if rest.is_empty() {
        Vec::new()
    } else {
        rest.split(':').collect()
    };
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    if fields.len() > Attribute::LEGACY.len() {
        return Err(Error::malformed("wrong number of components"));
    }

    let mut components: [Component; 11] = Default::default();
    for (attr, field) in Attribute::LEGACY.into_iter().zip(&fields) {
        if attr == Attribute::Edition && field.starts_with('~') {
            unpack_edition(field, &mut components)?;
        } else {
            components[attr.index()] = decode_field(field, attr)?;
        }
    }

    grammar::validate_part(&components[Attribute::Part.index()])?;
    Ok(CpeName::from_parts(naming, components))
}

fn decode_field(field: &str, attr: Attribute) -> Result<Component, Error> {
    match field {
        "" => Ok(Component::Any),
        "-" => Ok(Component::NotApplicable),
        _ => Ok(Component::Value(grammar::decode_uri_chars(
            field,
            attr.as_str(),
            true,
        )?)),
    }
}

/// A packed edition holds five tilde-separated sub-values: edition,
/// sw_edition, target_sw, target_hw, other.
fn unpack_edition(field: &str, components: &mut [Component; 11]) -> Result<(), Error> {
    let parts: Vec<&str> = field.split('~').collect();
    if parts.len() != 6 || !parts[0].is_empty() {
        return Err(Error::malformed(format!("invalid packed edition `{field}`")));
    }
    debug!("unpacking edition `{field}`");
    components[Attribute::Edition.index()] = decode_field(parts[1], Attribute::Edition)?;
    for (attr, part) in Attribute::EXTENDED.into_iter().zip(&parts[2..]) {
        components[attr.index()] = decode_field(part, attr)?;
    }
    Ok(())
}

pub(crate) fn render(components: &[Component; 11]) -> String {
    let pack = should_pack(components);
    let mut fields: Vec<String> = Vec::with_capacity(Attribute::LEGACY.len());
    for attr in Attribute::LEGACY {
        if attr == Attribute::Edition && pack {
            fields.push(pack_edition(components));
        } else {
            fields.push(grammar::encode_uri_component(&components[attr.index()]));
        }
    }
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    format!("cpe:/{}", fields.join(":"))
}

/// The edition field is packed only when at least one of the four extended
/// attributes carries something other than a wildcard.
fn should_pack(components: &[Component; 11]) -> bool {
    Attribute::EXTENDED
        .iter()
        .any(|attr| !components[attr.index()].is_wildcard())
}

fn pack_edition(components: &[Component; 11]) -> String {
    let mut out = String::from("~");
    out.push_str(&grammar::encode_uri_component(
        &components[Attribute::Edition.index()],
    ));
    for attr in Attribute::EXTENDED {
        out.push('~');
        out.push_str(&grammar::encode_uri_component(&components[attr.index()]));
    }
    out
}
