//! The CPE 2.3 formatted string binding:
//! `cpe:2.3:part:vendor:product:version:update:edition:language:sw_edition:target_sw:target_hw:other`.
//!
//! Every one of the 11 fields is present: a quoted string, the bare `*`
//! (ANY) or the bare `-` (NA). Colons inside values are backslash-quoted,
//! so the field split is escape-aware.

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
        .strip_prefix("cpe:2.3:")
        .ok_or_else(|| Error::malformed("missing `cpe:2.3:` prefix"))?;

    let fields = grammar::split_escaped(rest, ':');
    if fields.len() != Attribute::ALL.len() {
        return Err(Error::malformed("wrong number of components"));
    }

    let mut components: [Component; 11] = Default::default();
    for (attr, field) in Attribute::ALL.into_iter().zip(&fields) {
        components[attr.index()] = match field.as_str() {
            "*" => Component::Any,
            "-" => Component::NotApplicable,
            _ => Component::Value(grammar::normalize_value(field, attr.as_str())?),
        };
    }

    grammar::validate_part(&components[Attribute::Part.index()])?;
    Ok(CpeName::from_parts(Naming::FormattedString, components))
}

pub(crate) fn render(components: &[Component; 11]) -> String {
    let fields: Vec<String> = Attribute::ALL
        .into_iter()
        .map(|attr| encode_field(&components[attr.index()]))
        .collect();
    format!("cpe:2.3:{}", fields.join(":"))
}

fn encode_field(component: &Component) -> String {
    match component {
        Component::Any | Component::Undefined => "*".to_owned(),
        Component::NotApplicable => "-".to_owned(),
        Component::Value(v) => v.clone(),
        Component::OrList(vs) => vs.join("\\!"),
        Component::NotValue(v) => format!("\\~{v}"),
    }
}
