use crate::{builder::WfnBuilder, component::Component, fs, uri, v11, wfn, Error};
use log::debug;
use std::{fmt, str::FromStr};

/// The 11 attribute keys of a CPE name, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Attribute {
    Part,
    Vendor,
    Product,
    Version,
    Update,
    Edition,
    Language,
    SwEdition,
    TargetSw,
    TargetHw,
    Other,
}

impl Attribute {
    pub const ALL: [Attribute; 11] = [
        Attribute::Part,
        Attribute::Vendor,
        Attribute::Product,
        Attribute::Version,
        Attribute::Update,
        Attribute::Edition,
        Attribute::Language,
        Attribute::SwEdition,
        Attribute::TargetSw,
        Attribute::TargetHw,
        Attribute::Other,
    ];

    /// The seven attributes legacy bindings (1.1, 2.2) can express.
    pub const LEGACY: [Attribute; 7] = [
        Attribute::Part,
        Attribute::Vendor,
        Attribute::Product,
        Attribute::Version,
        Attribute::Update,
        Attribute::Edition,
        Attribute::Language,
    ];

    /// The four attributes a packed URI edition unpacks into, besides
    /// `edition` itself.
    pub(crate) const EXTENDED: [Attribute; 4] = [
        Attribute::SwEdition,
        Attribute::TargetSw,
        Attribute::TargetHw,
        Attribute::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Attribute::Part => "part",
            Attribute::Vendor => "vendor",
            Attribute::Product => "product",
            Attribute::Version => "version",
            Attribute::Update => "update",
            Attribute::Edition => "edition",
            Attribute::Language => "language",
            Attribute::SwEdition => "sw_edition",
            Attribute::TargetSw => "target_sw",
            Attribute::TargetHw => "target_hw",
            Attribute::Other => "other",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = Error;

    fn from_str(val: &str) -> Result<Self, Self::Err> {
        Attribute::ALL
            .into_iter()
            .find(|attr| attr.as_str() == val)
            .ok_or_else(|| Error::UnknownAttribute(val.to_owned()))
    }
}

/// Specification version of a CPE name or set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CpeVersion {
    V11,
    V22,
    V23,
}

impl fmt::Display for CpeVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CpeVersion::V11 => write!(f, "1.1"),
            CpeVersion::V22 => write!(f, "2.2"),
            CpeVersion::V23 => write!(f, "2.3"),
        }
    }
}

/// The binding a name was read from or is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Naming {
    /// CPE 1.1 URI (`cpe:/{hw}/{os}/{app}`).
    Uri11,
    /// CPE 2.2 URI (`cpe:/part:vendor:...`).
    Uri22,
    /// CPE 2.3 URI binding (same syntax as 2.2, packed editions unpacked).
    Uri23,
    /// CPE 2.3 Well-Formed Name (`wfn:[...]`).
    Wfn,
    /// CPE 2.3 formatted string (`cpe:2.3:...`).
    FormattedString,
}

impl Naming {
    pub fn version(self) -> CpeVersion {
        match self {
            Naming::Uri11 => CpeVersion::V11,
            Naming::Uri22 => CpeVersion::V22,
            Naming::Uri23 | Naming::Wfn | Naming::FormattedString => CpeVersion::V23,
        }
    }
}

/// One platform identifier: an immutable, ordered mapping of the 11
/// attribute keys to [`Component`] values.
///
/// A name is constructed once, from a validated raw string or a builder,
/// and is read-only thereafter. Conversions between bindings produce new
/// names; nothing is ever mutated in place.
#[derive(Debug, Clone)]
pub struct CpeName {
    naming: Naming,
    raw: String,
    components: [Component; 11],
}

impl CpeName {
    pub(crate) fn from_parts(naming: Naming, components: [Component; 11]) -> Self {
        let raw = render(naming, &components);
        Self {
            naming,
            raw,
            components,
        }
    }

    /// Parses an identifier of unknown binding.
    ///
    /// Tries the formatted string, 2.3 URI, WFN and 1.1 parsers in that
    /// order; the first success wins. 2.2 is never auto-detected because
    /// its syntax is a subset of the 2.3 URI binding; use
    /// [`CpeName::parse_uri_22`] for 2.2 semantics.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let fs_err = match fs::parse(text) {
            Ok(name) => return Ok(name),
            Err(e) => e,
        };
        let uri_err = match uri::parse(text, Naming::Uri23) {
            Ok(name) => return Ok(name),
            Err(e) => e,
        };
        let wfn_err = match wfn::parse(text) {
            Ok(name) => return Ok(name),
            Err(e) => e,
        };
        let v11_err = match v11::parse(text) {
            Ok(name) => return Ok(name),
            Err(e) => e,
        };
        debug!("no binding accepted `{text}`");
        Err(Error::malformed(format!(
            "no binding accepted the identifier (fs: {fs_err}; uri: {uri_err}; wfn: {wfn_err}; 1.1: {v11_err})"
        )))
    }

    /// Parses a CPE 2.3 Well-Formed Name.
    pub fn parse_wfn(text: &str) -> Result<Self, Error> {
        wfn::parse(text)
    }

    /// Parses a CPE 2.3 URI, unpacking a `~`-packed edition.
    pub fn parse_uri(text: &str) -> Result<Self, Error> {
        uri::parse(text, Naming::Uri23)
    }

    /// Parses a CPE 2.2 URI. Same syntax as the 2.3 URI binding, but the
    /// resulting name carries version 2.2 and matches under the legacy
    /// containment rules.
    pub fn parse_uri_22(text: &str) -> Result<Self, Error> {
        uri::parse(text, Naming::Uri22)
    }

    /// Parses a CPE 2.3 formatted string.
    pub fn parse_formatted_string(text: &str) -> Result<Self, Error> {
        fs::parse(text)
    }

    /// Parses a CPE 1.1 identifier.
    pub fn parse_v11(text: &str) -> Result<Self, Error> {
        v11::parse(text)
    }

    /// Starts building a WFN-bound name programmatically.
    pub fn builder() -> WfnBuilder {
        WfnBuilder::default()
    }

    /// The canonical rendering of this name in its own binding. Equal to
    /// the case-folded source string for inputs without redundant trailing
    /// separators.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn naming(&self) -> Naming {
        self.naming
    }

    pub fn version(&self) -> CpeVersion {
        self.naming.version()
    }

    /// Looks an attribute up by name. Unspecified attributes read as `ANY`.
    pub fn attribute(&self, name: &str) -> Result<Component, Error> {
        let attr: Attribute = name.parse()?;
        Ok(self.get(attr))
    }

    /// The value of `attr`, with the `ANY` default for unspecified
    /// attributes.
    pub fn get(&self, attr: Attribute) -> Component {
        match &self.components[attr.index()] {
            Component::Undefined => Component::Any,
            defined => defined.clone(),
        }
    }

    /// The stored component, keeping `Undefined` distinct from `Any`.
    pub fn component(&self, attr: Attribute) -> &Component {
        &self.components[attr.index()]
    }

    /// Number of defined (non-undefined) components. A 1.1 OR-list or
    /// negation counts as one.
    pub fn component_count(&self) -> usize {
        self.components
            .iter()
            .filter(|c| !c.is_undefined())
            .count()
    }

    /// True when `part` is `h`, or carries no part designator at all: the
    /// absence of a part matches every system type.
    pub fn is_hardware(&self) -> bool {
        self.has_part("h")
    }

    pub fn is_operating_system(&self) -> bool {
        self.has_part("o")
    }

    pub fn is_application(&self) -> bool {
        self.has_part("a")
    }

    fn has_part(&self, code: &str) -> bool {
        match self.component(Attribute::Part) {
            Component::Value(v) => v == code,
            Component::NotApplicable => false,
            Component::Any | Component::Undefined => true,
            Component::OrList(vs) => vs.iter().any(|v| v == code),
            Component::NotValue(v) => v != code,
        }
    }

    /// Renders this name as a Well-Formed Name.
    pub fn as_wfn(&self) -> String {
        wfn::render(&self.components)
    }

    /// Renders this name in the URI binding, re-packing the extended
    /// attributes into the edition field when any of them is defined.
    pub fn as_uri(&self) -> String {
        uri::render(&self.components)
    }

    /// Renders this name as a CPE 2.3 formatted string.
    pub fn as_formatted_string(&self) -> String {
        fs::render(&self.components)
    }

    /// Renders this name in the CPE 1.1 binding. Wildcard components
    /// render as absent; the conversion is total but lossy for 2.3-only
    /// constructs.
    pub fn as_v11(&self) -> String {
        v11::render(&self.components)
    }

    /// A copy of this name re-bound as a WFN. Used when a 2.3 set coerces
    /// entries on insertion.
    pub fn to_wfn(&self) -> CpeName {
        CpeName::from_parts(Naming::Wfn, self.components.clone())
    }
}

fn render(naming: Naming, components: &[Component; 11]) -> String {
    match naming {
        Naming::Uri11 => v11::render(components),
        Naming::Uri22 | Naming::Uri23 => uri::render(components),
        Naming::Wfn => wfn::render(components),
        Naming::FormattedString => fs::render(components),
    }
}

impl fmt::Display for CpeName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for CpeName {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        CpeName::parse(text)
    }
}

impl TryFrom<&str> for CpeName {
    type Error = Error;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        CpeName::parse(text)
    }
}

/// Names from any two bindings are equal when all 11 canonical attributes
/// are equivalent, with `Undefined` collapsing to `Any`. This is how the
/// crate proves that a 1.1 form and a WFN denote the same platform.
impl PartialEq for CpeName {
    fn eq(&self, other: &Self) -> bool {
        Attribute::ALL
            .into_iter()
            .all(|attr| self.component(attr).equivalent(other.component(attr)))
    }
}

impl Eq for CpeName {}
