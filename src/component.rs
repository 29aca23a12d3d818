use std::fmt;

/// The value of a single CPE attribute.
///
/// Exactly one case holds per attribute per name. `Value` carries the
/// canonical form of a concrete string: lowercase, `[a-z0-9._-]` literal,
/// every other punctuation character backslash-quoted, and unquoted `*`/`?`
/// only at the wildcard positions the grammar allows.
///
/// `OrList` and `NotValue` exist for CPE 1.1 only, where a component may be
/// an OR-list (`v1!v2`) or a negation (`~v`) of concrete values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Component {
    /// The logical "match anything" value (WFN `ANY`, URI empty, FS `*`).
    Any,
    /// The logical "attribute does not apply" value (WFN `NA`, URI/FS `-`).
    NotApplicable,
    /// The attribute is absent from the source binding. Collapses to [`Component::Any`]
    /// everywhere except the URI trailing-component trimming rules.
    #[default]
    Undefined,
    /// A concrete value in canonical form.
    Value(String),
    /// CPE 1.1 OR-list of concrete values.
    OrList(Vec<String>),
    /// CPE 1.1 negated value.
    NotValue(String),
}

impl Component {
    pub fn is_any(&self) -> bool {
        matches!(self, Component::Any)
    }

    pub fn is_na(&self) -> bool {
        matches!(self, Component::NotApplicable)
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Component::Undefined)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Component::Value(_))
    }

    /// True for the cases that match anything: `Any` and `Undefined`.
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Component::Any | Component::Undefined)
    }

    /// Structural equality with `Undefined == Any` folding.
    ///
    /// This is the equality used when two names from different bindings are
    /// compared attribute-wise: an attribute left out of a URI and an
    /// explicit WFN `ANY` denote the same thing.
    pub fn equivalent(&self, other: &Component) -> bool {
        match (self, other) {
            (a, b) if a.is_wildcard() && b.is_wildcard() => true,
            (a, b) => a == b,
        }
    }

    /// Legacy containment primitive used by 1.1/2.2 set matching.
    ///
    /// `self` is the component of a known instance in the set, `candidate`
    /// the component of the name being matched. Asymmetric: an unspecified
    /// candidate component matches every known instance, and a known
    /// wildcard contains every candidate.
    pub fn contains(&self, candidate: &Component) -> bool {
        use Component::*;
        match (self, candidate) {
            (_, Any | Undefined) => true,
            (Any | Undefined, _) => true,
            (NotApplicable, NotApplicable) => true,
            (NotApplicable, _) | (_, NotApplicable) => false,
            (Value(known), Value(cand)) => known == cand,
            (Value(known), OrList(cands)) => cands.iter().all(|c| c == known),
            (Value(_), NotValue(_)) => false,
            (OrList(knowns), Value(cand)) => knowns.contains(cand),
            (OrList(knowns), OrList(cands)) => cands.iter().all(|c| knowns.contains(c)),
            (OrList(_), NotValue(_)) => false,
            (NotValue(known), Value(cand)) => known != cand,
            (NotValue(known), OrList(cands)) => cands.iter().all(|c| c != known),
            (NotValue(known), NotValue(cand)) => known == cand,
        }
    }

    /// The canonical string form, for concrete values only.
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Component::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Component::Any | Component::Undefined => write!(f, "ANY"),
            Component::NotApplicable => write!(f, "NA"),
            Component::Value(v) => write!(f, "{v}"),
            Component::OrList(vs) => write!(f, "{}", vs.join("!")),
            Component::NotValue(v) => write!(f, "~{v}"),
        }
    }
}
