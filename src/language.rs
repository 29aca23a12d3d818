//! Evaluation of CPE Language logical tests against a set of known names.
//!
//! The expression tree comes from the caller, pre-parsed from a CPE
//! Language XML document; this module only implements the logical-test
//! semantics. Evaluation is three-valued: besides true and false there is
//! an error sentinel for tests that cannot be evaluated (external check
//! systems such as OVAL or OCIL). The sentinel propagates through `AND`
//! and `OR` but is deliberately never inverted by `negate`.

use crate::{set::CpeSet, CpeName, CpeVersion, Error};
use log::{debug, warn};

/// The operator of a logical test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    And,
    Or,
}

/// One node of a pre-parsed CPE Language document.
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformNode {
    /// The document root.
    Document(Vec<PlatformNode>),
    /// A `platform-specification` container.
    PlatformSpecification(Vec<PlatformNode>),
    /// A `platform`, holding one logical test.
    Platform {
        id: Option<String>,
        children: Vec<PlatformNode>,
    },
    /// A `logical-test` combining its children.
    LogicalTest {
        operator: Operator,
        negate: bool,
        children: Vec<PlatformNode>,
    },
    /// A `fact-ref` leaf naming one CPE identifier.
    FactRef { name: String },
    /// A `check-fact-ref` leaf delegating to an external check system.
    CheckFactRef {
        system: String,
        href: Option<String>,
        id_ref: Option<String>,
    },
    /// Character data between elements.
    Text(String),
}

impl PlatformNode {
    fn is_text(&self) -> bool {
        matches!(self, PlatformNode::Text(_))
    }
}

/// The three-valued result of evaluating a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eval {
    True,
    False,
    /// The node is not evaluable (unsupported check system, undecodable
    /// fact-ref).
    Error,
}

impl Eval {
    fn invert(self) -> Eval {
        match self {
            Eval::True => Eval::False,
            Eval::False => Eval::True,
            Eval::Error => Eval::Error,
        }
    }
}

/// Evaluates a platform expression tree against a set of known names.
pub fn evaluate(node: &PlatformNode, set: &CpeSet) -> Eval {
    match node {
        PlatformNode::Document(children) | PlatformNode::PlatformSpecification(children) => {
            any_of(children, set)
        }
        PlatformNode::Platform { id, children } => {
            let result = children
                .iter()
                .find(|child| matches!(child, PlatformNode::LogicalTest { .. }))
                .map(|test| evaluate(test, set))
                .unwrap_or(Eval::False);
            debug!("platform {id:?} evaluated to {result:?}");
            result
        }
        PlatformNode::LogicalTest {
            operator,
            negate,
            children,
        } => {
            let results: Vec<Eval> = children
                .iter()
                .filter(|child| !child.is_text())
                .map(|child| evaluate(child, set))
                .collect();
            let combined = match operator {
                Operator::And => combine_and(&results),
                Operator::Or => combine_or(&results),
            };
            if *negate {
                combined.invert()
            } else {
                combined
            }
        }
        PlatformNode::FactRef { name } => match decode_fact_ref(name, set.version()) {
            Ok(decoded) => {
                if set.name_match(&decoded) {
                    Eval::True
                } else {
                    Eval::False
                }
            }
            Err(e) => {
                warn!("fact-ref `{name}` is not decodable: {e}");
                Eval::Error
            }
        },
        PlatformNode::CheckFactRef { system, .. } => {
            let err = Error::UnsupportedCheckSystem(system.clone());
            debug!("check-fact-ref is not evaluable: {err}");
            Eval::Error
        }
        PlatformNode::Text(_) => Eval::False,
    }
}

/// Convenience wrapper: true only when the expression definitely matches.
pub fn language_match(set: &CpeSet, root: &PlatformNode) -> bool {
    evaluate(root, set) == Eval::True
}

/// Containers with several platforms match when any platform matches.
fn any_of(children: &[PlatformNode], set: &CpeSet) -> Eval {
    let results: Vec<Eval> = children
        .iter()
        .filter(|child| !child.is_text())
        .map(|child| evaluate(child, set))
        .collect();
    combine_or(&results)
}

fn combine_and(results: &[Eval]) -> Eval {
    if results.iter().any(|r| *r == Eval::False) {
        Eval::False
    } else if results.iter().any(|r| *r == Eval::Error) {
        Eval::Error
    } else {
        Eval::True
    }
}

fn combine_or(results: &[Eval]) -> Eval {
    if results.iter().any(|r| *r == Eval::True) {
        Eval::True
    } else if results.iter().any(|r| *r == Eval::Error) {
        Eval::Error
    } else {
        Eval::False
    }
}

/// A fact-ref name is decoded in the binding matching the set's version;
/// for 2.3 the formatted string, URI and WFN parsers are tried in that
/// order.
fn decode_fact_ref(name: &str, version: CpeVersion) -> Result<CpeName, Error> {
    match version {
        CpeVersion::V11 => CpeName::parse_v11(name),
        CpeVersion::V22 => CpeName::parse_uri_22(name),
        CpeVersion::V23 => CpeName::parse_formatted_string(name)
            .or_else(|_| CpeName::parse_uri(name))
            .or_else(|_| CpeName::parse_wfn(name)),
    }
}
