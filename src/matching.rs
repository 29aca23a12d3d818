//! The CPE 2.3 comparison algebra: pairwise attribute relations, the
//! string-wildcard comparison and the whole-name aggregates.
//!
//! The source side of a comparison may carry meaningful wildcards; an
//! unquoted wildcard in the target makes the relation undefined rather than
//! raising an error.

use crate::{
    component::Component,
    grammar::{self, Token},
    name::{Attribute, CpeName},
};
use std::fmt;

/// The relation between two attribute values, or two whole names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Equal,
    Superset,
    Subset,
    Disjoint,
    Undefined,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Relation::Equal => write!(f, "EQUAL"),
            Relation::Superset => write!(f, "SUPERSET"),
            Relation::Subset => write!(f, "SUBSET"),
            Relation::Disjoint => write!(f, "DISJOINT"),
            Relation::Undefined => write!(f, "UNDEFINED"),
        }
    }
}

const ANY: &Component = &Component::Any;

/// `Undefined` compares as `Any`.
fn normalized(component: &Component) -> &Component {
    match component {
        Component::Undefined => ANY,
        defined => defined,
    }
}

/// Pairwise comparison of one attribute.
pub fn compare_attribute(source: &Component, target: &Component) -> Relation {
    use Component::*;

    let source = normalized(source);
    let target = normalized(target);

    // only the source may carry a meaningful wildcard
    if let Value(tv) = target {
        if has_unquoted_wildcard(tv) {
            return Relation::Undefined;
        }
    }

    match (source, target) {
        // 1.1 operator components have no place in the 2.3 algebra
        (OrList(_) | NotValue(_), _) | (_, OrList(_) | NotValue(_)) => Relation::Undefined,
        (Any, Any) => Relation::Equal,
        (NotApplicable, NotApplicable) => Relation::Equal,
        (Any, _) => Relation::Superset,
        (_, Any) => Relation::Subset,
        (NotApplicable, _) | (_, NotApplicable) => Relation::Disjoint,
        (Value(sv), Value(tv)) => {
            if sv == tv {
                Relation::Equal
            } else {
                compare_strings(sv, tv)
            }
        }
        (Undefined, _) | (_, Undefined) => Relation::Undefined,
    }
}

fn has_unquoted_wildcard(value: &str) -> bool {
    match grammar::tokenize(value) {
        Ok(tokens) => tokens.iter().any(|t| t.is_wildcard()),
        Err(_) => false,
    }
}

/// Compares a possibly-wildcarded source value against a concrete target.
///
/// The source may begin with a run of `?` or a single `*`, and likewise
/// end with one; escaped wildcards (preceded by an odd number of
/// backslashes) are literals. The wildcard affixes are stripped and the
/// remaining core is searched for in the target at every position the
/// affixes allow: a run of n leading `?` lets the match start up to n
/// characters in, a leading `*` anywhere; symmetrically at the tail.
pub fn compare_strings(source: &str, target: &str) -> Relation {
    let (Ok(source_tokens), Ok(target_tokens)) =
        (grammar::tokenize(source), grammar::tokenize(target))
    else {
        return Relation::Undefined;
    };

    let mut core: &[Token] = &source_tokens;
    let mut lead_star = false;
    let mut lead_q = 0usize;
    if let [Token::MultiWild, rest @ ..] = core {
        lead_star = true;
        core = rest;
    } else {
        while let [Token::OneWild, rest @ ..] = core {
            lead_q += 1;
            core = rest;
        }
    }
    let mut trail_star = false;
    let mut trail_q = 0usize;
    if let [rest @ .., Token::MultiWild] = core {
        trail_star = true;
        core = rest;
    } else {
        while let [rest @ .., Token::OneWild] = core {
            trail_q += 1;
            core = rest;
        }
    }

    let core: Vec<char> = core.iter().map(|t| t.decoded()).collect();
    let target: Vec<char> = target_tokens.iter().map(|t| t.decoded()).collect();

    if core.len() > target.len() {
        return Relation::Disjoint;
    }
    for start in 0..=(target.len() - core.len()) {
        if !lead_star && start > lead_q {
            break;
        }
        if target[start..start + core.len()] != core[..] {
            continue;
        }
        let remaining = target.len() - core.len() - start;
        if trail_star || remaining <= trail_q {
            return Relation::Superset;
        }
    }
    Relation::Disjoint
}

/// The result of comparing two WFNs attribute by attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WfnComparison {
    relations: [Relation; 11],
}

impl WfnComparison {
    pub fn relation(&self, attr: Attribute) -> Relation {
        self.relations[attr.index()]
    }

    /// All 11 relations are `EQUAL`.
    pub fn equal(&self) -> bool {
        self.relations.iter().all(|r| matches!(r, Relation::Equal))
    }

    /// Every relation is `SUPERSET` or `EQUAL`: the source non-properly
    /// contains the target.
    pub fn superset(&self) -> bool {
        self.relations
            .iter()
            .all(|r| matches!(r, Relation::Superset | Relation::Equal))
    }

    /// Every relation is `SUBSET` or `EQUAL`.
    pub fn subset(&self) -> bool {
        self.relations
            .iter()
            .all(|r| matches!(r, Relation::Subset | Relation::Equal))
    }

    /// At least one relation is `DISJOINT`.
    pub fn disjoint(&self) -> bool {
        self.relations
            .iter()
            .any(|r| matches!(r, Relation::Disjoint))
    }

    /// At least one relation is `UNDEFINED`.
    pub fn has_undefined(&self) -> bool {
        self.relations
            .iter()
            .any(|r| matches!(r, Relation::Undefined))
    }
}

/// Applies [`compare_attribute`] to all 11 attributes of two names.
pub fn compare_wfns(source: &CpeName, target: &CpeName) -> WfnComparison {
    let mut relations = [Relation::Undefined; 11];
    for attr in Attribute::ALL {
        relations[attr.index()] =
            compare_attribute(source.component(attr), target.component(attr));
    }
    WfnComparison { relations }
}

pub fn cpe_equal(source: &CpeName, target: &CpeName) -> bool {
    compare_wfns(source, target).equal()
}

pub fn cpe_superset(source: &CpeName, target: &CpeName) -> bool {
    compare_wfns(source, target).superset()
}

pub fn cpe_subset(source: &CpeName, target: &CpeName) -> bool {
    compare_wfns(source, target).subset()
}

pub fn cpe_disjoint(source: &CpeName, target: &CpeName) -> bool {
    compare_wfns(source, target).disjoint()
}
