//! Version-typed collections of known CPE names and name-to-set matching.

use crate::{
    matching::compare_wfns,
    name::{Attribute, CpeName, CpeVersion, Naming},
    Error,
};
use log::debug;

/// An ordered, version-homogeneous collection of known CPE names.
///
/// Appending preserves insertion order and suppresses duplicates by their
/// canonical string. A 2.3 set coerces every entry to the WFN binding on
/// insertion. There is no deletion: a set is built incrementally and then
/// queried.
#[derive(Debug)]
pub struct CpeSet {
    version: CpeVersion,
    names: Vec<CpeName>,
}

impl CpeSet {
    pub fn new(version: CpeVersion) -> Self {
        Self {
            version,
            names: Vec::new(),
        }
    }

    pub fn version(&self) -> CpeVersion {
        self.version
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CpeName> {
        self.names.iter()
    }

    pub fn contains(&self, raw: &str) -> bool {
        self.names.iter().any(|n| n.as_str() == raw)
    }

    /// Appends a name, ignoring it when an identical entry is already
    /// present. Fails when the name's specification version disagrees with
    /// the set's.
    pub fn append(&mut self, name: CpeName) -> Result<(), Error> {
        if name.version() != self.version {
            return Err(Error::VersionMismatch {
                expected: self.version,
                found: name.version(),
            });
        }
        let name = if self.version == CpeVersion::V23 && name.naming() != Naming::Wfn {
            name.to_wfn()
        } else {
            name
        };
        if self.contains(name.as_str()) {
            debug!("duplicate entry `{name}` ignored");
            return Ok(());
        }
        self.names.push(name);
        Ok(())
    }

    /// Tests whether `candidate` matches this set of known names.
    ///
    /// For 2.3 sets the candidate, as the source of the WFN comparison,
    /// must non-properly contain at least one known instance. For legacy
    /// sets the containment rule applies per attribute: every defined
    /// candidate component must be contained in the corresponding
    /// component of some entry. An empty set matches nothing; a candidate
    /// without any defined component matches trivially.
    pub fn name_match(&self, candidate: &CpeName) -> bool {
        if self.names.is_empty() {
            return false;
        }
        let matched = match self.version {
            CpeVersion::V23 => self
                .names
                .iter()
                .any(|known| compare_wfns(candidate, known).superset()),
            CpeVersion::V11 | CpeVersion::V22 => self.legacy_match(candidate),
        };
        debug!("candidate `{candidate}` matched: {matched}");
        matched
    }

    fn legacy_match(&self, candidate: &CpeName) -> bool {
        if self.contains(candidate.as_str()) {
            return true;
        }
        for attr in Attribute::ALL {
            let cand = candidate.component(attr);
            if cand.is_undefined() {
                continue;
            }
            let covered = self
                .names
                .iter()
                .any(|known| known.component(attr).contains(cand));
            if !covered {
                return false;
            }
        }
        true
    }
}

impl<'a> IntoIterator for &'a CpeSet {
    type Item = &'a CpeName;
    type IntoIter = std::slice::Iter<'a, CpeName>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}
