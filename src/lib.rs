/*!
cpematch is a CPE (Common Platform Enumeration) naming and matching engine
written in Rust. It parses, normalizes and renders identifiers in every
published binding (CPE 1.1 URIs, CPE 2.2 URIs and the CPE 2.3 WFN, URI and
formatted-string forms), compares names under the 2.3 matching algebra and
evaluates CPE Language applicability expressions against sets of known
names.
*/

mod builder;
mod component;
mod error;
mod fs;
mod grammar;
mod language;
mod matching;
mod name;
mod serialization;
mod set;
mod uri;
mod v11;
mod wfn;

pub use builder::*;
pub use component::*;
pub use error::*;
pub use language::*;
pub use matching::*;
pub use name::*;
pub use set::*;

#[cfg(test)]
mod tests;
