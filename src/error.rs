use crate::name::CpeVersion;
use thiserror::Error;

/// Errors raised while parsing, converting or collecting CPE identifiers.
///
/// Parsing is all-or-nothing: a `MalformedIdentifier` is raised from the
/// parse entry point and no partially initialized name ever escapes.
/// Matching and comparison never raise for well-formed inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The raw text violates the grammar of the requested binding.
    #[error("malformed identifier: {reason}")]
    MalformedIdentifier { reason: String },

    /// The requested attribute name is not one of the 11 defined keys.
    #[error("unknown attribute `{0}`")]
    UnknownAttribute(String),

    /// A name of the wrong specification version was appended to a
    /// version-typed set.
    #[error("version mismatch: expected CPE {expected}, found CPE {found}")]
    VersionMismatch {
        expected: CpeVersion,
        found: CpeVersion,
    },

    /// A CPE Language `check-fact-ref` references an external check system
    /// (OVAL, OCIL, ...) that this crate does not evaluate.
    #[error("unsupported check system `{0}`")]
    UnsupportedCheckSystem(String),
}

impl Error {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Error::MalformedIdentifier {
            reason: reason.into(),
        }
    }
}
