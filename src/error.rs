// src/error.rs
//
// Typed failures for the reconciliation core. Every fatal variant carries
// enough context (title, key, field) to point at the per-title table that
// needs extending. Plumbing layers keep the usual Box<dyn Error>; ChipError
// converts through its std::error::Error impl.

use thiserror::Error;

use crate::titles::Title;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChipError {
    /// A primary-source row is missing a field its title's column contract
    /// requires. Aborts that title only.
    #[error("{title}: row {row} is missing required field '{field}'")]
    SourceFormat {
        title: Title,
        row: usize,
        field: &'static str,
    },

    /// Two entries resolved to the same composite key within one title.
    #[error("{title}: duplicate composite key '{key}'")]
    KeyCollision { title: Title, key: String },

    /// A required key has no entry in the title's configured secondary
    /// source. The per-title correction tables are the usual suspect.
    #[error("{title}: no supplemental entry for key '{key}'")]
    SupplementalMiss { title: Title, key: String },

    /// An un-mapped token reached the normalizer. Raw tokens never pass
    /// through silently.
    #[error("unmapped {kind} token '{token}'")]
    Vocabulary { kind: &'static str, token: String },

    /// A per-title guide pattern failed to compile.
    #[error("{title}: invalid guide pattern: {detail}")]
    Pattern { title: Title, detail: String },
}
