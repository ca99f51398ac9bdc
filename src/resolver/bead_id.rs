//! Bead identifier validation.

use std::fmt;

use crate::resolver::error::ResolveError;

/// Length of every bead identifier.
pub const BEAD_ID_LEN: usize = 8;

/// A well-formed bead identifier: exactly eight characters of `[A-Z0-9]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BeadId(String);

impl BeadId {
    /// Validate `raw`. Lowercase letters are rejected, not folded.
    pub fn parse(raw: &str) -> Result<Self, ResolveError> {
        let well_formed = raw.len() == BEAD_ID_LEN
            && raw.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit());

        if well_formed {
            Ok(Self(raw.to_string()))
        } else {
            Err(ResolveError::InvalidFormat { bead_id: raw.to_string() })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for BeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
