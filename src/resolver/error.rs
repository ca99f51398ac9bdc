//! Resolution failure taxonomy.

use thiserror::Error;

use crate::blockchain::BlockchainError;

/// Why a bead could not be resolved.
///
/// Each variant maps to exactly one HTTP status at the boundary.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Identifier is not eight characters of `[A-Z0-9]`. Never reaches the ledger.
    #[error("invalid bead id format: {bead_id:?}")]
    InvalidFormat { bead_id: String },

    /// No contract is bound; the deployment is missing ledger settings.
    #[error("contract address not configured")]
    Unconfigured,

    /// Well-formed identifier with no record on the ledger.
    #[error("bead {bead_id} not found")]
    NotFound { bead_id: String },

    /// The ledger could not be reached or answered with undecodable data.
    #[error("ledger read failed: {0}")]
    Ledger(#[from] BlockchainError),

    /// A ledger value does not fit the response type.
    #[error("ledger value for {field} out of range")]
    Overflow { field: &'static str },
}

impl ResolveError {
    /// Stable label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ResolveError::InvalidFormat { .. } => "invalid_format",
            ResolveError::Unconfigured => "unconfigured",
            ResolveError::NotFound { .. } => "not_found",
            ResolveError::Ledger(_) => "ledger_error",
            ResolveError::Overflow { .. } => "overflow",
        }
    }
}
