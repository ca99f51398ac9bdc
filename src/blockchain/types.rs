//! Chain-specific error definitions.

use thiserror::Error;

/// Errors that can occur during ledger reads.
///
/// Every variant is a connectivity failure from the resolver's point of
/// view; the split exists for logs and metrics.
#[derive(Debug, Error)]
pub enum BlockchainError {
    /// RPC connection or request failed, or the node returned an error.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// The node answered but the bytes did not match the declared return types.
    #[error("ABI decode error in {function}: {reason}")]
    Decode { function: &'static str, reason: String },

    /// Endpoint or contract address could not be parsed.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
}

/// Result type for blockchain operations.
pub type BlockchainResult<T> = Result<T, BlockchainError>;
