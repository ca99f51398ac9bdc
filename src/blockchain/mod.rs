//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (rpc_url, contract_address)
//!     → client.rs (RpcTransport: eth_call with timeouts; LedgerClient: ABI encode/decode)
//!     → contract.rs (ContractReader: one typed method per ArtiinaNFT view function)
//! ```
//!
//! # Constraints
//! - Read-only: nothing here signs or sends transactions
//! - All RPC calls have configurable timeouts
//! - No retries; failures surface once as `BlockchainError`

pub mod client;
pub mod contract;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{LedgerClient, LedgerTransport, RpcTransport};
pub use contract::{BeadMetadata, BeadRecord, ContractReader};
pub use types::{BlockchainError, BlockchainResult};
