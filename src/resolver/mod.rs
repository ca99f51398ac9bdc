//! Bead resolution subsystem.
//!
//! # Data Flow
//! ```text
//! raw path segment
//!     → bead_id.rs (format check, no network)
//!     → engine.rs (configured? exists? fan out four reads, join)
//!     → convert.rs (U256 → u64, Unix seconds → RFC 3339)
//!     → ResolvedBead | ResolveError
//! ```
//!
//! # Design Decisions
//! - Short-circuits on the first failure; never returns a partial record
//! - Transport failures are `Ledger` errors, never `NotFound`
//! - No retries and no caching; every request reads the ledger

pub mod bead_id;
pub mod convert;
pub mod engine;
pub mod error;
pub mod types;

pub use bead_id::BeadId;
pub use engine::BeadResolver;
pub use error::ResolveError;
pub use types::ResolvedBead;
