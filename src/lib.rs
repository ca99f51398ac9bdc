//! Artiina bead gateway library.
//!
//! Resolves eight-character bead identifiers into authenticity and
//! provenance records read from the ArtiinaNFT contract.

pub mod blockchain;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod resolver;

pub use config::schema::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use resolver::{BeadResolver, ResolveError, ResolvedBead};
