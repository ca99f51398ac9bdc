//! HTTP boundary of the gateway.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID, tracing span)
//!     → handlers.rs (`/`, `/health`, `/{beadId}` → resolver)
//!     → response.rs (ResolveError → status + JSON body)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use response::ErrorBody;
pub use server::{AppState, HttpServer};
