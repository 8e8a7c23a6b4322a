//! HTTP API for paydiff.
//!
//! Exposes the comparison engine over a small axum application: submit two
//! payloads, retrieve the structural diff, inspect slot status, and clear
//! state. Storage is delegated to a [`paydiff_store::PayloadStore`].

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;
pub mod validate;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError, ServerResult};
pub use router::build_router;
pub use server::PaydiffServer;
pub use state::AppState;
