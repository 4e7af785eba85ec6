//! Core module - server configuration, state and lifecycle
//!
//! - [`Config`] - environment-driven configuration + static table roster
//! - [`ServerState`] - shared handles (database, insight service)
//! - [`Server`] - HTTP server

pub mod config;
pub mod server;
pub mod state;

pub use config::{Config, TableInfo};
pub use server::Server;
pub use state::ServerState;
