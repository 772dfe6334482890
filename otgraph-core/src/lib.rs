//! otgraph-core: shared configuration for the otgraph workspace.
//!
//! The server binary loads an [`ApiConfig`] from a TOML file (with
//! environment overrides) and hands the assembled database URL to the
//! connection pool.

pub mod config;

pub use config::{ApiConfig, DatabaseConfig, ServerConfig};
