//! otgraph-server: graph-shaped HTTP API over an Open Tibia style
//! game-world database.
//!
//! Layering, outermost first: `http` (thin axum handlers), `graph` (root
//! dispatch and relation resolvers), `db` (entity repositories over a
//! pooled MySQL handle). Each request flows one way through those layers;
//! only the pool is shared mutable state.

pub mod db;
pub mod graph;
pub mod http;

pub use graph::Resolver;
pub use http::{run_server, ServerConfig};
