//! Coffee Resource Service - HTTP REST API over a coffee document collection
//!
//! This crate provides an HTTP server exposing CRUD operations on a single
//! MongoDB collection of coffee documents. Each route is a direct translation
//! to one store call; there is no business logic between the two.
//!
//! # Features
//!
//! - **CRUD endpoints**: list, fetch, create, upsert, and delete coffees
//! - **Pluggable store**: handlers talk to the [`store::CoffeeStore`] trait; the
//!   MongoDB backend serves production, an in-memory backend serves tests
//! - **Middleware**: CORS, compression, request ID tracking, structured logging
//! - **Configuration**: environment variable and file-based configuration
//! - **Graceful Shutdown**: proper signal handling for production deployments
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - plain text acknowledgement
//! - `GET /health` - liveness probe
//! - `GET /coffees` - list every coffee document
//! - `GET /coffees/{id}` - fetch one coffee, `null` when absent
//! - `POST /coffees` - insert the request body as a new document
//! - `PUT /coffees/{id}` - merge allowlisted fields, upserting when absent
//! - `DELETE /coffees/{id}` - remove the matching document

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::start_server;
pub use state::ServerState;
pub use store::{CoffeeStore, MemoryStore, MongoStore};
