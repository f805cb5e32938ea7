//! Core library for the `cityweather` search tool.
//!
//! This crate defines:
//! - Query parsing (place name + optional region qualifier)
//! - The backend client and its error taxonomy
//! - Search session state (current report, loading flag, request tokens)
//! - Configuration handling
//!
//! It is used by `cityweather-cli`, but can also be reused by other
//! binaries or services.

pub mod backend;
pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod session;

pub use backend::{HttpBackend, WeatherBackend};
pub use config::Config;
pub use error::FetchError;
pub use model::WeatherReport;
pub use query::Query;
pub use session::{PendingSearch, SearchSession};
