//! `stocklink-client` — typed client for the remote stock-management API.
//!
//! Every remote operation follows one shape: encode parameters into a form
//! body, perform a single HTTP round trip, decode the JSON response into the
//! declared result type. The generic pieces live in [`api`], [`params`] and
//! [`transport`]; [`stock`] binds the remote `Stock/*` endpoint group on top
//! of them.
//!
//! The client holds no cross-call state: concurrent calls from multiple
//! tasks are safe, and nothing is retried automatically (stock mutations are
//! not idempotent).

pub mod api;
pub mod config;
pub mod error;
pub mod params;
pub mod stock;
pub mod transport;

pub use api::ApiClient;
pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ApiResult};
pub use params::Params;
pub use stock::StockClient;
pub use transport::{HttpTransport, Transport, WireResponse};
