//! Typed Rust client for SMM provider HTTP APIs (the "v2" action protocol).
//!
//! Providers of this family expose a single endpoint. Every call is a JSON
//! `POST` of `{ key, action, ... }`, and the `action` field selects one of
//! `services`, `balance`, `add`, `status`, `refill`, `refill_status`, `cancel`.
//! The crate has a domain layer of strong types, a transport layer for
//! wire-format quirks, and a small client layer orchestrating requests.
//!
//! ```rust,no_run
//! use smmv2::{NewOrder, ProviderClient, StatusReport};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), smmv2::SmmError> {
//!     let client = ProviderClient::new("https://provider.example/api/v2", "...")?;
//!     let balance = client.balance().await?;
//!     println!("{} {}", balance.balance, balance.currency);
//!
//!     let order = NewOrder::new(1_u64).link("https://example.com/post").quantity(100);
//!     let created = client.order(&order).await?;
//!
//!     if let StatusReport::Single(status) = client.status([created.order]).await? {
//!         println!("{status:?}");
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{ProviderClient, ProviderClientBuilder, SmmError};
pub use domain::{
    Action, ApiKey, Balance, CancelResult, Endpoint, IdBatch, Identifier, ItemOutcome,
    MAX_BATCH_IDS, NewOrder, OrderCreated, OrderState, OrderStatus, RefillCreated, RefillReport,
    RefillState, RefillStatus, RefillStatusReport, Service, StatusReport, UnknownAction,
    ValidationError,
};
pub use transport::{DEFAULT_ERROR_MESSAGE, Params};
