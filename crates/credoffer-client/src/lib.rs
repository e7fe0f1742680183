//! # credoffer-client — Credential Offer Service Client
//!
//! Typed access to the service that turns a credential offer into a
//! scannable code:
//! - **RPC** via `POST {service_url}rpc/{route}` (`client.rs`, `routes.rs`)
//! - **Image fetch** for the photo claim (`client.rs`)
//! - **Submission** of a [`credoffer_form::FormState`] (`offer.rs`)
//!
//! ## Failure Semantics
//!
//! Nothing here retries or swallows errors. A failed image fetch or RPC
//! surfaces as [`ServiceError`] to whoever called [`offer::submit`].

pub mod client;
pub mod config;
pub mod error;
pub mod offer;
pub mod routes;

pub use client::ServiceClient;
pub use config::{ConfigError, ServiceConfig};
pub use error::ServiceError;
pub use offer::{submit, OfferRequest, OfferResponse};
pub use routes::RpcRoute;
