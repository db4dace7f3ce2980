//! WestFax API client library.
//!
//! A Rust library for the WestFax fax-service REST API. The service speaks
//! form-encoded HTTP POST against a small fixed set of endpoints and wraps
//! every response in a `{Success, Result}` JSON envelope; this crate models
//! that surface as one client type with four operations.
//!
//! # Quick Start
//!
//! ```no_run
//! use westfax::WestfaxClient;
//!
//! #[tokio::main]
//! async fn main() -> westfax::Result<()> {
//!     // Create client from environment variables
//!     let client = WestfaxClient::from_env()?;
//!
//!     // Round-trip an echo string
//!     let pong = client.ping("hello").await?;
//!     println!("Echoed: {}", pong.result);
//!
//!     // Fetch one fax's metadata
//!     let fax = client.get_fax_description("0afbf6f9-998e-4863-9a08-757bf1308db9").await?;
//!     println!("Fax status: {:?}", fax.result.status);
//!
//!     // List inbound faxes since a date (format per the service's contract)
//!     let inbound = client.get_inbound_fax_identifiers("2022-01-11").await?;
//!     println!("Found {} inbound faxes", inbound.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Envelope handling
//!
//! Every operation returns an [`ApiResponse`] carrying the service-reported
//! `Success` flag next to the typed payload. The client never interprets the
//! flag; callers that care about service-reported failure inspect it
//! themselves. Transport failures, undecodable bodies and empty result lists
//! on the single-record endpoints are surfaced as [`WestfaxError`] instead.
//!
//! # Configuration
//!
//! [`WestfaxClient::from_env`] reads:
//!
//! - `WESTFAX_USERNAME` (required)
//! - `WESTFAX_PASSWORD` (required)
//! - `WESTFAX_PRODUCT_ID` (required)
//! - `WESTFAX_API_URL` (optional, defaults to `https://api2.westfax.com/REST`)

mod client;
mod envelope;
mod error;
mod models;

pub mod cli;

// Re-export core types
pub use client::WestfaxClient;
pub use envelope::ApiResponse;
pub use error::{Result, WestfaxError};

// Re-export models
pub use models::{Fax, FaxCallInfo, FaxDirection, FaxFile};
