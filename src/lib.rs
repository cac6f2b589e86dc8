//! Typed async client for the [Paystack](https://paystack.com) REST API.
//!
//! Check out also the official Paystack [API reference](https://paystack.com/docs/api/).
//!
//! # Usage
//!
//! ## Prerequisites
//!
//! Grab a secret key from the Paystack dashboard, under Settings > API Keys & Webhooks.
//! Test keys start with `sk_test_` and never move real money.
//!
//! ## Initialize a new `PaystackClient`
//!
//! ```rust,no_run
//! # use paystack_rust::{Error, PaystackClient};
//! # fn main() -> Result<(), Error> {
//! let paystack = PaystackClient::new("sk_test_xxxxxxxxxxxxxxxxxxxxxxxx")?;
//! # Ok(())
//! # }
//! ```
//!
//! Use [`PaystackClient::builder`] to inject a preconfigured `reqwest::Client`
//! (timeouts, proxies) or to point the client at another base URL.
//!
//! ## Initialize a transaction
//!
//! ```rust,no_run
//! # use paystack_rust::{Error, PaystackClient, apis::{common::Currency, transactions::*}};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let paystack: PaystackClient = unreachable!();
//! #
//! let request = InitializeTransactionRequestBuilder::default()
//!     .email("customer@email.com")
//!     .amount(20000)
//!     .currency(Currency::Ngn)
//!     .build()
//!     .unwrap();
//! let res = paystack.transactions.initialize(&request).await?;
//!
//! println!("Redirect the customer to {}", res.into_data()?.authorization_url);
//! # Ok(())
//! # }
//! ```
//!
//! ## Handling errors
//!
//! Every call returns the raw [`Response`] envelope on success. Failed calls
//! return an [`Error`] that can be classified with [`Error::kind`].
//!
//! ```rust,no_run
//! # use paystack_rust::{Error, ErrorKind, PaystackClient};
//! #
//! # #[tokio::main]
//! # async fn main() {
//! # let paystack: PaystackClient = unreachable!();
//! #
//! match paystack.transactions.verify("re4lyvq3s3").await {
//!     Ok(res) => tracing::info!(status = res.status, "{}", res.message),
//!     Err(e) if e.kind() == ErrorKind::NotFound => tracing::warn!("No such transaction"),
//!     Err(e) => tracing::error!(
//!         next_step = e.as_api_error().map(|e| e.next_step()).unwrap_or_default(),
//!         "Verification failed: {}",
//!         e
//!     ),
//! }
//! # }
//! ```
//!
//! ## More examples
//!
//! Look into the [`demos`](../demos) for more example usages of this library.
//!
//! To run a demo, use `cargo run` like this:
//!
//! ```shell
//! PAYSTACK_SECRET_KEY=sk_test_xxx cargo run --example list_banks
//! ```

#![deny(missing_debug_implementations)]
#![forbid(unsafe_code)]

pub mod apis;
pub mod client;
mod common;
pub mod error;
mod middlewares;
pub mod response;

pub use client::{PaystackClient, PaystackClientBuilder};
pub use error::{ApiError, Error, ErrorKind};
pub use response::{Meta, Response};
