/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */
#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! A read-only Amazon S3 facade that talks to [Filebase] instead of AWS.
//!
//! The client installs an endpoint resolver that sends every S3 request to
//! `https://s3.filebase.com` and signs it for `us-east-1`, no matter which region the
//! client was configured with. Everything else (signing, retries, transport, response
//! parsing) is handled by [`aws_sdk_s3`].
//!
//! [Filebase]: https://filebase.com
//!
//! # Examples
//!
//! Construct a client from static credentials:
//!
//! ```no_run
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = filebase_s3_proxy::Client::from_static(
//!     "access-key",
//!     "secret-key",
//!     "us-east-1",
//!     "my-bucket",
//! )?;
//!
//! let object = client.get("index.html").await?;
//! let body = object.body.collect().await?.into_bytes();
//! # Ok(())
//! # }
//! ```
//!
//! Load region and credentials from the environment:
//!
//! ```no_run
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = filebase_s3_proxy::from_env().bucket("my-bucket").load().await?;
//! let client = filebase_s3_proxy::Client::new(config);
//!
//! let website = client.get_website_config().await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Crate Features
//!
//! - `test-util`: Enables [`fake::FakeS3Proxy`], an in-memory [`S3Proxy`] for unit tests.
//!   DO NOT ENABLE IN PRODUCTION.

/// Error types emitted by `filebase-s3-proxy`
pub mod error;

/// Common types used by `filebase-s3-proxy`
pub mod types;

/// Endpoint redirection
pub mod endpoint;

/// Client configuration
pub mod config;

/// The storage accessor client
pub mod client;

/// Client operations
pub mod operation;

/// In-memory test double
#[cfg(any(test, feature = "test-util"))]
pub mod fake;

pub use self::client::{Client, S3Proxy};
use self::config::loader::ConfigLoader;
pub use self::config::Config;

/// Create a config loader
pub fn from_env() -> ConfigLoader {
    ConfigLoader::default()
}
