/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */

//! S3 File Storage
//!
//! A thin service layer that uploads, copies and downloads objects in a single,
//! statically configured Amazon S3 bucket.
//!
//! # Crate Features
//!
//! - `test-util`: Enables an in-memory [`StorageService`] implementation for unit tests.
//!   DO NOT ENABLE IN PRODUCTION.

#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

/// Error types emitted by `s3-file-storage`
pub mod error;

/// Common types used by `s3-file-storage`
pub mod types;

/// Storage client
pub mod client;

/// Client configuration
pub mod config;

/// Storage operations
pub mod operation;

/// The storage service abstraction
pub mod service;

/// In-memory storage service for tests
#[cfg(any(test, feature = "test-util"))]
pub mod in_memory;

pub use self::client::Client;
pub use self::config::Config;
pub use self::service::StorageService;
