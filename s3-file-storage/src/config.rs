/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Load configuration from the environment
pub mod loader;

/// The region every storage client is bound to.
pub const REGION: &str = "ap-northeast-2";

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Debug, Clone)]
pub struct Config {
    bucket: String,
    client: aws_sdk_s3::client::Client,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The bucket every operation reads from and writes to.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The Amazon S3 client instance that will be used to send requests to S3.
    pub fn client(&self) -> &aws_sdk_s3::Client {
        &self.client
    }
}

/// Fluent style builder for [Config]
#[derive(Debug, Clone, Default)]
pub struct Builder {
    bucket: Option<String>,
    client: Option<aws_sdk_s3::Client>,
}

impl Builder {
    /// Set the bucket name used for all operations.
    ///
    /// Default is the empty string, which is only rejected by the service once a request is sent.
    pub fn bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    /// Set an explicit S3 client to use.
    pub fn client(mut self, client: aws_sdk_s3::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Consumes the builder and constructs a [`Config`]
    ///
    /// # Panics
    ///
    /// Panics if no client was set. Use [`ConfigLoader`](loader::ConfigLoader) to construct
    /// the client from the environment.
    pub fn build(self) -> Config {
        Config {
            bucket: self.bucket.unwrap_or_default(),
            client: self.client.expect("client set"),
        }
    }
}
