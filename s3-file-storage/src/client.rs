/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error::Error;
use crate::operation::copy::CopyObject;
use crate::operation::download::{Download, DownloadOutput};
use crate::operation::upload::Upload;
use crate::types::ObjectMetadata;
use crate::Config;
use bytes::Bytes;
use std::sync::Arc;

/// Storage client for a single Amazon S3 bucket.
///
/// The client is cheap to clone and safe to share between concurrent requests; every clone
/// uses the same underlying SDK client and configuration.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: crate::Config,
}

impl Client {
    /// Creates a new client from a storage config.
    pub fn new(config: Config) -> Client {
        let handle = Arc::new(Handle { config });
        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// Upload a single object to S3.
    ///
    /// Sends one `PutObject` request. Any existing object at `object_key` is overwritten.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use s3_file_storage::types::ObjectMetadata;
    ///
    /// async fn upload_report(
    ///     client: &s3_file_storage::Client,
    /// ) -> Result<(), s3_file_storage::error::Error> {
    ///     let body = bytes::Bytes::from_static(b"quarterly numbers");
    ///     let metadata = ObjectMetadata::new("text/plain", body.len() as u64);
    ///     client.upload("reports/q1.txt", body, metadata).await
    /// }
    /// ```
    pub async fn upload(
        &self,
        object_key: &str,
        body: Bytes,
        metadata: ObjectMetadata,
    ) -> Result<(), Error> {
        Upload::orchestrate(self.handle.clone(), object_key, body, metadata).await
    }

    /// Copy an existing object to another key within the same bucket.
    ///
    /// Sends one `CopyObject` request.
    pub async fn copy(&self, source_key: &str, target_key: &str) -> Result<(), Error> {
        CopyObject::orchestrate(self.handle.clone(), source_key, target_key).await
    }

    /// Download a single object from S3.
    ///
    /// Sends one `GetObject` request and buffers the entire object in memory.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// async fn print_size(
    ///     client: &s3_file_storage::Client,
    /// ) -> Result<(), s3_file_storage::error::Error> {
    ///     let output = client.download("reports/q1.txt").await?;
    ///     println!("{} bytes of {:?}", output.body().len(), output.metadata().content_type);
    ///     Ok(())
    /// }
    /// ```
    pub async fn download(&self, object_key: &str) -> Result<DownloadOutput, Error> {
        Download::orchestrate(self.handle.clone(), object_key).await
    }
}
