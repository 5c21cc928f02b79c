/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::Error;
use crate::operation::download::DownloadOutput;
use crate::types::ObjectMetadata;

/// File operations against a single bucket.
///
/// Callers depend on this trait rather than on a concrete backend. [`Client`](crate::Client)
/// implements it on top of Amazon S3; with the `test-util` feature,
/// [`InMemoryStorage`](crate::in_memory::InMemoryStorage) implements it without a live backend.
///
/// Every method maps to exactly one backend request. Errors are returned as reported by the
/// backend; nothing is retried.
#[async_trait]
pub trait StorageService: Send + Sync + fmt::Debug {
    /// Store `body` under `object_key`, replacing any existing object.
    ///
    /// `metadata` supplies the content type and content length sent with the request.
    async fn upload(
        &self,
        object_key: &str,
        body: Bytes,
        metadata: ObjectMetadata,
    ) -> Result<(), Error>;

    /// Copy the object at `source_key` to `target_key` in the same bucket.
    async fn copy(&self, source_key: &str, target_key: &str) -> Result<(), Error>;

    /// Fetch the entire object stored under `object_key`.
    async fn download(&self, object_key: &str) -> Result<DownloadOutput, Error>;
}

#[async_trait]
impl StorageService for crate::Client {
    async fn upload(
        &self,
        object_key: &str,
        body: Bytes,
        metadata: ObjectMetadata,
    ) -> Result<(), Error> {
        crate::Client::upload(self, object_key, body, metadata).await
    }

    async fn copy(&self, source_key: &str, target_key: &str) -> Result<(), Error> {
        crate::Client::copy(self, source_key, target_key).await
    }

    async fn download(&self, object_key: &str) -> Result<DownloadOutput, Error> {
        crate::Client::download(self, object_key).await
    }
}

#[async_trait]
impl<T> StorageService for std::sync::Arc<T>
where
    T: StorageService + ?Sized,
{
    async fn upload(
        &self,
        object_key: &str,
        body: Bytes,
        metadata: ObjectMetadata,
    ) -> Result<(), Error> {
        (**self).upload(object_key, body, metadata).await
    }

    async fn copy(&self, source_key: &str, target_key: &str) -> Result<(), Error> {
        (**self).copy(source_key, target_key).await
    }

    async fn download(&self, object_key: &str) -> Result<DownloadOutput, Error> {
        (**self).download(object_key).await
    }
}
