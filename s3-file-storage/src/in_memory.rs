/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! In-memory implementation of the [`StorageService`] trait.

use std::collections::HashMap;
use std::time::SystemTime;

use async_trait::async_trait;
use aws_smithy_types::DateTime;
use bytes::Bytes;
use tokio::sync::RwLock;

use crate::error::{self, Error, ErrorKind};
use crate::operation::copy::copy_source;
use crate::operation::download::{DownloadOutput, ResponseMetadata};
use crate::service::StorageService;
use crate::types::ObjectMetadata;

#[derive(Debug, Clone)]
struct StoredObject {
    data: Bytes,
    content_type: String,
    last_modified: DateTime,
}

/// An in-memory implementation of the [`StorageService`] trait.
///
/// Objects live in a single map keyed by object key. The behaviors callers rely on from
/// Amazon S3 are reproduced: uploads overwrite, missing keys fail with `NoSuchKey`, copies go
/// through the encoded copy-source, and a declared content length that does not match the
/// body is rejected.
#[derive(Debug)]
pub struct InMemoryStorage {
    bucket: String,
    // key -> object
    objects: RwLock<HashMap<String, StoredObject>>,
}

impl InMemoryStorage {
    /// Create an empty store for `bucket`.
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            objects: RwLock::new(HashMap::new()),
        }
    }

    /// Number of objects currently stored
    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    /// Returns true if no objects are stored
    pub async fn is_empty(&self) -> bool {
        self.objects.read().await.is_empty()
    }

}

/// Resolve an encoded copy-source back into the object key it names.
fn source_key(encoded: &str) -> Result<String, Error> {
    let decoded = urlencoding::decode(encoded).map_err(error::invalid_input)?;
    let (_bucket, key) = decoded
        .split_once('/')
        .ok_or_else(|| error::invalid_input(format!("invalid copy source {encoded:?}")))?;
    Ok(key.to_owned())
}

fn no_such_key(key: &str) -> Error {
    Error::new(ErrorKind::NotFound, format!("no such key {key:?}")).with_code("NoSuchKey")
}

#[async_trait]
impl StorageService for InMemoryStorage {
    async fn upload(
        &self,
        object_key: &str,
        body: Bytes,
        metadata: ObjectMetadata,
    ) -> Result<(), Error> {
        if metadata.content_length() != body.len() as u64 {
            return Err(error::invalid_input(format!(
                "declared content length {} does not match body size {}",
                metadata.content_length(),
                body.len()
            ))
            .with_code("IncompleteBody"));
        }

        let object = StoredObject {
            data: body,
            content_type: metadata.content_type().to_owned(),
            last_modified: DateTime::from(SystemTime::now()),
        };
        self.objects
            .write()
            .await
            .insert(object_key.to_owned(), object);
        Ok(())
    }

    async fn copy(&self, source_key: &str, target_key: &str) -> Result<(), Error> {
        let source_key = self::source_key(&copy_source(&self.bucket, source_key))?;
        let mut objects = self.objects.write().await;
        let mut object = objects
            .get(&source_key)
            .cloned()
            .ok_or_else(|| no_such_key(&source_key))?;
        object.last_modified = DateTime::from(SystemTime::now());
        objects.insert(target_key.to_owned(), object);
        Ok(())
    }

    async fn download(&self, object_key: &str) -> Result<DownloadOutput, Error> {
        let objects = self.objects.read().await;
        let object = objects.get(object_key).ok_or_else(|| no_such_key(object_key))?;
        let metadata = ResponseMetadata {
            content_length: Some(object.data.len() as i64),
            content_type: Some(object.content_type.clone()),
            last_modified: Some(object.last_modified),
            ..Default::default()
        };
        Ok(DownloadOutput::new(object.data.clone(), metadata))
    }
}
