/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use bytes::Bytes;

use super::ResponseMetadata;

/// Output from downloading an object from Amazon S3
#[derive(Clone, Debug)]
pub struct DownloadOutput {
    body: Bytes,
    metadata: ResponseMetadata,
}

impl DownloadOutput {
    pub(crate) fn new(body: Bytes, metadata: ResponseMetadata) -> Self {
        Self { body, metadata }
    }

    /// The full object content
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Consume the output, returning the object content
    pub fn into_body(self) -> Bytes {
        self.body
    }

    /// Metadata returned by the service alongside the object
    pub fn metadata(&self) -> &ResponseMetadata {
        &self.metadata
    }

    /// The content length reported by the service, if any
    pub fn content_length(&self) -> Option<u64> {
        self.metadata
            .content_length
            .and_then(|len| u64::try_from(len).ok())
    }
}
