/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Metadata supplied alongside an object upload.
///
/// Both values are sent to Amazon S3 verbatim as the `Content-Type` and `Content-Length`
/// of the `PutObject` request. The content length must match the number of bytes in the
/// payload; this is not checked locally and a mismatch is left for the service to reject.
///
/// See [object metadata](https://docs.aws.amazon.com/AmazonS3/latest/userguide/UsingMetadata.html#object-metadata).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectMetadata {
    content_type: String,
    content_length: u64,
}

impl ObjectMetadata {
    /// Create metadata for an upload with the given content type and length in bytes.
    pub fn new(content_type: impl Into<String>, content_length: u64) -> Self {
        Self {
            content_type: content_type.into(),
            content_length,
        }
    }

    /// The MIME type of the object
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Size of the object in bytes
    pub fn content_length(&self) -> u64 {
        self.content_length
    }
}
