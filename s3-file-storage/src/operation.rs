/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

/// Types for single object upload operation
pub mod upload;

/// Types for copying an object within the bucket
pub mod copy;

/// Types for single object download operation
pub mod download;

/// Container for maintaining context required to carry out a single operation.
#[derive(Debug, Clone)]
pub(crate) struct OperationContext {
    handle: Arc<crate::client::Handle>,
}

impl OperationContext {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self { handle }
    }

    /// The S3 client to use for SDK operations
    pub(crate) fn client(&self) -> &aws_sdk_s3::Client {
        self.handle.config.client()
    }

    /// The bucket every request targets
    pub(crate) fn bucket(&self) -> &str {
        self.handle.config.bucket()
    }
}
