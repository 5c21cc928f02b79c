/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error;
use crate::operation::OperationContext;
use std::sync::Arc;

/// Build the `x-amz-copy-source` value for `source_key` in `bucket`.
///
/// The value is `{bucket}/{source_key}` with the whole string percent-encoded, including the
/// separating slash. Every byte other than `A-Z a-z 0-9 - _ . ~` is encoded as `%XX`, so a
/// space becomes `%20` and `/` becomes `%2F`.
pub fn copy_source(bucket: &str, source_key: &str) -> String {
    urlencoding::encode(&format!("{bucket}/{source_key}")).into_owned()
}

/// Operation struct for copying an object within the configured bucket
#[derive(Clone, Default, Debug)]
pub(crate) struct CopyObject;

impl CopyObject {
    /// Execute a single `CopyObject` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        source_key: &str,
        target_key: &str,
    ) -> Result<(), error::Error> {
        let ctx = OperationContext::new(handle);
        let copy_source = copy_source(ctx.bucket(), source_key);

        tracing::trace!("sending CopyObject from {copy_source:?} to key {target_key:?}");
        let resp = ctx
            .client()
            .copy_object()
            .copy_source(copy_source)
            .bucket(ctx.bucket())
            .key(target_key)
            .send()
            .await?;

        tracing::debug!(
            "copied {source_key:?} to {target_key:?} (e_tag: {:?})",
            resp.copy_object_result().and_then(|r| r.e_tag())
        );
        Ok(())
    }
}
