/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error;
use crate::operation::OperationContext;
use crate::types::ObjectMetadata;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use std::sync::Arc;

/// Operation struct for single object upload
#[derive(Clone, Default, Debug)]
pub(crate) struct Upload;

impl Upload {
    /// Execute a single `Upload` operation
    ///
    /// The content type and length are sent exactly as given in `metadata`, even when the length
    /// disagrees with the body.
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        object_key: &str,
        body: Bytes,
        metadata: ObjectMetadata,
    ) -> Result<(), error::Error> {
        let ctx = OperationContext::new(handle);
        let content_length: i64 = metadata.content_length().try_into().map_err(|_| {
            error::invalid_input(format!(
                "content_length:{} is invalid.",
                metadata.content_length()
            ))
        })?;

        if metadata.content_length() != body.len() as u64 {
            tracing::trace!(
                "declared content length ({content_length}) differs from body size ({}); sending as declared",
                body.len()
            );
        }

        tracing::trace!("sending PutObject for key {object_key:?} to bucket {:?}", ctx.bucket());
        let resp = ctx
            .client()
            .put_object()
            .bucket(ctx.bucket())
            .key(object_key)
            .content_type(metadata.content_type())
            .content_length(content_length)
            .body(ByteStream::from(body))
            .send()
            .await?;

        tracing::debug!(
            "uploaded {content_length} bytes to {object_key:?} (e_tag: {:?}, version_id: {:?})",
            resp.e_tag(),
            resp.version_id()
        );
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::Upload;
    use crate::error::ErrorKind;
    use crate::operation::test_util::test_handle;
    use crate::types::ObjectMetadata;
    use aws_sdk_s3::operation::put_object::PutObjectOutput;
    use aws_smithy_mocks_experimental::{mock, mock_client, RuleMode};
    use bytes::Bytes;
    use test_common::{mock_client_with_stubbed_http_client, s3_error_response};

    #[tokio::test]
    async fn test_basic_upload_object() {
        let body = Bytes::from_static(b"every adolescent dog goes bonkers early");
        let put_object = mock!(aws_sdk_s3::Client::put_object)
            .match_requests(|r| {
                r.bucket() == Some("test-bucket")
                    && r.key() == Some("docs/dogs.txt")
                    && r.content_type() == Some("text/plain")
                    && r.content_length() == Some(39)
            })
            .then_output(|| PutObjectOutput::builder().e_tag("test-etag").build());

        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&put_object]);
        let handle = test_handle(client, "test-bucket");

        let metadata = ObjectMetadata::new("text/plain", body.len() as u64);
        Upload::orchestrate(handle, "docs/dogs.txt", body, metadata)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_mismatched_content_length_sent_verbatim() {
        let put_object = mock!(aws_sdk_s3::Client::put_object)
            .match_requests(|r| r.content_length() == Some(100))
            .then_http_response(|| {
                s3_error_response(400, "IncompleteBody", "Request body terminated unexpectedly")
            });

        let client = mock_client_with_stubbed_http_client!(
            aws_sdk_s3,
            RuleMode::Sequential,
            &[&put_object]
        );
        let handle = test_handle(client, "test-bucket");

        let metadata = ObjectMetadata::new("text/plain", 100);
        let err = Upload::orchestrate(handle, "short", Bytes::from_static(b"hello"), metadata)
            .await
            .unwrap_err();
        assert_eq!(&ErrorKind::ServiceError, err.kind());
        assert_eq!(Some("IncompleteBody"), err.code());
    }

    #[tokio::test]
    async fn test_content_length_out_of_range() {
        let put_object = mock!(aws_sdk_s3::Client::put_object)
            .then_output(|| PutObjectOutput::builder().build());
        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&put_object]);
        let handle = test_handle(client, "test-bucket");

        let metadata = ObjectMetadata::new("application/octet-stream", u64::MAX);
        let err = Upload::orchestrate(handle, "huge", Bytes::new(), metadata)
            .await
            .unwrap_err();
        assert_eq!(&ErrorKind::InputInvalid, err.kind());
    }

    #[tokio::test]
    async fn test_access_denied_propagated() {
        let put_object = mock!(aws_sdk_s3::Client::put_object)
            .then_http_response(|| s3_error_response(403, "AccessDenied", "Access Denied"));
        let client = mock_client_with_stubbed_http_client!(
            aws_sdk_s3,
            RuleMode::Sequential,
            &[&put_object]
        );
        let handle = test_handle(client, "test-bucket");

        let metadata = ObjectMetadata::new("text/plain", 2);
        let err = Upload::orchestrate(handle, "k", Bytes::from_static(b"hi"), metadata)
            .await
            .unwrap_err();
        assert_eq!(&ErrorKind::AccessDenied, err.kind());
        assert_eq!(Some("AccessDenied"), err.code());
        assert_eq!(Some("Access Denied"), err.message());
    }
}
