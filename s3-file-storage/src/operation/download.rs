/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

mod object_meta;
mod output;

use crate::error;
use crate::operation::OperationContext;
/// Response metadata for a downloaded object
pub use object_meta::ResponseMetadata;
/// Response type for downloads from Amazon S3
pub use output::DownloadOutput;
use std::sync::Arc;

/// Operation struct for single object download
#[derive(Clone, Default, Debug)]
pub(crate) struct Download;

impl Download {
    /// Execute a single `Download` operation
    ///
    /// The whole object is collected into memory before returning.
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        object_key: &str,
    ) -> Result<DownloadOutput, error::Error> {
        let ctx = OperationContext::new(handle);

        tracing::trace!("sending GetObject for key {object_key:?} to bucket {:?}", ctx.bucket());
        let resp = ctx
            .client()
            .get_object()
            .bucket(ctx.bucket())
            .key(object_key)
            .send()
            .await?;

        let metadata = ResponseMetadata::from(&resp);
        let body = resp.body.collect().await?.into_bytes();
        tracing::debug!("downloaded {} bytes from {object_key:?}", body.len());

        Ok(DownloadOutput::new(body, metadata))
    }
}

#[cfg(test)]
mod test {
    use super::Download;
    use crate::error::ErrorKind;
    use crate::operation::test_util::test_handle;
    use aws_sdk_s3::config::http::HttpResponse;
    use aws_sdk_s3::error::SdkError;
    use aws_sdk_s3::operation::get_object::{GetObjectError, GetObjectOutput};
    use aws_sdk_s3::primitives::ByteStream;
    use aws_smithy_mocks_experimental::{mock, mock_client, RuleMode};
    use bytes::Bytes;
    use test_common::{mock_client_with_stubbed_http_client, s3_error_response};

    #[tokio::test]
    async fn test_download_buffers_body_and_metadata() {
        let get_object = mock!(aws_sdk_s3::Client::get_object)
            .match_requests(|r| r.bucket() == Some("test-bucket") && r.key() == Some("a/b.txt"))
            .then_output(|| {
                GetObjectOutput::builder()
                    .body(ByteStream::from_static(b"hello world"))
                    .content_length(11)
                    .content_type("text/plain")
                    .e_tag("\"etag\"")
                    .build()
            });

        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&get_object]);
        let handle = test_handle(client, "test-bucket");

        let output = Download::orchestrate(handle, "a/b.txt").await.unwrap();
        assert_eq!(&Bytes::from_static(b"hello world"), output.body());
        assert_eq!(Some(11), output.content_length());
        assert_eq!(Some("text/plain"), output.metadata().content_type.as_deref());
        assert_eq!(Some("\"etag\""), output.metadata().e_tag.as_deref());
    }

    #[tokio::test]
    async fn test_download_empty_object() {
        let get_object = mock!(aws_sdk_s3::Client::get_object)
            .then_output(|| GetObjectOutput::builder().content_length(0).build());

        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&get_object]);
        let handle = test_handle(client, "test-bucket");

        let output = Download::orchestrate(handle, "empty").await.unwrap();
        assert!(output.body().is_empty());
        assert_eq!(Some(0), output.content_length());
    }

    #[tokio::test]
    async fn test_download_missing_key() {
        let get_object = mock!(aws_sdk_s3::Client::get_object)
            .match_requests(|r| r.key() == Some("nope"))
            .then_http_response(|| {
                s3_error_response(404, "NoSuchKey", "The specified key does not exist.")
            });

        let client = mock_client_with_stubbed_http_client!(
            aws_sdk_s3,
            RuleMode::Sequential,
            &[&get_object]
        );
        let handle = test_handle(client, "test-bucket");

        let err = Download::orchestrate(handle, "nope").await.unwrap_err();
        assert_eq!(&ErrorKind::NotFound, err.kind());
        assert_eq!(Some("NoSuchKey"), err.code());

        // the modeled SDK error is still reachable
        let source = err.into_source();
        let sdk_err = source
            .downcast_ref::<SdkError<GetObjectError, HttpResponse>>()
            .expect("original sdk error");
        assert!(matches!(
            sdk_err.as_service_error(),
            Some(GetObjectError::NoSuchKey(_))
        ));
    }
}
