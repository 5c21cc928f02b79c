/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::iter;

use aws_sdk_s3::config::http::HttpResponse;
use aws_sdk_s3::operation::copy_object::CopyObjectOutput;
use aws_sdk_s3::operation::get_object::GetObjectOutput;
use aws_sdk_s3::operation::put_object::PutObjectOutput;
use aws_sdk_s3::primitives::ByteStream;
use aws_smithy_mocks_experimental::{mock, Rule, RuleMode};
use aws_smithy_runtime_api::http::StatusCode;
use aws_smithy_types::body::SdkBody;
use bytes::Bytes;

#[doc(hidden)]
pub mod __private {
    pub use aws_smithy_mocks_experimental;
    pub use aws_smithy_runtime;
    pub use http_02x;
}

/// Mock client whose HTTP layer answers every request with an empty `200 OK`.
///
/// Rules using `then_http_response` need a transmitted request to replace, so they only work
/// against this client; `then_output` rules behave the same as with `mock_client!`.
#[macro_export]
macro_rules! mock_client_with_stubbed_http_client {
    ($aws_crate: ident, $rules: expr) => {
        $crate::mock_client_with_stubbed_http_client!(
            $aws_crate,
            $crate::__private::aws_smithy_mocks_experimental::RuleMode::Sequential,
            $rules
        )
    };
    ($aws_crate: ident, $rule_mode: expr, $rules: expr) => {{
        use $crate::__private::aws_smithy_mocks_experimental::mock_client;
        let client = mock_client!($aws_crate, $rule_mode, $rules);
        $aws_crate::Client::from_conf(
            client
                .config()
                .to_builder()
                .http_client(
                    $crate::__private::aws_smithy_runtime::client::http::test_util::infallible_client_fn(
                        |_req| {
                            $crate::__private::http_02x::Response::builder()
                                .status(200)
                                .body("")
                                .unwrap()
                        },
                    ),
                )
                .build(),
        )
    }};
}

/// Random alphanumeric payload of `size` bytes
pub fn rand_data(size: usize) -> Bytes {
    iter::repeat_with(fastrand::alphanumeric)
        .take(size)
        .map(|x| x as u8)
        .collect::<Vec<_>>()
        .into()
}

/// Mock S3 client that answers with the first matching rule
pub fn mock_s3_client(rules: &[&Rule]) -> aws_sdk_s3::Client {
    mock_client_with_stubbed_http_client!(aws_sdk_s3, RuleMode::MatchAny, rules)
}

/// Amazon S3 XML error response with the given status, error code and message
pub fn s3_error_response(status: u16, code: &str, message: &str) -> HttpResponse {
    let body = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <Error><Code>{code}</Code><Message>{message}</Message>\
         <RequestId>4442587FB7D0A2F9</RequestId></Error>"
    );
    HttpResponse::new(StatusCode::try_from(status).unwrap(), SdkBody::from(body))
}

/// Rule failing every `GetObject` of `key` with an S3 error response
pub fn get_object_error_rule(
    key: &'static str,
    status: u16,
    code: &'static str,
    message: &'static str,
) -> Rule {
    mock!(aws_sdk_s3::Client::get_object)
        .match_requests(move |r| r.key() == Some(key))
        .then_http_response(move || s3_error_response(status, code, message))
}

/// Rule accepting a `PutObject` of exactly `content_length` bytes to `bucket`/`key`
pub fn put_object_rule(bucket: &'static str, key: &'static str, content_length: i64) -> Rule {
    mock!(aws_sdk_s3::Client::put_object)
        .match_requests(move |r| {
            r.bucket() == Some(bucket)
                && r.key() == Some(key)
                && r.content_length() == Some(content_length)
        })
        .then_output(|| PutObjectOutput::builder().e_tag("\"mock-etag\"").build())
}

/// Rule serving `data` for a `GetObject` of `bucket`/`key`
pub fn get_object_rule(bucket: &'static str, key: &'static str, data: Bytes) -> Rule {
    mock!(aws_sdk_s3::Client::get_object)
        .match_requests(move |r| r.bucket() == Some(bucket) && r.key() == Some(key))
        .then_output(move || {
            GetObjectOutput::builder()
                .body(ByteStream::from(data.clone()))
                .content_length(data.len() as i64)
                .build()
        })
}

/// Rule accepting a `CopyObject` with the exact `copy_source` into `bucket`/`key`
pub fn copy_object_rule(
    copy_source: &'static str,
    bucket: &'static str,
    key: &'static str,
) -> Rule {
    mock!(aws_sdk_s3::Client::copy_object)
        .match_requests(move |r| {
            r.copy_source() == Some(copy_source) && r.bucket() == Some(bucket) && r.key() == Some(key)
        })
        .then_output(|| CopyObjectOutput::builder().build())
}
