/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::operation::get_object::GetObjectOutput;
use aws_sdk_s3::operation::RequestId;
use aws_sdk_s3::operation::RequestIdExt;

/// Object metadata other than the body returned by `GetObject`
///
/// Values are copied from the response unchanged.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct ResponseMetadata {
    /// Size of the body in bytes
    pub content_length: Option<i64>,
    /// The MIME type of the object
    pub content_type: Option<String>,
    /// Entity tag of the object
    pub e_tag: Option<String>,
    /// Creation date of the object
    pub last_modified: Option<::aws_smithy_types::DateTime>,
    /// Version of the object, if versioning is enabled
    pub version_id: Option<String>,
    /// Caching behavior of the object
    pub cache_control: Option<String>,
    /// Presentational information for the object
    pub content_disposition: Option<String>,
    /// Content encodings applied to the object
    pub content_encoding: Option<String>,
    /// Language the content is in
    pub content_language: Option<String>,
    /// Raw `Expires` header value
    pub expires_string: Option<String>,
    /// User-defined metadata
    pub metadata: Option<::std::collections::HashMap<String, String>>,
    /// Storage class of the object
    pub storage_class: Option<aws_sdk_s3::types::StorageClass>,
    /// Server-side encryption algorithm used when storing the object
    pub server_side_encryption: Option<aws_sdk_s3::types::ServerSideEncryption>,

    /// The request_id of the `GetObject` request
    pub request_id: Option<String>,
    /// The extended_request_id of the `GetObject` request
    pub extended_request_id: Option<String>,
}

impl From<&GetObjectOutput> for ResponseMetadata {
    fn from(value: &GetObjectOutput) -> Self {
        Self {
            content_length: value.content_length,
            content_type: value.content_type.clone(),
            e_tag: value.e_tag.clone(),
            last_modified: value.last_modified,
            version_id: value.version_id.clone(),
            cache_control: value.cache_control.clone(),
            content_disposition: value.content_disposition.clone(),
            content_encoding: value.content_encoding.clone(),
            content_language: value.content_language.clone(),
            expires_string: value.expires_string.clone(),
            metadata: value.metadata.clone(),
            storage_class: value.storage_class.clone(),
            server_side_encryption: value.server_side_encryption.clone(),
            request_id: value.request_id().map(|s| s.to_string()),
            extended_request_id: value.extended_request_id().map(|s| s.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ResponseMetadata;
    use aws_sdk_s3::operation::get_object::GetObjectOutput;
    use aws_sdk_s3::types::StorageClass;

    #[test]
    fn test_metadata_copied_from_response() {
        let output = GetObjectOutput::builder()
            .content_length(42)
            .content_type("image/png")
            .version_id("v1")
            .metadata("owner", "jb")
            .storage_class(StorageClass::Standard)
            .build();

        let meta = ResponseMetadata::from(&output);
        assert_eq!(Some(42), meta.content_length);
        assert_eq!(Some("image/png"), meta.content_type.as_deref());
        assert_eq!(Some("v1"), meta.version_id.as_deref());
        assert_eq!(
            Some("jb"),
            meta.metadata
                .as_ref()
                .and_then(|m| m.get("owner"))
                .map(String::as_str)
        );
        assert_eq!(Some(StorageClass::Standard), meta.storage_class);
        assert_eq!(None, meta.e_tag);
    }
}
