/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use aws_sdk_s3::error::{ProvideErrorMetadata, SdkError};

/// A boxed error that is `Send` and `Sync`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by this library
///
/// Errors from Amazon S3 are never swallowed or rewritten. The original SDK error is always
/// available through [`std::error::Error::source`] (or [`Error::into_source`]) and the service
/// error code and message are copied onto the error as-is.
///
/// NOTE: Use [`aws_sdk_s3::error::DisplayErrorContext`] or similar to display
/// the entire error cause/source chain.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    code: Option<String>,
    message: Option<String>,
    source: BoxError,
}

/// General categories of storage errors.
///
/// These mirror the categories the backend itself reports.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Operation input could not be turned into a valid request
    InputInvalid,

    /// Required configuration values are missing
    ConfigurationInvalid,

    /// Resource not found (e.g. bucket or key)
    NotFound,

    /// Authentication or authorization failure
    AccessDenied,

    /// Any other error response returned by the service
    ServiceError,

    /// The request could not be dispatched or timed out
    TransportError,

    /// I/O errors (e.g. failure reading a response body)
    IOError,
}

impl Error {
    /// Creates a new storage [`Error`] from a known kind of error as well as an arbitrary error
    /// source.
    pub fn new<E>(kind: ErrorKind, err: E) -> Error
    where
        E: Into<BoxError>,
    {
        Error {
            kind,
            code: None,
            message: None,
            source: err.into(),
        }
    }

    #[cfg(any(test, feature = "test-util"))]
    pub(crate) fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Returns the corresponding [`ErrorKind`] for this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The error code returned by the service, if any (e.g. `NoSuchKey`).
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// The error message returned by the service, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Consumes the error, returning the underlying source error unmodified.
    pub fn into_source(self) -> BoxError {
        self.source
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::InputInvalid => write!(f, "invalid input")?,
            ErrorKind::ConfigurationInvalid => write!(f, "invalid configuration")?,
            ErrorKind::NotFound => write!(f, "resource not found")?,
            ErrorKind::AccessDenied => write!(f, "access denied")?,
            ErrorKind::ServiceError => write!(f, "service error")?,
            ErrorKind::TransportError => write!(f, "transport error")?,
            ErrorKind::IOError => write!(f, "I/O error")?,
        }
        if let Some(code) = &self.code {
            write!(f, " ({code})")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<aws_sdk_s3::primitives::ByteStreamError> for Error {
    fn from(value: aws_sdk_s3::primitives::ByteStreamError) -> Self {
        Self::new(ErrorKind::IOError, value)
    }
}

impl From<aws_smithy_types::error::operation::BuildError> for Error {
    fn from(value: aws_smithy_types::error::operation::BuildError) -> Self {
        Self::new(ErrorKind::InputInvalid, value)
    }
}

pub(crate) fn invalid_input<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::InputInvalid, err)
}

/// Map an S3 error code onto an [`ErrorKind`]
fn kind_from_code(code: Option<&str>) -> ErrorKind {
    match code {
        Some("NotFound" | "NoSuchKey" | "NoSuchBucket") => ErrorKind::NotFound,
        Some(
            "AccessDenied" | "InvalidAccessKeyId" | "SignatureDoesNotMatch" | "ExpiredToken"
            | "InvalidToken",
        ) => ErrorKind::AccessDenied,
        _ => ErrorKind::ServiceError,
    }
}

impl<E, R> From<SdkError<E, R>> for Error
where
    E: std::error::Error + ProvideErrorMetadata + Send + Sync + 'static,
    R: Send + Sync + fmt::Debug + 'static,
{
    fn from(value: SdkError<E, R>) -> Self {
        let kind = match &value {
            SdkError::ConstructionFailure(_) => ErrorKind::InputInvalid,
            SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => ErrorKind::TransportError,
            _ => kind_from_code(value.code()),
        };

        Error {
            kind,
            code: value.code().map(str::to_owned),
            message: value.message().map(str::to_owned),
            source: value.into(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Error, ErrorKind};
    use aws_sdk_s3::error::SdkError;
    use aws_sdk_s3::operation::get_object::GetObjectError;
    use aws_smithy_runtime_api::client::orchestrator::HttpResponse;
    use aws_smithy_runtime_api::http::StatusCode;
    use aws_smithy_types::body::SdkBody;
    use aws_smithy_types::error::ErrorMetadata;

    fn service_error(code: &str) -> SdkError<GetObjectError, HttpResponse> {
        SdkError::service_error(
            GetObjectError::generic(
                ErrorMetadata::builder()
                    .code(code)
                    .message("backend says no")
                    .build(),
            ),
            HttpResponse::new(StatusCode::try_from(400).unwrap(), SdkBody::empty()),
        )
    }

    #[test]
    fn test_error_kind_from_service_code() {
        let err: Error = service_error("NoSuchKey").into();
        assert_eq!(&ErrorKind::NotFound, err.kind());

        let err: Error = service_error("NoSuchBucket").into();
        assert_eq!(&ErrorKind::NotFound, err.kind());

        let err: Error = service_error("InvalidAccessKeyId").into();
        assert_eq!(&ErrorKind::AccessDenied, err.kind());

        let err: Error = service_error("SlowDown").into();
        assert_eq!(&ErrorKind::ServiceError, err.kind());
    }

    #[test]
    fn test_service_error_passed_through() {
        let err: Error = service_error("AccessDenied").into();
        assert_eq!(Some("AccessDenied"), err.code());
        assert_eq!(Some("backend says no"), err.message());
        assert_eq!("access denied (AccessDenied)", err.to_string());

        let source = err.into_source();
        let sdk_err = source
            .downcast_ref::<SdkError<GetObjectError, HttpResponse>>()
            .expect("original sdk error");
        assert!(matches!(sdk_err, SdkError::ServiceError(_)));
    }

    #[test]
    fn test_timeout_is_transport_error() {
        let err: SdkError<GetObjectError, HttpResponse> = SdkError::timeout_error("too slow");
        let err: Error = err.into();
        assert_eq!(&ErrorKind::TransportError, err.kind());
        assert_eq!(None, err.code());
    }
}
