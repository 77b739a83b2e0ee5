/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

/// A boxed error that is `Send` and `Sync`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by this library while building a client or resolving an endpoint.
///
/// Errors from the S3 operations themselves are never wrapped in this type, they are
/// returned exactly as the SDK produced them.
///
/// NOTE: Use [`aws_smithy_types::error::display::DisplayErrorContext`] or similar to display
/// the entire error cause/source chain.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: BoxError,
}

/// General categories of errors.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Configuration input validation issues (e.g. a required setting is missing)
    InputInvalid,

    /// No endpoint could be resolved for a service and region
    EndpointResolution,
}

impl Error {
    /// Creates a new [`Error`] from a known kind of error as well as an arbitrary error
    /// source.
    pub fn new<E>(kind: ErrorKind, err: E) -> Error
    where
        E: Into<BoxError>,
    {
        Error {
            kind,
            source: err.into(),
        }
    }

    /// Returns the corresponding [`ErrorKind`] for this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::InputInvalid => write!(f, "invalid input"),
            ErrorKind::EndpointResolution => write!(f, "failed to resolve endpoint"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<aws_smithy_types::error::operation::BuildError> for Error {
    fn from(value: aws_smithy_types::error::operation::BuildError) -> Self {
        Self::new(ErrorKind::InputInvalid, value)
    }
}

impl From<aws_sdk_s3::config::endpoint::InvalidParams> for Error {
    fn from(value: aws_sdk_s3::config::endpoint::InvalidParams) -> Self {
        Self::new(ErrorKind::EndpointResolution, value)
    }
}

pub(crate) fn invalid_input<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::InputInvalid, err)
}

pub(crate) fn endpoint_resolution<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::EndpointResolution, err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_smithy_types::error::display::DisplayErrorContext;

    #[test]
    fn test_display_includes_source() {
        let err = invalid_input("bucket is required");
        assert_eq!(&ErrorKind::InputInvalid, err.kind());

        let rendered = format!("{}", DisplayErrorContext(&err));
        assert!(rendered.contains("invalid input"), "{rendered}");
        assert!(rendered.contains("bucket is required"), "{rendered}");
    }
}
