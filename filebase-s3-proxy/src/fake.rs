/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use aws_sdk_s3::config::http::HttpResponse;
use aws_sdk_s3::error::{ErrorMetadata, SdkError};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::error::NoSuchKey;
use aws_smithy_runtime_api::http::StatusCode;
use aws_smithy_types::body::SdkBody;
use bytes::Bytes;

use crate::client::S3Proxy;
use crate::operation::get_object::{GetObjectError, GetObjectOutput};
use crate::operation::get_website_config::{GetBucketWebsiteError, GetBucketWebsiteOutput};
use crate::operation::OperationError;

/// In-memory [`S3Proxy`] holding a fixed set of objects and an optional website
/// configuration.
///
/// Failures mirror what S3 reports: a missing key is a `NoSuchKey` service error, a missing
/// website configuration is a `NoSuchWebsiteConfiguration` service error.
#[derive(Debug, Default)]
pub struct FakeS3Proxy {
    bucket: String,
    objects: HashMap<String, Bytes>,
    website: Option<GetBucketWebsiteOutput>,
    requested_keys: Mutex<Vec<String>>,
}

impl FakeS3Proxy {
    /// Create an empty fake for `bucket`
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Default::default()
        }
    }

    /// Store `data` under `key`
    pub fn with_object(mut self, key: impl Into<String>, data: impl Into<Bytes>) -> Self {
        self.objects.insert(key.into(), data.into());
        self
    }

    /// Set the website configuration returned by
    /// [`get_website_config`](S3Proxy::get_website_config)
    pub fn with_website_config(mut self, website: GetBucketWebsiteOutput) -> Self {
        self.website = Some(website);
        self
    }

    /// The bucket this fake stands in for
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Keys passed to [`get`](S3Proxy::get), in call order
    pub fn requested_keys(&self) -> Vec<String> {
        self.requested_keys
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

fn not_found<E>(err: E) -> OperationError<E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    match StatusCode::try_from(404) {
        Ok(status) => SdkError::service_error(err, HttpResponse::new(status, SdkBody::empty())),
        Err(status_err) => SdkError::construction_failure(status_err),
    }
}

#[async_trait]
impl S3Proxy for FakeS3Proxy {
    async fn get(&self, key: &str) -> Result<GetObjectOutput, OperationError<GetObjectError>> {
        self.requested_keys
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(key.to_owned());

        match self.objects.get(key) {
            Some(data) => Ok(GetObjectOutput::builder()
                .content_length(data.len() as i64)
                .body(ByteStream::from(data.clone()))
                .build()),
            None => {
                let message = format!("no object `{key}` in bucket `{}`", self.bucket);
                Err(not_found(GetObjectError::NoSuchKey(
                    NoSuchKey::builder()
                        .message(message.clone())
                        .meta(
                            ErrorMetadata::builder()
                                .code("NoSuchKey")
                                .message(message)
                                .build(),
                        )
                        .build(),
                )))
            }
        }
    }

    async fn get_website_config(
        &self,
    ) -> Result<GetBucketWebsiteOutput, OperationError<GetBucketWebsiteError>> {
        match &self.website {
            Some(website) => Ok(website.clone()),
            None => Err(not_found(GetBucketWebsiteError::generic(
                ErrorMetadata::builder()
                    .code("NoSuchWebsiteConfiguration")
                    .message(format!(
                        "bucket `{}` does not have a website configuration",
                        self.bucket
                    ))
                    .build(),
            ))),
        }
    }
}
