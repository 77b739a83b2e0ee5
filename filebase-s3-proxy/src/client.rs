/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Error;
use crate::operation::get_object::{GetObjectError, GetObjectOutput};
use crate::operation::get_website_config::{GetBucketWebsiteError, GetBucketWebsiteOutput};
use crate::operation::OperationError;
use crate::Config;

/// Read-only access to a single bucket.
///
/// Implemented by [`Client`], which sends real requests, and by the in-memory
/// `FakeS3Proxy` available with the `test-util` feature.
#[async_trait]
pub trait S3Proxy: Send + Sync + fmt::Debug {
    /// Fetch the object stored under `key`.
    ///
    /// Errors are returned exactly as the underlying client reported them.
    async fn get(&self, key: &str) -> Result<GetObjectOutput, OperationError<GetObjectError>>;

    /// Fetch the bucket's website configuration.
    ///
    /// Errors are returned exactly as the underlying client reported them.
    async fn get_website_config(
        &self,
    ) -> Result<GetBucketWebsiteOutput, OperationError<GetBucketWebsiteError>>;
}

/// Storage accessor bound to one bucket on the redirected S3 endpoint.
///
/// Cloning is cheap, clones share the same underlying S3 client.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: crate::Config,
}

impl Handle {
    /// The bucket every request is addressed to
    pub(crate) fn bucket(&self) -> &str {
        self.config.bucket()
    }

    /// The S3 client to use for SDK operations
    pub(crate) fn client(&self) -> &aws_sdk_s3::Client {
        self.config.client()
    }
}

impl Client {
    /// Creates a new client from a config.
    pub fn new(config: Config) -> Client {
        tracing::debug!(bucket = config.bucket(), "created storage accessor");
        let handle = Arc::new(Handle { config });
        Client { handle }
    }

    /// Creates a new client from static credentials, a region and a bucket.
    ///
    /// No request is sent and the values are not validated, an unusable value surfaces as an
    /// error from the first operation.
    pub fn from_static(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        region: impl Into<String>,
        bucket: impl Into<String>,
    ) -> Result<Client, Error> {
        let config = Config::builder()
            .access_key(access_key)
            .secret_key(secret_key)
            .region(region)
            .bucket(bucket)
            .build()?;
        Ok(Client::new(config))
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// The bucket every operation is addressed to
    pub fn bucket(&self) -> &str {
        self.handle.bucket()
    }

    /// The redirected S3 client, for operations this type doesn't wrap.
    pub fn s3_client(&self) -> &aws_sdk_s3::Client {
        self.handle.client()
    }

    /// Fetch the object stored under `key` in the configured bucket.
    ///
    /// Sends a single `GetObject` request. The output, including its streaming body, is
    /// returned as is.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::error::Error;
    ///
    /// async fn read_index(client: &filebase_s3_proxy::Client) -> Result<(), Box<dyn Error>> {
    ///     let object = client.get("index.html").await?;
    ///     let data = object.body.collect().await?.into_bytes();
    ///     println!("read {} bytes", data.len());
    ///     Ok(())
    /// }
    /// ```
    pub async fn get(
        &self,
        key: impl Into<String>,
    ) -> Result<GetObjectOutput, OperationError<GetObjectError>> {
        crate::operation::get_object::orchestrate(&self.handle, key.into()).await
    }

    /// Fetch the website configuration of the configured bucket.
    ///
    /// Sends a single `GetBucketWebsite` request and returns its output as is.
    pub async fn get_website_config(
        &self,
    ) -> Result<GetBucketWebsiteOutput, OperationError<GetBucketWebsiteError>> {
        crate::operation::get_website_config::orchestrate(&self.handle).await
    }
}

#[async_trait]
impl S3Proxy for Client {
    async fn get(&self, key: &str) -> Result<GetObjectOutput, OperationError<GetObjectError>> {
        Client::get(self, key).await
    }

    async fn get_website_config(
        &self,
    ) -> Result<GetBucketWebsiteOutput, OperationError<GetBucketWebsiteError>> {
        Client::get_website_config(self).await
    }
}
