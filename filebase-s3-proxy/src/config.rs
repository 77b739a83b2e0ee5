/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_smithy_runtime_api::client::http::{HttpClient, SharedHttpClient};
use aws_types::SdkConfig;

use crate::endpoint::RedirectResolver;
use crate::error::{self, Error};
use crate::types::AddressingStyle;

/// Load configuration from the shared AWS environment
pub mod loader;

/// Provider name attached to credentials given as plain access/secret keys
const STATIC_CREDENTIALS_PROVIDER: &str = "filebase-s3-proxy-static";

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Debug, Clone)]
pub struct Config {
    bucket: String,
    addressing_style: AddressingStyle,
    client: aws_sdk_s3::Client,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The bucket every operation is addressed to
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Returns the addressing style used for bucket placement
    pub fn addressing_style(&self) -> AddressingStyle {
        self.addressing_style
    }

    /// The Amazon S3 client instance that will be used to send requests.
    ///
    /// The client's endpoint resolver has already been replaced with a [`RedirectResolver`].
    pub fn client(&self) -> &aws_sdk_s3::Client {
        &self.client
    }
}

/// Fluent style builder for [Config]
#[derive(Debug, Clone, Default)]
pub struct Builder {
    access_key: Option<String>,
    secret_key: Option<String>,
    region: Option<String>,
    bucket: Option<String>,
    addressing_style: AddressingStyle,
    http_client: Option<SharedHttpClient>,
    sdk_config: Option<SdkConfig>,
    client: Option<aws_sdk_s3::Client>,
}

impl Builder {
    /// Access key of the static credentials to sign requests with.
    pub fn access_key(mut self, access_key: impl Into<String>) -> Self {
        self.access_key = Some(access_key.into());
        self
    }

    /// Secret key of the static credentials to sign requests with.
    pub fn secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = Some(secret_key.into());
        self
    }

    /// The region the underlying client is configured with.
    ///
    /// NOTE: requests are always sent to the redirect endpoint and signed for
    /// [`REDIRECT_SIGNING_REGION`](crate::endpoint::REDIRECT_SIGNING_REGION), this region only
    /// affects the rest of the SDK configuration.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// The bucket all operations are addressed to. Required.
    pub fn bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    /// How the bucket name is placed in request URLs.
    ///
    /// Default is [AddressingStyle::Auto]
    pub fn addressing_style(mut self, addressing_style: AddressingStyle) -> Self {
        self.addressing_style = addressing_style;
        self
    }

    /// Set the HTTP client used to send requests.
    ///
    /// Default is the SDK's default HTTP client.
    pub fn http_client(mut self, http_client: impl HttpClient + 'static) -> Self {
        self.http_client = Some(SharedHttpClient::new(http_client));
        self
    }

    /// Shared AWS configuration to start from (credentials, region, timeouts, etc).
    pub(crate) fn sdk_config(mut self, sdk_config: SdkConfig) -> Self {
        self.sdk_config = Some(sdk_config);
        self
    }

    /// Set an explicit S3 client to start from.
    ///
    /// The client's configuration is copied and its endpoint resolver replaced, the client
    /// itself is left untouched. A base client configured with `force_path_style(true)` keeps
    /// path style addressing under [`AddressingStyle::Auto`].
    pub fn client(mut self, client: aws_sdk_s3::Client) -> Self {
        self.client = Some(client);
        self
    }

    fn static_credentials(&mut self) -> Result<Option<Credentials>, Error> {
        match (self.access_key.take(), self.secret_key.take()) {
            (Some(access_key), Some(secret_key)) => Ok(Some(Credentials::new(
                access_key,
                secret_key,
                None,
                None,
                STATIC_CREDENTIALS_PROVIDER,
            ))),
            (None, None) => Ok(None),
            (Some(_), None) => Err(error::invalid_input(
                "an access key was set without a secret key",
            )),
            (None, Some(_)) => Err(error::invalid_input(
                "a secret key was set without an access key",
            )),
        }
    }

    /// Consumes the builder and constructs a [`Config`]
    ///
    /// Fails with [`ErrorKind::InputInvalid`](crate::error::ErrorKind::InputInvalid) if the
    /// bucket is missing, or if no base configuration was given and the region or
    /// credentials are missing. Values are otherwise passed to the SDK as is.
    pub fn build(mut self) -> Result<Config, Error> {
        let bucket = self
            .bucket
            .take()
            .ok_or_else(|| error::invalid_input("bucket is required"))?;
        let credentials = self.static_credentials()?;
        let has_base = self.client.is_some() || self.sdk_config.is_some();

        let mut s3_config = match (self.client, self.sdk_config) {
            (Some(client), _) => client.config().to_builder(),
            (None, Some(sdk_config)) => aws_sdk_s3::config::Builder::from(&sdk_config),
            (None, None) => {
                aws_sdk_s3::config::Builder::new().behavior_version(BehaviorVersion::latest())
            }
        };

        match credentials {
            Some(credentials) => s3_config = s3_config.credentials_provider(credentials),
            None if !has_base => return Err(error::invalid_input("credentials are required")),
            None => {}
        }

        match self.region {
            Some(region) => s3_config = s3_config.region(Region::new(region)),
            None if !has_base => return Err(error::invalid_input("region is required")),
            None => {}
        }

        if let Some(http_client) = self.http_client {
            s3_config = s3_config.http_client(http_client);
        }

        if self.addressing_style.force_path_style() {
            s3_config = s3_config.force_path_style(true);
        }

        let s3_config = s3_config
            .endpoint_resolver(RedirectResolver::new())
            .build();

        tracing::debug!(
            bucket = bucket.as_str(),
            addressing_style = ?self.addressing_style,
            region = ?s3_config.region(),
            "configured redirected S3 client"
        );

        Ok(Config {
            bucket,
            addressing_style: self.addressing_style,
            client: aws_sdk_s3::Client::from_conf(s3_config),
        })
    }
}
