/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_config::BehaviorVersion;

use crate::config::Builder;
use crate::error::Error;
use crate::types::AddressingStyle;
use crate::Config;

/// Load [`Config`] from the environment.
///
/// Credentials, region and HTTP settings come from the standard AWS configuration chain
/// (environment variables, shared config files, etc.) unless explicitly overridden.
#[derive(Default, Debug)]
pub struct ConfigLoader {
    builder: Builder,
}

impl ConfigLoader {
    /// The bucket all operations are addressed to. Required.
    pub fn bucket(mut self, bucket: impl Into<String>) -> Self {
        self.builder = self.builder.bucket(bucket);
        self
    }

    /// Use static credentials instead of the ones found in the environment.
    pub fn static_credentials(
        mut self,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        self.builder = self.builder.access_key(access_key).secret_key(secret_key);
        self
    }

    /// Override the region found in the environment.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.builder = self.builder.region(region);
        self
    }

    /// How the bucket name is placed in request URLs.
    ///
    /// Default is [AddressingStyle::Auto]
    pub fn addressing_style(mut self, addressing_style: AddressingStyle) -> Self {
        self.builder = self.builder.addressing_style(addressing_style);
        self
    }

    /// Load the configuration
    ///
    /// If fields have been overridden during builder construction, the override values will be
    /// used. Otherwise, the values found in the environment are used.
    pub async fn load(self) -> Result<Config, Error> {
        let shared_config = aws_config::defaults(BehaviorVersion::latest()).load().await;
        tracing::debug!(
            region = ?shared_config.region(),
            has_credentials = shared_config.credentials_provider().is_some(),
            "loaded shared AWS configuration"
        );
        self.builder.sdk_config(shared_config).build()
    }
}
