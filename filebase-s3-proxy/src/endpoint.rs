/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use aws_sdk_s3::config::endpoint::{
    DefaultResolver, Endpoint, EndpointFuture, Params, ResolveEndpoint,
};
use crate::error::{self, BoxError, Error};

/// Service identifier of the object storage service
pub const S3_SERVICE_ID: &str = "s3";

/// URL every S3 request is redirected to
pub const REDIRECT_ENDPOINT_URL: &str = "https://s3.filebase.com";

/// Region used to sign every redirected S3 request
pub const REDIRECT_SIGNING_REGION: &str = "us-east-1";

/// Network address and signing region to use for a service's requests.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ResolvedEndpoint {
    url: String,
    signing_region: String,
}

impl ResolvedEndpoint {
    /// Create a new resolved endpoint
    pub fn new(url: impl Into<String>, signing_region: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            signing_region: signing_region.into(),
        }
    }

    /// The endpoint URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The region used to compute request signatures
    pub fn signing_region(&self) -> &str {
        &self.signing_region
    }
}

/// The standard (service, region) to endpoint lookup consulted for services that are not
/// redirected.
///
/// Implemented for any `Fn(&str, &str) -> Result<ResolvedEndpoint, Error>`.
pub trait DefaultEndpoints: Send + Sync {
    /// Resolve the endpoint for `service` in `region`
    fn endpoint_for(&self, service: &str, region: &str) -> Result<ResolvedEndpoint, Error>;
}

impl<F> DefaultEndpoints for F
where
    F: Fn(&str, &str) -> Result<ResolvedEndpoint, Error> + Send + Sync,
{
    fn endpoint_for(&self, service: &str, region: &str) -> Result<ResolvedEndpoint, Error> {
        self(service, region)
    }
}

/// Resolve the endpoint for `service` in `region`.
///
/// The object storage service always resolves to [`REDIRECT_ENDPOINT_URL`] signed for
/// [`REDIRECT_SIGNING_REGION`], whatever region was requested. Every other service is
/// answered by `defaults`.
pub fn resolve_endpoint<D>(
    service: &str,
    region: &str,
    defaults: &D,
) -> Result<ResolvedEndpoint, Error>
where
    D: DefaultEndpoints + ?Sized,
{
    if service == S3_SERVICE_ID {
        return Ok(ResolvedEndpoint::new(
            REDIRECT_ENDPOINT_URL,
            REDIRECT_SIGNING_REGION,
        ));
    }

    defaults.endpoint_for(service, region)
}

// The SDK client only ever asks for S3 endpoints.
fn no_default_endpoint(service: &str, region: &str) -> Result<ResolvedEndpoint, Error> {
    Err(error::endpoint_resolution(format!(
        "no endpoint for service `{service}` in region `{region}`"
    )))
}

/// S3 endpoint resolver that redirects all requests via [`resolve_endpoint`].
///
/// The redirected URL and signing region are fed through the SDK's own S3 endpoint rules so
/// bucket placement (virtual-hosted vs. path style) and the SigV4 auth scheme are still
/// computed the usual way. The region the client was configured with is ignored.
pub struct RedirectResolver {
    rules: DefaultResolver,
}

impl RedirectResolver {
    /// Create a new resolver
    pub fn new() -> Self {
        Self {
            rules: DefaultResolver::new(),
        }
    }

    async fn redirect(&self, params: &Params) -> Result<Endpoint, BoxError> {
        let requested_region = params.region().unwrap_or_default();
        let target = resolve_endpoint(S3_SERVICE_ID, requested_region, &no_default_endpoint)?;

        let redirected = Params::builder()
            .set_bucket(params.bucket().map(str::to_owned))
            .set_force_path_style(params.force_path_style())
            .region(target.signing_region())
            .endpoint(target.url())
            .build()?;

        let endpoint = ResolveEndpoint::resolve_endpoint(&self.rules, &redirected).await?;
        tracing::debug!(
            requested_region,
            url = endpoint.url(),
            signing_region = target.signing_region(),
            "redirected S3 endpoint"
        );

        Ok(endpoint)
    }
}

impl Default for RedirectResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RedirectResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedirectResolver")
            .field("url", &REDIRECT_ENDPOINT_URL)
            .field("signing_region", &REDIRECT_SIGNING_REGION)
            .finish_non_exhaustive()
    }
}

impl ResolveEndpoint for RedirectResolver {
    fn resolve_endpoint<'a>(&'a self, params: &'a Params) -> EndpointFuture<'a> {
        EndpointFuture::new(self.redirect(params))
    }
}
