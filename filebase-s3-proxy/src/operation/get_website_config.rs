/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::error::DisplayErrorContext;
use tracing::Instrument;

use crate::client::Handle;
use crate::operation::OperationError;

pub use aws_sdk_s3::operation::get_bucket_website::{
    GetBucketWebsiteError, GetBucketWebsiteOutput,
};

/// Send a single `GetBucketWebsite` request for the handle's bucket.
pub(crate) async fn orchestrate(
    handle: &Handle,
) -> Result<GetBucketWebsiteOutput, OperationError<GetBucketWebsiteError>> {
    let span = tracing::debug_span!("get-website-config", bucket = handle.bucket());

    async move {
        let result = handle
            .client()
            .get_bucket_website()
            .bucket(handle.bucket())
            .send()
            .await;

        if let Err(err) = &result {
            tracing::debug!("get website configuration failed: {}", DisplayErrorContext(err));
        }

        result
    }
    .instrument(span)
    .await
}
