/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::error::DisplayErrorContext;
use tracing::Instrument;

use crate::client::Handle;
use crate::operation::OperationError;

pub use aws_sdk_s3::operation::get_object::{GetObjectError, GetObjectOutput};

/// Send a single `GetObject` request for `key` in the handle's bucket.
pub(crate) async fn orchestrate(
    handle: &Handle,
    key: String,
) -> Result<GetObjectOutput, OperationError<GetObjectError>> {
    let span = tracing::debug_span!("get-object", bucket = handle.bucket(), key = key.as_str());

    async move {
        let result = handle
            .client()
            .get_object()
            .bucket(handle.bucket())
            .key(key)
            .send()
            .await;

        match &result {
            Ok(output) => tracing::trace!(
                content_length = ?output.content_length(),
                e_tag = ?output.e_tag(),
                "object fetched"
            ),
            Err(err) => tracing::debug!("get object failed: {}", DisplayErrorContext(err)),
        }

        result
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use crate::{Client, Config};
    use aws_sdk_s3::error::ErrorMetadata;
    use aws_sdk_s3::operation::get_object::{GetObjectError, GetObjectOutput};
    use aws_sdk_s3::primitives::ByteStream;
    use aws_sdk_s3::types::error::NoSuchKey;
    use aws_smithy_mocks_experimental::{mock, RuleMode};
    use aws_smithy_runtime::test_util::capture_test_logs::capture_test_logs;
    use test_common::mock_client_with_stubbed_http_client;

    fn accessor(s3_client: aws_sdk_s3::Client, bucket: &str) -> Client {
        let config = Config::builder()
            .client(s3_client)
            .bucket(bucket)
            .build()
            .unwrap();
        Client::new(config)
    }

    #[tokio::test]
    async fn test_get_addresses_configured_bucket() {
        let b1 = mock!(aws_sdk_s3::Client::get_object)
            .match_requests(|r| r.bucket() == Some("b1") && r.key() == Some("k"))
            .then_output(|| {
                GetObjectOutput::builder()
                    .body(ByteStream::from_static(b"from b1"))
                    .build()
            });
        let b2 = mock!(aws_sdk_s3::Client::get_object)
            .match_requests(|r| r.bucket() == Some("b2") && r.key() == Some("k"))
            .then_output(|| {
                GetObjectOutput::builder()
                    .body(ByteStream::from_static(b"from b2"))
                    .build()
            });
        let s3_client =
            mock_client_with_stubbed_http_client!(aws_sdk_s3, RuleMode::MatchAny, &[&b1, &b2]);

        let one = accessor(s3_client.clone(), "b1");
        let two = accessor(s3_client, "b2");

        let (from_one, from_two) = tokio::join!(one.get("k"), two.get("k"));
        let from_one = from_one.unwrap().body.collect().await.unwrap().into_bytes();
        let from_two = from_two.unwrap().body.collect().await.unwrap().into_bytes();

        assert_eq!(&b"from b1"[..], &from_one[..]);
        assert_eq!(&b"from b2"[..], &from_two[..]);
        assert_eq!(1, b1.num_calls());
        assert_eq!(1, b2.num_calls());
    }

    #[tokio::test]
    async fn test_get_not_found_is_unchanged() {
        let not_found = mock!(aws_sdk_s3::Client::get_object)
            .match_requests(|r| r.key() == Some("missing"))
            .then_error(|| {
                GetObjectError::NoSuchKey(
                    NoSuchKey::builder()
                        .message("The specified key does not exist.")
                        .meta(ErrorMetadata::builder().code("NoSuchKey").build())
                        .build(),
                )
            });
        let s3_client = mock_client_with_stubbed_http_client!(aws_sdk_s3, &[&not_found]);

        let err = accessor(s3_client, "b1").get("missing").await.unwrap_err();
        let service_err = err.into_service_error();
        assert!(service_err.is_no_such_key());
        assert_eq!(Some("NoSuchKey"), service_err.meta().code());
    }

    #[tokio::test]
    async fn test_get_logs_redirected_endpoint() {
        let (_guard, rx) = capture_test_logs();
        let rule = mock!(aws_sdk_s3::Client::get_object)
            .then_output(|| GetObjectOutput::builder().build());
        let s3_client = mock_client_with_stubbed_http_client!(aws_sdk_s3, &[&rule]);

        accessor(s3_client, "test-bucket")
            .get("test-key")
            .await
            .unwrap();

        let logs = rx.contents();
        assert!(logs.contains("redirected S3 endpoint"), "{logs}");
        assert!(logs.contains("test-bucket.s3.filebase.com"), "{logs}");
    }
}
