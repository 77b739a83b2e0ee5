/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::error::ProvideErrorMetadata;
use filebase_s3_proxy::types::AddressingStyle;
use test_common::{error_response, replay_client, test_client, website_response};

#[tokio::test]
async fn test_website_config_is_redirected() {
    let http_client = replay_client(vec![website_response("index.html", "error.html")]);
    let client = test_client(
        http_client.clone(),
        "ap-northeast-1",
        "site-bucket",
        AddressingStyle::Auto,
    );

    let output = client.get_website_config().await.unwrap();
    assert_eq!(
        Some("index.html"),
        output.index_document().map(|doc| doc.suffix())
    );
    assert_eq!(
        Some("error.html"),
        output.error_document().map(|doc| doc.key())
    );

    let requests = http_client.actual_requests().collect::<Vec<_>>();
    assert_eq!(1, requests.len());
    assert!(
        requests[0]
            .uri()
            .starts_with("https://site-bucket.s3.filebase.com/?website"),
        "{}",
        requests[0].uri()
    );
    let authorization = requests[0].headers().get("authorization").unwrap();
    assert!(
        authorization.contains("/us-east-1/s3/aws4_request"),
        "{authorization}"
    );
}

#[tokio::test]
async fn test_website_config_path_style() {
    let http_client = replay_client(vec![website_response("index.html", "404.html")]);
    let client = test_client(http_client.clone(), "us-east-1", "b1", AddressingStyle::Path);

    client.get_website_config().await.unwrap();

    let requests = http_client.actual_requests().collect::<Vec<_>>();
    assert!(
        requests[0].uri().starts_with("https://s3.filebase.com/b1"),
        "{}",
        requests[0].uri()
    );
    assert!(requests[0].uri().contains("website"));
}

#[tokio::test]
async fn test_missing_website_config_passes_through() {
    let http_client = replay_client(vec![error_response(
        404,
        "NoSuchWebsiteConfiguration",
        "The specified bucket does not have a website configuration",
    )]);
    let client = test_client(http_client.clone(), "us-east-1", "b1", AddressingStyle::Path);

    let err = client.get_website_config().await.unwrap_err();
    assert_eq!(Some("NoSuchWebsiteConfiguration"), err.code());
    assert_eq!(
        Some("The specified bucket does not have a website configuration"),
        err.message()
    );
    assert_eq!(1, http_client.actual_requests().count());
}

#[tokio::test]
async fn test_access_denied_passes_through() {
    let http_client = replay_client(vec![error_response(403, "AccessDenied", "Access Denied")]);
    let client = test_client(http_client, "us-east-1", "b1", AddressingStyle::Path);

    let err = client.get_website_config().await.unwrap_err();
    assert_eq!(Some("AccessDenied"), err.code());
    assert_eq!(
        403,
        err.raw_response().map(|r| r.status().as_u16()).unwrap()
    );
}
