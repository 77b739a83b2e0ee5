/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::config::http::HttpResponse;

/// Types for the single object read operation
pub mod get_object;

/// Types for the bucket website configuration read operation
pub mod get_website_config;

/// Error returned by an operation: the SDK's error, unchanged.
pub type OperationError<E> = aws_sdk_s3::error::SdkError<E, HttpResponse>;
