/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// How the bucket name is placed in request URLs.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum AddressingStyle {
    /// Use virtual-hosted style (`https://{bucket}.s3.filebase.com/{key}`) whenever the
    /// bucket name is DNS compatible, falling back to path style otherwise. A base S3 client
    /// that already forces path style keeps doing so.
    #[default]
    Auto,

    /// Always use path style (`https://s3.filebase.com/{bucket}/{key}`).
    Path,
}

impl AddressingStyle {
    /// Whether path style addressing is forced
    pub(crate) fn force_path_style(&self) -> bool {
        matches!(self, AddressingStyle::Path)
    }
}
