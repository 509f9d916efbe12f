// Copyright (c) 2022 Sebastian Wiesner <sebastian@swsnr.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::ffi::NulError;

use url::Url;

/// Errors of the Rust API of this crate.
///
/// The C interface never returns these; it collapses all failures into `NULL`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The URL to resolve proxies for contains a NUL byte.
    #[error("Request URL contains a NUL byte: {0}")]
    InvalidRequestUrl(#[from] NulError),
    /// The backend returned no proxy list at all.
    #[error("Failed to resolve proxies for URL {url}")]
    ResolutionFailed {
        /// The URL to resolve proxies for.
        url: Url,
    },
    /// The backend returned a proxy which is not a valid URL.
    #[error("Failed to parse proxy URL {proxy}: {source}")]
    InvalidProxyUrl {
        /// The proxy returned by the backend.
        proxy: String,
        /// Why the proxy is not a valid URL.
        source: url::ParseError,
    },
}

static_assertions::assert_impl_all!(Error: Send, Sync);
