// Copyright (c) 2022 Sebastian Wiesner <sebastian@swsnr.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Get system proxies from libproxy.
//!
//! libproxy supports PAC URLs, WPAD and DHCP discovery, as well as the proxy settings of all
//! major desktop environments and of Windows.

use std::ffi::CString;

use log::{debug, log, Level};
use url::Url;

use crate::backend::Backend;
use crate::bridge;
use crate::error::Error;

/// A proxy resolver on top of a factory-based [`Backend`], normally [`crate::backend::LibProxy`].
#[derive(Debug, Default, Clone)]
pub struct LibProxyResolver<B> {
    backend: B,
}

impl<B: Backend> LibProxyResolver<B> {
    /// Resolve proxies with the given `backend`.
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// Get all proxies for `url`, in the order to try them.
    ///
    /// Return the proxies as returned by the backend, e.g. `http://proxy:8080` or `direct://`,
    /// or an error if the backend failed to resolve proxies.
    pub fn proxies(&self, url: &Url) -> Result<Vec<String>, Error> {
        // We always construct a new factory per call, because libproxy factories are not
        // thread-safe, so this struct wouldn't be Send + Sync otherwise.
        let request = CString::new(url.as_str())?;
        bridge::resolve(&self.backend, &request)
            .map(|proxies| proxies.to_strings())
            .ok_or_else(|| Error::ResolutionFailed { url: url.clone() })
    }

    /// Lookup the proxy for the given URL.
    ///
    /// Return the proxy to use, or `None` for a direct connection.  Only consider the first proxy
    /// the backend returns.  If resolution fails or the first proxy is not a valid URL return the
    /// corresponding error.
    pub fn lookup(&self, url: &Url) -> Result<Option<Url>, Error> {
        let proxies = self.proxies(url)?;
        match proxies.first() {
            None => Ok(None),
            Some(proxy) if proxy == "direct://" => Ok(None),
            Some(proxy) => Url::parse(proxy)
                .map(Some)
                .map_err(|source| Error::InvalidProxyUrl {
                    proxy: proxy.clone(),
                    source,
                }),
        }
    }
}

#[cfg(feature = "libproxy")]
impl LibProxyResolver<crate::backend::LibProxy> {
    /// Resolve proxies with libproxy.
    pub fn new() -> Self {
        Self::with_backend(crate::backend::LibProxy)
    }
}

#[cfg(feature = "libproxy")]
static_assertions::assert_impl_all!(LibProxyResolver<crate::backend::LibProxy>: Send, Sync);

/// How loudly to log `error` before falling back to a direct connection.
///
/// Having no proxy list at all is the ordinary outcome without proxy configuration.
fn failure_level(error: &Error) -> Level {
    match error {
        Error::ResolutionFailed { .. } => Level::Debug,
        Error::InvalidRequestUrl(_) | Error::InvalidProxyUrl { .. } => Level::Error,
    }
}

impl<B: Backend> crate::types::ProxyResolver for LibProxyResolver<B> {
    fn for_url(&self, url: &Url) -> Option<Url> {
        self.lookup(url)
            .unwrap_or_else(|error| {
                log!(
                    failure_level(&error),
                    "Failed to obtain proxy for URL {}: {}",
                    url,
                    error
                );
                None
            })
            .map(|proxy| {
                debug!("Obtained proxy {} for URL {} from libproxy", proxy, url);
                proxy
            })
    }
}
