// Copyright (c) 2022 Sebastian Wiesner <sebastian@swsnr.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![deny(missing_docs)]
#![warn(clippy::all)]

//! Resolve system proxies through libproxy, from C and from Rust.
//!
//! ## C interface
//!
//! With the `libproxy` feature this crate builds a C library with two functions, declared in
//! `include/proxy_wrapper.h`:
//!
//! - `GetProxiesForURL` resolves the proxies for a URL with a fresh libproxy factory and returns
//!   a `NULL`-terminated list of proxy strings, or `NULL` on any failure.
//! - `FreeProxyList` releases such a list with libproxy's own allocator.
//!
//! No panic and no failure ever crosses this interface as anything but `NULL`.
//!
//! ## Rust interface
//!
//! - [`bridge`] implements the C interface generically over any [`Backend`], and offers
//!   [`bridge::resolve`] which returns an owned [`ProxyList`].
//! - [`LibProxyResolver`] implements [`ProxyResolver`] on top of the bridge, for use with HTTP
//!   clients such as `reqwest`.
//! - [`default_resolver`] returns the best resolver available in this build.

pub mod backend;
pub mod bridge;
mod error;
mod factory;
#[cfg(feature = "libproxy")]
pub mod ffi;
mod list;
mod noproxy;
mod resolver;
#[cfg(feature = "libproxy")]
mod sys;
#[cfg(test)]
mod testing;
mod types;

pub use backend::Backend;
#[cfg(feature = "libproxy")]
pub use backend::LibProxy;
pub use error::Error;
pub use factory::Factory;
pub use list::{Iter, ProxyList};
pub use noproxy::NoProxy;
pub use resolver::LibProxyResolver;
pub use types::ProxyResolver;

/// Get the default proxy resolver of this build.
///
/// Return a [`LibProxyResolver`] if the `libproxy` feature is enabled, or [`NoProxy`] otherwise.
pub fn default_resolver() -> Box<dyn ProxyResolver + Send + Sync> {
    #[cfg(feature = "libproxy")]
    {
        Box::new(LibProxyResolver::new())
    }
    #[cfg(not(feature = "libproxy"))]
    {
        Box::new(NoProxy)
    }
}
