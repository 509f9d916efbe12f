// Copyright (c) 2022 Sebastian Wiesner <sebastian@swsnr.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Raw declarations for the libproxy C API.
//!
//! See `proxy.h` of libproxy for the upstream documentation of these functions.

use std::os::raw::c_char;

/// Opaque libproxy factory.
#[allow(non_camel_case_types)]
#[repr(C)]
pub struct pxProxyFactory {
    _private: [u8; 0],
}

#[link(name = "proxy")]
extern "C" {
    /// Create a new factory, or return `NULL` on failure.
    pub fn px_proxy_factory_new() -> *mut pxProxyFactory;

    /// Get a `NULL`-terminated list of proxies for `url`, or `NULL` on failure.
    ///
    /// The list and every string in it are allocated by libproxy.
    pub fn px_proxy_factory_get_proxies(
        factory: *mut pxProxyFactory,
        url: *const c_char,
    ) -> *mut *mut c_char;

    /// Free a list returned by `px_proxy_factory_get_proxies`.
    pub fn px_proxy_factory_free_proxies(proxies: *mut *mut c_char);

    /// Free a factory.
    pub fn px_proxy_factory_free(factory: *mut pxProxyFactory);
}
