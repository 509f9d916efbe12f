// Copyright (c) 2022 Sebastian Wiesner <sebastian@swsnr.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The C interface of this library.
//!
//! See `include/proxy_wrapper.h` for the corresponding C declarations.
//!
//! This module requires the `libproxy` feature.

#![allow(non_snake_case)]

use std::os::raw::c_char;

use crate::backend::LibProxy;
use crate::bridge;

/// Get the proxies to use for `url`, in the order to try them.
///
/// Return a `NULL`-terminated array of proxy strings such as `http://proxy:8080` or
/// `direct://`, or `NULL` if libproxy failed or found no configuration; treat `NULL` as a direct
/// connection.  The array and its strings are allocated by libproxy; release them with
/// [`FreeProxyList`] and nothing else.
///
/// This function may block on network I/O for PAC and WPAD discovery.
///
/// # Safety
///
/// `url` must point to a NUL-terminated string which stays valid during the call.
#[no_mangle]
pub unsafe extern "C" fn GetProxiesForURL(url: *const c_char) -> *mut *mut c_char {
    bridge::resolve_proxies(&LibProxy, url)
}

/// Release a proxy array returned from [`GetProxiesForURL`].
///
/// Do nothing if `proxies` is `NULL`.
///
/// # Safety
///
/// `proxies` must be `NULL` or a value returned from [`GetProxiesForURL`] which was not freed yet.
#[no_mangle]
pub unsafe extern "C" fn FreeProxyList(proxies: *mut *mut c_char) {
    bridge::free_proxy_list(&LibProxy, proxies)
}
