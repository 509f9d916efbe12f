// Copyright (c) 2022 Sebastian Wiesner <sebastian@swsnr.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Resolve proxies across a foreign function boundary.
//!
//! Every call creates a fresh factory, resolves proxies with it, and frees the factory again
//! before returning.  Nothing is cached between calls.  Failures of any kind, including panics,
//! collapse into `NULL`; a caller which receives `NULL` should connect directly.
//!
//! These functions never log, because they run inside foreign hosts which have no logger.

use std::ffi::CStr;
use std::os::raw::c_char;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr::NonNull;

use crate::backend::Backend;
use crate::factory::Factory;
use crate::list::ProxyList;

/// Resolve proxies for `url` with a fresh factory of `backend`.
///
/// Return a `NULL`-terminated list of proxies in the order to try them, or `NULL` if the factory
/// could not be created, if the backend found no proxies, or if anything panicked.  The caller
/// owns the list and must free it with [`free_proxy_list`] on the same backend.
///
/// `url` goes to the backend unchanged; this function does not validate it.
///
/// # Safety
///
/// `url` must be acceptable to the backend; for libproxy it must point to a NUL-terminated
/// string which stays valid during the call.
pub unsafe fn resolve_proxies<B: Backend>(backend: &B, url: *const c_char) -> *mut *mut c_char {
    catch_unwind(AssertUnwindSafe(|| {
        let factory = match Factory::new(backend) {
            Some(factory) => factory,
            None => return std::ptr::null_mut(),
        };
        // The list must have an owner while the factory is freed, so that it is freed in turn if
        // freeing the factory panics.
        let proxies = ProxyList::from_raw(backend, factory.get_proxies(url));
        drop(factory);
        proxies.map_or(std::ptr::null_mut(), ProxyList::into_raw)
    }))
    .unwrap_or(std::ptr::null_mut())
}

/// Free a proxy list returned from [`resolve_proxies`].
///
/// Do nothing if `proxies` is `NULL`.  Panics of the backend are swallowed.
///
/// # Safety
///
/// `proxies` must be `NULL` or come from [`resolve_proxies`] with the same backend, and must not
/// be used afterwards.
pub unsafe fn free_proxy_list<B: Backend>(backend: &B, proxies: *mut *mut c_char) {
    if let Some(proxies) = NonNull::new(proxies) {
        // There is nothing left to report a panic to; the list is lost either way.
        let _ = catch_unwind(AssertUnwindSafe(|| backend.free_proxies(proxies)));
    }
}

/// Resolve proxies for `url` with a fresh factory of `backend`.
///
/// Like [`resolve_proxies`], but return an owned list which frees itself when dropped.
pub fn resolve<'b, B: Backend>(backend: &'b B, url: &CStr) -> Option<ProxyList<'b, B>> {
    unsafe {
        let proxies = resolve_proxies(backend, url.as_ptr());
        ProxyList::from_raw(backend, proxies)
    }
}
