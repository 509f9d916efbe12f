// Copyright (c) 2022 Sebastian Wiesner <sebastian@swsnr.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Native proxy resolution libraries.
//!
//! [`Backend`] describes the four entry points of a factory-based resolver library such as
//! libproxy: create a factory, resolve a URL with it, free the factory, and free the returned
//! proxy list.  [`LibProxy`] binds these to libproxy itself, if the `libproxy` feature is
//! enabled.

use std::os::raw::c_char;
use std::ptr::NonNull;

/// A factory-based native proxy resolver library.
///
/// # Safety
///
/// Implementations must uphold the contract of libproxy's C API:
///
/// - [`Backend::get_proxies`] returns either `NULL` or a pointer to a `NULL`-terminated array
///   of pointers to NUL-terminated strings, all of which remain valid until the array is passed
///   to [`Backend::free_proxies`].
/// - [`Backend::free_proxies`] releases exactly such an array, including all strings in it.
/// - [`Backend::free_factory`] releases a factory returned from [`Backend::new_factory`].
pub unsafe trait Backend {
    /// The opaque factory type of this library.
    type Factory;

    /// Create a new factory, or return `NULL` if the library failed to create one.
    fn new_factory(&self) -> *mut Self::Factory;

    /// Resolve proxies for `url` with `factory`.
    ///
    /// Return a `NULL`-terminated proxy list owned by the caller, or `NULL`.
    ///
    /// # Safety
    ///
    /// `factory` must come from [`Backend::new_factory`] of this backend and must not be freed
    /// yet.  `url` is passed to the library as is; it may be `NULL` if the library accepts it.
    unsafe fn get_proxies(
        &self,
        factory: NonNull<Self::Factory>,
        url: *const c_char,
    ) -> *mut *mut c_char;

    /// Free `factory`.
    ///
    /// # Safety
    ///
    /// `factory` must come from [`Backend::new_factory`] of this backend, and must not be used
    /// afterwards.
    unsafe fn free_factory(&self, factory: NonNull<Self::Factory>);

    /// Free a proxy list returned from [`Backend::get_proxies`].
    ///
    /// # Safety
    ///
    /// `proxies` must come from [`Backend::get_proxies`] of this backend, and must not be used
    /// afterwards.
    unsafe fn free_proxies(&self, proxies: NonNull<*mut c_char>);
}

/// The libproxy library.
///
/// Every factory created through this backend reads the system proxy configuration afresh,
/// i.e. PAC scripts, WPAD, GSettings, KDE settings, the Windows registry, or proxy environment
/// variables, depending on how libproxy was built.
#[cfg(feature = "libproxy")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LibProxy;

#[cfg(feature = "libproxy")]
static_assertions::assert_impl_all!(LibProxy: Send, Sync);

#[cfg(feature = "libproxy")]
unsafe impl Backend for LibProxy {
    type Factory = crate::sys::pxProxyFactory;

    fn new_factory(&self) -> *mut Self::Factory {
        unsafe { crate::sys::px_proxy_factory_new() }
    }

    unsafe fn get_proxies(
        &self,
        factory: NonNull<Self::Factory>,
        url: *const c_char,
    ) -> *mut *mut c_char {
        crate::sys::px_proxy_factory_get_proxies(factory.as_ptr(), url)
    }

    unsafe fn free_factory(&self, factory: NonNull<Self::Factory>) {
        crate::sys::px_proxy_factory_free(factory.as_ptr())
    }

    unsafe fn free_proxies(&self, proxies: NonNull<*mut c_char>) {
        crate::sys::px_proxy_factory_free_proxies(proxies.as_ptr())
    }
}
