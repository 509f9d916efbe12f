// Copyright (c) 2022 Sebastian Wiesner <sebastian@swsnr.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Owned proxy lists as returned by a [`Backend`].

use std::ffi::CStr;
use std::fmt;
use std::marker::PhantomData;
use std::os::raw::c_char;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr::NonNull;

use crate::backend::Backend;

/// A `NULL`-terminated list of proxy strings allocated by a [`Backend`].
///
/// Entries appear in the order in which a client should try them, e.g. `http://proxy:8080`
/// followed by `direct://`.  The list is freed with [`Backend::free_proxies`] when dropped,
/// never with the Rust allocator.
pub struct ProxyList<'b, B: Backend> {
    backend: &'b B,
    proxies: NonNull<*mut c_char>,
}

impl<'b, B: Backend> ProxyList<'b, B> {
    /// Take ownership of a raw proxy list returned by `backend`.
    ///
    /// Return `None` if `proxies` is `NULL`.
    ///
    /// # Safety
    ///
    /// `proxies` must be `NULL` or come from [`Backend::get_proxies`] of `backend`, and must not
    /// be freed elsewhere.
    pub unsafe fn from_raw(backend: &'b B, proxies: *mut *mut c_char) -> Option<Self> {
        NonNull::new(proxies).map(|proxies| Self { backend, proxies })
    }

    /// Give up ownership of the raw list.
    ///
    /// The caller becomes responsible for freeing the list with [`Backend::free_proxies`].
    pub fn into_raw(self) -> *mut *mut c_char {
        let proxies = self.proxies.as_ptr();
        std::mem::forget(self);
        proxies
    }

    /// Iterate over all proxies in this list.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.proxies.as_ptr(),
            _list: PhantomData,
        }
    }

    /// The number of proxies in this list.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether this list has no proxies at all.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Copy all proxies into owned strings.
    ///
    /// Invalid UTF-8 is replaced with `U+FFFD`.
    pub fn to_strings(&self) -> Vec<String> {
        self.iter()
            .map(|proxy| proxy.to_string_lossy().into_owned())
            .collect()
    }
}

impl<'b, B: Backend> Drop for ProxyList<'b, B> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            let _ = catch_unwind(AssertUnwindSafe(|| unsafe {
                self.backend.free_proxies(self.proxies)
            }));
        } else {
            unsafe { self.backend.free_proxies(self.proxies) }
        }
    }
}

impl<'b, B: Backend> fmt::Debug for ProxyList<'b, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, 'b, B: Backend> IntoIterator for &'a ProxyList<'b, B> {
    type Item = &'a CStr;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the entries of a [`ProxyList`].
#[derive(Debug)]
pub struct Iter<'a> {
    next: *const *mut c_char,
    _list: PhantomData<&'a CStr>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a CStr;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: The list is NULL-terminated and alive for 'a, per the Backend contract; we never
        // advance past the terminator.
        let entry = unsafe { *self.next };
        if entry.is_null() {
            None
        } else {
            self.next = unsafe { self.next.add(1) };
            Some(unsafe { CStr::from_ptr(entry) })
        }
    }
}
