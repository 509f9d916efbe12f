// Copyright (c) 2022 Sebastian Wiesner <sebastian@swsnr.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scoped ownership of a native proxy factory.

use std::os::raw::c_char;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr::NonNull;

use crate::backend::Backend;

/// A factory of a [`Backend`], freed when dropped.
///
/// The factory is bound to the backend that created it, and can neither be sent to nor shared
/// with other threads, because native factories are not thread-safe.
pub struct Factory<'b, B: Backend> {
    backend: &'b B,
    handle: NonNull<B::Factory>,
}

impl<'b, B: Backend> Factory<'b, B> {
    /// Create a new factory with `backend`.
    ///
    /// Return `None` if the backend failed to create a factory.
    pub fn new(backend: &'b B) -> Option<Self> {
        NonNull::new(backend.new_factory()).map(|handle| Self { backend, handle })
    }

    /// Resolve proxies for `url`.
    ///
    /// Return the raw proxy list of the backend, owned by the caller, or `NULL` if the backend
    /// found nothing or failed.
    ///
    /// # Safety
    ///
    /// `url` must be acceptable to the backend, i.e. for libproxy a valid pointer to a
    /// NUL-terminated string.
    pub unsafe fn get_proxies(&self, url: *const c_char) -> *mut *mut c_char {
        self.backend.get_proxies(self.handle, url)
    }
}

impl<'b, B: Backend> Drop for Factory<'b, B> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            // A second panic escaping a destructor while unwinding aborts the process.
            let _ = catch_unwind(AssertUnwindSafe(|| unsafe {
                self.backend.free_factory(self.handle)
            }));
        } else {
            unsafe { self.backend.free_factory(self.handle) }
        }
    }
}

#[cfg(feature = "libproxy")]
static_assertions::assert_not_impl_any!(Factory<'static, crate::backend::LibProxy>: Send, Sync);
