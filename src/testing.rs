// Copyright (c) 2022 Sebastian Wiesner <sebastian@swsnr.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A scripted backend which tracks factories and allocations, for tests.

use std::cell::{Cell, RefCell};
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr::NonNull;

use crate::backend::Backend;

/// What the mock backend does when asked for a factory and for proxies.
#[derive(Debug, Clone)]
pub enum Behaviour {
    /// Create factories and return these proxies for every URL.
    Proxies(Vec<&'static str>),
    /// Create factories, but return `NULL` from resolution.
    NoProxies,
    /// Return `NULL` from factory creation.
    FailFactory,
    /// Panic in factory creation, before allocating anything.
    PanicInFactory,
    /// Create factories, but panic in resolution.
    PanicInResolve,
    /// Return these proxies, but panic when freeing the factory.
    PanicInFree(Vec<&'static str>),
    /// Panic in resolution, and again when freeing the factory.
    PanicInResolveAndFree,
}

#[derive(Debug)]
pub struct MockFactory {
    _id: usize,
}

#[derive(Debug)]
pub struct MockBackend {
    behaviour: Behaviour,
    factories_created: Cell<usize>,
    factories_freed: Cell<usize>,
    lists_outstanding: Cell<usize>,
    strings_outstanding: Cell<usize>,
    /// Every URL passed to resolution; `None` for a `NULL` pointer.
    urls: RefCell<Vec<Option<String>>>,
}

impl MockBackend {
    pub fn new(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            factories_created: Cell::new(0),
            factories_freed: Cell::new(0),
            lists_outstanding: Cell::new(0),
            strings_outstanding: Cell::new(0),
            urls: RefCell::new(Vec::new()),
        }
    }

    pub fn factories_created(&self) -> usize {
        self.factories_created.get()
    }

    pub fn factories_freed(&self) -> usize {
        self.factories_freed.get()
    }

    pub fn resolutions(&self) -> usize {
        self.urls.borrow().len()
    }

    pub fn urls(&self) -> Vec<Option<String>> {
        self.urls.borrow().clone()
    }

    /// Proxy lists and strings handed out but not freed yet.
    pub fn outstanding_allocations(&self) -> usize {
        self.lists_outstanding.get() + self.strings_outstanding.get()
    }
}

unsafe impl Backend for MockBackend {
    type Factory = MockFactory;

    fn new_factory(&self) -> *mut Self::Factory {
        match self.behaviour {
            Behaviour::FailFactory => std::ptr::null_mut(),
            Behaviour::PanicInFactory => panic!("factory construction blew up"),
            _ => {
                let id = self.factories_created.get();
                self.factories_created.set(id + 1);
                Box::into_raw(Box::new(MockFactory { _id: id }))
            }
        }
    }

    unsafe fn get_proxies(
        &self,
        _factory: NonNull<Self::Factory>,
        url: *const c_char,
    ) -> *mut *mut c_char {
        let url = if url.is_null() {
            None
        } else {
            Some(CStr::from_ptr(url).to_string_lossy().into_owned())
        };
        self.urls.borrow_mut().push(url);
        match &self.behaviour {
            Behaviour::Proxies(proxies) | Behaviour::PanicInFree(proxies) => {
                let mut list: Vec<*mut c_char> = proxies
                    .iter()
                    .map(|p| CString::new(*p).unwrap().into_raw())
                    .collect();
                list.push(std::ptr::null_mut());
                self.strings_outstanding
                    .set(self.strings_outstanding.get() + proxies.len());
                self.lists_outstanding.set(self.lists_outstanding.get() + 1);
                Box::into_raw(list.into_boxed_slice()) as *mut *mut c_char
            }
            Behaviour::PanicInResolve | Behaviour::PanicInResolveAndFree => {
                panic!("resolution blew up")
            }
            _ => std::ptr::null_mut(),
        }
    }

    unsafe fn free_factory(&self, factory: NonNull<Self::Factory>) {
        self.factories_freed.set(self.factories_freed.get() + 1);
        drop(Box::from_raw(factory.as_ptr()));
        if matches!(
            self.behaviour,
            Behaviour::PanicInFree(_) | Behaviour::PanicInResolveAndFree
        ) {
            panic!("freeing the factory blew up");
        }
    }

    unsafe fn free_proxies(&self, proxies: NonNull<*mut c_char>) {
        let mut len = 0;
        loop {
            let entry = *proxies.as_ptr().add(len);
            if entry.is_null() {
                break;
            }
            drop(CString::from_raw(entry));
            len += 1;
        }
        drop(Box::from_raw(std::ptr::slice_from_raw_parts_mut(
            proxies.as_ptr(),
            len + 1,
        )));
        self.strings_outstanding
            .set(self.strings_outstanding.get() - len);
        self.lists_outstanding.set(self.lists_outstanding.get() - 1);
    }
}
