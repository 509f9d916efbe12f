// Copyright (c) 2022 Sebastian Wiesner <sebastian@swsnr.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use url::Url;

/// A proxy resolver which never returns a proxy URL.
///
/// Used as fallback if libproxy is not available.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProxy;

static_assertions::assert_impl_all!(NoProxy: Send, Sync);

impl crate::types::ProxyResolver for NoProxy {
    fn for_url(&self, _url: &Url) -> Option<Url> {
        None
    }
}
