// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Backend calls wrapped in the source type that matches what they can return.
//!
//! Every source is lazy: the backend is only called once the source is awaited or
//! subscribed, and each source makes exactly one call.

use rxdemo_core::{Completable, Maybe};

use crate::backend::Backend;

/// A fetch can legitimately come back without data, so it is a [`Maybe`] rather than a
/// `Single`: absence surfaces as an empty completion instead of an error.
pub fn fetch_from_server<B: Backend>(backend: B) -> Maybe<Vec<u8>> {
    Maybe::from_supplier(move || async move { Ok(backend.server_fetch().await) })
}

/// An action has nothing to return, only success or failure.
pub fn perform_server_action<B: Backend>(backend: B) -> Completable {
    Completable::from_action(move || async move { backend.server_action().await })
}

/// A single-row lookup: one value, no value, or an error.
pub fn lookup_from_db<T, B>(backend: B) -> Maybe<T>
where
    T: Send + 'static,
    B: Backend,
{
    Maybe::from_supplier(move || async move { Ok(backend.db_lookup::<T>().await) })
}
