// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::future::{Future, IntoFuture};
use futures::future::{self, BoxFuture, FutureExt};

use crate::error::{DemoError, Result};
use crate::maybe_item::MaybeItem;
use crate::single::Single;

/// A deferred computation that yields at most one value.
///
/// Resolves to a [`MaybeItem`]: a value, an empty completion or an error. Awaiting or
/// subscribing consumes the `Maybe`, so exactly one of the three is observed.
///
/// # Example
///
/// ```
/// use rxdemo_core::{Maybe, MaybeItem};
///
/// # #[tokio::main]
/// # async fn main() {
/// let lookup = Maybe::<String>::from_supplier(|| async { Ok(None) });
/// assert_eq!(lookup.await, MaybeItem::Empty);
/// # }
/// ```
pub struct Maybe<T> {
    source: BoxFuture<'static, MaybeItem<T>>,
}

impl<T: Send + 'static> Maybe<T> {
    /// Defers `supplier` until the maybe is awaited. `Ok(None)` becomes an empty completion.
    pub fn from_supplier<F, Fut>(supplier: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<Option<T>>> + Send + 'static,
    {
        Self {
            source: async move { MaybeItem::from(supplier().await) }.boxed(),
        }
    }

    pub fn just(value: T) -> Self {
        Self {
            source: future::ready(MaybeItem::Value(value)).boxed(),
        }
    }

    pub fn empty() -> Self {
        Self {
            source: future::ready(MaybeItem::Empty).boxed(),
        }
    }

    pub fn error(error: DemoError) -> Self {
        Self {
            source: future::ready(MaybeItem::Error(error)).boxed(),
        }
    }

    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        Maybe {
            source: self.source.map(move |item| item.map(f)).boxed(),
        }
    }

    /// Converts into a [`Single`], turning an empty completion into
    /// [`DemoError::NoSuchElement`].
    pub fn to_single(self) -> Single<T> {
        let source = self.source;
        Single::from_supplier(move || async move {
            match source.await {
                MaybeItem::Value(v) => Ok(v),
                MaybeItem::Empty => Err(DemoError::no_such_element("maybe completed empty")),
                MaybeItem::Error(e) => Err(e),
            }
        })
    }

    /// Runs the maybe and hands its outcome to exactly one of the three callbacks.
    pub async fn subscribe<OnSuccess, OnError, OnComplete>(
        self,
        on_success: OnSuccess,
        on_error: OnError,
        on_complete: OnComplete,
    ) where
        OnSuccess: FnOnce(T),
        OnError: FnOnce(DemoError),
        OnComplete: FnOnce(),
    {
        match self.source.await {
            MaybeItem::Value(value) => on_success(value),
            MaybeItem::Error(error) => on_error(error),
            MaybeItem::Empty => on_complete(),
        }
    }
}

impl<T> IntoFuture for Maybe<T> {
    type Output = MaybeItem<T>;
    type IntoFuture = BoxFuture<'static, MaybeItem<T>>;

    fn into_future(self) -> Self::IntoFuture {
        self.source
    }
}

impl<T> core::fmt::Debug for Maybe<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Maybe").finish_non_exhaustive()
    }
}
