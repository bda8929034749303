// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::future::{Future, IntoFuture};
use core::time::Duration;
use futures::future::{self, BoxFuture, FutureExt};
use rxdemo_runtime::Timer;

use crate::error::{DemoError, Result};

/// A deferred computation that yields exactly one value or one error.
///
/// Nothing runs until the `Single` is awaited or subscribed. Both consume it, so the
/// terminal signal is delivered once.
///
/// # Example
///
/// ```
/// use rxdemo_core::Single;
///
/// # #[tokio::main]
/// # async fn main() {
/// let doubled = Single::from_supplier(|| async { Ok(21) }).map(|v| v * 2);
/// assert_eq!(doubled.await, Ok(42));
/// # }
/// ```
pub struct Single<T> {
    source: BoxFuture<'static, Result<T>>,
}

impl<T: Send + 'static> Single<T> {
    /// Defers `supplier` until the single is awaited.
    pub fn from_supplier<F, Fut>(supplier: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        Self {
            source: async move { supplier().await }.boxed(),
        }
    }

    /// A single that succeeds immediately with `value`.
    pub fn just(value: T) -> Self {
        Self {
            source: future::ready(Ok(value)).boxed(),
        }
    }

    /// A single that fails immediately with `error`.
    pub fn error(error: DemoError) -> Self {
        Self {
            source: future::ready(Err(error)).boxed(),
        }
    }

    /// Emits `value` once `duration` has elapsed on `timer`.
    ///
    /// The timer starts when the single is first polled, not when it is created.
    pub fn timer<TM: Timer>(value: T, duration: Duration, timer: TM) -> Self {
        Self::from_supplier(move || async move {
            timer.sleep_future(duration).await;
            Ok(value)
        })
    }

    pub fn map<U, F>(self, f: F) -> Single<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        Single {
            source: self.source.map(move |result| result.map(f)).boxed(),
        }
    }

    /// Runs the single and hands its outcome to exactly one of the two callbacks.
    pub async fn subscribe<OnSuccess, OnError>(self, on_success: OnSuccess, on_error: OnError)
    where
        OnSuccess: FnOnce(T),
        OnError: FnOnce(DemoError),
    {
        match self.source.await {
            Ok(value) => on_success(value),
            Err(error) => on_error(error),
        }
    }
}

impl<T> IntoFuture for Single<T> {
    type Output = Result<T>;
    type IntoFuture = BoxFuture<'static, Result<T>>;

    fn into_future(self) -> Self::IntoFuture {
        self.source
    }
}

impl<T> core::fmt::Debug for Single<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Single").finish_non_exhaustive()
    }
}
