// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::future::{Future, IntoFuture};
use core::time::Duration;
use futures::future::{self, BoxFuture, FutureExt};
use rxdemo_runtime::Timer;

use crate::error::{DemoError, Result};

/// A deferred computation with no value: it either completes or fails.
///
/// Dropping a `Completable` (or the future it was turned into) before it finishes cancels
/// it; completion hooks registered with [`do_on_complete`](Self::do_on_complete) then never
/// run.
pub struct Completable {
    source: BoxFuture<'static, Result<()>>,
}

impl Completable {
    /// Defers `action` until the completable is awaited.
    pub fn from_action<F, Fut>(action: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        Self {
            source: async move { action().await }.boxed(),
        }
    }

    pub fn complete() -> Self {
        Self {
            source: future::ready(Ok(())).boxed(),
        }
    }

    pub fn error(error: DemoError) -> Self {
        Self {
            source: future::ready(Err(error)).boxed(),
        }
    }

    /// Completes once `duration` has elapsed on `timer`, measured from the first poll.
    pub fn timer<TM: Timer>(duration: Duration, timer: TM) -> Self {
        Self::from_action(move || async move {
            timer.sleep_future(duration).await;
            Ok(())
        })
    }

    /// Runs `hook` after a successful completion. Errors and cancellation skip it.
    pub fn do_on_complete<F>(self, hook: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let source = self.source;
        Self {
            source: async move {
                let result = source.await;
                if result.is_ok() {
                    hook();
                }
                result
            }
            .boxed(),
        }
    }

    /// Runs the completable and calls exactly one of the two callbacks.
    pub async fn subscribe<OnComplete, OnError>(self, on_complete: OnComplete, on_error: OnError)
    where
        OnComplete: FnOnce(),
        OnError: FnOnce(DemoError),
    {
        match self.source.await {
            Ok(()) => on_complete(),
            Err(error) => on_error(error),
        }
    }
}

impl IntoFuture for Completable {
    type Output = Result<()>;
    type IntoFuture = BoxFuture<'static, Result<()>>;

    fn into_future(self) -> Self::IntoFuture {
        self.source
    }
}

impl core::fmt::Debug for Completable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Completable").finish_non_exhaustive()
    }
}
