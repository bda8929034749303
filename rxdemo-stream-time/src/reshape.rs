// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::future::{ready, IntoFuture};
use core::time::Duration;
use futures::channel::mpsc::unbounded;
use futures::stream::{self, BoxStream, Stream, StreamExt};
use rxdemo_core::{debug, Result, Single};
use rxdemo_runtime::Timer;

/// Extension trait with the two operators the interval reshaper is built from.
pub trait ReshapeExt<T>: Stream<Item = T> + Sized {
    /// Decouples the upstream from a slow consumer.
    ///
    /// The upstream is driven by its own task and every item is kept in an unbounded queue
    /// until the downstream asks for it, so nothing is dropped and arrival order is kept.
    /// The task is spawned on the first poll and stops at the first item it cannot hand over
    /// after the downstream is dropped.
    ///
    /// Must be polled from within a tokio runtime.
    fn on_backpressure_buffer(self) -> BoxStream<'static, T>;

    /// Re-emits every item `delay` after the previous one was emitted (or after it arrived,
    /// if that is later).
    ///
    /// Each item is mapped onto a [`Single::timer`] and the timers are run strictly one after
    /// another, so items keep their order and none overlap.
    fn concat_map_timer<TM: Timer>(
        self,
        delay: Duration,
        timer: TM,
    ) -> BoxStream<'static, Result<T>>;
}

impl<S, T> ReshapeExt<T> for S
where
    S: Stream<Item = T> + Send + 'static,
    T: Send + 'static,
{
    fn on_backpressure_buffer(self) -> BoxStream<'static, T> {
        stream::once(async move {
            let (tx, rx) = unbounded();
            let mut upstream = Box::pin(self);

            tokio::spawn(async move {
                let mut forwarded = 0_usize;
                while let Some(item) = upstream.next().await {
                    if tx.unbounded_send(item).is_err() {
                        break;
                    }
                    forwarded += 1;
                }
                debug!("on_backpressure_buffer: upstream released after {forwarded} items");
            });

            rx
        })
        .flatten()
        .boxed()
    }

    fn concat_map_timer<TM: Timer>(
        self,
        delay: Duration,
        timer: TM,
    ) -> BoxStream<'static, Result<T>> {
        self.then(move |item| Single::timer(item, delay, timer.clone()).into_future())
            .boxed()
    }
}

/// Slows a periodic counter down to one value per `period` and stops before `limit`.
///
/// Every upstream value is kept (buffered while it waits its turn), so the output is the
/// upstream sequence itself, re-timed. The stream completes as soon as a value reaching
/// `limit` comes up; that value is not emitted.
pub fn reshape_interval<S, TM>(
    source: S,
    period: Duration,
    limit: u64,
    timer: TM,
) -> impl Stream<Item = Result<u64>> + Send
where
    S: Stream<Item = u64> + Send + 'static,
    TM: Timer,
{
    source
        .on_backpressure_buffer()
        .concat_map_timer(period, timer)
        .take_while(move |item| ready(!matches!(item, Ok(value) if *value >= limit)))
}
