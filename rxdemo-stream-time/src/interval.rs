// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::time::Duration;
use futures::stream::{self, Stream};
use rxdemo_runtime::Timer;

/// Emits `0, 1, 2, ...`, one value per `period`, forever.
///
/// The first value arrives one full period after the stream is first polled. Deadlines are
/// computed from that first poll, so a slow consumer does not make the schedule drift: ticks
/// that are already due are yielded immediately.
pub fn interval<TM: Timer>(period: Duration, timer: TM) -> impl Stream<Item = u64> + Send {
    stream::unfold((0_u64, None::<TM::Instant>), move |(tick, started)| {
        let timer = timer.clone();
        async move {
            let start = started.unwrap_or_else(|| timer.now());
            let periods = u32::try_from(tick + 1).unwrap_or(u32::MAX);
            let deadline = start + period.saturating_mul(periods);

            let now = timer.now();
            if deadline > now {
                timer.sleep_future(deadline - now).await;
            }

            Some((tick, (tick + 1, Some(start))))
        }
    })
}
