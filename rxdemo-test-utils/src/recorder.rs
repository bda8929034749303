// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use rxdemo_runtime::{Timer, TokioTimer};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Records values together with the tokio instant they were observed at.
///
/// Clones share the same log, so a clone can be moved into a callback while the test keeps
/// the original for assertions.
#[derive(Clone, Debug)]
pub struct Recorder<T> {
    entries: Arc<Mutex<Vec<(Instant, T)>>>,
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<T: Clone> Recorder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, value: T) {
        self.entries.lock().push((TokioTimer.now(), value));
    }

    /// Recorded values in the order they were recorded.
    pub fn values(&self) -> Vec<T> {
        self.entries.lock().iter().map(|(_, v)| v.clone()).collect()
    }

    pub fn instants(&self) -> Vec<Instant> {
        self.entries.lock().iter().map(|(at, _)| *at).collect()
    }

    /// Time between each pair of consecutive records.
    pub fn gaps(&self) -> Vec<Duration> {
        self.instants()
            .windows(2)
            .map(|pair| pair[1] - pair[0])
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
