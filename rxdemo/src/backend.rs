// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Simulated request/response calls.
//!
//! Each call waits a fixed latency on a [`Timer`] (without holding a thread), then flips a
//! coin. There is no real I/O behind any of them.

use async_trait::async_trait;
use core::time::Duration;
use rxdemo_core::{DemoError, Result};
use rxdemo_runtime::Timer;

use crate::config::BackendConfig;

/// The three kinds of call the sources wrap.
#[async_trait]
pub trait Backend: Clone + Send + Sync + 'static {
    /// A request that returns data, or nothing.
    async fn server_fetch(&self) -> Option<Vec<u8>>;

    /// A request that returns no data but may be refused.
    async fn server_action(&self) -> Result<()>;

    /// A lookup that returns at most one row.
    async fn db_lookup<T: Send + 'static>(&self) -> Option<T>;
}

/// [`Backend`] answering every call after `latency`, with a 50/50 outcome.
#[derive(Debug, Clone)]
pub struct SimulatedBackend<TM: Timer> {
    latency: Duration,
    response_length: usize,
    timer: TM,
}

impl<TM: Timer> SimulatedBackend<TM> {
    pub fn new(latency: Duration, response_length: usize, timer: TM) -> Self {
        Self {
            latency,
            response_length,
            timer,
        }
    }

    pub fn from_config(config: &BackendConfig, timer: TM) -> Self {
        Self::new(config.latency(), config.response_length, timer)
    }
}

#[async_trait]
impl<TM: Timer> Backend for SimulatedBackend<TM> {
    /// Random bytes half of the time, `None` otherwise. Never fails.
    async fn server_fetch(&self) -> Option<Vec<u8>> {
        self.timer.sleep_future(self.latency).await;
        fastrand::bool().then(|| random_bytes(self.response_length))
    }

    /// Refused with [`DemoError::ServerNotActive`] half of the time.
    async fn server_action(&self) -> Result<()> {
        self.timer.sleep_future(self.latency).await;
        if fastrand::bool() {
            Err(DemoError::ServerNotActive)
        } else {
            Ok(())
        }
    }

    /// Always empty.
    async fn db_lookup<T: Send + 'static>(&self) -> Option<T> {
        self.timer.sleep_future(self.latency).await;
        None
    }
}

fn random_bytes(length: usize) -> Vec<u8> {
    let mut bytes = vec![0_u8; length];
    fastrand::fill(&mut bytes);
    bytes
}
