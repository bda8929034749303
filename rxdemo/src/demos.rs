// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The five demonstrations, each printing what it observes.

use core::fmt::Display;
use futures::stream::{self, TryStreamExt};
use parking_lot::Mutex;
use rxdemo_core::{Completable, MaybeItem, Result};
use rxdemo_exec::{FlattenCompletableExt, FlattenStrategy};
use rxdemo_runtime::{Timer, TokioTimer};
use rxdemo_stream_time::{interval, reshape_interval};
use std::sync::Arc;

use crate::backend::{Backend, SimulatedBackend};
use crate::config::{DemoConfig, FlattenConfig, ReshapeConfig};
use crate::sources::{fetch_from_server, lookup_from_db, perform_server_action};

/// Local wall-clock time, as printed in front of timed output lines.
pub fn timestamp() -> String {
    chrono::Local::now()
        .format("%a %b %d %H:%M:%S%.3f %Y")
        .to_string()
}

/// 1) A request that returns data. Returns the line it printed.
pub async fn request_data_from_server<B: Backend>(backend: B) -> String {
    let line = match fetch_from_server(backend).await {
        MaybeItem::Value(bytes) => format!("requestDataFromServerAsync: {} bytes", bytes.len()),
        MaybeItem::Error(error) => format!("requestDataFromServerAsync error: {error}"),
        MaybeItem::Empty => "requestDataFromServerAsync: null (complete)".to_owned(),
    };
    println!("{line}");
    line
}

/// 2) A request that returns nothing.
pub async fn request_server<B: Backend>(backend: B) -> String {
    let line = match perform_server_action(backend).await {
        Ok(()) => "requestServerAsync: complete".to_owned(),
        Err(error) => format!("requestServerAsync error: {error}"),
    };
    println!("{line}");
    line
}

/// 3) A one-shot database lookup.
pub async fn request_data_from_db<T, B>(backend: B) -> String
where
    T: Display + Send + 'static,
    B: Backend,
{
    let line = match lookup_from_db::<T, B>(backend).await {
        MaybeItem::Value(value) => format!("requestDataFromDbAsync: {value}"),
        MaybeItem::Error(error) => format!("requestDataFromDbAsync error: {error}"),
        MaybeItem::Empty => "requestDataFromDbAsync: null (complete)".to_owned(),
    };
    println!("{line}");
    line
}

/// 4) A periodic source slowed down to half its rate, without losing values.
///
/// Returns the values in the order they were printed.
pub async fn emit_each_second<TM: Timer>(config: &ReshapeConfig, timer: TM) -> Result<Vec<u64>> {
    let source = interval(config.source_period(), timer.clone());

    reshape_interval(source, config.period(), config.limit, timer)
        .inspect_ok(|value| println!("{}: value = {value}", timestamp()))
        .try_collect()
        .await
}

/// 5) The configured index range flattened onto one-shot waits with `strategy`.
///
/// Returns the indices whose wait completed, in completion order. Waits dropped by
/// [`FlattenStrategy::Switch`] are missing from the result and print nothing.
pub async fn x_map<TM: Timer>(
    strategy: FlattenStrategy,
    config: &FlattenConfig,
    timer: TM,
) -> Result<Vec<u32>> {
    let finished = Arc::new(Mutex::new(Vec::new()));
    let inner_duration = config.inner_duration();

    println!("{}: start", timestamp());

    let record = finished.clone();
    stream::iter(config.indices())
        .flatten_completable(strategy, move |index| {
            let record = record.clone();
            Completable::timer(inner_duration, timer.clone()).do_on_complete(move || {
                println!(
                    "{}: finished operation for iterable index {index}",
                    timestamp()
                );
                record.lock().push(index);
            })
        })
        .await?;

    let finished = core::mem::take(&mut *finished.lock());
    Ok(finished)
}

/// Runs all five demonstrations in order, each to completion before the next.
pub async fn run_all(config: &DemoConfig) -> Result<()> {
    let backend = SimulatedBackend::from_config(&config.backend, TokioTimer);

    request_data_from_server(backend.clone()).await;
    request_server(backend.clone()).await;
    request_data_from_db::<String, _>(backend).await;

    emit_each_second(&config.reshape, TokioTimer).await?;

    for strategy in FlattenStrategy::ALL {
        x_map(strategy, &config.flatten, TokioTimer).await?;
    }

    Ok(())
}
