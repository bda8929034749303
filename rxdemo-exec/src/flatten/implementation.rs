// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::future::IntoFuture;
use futures::future::BoxFuture;
use futures::stream::{Stream, StreamExt, TryStreamExt};
use rxdemo_core::{debug, Completable, DemoError, Result};

pub(crate) async fn merge_impl<S, T, F>(outer: S, mut mapper: F) -> Result<()>
where
    S: Stream<Item = T>,
    F: FnMut(T) -> Completable,
{
    outer
        .map(|item| Ok::<_, DemoError>(mapper(item)))
        .try_for_each_concurrent(None, |inner| inner.into_future())
        .await
}

pub(crate) async fn concat_impl<S, T, F>(outer: S, mut mapper: F) -> Result<()>
where
    S: Stream<Item = T>,
    F: FnMut(T) -> Completable,
{
    let mut outer = Box::pin(outer);

    while let Some(item) = outer.next().await {
        mapper(item).await?;
    }

    Ok(())
}

enum Step<T> {
    Next(Option<T>),
    InnerDone(Result<()>),
}

pub(crate) async fn switch_impl<S, T, F>(outer: S, mut mapper: F) -> Result<()>
where
    S: Stream<Item = T>,
    F: FnMut(T) -> Completable,
{
    let mut outer = Box::pin(outer);
    let mut current: Option<BoxFuture<'static, Result<()>>> = None;
    let mut outer_done = false;
    let mut superseded = 0_usize;

    loop {
        let inner = match current.as_mut() {
            Some(inner) => inner,
            None if outer_done => return Ok(()),
            None => {
                match outer.next().await {
                    Some(item) => current = Some(mapper(item).into_future()),
                    None => outer_done = true,
                }
                continue;
            }
        };

        if outer_done {
            return inner.await;
        }

        // Outer first: an item that is already waiting supersedes the running inner.
        let step = tokio::select! {
            biased;
            item = outer.next() => Step::Next(item),
            result = inner => Step::InnerDone(result),
        };

        match step {
            Step::Next(Some(item)) => {
                superseded += 1;
                debug!("switch_map_completable: dropped inner completable #{superseded}");
                current = Some(mapper(item).into_future());
            }
            Step::Next(None) => outer_done = true,
            Step::InnerDone(result) => {
                result?;
                current = None;
            }
        }
    }
}
