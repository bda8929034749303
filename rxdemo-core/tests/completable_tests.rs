// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rxdemo_core::{Completable, DemoError};
use rxdemo_runtime::TokioTimer;
use std::future::IntoFuture;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{advance, pause};

#[tokio::test]
async fn test_completable_subscribe_calls_exactly_one_callback() -> anyhow::Result<()> {
    // Arrange
    let mut completions = 0;
    let mut errors = Vec::new();

    // Act
    Completable::complete()
        .subscribe(|| completions += 1, |e| errors.push(e))
        .await;
    Completable::error(DemoError::ServerNotActive)
        .subscribe(|| completions += 1, |e| errors.push(e))
        .await;

    // Assert
    assert_eq!(completions, 1);
    assert_eq!(errors, vec![DemoError::ServerNotActive]);
    Ok(())
}

#[tokio::test]
async fn test_do_on_complete_skips_hook_on_error() -> anyhow::Result<()> {
    // Arrange
    let hooks = Arc::new(AtomicUsize::new(0));
    let hooks_ok = hooks.clone();
    let hooks_err = hooks.clone();

    // Act
    let ok = Completable::complete()
        .do_on_complete(move || {
            hooks_ok.fetch_add(1, Ordering::SeqCst);
        })
        .await;
    let err = Completable::error(DemoError::ServerNotActive)
        .do_on_complete(move || {
            hooks_err.fetch_add(1, Ordering::SeqCst);
        })
        .await;

    // Assert
    assert!(ok.is_ok());
    assert_eq!(err, Err(DemoError::ServerNotActive));
    assert_eq!(hooks.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test]
async fn test_dropped_timer_never_runs_hook() -> anyhow::Result<()> {
    // Arrange
    pause();
    let hooks = Arc::new(AtomicUsize::new(0));
    let hooks_clone = hooks.clone();
    let completable = Completable::timer(Duration::from_secs(1), TokioTimer).do_on_complete(
        move || {
            hooks_clone.fetch_add(1, Ordering::SeqCst);
        },
    );
    let mut running = Box::pin(completable.into_future());

    // Act - poll once, then abandon it half way through
    assert!(futures::poll!(running.as_mut()).is_pending());
    advance(Duration::from_millis(500)).await;
    drop(running);
    advance(Duration::from_secs(2)).await;

    // Assert
    assert_eq!(hooks.load(Ordering::SeqCst), 0);
    Ok(())
}

#[tokio::test]
async fn test_from_action_is_lazy() -> anyhow::Result<()> {
    // Arrange
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_clone = calls.clone();
    let completable = Completable::from_action(move || async move {
        calls_clone.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    // Act
    completable.await?;

    // Assert
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    Ok(())
}
