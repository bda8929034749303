// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rxdemo_core::{DemoError, Single};
use rxdemo_runtime::{Timer, TokioTimer};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::pause;

#[tokio::test]
async fn test_single_defers_supplier_until_awaited() -> anyhow::Result<()> {
    // Arrange
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_clone = calls.clone();
    let single = Single::from_supplier(move || async move {
        calls_clone.fetch_add(1, Ordering::SeqCst);
        Ok("payload")
    });

    // Assert - nothing ran yet
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    // Act
    let value = single.await?;

    // Assert
    assert_eq!(value, "payload");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test]
async fn test_single_subscribe_routes_error_to_error_callback() -> anyhow::Result<()> {
    // Arrange
    let mut successes = Vec::new();
    let mut errors = Vec::new();

    // Act
    Single::<u8>::error(DemoError::ServerNotActive)
        .subscribe(|v| successes.push(v), |e| errors.push(e))
        .await;

    // Assert
    assert!(successes.is_empty());
    assert_eq!(errors, vec![DemoError::ServerNotActive]);
    Ok(())
}

#[tokio::test]
async fn test_single_timer_emits_value_after_duration() -> anyhow::Result<()> {
    // Arrange
    pause();
    let timer = TokioTimer;
    let start = timer.now();

    // Act
    let value = Single::timer(5_u64, Duration::from_millis(1000), timer)
        .map(|v| v + 1)
        .await?;

    // Assert
    assert_eq!(value, 6);
    assert!(timer.now() - start >= Duration::from_millis(1000));
    Ok(())
}

#[tokio::test]
async fn test_single_just_maps_value() -> anyhow::Result<()> {
    assert_eq!(Single::just(3).map(|v| v * 3).await?, 9);
    Ok(())
}
