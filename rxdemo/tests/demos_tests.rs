// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod scripted_backend;

use rxdemo::config::{FlattenConfig, ReshapeConfig};
use rxdemo::demos::{
    emit_each_second, request_data_from_db, request_data_from_server, request_server, run_all,
    x_map,
};
use rxdemo::DemoConfig;
use rxdemo_exec::FlattenStrategy;
use rxdemo_runtime::TokioTimer;
use scripted_backend::ScriptedBackend;
use std::time::Duration;
use tokio::time::{pause, Instant};

fn flatten_config() -> FlattenConfig {
    FlattenConfig {
        first_index: 0,
        last_index: 20,
        inner_duration_ms: 1000,
    }
}

#[tokio::test]
async fn test_emit_each_second_prints_zero_to_nine_then_stops() -> anyhow::Result<()> {
    // Arrange
    pause();
    let config = ReshapeConfig {
        source_period_ms: 500,
        period_ms: 1000,
        limit: 10,
    };
    let start = Instant::now();

    // Act
    let values = emit_each_second(&config, TokioTimer).await?;

    // Assert - first value after 1.5s, then one per second
    assert_eq!(values, (0..10).collect::<Vec<_>>());
    assert!(start.elapsed() >= Duration::from_millis(10_500));
    assert!(start.elapsed() < Duration::from_millis(12_000));
    Ok(())
}

#[tokio::test]
async fn test_x_map_merge_finishes_every_index() -> anyhow::Result<()> {
    // Arrange
    pause();
    let start = Instant::now();

    // Act
    let mut finished = x_map(FlattenStrategy::Merge, &flatten_config(), TokioTimer).await?;

    // Assert
    finished.sort_unstable();
    assert_eq!(finished, (0..=20).collect::<Vec<_>>());
    assert!(start.elapsed() < Duration::from_secs(2));
    Ok(())
}

#[tokio::test]
async fn test_x_map_concat_finishes_every_index_in_order() -> anyhow::Result<()> {
    // Arrange
    pause();
    let start = Instant::now();

    // Act
    let finished = x_map(FlattenStrategy::Concat, &flatten_config(), TokioTimer).await?;

    // Assert
    assert_eq!(finished, (0..=20).collect::<Vec<_>>());
    assert!(start.elapsed() >= Duration::from_secs(21));
    Ok(())
}

#[tokio::test]
async fn test_x_map_switch_finishes_only_last_index() -> anyhow::Result<()> {
    // Arrange
    pause();

    // Act
    let finished = x_map(FlattenStrategy::Switch, &flatten_config(), TokioTimer).await?;

    // Assert
    assert_eq!(finished, vec![20]);
    Ok(())
}

#[tokio::test]
async fn test_request_data_from_server_labels_value_and_absence() -> anyhow::Result<()> {
    // Arrange
    let answering = ScriptedBackend::default();
    let refusing = ScriptedBackend::refusing();

    // Act
    let value_line = request_data_from_server(answering.clone()).await;
    let empty_line = request_data_from_server(refusing).await;

    // Assert
    assert_eq!(value_line, "requestDataFromServerAsync: 3 bytes");
    assert_eq!(empty_line, "requestDataFromServerAsync: null (complete)");
    assert_eq!(answering.calls(), 1);
    Ok(())
}

#[tokio::test]
async fn test_request_server_labels_completion_and_failure() -> anyhow::Result<()> {
    // Arrange
    let answering = ScriptedBackend::default();
    let refusing = ScriptedBackend::refusing();

    // Act
    let complete_line = request_server(answering).await;
    let error_line = request_server(refusing.clone()).await;

    // Assert
    assert_eq!(complete_line, "requestServerAsync: complete");
    assert_eq!(error_line, "requestServerAsync error: Server not active");
    assert_eq!(refusing.calls(), 1);
    Ok(())
}

#[tokio::test]
async fn test_request_data_from_db_labels_absence() -> anyhow::Result<()> {
    let line = request_data_from_db::<String, _>(ScriptedBackend::default()).await;

    assert_eq!(line, "requestDataFromDbAsync: null (complete)");
    Ok(())
}

#[tokio::test]
async fn test_run_all_runs_every_demonstration_in_turn() -> anyhow::Result<()> {
    // Arrange
    pause();
    let config = DemoConfig::load()?;
    let start = Instant::now();

    // Act
    run_all(&config).await?;

    // Assert - three calls, the reshaper, then merge (1s), concat (21s) and switch (1s)
    assert!(start.elapsed() >= Duration::from_millis(2_100 + 10_500 + 23_000));
    assert!(start.elapsed() < Duration::from_secs(60));
    Ok(())
}
