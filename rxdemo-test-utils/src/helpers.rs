// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::{Stream, StreamExt};
use rxdemo_core::{DemoError, Result};
use std::time::Duration;
use tokio::time::sleep;

pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _item = stream.next() => {
            panic!("Unexpected item emitted, expected no output.");
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {
        }
    }
}

/// Waits up to `timeout_ms` for the next item of a fallible stream.
///
/// # Errors
///
/// Returns the item's own error, or a stream error if the stream ended or the timeout hit.
pub async fn unwrap_stream<S, T>(stream: &mut S, timeout_ms: u64) -> Result<T>
where
    S: Stream<Item = Result<T>> + Unpin,
{
    tokio::select! {
        item = stream.next() => match item {
            Some(result) => result,
            None => Err(DemoError::stream_error("Stream ended")),
        },
        _ = sleep(Duration::from_millis(timeout_ms)) => {
            Err(DemoError::stream_error(format!("No item within {timeout_ms}ms")))
        }
    }
}
