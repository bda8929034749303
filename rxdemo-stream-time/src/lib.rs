// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Time-based sources and operators.
//!
//! - [`interval`] - fixed-rate counter source
//! - [`ReshapeExt`] - `.on_backpressure_buffer()` and `.concat_map_timer(delay, timer)`
//! - [`reshape_interval`] - the two combined into a slower, gap-free, bounded tick stream
//!
//! # Example
//!
//! ```rust,no_run
//! use futures::TryStreamExt;
//! use rxdemo_runtime::TokioTimer;
//! use rxdemo_stream_time::{interval, reshape_interval};
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() -> rxdemo_core::Result<()> {
//! let source = interval(Duration::from_millis(500), TokioTimer);
//! let values: Vec<u64> = reshape_interval(source, Duration::from_secs(1), 10, TokioTimer)
//!     .try_collect()
//!     .await?;
//! assert_eq!(values, (0..10).collect::<Vec<_>>());
//! # Ok(())
//! # }
//! ```

mod interval;
mod reshape;

pub use interval::interval;
pub use reshape::{reshape_interval, ReshapeExt};
