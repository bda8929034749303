// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime-agnostic timer used by every time-aware piece of rxdemo.
//!
//! Sources and operators take a [`Timer`](timer::Timer) instead of calling into a runtime
//! directly, so tests can run them on tokio's paused clock.

pub mod impls;
pub mod timer;

#[cfg(feature = "runtime-tokio")]
pub use impls::tokio::TokioTimer;
pub use timer::Timer;
