// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Reactive source and operator walkthrough.
//!
//! Simulated server and database calls are wrapped in the source type matching what they
//! can return ([`sources`]), a periodic source is re-timed to half its rate, and a range of
//! indices is flattened onto one-shot waits with each of the three flattening strategies
//! ([`demos`]). The `rxdemo` binary runs all of it in order.

pub mod backend;
pub mod config;
pub mod demos;
pub mod sources;

pub use backend::{Backend, SimulatedBackend};
pub use config::DemoConfig;
