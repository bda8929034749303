// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the rxdemo workspace.
//!
//! - [`test_channel`] - an unbounded sender paired with the receiving stream, for pushing
//!   values into an operator under test
//! - [`helpers`] - assertions over streams with a (virtual) timeout
//! - [`Recorder`] - thread-safe log of observed values with the instant they were seen

pub mod helpers;
pub mod recorder;
pub mod test_channel;

pub use recorder::Recorder;
pub use test_channel::test_channel;
