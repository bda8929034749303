// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Operators that map every item of a stream onto a [`Completable`](rxdemo_core::Completable)
//! and fold the inner completables into one.
//!
//! The three operators only differ in how inner completables overlap:
//!
//! | Operator | Inner completables | Cancels |
//! |---|---|---|
//! | `flat_map_completable` | all run concurrently | nothing |
//! | `concat_map_completable` | one at a time, in item order | nothing |
//! | `switch_map_completable` | the newest one only | the running one when a new item arrives |

pub mod flatten;

pub use flatten::{FlattenCompletableExt, FlattenStrategy};
