// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Core types for rxdemo.
//!
//! Three deferred, single-shot source types cover the cardinalities a request/response call
//! can have:
//!
//! - [`Single<T>`] - exactly one value or one error
//! - [`Maybe<T>`] - one value, an empty completion, or one error ([`MaybeItem`])
//! - [`Completable`] - success or error, never a value
//!
//! All three wrap a boxed future that is not polled until the source is awaited or
//! subscribed, and all three are consumed by that subscription, so a consumer observes
//! exactly one terminal signal.

pub mod completable;
pub mod error;
pub mod logging;
pub mod maybe;
pub mod maybe_item;
pub mod single;

pub use self::completable::Completable;
pub use self::error::{DemoError, Result};
pub use self::maybe::Maybe;
pub use self::maybe_item::MaybeItem;
pub use self::single::Single;

#[cfg(feature = "tracing")]
#[doc(hidden)]
pub use tracing;
