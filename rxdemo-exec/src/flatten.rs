// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod implementation;

use core::fmt;
use futures::Stream;
use rxdemo_core::Completable;

use self::implementation::{concat_impl, merge_impl, switch_impl};

/// How the inner completables produced by a flattening operator relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlattenStrategy {
    /// Start every inner completable as soon as its item arrives; run them all concurrently.
    Merge,
    /// Start the next inner completable only once the previous one completed.
    Concat,
    /// Start every inner completable immediately, dropping the one still running.
    Switch,
}

impl FlattenStrategy {
    pub const ALL: [FlattenStrategy; 3] = [Self::Merge, Self::Concat, Self::Switch];

    /// Name of the operator implementing this strategy.
    pub const fn operator_name(self) -> &'static str {
        match self {
            Self::Merge => "flat_map_completable",
            Self::Concat => "concat_map_completable",
            Self::Switch => "switch_map_completable",
        }
    }
}

impl fmt::Display for FlattenStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.operator_name())
    }
}

/// Extension trait mapping stream items onto completables.
///
/// Every operator returns a [`Completable`] that completes once the stream has ended and
/// every inner completable it still cares about has completed. The first inner error fails
/// the result and drops whatever is still running. Nothing runs until the returned
/// completable is awaited or subscribed.
///
/// # Example
///
/// ```
/// use futures::stream;
/// use rxdemo_core::Completable;
/// use rxdemo_exec::{FlattenCompletableExt, FlattenStrategy};
///
/// # #[tokio::main]
/// # async fn main() -> rxdemo_core::Result<()> {
/// stream::iter(0..3)
///     .flatten_completable(FlattenStrategy::Concat, |i| {
///         Completable::complete().do_on_complete(move || println!("done {i}"))
///     })
///     .await
/// # }
/// ```
pub trait FlattenCompletableExt<T>: Stream<Item = T> + Sized {
    /// Merge: every inner completable runs concurrently with the others.
    fn flat_map_completable<F>(self, mapper: F) -> Completable
    where
        F: FnMut(T) -> Completable + Send + 'static;

    /// Concat: inner completables run one after another in item order.
    fn concat_map_completable<F>(self, mapper: F) -> Completable
    where
        F: FnMut(T) -> Completable + Send + 'static;

    /// Switch: a new item drops the inner completable still running for the previous one.
    ///
    /// A dropped inner completable never completes, so its completion hooks never run.
    /// After the stream ends the last inner completable is run to the end.
    fn switch_map_completable<F>(self, mapper: F) -> Completable
    where
        F: FnMut(T) -> Completable + Send + 'static;

    /// Dispatches to one of the three operators above.
    fn flatten_completable<F>(self, strategy: FlattenStrategy, mapper: F) -> Completable
    where
        F: FnMut(T) -> Completable + Send + 'static,
    {
        match strategy {
            FlattenStrategy::Merge => self.flat_map_completable(mapper),
            FlattenStrategy::Concat => self.concat_map_completable(mapper),
            FlattenStrategy::Switch => self.switch_map_completable(mapper),
        }
    }
}

impl<S, T> FlattenCompletableExt<T> for S
where
    S: Stream<Item = T> + Send + 'static,
    T: Send + 'static,
{
    fn flat_map_completable<F>(self, mapper: F) -> Completable
    where
        F: FnMut(T) -> Completable + Send + 'static,
    {
        Completable::from_action(move || merge_impl(self, mapper))
    }

    fn concat_map_completable<F>(self, mapper: F) -> Completable
    where
        F: FnMut(T) -> Completable + Send + 'static,
    {
        Completable::from_action(move || concat_impl(self, mapper))
    }

    fn switch_map_completable<F>(self, mapper: F) -> Completable
    where
        F: FnMut(T) -> Completable + Send + 'static,
    {
        Completable::from_action(move || switch_impl(self, mapper))
    }
}
