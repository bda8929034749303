// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::{DemoError, Result};

/// Terminal outcome of a value-or-none source.
///
/// Absence is its own variant: an `Empty` completion is a successful result that carries no
/// value, never an error and never "not yet computed".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaybeItem<T> {
    /// The source produced a value and completed
    Value(T),
    /// The source completed without a value
    Empty,
    /// The source failed
    Error(DemoError),
}

impl<T> MaybeItem<T> {
    /// Returns `true` if this is a `Value`.
    pub const fn is_value(&self) -> bool {
        matches!(self, MaybeItem::Value(_))
    }

    /// Returns `true` if this is an `Empty` completion.
    pub const fn is_empty(&self) -> bool {
        matches!(self, MaybeItem::Empty)
    }

    /// Returns `true` if this is an `Error`.
    pub const fn is_error(&self) -> bool {
        matches!(self, MaybeItem::Error(_))
    }

    /// Maps the contained value. Empty completions and errors pass through unchanged.
    pub fn map<U, F>(self, f: F) -> MaybeItem<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            MaybeItem::Value(v) => MaybeItem::Value(f(v)),
            MaybeItem::Empty => MaybeItem::Empty,
            MaybeItem::Error(e) => MaybeItem::Error(e),
        }
    }
}

impl<T> From<Result<Option<T>>> for MaybeItem<T> {
    fn from(result: Result<Option<T>>) -> Self {
        match result {
            Ok(Some(v)) => MaybeItem::Value(v),
            Ok(None) => MaybeItem::Empty,
            Err(e) => MaybeItem::Error(e),
        }
    }
}

impl<T> From<Option<T>> for MaybeItem<T> {
    fn from(option: Option<T>) -> Self {
        option.map_or(MaybeItem::Empty, MaybeItem::Value)
    }
}
