// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rxdemo_core::{DemoError, MaybeItem};

#[test]
fn test_from_result_keeps_absence_distinct_from_error() {
    let value: MaybeItem<i32> = Ok(Some(7)).into();
    let empty: MaybeItem<i32> = Ok(None).into();
    let error: MaybeItem<i32> = Err(DemoError::ServerNotActive).into();

    assert!(value.is_value());
    assert!(empty.is_empty());
    assert!(!empty.is_error());
    assert!(error.is_error());
}

#[test]
fn test_map_only_touches_values() {
    assert_eq!(MaybeItem::Value(2).map(|v| v * 10), MaybeItem::Value(20));
    assert_eq!(MaybeItem::<i32>::Empty.map(|v| v * 10), MaybeItem::Empty);
    assert_eq!(
        MaybeItem::<i32>::Error(DemoError::ServerNotActive).map(|v| v * 10),
        MaybeItem::Error(DemoError::ServerNotActive)
    );
}
