// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use rxdemo::Backend;
use rxdemo_core::{DemoError, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Backend with fixed answers that counts how often it is called.
#[derive(Clone, Default)]
pub struct ScriptedBackend {
    calls: Arc<AtomicUsize>,
    refuse: bool,
}

impl ScriptedBackend {
    pub fn refusing() -> Self {
        Self {
            refuse: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Backend for ScriptedBackend {
    async fn server_fetch(&self) -> Option<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (!self.refuse).then(|| vec![1, 2, 3])
    }

    async fn server_action(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.refuse {
            Err(DemoError::ServerNotActive)
        } else {
            Ok(())
        }
    }

    async fn db_lookup<T: Send + 'static>(&self) -> Option<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        None
    }
}
