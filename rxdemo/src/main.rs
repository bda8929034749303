// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rxdemo::demos::run_all;
use rxdemo::DemoConfig;
use rxdemo_core::{debug, error};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = DemoConfig::load()?;
    debug!("loaded {config:?}");

    if let Err(e) = run_all(&config).await {
        error!("demonstration failed: {e}");
        return Err(e.into());
    }

    Ok(())
}
