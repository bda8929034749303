// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types shared by every rxdemo crate.
//!
//! # Examples
//!
//! ```
//! use rxdemo_core::{DemoError, Result};
//!
//! fn call_server() -> Result<()> {
//!     Err(DemoError::ServerNotActive)
//! }
//!
//! assert!(call_server().unwrap_err().is_simulated());
//! ```

/// Root error type for all rxdemo operations.
///
/// Every variant is terminal for the invocation that produced it. Nothing in rxdemo retries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DemoError {
    /// The simulated server refused the request.
    #[error("Server not active")]
    ServerNotActive,

    /// A value was required but the source completed empty.
    #[error("No such element: {context}")]
    NoSuchElement {
        /// What was being waited for
        context: String,
    },

    /// Stream processing failed outside of user code.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong during stream processing
        context: String,
    },

    /// The embedded demo configuration could not be parsed.
    #[error("Configuration error: {context}")]
    ConfigError {
        /// Parser message
        context: String,
    },
}

impl DemoError {
    /// Create a no-such-element error with the given context
    pub fn no_such_element(context: impl Into<String>) -> Self {
        Self::NoSuchElement {
            context: context.into(),
        }
    }

    /// Create a stream processing error with the given context
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Create a configuration error with the given context
    pub fn config_error(context: impl Into<String>) -> Self {
        Self::ConfigError {
            context: context.into(),
        }
    }

    /// Returns `true` for failures produced by the simulated backend.
    #[must_use]
    pub const fn is_simulated(&self) -> bool {
        matches!(self, Self::ServerNotActive)
    }
}

/// Specialized Result type for rxdemo operations.
pub type Result<T> = std::result::Result<T, DemoError>;
