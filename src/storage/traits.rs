//! Trait abstraction for the step store to enable mocking in tests

use anyhow::Result;
use async_trait::async_trait;

/// Key under which the demographics step snapshot is stored
pub const STEP_ONE_KEY: &str = "step1Data";

/// Trait for local persistent key-value storage, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StepStore: Send + Sync {
    /// Persist a value under a key (last write wins)
    async fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Read a previously persisted value, `None` when the key was never written
    async fn read(&self, key: &str) -> Result<Option<String>>;
}
