use std::time::Duration;

/// Abstraction over the settlement wait so tests run without real elapsed
/// time.
#[async_trait::async_trait]
pub trait SettleDelay: Send + Sync {
    async fn wait(&self);
}

/// Real settlement delay backed by the tokio timer. Defaults to 1000 ms,
/// modeling external price confirmation.
#[derive(Debug, Clone)]
pub struct TokioDelay {
    duration: Duration,
}

impl TokioDelay {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }
}

impl Default for TokioDelay {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

#[async_trait::async_trait]
impl SettleDelay for TokioDelay {
    async fn wait(&self) {
        tokio::time::sleep(self.duration).await;
    }
}

/// Zero-wait delay for deterministic tests.
#[derive(Debug, Clone, Default)]
pub struct NoDelay;

#[async_trait::async_trait]
impl SettleDelay for NoDelay {
    async fn wait(&self) {}
}
