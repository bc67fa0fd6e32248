use crate::utils::error::{AkapunError, Result};
use std::future::Future;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

/// Per-invocation context carrying an optional deadline.
///
/// The recorder runs its HTTP exchange through [`RecordContext::run`], so an
/// expired deadline aborts the request instead of letting it hang. Dropping
/// the future returned by `run` cancels the request as well.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordContext {
    deadline: Option<Instant>,
}

impl RecordContext {
    pub fn unbounded() -> Self {
        Self { deadline: None }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            deadline: Some(Instant::now() + timeout),
        }
    }

    /// Lambda 以 epoch 毫秒提供 deadline
    pub fn from_epoch_deadline_millis(deadline_ms: u64) -> Self {
        let deadline = UNIX_EPOCH + Duration::from_millis(deadline_ms);
        let remaining = deadline
            .duration_since(SystemTime::now())
            .unwrap_or(Duration::ZERO);
        Self::with_timeout(remaining)
    }

    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    pub async fn run<F, T>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = T>,
    {
        match self.remaining() {
            None => Ok(fut.await),
            Some(remaining) if remaining.is_zero() => Err(AkapunError::DeadlineExceeded),
            Some(remaining) => tokio::time::timeout(remaining, fut)
                .await
                .map_err(|_| AkapunError::DeadlineExceeded),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[tokio::test]
    async fn test_unbounded_runs_to_completion() {
        let ctx = RecordContext::unbounded();
        assert!(ctx.remaining().is_none());
        assert_eq!(ctx.run(async { 42 }).await.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_expired_deadline_fails_without_polling() {
        let ctx = RecordContext::from_epoch_deadline_millis(0);
        assert_eq!(ctx.remaining(), Some(Duration::ZERO));

        let polled = AtomicBool::new(false);
        let result = ctx.run(async { polled.store(true, Ordering::SeqCst) }).await;
        assert!(matches!(result, Err(AkapunError::DeadlineExceeded)));
        assert!(!polled.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_slow_future_times_out() {
        let ctx = RecordContext::with_timeout(Duration::from_millis(20));
        let result = ctx
            .run(tokio::time::sleep(Duration::from_secs(5)))
            .await;
        assert!(matches!(result, Err(AkapunError::DeadlineExceeded)));
    }
}
