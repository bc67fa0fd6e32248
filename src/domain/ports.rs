use crate::core::context::RecordContext;
use crate::domain::model::ClickType;
use crate::utils::error::{AkapunError, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Records one click as a stamp on the attendance backend.
#[async_trait]
pub trait Recorder: Send + Sync {
    async fn record(&self, ctx: &RecordContext, click_type: ClickType) -> Result<()>;
}

/// Receives every failure that aborts an invocation.
#[async_trait]
pub trait FaultReporter: Send + Sync {
    async fn report(&self, error: &AkapunError) -> Result<()>;
}

#[async_trait]
impl<T: Recorder + ?Sized> Recorder for Arc<T> {
    async fn record(&self, ctx: &RecordContext, click_type: ClickType) -> Result<()> {
        (**self).record(ctx, click_type).await
    }
}

#[async_trait]
impl<T: FaultReporter + ?Sized> FaultReporter for Arc<T> {
    async fn report(&self, error: &AkapunError) -> Result<()> {
        (**self).report(error).await
    }
}
