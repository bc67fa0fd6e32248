use crate::core::context::RecordContext;
use crate::core::resolver::resolve_click_type;
use crate::domain::model::IoTClickEvent;
use crate::domain::ports::{FaultReporter, Recorder};
use crate::utils::error::Result;

pub const HANDLER_OK: &str = "OK";

/// Resolves the click type of an event and records it.
pub struct Akapun<R: Recorder> {
    recorder: R,
}

impl<R: Recorder> Akapun<R> {
    pub fn new(recorder: R) -> Self {
        Self { recorder }
    }

    pub async fn handle_request(&self, ctx: &RecordContext, event: &IoTClickEvent) -> Result<&'static str> {
        let click_type = resolve_click_type(event.raw_click_type())?;
        tracing::info!("Resolved click type: {}", click_type);

        self.recorder.record(ctx, click_type).await?;

        tracing::info!("✅ Stamp recorded for {} click", click_type);
        Ok(HANDLER_OK)
    }
}

/// Outermost boundary: every failure goes to the fault reporter and is then
/// returned unchanged, so the invocation fails loudly.
pub struct ReportingHandler<R: Recorder, F: FaultReporter> {
    akapun: Akapun<R>,
    reporter: F,
}

impl<R: Recorder, F: FaultReporter> ReportingHandler<R, F> {
    pub fn new(akapun: Akapun<R>, reporter: F) -> Self {
        Self { akapun, reporter }
    }

    pub async fn handle(&self, ctx: &RecordContext, event: &IoTClickEvent) -> Result<&'static str> {
        match self.akapun.handle_request(ctx, event).await {
            Ok(out) => Ok(out),
            Err(e) => {
                tracing::error!(kind = e.kind().as_str(), "❌ Invocation failed: {}", e);

                // 回報失敗不可蓋掉原本的錯誤
                if let Err(report_err) = self.reporter.report(&e).await {
                    tracing::warn!("Failed to report fault: {}", report_err);
                }

                Err(e)
            }
        }
    }
}
