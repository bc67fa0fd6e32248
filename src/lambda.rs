use akapun::utils::logger;
use akapun::utils::validation::Validate;
use akapun::{Akapun, AkapunConfig, AkashiRecorder, IoTClickEvent, RecordContext, ReportingHandler};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // cold start 時讀一次設定，之後所有 invocation 共用
    let config = AkapunConfig::from_env()?;
    config.validate()?;

    let recorder = AkashiRecorder::from_config(&config);
    let handler = Arc::new(ReportingHandler::new(
        Akapun::new(recorder),
        config.fault_reporter(),
    ));

    run(service_fn(move |event: LambdaEvent<IoTClickEvent>| {
        let handler = Arc::clone(&handler);
        async move {
            tracing::debug!(request_id = %event.context.request_id, "Received event: {:?}", event.payload);

            let ctx = RecordContext::from_epoch_deadline_millis(event.context.deadline);
            let out = handler.handle(&ctx, &event.payload).await?;
            Ok::<String, Error>(out.to_string())
        }
    }))
    .await
}
