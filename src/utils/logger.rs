use tracing::Subscriber;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// 只留訊息本身，CLI 與 Lambda 共用
fn bare_layer<S>() -> fmt::Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

pub fn init_cli_logger(verbose: bool) {
    let filter = env_filter(if verbose { "akapun=debug,info" } else { "akapun=info" });

    tracing_subscriber::registry()
        .with(filter)
        .with(bare_layer().compact())
        .init();
}

/// JSON lines without timestamps; CloudWatch stamps each line itself.
pub fn init_lambda_logger() {
    tracing_subscriber::registry()
        .with(env_filter("akapun=info"))
        .with(bare_layer().without_time().json())
        .init();
}
