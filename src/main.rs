use akapun::utils::error::ErrorKind;
use akapun::utils::{logger, validation::Validate};
use akapun::{
    Akapun, AkapunConfig, AkashiRecorder, CliConfig, LogOnlyReporter, RecordContext, ReportingHandler,
};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting akapun CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match AkapunConfig::from_env().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let event = cli.load_event()?;

    let recorder = AkashiRecorder::from_config(&config);
    let handler = ReportingHandler::new(Akapun::new(recorder), LogOnlyReporter);
    let ctx = RecordContext::with_timeout(config.request_timeout());

    match handler.handle(&ctx, &event).await {
        Ok(out) => {
            println!("{}", out);
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());

            // 輸入錯誤與後端錯誤用不同的退出碼
            let exit_code = match e.kind() {
                ErrorKind::Input | ErrorKind::Config | ErrorKind::Io => 2,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
