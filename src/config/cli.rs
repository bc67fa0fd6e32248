use crate::domain::model::IoTClickEvent;
use crate::utils::error::{AkapunError, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

/// Credentials still come from the environment (see `AkapunConfig`).
#[derive(Debug, Clone, Parser)]
#[command(name = "akapun")]
#[command(about = "Record an Akashi stamp as if the IoT button had been clicked")]
pub struct CliConfig {
    #[arg(
        long,
        help = "Click type: SINGLE, DOUBLE or LONG",
        conflicts_with = "event",
        required_unless_present = "event"
    )]
    pub click_type: Option<String>,

    #[arg(long, help = "Path to an IoT 1-Click event JSON file")]
    pub event: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn load_event(&self) -> Result<IoTClickEvent> {
        if let Some(path) = &self.event {
            let data = fs::read(path)?;
            return serde_json::from_slice(&data).map_err(|e| AkapunError::InvalidEvent {
                message: format!("{}: {}", path.display(), e),
            });
        }

        match &self.click_type {
            Some(raw) => Ok(IoTClickEvent::with_click_type(raw.clone())),
            None => Err(AkapunError::InvalidEvent {
                message: "either --click-type or --event is required".to_string(),
            }),
        }
    }
}
