pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::AkapunConfig;

pub use adapters::akashi::AkashiRecorder;
pub use adapters::rollbar::{LogOnlyReporter, RollbarReporter};
pub use crate::core::{
    context::RecordContext,
    handler::{Akapun, ReportingHandler},
    resolver::resolve_click_type,
};
pub use domain::model::{ClickType, IoTClickEvent};
pub use domain::ports::{FaultReporter, Recorder};
pub use utils::error::{AkapunError, ErrorKind, Result};
