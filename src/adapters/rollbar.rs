use crate::domain::ports::FaultReporter;
use crate::utils::error::{AkapunError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_ROLLBAR_ENDPOINT: &str = "https://api.rollbar.com";
pub const DEFAULT_REPORT_TIMEOUT: Duration = Duration::from_secs(3);
const SERVER_HOST: &str = "AWS Lambda";
const SERVER_ROOT: &str = "github.com/shirakiya/akapun";

/// Sends each fault as one Rollbar item.
#[derive(Clone)]
pub struct RollbarReporter {
    endpoint: String,
    token: String,
    environment: String,
    timeout: Duration,
    client: Client,
}

impl fmt::Debug for RollbarReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RollbarReporter")
            .field("endpoint", &self.endpoint)
            .field("token", &"***")
            .field("environment", &self.environment)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Serialize)]
struct RollbarItem<'a> {
    access_token: &'a str,
    data: RollbarData<'a>,
}

#[derive(Serialize)]
struct RollbarData<'a> {
    environment: &'a str,
    level: &'static str,
    platform: &'static str,
    language: &'static str,
    timestamp: i64,
    server: RollbarServer,
    body: RollbarBody,
    custom: RollbarCustom,
}

#[derive(Serialize)]
struct RollbarServer {
    host: &'static str,
    root: &'static str,
}

#[derive(Serialize)]
struct RollbarBody {
    message: RollbarMessage,
}

#[derive(Serialize)]
struct RollbarMessage {
    body: String,
}

#[derive(Serialize)]
struct RollbarCustom {
    kind: &'static str,
}

impl RollbarReporter {
    pub fn new(token: impl Into<String>, environment: impl Into<String>) -> Self {
        Self::with_endpoint(DEFAULT_ROLLBAR_ENDPOINT, token, environment)
    }

    pub fn with_endpoint(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        environment: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            environment: environment.into(),
            timeout: DEFAULT_REPORT_TIMEOUT,
            client: Client::new(),
        }
    }

    /// 回報逾時後放棄，invocation 不會被 Rollbar 拖住
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn item_url(&self) -> String {
        format!("{}/api/1/item/", self.endpoint.trim_end_matches('/'))
    }
}

#[async_trait]
impl FaultReporter for RollbarReporter {
    async fn report(&self, error: &AkapunError) -> Result<()> {
        let item = RollbarItem {
            access_token: &self.token,
            data: RollbarData {
                environment: &self.environment,
                level: "error",
                platform: "lambda",
                language: "rust",
                timestamp: chrono::Utc::now().timestamp(),
                server: RollbarServer {
                    host: SERVER_HOST,
                    root: SERVER_ROOT,
                },
                body: RollbarBody {
                    message: RollbarMessage {
                        body: error.to_string(),
                    },
                },
                custom: RollbarCustom {
                    kind: error.kind().as_str(),
                },
            },
        };

        let response = tokio::time::timeout(
            self.timeout,
            self.client
                .post(self.item_url())
                .header("X-Rollbar-Access-Token", &self.token)
                .json(&item)
                .send(),
        )
        .await
        .map_err(|_| AkapunError::DeadlineExceeded)??;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(AkapunError::UnexpectedStatus(status.as_u16()));
        }

        tracing::debug!("Fault reported to Rollbar");
        Ok(())
    }
}

/// Forwards nothing; the fault stays in the error line `ReportingHandler`
/// already logged. Used by the CLI and when no Rollbar token is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogOnlyReporter;

#[async_trait]
impl FaultReporter for LogOnlyReporter {
    async fn report(&self, error: &AkapunError) -> Result<()> {
        tracing::debug!(kind = error.kind().as_str(), "Fault not forwarded");
        Ok(())
    }
}
