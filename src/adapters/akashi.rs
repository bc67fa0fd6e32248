use crate::config::AkapunConfig;
use crate::core::context::RecordContext;
use crate::domain::model::{ClickType, StampRequest, StampResponse};
use crate::domain::ports::Recorder;
use crate::utils::error::{AkapunError, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use std::fmt;

pub const DEFAULT_AKASHI_URL: &str = "https://atnd.ak4.jp/api/cooperation";

/// Records stamps through the Akashi cooperation API.
#[derive(Clone)]
pub struct AkashiRecorder {
    base_url: String,
    corp_id: String,
    token: String,
    client: Client,
}

impl fmt::Debug for AkashiRecorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AkashiRecorder")
            .field("base_url", &self.base_url)
            .field("corp_id", &self.corp_id)
            .field("token", &"***")
            .finish()
    }
}

impl AkashiRecorder {
    pub fn new(base_url: impl Into<String>, corp_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            corp_id: corp_id.into(),
            token: token.into(),
            client: Client::new(),
        }
    }

    pub fn from_config(config: &AkapunConfig) -> Self {
        Self::new(
            config.akashi_base_url.clone(),
            config.corp_id.clone(),
            config.akashi_token.clone(),
        )
    }

    fn stamps_url(&self) -> String {
        format!("{}/{}/stamps", self.base_url.trim_end_matches('/'), self.corp_id)
    }
}

#[async_trait]
impl Recorder for AkashiRecorder {
    async fn record(&self, ctx: &RecordContext, click_type: ClickType) -> Result<()> {
        let request = StampRequest::new(&self.token, click_type);
        let payload = serde_json::to_vec(&request).map_err(AkapunError::Serialization)?;

        let url = self.stamps_url();
        tracing::debug!("Posting stamp type {} to {}", request.stamp_type, url);

        // send 與讀取 body 都受 deadline 限制
        let (status, body) = ctx
            .run(async move {
                let response = self
                    .client
                    .post(&url)
                    .header(CONTENT_TYPE, "application/json")
                    .body(payload)
                    .send()
                    .await?;
                let status = response.status();
                let body = response.bytes().await?;
                Ok::<_, AkapunError>((status, body))
            })
            .await??;

        tracing::info!(
            status = status.as_u16(),
            "Akashi response: {}",
            String::from_utf8_lossy(&body)
        );

        if status != StatusCode::OK {
            return Err(AkapunError::UnexpectedStatus(status.as_u16()));
        }

        let stamp: StampResponse =
            serde_json::from_slice(&body).map_err(AkapunError::ResponseParse)?;
        if !stamp.success {
            return Err(AkapunError::Rejected);
        }

        Ok(())
    }
}
