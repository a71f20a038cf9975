use async_trait::async_trait;
use tracing::{debug, warn};

use crate::{
    config::{ApiKey, LlmConfig},
    error::{Error, Result},
    llm::ChatBackend,
    message::llm::{ChatCompletion, ChatRequest},
};

/// OpenAI-compatible `/chat/completions` client.
#[derive(Debug, Clone)]
pub struct OpenAiBackend {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<ApiKey>,
}

impl OpenAiBackend {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl ChatBackend for OpenAiBackend {
    fn check_credentials(&self) -> Result<()> {
        match &self.api_key {
            None => Err(Error::AuthenticationError("OPENAI_API_KEY is not set".into())),
            Some(key) if !key.is_well_formed() => Err(Error::AuthenticationError(
                "API key is blank or contains whitespace".into(),
            )),
            Some(_) => Ok(()),
        }
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatCompletion> {
        self.check_credentials()?;
        let key = self
            .api_key
            .as_ref()
            .ok_or_else(|| Error::AuthenticationError("OPENAI_API_KEY is not set".into()))?;

        let url = self.endpoint();
        debug!("POST {} (model {})", url, request.model);

        let resp = self
            .http
            .post(&url)
            .bearer_auth(key.expose())
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!("chat completion rejected with status {}", status);
            return Err(Error::ServiceUnavailable(format!("status {}: {}", status, body.trim())));
        }

        let completion: ChatCompletion = resp.json().await?;
        Ok(completion)
    }
}
