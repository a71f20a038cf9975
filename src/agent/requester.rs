use tracing::{debug, info, warn};

use crate::{
    config::LlmConfig,
    error::{Error, Result},
    input::{InputSample, UseCase},
    llm::{ChatBackend, OpenAiBackend},
    message::{decision::generate_decision_messages, llm::ChatRequest},
};

/// Turns a use case and its inputs into one model call and hands back the raw reply.
pub struct DecisionRequester<B> {
    backend: B,
    model: String,
}

impl<B: ChatBackend> DecisionRequester<B> {
    pub fn new(backend: B, model: impl Into<String>) -> Self {
        Self {
            backend,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn build_request(&self, use_case: UseCase, sample: &InputSample) -> Result<ChatRequest> {
        Ok(ChatRequest {
            model: self.model.clone(),
            messages: generate_decision_messages(use_case, sample)?,
        })
    }

    /// The response text is returned verbatim; it is not parsed into its
    /// summary/action/command/reasoning parts.
    pub async fn request_decision(
        &self,
        use_case: UseCase,
        sample: &InputSample,
    ) -> Result<String> {
        self.backend.check_credentials()?;

        let request = self.build_request(use_case, sample)?;
        info!(
            "requesting decision for {} from {} (prompt {} chars)",
            use_case,
            self.model,
            request.user_prompt_len()
        );

        let completion = self.backend.chat(&request).await.map_err(|err| {
            warn!("decision request for {} failed: {}", use_case, err);
            err
        })?;

        let text = completion.first_message().ok_or(Error::EmptyResponse)?;
        debug!("received {} chars of decision text", text.len());
        Ok(text.to_owned())
    }
}

impl DecisionRequester<OpenAiBackend> {
    pub fn from_config(config: &LlmConfig) -> Result<Self> {
        let backend = OpenAiBackend::new(config)?;
        Ok(Self::new(backend, config.model.clone()))
    }
}
