use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

use crate::{
    agent::requester::DecisionRequester,
    error::Result,
    input::{InputGenerator, InputSample, UseCase},
    llm::ChatBackend,
    prompt::builder::build_decision_prompt,
};

/// Result of one generate-then-decide cycle. The inputs survive a failed decision.
#[derive(Debug)]
pub struct RunOutcome {
    pub run_id: String,
    pub use_case: UseCase,
    pub started_at: DateTime<Utc>,
    pub inputs: InputSample,
    pub decision: Result<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run_id: String,
    pub use_case: UseCase,
    pub started_at: DateTime<Utc>,
    pub inputs: InputSample,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        self.decision.is_ok()
    }

    pub fn into_report(self) -> RunReport {
        let (decision, error) = match self.decision {
            Ok(text) => (Some(text), None),
            Err(err) => (None, Some(err.to_string())),
        };
        RunReport {
            run_id: self.run_id,
            use_case: self.use_case,
            started_at: self.started_at,
            inputs: self.inputs,
            decision,
            error,
        }
    }
}

/// Pairs the synthetic input generator with a decision requester.
pub struct Assistant<B, R> {
    generator: InputGenerator<R>,
    requester: DecisionRequester<B>,
}

impl<B: ChatBackend, R: Rng> Assistant<B, R> {
    pub fn new(generator: InputGenerator<R>, requester: DecisionRequester<B>) -> Self {
        Self {
            generator,
            requester,
        }
    }

    pub fn requester(&self) -> &DecisionRequester<B> {
        &self.requester
    }

    pub fn generate(&mut self, use_case: UseCase) -> InputSample {
        self.generator.generate(use_case)
    }

    /// Renders the user prompt for `sample` without contacting the model.
    pub fn preview_prompt(&self, use_case: UseCase, sample: &InputSample) -> Result<String> {
        build_decision_prompt(use_case, sample)
    }

    pub async fn run(&mut self, use_case: UseCase) -> RunOutcome {
        let run_id = Uuid::new_v4().simple().to_string();
        let span = info_span!("run", run_id = %run_id, use_case = %use_case);
        let started_at = Utc::now();

        let inputs = span.in_scope(|| {
            info!("generating synthetic inputs");
            self.generator.generate(use_case)
        });

        let decision = self
            .requester
            .request_decision(use_case, &inputs)
            .instrument(span.clone())
            .await;

        span.in_scope(|| match &decision {
            Ok(_) => info!("decision received"),
            Err(err) => error!("run failed: {}", err),
        });

        RunOutcome {
            run_id,
            use_case,
            started_at,
            inputs,
            decision,
        }
    }

    /// Same as [`Assistant::run`], with the use case given by display name.
    pub async fn run_named(&mut self, use_case: &str) -> Result<RunOutcome> {
        let use_case: UseCase = use_case.parse()?;
        Ok(self.run(use_case).await)
    }
}

