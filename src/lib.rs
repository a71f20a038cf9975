//! Synthetic agronomic sensor data paired with a single language-model call.
//!
//! [`input`] fabricates readings for one of ten farm use cases and
//! [`agent::DecisionRequester`] asks a chat-completion service what to do
//! about them. No device is read or driven.

pub mod agent;
pub mod config;
pub mod error;
pub mod input;
pub mod llm;
pub mod message;
pub mod prompt;

pub use agent::{Assistant, DecisionRequester, RunOutcome, RunReport};
pub use config::LlmConfig;
pub use error::{Error, Result};
pub use input::{InputGenerator, InputSample, UseCase};
pub use llm::{ChatBackend, OpenAiBackend};
