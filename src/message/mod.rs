pub mod decision;
pub mod llm;

pub use llm::{ChatCompletion, ChatMessage, ChatRequest, Role};
