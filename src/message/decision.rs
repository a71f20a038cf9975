use crate::{
    error::Result,
    input::{InputSample, UseCase},
    message::llm::ChatMessage,
    prompt::builder::{SYSTEM_PROMPT, build_decision_prompt},
};

pub fn generate_decision_messages(
    use_case: UseCase,
    sample: &InputSample,
) -> Result<Vec<ChatMessage>> {
    let system_message = ChatMessage::system(SYSTEM_PROMPT);
    let user_message = ChatMessage::user(&build_decision_prompt(use_case, sample)?);
    Ok(vec![system_message, user_message])
}
