use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: &str) -> Self {
        Self {
            role: Role::System,
            content: content.to_owned(),
        }
    }

    pub fn user(content: &str) -> Self {
        Self {
            role: Role::User,
            content: content.to_owned(),
        }
    }
}

/// Body of an OpenAI-compatible `/chat/completions` call.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    /// Characters of user-role content carried by the request.
    pub fn user_prompt_len(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.role == Role::User)
            .map(|m| m.content.chars().count())
            .sum()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatCompletion {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletion {
    /// Shorthand for a completion carrying a single assistant reply.
    pub fn with_text(text: &str) -> Self {
        Self {
            choices: vec![Choice {
                message: ChoiceMessage {
                    content: Some(text.to_owned()),
                },
            }],
        }
    }

    /// Text of the first choice, if there is one with non-blank content.
    pub fn first_message(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .filter(|text| !text.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_serialize_lowercase() {
        let json = serde_json::to_value(ChatMessage::system("x")).unwrap();
        assert_eq!(json["role"], "system");
    }

    #[test]
    fn prompt_length_counts_only_user_content() {
        let request = ChatRequest {
            model: "gpt-4o".into(),
            messages: vec![ChatMessage::system("persona"), ChatMessage::user("pH 6.5 °C")],
        };
        assert_eq!(request.user_prompt_len(), 9);
    }

    #[test]
    fn first_message_skips_blank_content() {
        let blank = r#"{"choices":[{"message":{"role":"assistant","content":"  "}}]}"#;
        let completion: ChatCompletion = serde_json::from_str(blank).unwrap();
        assert_eq!(completion.first_message(), None);

        let null = r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#;
        let completion: ChatCompletion = serde_json::from_str(null).unwrap();
        assert_eq!(completion.first_message(), None);

        let completion: ChatCompletion = serde_json::from_str(r#"{"id":"x"}"#).unwrap();
        assert_eq!(completion.first_message(), None);

        assert_eq!(ChatCompletion::with_text("SIM_OK").first_message(), Some("SIM_OK"));
    }
}
