use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /ask`.
///
/// `question` is optional and loosely typed: a missing or `null` question
/// becomes the empty string, a string is used verbatim, and any other JSON
/// value is rendered as its JSON text (`true`, not `True`). An explicit
/// `null` is treated like an absent field rather than a literal `None`.
#[derive(Debug, Default, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: Option<Value>,
}

impl AskRequest {
    pub fn question_text(&self) -> String {
        match &self.question {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// Body of every `POST /ask` reply, successful or not.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AskResponse {
    pub response: String,
}
