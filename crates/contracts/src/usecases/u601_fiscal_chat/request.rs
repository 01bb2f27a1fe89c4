use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Question text, already trimmed
    pub pergunta: String,

    /// User-supplied model credential (Gemini or Grok)
    #[serde(rename = "apiKey")]
    pub api_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        let request = ChatRequest {
            pergunta: "Qual o total de notas em março?".to_string(),
            api_key: "AK123".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["pergunta"], "Qual o total de notas em março?");
        assert_eq!(json["apiKey"], "AK123");
        assert!(json.get("api_key").is_none());
    }
}
