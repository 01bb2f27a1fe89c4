use serde::{Deserialize, Serialize};

/// Reply of `POST /api/chat`.
///
/// A 2xx reply carries `resposta`; any status may carry `erro`. Both are
/// optional on the wire, so callers must check before use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resposta: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub erro: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_answer() {
        let response: ChatResponse = serde_json::from_str(r#"{"resposta":"R$ 1.234,56"}"#).unwrap();
        assert_eq!(response.resposta.as_deref(), Some("R$ 1.234,56"));
        assert_eq!(response.erro, None);
    }

    #[test]
    fn test_parse_empty_object() {
        let response: ChatResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response, ChatResponse::default());
    }
}
