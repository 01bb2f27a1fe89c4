use serde::{Deserialize, Serialize};

/// Reply of the single-file upload: `{ mensagem? }` on 2xx, `{ erro? }` otherwise
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDocumentResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mensagem: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub erro: Option<String>,
}

/// One entry of the batch upload's 2xx reply (a JSON array of these)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStatusRecord {
    /// Original file name
    pub arquivo: String,

    /// Server verdict for that file, e.g. "ok" or "duplicado"
    pub status: String,
}

/// Non-2xx reply of the batch upload. Note the English key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
