use serde::{Deserialize, Serialize};

/// Body of `POST /login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub cnpj: String,
    pub senha: String,
}

/// Reply of `POST /login`. Only `erro` is meaningful, and only on failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mensagem: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub erro: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_field_names() {
        let request = LoginRequest {
            cnpj: "12.345.678/0001-90".to_string(),
            senha: "segredo".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["cnpj"], "12.345.678/0001-90");
        assert_eq!(json["senha"], "segredo");
    }

    #[test]
    fn test_login_response_tolerates_extra_and_missing_fields() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"redirect":"/dashboard"}"#).unwrap();
        assert_eq!(response, LoginResponse::default());

        let response: LoginResponse =
            serde_json::from_str(r#"{"erro":"CNPJ não cadastrado"}"#).unwrap();
        assert_eq!(response.erro.as_deref(), Some("CNPJ não cadastrado"));
    }
}
