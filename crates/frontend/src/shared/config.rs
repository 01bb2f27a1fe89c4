//! Client configuration: where the API lives and which paths the pages use.

use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_fiscal_chat::FiscalChat;
use contracts::usecases::u602_process_documents::ProcessDocuments;

use super::api_utils::api_base;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin prefixed to every endpoint. Empty means relative URLs.
    pub api_base: String,
    pub chat_endpoint: String,
    pub process_documents_endpoint: String,
    pub login_endpoint: String,
    pub logout_endpoint: String,
    pub home_page: String,
    pub dashboard_page: String,
    pub chat_page: String,
    pub upload_page: String,
    /// Delay between a successful login message and the redirect
    pub login_redirect_delay_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            chat_endpoint: FiscalChat::endpoint().to_string(),
            process_documents_endpoint: ProcessDocuments::endpoint().to_string(),
            login_endpoint: "/login".to_string(),
            logout_endpoint: "/logout".to_string(),
            home_page: "/".to_string(),
            dashboard_page: "/dashboard".to_string(),
            chat_page: "/chat".to_string(),
            upload_page: "/upload".to_string(),
            login_redirect_delay_ms: 1000,
        }
    }
}

impl ClientConfig {
    /// Defaults with the API base taken from the current page origin.
    ///
    /// Pages and API are served by the same server, so the session cookie
    /// travels with every request.
    pub fn from_location() -> Self {
        Self {
            api_base: api_base(),
            ..Self::default()
        }
    }

    /// Absolute URL for an endpoint path
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let config = ClientConfig::default();
        assert_eq!(config.chat_endpoint, "/api/chat");
        assert_eq!(config.process_documents_endpoint, "/api/process-documents");
        assert_eq!(config.login_endpoint, "/login");
        assert_eq!(config.logout_endpoint, "/logout");
        assert_eq!(config.login_redirect_delay_ms, 1000);
    }

    #[test]
    fn test_endpoint_url() {
        let mut config = ClientConfig::default();
        assert_eq!(config.endpoint_url("/api/chat"), "/api/chat");

        config.api_base = "https://notas.example.com/".to_string();
        assert_eq!(
            config.endpoint_url(&config.chat_endpoint),
            "https://notas.example.com/api/chat"
        );
    }
}
