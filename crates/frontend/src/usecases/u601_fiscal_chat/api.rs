use contracts::usecases::u601_fiscal_chat::ChatRequest;

use crate::shared::api_utils::FetchClient;
use crate::shared::request_cycle::{HttpReply, TransportError};

/// Sends a question to the chat endpoint
#[allow(async_fn_in_trait)]
pub trait ChatApi {
    async fn ask(&self, request: &ChatRequest) -> Result<HttpReply, TransportError>;
}

impl ChatApi for FetchClient {
    async fn ask(&self, request: &ChatRequest) -> Result<HttpReply, TransportError> {
        self.post_json(&self.config().chat_endpoint, request).await
    }
}
