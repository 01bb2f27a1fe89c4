use contracts::system::auth::LoginRequest;

use crate::shared::api_utils::FetchClient;
use crate::shared::request_cycle::{HttpReply, TransportError};

#[allow(async_fn_in_trait)]
pub trait SessionApi {
    /// Login with CNPJ and password
    async fn login(&self, request: &LoginRequest) -> Result<HttpReply, TransportError>;

    /// Logout (drops the server session)
    async fn logout(&self) -> Result<HttpReply, TransportError>;
}

impl SessionApi for FetchClient {
    async fn login(&self, request: &LoginRequest) -> Result<HttpReply, TransportError> {
        self.post_json(&self.config().login_endpoint, request).await
    }

    async fn logout(&self) -> Result<HttpReply, TransportError> {
        self.post_empty(&self.config().logout_endpoint).await
    }
}
