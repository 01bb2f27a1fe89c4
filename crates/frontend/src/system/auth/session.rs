//! Login and logout. No busy state: the form stays interactive throughout.

use contracts::system::auth::{LoginRequest, LoginResponse};

use super::api::SessionApi;
use crate::shared::config::ClientConfig;
use crate::shared::request_cycle::{
    server_message, HttpReply, InteractionResult, StatusLine, TransportError,
};

pub const LOGIN_OK: &str = "✅ Login bem-sucedido!";
pub const DEFAULT_REJECTION: &str = "CNPJ ou senha inválidos";
pub const CONNECTION_ERROR: &str = "❌ Erro de conexão com o servidor.";

pub trait SessionSurface {
    fn cnpj(&self) -> String;
    fn senha(&self) -> String;
    fn set_message(&self, message: StatusLine);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Navigate to `to` once `after_ms` has elapsed
    Redirect { to: String, after_ms: u32 },
    Rejected,
    TransportFailed,
}

pub fn classify(reply: &HttpReply) -> Result<InteractionResult<()>, TransportError> {
    let body: LoginResponse = reply.json()?;
    if reply.is_success() {
        return Ok(InteractionResult::Success(()));
    }
    Ok(InteractionResult::Failure {
        reason: server_message(body.erro, DEFAULT_REJECTION),
    })
}

#[derive(Clone)]
pub struct SessionController<S, A> {
    surface: S,
    api: A,
    config: ClientConfig,
}

impl<S: SessionSurface, A: SessionApi> SessionController<S, A> {
    pub fn new(surface: S, api: A, config: ClientConfig) -> Self {
        Self {
            surface,
            api,
            config,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn login(&self) -> LoginOutcome {
        let request = LoginRequest {
            cnpj: self.surface.cnpj().trim().to_string(),
            senha: self.surface.senha().trim().to_string(),
        };

        match InteractionResult::settle(self.api.login(&request).await, classify) {
            InteractionResult::Success(()) => {
                self.surface.set_message(StatusLine::success(LOGIN_OK));
                LoginOutcome::Redirect {
                    to: self.config.dashboard_page.clone(),
                    after_ms: self.config.login_redirect_delay_ms,
                }
            }
            InteractionResult::Failure { reason } => {
                self.surface
                    .set_message(StatusLine::attention(format!("❌ {reason}")));
                LoginOutcome::Rejected
            }
            InteractionResult::TransportFailure(e) => {
                log::error!("login request failed: {}", e);
                self.surface
                    .set_message(StatusLine::attention(CONNECTION_ERROR));
                LoginOutcome::TransportFailed
            }
        }
    }
}

/// Drop the server session. Returns where to navigate, whatever the outcome.
pub async fn end_session<A: SessionApi>(api: &A, config: &ClientConfig) -> String {
    match api.logout().await {
        Ok(reply) if !reply.is_success() => {
            log::warn!("logout returned HTTP {}", reply.status);
        }
        Ok(_) => {}
        Err(e) => log::error!("logout request failed: {}", e),
    }
    config.home_page.clone()
}
