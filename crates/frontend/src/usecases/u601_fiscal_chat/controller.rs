//! Chat controller: validates the inputs, shows a placeholder while the
//! question is in flight, and replaces it with the answer or an error.

use contracts::usecases::u601_fiscal_chat::{ChatRequest, ChatResponse};

use super::api::ChatApi;
use super::transcript::{EntryId, Sender};
use crate::shared::request_cycle::{
    server_message, BusyControl, BusyGuard, HttpReply, InteractionResult, TransportError,
};

pub const MISSING_API_KEY: &str = "⚠️ Informe sua chave da API Gemini ou Grok.";
pub const MISSING_QUESTION: &str = "⚠️ Escreva uma pergunta antes de enviar.";
pub const THINKING: &str = "⏳ Pensando... (usando suas notas fiscais)";
pub const ANSWER_PREFIX: &str = "🤖 ";
pub const FAILURE_PREFIX: &str = "⚠️ Erro: ";
pub const NO_ANSWER: &str = "Sem resposta da IA.";
pub const TRANSPORT_FAILURE: &str = "❌ Erro na comunicação com o servidor.";
pub const IDLE_LABEL: &str = "Enviar";
pub const BUSY_LABEL: &str = "Enviando...";

/// Trigger label for a given busy state
pub fn trigger_label(busy: bool) -> &'static str {
    if busy {
        BUSY_LABEL
    } else {
        IDLE_LABEL
    }
}

/// The page elements the chat controller reads and writes
pub trait ChatSurface: BusyControl {
    fn question(&self) -> String;
    fn api_key(&self) -> String;
    fn clear_question(&self);
    fn append(&self, text: String, sender: Sender) -> EntryId;
    fn remove(&self, id: EntryId);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatOutcome {
    MissingApiKey,
    MissingQuestion,
    /// Activated while a question was already in flight
    Ignored,
    Answered,
    Failed,
    TransportFailed,
}

/// 2xx with a non-empty `resposta` is an answer; anything else that parses is
/// an application failure.
pub fn classify(reply: &HttpReply) -> Result<InteractionResult<String>, TransportError> {
    let body: ChatResponse = reply.json()?;
    let result = match body.resposta.filter(|answer| !answer.is_empty()) {
        Some(answer) if reply.is_success() => InteractionResult::Success(answer),
        _ => InteractionResult::Failure {
            reason: server_message(body.erro, NO_ANSWER),
        },
    };
    Ok(result)
}

#[derive(Clone)]
pub struct ChatController<S, A> {
    surface: S,
    api: A,
}

impl<S: ChatSurface, A: ChatApi> ChatController<S, A> {
    pub fn new(surface: S, api: A) -> Self {
        Self { surface, api }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Handle one trigger activation (button click or Enter in the question field)
    pub async fn submit(&self) -> ChatOutcome {
        if self.surface.is_busy() {
            return ChatOutcome::Ignored;
        }

        let question = self.surface.question().trim().to_string();
        let api_key = self.surface.api_key().trim().to_string();

        if api_key.is_empty() {
            self.surface.append(MISSING_API_KEY.to_string(), Sender::Bot);
            return ChatOutcome::MissingApiKey;
        }
        if question.is_empty() {
            self.surface.append(MISSING_QUESTION.to_string(), Sender::Bot);
            return ChatOutcome::MissingQuestion;
        }

        self.surface.append(question.clone(), Sender::User);
        self.surface.clear_question();
        let pending = self.surface.append(THINKING.to_string(), Sender::Bot);
        let _busy = BusyGuard::enter(&self.surface);

        let request = ChatRequest {
            pergunta: question,
            api_key,
        };
        let result = InteractionResult::settle(self.api.ask(&request).await, classify);

        self.surface.remove(pending);

        match result {
            InteractionResult::Success(answer) => {
                self.surface
                    .append(format!("{ANSWER_PREFIX}{answer}"), Sender::Bot);
                ChatOutcome::Answered
            }
            InteractionResult::Failure { reason } => {
                log::warn!("chat request rejected: {}", reason);
                self.surface
                    .append(format!("{FAILURE_PREFIX}{reason}"), Sender::Bot);
                ChatOutcome::Failed
            }
            InteractionResult::TransportFailure(e) => {
                log::error!("chat request failed: {}", e);
                self.surface
                    .append(TRANSPORT_FAILURE.to_string(), Sender::Bot);
                ChatOutcome::TransportFailed
            }
        }
    }
}
