//! Batch upload: every selected file in one multipart request, one result
//! line per file in the server's order.

use contracts::usecases::u602_process_documents::{
    BatchErrorResponse, FileStatusRecord, BATCH_FILES_FIELD,
};

use super::api::DocumentApi;
use crate::shared::request_cycle::{
    server_message, BusyControl, BusyGuard, HttpReply, InteractionResult, TransportError,
};

pub const SELECT_AT_LEAST_ONE: &str = "Selecione ao menos um arquivo!";
pub const SENDING: &str = "⏳ Enviando...";
pub const DEFAULT_FAILURE: &str = "Falha no envio";
pub const SEND_FAILED: &str = "❌ Erro ao enviar os arquivos.";

/// What the result region shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BatchResultView {
    #[default]
    Empty,
    Sending,
    /// One error line, already prefixed
    Error(String),
    Records(Vec<FileStatusRecord>),
}

impl BatchResultView {
    /// Plain-text lines, one per record or a single line otherwise
    pub fn lines(&self) -> Vec<String> {
        match self {
            BatchResultView::Empty => Vec::new(),
            BatchResultView::Sending => vec![SENDING.to_string()],
            BatchResultView::Error(text) => vec![text.clone()],
            BatchResultView::Records(records) => records
                .iter()
                .map(|r| format!("{}: {}", r.arquivo, r.status))
                .collect(),
        }
    }
}

pub trait BatchSurface: BusyControl {
    type File;

    fn selected_files(&self) -> Vec<Self::File>;
    /// Blocking alert
    fn alert(&self, message: &str);
    fn show(&self, view: BatchResultView);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOutcome {
    NoFilesSelected,
    Ignored,
    /// Number of per-file records rendered
    Processed(usize),
    Failed,
    TransportFailed,
}

pub fn classify(
    reply: &HttpReply,
) -> Result<InteractionResult<Vec<FileStatusRecord>>, TransportError> {
    if reply.is_success() {
        return reply.json().map(InteractionResult::Success);
    }
    let body: BatchErrorResponse = reply.json()?;
    Ok(InteractionResult::Failure {
        reason: server_message(body.error, DEFAULT_FAILURE),
    })
}

#[derive(Clone)]
pub struct BatchUploadController<S, A> {
    surface: S,
    api: A,
}

impl<S, A> BatchUploadController<S, A>
where
    S: BatchSurface,
    A: DocumentApi<File = S::File>,
{
    pub fn new(surface: S, api: A) -> Self {
        Self { surface, api }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn submit(&self) -> BatchOutcome {
        if self.surface.is_busy() {
            return BatchOutcome::Ignored;
        }

        let files = self.surface.selected_files();
        if files.is_empty() {
            self.surface.alert(SELECT_AT_LEAST_ONE);
            return BatchOutcome::NoFilesSelected;
        }

        let _busy = BusyGuard::enter(&self.surface);
        self.surface.show(BatchResultView::Sending);

        let sent = self.api.process(BATCH_FILES_FIELD, &files).await;

        match InteractionResult::settle(sent, classify) {
            InteractionResult::Success(records) => {
                let count = records.len();
                self.surface.show(BatchResultView::Records(records));
                BatchOutcome::Processed(count)
            }
            InteractionResult::Failure { reason } => {
                log::warn!("batch upload rejected: {}", reason);
                self.surface
                    .show(BatchResultView::Error(format!("❌ Erro: {reason}")));
                BatchOutcome::Failed
            }
            InteractionResult::TransportFailure(e) => {
                log::error!("batch upload failed: {}", e);
                self.surface
                    .show(BatchResultView::Error(SEND_FAILED.to_string()));
                BatchOutcome::TransportFailed
            }
        }
    }
}
