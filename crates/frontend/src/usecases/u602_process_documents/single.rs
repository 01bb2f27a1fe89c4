//! Single-file upload from the dashboard.
//!
//! The trigger stays clickable while the request is in flight; only the
//! status line reports progress.

use contracts::usecases::u602_process_documents::{ProcessDocumentResponse, SINGLE_FILE_FIELD};

use super::api::DocumentApi;
use crate::shared::request_cycle::{
    server_message, HttpReply, InteractionResult, StatusLine, TransportError,
};

pub const SELECT_FILE: &str = "Selecione um arquivo primeiro!";
pub const SENDING: &str = "⏳ Enviando nota...";
pub const DEFAULT_SUCCESS: &str = "Nota processada com sucesso!";
pub const DEFAULT_FAILURE: &str = "Falha no envio";
pub const CONNECTION_ERROR: &str = "❌ Erro de conexão com o servidor.";

pub trait UploadStatusSurface {
    type File;

    fn selected_file(&self) -> Option<Self::File>;
    fn set_status(&self, status: StatusLine);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingleUploadOutcome {
    NoFileSelected,
    Processed,
    Failed,
    TransportFailed,
}

pub fn classify(reply: &HttpReply) -> Result<InteractionResult<String>, TransportError> {
    let body: ProcessDocumentResponse = reply.json()?;
    let result = if reply.is_success() {
        InteractionResult::Success(server_message(body.mensagem, DEFAULT_SUCCESS))
    } else {
        InteractionResult::Failure {
            reason: server_message(body.erro, DEFAULT_FAILURE),
        }
    };
    Ok(result)
}

#[derive(Clone)]
pub struct SingleUploadController<S, A> {
    surface: S,
    api: A,
}

impl<S, A> SingleUploadController<S, A>
where
    S: UploadStatusSurface,
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

    pub async fn submit(&self) -> SingleUploadOutcome {
        let Some(file) = self.surface.selected_file() else {
            self.surface.set_status(StatusLine::attention(SELECT_FILE));
            return SingleUploadOutcome::NoFileSelected;
        };

        self.surface.set_status(StatusLine::progress(SENDING));

        let sent = self
            .api
            .process(SINGLE_FILE_FIELD, std::slice::from_ref(&file))
            .await;

        match InteractionResult::settle(sent, classify) {
            InteractionResult::Success(message) => {
                self.surface
                    .set_status(StatusLine::success(format!("✅ {message}")));
                SingleUploadOutcome::Processed
            }
            InteractionResult::Failure { reason } => {
                log::warn!("document upload rejected: {}", reason);
                self.surface
                    .set_status(StatusLine::attention(format!("❌ Erro: {reason}")));
                SingleUploadOutcome::Failed
            }
            InteractionResult::TransportFailure(e) => {
                log::error!("document upload failed: {}", e);
                self.surface
                    .set_status(StatusLine::attention(CONNECTION_ERROR));
                SingleUploadOutcome::TransportFailed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::request_cycle::StatusTone;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct FakeSurface {
        file: Option<&'static str>,
        statuses: RefCell<Vec<StatusLine>>,
    }

    impl UploadStatusSurface for FakeSurface {
        type File = &'static str;

        fn selected_file(&self) -> Option<&'static str> {
            self.file
        }

        fn set_status(&self, status: StatusLine) {
            self.statuses.borrow_mut().push(status);
        }
    }

    struct FakeApi {
        reply: RefCell<Option<Result<HttpReply, TransportError>>>,
        calls: RefCell<Vec<(String, Vec<&'static str>)>>,
    }

    impl DocumentApi for FakeApi {
        type File = &'static str;

        async fn process(
            &self,
            field: &str,
            files: &[&'static str],
        ) -> Result<HttpReply, TransportError> {
            self.calls
                .borrow_mut()
                .push((field.to_string(), files.to_vec()));
            self.reply
                .borrow_mut()
                .take()
                .unwrap_or_else(|| Err(TransportError::Network("no scripted reply".into())))
        }
    }

    fn controller(
        file: Option<&'static str>,
        reply: Result<HttpReply, TransportError>,
    ) -> SingleUploadController<FakeSurface, FakeApi> {
        SingleUploadController::new(
            FakeSurface {
                file,
                statuses: RefCell::new(Vec::new()),
            },
            FakeApi {
                reply: RefCell::new(Some(reply)),
                calls: RefCell::new(Vec::new()),
            },
        )
    }

    fn last_status(ctl: &SingleUploadController<FakeSurface, FakeApi>) -> StatusLine {
        ctl.surface().statuses.borrow().last().cloned().unwrap()
    }

    #[test]
    fn test_no_file_selected() {
        let ctl = controller(None, Ok(HttpReply::new(200, "{}")));
        assert_eq!(block_on(ctl.submit()), SingleUploadOutcome::NoFileSelected);
        assert!(ctl.api().calls.borrow().is_empty());
        assert_eq!(*ctl.surface().statuses.borrow(), vec![StatusLine::attention(SELECT_FILE)]);
    }

    #[test]
    fn test_success_with_server_message() {
        let ctl = controller(
            Some("nota.xml"),
            Ok(HttpReply::new(200, r#"{"mensagem":"Nota 123 importada"}"#)),
        );
        assert_eq!(block_on(ctl.submit()), SingleUploadOutcome::Processed);

        let calls = ctl.api().calls.borrow();
        assert_eq!(*calls, vec![("file".to_string(), vec!["nota.xml"])]);

        let statuses = ctl.surface().statuses.borrow();
        assert_eq!(statuses[0], StatusLine::progress(SENDING));
        assert_eq!(statuses[1], StatusLine::success("✅ Nota 123 importada"));
    }

    #[test]
    fn test_success_without_message_uses_default() {
        let ctl = controller(Some("nota.pdf"), Ok(HttpReply::new(201, "{}")));
        block_on(ctl.submit());
        assert_eq!(last_status(&ctl), StatusLine::success(format!("✅ {DEFAULT_SUCCESS}")));
    }

    #[test]
    fn test_server_failure() {
        let ctl = controller(
            Some("nota.pdf"),
            Ok(HttpReply::new(400, r#"{"erro":"Formato não suportado"}"#)),
        );
        assert_eq!(block_on(ctl.submit()), SingleUploadOutcome::Failed);
        assert_eq!(last_status(&ctl), StatusLine::attention("❌ Erro: Formato não suportado"));

        let ctl = controller(Some("nota.pdf"), Ok(HttpReply::new(500, "{}")));
        block_on(ctl.submit());
        assert_eq!(last_status(&ctl).text, format!("❌ Erro: {DEFAULT_FAILURE}"));
    }

    #[test]
    fn test_transport_failure() {
        let replies = [
            Err(TransportError::Network("connection refused".into())),
            Ok(HttpReply::new(500, "<html>")),
        ];
        for reply in replies {
            let ctl = controller(Some("nota.pdf"), reply);
            assert_eq!(block_on(ctl.submit()), SingleUploadOutcome::TransportFailed);
            let status = last_status(&ctl);
            assert_eq!(status.text, CONNECTION_ERROR);
            assert_eq!(status.tone, StatusTone::Attention);
        }
    }
}
