pub mod response;

pub use response::{BatchErrorResponse, FileStatusRecord, ProcessDocumentResponse};

use crate::usecases::common::UseCaseMetadata;

/// Multipart field carrying the single file on the dashboard upload
pub const SINGLE_FILE_FIELD: &str = "file";

/// Multipart field repeated once per file on the batch upload
pub const BATCH_FILES_FIELD: &str = "files";

pub struct ProcessDocuments;

impl UseCaseMetadata for ProcessDocuments {
    fn usecase_index() -> &'static str {
        "u602"
    }

    fn usecase_name() -> &'static str {
        "process_documents"
    }

    fn display_name() -> &'static str {
        "Processar notas fiscais"
    }

    fn description() -> &'static str {
        "Envio de PDFs e XMLs de notas fiscais para extração no servidor"
    }

    fn endpoint() -> &'static str {
        "/api/process-documents"
    }
}
