pub mod common;
pub mod u601_fiscal_chat;
pub mod u602_process_documents;
