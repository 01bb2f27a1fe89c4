//! Fiscal chat page (MVVM)
//!
//! - api.rs: `ChatApi` over `FetchClient`
//! - transcript.rs: append-only message list
//! - controller.rs: one question in, one answer (or error) out
//! - view_model.rs: signals backing the page
//! - view.rs: `FiscalChatPage`

pub mod api;
pub mod controller;
pub mod transcript;
pub mod view;
pub mod view_model;

pub use view::FiscalChatPage;
