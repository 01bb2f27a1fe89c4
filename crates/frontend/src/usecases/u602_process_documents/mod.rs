//! Document upload (MVVM)
//!
//! Two pages post to the same endpoint:
//! - single.rs: dashboard upload, one file, one status line
//! - batch.rs: upload page, many files, one result line per file
//!
//! selection.rs holds the picked/dropped files for the batch page.

pub mod api;
pub mod batch;
pub mod selection;
pub mod single;
pub mod view;
pub mod view_model;

pub use view::{BatchUploadPage, SingleUploadPanel};
