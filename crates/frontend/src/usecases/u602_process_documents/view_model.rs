//! Document upload - View Models

use leptos::html::Input;
use leptos::prelude::*;

use super::batch::{BatchResultView, BatchSurface};
use super::selection::FileSelection;
use super::single::UploadStatusSurface;
use crate::shared::request_cycle::{BusyControl, StatusLine};

/// Dashboard upload: the picker is read directly at trigger time
#[derive(Clone, Copy)]
pub struct SingleUploadVm {
    pub file_input: NodeRef<Input>,
    pub status: RwSignal<Option<StatusLine>>,
}

impl SingleUploadVm {
    pub fn new() -> Self {
        Self {
            file_input: NodeRef::new(),
            status: RwSignal::new(None),
        }
    }
}

impl Default for SingleUploadVm {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadStatusSurface for SingleUploadVm {
    type File = web_sys::File;

    fn selected_file(&self) -> Option<web_sys::File> {
        self.file_input
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
    }

    fn set_status(&self, status: StatusLine) {
        self.status.set(Some(status));
    }
}

#[derive(Clone, Copy)]
pub struct BatchUploadVm {
    pub file_input: NodeRef<Input>,
    pub selection: RwSignal<FileSelection<web_sys::File>, LocalStorage>,
    pub result: RwSignal<BatchResultView>,
    pub is_sending: RwSignal<bool>,
}

impl BatchUploadVm {
    pub fn new() -> Self {
        Self {
            file_input: NodeRef::new(),
            selection: RwSignal::new_local(FileSelection::default()),
            result: RwSignal::new(BatchResultView::default()),
            is_sending: RwSignal::new(false),
        }
    }
}

impl Default for BatchUploadVm {
    fn default() -> Self {
        Self::new()
    }
}

impl BusyControl for BatchUploadVm {
    fn is_busy(&self) -> bool {
        self.is_sending.get_untracked()
    }

    fn set_busy(&self, busy: bool) {
        self.is_sending.set(busy);
    }
}

impl BatchSurface for BatchUploadVm {
    type File = web_sys::File;

    fn selected_files(&self) -> Vec<web_sys::File> {
        self.selection.with_untracked(|s| s.files().to_vec())
    }

    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("alert without window: {}", message);
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            log::error!("alert failed: {:?}", e);
        }
    }

    fn show(&self, view: BatchResultView) {
        self.result.set(view);
    }
}
