//! Fiscal Chat - View Model

use leptos::prelude::*;

use super::controller::{trigger_label, ChatSurface};
use super::transcript::{EntryId, Sender, Transcript, TranscriptEntry};
use crate::shared::request_cycle::BusyControl;

#[derive(Clone, Copy)]
pub struct FiscalChatVm {
    pub question: RwSignal<String>,
    pub api_key: RwSignal<String>,
    pub transcript: RwSignal<Transcript>,
    pub is_sending: RwSignal<bool>,
}

impl FiscalChatVm {
    pub fn new() -> Self {
        Self {
            question: RwSignal::new(String::new()),
            api_key: RwSignal::new(String::new()),
            transcript: RwSignal::new(Transcript::default()),
            is_sending: RwSignal::new(false),
        }
    }

    pub fn trigger_label(&self) -> &'static str {
        trigger_label(self.is_sending.get())
    }
}

impl Default for FiscalChatVm {
    fn default() -> Self {
        Self::new()
    }
}

impl BusyControl for FiscalChatVm {
    fn is_busy(&self) -> bool {
        self.is_sending.get_untracked()
    }

    fn set_busy(&self, busy: bool) {
        self.is_sending.set(busy);
    }
}

impl ChatSurface for FiscalChatVm {
    fn question(&self) -> String {
        self.question.get_untracked()
    }

    fn api_key(&self) -> String {
        self.api_key.get_untracked()
    }

    fn clear_question(&self) {
        self.question.set(String::new());
    }

    fn append(&self, text: String, sender: Sender) -> EntryId {
        let entry = TranscriptEntry::new(text, sender);
        let id = entry.id;
        self.transcript.update(|t| {
            t.push(entry);
        });
        id
    }

    fn remove(&self, id: EntryId) {
        self.transcript.update(|t| {
            t.remove(id);
        });
    }
}
