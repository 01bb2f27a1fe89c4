use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(Uuid);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn css_class(self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

/// One chat bubble. Never edited after it is appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub id: EntryId,
    pub text: String,
    pub sender: Sender,
}

impl TranscriptEntry {
    pub fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: EntryId(Uuid::new_v4()),
            text: text.into(),
            sender,
        }
    }
}

/// Entries in append order. The only removal is of the pending placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn push(&mut self, entry: TranscriptEntry) -> EntryId {
        let id = entry.id;
        self.entries.push(entry);
        id
    }

    /// Returns false if no entry had that id
    pub fn remove(&mut self, id: EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_keeps_order_of_the_rest() {
        let mut transcript = Transcript::default();
        transcript.push(TranscriptEntry::new("pergunta", Sender::User));
        let pending = transcript.push(TranscriptEntry::new("⏳", Sender::Bot));
        transcript.push(TranscriptEntry::new("resposta", Sender::Bot));

        assert!(transcript.remove(pending));
        assert!(!transcript.remove(pending));

        let texts: Vec<&str> = transcript.entries().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["pergunta", "resposta"]);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = TranscriptEntry::new("same", Sender::Bot);
        let b = TranscriptEntry::new("same", Sender::Bot);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_push_returns_the_entry_id() {
        let mut transcript = Transcript::default();
        let entry = TranscriptEntry::new("pergunta", Sender::User);
        let expected = entry.id;
        assert_eq!(transcript.push(entry), expected);
        assert_eq!(transcript.entries()[0].id, expected);
    }
}
