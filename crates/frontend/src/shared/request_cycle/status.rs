#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    /// Validation and error messages
    Attention,
    /// Request in flight
    Progress,
    Success,
}

impl StatusTone {
    pub fn css_class(self) -> &'static str {
        match self {
            StatusTone::Attention => "status-attention",
            StatusTone::Progress => "status-progress",
            StatusTone::Success => "status-success",
        }
    }
}

/// A single status message with the color it is rendered in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub tone: StatusTone,
}

impl StatusLine {
    pub fn attention(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: StatusTone::Attention,
        }
    }

    pub fn progress(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: StatusTone::Progress,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: StatusTone::Success,
        }
    }
}
