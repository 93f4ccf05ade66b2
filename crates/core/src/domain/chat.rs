use thiserror::Error;

/// Immutable snapshot of the authenticated student, captured once per
/// conversation and interpolated into every prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserContext {
    pub name: String,
    pub academic_year: u32,
    pub department: String,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("query text is empty after trimming")]
pub struct InvalidQuery;

/// A validated user question. Construction is the only submission guard:
/// a `Query` is always non-empty after trimming, so the orchestrator never
/// has to re-check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    text: String,
}

impl Query {
    /// Validates that the text has visible content. The original text is
    /// preserved as typed; trimming is applied only for the check.
    pub fn parse(text: impl Into<String>) -> Result<Self, InvalidQuery> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(InvalidQuery);
        }
        Ok(Self { text })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssistantReply {
    pub text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

/// One message in a conversation transcript. Turns are append-only and never
/// reordered; insertion order is display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversationTurn {
    pub speaker: Speaker,
    pub text: String,
}

impl ConversationTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self { speaker: Speaker::User, text: text.into() }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self { speaker: Speaker::Assistant, text: text.into() }
    }
}
