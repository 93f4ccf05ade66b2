use askcampus_core::{ConversationTurn, Query, UserContext};
use thiserror::Error;
use tracing::warn;

use crate::orchestrator::QueryOrchestrator;

/// First assistant turn of every session.
pub const GREETING: &str =
    "Hi! I'm AskCampusBot 🤖. Ask me anything about campus life, placements, exams, or events!";

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("message text is empty")]
    EmptyMessage,
    #[error("a request is already in flight for this session")]
    RequestInFlight,
}

/// Owns one conversation: the append-only transcript, the user's context
/// snapshot, and the loading flag the view renders while a request is
/// outstanding.
///
/// One request may be outstanding per session. `send` takes `&mut self`, so
/// the type system already serializes calls; the explicit flag keeps the
/// policy visible and checkable if the session is ever driven through
/// interior mutability.
pub struct ConversationSession {
    orchestrator: QueryOrchestrator,
    context: UserContext,
    transcript: Vec<ConversationTurn>,
    loading: bool,
}

impl ConversationSession {
    pub fn new(orchestrator: QueryOrchestrator, context: UserContext) -> Self {
        Self {
            orchestrator,
            context,
            transcript: vec![ConversationTurn::assistant(GREETING)],
            loading: false,
        }
    }

    pub fn transcript(&self) -> &[ConversationTurn] {
        &self.transcript
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Sends one user message and appends both sides of the exchange. A
    /// failed query still produces an assistant turn - the category's
    /// literal user-facing message - so the user always sees a response.
    /// The loading flag is cleared on every exit path.
    pub async fn send(&mut self, text: &str) -> Result<(), SessionError> {
        let query = Query::parse(text).map_err(|_| SessionError::EmptyMessage)?;
        if self.loading {
            return Err(SessionError::RequestInFlight);
        }

        self.transcript.push(ConversationTurn::user(query.text()));
        self.loading = true;

        let turn = match self.orchestrator.ask(&query, &self.context).await {
            Ok(reply) => ConversationTurn::assistant(reply.text),
            Err(error) => {
                warn!(
                    category = ?error.category(),
                    diagnostic = error.diagnostic(),
                    "rendering failure as assistant turn"
                );
                ConversationTurn::assistant(error.user_message())
            }
        };

        self.transcript.push(turn);
        self.loading = false;
        Ok(())
    }
}
