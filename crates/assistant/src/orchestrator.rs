use std::sync::Arc;

use askcampus_core::{AssistantError, AssistantReply, Query, UserContext};
use tracing::{debug, warn};

use crate::client::GenerativeClient;
use crate::prompt::build_prompt;

/// Stateless orchestrator for assistant queries. Each `ask` is one attempt
/// against the endpoint; retry and sequencing policy belong to the caller.
/// Concurrent calls are independent and may complete in any order.
pub struct QueryOrchestrator {
    client: Arc<dyn GenerativeClient>,
}

impl QueryOrchestrator {
    pub fn new(client: Arc<dyn GenerativeClient>) -> Self {
        Self { client }
    }

    pub async fn ask(
        &self,
        query: &Query,
        context: &UserContext,
    ) -> Result<AssistantReply, AssistantError> {
        let prompt = build_prompt(query, context);
        debug!(prompt_chars = prompt.len(), "asking assistant");

        match self.client.generate(&prompt).await {
            Ok(text) => Ok(AssistantReply { text }),
            Err(error) => {
                warn!(
                    category = ?error.category(),
                    diagnostic = error.diagnostic(),
                    "assistant query failed"
                );
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use askcampus_core::{AssistantError, ErrorCategory, Query, UserContext};
    use async_trait::async_trait;

    use super::QueryOrchestrator;
    use crate::client::GenerativeClient;

    struct StubClient {
        outcome: Result<String, AssistantError>,
        seen_prompts: Mutex<Vec<String>>,
    }

    impl StubClient {
        fn replying(text: &str) -> Self {
            Self { outcome: Ok(text.to_string()), seen_prompts: Mutex::new(Vec::new()) }
        }

        fn failing(error: AssistantError) -> Self {
            Self { outcome: Err(error), seen_prompts: Mutex::new(Vec::new()) }
        }
    }

    #[async_trait]
    impl GenerativeClient for StubClient {
        async fn generate(&self, prompt: &str) -> Result<String, AssistantError> {
            self.seen_prompts.lock().expect("prompt log").push(prompt.to_string());
            self.outcome.clone()
        }
    }

    fn context() -> UserContext {
        UserContext {
            name: "Asha".to_string(),
            academic_year: 3,
            department: "CSE".to_string(),
        }
    }

    #[tokio::test]
    async fn ask_sends_the_built_prompt_and_wraps_the_reply() {
        let client = Arc::new(StubClient::replying("The drive is on July 25."));
        let orchestrator = QueryOrchestrator::new(client.clone());
        let query = Query::parse("When is the placement drive?").expect("non-empty");

        let reply = orchestrator.ask(&query, &context()).await.expect("stub replies");
        assert_eq!(reply.text, "The drive is on July 25.");

        let prompts = client.seen_prompts.lock().expect("prompt log");
        assert_eq!(prompts.len(), 1, "exactly one attempt, no retry");
        assert!(prompts[0].contains("User Profile: Asha, Year: 3, Department: CSE"));
        assert!(prompts[0].contains("User Question: When is the placement drive?"));
    }

    #[tokio::test]
    async fn every_failure_category_passes_through_unchanged() {
        let failures = [
            AssistantError::NetworkOrServiceFailure("status 500".into()),
            AssistantError::EmptyOrMalformedResponse("no candidates".into()),
            AssistantError::Unknown("bad shape".into()),
        ];

        for failure in failures {
            let orchestrator =
                QueryOrchestrator::new(Arc::new(StubClient::failing(failure.clone())));
            let query = Query::parse("hello").expect("non-empty");

            let error = orchestrator.ask(&query, &context()).await.err().expect("stub fails");
            assert_eq!(error, failure);
        }
    }

    #[tokio::test]
    async fn error_categories_stay_within_the_closed_set() {
        let cases = [
            (AssistantError::NetworkOrServiceFailure("x".into()), ErrorCategory::NetworkOrServiceFailure),
            (AssistantError::EmptyOrMalformedResponse("x".into()), ErrorCategory::EmptyOrMalformedResponse),
            (AssistantError::Unknown("x".into()), ErrorCategory::Unknown),
        ];

        for (failure, category) in cases {
            let orchestrator = QueryOrchestrator::new(Arc::new(StubClient::failing(failure)));
            let query = Query::parse("hello").expect("non-empty");
            let error = orchestrator.ask(&query, &context()).await.err().expect("stub fails");
            assert_eq!(error.category(), category);
        }
    }
}
