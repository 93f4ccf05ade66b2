use thiserror::Error;

/// User-facing classification of an assistant failure. The category is fixed
/// at the failure site, never inferred later from the diagnostic text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    NetworkOrServiceFailure,
    EmptyOrMalformedResponse,
    Unknown,
}

impl ErrorCategory {
    /// The literal transcript message shown for this category. Failures are
    /// always surfaced as a chat turn, never as a raised fault.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NetworkOrServiceFailure => {
                "Sorry, there seems to be an issue with my AI service. \
                 Please check your internet connection and try again! 🔄"
            }
            Self::EmptyOrMalformedResponse => {
                "I couldn't generate a proper response. \
                 Could you please rephrase your question? 🤔"
            }
            Self::Unknown => "Sorry, I encountered an error. Please try again later! 😅",
        }
    }
}

/// Closed error taxonomy for the assistant query orchestrator. Every failure
/// path terminates in exactly one of these; the diagnostic string is for
/// logging only.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AssistantError {
    #[error("assistant service request failed: {0}")]
    NetworkOrServiceFailure(String),
    #[error("assistant returned no usable reply: {0}")]
    EmptyOrMalformedResponse(String),
    #[error("unexpected assistant failure: {0}")]
    Unknown(String),
}

impl AssistantError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NetworkOrServiceFailure(_) => ErrorCategory::NetworkOrServiceFailure,
            Self::EmptyOrMalformedResponse(_) => ErrorCategory::EmptyOrMalformedResponse,
            Self::Unknown(_) => ErrorCategory::Unknown,
        }
    }

    pub fn diagnostic(&self) -> &str {
        match self {
            Self::NetworkOrServiceFailure(diagnostic)
            | Self::EmptyOrMalformedResponse(diagnostic)
            | Self::Unknown(diagnostic) => diagnostic,
        }
    }

    pub fn user_message(&self) -> &'static str {
        self.category().user_message()
    }
}

#[cfg(test)]
mod tests {
    use super::{AssistantError, ErrorCategory};

    #[test]
    fn service_failure_keeps_diagnostic_and_maps_to_connectivity_message() {
        let error =
            AssistantError::NetworkOrServiceFailure("status 500: Internal Server Error".into());

        assert_eq!(error.category(), ErrorCategory::NetworkOrServiceFailure);
        assert_eq!(error.diagnostic(), "status 500: Internal Server Error");
        assert!(error.user_message().contains("check your internet connection"));
    }

    #[test]
    fn empty_response_maps_to_rephrase_message() {
        let error = AssistantError::EmptyOrMalformedResponse("no candidates in body".into());

        assert_eq!(error.category(), ErrorCategory::EmptyOrMalformedResponse);
        assert!(error.user_message().contains("rephrase your question"));
    }

    #[test]
    fn unknown_maps_to_generic_apology() {
        let error = AssistantError::Unknown("expected value at line 1 column 1".into());

        assert_eq!(error.category(), ErrorCategory::Unknown);
        assert!(error.user_message().contains("try again later"));
    }

    #[test]
    fn display_includes_the_diagnostic_for_logs() {
        let error = AssistantError::Unknown("shape mismatch".into());
        assert_eq!(error.to_string(), "unexpected assistant failure: shape mismatch");
    }
}
