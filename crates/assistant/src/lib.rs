//! Assistant Query Orchestrator - the conversational half of the portal core.
//!
//! This crate turns a free-text student question plus a `UserContext` into a
//! single bounded request against a generative-text endpoint and maps every
//! outcome into the closed `AssistantError` taxonomy:
//!
//! 1. **Prompt construction** (`prompt`) - fixed persona/topic template with
//!    only the three context fields and the question interpolated
//! 2. **Dispatch** (`client`) - one HTTPS attempt, key-authenticated, fixed
//!    generation parameters and safety settings; no retry, no cache
//! 3. **Orchestration** (`orchestrator`) - `ask` ties the two together
//! 4. **Session** (`session`) - the transcript-owning consumer contract:
//!    append user turn, ask, append reply or the category's literal
//!    user-facing message
//!
//! # Key Types
//!
//! - `GenerativeClient` - pluggable seam so tests run against stubs
//! - `QueryOrchestrator` - stateless single-attempt orchestrator
//! - `ConversationSession` - ordered, append-only transcript owner
//!
//! # Failure Principle
//!
//! No failure escapes the session as a fault. Every error path ends as one
//! `AssistantError`, and the session renders it as an assistant turn.

pub mod client;
pub mod orchestrator;
pub mod prompt;
pub mod session;

pub use client::{GeminiClient, GenerativeClient};
pub use orchestrator::QueryOrchestrator;
pub use session::{ConversationSession, SessionError, GREETING};
