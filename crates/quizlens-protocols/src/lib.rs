//! # Quizlens Protocols
//!
//! Core protocol definitions (traits) for the quizlens scan pipeline.
//! Contains only interface definitions and shared types - no implementations.
//!
//! ## Core Traits
//!
//! - [`InferenceProvider`] - Trait for remote model implementations
//! - [`OverlaySink`] - Trait for transient result displays

pub mod candidate;
pub mod display;
pub mod error;
pub mod provider;

// Re-export core traits and types
pub use candidate::McqCandidate;
pub use display::OverlaySink;
pub use error::{DisplayError, ProviderError};
pub use provider::{AnswerRequest, AnswerResponse, InferenceProvider, InlineImage};
