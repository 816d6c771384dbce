//! # Quizlens Provider - Gemini
//!
//! Google Gemini inference provider for quizlens.

mod client;
mod keyring;
mod provider;
mod types;

pub use client::{GeminiClient, DEFAULT_BASE_URL};
pub use keyring::KeyRing;
pub use provider::GeminiProvider;
pub use types::*;
