//! Vouch Core Library
//!
//! Core functionality for analyzing dealer testimonial audio: a single
//! Gemini call for verbatim transcription, English translation, and
//! sentiment analysis, plus report formatting and plain-text export.

pub mod analyzer;
pub mod audio;
pub mod error;
pub mod format;
pub mod highlight;
pub mod provider;
pub mod session;
pub mod types;

// Re-export commonly used items at crate root
pub use analyzer::{Analyzer, GeminiAnalyzer, parse_report, save_report};
pub use audio::{AudioPayload, load_audio_payload};
pub use error::{Result, VouchError};
pub use format::{confidence_percent, format_report_text, format_sentiment};
pub use highlight::{TextSpan, highlight_quotes};
pub use provider::{GEMINI, ProviderConfig};
pub use session::{RequestToken, Session, SessionState};
pub use types::{ReportData, ReportSection, Sentiment, SentimentLabel};
