//! Conversation transcript handling for the recall benchmark.
//!
//! This crate owns everything between the agent's history endpoint and a
//! located answer string: the tolerant message model ([`types`]), total text
//! extraction ([`extract`]), the [`source::TranscriptSource`] seam with its
//! HTTP implementation ([`client`]), and the answer search ([`locate`]).

pub mod client;
pub mod config;
pub mod extract;
pub mod locate;
pub mod source;
pub mod types;

pub use client::HistoryClient;
pub use config::HistoryConfig;
pub use extract::extract_text;
pub use locate::{locate_answer, ACK_MARKER, ANSWER_WINDOW, MIN_ANSWER_CHARS};
pub use source::{TranscriptError, TranscriptResult, TranscriptSource};
pub use types::{Message, MessageBody, Role};

/// Commonly used types and functions.
pub mod prelude {
    pub use crate::client::HistoryClient;
    pub use crate::config::HistoryConfig;
    pub use crate::extract::extract_text;
    pub use crate::locate::locate_answer;
    pub use crate::source::{TranscriptError, TranscriptResult, TranscriptSource};
    pub use crate::types::{Message, MessageBody, Role};
}
