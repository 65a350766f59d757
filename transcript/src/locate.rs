//! Locating the agent's answer to a benchmark question inside a transcript.

use crate::extract::extract_text;
use crate::types::Message;

/// How many messages after the question are searched for an answer.
pub const ANSWER_WINDOW: usize = 5;

/// Replies shorter than this many characters are treated as acknowledgement
/// noise rather than answers. Counted in Unicode scalar values, not bytes.
pub const MIN_ANSWER_CHARS: usize = 25;

/// Stock phrase the agent emits when it files a note instead of answering.
/// Matched case-sensitively anywhere in the reply.
pub const ACK_MARKER: &str = "Saved to your Study Guide";

/// Finds the agent's answer to `question` in a transcript.
///
/// Scans backward for the most recent user turn containing the question
/// (case-insensitive substring match), then forward over at most
/// [`ANSWER_WINDOW`] following messages for the first assistant reply that
/// does not contain [`ACK_MARKER`] and is at least [`MIN_ANSWER_CHARS`]
/// characters long. Disqualified candidates are skipped, not fatal; `None`
/// means no qualifying answer exists.
pub fn locate_answer(transcript: &[Message], question: &str) -> Option<String> {
    let needle = question.to_lowercase();
    let question_idx = transcript.iter().rposition(|message| {
        message.is_user() && extract_text(message).to_lowercase().contains(&needle)
    })?;

    let window_end = transcript.len().min(question_idx + 1 + ANSWER_WINDOW);
    for candidate in &transcript[question_idx + 1..window_end] {
        if !candidate.is_assistant() {
            continue;
        }
        let text = extract_text(candidate);
        if text.contains(ACK_MARKER) || text.chars().count() < MIN_ANSWER_CHARS {
            continue;
        }
        return Some(text);
    }
    None
}
