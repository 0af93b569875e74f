//! Per-tool state machines.
//!
//! Each controller owns one tool's transient state exclusively and moves
//! through `Idle -> Submitting -> Idle` once per user action. Submission is
//! refused while disabled rather than rejected afterwards, and every failure
//! collapses into the tool's fixed fallback message so the session stays
//! usable and inputs are preserved.

mod notes;
mod summarizer;
mod translator;

pub use notes::{MeetingNotesController, ALLOWED_EXTENSIONS, NOTES_FALLBACK};
pub use summarizer::{SummarizerController, MIN_INPUT_CHARS, SUMMARIZER_FALLBACK};
pub use translator::{TranslatorController, TRANSLATOR_FALLBACK};
