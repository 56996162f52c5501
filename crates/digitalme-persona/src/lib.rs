//! # digitalme-persona
//!
//! Domain layer for the DigitalMe persona.
//! Everything here is immutable process-wide data plus pure functions over
//! it: the personality record, the default system prompt, the keyword
//! responder and the persona's two tools. No I/O, no state.

pub mod profile;
pub mod responder;
pub mod thinking;
pub mod tool;

// Re-exports for convenience.
pub use profile::{personality_json, PersonalityRecord, IVAN, MODEL_NAME, SYSTEM_PROMPT};
pub use responder::{respond, KeywordRule, Topic, FALLBACK_REPLY, RULES};
pub use thinking::structured_analysis;
pub use tool::{PersonaTool, ToolArgument};
