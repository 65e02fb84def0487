//! Conversation transcript logging.
//!
//! [`JsonlConversationLogger`] implements the
//! [`ConversationLogger`](clinic_application::ConversationLogger) port by
//! appending one JSON object per event to a file.

mod jsonl_logger;

pub use jsonl_logger::JsonlConversationLogger;
