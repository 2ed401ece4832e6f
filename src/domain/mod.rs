pub mod conversation;
pub mod drag;
pub mod views;

pub use conversation::{Category, ConversationRecord, RecordInput, Region, Source, Status};
