pub mod fastapi;
pub mod traits;
pub mod types;

pub use fastapi::{normalize_reply, FastApiBackend};
pub use traits::ChatBackend;
pub use types::{validate_message, ChatMessage, ChatRequest, Sender};
