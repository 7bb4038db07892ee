pub mod backend;
pub mod builtins;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod greeting;
pub mod input;
pub mod message;
pub mod responder;

// Re-export the main types so users can just use `nabiyam_core::ChatEngine`
pub use backend::{KeywordBackend, ReplyBackend};
pub use catalog::{Category, CategoryContent, MenuItem};
pub use config::ChatConfig;
pub use engine::{ChatEngine, ChatEvent, ExecuteResult};
pub use error::{ChatError, ConfigError};
pub use message::{ChatMessage, MessageId, Sender, Transcript};
pub use responder::Responder;
