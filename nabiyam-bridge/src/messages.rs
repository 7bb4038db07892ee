//! Message enum and output helpers.

use crate::app::ChatApp;
use crate::view::{self, Line};

use nabiyam_core::{ChatEngine, ChatEvent};

use std::sync::Arc;

// ────────────────────────────────────────────────────────────────
// Message enum
// ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub enum Message {
    EngineReady(Arc<ChatEngine>),
    /// A line typed by the user.
    InputSent(String),
    /// stdin closed.
    InputClosed,
    Chat(ChatEvent),
}

// ────────────────────────────────────────────────────────────────
// Output management
// ────────────────────────────────────────────────────────────────

pub fn push_system(app: &mut ChatApp, text: &[String]) {
    app.outbox.extend(view::system_lines(text));
}

pub fn push_error(app: &mut ChatApp, text: &str) {
    app.outbox.push(Line::System(format!("❌ {}", text)));
    app.outbox.push(Line::Blank);
}
