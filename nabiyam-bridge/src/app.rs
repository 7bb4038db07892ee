//! Application state and boot logic.

use crate::view::Line;

use nabiyam_core::{ChatConfig, ChatEngine, ChatEvent, KeywordBackend};

use std::sync::Arc;
use tokio::sync::mpsc;

// ────────────────────────────────────────────────────────────────
// App State
// ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    Booting,
    Active,
    Exiting,
}

pub const DEFAULT_COLS: u16 = 80;

// ────────────────────────────────────────────────────────────────
// ChatApp
// ────────────────────────────────────────────────────────────────

pub struct ChatApp {
    pub engine: Option<Arc<ChatEngine>>,
    pub state: AppState,
    pub bot_name: String,
    pub cols: u16,

    /// Lines produced by `update` and not yet drawn.
    pub outbox: Vec<Line>,

    /// Messages shown this session (survives `!clear`).
    pub shown_messages: usize,
}

impl ChatApp {
    pub fn new(bot_name: impl Into<String>, cols: u16) -> Self {
        Self {
            engine: None,
            state: AppState::Booting,
            bot_name: bot_name.into(),
            cols,
            outbox: Vec::new(),
            shown_messages: 0,
        }
    }

    /// Hand over the lines waiting to be drawn.
    pub fn take_output(&mut self) -> Vec<Line> {
        std::mem::take(&mut self.outbox)
    }

    pub fn is_done(&self) -> bool {
        self.state == AppState::Exiting
    }
}

// ────────────────────────────────────────────────────────────────
// Boot
// ────────────────────────────────────────────────────────────────

/// Start a keyword-backed engine for `config`.
///
/// Events are unbounded so the engine never blocks on a UI that is busy
/// reading stdin.
pub async fn boot(config: ChatConfig) -> (Arc<ChatEngine>, mpsc::UnboundedReceiver<ChatEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let engine = ChatEngine::start(config, Arc::new(KeywordBackend), tx).await;
    (Arc::new(engine), rx)
}
