//! Update logic: every `Message` lands here.

use crate::app::{AppState, ChatApp};
use crate::messages::{push_error, push_system, Message};
use crate::view::{self, Line};

use nabiyam_core::{ChatEvent, ExecuteResult};

pub const FAREWELL: &str = "👋 또 만나요!";

pub async fn update(app: &mut ChatApp, message: Message) {
    match message {
        Message::EngineReady(engine) => {
            tracing::info!("Engine ready: session {}", engine.session_id());
            app.engine = Some(engine);
            app.state = AppState::Active;
        }

        Message::InputSent(raw) => {
            // Blank lines never reach the engine.
            if raw.trim().is_empty() {
                return;
            }

            let Some(engine) = app.engine.clone() else {
                push_error(app, "Still starting up, try again in a moment.");
                return;
            };

            match engine.execute(&raw).await {
                Ok(result) => apply_result(app, result),
                Err(e) => push_error(app, &e.to_string()),
            }
        }

        Message::InputClosed => {
            tracing::debug!("stdin closed");
            app.state = AppState::Exiting;
        }

        Message::Chat(ChatEvent::Appended(msg)) => {
            app.outbox
                .extend(view::message_lines(&msg, &app.bot_name, app.cols));
            app.shown_messages += 1;
        }

        // The screen itself is wiped by the ClearScreen result.
        Message::Chat(ChatEvent::Cleared) => {}
    }
}

fn apply_result(app: &mut ChatApp, result: ExecuteResult) {
    match result {
        // The user message and its reply arrive as chat events.
        ExecuteResult::Sent(_) | ExecuteResult::Ignored => {}
        ExecuteResult::Output(lines) => push_system(app, &lines),
        ExecuteResult::ClearScreen => app.outbox.push(Line::ClearScreen),
        ExecuteResult::Exit => {
            push_system(app, &[FAREWELL.to_string()]);
            app.state = AppState::Exiting;
        }
    }
}
