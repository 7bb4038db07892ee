//! Built-in `!` command handlers.

use crate::engine::{ChatEngine, ExecuteResult};
use crate::input::Builtin;
use crate::message::Sender;
use crate::responder::{FALLBACK, RULES};

/// Central dispatch for all `!` commands.
pub async fn dispatch(engine: &ChatEngine, cmd: Builtin) -> ExecuteResult {
    match cmd {
        Builtin::Help => ExecuteResult::Output(help_lines()),

        Builtin::Topics => ExecuteResult::Output(topic_lines()),

        Builtin::History(limit) => {
            let recent = engine.recent(limit).await;
            if recent.is_empty() {
                return ExecuteResult::Output(vec!["No messages yet.".to_string()]);
            }

            let mut lines = vec![format!("📜 Last {} messages:", recent.len()), String::new()];
            for msg in &recent {
                let who = match msg.sender {
                    Sender::User => "you",
                    Sender::Bot => engine.config().bot_name.as_str(),
                };
                let first_line = msg.text.lines().next().unwrap_or_default();
                lines.push(format!("  #{:<4} {:<8} {}", msg.id.0, who, first_line));
            }
            ExecuteResult::Output(lines)
        }

        Builtin::Clear => {
            engine.clear().await;
            ExecuteResult::ClearScreen
        }

        Builtin::Exit => ExecuteResult::Exit,

        Builtin::Unknown(name) => ExecuteResult::Output(vec![
            format!("❌ Unknown command: !{}", name),
            String::new(),
            "Type !help for available commands.".to_string(),
        ]),
    }
}

pub fn help_lines() -> Vec<String> {
    [
        "Built-in commands:",
        "",
        "  !help              Show this help",
        "  !topics            Show which keywords pick which menu",
        "  !history [n]       Show the last n messages (default: 10)",
        "  !clear, !cls       Clear the conversation",
        "  !exit, !quit       Leave the chat",
        "",
        "  Anything else is sent to the bot.",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Keyword table in match order.
pub fn topic_lines() -> Vec<String> {
    let mut lines = vec!["🗂 Topics (checked in this order):".to_string(), String::new()];
    for (i, rule) in RULES.iter().enumerate() {
        lines.push(format!(
            "  {}. {:<9} {}",
            i + 1,
            rule.category,
            rule.keywords.join(", ")
        ));
    }
    lines.push(String::new());
    lines.push(format!("  Anything else gets the {} menu.", FALLBACK));
    lines
}
