/// Default number of messages shown by `!history`.
pub const DEFAULT_HISTORY: usize = 10;

#[derive(Debug, PartialEq)]
pub enum InputKind {
    /// Blank or whitespace-only; nothing is sent.
    Empty,
    /// A `!` command handled locally.
    Builtin(Builtin),
    /// Text for the bot, as typed.
    Chat(String),
}

#[derive(Debug, PartialEq)]
pub enum Builtin {
    Help,
    Topics,
    History(usize),
    Clear,
    Exit,
    Unknown(String),
}

pub struct InputParser;

impl InputParser {
    pub fn parse(input: &str) -> InputKind {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return InputKind::Empty;
        }

        if let Some(rest) = trimmed.strip_prefix('!') {
            let parts: Vec<&str> = rest.split_whitespace().collect();
            if let Some(cmd) = parts.first() {
                let builtin = match cmd.to_lowercase().as_str() {
                    "help" => Builtin::Help,
                    "topics" => Builtin::Topics,
                    "history" => Builtin::History(
                        parts
                            .get(1)
                            .and_then(|s| s.parse::<usize>().ok())
                            .unwrap_or(DEFAULT_HISTORY),
                    ),
                    "clear" | "cls" => Builtin::Clear,
                    "exit" | "quit" => Builtin::Exit,
                    _ => Builtin::Unknown(cmd.to_string()),
                };
                return InputKind::Builtin(builtin);
            }
        }

        InputKind::Chat(input.to_string())
    }
}
