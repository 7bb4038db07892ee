//! Turning transcript entries into terminal lines.

use crate::helpers::{body_width, format_clock, wrap};
use textwrap::core::display_width;

use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{cursor::MoveTo, queue};
use nabiyam_core::{ChatMessage, Sender};

use std::io::Write;

pub const BOT_GUTTER: &str = "  │ ";
pub const USER_GUTTER: &str = "  ▸ ";

/// One thing to put on screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    BotHeader(String),
    Bot(String),
    UserHeader(String),
    User(String),
    System(String),
    Blank,
    ClearScreen,
}

/// Lines for one chat message: a header with sender and time, then the
/// wrapped body behind a gutter.
pub fn message_lines(msg: &ChatMessage, bot_name: &str, term_cols: u16) -> Vec<Line> {
    let clock = format_clock(&msg.sent_at.with_timezone(&chrono::Local));
    let width = body_width(term_cols, display_width(BOT_GUTTER));

    let mut lines = Vec::new();
    match msg.sender {
        Sender::Bot => {
            lines.push(Line::BotHeader(format!("🦋 {} · {}", bot_name, clock)));
            lines.extend(wrap(&msg.text, width).into_iter().map(Line::Bot));
        }
        Sender::User => {
            lines.push(Line::UserHeader(format!("you · {}", clock)));
            lines.extend(wrap(msg.text.trim_end(), width).into_iter().map(Line::User));
        }
    }
    lines.push(Line::Blank);
    lines
}

pub fn system_lines(text: &[String]) -> Vec<Line> {
    let mut lines: Vec<Line> = text.iter().cloned().map(Line::System).collect();
    lines.push(Line::Blank);
    lines
}

/// Queue `lines` on `out` and flush once.
pub fn draw<W: Write>(out: &mut W, lines: &[Line]) -> std::io::Result<()> {
    for line in lines {
        match line {
            Line::BotHeader(s) => queue!(
                out,
                SetForegroundColor(Color::Yellow),
                SetAttribute(Attribute::Bold),
                Print(s),
                SetAttribute(Attribute::Reset),
                ResetColor,
                Print("\n")
            )?,
            Line::Bot(s) => queue!(
                out,
                SetForegroundColor(Color::DarkYellow),
                Print(BOT_GUTTER),
                ResetColor,
                Print(s),
                Print("\n")
            )?,
            Line::UserHeader(s) => queue!(
                out,
                SetForegroundColor(Color::Cyan),
                SetAttribute(Attribute::Bold),
                Print(s),
                SetAttribute(Attribute::Reset),
                ResetColor,
                Print("\n")
            )?,
            Line::User(s) => queue!(
                out,
                SetForegroundColor(Color::Cyan),
                Print(USER_GUTTER),
                ResetColor,
                Print(s),
                Print("\n")
            )?,
            Line::System(s) => queue!(
                out,
                SetForegroundColor(Color::DarkGrey),
                Print(s),
                ResetColor,
                Print("\n")
            )?,
            Line::Blank => queue!(out, Print("\n"))?,
            Line::ClearScreen => queue!(out, Clear(ClearType::All), MoveTo(0, 0))?,
        }
    }
    out.flush()
}
