use nabiyam_bridge::app::{self, ChatApp, DEFAULT_COLS};
use nabiyam_bridge::messages::Message;
use nabiyam_bridge::update::update;
use nabiyam_bridge::view::{self, Line};
use nabiyam_core::ChatConfig;

use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: nabiyam-bridge [--config <path>]";

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = parse_args(std::env::args().skip(1))?;
    let config = ChatConfig::resolve(config_path.as_deref()).context("Failed to load config")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cols = crossterm::terminal::size()
        .map(|(c, _)| c)
        .unwrap_or(DEFAULT_COLS);
    let mut app = ChatApp::new(config.bot_name.clone(), cols);
    let mut stdout = std::io::stdout();

    view::draw(
        &mut stdout,
        &[
            Line::System(format!("{} · !help for commands", config.bot_name)),
            Line::Blank,
        ],
    )?;

    let (engine, mut chat_rx) = app::boot(config).await;
    update(&mut app, Message::EngineReady(engine.clone())).await;

    // Stdin reader: one Message per line, InputClosed on EOF.
    let (input_tx, mut input_rx) = mpsc::channel::<Message>(32);
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if input_tx.send(Message::InputSent(line)).await.is_err() {
                        break;
                    }
                }
                Ok(None) => {
                    let _ = input_tx.send(Message::InputClosed).await;
                    break;
                }
                Err(e) => {
                    tracing::error!("stdin read failed: {}", e);
                    let _ = input_tx.send(Message::InputClosed).await;
                    break;
                }
            }
        }
    });

    let mut input_closed = false;
    loop {
        let message = tokio::select! {
            Some(msg) = input_rx.recv() => msg,
            Some(event) = chat_rx.recv() => Message::Chat(event),
            else => break,
        };
        input_closed |= matches!(message, Message::InputClosed);
        if let Ok((cols, _)) = crossterm::terminal::size() {
            app.cols = cols;
        }

        update(&mut app, message).await;
        view::draw(&mut stdout, &app.take_output())?;

        if app.is_done() {
            break;
        }
    }

    // Piped input: let the replies to the last lines land before leaving.
    if input_closed {
        let settle = engine.settle();
        tokio::pin!(settle);
        loop {
            tokio::select! {
                _ = &mut settle => break,
                Some(event) = chat_rx.recv() => {
                    update(&mut app, Message::Chat(event)).await;
                    view::draw(&mut stdout, &app.take_output())?;
                }
            }
        }
        while let Ok(event) = chat_rx.try_recv() {
            update(&mut app, Message::Chat(event)).await;
        }
        view::draw(&mut stdout, &app.take_output())?;
    }

    tracing::info!("Session {} closed after {} messages", engine.session_id(), app.shown_messages);
    Ok(())
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Option<PathBuf>> {
    let mut config = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args.next().context("--config needs a path")?;
                config = Some(PathBuf::from(path));
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            other => bail!("unexpected argument {:?}\n{}", other, USAGE),
        }
    }
    Ok(config)
}
