use crate::backend::ReplyBackend;
use crate::builtins;
use crate::config::ChatConfig;
use crate::error::ChatError;
use crate::greeting;
use crate::input::{InputKind, InputParser};
use crate::message::{ChatMessage, MessageId, Sender, Transcript};

use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinSet;
use tracing::{Instrument, Span, debug, info, info_span, warn};
use uuid::Uuid;

/// Events pushed to the UI whenever the transcript changes.
///
/// The channel is unbounded: the engine never waits on the UI, so a slow
/// consumer cannot stall a send or a pending reply.
#[derive(Debug, Clone)]
pub enum ChatEvent {
    Appended(ChatMessage),
    Cleared,
}

/// Result of executing one line of input — tells the UI what to do.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecuteResult {
    /// Chat text was accepted; the bot reply arrives later as an event.
    Sent(MessageId),
    /// A built-in produced text to show directly.
    Output(Vec<String>),
    ClearScreen,
    Exit,
    /// Blank input; nothing happened.
    Ignored,
}

/// One in-memory chat session.
/// The UI holds one instance of this.
pub struct ChatEngine {
    session_id: Uuid,
    config: ChatConfig,
    transcript: Arc<Mutex<Transcript>>,
    backend: Arc<dyn ReplyBackend>,
    events: mpsc::UnboundedSender<ChatEvent>,
    pending: Mutex<JoinSet<()>>,
    span: Span,
}

impl std::fmt::Debug for ChatEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatEngine")
            .field("session_id", &self.session_id)
            .field("config", &self.config)
            .finish()
    }
}

impl ChatEngine {
    /// Opens a session and appends the greeting as the first bot message.
    pub async fn start(
        config: ChatConfig,
        backend: Arc<dyn ReplyBackend>,
        events: mpsc::UnboundedSender<ChatEvent>,
    ) -> Self {
        let session_id = Uuid::new_v4();
        let span = info_span!("chat", session = %session_id);
        span.in_scope(|| info!("Chat session started"));

        let text = greeting::compose(config.greeting, chrono::Local::now().naive_local());
        let mut transcript = Transcript::new();
        let first = transcript.push(Sender::Bot, text, None);
        let _ = events.send(ChatEvent::Appended(first));

        Self {
            session_id,
            config,
            transcript: Arc::new(Mutex::new(transcript)),
            backend,
            events,
            pending: Mutex::new(JoinSet::new()),
            span,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// Route one line of UI input: built-ins run here, chat text is sent.
    pub async fn execute(&self, input: &str) -> Result<ExecuteResult, ChatError> {
        match InputParser::parse(input) {
            InputKind::Empty => Ok(ExecuteResult::Ignored),
            InputKind::Builtin(cmd) => Ok(builtins::dispatch(self, cmd).await),
            InputKind::Chat(text) => self.send(&text).await.map(ExecuteResult::Sent),
        }
    }

    /// Append a user message and schedule its bot reply.
    ///
    /// The user message is in the transcript before this returns; the reply
    /// follows after `reply_delay`. Blank text is rejected.
    pub async fn send(&self, text: &str) -> Result<MessageId, ChatError> {
        if text.trim().is_empty() {
            return Err(ChatError::EmptyInput);
        }

        let user_id = {
            let mut transcript = self.transcript.lock().await;
            let user = transcript.push(Sender::User, text, None);
            // Sent under the lock so events arrive in id order.
            let _ = self.events.send(ChatEvent::Appended(user.clone()));
            user.id
        };
        self.span.in_scope(|| debug!("user {}: {:?}", user_id, text));

        let transcript = self.transcript.clone();
        let backend = self.backend.clone();
        let events = self.events.clone();
        let delay = self.config.reply_delay();
        let text = text.to_string();

        let mut pending = self.pending.lock().await;
        // Reap replies that already landed so the set doesn't grow.
        while pending.try_join_next().is_some() {}

        let span = self.span.clone();
        pending.spawn(
            async move {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }

                let reply = match backend.reply(&text).await {
                    Ok(reply) => reply,
                    Err(e) => {
                        warn!("reply to {} failed: {:#}", user_id, e);
                        format!("⚠️ 답변을 준비하지 못했어요.\n{:#}", e)
                    }
                };

                let mut transcript = transcript.lock().await;
                let bot = transcript.push(Sender::Bot, reply, Some(user_id));
                debug!("bot {} replied to {}", bot.id, user_id);
                let _ = events.send(ChatEvent::Appended(bot));
            }
            .instrument(span),
        );

        Ok(user_id)
    }

    /// Wait until every scheduled reply has been appended.
    pub async fn settle(&self) {
        let mut pending = self.pending.lock().await;
        while let Some(res) = pending.join_next().await {
            if let Err(e) = res {
                self.span.in_scope(|| warn!("reply task failed: {}", e));
            }
        }
    }

    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.transcript.lock().await.snapshot()
    }

    pub async fn recent(&self, n: usize) -> Vec<ChatMessage> {
        self.transcript.lock().await.recent(n).to_vec()
    }

    /// Hide the history shown so far. Pending replies still arrive.
    pub async fn clear(&self) {
        let mut transcript = self.transcript.lock().await;
        transcript.clear();
        let _ = self.events.send(ChatEvent::Cleared);
    }
}
