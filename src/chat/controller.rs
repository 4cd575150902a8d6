//! Streaming chat controller.
//!
//! [`ChatController::submit`] spawns one task per query. The task reads the
//! answer body, re-chunks it and sends [`ChatEvent`]s back over an unbounded
//! channel; the controller is the only writer of the transcript and applies
//! those events in order from [`ChatController::next_update`].

use std::sync::Arc;
use std::time::Instant;

use futures_util::StreamExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::chunker::pieces;
use super::decoder::Utf8StreamDecoder;
use super::transcript::Transcript;
use crate::api::DocumentApi;
use crate::config::{ClientConfig, QueryIdStrategy};
use crate::domain::{AutoScroll, ScrollMetrics};
use crate::error::DeskError;
use crate::models::{ChatRequest, MessageId};
use crate::traits::{HttpError, Notification, Notifier};

/// Reply text used when a non-streamed answer has a missing or empty `final_response`.
pub const NO_RESULT_TEXT: &str = "No result found.";

const SEND_FAILED_NOTICE: &str = "Failed to send message";

/// Messages from a reply task to the controller.
#[derive(Debug)]
pub enum ChatEvent {
    /// One re-chunked piece of streamed text
    Piece { message: MessageId, piece: String },
    /// The reply finished; `content` is the full answer
    Completed { message: MessageId, content: String },
    /// The request or the stream failed
    Failed { message: MessageId, error: DeskError },
}

impl ChatEvent {
    pub fn message(&self) -> MessageId {
        match self {
            ChatEvent::Piece { message, .. }
            | ChatEvent::Completed { message, .. }
            | ChatEvent::Failed { message, .. } => *message,
        }
    }
}

/// What changed in the transcript after applying one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateKind {
    Piece(String),
    Completed,
    /// `notice` is the error message appended after the failed reply
    Failed { notice: MessageId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatUpdate {
    /// The reply the event belonged to
    pub message: MessageId,
    pub kind: UpdateKind,
    /// Whether the view should jump to the newest content
    pub scroll_to_bottom: bool,
}

impl ChatUpdate {
    pub fn is_terminal(&self) -> bool {
        !matches!(self.kind, UpdateKind::Piece(_))
    }
}

/// Why a submit did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    EmptyQuery,
    /// A reply is still in flight
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Started { query: MessageId, reply: MessageId },
    Ignored(SubmitRejection),
}

impl SubmitOutcome {
    pub fn is_started(&self) -> bool {
        matches!(self, SubmitOutcome::Started { .. })
    }
}

struct InFlight {
    reply: MessageId,
    task: JoinHandle<()>,
    task_done: bool,
}

/// Owns the transcript and drives at most one reply at a time.
pub struct ChatController {
    api: DocumentApi,
    notifier: Arc<dyn Notifier>,
    query_id: QueryIdStrategy,
    stream: bool,
    chunk_chars: usize,
    transcript: Transcript,
    scroll: AutoScroll,
    in_flight: Option<InFlight>,
    event_tx: mpsc::UnboundedSender<ChatEvent>,
    event_rx: mpsc::UnboundedReceiver<ChatEvent>,
}

impl std::fmt::Debug for ChatController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatController")
            .field("api", &self.api)
            .field("stream", &self.stream)
            .field("messages", &self.transcript.len())
            .field("in_flight", &self.in_flight.as_ref().map(|f| f.reply))
            .finish()
    }
}

impl ChatController {
    pub fn new(api: DocumentApi, notifier: Arc<dyn Notifier>, config: &ClientConfig) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            api,
            notifier,
            query_id: config.query_id.clone(),
            stream: config.stream,
            chunk_chars: config.stream_chunk_chars.max(1),
            transcript: Transcript::with_welcome(config.welcome_message.as_deref()),
            scroll: AutoScroll::new(config.auto_scroll_threshold, config.scroll_debounce),
            in_flight: None,
            event_tx,
            event_rx,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// True from a started submit until its reply settles or is cancelled.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Handle of the reply currently streaming, if any.
    pub fn pending_reply(&self) -> Option<MessageId> {
        self.in_flight.as_ref().map(|f| f.reply)
    }

    pub fn scroll(&self) -> &AutoScroll {
        &self.scroll
    }

    pub fn on_scroll(&mut self, metrics: ScrollMetrics) {
        self.scroll.on_scroll(metrics, Instant::now());
    }

    pub fn on_scroll_distance(&mut self, distance_from_bottom: u32) {
        self.scroll
            .on_scroll_distance(distance_from_bottom, Instant::now());
    }

    /// Send `query` scoped to `selected` file ids.
    ///
    /// Must be called from within a Tokio runtime. The selection is copied
    /// into the request; later changes do not affect it.
    pub fn submit(&mut self, query: &str, selected: &[String]) -> SubmitOutcome {
        if query.trim().is_empty() {
            return SubmitOutcome::Ignored(SubmitRejection::EmptyQuery);
        }
        if let Some(in_flight) = &self.in_flight {
            tracing::debug!("Submit ignored, reply {} still in flight", in_flight.reply);
            return SubmitOutcome::Ignored(SubmitRejection::Busy);
        }

        let query_message = self.transcript.push_user(query);
        self.scroll.reset_for_submit();
        let reply = self.transcript.push_placeholder();

        let request = ChatRequest {
            query: query.to_string(),
            user_id: self.api.user_id().to_string(),
            query_id: self.query_id.next_id(),
            file_id_list: selected.to_vec(),
            stream: self.stream,
        };

        tracing::info!(
            query_id = %request.query_id,
            files = request.file_id_list.len(),
            stream = request.stream,
            "Submitting chat query"
        );

        let api = self.api.clone();
        let event_tx = self.event_tx.clone();
        let task = if self.stream {
            tokio::spawn(stream_reply(api, request, reply, self.chunk_chars, event_tx))
        } else {
            tokio::spawn(fetch_reply(api, request, reply, event_tx))
        };

        self.in_flight = Some(InFlight {
            reply,
            task,
            task_done: false,
        });
        SubmitOutcome::Started {
            query: query_message,
            reply,
        }
    }

    /// Stop the in-flight reply, keeping the text received so far.
    ///
    /// Returns false when nothing was in flight.
    pub fn cancel(&mut self) -> bool {
        let Some(in_flight) = self.in_flight.take() else {
            return false;
        };

        in_flight.task.abort();
        self.transcript.finalize(in_flight.reply);
        tracing::info!("Cancelled reply {}", in_flight.reply);
        true
    }

    /// Apply one event as of `now`.
    ///
    /// Events for a reply that is no longer in flight are dropped.
    pub fn apply(&mut self, event: ChatEvent, now: Instant) -> Option<ChatUpdate> {
        let reply = event.message();
        if self.pending_reply() != Some(reply) {
            tracing::debug!("Dropping event for settled reply {}", reply);
            return None;
        }

        let kind = match event {
            ChatEvent::Piece { piece, .. } => {
                self.transcript.append(reply, &piece);
                UpdateKind::Piece(piece)
            }
            ChatEvent::Completed { content, .. } => {
                self.transcript.complete(reply, content);
                self.in_flight = None;
                UpdateKind::Completed
            }
            ChatEvent::Failed { error, .. } => {
                tracing::warn!(code = error.error_code(), "Chat request failed: {}", error);
                self.transcript.mark_failed(reply);
                let notice = self
                    .transcript
                    .push_system(format!("An error occurred: {}", error.user_message()));
                self.notifier.notify(Notification::error(SEND_FAILED_NOTICE));
                self.in_flight = None;
                UpdateKind::Failed { notice }
            }
        };

        Some(ChatUpdate {
            message: reply,
            kind,
            scroll_to_bottom: self.scroll.should_follow(now),
        })
    }

    /// Wait for and apply the next event of the in-flight reply.
    ///
    /// Returns `None` once nothing is in flight.
    pub async fn next_update(&mut self) -> Option<ChatUpdate> {
        loop {
            let in_flight = self.in_flight.as_mut()?;

            // `None` means the task exited; its events are already queued.
            let received = if in_flight.task_done {
                Some(self.event_rx.try_recv().ok())
            } else {
                tokio::select! {
                    biased;
                    event = self.event_rx.recv() => Some(event),
                    _ = &mut in_flight.task => None,
                }
            };

            match received {
                None => {
                    if let Some(in_flight) = self.in_flight.as_mut() {
                        in_flight.task_done = true;
                    }
                }
                Some(Some(event)) => {
                    if let Some(update) = self.apply(event, Instant::now()) {
                        return Some(update);
                    }
                }
                Some(None) => {
                    let reply = self.pending_reply()?;
                    let error = DeskError::http(
                        "chat",
                        HttpError::Other("reply task ended unexpectedly".to_string()),
                    );
                    return self.apply(
                        ChatEvent::Failed {
                            message: reply,
                            error,
                        },
                        Instant::now(),
                    );
                }
            }
        }
    }

    /// Apply events until the in-flight reply settles.
    pub async fn run_until_settled(&mut self) -> Vec<ChatUpdate> {
        let mut updates = Vec::new();
        while let Some(update) = self.next_update().await {
            updates.push(update);
        }
        updates
    }
}

async fn stream_reply(
    api: DocumentApi,
    request: ChatRequest,
    reply: MessageId,
    chunk_chars: usize,
    event_tx: mpsc::UnboundedSender<ChatEvent>,
) {
    let mut stream = match api.chat_stream(&request).await {
        Ok(stream) => stream,
        Err(error) => {
            let _ = event_tx.send(ChatEvent::Failed {
                message: reply,
                error,
            });
            return;
        }
    };

    let mut decoder = Utf8StreamDecoder::new();
    let mut content = String::new();

    while let Some(chunk) = stream.next().await {
        match chunk {
            Ok(bytes) => {
                let text = decoder.decode(&bytes);
                if !forward_pieces(&text, chunk_chars, reply, &mut content, &event_tx).await {
                    return;
                }
            }
            Err(e) => {
                let _ = event_tx.send(ChatEvent::Failed {
                    message: reply,
                    error: DeskError::http("chat", e),
                });
                return;
            }
        }
    }

    let tail = decoder.finish();
    if !forward_pieces(&tail, chunk_chars, reply, &mut content, &event_tx).await {
        return;
    }

    tracing::debug!(chars = content.chars().count(), "Chat stream completed");
    let _ = event_tx.send(ChatEvent::Completed {
        message: reply,
        content,
    });
}

/// Send `text` as pieces of at most `chunk_chars` characters, yielding after
/// each. Returns false if the controller is gone.
async fn forward_pieces(
    text: &str,
    chunk_chars: usize,
    reply: MessageId,
    content: &mut String,
    event_tx: &mpsc::UnboundedSender<ChatEvent>,
) -> bool {
    for piece in pieces(text, chunk_chars) {
        content.push_str(piece);
        let event = ChatEvent::Piece {
            message: reply,
            piece: piece.to_string(),
        };
        if event_tx.send(event).is_err() {
            return false;
        }
        tokio::task::yield_now().await;
    }
    true
}

async fn fetch_reply(
    api: DocumentApi,
    request: ChatRequest,
    reply: MessageId,
    event_tx: mpsc::UnboundedSender<ChatEvent>,
) {
    let event = match api.chat(&request).await {
        Ok(response) => ChatEvent::Completed {
            message: reply,
            content: response
                .final_response
                .filter(|text| !text.is_empty())
                .unwrap_or_else(|| NO_RESULT_TEXT.to_string()),
        },
        Err(error) => ChatEvent::Failed {
            message: reply,
            error,
        },
    };
    let _ = event_tx.send(event);
}
