use crate::types::{Message, Result};
use tracing::{debug, warn};

/// Assistant bubble shown when the active chat has no messages yet.
pub const WELCOME_TEXT: &str = "👋 Welcome! Ask me anything about Seattle University.";

/// Assistant text appended when a send fails for any reason.
pub const FALLBACK_REPLY: &str = "❌ Error processing your request.";

/// Tag attached to an in-flight history fetch or send.
///
/// A response is applied only while its ticket still names the current
/// selection; anything older is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub chat_id: String,
    generation: u64,
}

/// History of the active chat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatWindow {
    active: Option<String>,
    history: Vec<Message>,
    generation: u64,
    pending: usize,
}

impl ChatWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.pending > 0
    }

    /// Input is offered only when a chat is active.
    pub fn accepts_input(&self) -> bool {
        self.active.is_some()
    }

    /// Messages to render: the history, or the welcome bubble when an
    /// active chat is still empty.
    pub fn display_messages(&self) -> Vec<Message> {
        if self.active.is_some() && self.history.is_empty() {
            vec![Message::assistant(WELCOME_TEXT)]
        } else {
            self.history.clone()
        }
    }

    /// Change the active chat.
    ///
    /// Returns a ticket for the one history fetch the caller must issue, or
    /// `None` when nothing needs fetching (same id, or no chat).
    pub fn select(&mut self, chat_id: Option<&str>) -> Option<Ticket> {
        if self.active.as_deref() == chat_id {
            return None;
        }
        self.reset(chat_id.map(str::to_string));
        chat_id.map(|id| self.ticket(id))
    }

    /// Make a freshly created chat active. It is empty, so no fetch is needed.
    pub fn activate_new(&mut self, chat_id: &str) {
        self.reset(Some(chat_id.to_string()));
    }

    pub fn clear(&mut self) {
        self.reset(None);
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        ticket.generation == self.generation && self.active.as_deref() == Some(&ticket.chat_id)
    }

    /// Apply a history fetch. Failures leave the history untouched.
    ///
    /// Messages sent while the fetch was in flight stay after the fetched
    /// history.
    pub fn apply_history(&mut self, ticket: &Ticket, result: Result<Vec<Message>>) -> bool {
        if !self.is_current(ticket) {
            debug!(chat_id = %ticket.chat_id, "dropping stale history response");
            return false;
        }
        match result {
            Ok(history) => {
                let sent_meanwhile = std::mem::replace(&mut self.history, history);
                self.history.extend(sent_meanwhile);
                true
            }
            Err(e) => {
                warn!(chat_id = %ticket.chat_id, error = %e, "failed to load chat history");
                false
            }
        }
    }

    /// Append the user's message and hand back the ticket for the send.
    ///
    /// Blank input and sends with no active chat are ignored.
    pub fn begin_send(&mut self, text: &str) -> Option<Ticket> {
        if text.trim().is_empty() {
            return None;
        }
        let chat_id = self.active.clone()?;
        self.history.push(Message::user(text));
        self.pending += 1;
        Some(self.ticket(&chat_id))
    }

    /// Append the assistant reply, or the fallback text on failure.
    ///
    /// The user message is never rolled back.
    pub fn apply_reply(&mut self, ticket: &Ticket, result: Result<String>) -> bool {
        if !self.is_current(ticket) {
            debug!(chat_id = %ticket.chat_id, "dropping reply for inactive chat");
            return false;
        }
        self.pending = self.pending.saturating_sub(1);
        let text = match result {
            Ok(text) => text,
            Err(e) => {
                warn!(chat_id = %ticket.chat_id, error = %e, "send failed");
                FALLBACK_REPLY.to_string()
            }
        };
        self.history.push(Message::assistant(text));
        true
    }

    fn reset(&mut self, active: Option<String>) {
        self.active = active;
        self.history.clear();
        self.pending = 0;
        self.generation += 1;
    }

    fn ticket(&self, chat_id: &str) -> Ticket {
        Ticket {
            chat_id: chat_id.to_string(),
            generation: self.generation,
        }
    }
}
