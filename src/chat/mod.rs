//! Chat list and chat window state
//!
//! [`ChatList`] and [`ChatWindow`] are plain state machines with no I/O, so
//! a UI can hold them in reactive signals and apply responses as they
//! arrive. [`ChatController`] wires both to a [`ChatBackend`](crate::api::ChatBackend)
//! for callers that simply await each request in turn.

pub mod controller;
pub mod list;
pub mod window;

pub use controller::ChatController;
pub use list::ChatList;
pub use window::{ChatWindow, Ticket, FALLBACK_REPLY, WELCOME_TEXT};
