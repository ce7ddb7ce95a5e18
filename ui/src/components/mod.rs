//! Reusable UI components

pub mod chat_input;
pub mod chat_list;
pub mod chat_window;
pub mod loading;
pub mod message_bubble;
pub mod sidebar;

pub use chat_input::ChatInput;
pub use chat_list::ChatList;
pub use chat_window::ChatWindow;
pub use loading::{LoadingDots, LoadingSpinner, TypingIndicator};
pub use message_bubble::MessageBubble;
pub use sidebar::Sidebar;
