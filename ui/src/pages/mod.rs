//! Routed pages

pub mod chat;
pub mod login;
pub mod profile;
pub mod settings;
