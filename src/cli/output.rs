//! Colored output helpers for CLI
//!
//! Provides consistent, colored terminal output for the SU-RAG CLI.

use crate::types::{ChatMeta, Message, Role};
use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Output style configuration
pub struct Output {
    /// Whether to use colored output
    pub colored: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper with colors enabled
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Create a new output helper with colors disabled
    pub fn no_color() -> Self {
        Self { colored: false }
    }

    /// Print the session banner
    pub fn banner(&self) {
        if self.colored {
            println!(
                "\n  {} {}\n",
                "Seattle University RAG".bright_red().bold(),
                format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
            );
        } else {
            println!("\n  Seattle University RAG v{}\n", env!("CARGO_PKG_VERSION"));
        }
    }

    /// Print a success message with a checkmark
    pub fn success(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "✓".green().bold(), message.green());
        } else {
            println!("  [OK] {}", message);
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "•".blue(), message);
        } else {
            println!("  [INFO] {}", message);
        }
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "⚠".yellow().bold(), message.yellow());
        } else {
            println!("  [WARN] {}", message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        if self.colored {
            eprintln!("  {} {}", "✗".red().bold(), message.red());
        } else {
            eprintln!("  [ERROR] {}", message);
        }
    }

    /// Print a header for a section
    pub fn header(&self, title: &str) {
        if self.colored {
            println!("\n  {}", title.bright_white().bold().underline());
        } else {
            println!("\n  === {} ===", title);
        }
    }

    /// Print a key-value pair
    pub fn kv(&self, key: &str, value: &str) {
        if self.colored {
            println!("    {}: {}", key.dimmed(), value.bright_white());
        } else {
            println!("    {}: {}", key, value);
        }
    }

    /// Print a hint/tip message
    pub fn hint(&self, message: &str) {
        if self.colored {
            println!("\n  {} {}", "💡".dimmed(), message.dimmed().italic());
        } else {
            println!("\n  [TIP] {}", message);
        }
    }

    /// Print a command suggestion
    pub fn command(&self, cmd: &str) {
        if self.colored {
            println!("     {}", format!("$ {}", cmd).bright_cyan());
        } else {
            println!("     $ {}", cmd);
        }
    }

    /// Print one chat message
    pub fn message(&self, message: &Message) {
        let label = match message.role {
            Role::User => "you",
            Role::Assistant => "assistant",
        };
        if self.colored {
            match message.role {
                Role::User => println!("  {} {}", format!("{} ›", label).cyan().bold(), message.text),
                Role::Assistant => {
                    println!("  {} {}", format!("{} ›", label).green().bold(), message.text)
                }
            }
        } else {
            println!("  {}> {}", label, message.text);
        }
    }

    /// Print a "thinking" marker while a reply is pending
    pub fn pending(&self) {
        if self.colored {
            print!("  {}\r", "assistant is typing...".dimmed().italic());
        } else {
            print!("  ...\r");
        }
        io::stdout().flush().ok();
    }

    /// Print the interactive prompt without a newline
    pub fn prompt(&self) {
        if self.colored {
            print!("  {} ", "›".bright_white().bold());
        } else {
            print!("  > ");
        }
        io::stdout().flush().ok();
    }

    /// Print a table header row
    pub fn table_header(&self, columns: &[&str]) {
        let header: String = columns
            .iter()
            .map(|c| format!("{:<15}", c))
            .collect::<Vec<_>>()
            .join(" ");
        if self.colored {
            println!("    {}", header.bright_white().bold());
            println!("    {}", "─".repeat(columns.len() * 16).dimmed());
        } else {
            println!("    {}", header);
            println!("    {}", "-".repeat(columns.len() * 16));
        }
    }

    /// Print a table row
    pub fn table_row(&self, values: &[&str]) {
        let row: String = values
            .iter()
            .map(|v| format!("{:<15}", v))
            .collect::<Vec<_>>()
            .join(" ");
        println!("    {}", row);
    }

    /// Print one chat as a table row
    pub fn chat_row(&self, chat: &ChatMeta) {
        let created = chat_created_label(chat);
        let star = if chat.favorite { "★" } else { "" };
        let owner = format!("{} {}", chat.initial(), chat.user_name);
        self.table_row(&[chat.id.as_str(), created.as_str(), owner.trim(), star]);
    }

    /// Print newline
    pub fn newline(&self) {
        println!();
    }
}

/// Creation time as "YYYY-MM-DD HH:MM", or the raw backend string if it
/// does not parse.
pub fn chat_created_label(chat: &ChatMeta) -> String {
    chat.created_at_utc()
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| chat.created_at.clone())
}
