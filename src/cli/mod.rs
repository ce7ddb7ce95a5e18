//! CLI module for SU-RAG
//!
//! Command-line parsing for the `su-rag` binary. Uses clap for argument
//! parsing and owo-colors for colored terminal output.

pub mod commands;
pub mod output;

use crate::types::SignupRole;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// SU-RAG - Seattle University RAG chat client
#[derive(Parser, Debug)]
#[command(
    name = "su-rag",
    version,
    about = "SU-RAG - terminal client for the Seattle University RAG assistant",
    long_about = "Sign in to the Seattle University RAG backend, manage chats, talk to the\n\
                  assistant, edit your profile and upload documents for indexing.\n\n\
                  Run without arguments to show the current session.",
    after_help = "EXAMPLES:\n    \
                  su-rag login --email ada@seattleu.edu   # Sign in (password from SU_RAG_PASSWORD or --password)\n    \
                  su-rag new                              # Start a chat\n    \
                  su-rag chat <CHAT_ID>                   # Talk to the assistant interactively\n    \
                  su-rag chats --favorites                # List favorite chats\n    \
                  su-rag upload handbook.pdf              # Upload documents for indexing"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "su-rag.toml", global = true)]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and store the session token
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long, env = "SU_RAG_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Create an account and sign in
    Signup {
        #[arg(short, long)]
        email: String,

        #[arg(short, long, env = "SU_RAG_PASSWORD", hide_env_values = true)]
        password: String,

        /// Full name
        #[arg(short, long)]
        name: String,

        /// Account role (user or admin)
        #[arg(long, default_value = "user")]
        role: SignupRole,
    },

    /// Forget the stored session token
    Logout,

    /// Show what the stored token says about the current user
    Whoami,

    /// List chats
    Chats {
        /// Only show favorites
        #[arg(short, long)]
        favorites: bool,
    },

    /// Create a new chat
    New,

    /// Delete a chat
    Delete {
        chat_id: String,
    },

    /// Mark a chat as favorite
    Favorite {
        chat_id: String,

        /// Remove the favorite mark instead
        #[arg(long)]
        off: bool,
    },

    /// Print a chat's message history
    History {
        chat_id: String,
    },

    /// Send one message and print the reply
    Send {
        chat_id: String,

        message: String,
    },

    /// Interactive conversation (a new chat when no id is given)
    Chat {
        chat_id: Option<String>,
    },

    /// View or edit your profile
    #[command(subcommand)]
    Profile(ProfileCommands),

    /// Upload documents for indexing
    Upload {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Show the effective configuration
    Config {
        /// Only validate, print nothing on success
        #[arg(long)]
        validate: bool,
    },
}

/// Profile subcommands
#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// Show the profile
    Show,

    /// Update editable fields
    Update {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        degree: Option<String>,

        #[arg(long)]
        department: Option<String>,
    },
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_signup_role_parses() {
        let cli = Cli::try_parse_from([
            "su-rag", "signup", "-e", "a@b", "-p", "pw", "-n", "Ada", "--role", "admin",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Signup { role, .. }) => assert_eq!(role, SignupRole::Admin),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let result = Cli::try_parse_from([
            "su-rag", "signup", "-e", "a@b", "-p", "pw", "-n", "Ada", "--role", "root",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["su-rag", "chats", "--favorites", "--no-color"]).unwrap();
        assert!(cli.no_color);
        assert!(matches!(cli.command, Some(Commands::Chats { favorites: true })));
    }
}
