//! Command-line argument parsing for ragdesk.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::ClientConfig;

/// Chat with indexed documents and manage the files behind them
#[derive(Debug, Parser)]
#[command(name = "ragdesk", version, about)]
pub struct Cli {
    /// Backend base URL (overrides RAGDESK_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// User identifier sent with requests (overrides RAGDESK_USER_ID)
    #[arg(long, global = true, value_name = "ID")]
    pub user_id: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print every file as a folder tree
    Files,

    /// Ask one question, optionally scoped to specific files
    Ask {
        query: String,

        /// File id to scope retrieval to; repeat for several
        #[arg(long = "file", value_name = "ID")]
        files: Vec<String>,

        /// Wait for the whole answer instead of streaming it
        #[arg(long)]
        no_stream: bool,
    },

    /// Upload local files into a folder
    Upload {
        folder: String,
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Index a file for retrieval
    Index { folder: String, file_id: String },

    /// Delete a file
    Delete { folder: String, file_id: String },
}

impl Cli {
    /// Layer command-line overrides on top of `config`.
    pub fn apply_to(&self, mut config: ClientConfig) -> ClientConfig {
        if let Some(url) = &self.api_url {
            config = config.with_base_url(url.clone());
        }
        if let Some(user_id) = &self.user_id {
            config = config.with_user_id(user_id.clone());
        }
        if let Command::Ask { no_stream: true, .. } = self.command {
            config = config.with_stream(false);
        }
        config
    }
}
