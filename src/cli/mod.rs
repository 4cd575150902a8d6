//! Command-line front-end.
//!
//! ```ignore
//! use clap::Parser;
//! use ragdesk::cli::{run_command, Cli};
//!
//! let cli = Cli::parse();
//! let config = cli.apply_to(ClientConfig::from_env()?);
//! let ok = run_command(cli.command, http, notifier, &config, &mut std::io::stdout()).await?;
//! ```

pub mod args;
pub mod commands;

pub use args::{Cli, Command};
pub use commands::{render_tree, run_command};
