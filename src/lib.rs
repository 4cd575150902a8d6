//! ragdesk - client core and CLI for a document RAG chat backend.
//!
//! - [`models`] - file records, the derived folder tree, messages, wire types
//! - [`state`] - selection model and document manager
//! - [`chat`] - transcript and the streaming chat controller
//! - [`workspace`] - selection and chat wired to one backend
//!
//! Backend access goes through [`traits::HttpClient`]; tests use
//! [`adapters::MockHttpClient`].

pub mod adapters;
pub mod api;
pub mod chat;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod state;
pub mod traits;
pub mod workspace;
