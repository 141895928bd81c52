//! # Automux Core
//!
//! Declarative tmux sessions: a per-directory config describes windows,
//! splits and related sessions; automux turns it into tmux commands.
//!
//! ## Pipeline
//!
//! 1. [`config`]: discover, decode, version gate and merge config documents
//!    into a resolved [`config::Session`] tree
//! 2. [`layout`]: compile a session's windows into an ordered list of tmux
//!    operations (pure, no I/O)
//! 3. [`orchestrator`]: look up, create and lay out sessions through a
//!    [`tmux::Multiplexer`] backend, then attach
//!
//! ## Laws (Compiler Enforced)
//!
//! - No `unwrap()` - returns `Result` instead
//! - No `expect()` - returns `Result` instead
//! - No `panic!()` - returns `Result` instead
//! - No `unsafe` - safe Rust only
//!
//! ## Error Handling
//!
//! All fallible operations return `Result<T, Error>`. Merge and layout
//! compilation are infallible; only loading documents, creating sessions and
//! attaching can fail.

pub mod config;
pub mod error;
pub mod layout;
pub mod options;
pub mod orchestrator;
pub mod templates;
pub mod tmux;

pub use error::{Error, Result};
pub use options::RunOptions;
pub use orchestrator::{Orchestrator, Outcome};
