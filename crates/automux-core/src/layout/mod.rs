//! Session layout compilation
//!
//! This module follows Functional Core / Imperative Shell (FC/IS) pattern:
//!
//! - **Functional Core**: `compile` - turns windows and splits into tmux
//!   operations, zero I/O
//! - **Operation model**: `ops` - verbs, orientations and pane targets
//!
//! Executing the operations is the job of the `tmux` module.

pub mod compile;
pub mod ops;

pub use compile::{compile, compile_into, split_directory, Emit, Layout};
pub use ops::{Orientation, PaneTarget, TmuxOp, Verb};
