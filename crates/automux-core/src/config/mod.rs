//! Configuration loading, discovery and merging
//!
//! # Resolution
//!
//! 1. Locate the root document (a directory is searched for `.automux`,
//!    `.automux.json`, `.automux.yml`, `.automux.yaml` in that order)
//! 2. Decode it and reject unsupported versions
//! 3. For every declared sub-session, load the config found in its directory
//!    (recursively) and merge the inline declaration over it
//!
//! # Example Config
//!
//! ```kdl
//! version 1
//! session_id "automux"
//!
//! window "Editor" {
//!     exec "nvim"
//!     split {
//!         vertical true
//!         exec "htop"
//!         size 20
//!     }
//! }
//!
//! session "../api" {
//!     session_id "api"
//! }
//! ```
//!
//! # Module Structure
//!
//! - `types`: Configuration structure definitions
//! - `decode`: KDL / JSON / YAML decoders
//! - `load`: Discovery, loading and sub-session resolution
//! - `merge`: Override merging logic
//! - `validate`: Version gate and value checks

// Module declarations
mod decode;
mod load;
mod merge;
mod types;
mod validate;

// Test modules (organized by concern)
#[cfg(test)]
mod tests_loading;
#[cfg(test)]
mod tests_merge;

// Re-export public API
pub use decode::Format;
pub use load::{
    config_exists, find_config, load_config, load_document, locate_config,
    resolve_sub_sessions, DISCOVERY_FILES,
};
pub use merge::{merge_session, merge_splits, merge_windows};
pub use types::{normalize_session_id, Document, Session, Split, Window};
