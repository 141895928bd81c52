//! Configuration type definitions
//!
//! Every optional scalar is an `Option` so the merge stage can tell "not
//! specified" apart from an explicit `false`/`0`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════
// DOCUMENT
// ═══════════════════════════════════════════════════════════════════════════

/// A decoded config document, before it is attached to a directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Document {
    /// Schema version; zero means the field was absent
    pub version: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attach_existing: Option<bool>,
    #[serde(rename = "config", skip_serializing_if = "Option::is_none")]
    pub config_path: Option<String>,
    pub windows: Vec<Window>,
    pub sessions: Vec<Session>,
}

impl Document {
    /// Attach the document to the directory it was discovered in.
    pub fn into_session(self, directory: Option<PathBuf>) -> Session {
        Session {
            directory,
            session_id: self.session_id.map(|id| normalize_session_id(&id)),
            attach_existing: self.attach_existing,
            config_path: self.config_path,
            windows: self.windows,
            sub_sessions: self.sessions,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SESSION TREE
// ═══════════════════════════════════════════════════════════════════════════

/// One tmux session to be created.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Session {
    /// Working directory; for sub-sessions also where to look for a nested config
    #[serde(rename = "dir", skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Reattach to an already running session instead of leaving it alone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attach_existing: Option<bool>,
    /// tmux.conf handed to `new-session -f`
    #[serde(rename = "config", skip_serializing_if = "Option::is_none")]
    pub config_path: Option<String>,
    pub windows: Vec<Window>,
    #[serde(rename = "sessions", skip_serializing_if = "Vec::is_empty")]
    pub sub_sessions: Vec<Session>,
}

impl Session {
    /// The session id if one was declared and it is not blank.
    pub fn id(&self) -> Option<&str> {
        self.session_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    /// Unset resolves to `true`, matching a freshly written config.
    pub fn attach_existing(&self) -> bool {
        self.attach_existing.unwrap_or(true)
    }

    /// The tmux.conf path, ignoring an explicitly empty value.
    pub fn config_path(&self) -> Option<&str> {
        self.config_path.as_deref().filter(|p| !p.is_empty())
    }
}

/// One tmux window (tab).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Window {
    /// Display title, and the key windows are merged by
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<bool>,
    #[serde(rename = "dir", skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
    pub splits: Vec<Split>,
}

/// One extra pane inside a window.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Split {
    /// `true` places the new pane beside the current one (`split-window -h`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exec: Option<String>,
    /// Percentage of the split axis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<bool>,
    #[serde(rename = "dir", skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
}

/// tmux targets cannot contain spaces.
pub fn normalize_session_id(id: &str) -> String {
    id.replace(' ', "-")
}
