//! Configuration merging logic (Immutable functional pattern)
//!
//! A sub-session is described twice: once by the config discovered in its own
//! directory (the target) and once inline in the parent config (the override).
//! Every field the override explicitly sets wins; unset fields leave the
//! target untouched.
//!
//! Windows and splits are matched differently:
//! - windows are matched by **title**
//! - splits are matched by **position**, so reordering splits between the two
//!   sources is not supported

use super::types::{Session, Split, Window};

// ═══════════════════════════════════════════════════════════════════════════
// MERGE IMPLEMENTATIONS (Immutable pattern)
// ═══════════════════════════════════════════════════════════════════════════

impl Session {
    /// Merge an inline override into this (discovered) session.
    pub fn merge(self, other: Self) -> Self {
        let mut sub_sessions = self.sub_sessions;
        sub_sessions.extend(other.sub_sessions);

        // an empty string in the inline declaration counts as unset
        Self {
            directory: other
                .directory
                .filter(|dir| !dir.as_os_str().is_empty())
                .or(self.directory),
            session_id: non_empty(other.session_id).or(self.session_id),
            attach_existing: other.attach_existing.or(self.attach_existing),
            config_path: non_empty(other.config_path).or(self.config_path),
            windows: merge_windows(self.windows, other.windows),
            sub_sessions,
        }
    }
}

impl Window {
    fn merge(self, other: Self) -> Self {
        Self {
            title: self.title,
            exec: other.exec.or(self.exec),
            focus: other.focus.or(self.focus),
            directory: other.directory.or(self.directory),
            splits: merge_splits(self.splits, other.splits),
        }
    }
}

impl Split {
    fn merge(self, other: Self) -> Self {
        Self {
            vertical: other.vertical.or(self.vertical),
            exec: other.exec.or(self.exec),
            size: other.size.or(self.size),
            focus: other.focus.or(self.focus),
            directory: other.directory.or(self.directory),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Merge two sessions, `override_` taking precedence.
pub fn merge_session(target: Session, override_: Session) -> Session {
    target.merge(override_)
}

/// Merge two window lists by title.
///
/// - matching titles merge field by field, in the target's position
/// - target windows without a match are kept where they are
/// - override windows without a match are appended in override order
pub fn merge_windows(target: Vec<Window>, overrides: Vec<Window>) -> Vec<Window> {
    let matched_len = target.len();
    let mut merged = target;
    let mut extras = Vec::new();

    for window in overrides {
        let matches: Vec<usize> = merged[..matched_len]
            .iter()
            .enumerate()
            .filter(|(_, existing)| existing.title == window.title)
            .map(|(index, _)| index)
            .collect();

        if matches.is_empty() {
            extras.push(window);
            continue;
        }

        for index in matches {
            let existing = std::mem::take(&mut merged[index]);
            merged[index] = existing.merge(window.clone());
        }
    }

    merged.extend(extras);
    merged
}

/// Merge two split lists by index.
///
/// - same index: field by field, override wins
/// - override entries past the end of target are appended
/// - target entries past the end of override are kept
pub fn merge_splits(target: Vec<Split>, overrides: Vec<Split>) -> Vec<Split> {
    let mut overrides = overrides.into_iter();

    let mut merged: Vec<Split> = target
        .into_iter()
        .map(|split| match overrides.next() {
            Some(other) => split.merge(other),
            None => split,
        })
        .collect();

    merged.extend(overrides);
    merged
}
