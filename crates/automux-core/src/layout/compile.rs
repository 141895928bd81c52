//! Session layout compiler - Functional Core with zero I/O
//!
//! Walks a resolved session's windows and splits once, in declaration order,
//! and emits the tmux operations that build the layout. Focus is tracked
//! along the way; the last window or split marked `focus` wins.
//!
//! tmux resolves a relative `-c` against the client's working directory, not
//! the session's, so relative window and split directories are anchored to
//! the session directory here.

use std::path::Path;

use super::ops::{Orientation, PaneTarget, TmuxOp, Verb};
use crate::config::{Split, Window};

/// Sink for compiled operations.
pub trait Emit {
    fn emit(&mut self, op: TmuxOp);
}

impl Emit for Vec<TmuxOp> {
    fn emit(&mut self, op: TmuxOp) {
        self.push(op);
    }
}

/// Compiled layout for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub ops: Vec<TmuxOp>,
    /// Pane left focused, if it differs from the session's initial pane
    pub focus: Option<PaneTarget>,
}

/// Compile `windows` for `session_id`, rooted at `directory`, into an
/// operation list.
pub fn compile(session_id: &str, directory: Option<&Path>, windows: &[Window]) -> Layout {
    let mut ops = Vec::new();
    let focus = compile_into(session_id, directory, windows, &mut ops);
    Layout { ops, focus }
}

/// Compile `windows`, handing each operation to `sink` as it is produced.
///
/// Returns the pane that was selected at the end, if any.
pub fn compile_into(
    session_id: &str,
    directory: Option<&Path>,
    windows: &[Window],
    sink: &mut impl Emit,
) -> Option<PaneTarget> {
    let mut focus: Option<PaneTarget> = None;

    for (index, window) in windows.iter().enumerate() {
        if window.focus == Some(true) {
            set_focus(&mut focus, PaneTarget::new(index, 0));
        }

        let window_dir = non_empty(window.directory.as_deref());

        // window 0 is the one new-session already created
        if index != 0 {
            let op = TmuxOp::new(session_id, Verb::NewWindow);
            sink.emit(match window_dir.map(|dir| anchor(directory, dir)) {
                Some(dir) => op.arg("-c").arg(dir),
                None => op,
            });
        }

        // set before exec so the shell's auto title never shows
        sink.emit(TmuxOp::new(session_id, Verb::RenameWindow).arg(&window.title));

        if let Some(exec) = non_empty(window.exec.as_deref()) {
            sink.emit(send_keys(session_id, exec));
        }

        for (offset, split) in window.splits.iter().enumerate() {
            let pane = offset + 1;
            if split.focus == Some(true) {
                set_focus(&mut focus, PaneTarget::new(index, pane));
            }
            let split_dir = split_directory(window_dir, split.directory.as_deref())
                .map(|dir| anchor(directory, &dir));
            compile_split(session_id, split_dir, split, sink);
        }

        // the exec'd program may have retitled the window
        sink.emit(TmuxOp::new(session_id, Verb::RenameWindow).arg(&window.title));
    }

    let focus = focus.filter(|target| !target.is_initial());
    if let Some(target) = focus {
        let qualified = target.qualify(session_id);
        sink.emit(TmuxOp::new(qualified.clone(), Verb::SelectWindow));
        sink.emit(TmuxOp::new(qualified, Verb::SelectPane));
    }

    focus
}

fn compile_split(
    session_id: &str,
    directory: Option<String>,
    split: &Split,
    sink: &mut impl Emit,
) {
    let orientation = Orientation::from_vertical(split.vertical);

    let op = TmuxOp::new(session_id, Verb::SplitWindow).arg(orientation.split_flag());
    sink.emit(match directory {
        Some(dir) => op.arg("-c").arg(dir),
        None => op,
    });

    if let Some(size) = split.size.filter(|size| *size != 0) {
        sink.emit(
            TmuxOp::new(session_id, Verb::ResizePane)
                .arg(orientation.resize_flag())
                .arg(format!("{size}%")),
        );
    }

    if let Some(exec) = non_empty(split.exec.as_deref()) {
        sink.emit(send_keys(session_id, exec));
    }
}

/// Working directory for a split: the window's directory joined with the
/// split's own, or whichever of the two is set.
///
/// The split directory is always appended, even when it starts with `/`.
pub fn split_directory(window: Option<&str>, split: Option<&str>) -> Option<String> {
    match (non_empty(window), non_empty(split)) {
        (Some(window), Some(split)) => {
            let joined = format!(
                "{}/{}",
                window.trim_end_matches('/'),
                split.trim_start_matches('/')
            );
            Some(joined.trim_end_matches('/').to_string())
        }
        (Some(window), None) => Some(window.to_string()),
        (None, Some(split)) => Some(split.to_string()),
        (None, None) => None,
    }
}

/// Resolve a relative directory against the session directory; absolute
/// directories, or any directory when the session has none, pass through.
fn anchor(session_dir: Option<&Path>, dir: &str) -> String {
    match session_dir {
        Some(base) if Path::new(dir).is_relative() => {
            let joined = base.join(dir);
            let joined = joined.to_string_lossy();
            joined.trim_end_matches('/').to_string()
        }
        _ => dir.to_string(),
    }
}

fn send_keys(session_id: &str, exec: &str) -> TmuxOp {
    // Enter is its own key event, not part of the command text
    TmuxOp::new(session_id, Verb::SendKeys).arg(exec).arg("Enter")
}

fn set_focus(focus: &mut Option<PaneTarget>, target: PaneTarget) {
    if let Some(previous) = focus.replace(target) {
        tracing::debug!(
            previous = ?previous,
            current = ?target,
            "multiple focus declarations, last one wins"
        );
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
