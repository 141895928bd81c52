//! tmux operation model
//!
//! An operation is a verb, the session it targets, and verb-specific
//! arguments. Rendering follows tmux's own argument order:
//! `<verb> -t <target> <args...>`.

use std::fmt;

use itertools::Itertools;
use strum::{AsRefStr, Display, EnumString};

/// tmux commands the layout compiler emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Verb {
    NewWindow,
    RenameWindow,
    SendKeys,
    SplitWindow,
    ResizePane,
    SelectWindow,
    SelectPane,
}

/// Pane placement for `split-window`.
///
/// tmux names the flag after the divider, not the stacking: `-h` puts the
/// new pane beside the current one, `-v` puts it underneath.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Panes side by side (`-h`), sized along the x axis
    Horizontal,
    /// Panes stacked top to bottom (`-v`), sized along the y axis
    Vertical,
}

impl Orientation {
    /// Maps a split's `vertical` field onto the tmux primitive.
    ///
    /// `vertical: true` means "divide with a vertical line", so it selects the
    /// horizontal stacking primitive.
    pub const fn from_vertical(vertical: Option<bool>) -> Self {
        match vertical {
            Some(true) => Self::Horizontal,
            _ => Self::Vertical,
        }
    }

    /// `split-window` flag.
    pub const fn split_flag(self) -> &'static str {
        match self {
            Self::Horizontal => "-h",
            Self::Vertical => "-v",
        }
    }

    /// `resize-pane` flag for the axis this orientation grows along.
    pub const fn resize_flag(self) -> &'static str {
        match self {
            Self::Horizontal => "-x",
            Self::Vertical => "-y",
        }
    }
}

/// A `window.pane` address within a session, zero based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneTarget {
    pub window: usize,
    pub pane: usize,
}

impl PaneTarget {
    pub const fn new(window: usize, pane: usize) -> Self {
        Self { window, pane }
    }

    /// The pane every new session starts with focused.
    pub const fn is_initial(self) -> bool {
        self.window == 0 && self.pane == 0
    }

    /// Full tmux target for this pane in `session`.
    pub fn qualify(self, session: &str) -> String {
        format!("{session}:{}.{}", self.window, self.pane)
    }
}

/// One tmux command against a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TmuxOp {
    /// `-t` target: a session id, or `session:window.pane`
    pub target: String,
    pub verb: Verb,
    pub args: Vec<String>,
}

impl TmuxOp {
    pub fn new(target: impl Into<String>, verb: Verb) -> Self {
        Self {
            target: target.into(),
            verb,
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Arguments as handed to the tmux binary.
    pub fn argv(&self) -> Vec<String> {
        [self.verb.to_string(), "-t".to_string(), self.target.clone()]
            .into_iter()
            .chain(self.args.iter().cloned())
            .collect()
    }
}

impl fmt::Display for TmuxOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tmux {}", self.argv().iter().join(" "))
    }
}
