//! Validation of decoded documents

use super::types::{Document, Session, Window};
use crate::error::validation::SUPPORTED_VERSION;
use crate::{Error, Result};

impl Document {
    /// Reject legacy (version 0) and future (> supported) documents.
    pub fn check_version(&self) -> Result<()> {
        if self.version < 1 || self.version > SUPPORTED_VERSION {
            return Err(Error::unsupported_version(self.version));
        }
        Ok(())
    }

    /// Validate values the decoders cannot constrain on their own.
    pub fn validate(&self) -> Result<()> {
        self.check_version()?;
        validate_windows(&self.windows)?;
        self.sessions.iter().try_for_each(validate_session)
    }
}

impl Session {
    /// A master session must name the tmux session it creates.
    pub fn require_id(&self) -> Result<&str> {
        self.id()
            .ok_or_else(|| Error::invalid_config("session_id is required"))
    }
}

fn validate_session(session: &Session) -> Result<()> {
    validate_windows(&session.windows)?;
    session.sub_sessions.iter().try_for_each(validate_session)
}

fn validate_windows(windows: &[Window]) -> Result<()> {
    windows
        .iter()
        .flat_map(|window| window.splits.iter().map(move |split| (window, split)))
        .try_for_each(|(window, split)| match split.size {
            Some(size) if size > 100 => Err(Error::invalid_config(format!(
                "split size in window '{}' must be a percentage (0-100), got {size}",
                window.title
            ))),
            _ => Ok(()),
        })
}
