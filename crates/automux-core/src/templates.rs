//! Starter configs written by `automux init`

use std::path::{Path, PathBuf};

use crate::config::{find_config, Format};
use crate::{Error, Result};

/// Placeholder substituted with the session name.
pub const SESSION_NAME_PLACEHOLDER: &str = "{session_name}";

const KDL_TEMPLATE: &str = r#"// github.com/indeedhat/automux
// config version
version 1

session_id "{session_name}"
// config "./tmux.conf"
// attach_existing false

window "Editor" {
    exec "vim"
    focus true
}

window "Shell" {
    split {
        // vertical true
        // exec "cmd_to_run_in_split"
        // size 30
        // dir "sub/"
    }
}
"#;

const JSON_TEMPLATE: &str = r#"{
  "version": 1,
  "session_id": "{session_name}",
  "windows": [
    {
      "title": "Editor",
      "exec": "vim",
      "focus": true
    },
    {
      "title": "Shell",
      "splits": [
        {}
      ]
    }
  ]
}
"#;

const YAML_TEMPLATE: &str = r#"# config version
version: 1
session_id: "{session_name}"
windows:
  - title: Editor
    exec: vim
    focus: true
  - title: Shell
    splits:
      - {}
"#;

/// Result of [`init_config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    Created(PathBuf),
    /// A config was already present; nothing was written
    AlreadyExists(PathBuf),
}

/// Raw template text for `format`.
pub const fn template(format: Format) -> &'static str {
    match format {
        Format::Kdl => KDL_TEMPLATE,
        Format::Json => JSON_TEMPLATE,
        Format::Yaml => YAML_TEMPLATE,
    }
}

/// Session names come from a prompt: drop line endings, replace spaces.
pub fn normalize_name(raw: &str) -> String {
    raw.replace(['\r', '\n'], "").trim().replace(' ', "-")
}

/// Render the template for `format` with `name` as the session id.
///
/// # Errors
///
/// Returns error if the normalized name is empty
pub fn render_template(format: Format, name: &str) -> Result<String> {
    let name = normalize_name(name);
    if name.is_empty() {
        return Err(Error::invalid_config("session name cannot be empty"));
    }

    // all three syntaxes embed the name in a double quoted string
    let escaped = name.replace('\\', "\\\\").replace('"', "\\\"");
    Ok(template(format).replace(SESSION_NAME_PLACEHOLDER, &escaped))
}

/// Write a starter config into `dir` unless one already exists.
///
/// # Errors
///
/// Returns error if the name is empty or the file cannot be written
pub fn init_config(dir: &Path, format: Format, name: &str) -> Result<InitOutcome> {
    if let Some(existing) = find_config(dir) {
        tracing::info!(path = %existing.display(), "config already exists");
        return Ok(InitOutcome::AlreadyExists(existing));
    }

    let content = render_template(format, name)?;
    let path = dir.join(format.file_name());
    std::fs::write(&path, content)
        .map_err(|e| Error::io_error(format!("Failed to write {}: {e}", path.display())))?;

    tracing::info!(path = %path.display(), "config created");
    Ok(InitOutcome::Created(path))
}
