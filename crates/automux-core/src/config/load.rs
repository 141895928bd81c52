//! Configuration discovery and loading
//!
//! A directory is searched for the discovery files in priority order. Once a
//! document is decoded and version gated, every declared sub-session is
//! resolved against the config found in its own directory (recursively) and
//! merged with the inline declaration.

use std::path::{Path, PathBuf};

use super::decode::Format;
use super::types::{normalize_session_id, Document, Session};
use crate::{Error, Result};

/// Discovery file names, highest priority first.
pub const DISCOVERY_FILES: [&str; 4] = [".automux", ".automux.json", ".automux.yml", ".automux.yaml"];

// ═══════════════════════════════════════════════════════════════════════════
// PUBLIC API
// ═══════════════════════════════════════════════════════════════════════════

/// Whether any discovery file exists in `dir`.
pub fn config_exists(dir: &Path) -> bool {
    find_config(dir).is_some()
}

/// First discovery file present in `dir`.
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    DISCOVERY_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// Resolve a user supplied path (directory or file) to a config file.
///
/// # Errors
///
/// Returns `Error::ConfigNotFound` if the directory holds no discovery file,
/// or the file does not exist or has an unrecognized extension.
pub fn locate_config(path: &Path) -> Result<PathBuf> {
    if path.is_dir() {
        return find_config(path).ok_or_else(|| Error::not_found(path));
    }

    if path.is_file() && Format::from_path(path).is_some() {
        Ok(path.to_path_buf())
    } else {
        Err(Error::not_found(path))
    }
}

/// Read, decode and validate a single document (no sub-session resolution).
///
/// # Errors
///
/// Returns error if:
/// - the file is missing or has no known format (`ConfigNotFound`)
/// - the file cannot be read
/// - the decoder rejects it
/// - the version is 0 or newer than supported
pub fn load_document(path: &Path) -> Result<Document> {
    let format = Format::from_path(path).ok_or_else(|| Error::not_found(path))?;

    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::not_found(path),
        _ => Error::io_error(format!(
            "Failed to read config file {}: {e}",
            path.display()
        )),
    })?;

    let doc = format.decode(path, &content)?;
    doc.validate()?;
    Ok(doc)
}

/// Load the fully resolved session tree rooted at `path`.
///
/// # Errors
///
/// Returns error if the root document cannot be located, read, decoded, or
/// fails validation. Problems in nested sub-session configs are not errors;
/// those sub-sessions are dropped with a warning.
pub fn load_config(path: &Path) -> Result<Session> {
    let file = locate_config(path)?;
    let doc = load_document(&file)?;
    let directory = config_dir(&file);

    tracing::debug!(config = %file.display(), "loaded config");

    let mut session = doc.into_session(directory.clone());
    let mut ancestry: Vec<PathBuf> = directory.as_deref().map(canonical).into_iter().collect();
    let declared = std::mem::take(&mut session.sub_sessions);
    session.sub_sessions = resolve_sub_sessions(directory.as_deref(), declared, &mut ancestry);

    Ok(session)
}

// ═══════════════════════════════════════════════════════════════════════════
// SUB-SESSION RESOLUTION
// ═══════════════════════════════════════════════════════════════════════════

/// Resolve inline sub-session declarations against their on-disk configs.
///
/// `ancestry` holds the canonical directories currently being resolved; a
/// directory already on it is not loaded again.
pub fn resolve_sub_sessions(
    base: Option<&Path>,
    declared: Vec<Session>,
    ancestry: &mut Vec<PathBuf>,
) -> Vec<Session> {
    declared
        .into_iter()
        .filter_map(|inline| resolve_sub_session(base, inline, ancestry))
        .collect()
}

fn resolve_sub_session(
    base: Option<&Path>,
    mut inline: Session,
    ancestry: &mut Vec<PathBuf>,
) -> Option<Session> {
    let directory = inline
        .directory
        .as_deref()
        .map(|dir| relative_to(base, dir));

    let declared = std::mem::take(&mut inline.sub_sessions);
    let inline_nested = resolve_sub_sessions(directory.as_deref(), declared, ancestry);
    let inline = Session {
        directory: directory.clone(),
        sub_sessions: inline_nested,
        ..inline
    };

    let Some(dir) = directory else {
        return Some(finalize(inline));
    };

    let Some(file) = find_config(&dir) else {
        return Some(finalize(inline));
    };

    let key = canonical(&dir);
    if ancestry.contains(&key) {
        tracing::warn!(
            directory = %dir.display(),
            "sub-session directory is already being loaded, ignoring its config"
        );
        return Some(finalize(inline));
    }

    let doc = match load_document(&file) {
        Ok(doc) => doc,
        Err(e) => {
            tracing::warn!(
                config = %file.display(),
                error = %e,
                "dropping sub-session with unusable config"
            );
            return None;
        }
    };

    ancestry.push(key);
    let mut discovered = doc.into_session(Some(dir.clone()));
    let declared = std::mem::take(&mut discovered.sub_sessions);
    discovered.sub_sessions = resolve_sub_sessions(Some(&dir), declared, ancestry);
    ancestry.pop();

    Some(finalize(discovered.merge(inline)))
}

fn finalize(session: Session) -> Session {
    Session {
        session_id: session.session_id.map(|id| normalize_session_id(&id)),
        ..session
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// PATH HELPERS
// ═══════════════════════════════════════════════════════════════════════════

/// Directory a config file lives in, `None` for a bare file name.
fn config_dir(file: &Path) -> Option<PathBuf> {
    file.parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
}

fn relative_to(base: Option<&Path>, dir: &Path) -> PathBuf {
    match base {
        Some(base) if dir.is_relative() => base.join(dir),
        _ => dir.to_path_buf(),
    }
}

fn canonical(dir: &Path) -> PathBuf {
    std::fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf())
}
