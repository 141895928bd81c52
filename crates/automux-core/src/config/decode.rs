//! Decoders for the three config syntaxes
//!
//! - `.automux`: KDL node document
//! - `.automux.json`: JSON
//! - `.automux.yml` / `.automux.yaml`: YAML
//!
//! All three produce the same [`Document`]. The version gate runs after
//! decoding, in `load`.

use std::path::Path;

use kdl::{KdlDocument, KdlNode, KdlValue};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::types::{Document, Session, Split, Window};
use crate::{Error, Result};

/// Surface syntax of a config document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Format {
    Kdl,
    Json,
    Yaml,
}

impl Format {
    /// Pick the decoder for a file from its extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Some(Self::Json),
            Some("yml" | "yaml") => Some(Self::Yaml),
            Some("automux") => Some(Self::Kdl),
            // `.automux` has no extension as far as std is concerned
            None if path.file_name().is_some_and(|name| name == ".automux") => Some(Self::Kdl),
            _ => None,
        }
    }

    /// File name written by `init` for this format.
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Kdl => ".automux",
            Self::Json => ".automux.json",
            Self::Yaml => ".automux.yml",
        }
    }

    /// Decode `content` read from `path`.
    pub fn decode(self, path: &Path, content: &str) -> Result<Document> {
        match self {
            Self::Json => {
                serde_json::from_str(content).map_err(|e| Error::malformed(path, e.to_string()))
            }
            Self::Yaml => {
                serde_yaml::from_str(content).map_err(|e| Error::malformed(path, e.to_string()))
            }
            Self::Kdl => decode_kdl(content).map_err(|msg| Error::malformed(path, msg)),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// KDL
// ═══════════════════════════════════════════════════════════════════════════

type NodeResult<T> = std::result::Result<T, String>;

fn decode_kdl(content: &str) -> NodeResult<Document> {
    let doc: KdlDocument = content.parse().map_err(|e: kdl::KdlError| e.to_string())?;

    doc.nodes()
        .iter()
        .try_fold(Document::default(), |mut out, node| {
            match node.name().value() {
                "version" => out.version = int_arg(node)?,
                "session_id" => out.session_id = Some(string_arg(node)?),
                "attach_existing" => out.attach_existing = Some(bool_arg(node)?),
                "config" => out.config_path = Some(string_arg(node)?),
                "window" => out.windows.push(window_node(node)?),
                "session" => out.sessions.push(session_node(node)?),
                other => tracing::debug!(node = other, "ignoring unknown config node"),
            }
            Ok(out)
        })
}

fn session_node(node: &KdlNode) -> NodeResult<Session> {
    let mut session = Session {
        directory: optional_string_arg(node)?.map(Into::into),
        ..Session::default()
    };

    for child in children(node) {
        match child.name().value() {
            "session_id" => session.session_id = Some(string_arg(child)?),
            "attach_existing" => session.attach_existing = Some(bool_arg(child)?),
            "config" => session.config_path = Some(string_arg(child)?),
            "window" => session.windows.push(window_node(child)?),
            "session" => session.sub_sessions.push(session_node(child)?),
            other => tracing::debug!(node = other, "ignoring unknown session node"),
        }
    }

    Ok(session)
}

fn window_node(node: &KdlNode) -> NodeResult<Window> {
    let mut window = Window {
        title: string_arg(node)?,
        ..Window::default()
    };

    for child in children(node) {
        match child.name().value() {
            "exec" => window.exec = Some(string_arg(child)?),
            "focus" => window.focus = Some(bool_arg(child)?),
            "dir" => window.directory = Some(string_arg(child)?),
            "split" => window.splits.push(split_node(child)?),
            other => tracing::debug!(node = other, "ignoring unknown window node"),
        }
    }

    Ok(window)
}

fn split_node(node: &KdlNode) -> NodeResult<Split> {
    let mut split = Split::default();

    for child in children(node) {
        match child.name().value() {
            "vertical" => split.vertical = Some(bool_arg(child)?),
            "exec" => split.exec = Some(string_arg(child)?),
            "size" => {
                let size = int_arg(child)?;
                let size = u32::try_from(size)
                    .map_err(|_| format!("split size must be positive, got {size}"))?;
                split.size = Some(size);
            }
            "focus" => split.focus = Some(bool_arg(child)?),
            "dir" => split.directory = Some(string_arg(child)?),
            other => tracing::debug!(node = other, "ignoring unknown split node"),
        }
    }

    Ok(split)
}

fn children(node: &KdlNode) -> &[KdlNode] {
    match node.children() {
        Some(doc) => doc.nodes(),
        None => &[],
    }
}

fn first_arg<'a>(node: &'a KdlNode) -> NodeResult<&'a KdlValue> {
    node.entries()
        .iter()
        .find(|entry| entry.name().is_none())
        .map(kdl::KdlEntry::value)
        .ok_or_else(|| format!("'{}' requires a value", node.name().value()))
}

fn string_arg(node: &KdlNode) -> NodeResult<String> {
    first_arg(node)?
        .as_string()
        .map(ToString::to_string)
        .ok_or_else(|| format!("'{}' expects a string", node.name().value()))
}

/// Like [`string_arg`], but a missing value is `None` rather than an error.
fn optional_string_arg(node: &KdlNode) -> NodeResult<Option<String>> {
    if first_arg(node).is_err() {
        return Ok(None);
    }
    string_arg(node).map(Some)
}

fn bool_arg(node: &KdlNode) -> NodeResult<bool> {
    first_arg(node)?
        .as_bool()
        .ok_or_else(|| format!("'{}' expects true or false", node.name().value()))
}

fn int_arg(node: &KdlNode) -> NodeResult<i64> {
    first_arg(node)?
        .as_i64()
        .ok_or_else(|| format!("'{}' expects an integer", node.name().value()))
}
