//! Loading-focused tests for configuration
//!
//! Tests for discovery order, the version gate and sub-session resolution
//! against nested on-disk configs.

#[cfg(test)]
mod loading_tests {
    use std::path::{Path, PathBuf};

    use crate::config::{find_config, load_config, load_document, locate_config};
    use crate::error::ValidationError;
    use crate::{Error, Result};

    fn write(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
        let path = dir.join(name);
        std::fs::write(&path, content)
            .map_err(|e| Error::io_error(format!("Failed to write test file: {e}")))?;
        Ok(path)
    }

    fn tempdir() -> Result<tempfile::TempDir> {
        tempfile::tempdir().map_err(|e| Error::io_error(format!("Failed to create temp dir: {e}")))
    }

    #[test]
    fn test_discovery_prefers_kdl_over_json() -> Result<()> {
        let temp = tempdir()?;
        write(temp.path(), ".automux.json", r#"{"version": 1, "session_id": "json"}"#)?;
        write(temp.path(), ".automux", "version 1\nsession_id \"kdl\"\n")?;

        let found = find_config(temp.path());
        assert_eq!(found, Some(temp.path().join(".automux")));

        let session = load_config(temp.path())?;
        assert_eq!(session.id(), Some("kdl"));
        Ok(())
    }

    #[test]
    fn test_discovery_falls_back_to_yaml_alt() -> Result<()> {
        let temp = tempdir()?;
        write(temp.path(), ".automux.yaml", "version: 1\nsession_id: alt\n")?;

        let session = load_config(temp.path())?;
        assert_eq!(session.id(), Some("alt"));
        Ok(())
    }

    #[test]
    fn test_empty_directory_is_not_found() -> Result<()> {
        let temp = tempdir()?;
        let result = load_config(temp.path());
        assert!(matches!(result, Err(ref e) if e.is_not_found()));
        Ok(())
    }

    #[test]
    fn test_unknown_extension_is_not_found() -> Result<()> {
        let temp = tempdir()?;
        let path = write(temp.path(), "layout.toml", "version = 1")?;
        assert!(matches!(locate_config(&path), Err(Error::ConfigNotFound(_))));
        Ok(())
    }

    #[test]
    fn test_master_directory_is_config_location() -> Result<()> {
        let temp = tempdir()?;
        write(temp.path(), ".automux", "version 1\nsession_id \"root\"\n")?;

        let session = load_config(temp.path())?;
        assert_eq!(session.directory.as_deref(), Some(temp.path()));
        Ok(())
    }

    #[test]
    fn test_legacy_version_rejected() -> Result<()> {
        let temp = tempdir()?;
        let path = write(temp.path(), ".automux.json", r#"{"session_id": "old"}"#)?;

        let result = load_document(&path);
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::LegacyFormat))
        ));
        Ok(())
    }

    #[test]
    fn test_future_version_rejected() -> Result<()> {
        let temp = tempdir()?;
        let path = write(temp.path(), ".automux.yml", "version: 2\nsession_id: new\n")?;

        let result = load_document(&path);
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::UnsupportedVersion(2)))
        ));
        Ok(())
    }

    #[test]
    fn test_oversized_split_rejected() -> Result<()> {
        let temp = tempdir()?;
        let path = write(
            temp.path(),
            ".automux",
            "version 1\nsession_id \"x\"\nwindow \"w\" {\n    split { size 150 }\n}\n",
        )?;

        let result = load_document(&path);
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::InvalidConfig(_)))
        ));
        Ok(())
    }

    #[test]
    fn test_spaces_in_session_id_are_normalized() -> Result<()> {
        let temp = tempdir()?;
        write(temp.path(), ".automux", "version 1\nsession_id \"my project\"\n")?;

        let session = load_config(temp.path())?;
        assert_eq!(session.id(), Some("my-project"));
        Ok(())
    }

    #[test]
    fn test_sub_session_merges_with_nested_config() -> Result<()> {
        let temp = tempdir()?;
        let api = temp.path().join("api");
        std::fs::create_dir(&api)
            .map_err(|e| Error::io_error(format!("Failed to create dir: {e}")))?;

        write(
            &api,
            ".automux",
            r#"version 1
session_id "api-disk"
window "Server" {
    exec "cargo run"
    split { size 30; exec "tail -f log" }
}
window "Logs"
"#,
        )?;
        write(
            temp.path(),
            ".automux",
            r#"version 1
session_id "root"
session "api" {
    session_id "api inline"
    window "Server" {
        split { size 40 }
    }
    window "Shell"
}
"#,
        )?;

        let session = load_config(temp.path())?;
        assert_eq!(session.sub_sessions.len(), 1);

        let api_session = &session.sub_sessions[0];
        assert_eq!(api_session.id(), Some("api-inline"));
        assert_eq!(api_session.directory.as_deref(), Some(api.as_path()));

        let titles: Vec<&str> = api_session.windows.iter().map(|w| w.title.as_str()).collect();
        assert_eq!(titles, vec!["Server", "Logs", "Shell"]);

        let server = &api_session.windows[0];
        assert_eq!(server.exec.as_deref(), Some("cargo run"));
        assert_eq!(server.splits[0].size, Some(40));
        assert_eq!(server.splits[0].exec.as_deref(), Some("tail -f log"));
        Ok(())
    }

    #[test]
    fn test_sub_session_without_nested_config_stands_alone() -> Result<()> {
        let temp = tempdir()?;
        write(
            temp.path(),
            ".automux",
            "version 1\nsession_id \"root\"\nsession \"elsewhere\" {\n    session_id \"solo\"\n}\n",
        )?;

        let session = load_config(temp.path())?;
        assert_eq!(session.sub_sessions.len(), 1);
        assert_eq!(session.sub_sessions[0].id(), Some("solo"));
        assert_eq!(
            session.sub_sessions[0].directory,
            Some(temp.path().join("elsewhere"))
        );
        Ok(())
    }

    #[test]
    fn test_sub_session_id_from_nested_config() -> Result<()> {
        let temp = tempdir()?;
        let web = temp.path().join("web");
        std::fs::create_dir(&web)
            .map_err(|e| Error::io_error(format!("Failed to create dir: {e}")))?;
        write(&web, ".automux.json", r#"{"version": 1, "session_id": "web"}"#)?;
        write(
            temp.path(),
            ".automux",
            "version 1\nsession_id \"root\"\nsession \"web\"\n",
        )?;

        let session = load_config(temp.path())?;
        assert_eq!(session.sub_sessions[0].id(), Some("web"));
        Ok(())
    }

    #[test]
    fn test_sub_session_with_broken_nested_config_is_dropped() -> Result<()> {
        let temp = tempdir()?;
        let broken = temp.path().join("broken");
        std::fs::create_dir(&broken)
            .map_err(|e| Error::io_error(format!("Failed to create dir: {e}")))?;
        write(&broken, ".automux.json", "{ not json")?;
        write(
            temp.path(),
            ".automux",
            "version 1\nsession_id \"root\"\nsession \"broken\" { session_id \"b\"; }\nsession \"other\" { session_id \"o\"; }\n",
        )?;

        let session = load_config(temp.path())?;
        let ids: Vec<Option<&str>> = session.sub_sessions.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec![Some("o")]);
        Ok(())
    }

    #[test]
    fn test_nested_sub_sessions_resolve_recursively() -> Result<()> {
        let temp = tempdir()?;
        let outer = temp.path().join("outer");
        let inner = outer.join("inner");
        std::fs::create_dir_all(&inner)
            .map_err(|e| Error::io_error(format!("Failed to create dir: {e}")))?;

        write(&inner, ".automux", "version 1\nsession_id \"inner\"\n")?;
        write(
            &outer,
            ".automux",
            "version 1\nsession_id \"outer\"\nsession \"inner\"\n",
        )?;
        write(
            temp.path(),
            ".automux",
            "version 1\nsession_id \"root\"\nsession \"outer\"\n",
        )?;

        let session = load_config(temp.path())?;
        let outer_session = &session.sub_sessions[0];
        assert_eq!(outer_session.id(), Some("outer"));
        assert_eq!(outer_session.sub_sessions.len(), 1);
        assert_eq!(outer_session.sub_sessions[0].id(), Some("inner"));
        Ok(())
    }

    #[test]
    fn test_self_referencing_sub_session_does_not_recurse() -> Result<()> {
        let temp = tempdir()?;
        write(
            temp.path(),
            ".automux",
            "version 1\nsession_id \"root\"\nsession \".\" { session_id \"again\"; }\n",
        )?;

        let session = load_config(temp.path())?;
        assert_eq!(session.sub_sessions.len(), 1);
        assert_eq!(session.sub_sessions[0].id(), Some("again"));
        assert!(session.sub_sessions[0].sub_sessions.is_empty());
        Ok(())
    }
}
