//! Merge-focused tests for configuration
//!
//! Covers explicit-wins field merging, title-keyed window merging and
//! index-keyed split merging.

#[cfg(test)]
mod merge_tests {
    use std::path::PathBuf;

    use proptest::prelude::*;

    use crate::config::{merge_session, merge_splits, merge_windows, Session, Split, Window};

    fn split(vertical: bool, exec: &str, size: u32, focus: bool) -> Split {
        Split {
            vertical: Some(vertical),
            exec: Some(exec.to_string()),
            size: Some(size),
            focus: Some(focus),
            directory: None,
        }
    }

    fn window(title: &str, exec: Option<&str>) -> Window {
        Window {
            title: title.to_string(),
            exec: exec.map(ToString::to_string),
            ..Window::default()
        }
    }

    fn populated_session() -> Session {
        Session {
            directory: Some(PathBuf::from("./")),
            session_id: Some("test-session".to_string()),
            attach_existing: Some(true),
            config_path: Some("./.automux.conf".to_string()),
            windows: vec![window("win-1", Some("nvim"))],
            sub_sessions: Vec::new(),
        }
    }

    #[test]
    fn test_empty_override_changes_nothing() {
        let target = populated_session();
        let merged = merge_session(target.clone(), Session::default());
        assert_eq!(merged, target);
    }

    #[test]
    fn test_full_override_wins_every_field() {
        let target = populated_session();
        let override_ = Session {
            directory: Some(PathBuf::from("../")),
            session_id: Some("better-session".to_string()),
            attach_existing: Some(false),
            config_path: Some("../.automux.conf".to_string()),
            windows: vec![window("win-1", Some("vim"))],
            sub_sessions: Vec::new(),
        };

        let merged = merge_session(target, override_.clone());
        assert_eq!(merged, override_);
    }

    #[test]
    fn test_explicit_false_overrides_true() {
        let target = populated_session();
        let override_ = Session {
            attach_existing: Some(false),
            ..Session::default()
        };
        let merged = merge_session(target, override_);
        assert_eq!(merged.attach_existing, Some(false));
        assert_eq!(merged.session_id.as_deref(), Some("test-session"));
    }

    #[test]
    fn test_empty_strings_do_not_override() {
        let target = populated_session();
        let override_ = Session {
            directory: Some(PathBuf::new()),
            session_id: Some(String::new()),
            config_path: Some(String::new()),
            ..Session::default()
        };
        let merged = merge_session(target.clone(), override_);
        assert_eq!(merged.session_id.as_deref(), Some("test-session"));
        assert_eq!(merged.directory, target.directory);
        assert_eq!(merged.config_path, target.config_path);
    }

    #[test]
    fn test_windows_merge_by_title_not_position() {
        let target = vec![window("A", Some("x"))];
        let overrides = vec![window("A", Some("y")), window("B", None)];

        let merged = merge_windows(target, overrides);
        assert_eq!(merged, vec![window("A", Some("y")), window("B", None)]);
    }

    #[test]
    fn test_window_title_only_override_keeps_fields() {
        let target = vec![Window {
            focus: Some(true),
            ..window("win-1", Some("nvim"))
        }];
        let merged = merge_windows(target.clone(), vec![window("win-1", None)]);
        assert_eq!(merged, target);
    }

    #[test]
    fn test_unmatched_target_windows_keep_position() {
        let target = vec![window("A", None), window("B", Some("htop")), window("C", None)];
        let overrides = vec![window("D", None), window("C", Some("top"))];

        let merged = merge_windows(target, overrides);
        let titles: Vec<&str> = merged.iter().map(|w| w.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C", "D"]);
        assert_eq!(merged[1].exec.as_deref(), Some("htop"));
        assert_eq!(merged[2].exec.as_deref(), Some("top"));
    }

    #[test]
    fn test_window_merge_recurses_into_splits() {
        let target = vec![Window {
            splits: vec![split(true, "nvim", 10, false)],
            ..window("Editor", None)
        }];
        let overrides = vec![Window {
            splits: vec![Split {
                size: Some(30),
                ..Split::default()
            }],
            ..window("Editor", None)
        }];

        let merged = merge_windows(target, overrides);
        assert_eq!(merged[0].splits, vec![split(true, "nvim", 30, false)]);
    }

    #[test]
    fn test_splits_merge_by_index() {
        let target = vec![
            Split {
                size: Some(10),
                ..Split::default()
            },
            Split {
                size: Some(10),
                ..Split::default()
            },
        ];
        let overrides = vec![
            Split {
                size: Some(20),
                ..Split::default()
            },
            Split::default(),
        ];

        let merged = merge_splits(target, overrides);
        let sizes: Vec<Option<u32>> = merged.iter().map(|s| s.size).collect();
        assert_eq!(sizes, vec![Some(20), Some(10)]);
    }

    #[test]
    fn test_split_full_override() {
        let merged = merge_splits(
            vec![split(true, "nvim", 10, false)],
            vec![split(false, "vim", 20, true)],
        );
        assert_eq!(merged, vec![split(false, "vim", 20, true)]);
    }

    #[test]
    fn test_split_overflow_appends_verbatim() {
        let target = vec![Split {
            directory: Some("sub/".to_string()),
            ..split(true, "nvim", 10, false)
        }];
        let extra = split(true, "vim", 15, false);

        let merged = merge_splits(target.clone(), vec![Split::default(), extra.clone()]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0], target[0]);
        assert_eq!(merged[1], extra);
    }

    #[test]
    fn test_sub_sessions_are_concatenated() {
        let target = Session {
            sub_sessions: vec![Session {
                session_id: Some("from-disk".to_string()),
                ..Session::default()
            }],
            ..Session::default()
        };
        let override_ = Session {
            sub_sessions: vec![Session {
                session_id: Some("inline".to_string()),
                ..Session::default()
            }],
            ..Session::default()
        };

        let merged = merge_session(target, override_);
        let ids: Vec<Option<&str>> = merged.sub_sessions.iter().map(Session::id).collect();
        assert_eq!(ids, vec![Some("from-disk"), Some("inline")]);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // PROPERTIES
    // ═══════════════════════════════════════════════════════════════════════

    fn split_strategy() -> impl Strategy<Value = Split> {
        (
            proptest::option::of(any::<bool>()),
            proptest::option::of("[a-z]{1,8}"),
            proptest::option::of(0u32..=100),
            proptest::option::of(any::<bool>()),
            proptest::option::of("[a-z]{1,8}/?"),
        )
            .prop_map(|(vertical, exec, size, focus, directory)| Split {
                vertical,
                exec,
                size,
                focus,
                directory,
            })
    }

    fn window_strategy() -> impl Strategy<Value = Window> {
        (
            "[A-C]",
            proptest::option::of("[a-z]{1,8}"),
            proptest::option::of(any::<bool>()),
            proptest::collection::vec(split_strategy(), 0..4),
        )
            .prop_map(|(title, exec, focus, splits)| Window {
                title,
                exec,
                focus,
                directory: None,
                splits,
            })
    }

    fn session_strategy() -> impl Strategy<Value = Session> {
        (
            proptest::option::of("[a-z]{1,8}"),
            proptest::option::of(any::<bool>()),
            proptest::option::of("[a-z]{1,8}\\.conf"),
            proptest::collection::vec(window_strategy(), 0..4),
        )
            .prop_map(|(session_id, attach_existing, config_path, windows)| Session {
                directory: None,
                session_id,
                attach_existing,
                config_path,
                windows,
                sub_sessions: Vec::new(),
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig { cases: 64, ..ProptestConfig::default() })]

        #[test]
        fn prop_empty_override_is_identity(target in session_strategy()) {
            prop_assert_eq!(merge_session(target.clone(), Session::default()), target);
        }

        #[test]
        fn prop_split_merge_length_is_max(
            target in proptest::collection::vec(split_strategy(), 0..5),
            overrides in proptest::collection::vec(split_strategy(), 0..5),
        ) {
            let expected = target.len().max(overrides.len());
            prop_assert_eq!(merge_splits(target, overrides).len(), expected);
        }

        #[test]
        fn prop_window_merge_keeps_target_prefix(
            target in proptest::collection::vec(window_strategy(), 0..4),
            overrides in proptest::collection::vec(window_strategy(), 0..4),
        ) {
            let titles: Vec<String> = target.iter().map(|w| w.title.clone()).collect();
            let merged = merge_windows(target, overrides);
            let prefix: Vec<String> = merged.iter().take(titles.len()).map(|w| w.title.clone()).collect();
            prop_assert_eq!(prefix, titles);
        }
    }
}
