//! Playlist validation: error messages, defaults, and schema rejections.

use assert_fs::prelude::*;
use mixtape_core::{config, ConfigError, Mode, TrackSource};
use predicates::prelude::predicate;
use rstest::rstest;

// ---------------------------------------------------------------------------
// 1. Accepted documents
// ---------------------------------------------------------------------------

#[test]
fn full_document_is_accepted() {
    let yaml = r#"
playlist:
  mode: random
  delay: 3
  repeat: true
  tracks:
    - file: test1.j2
    - string: "foo:{{bar}}"
      vars:
        bar: 123
"#;
    let cfg = config::parse_str(yaml).expect("parse");
    assert_eq!(cfg.mode, Mode::Random);
    assert_eq!(cfg.delay, 3);
    assert_eq!(cfg.delay(), std::time::Duration::from_secs(3));
    assert!(cfg.repeat);
    assert_eq!(cfg.tracks[0].source, TrackSource::File("test1.j2".into()));
    assert_eq!(cfg.tracks[1].vars["bar"], serde_yaml::Value::from(123));
}

#[test]
fn empty_track_list_is_accepted() {
    let cfg = config::parse_str("playlist:\n  tracks: []\n").expect("parse");
    assert!(cfg.tracks.is_empty());
}

#[test]
fn nested_vars_are_kept_verbatim() {
    let yaml = r#"
playlist:
  tracks:
    - string: "{{ alert.source[0] }}"
      vars:
        alert:
          source: [a, b]
"#;
    let cfg = config::parse_str(yaml).expect("parse");
    let alert = &cfg.tracks[0].vars["alert"];
    assert!(alert.get("source").map(|s| s.is_sequence()).unwrap_or(false));
}

// ---------------------------------------------------------------------------
// 2. Rejected documents
// ---------------------------------------------------------------------------

#[rstest]
#[case::both_sources("playlist:\n  tracks:\n    - file: a\n      string: b\n", "both")]
#[case::no_source("playlist:\n  tracks:\n    - vars: {x: 1}\n", "exactly one")]
#[case::missing_tracks("playlist:\n  mode: random\n", "tracks")]
#[case::missing_playlist("tracks: []\n", "playlist")]
#[case::unknown_mode("playlist:\n  mode: shuffle\n  tracks: []\n", "shuffle")]
#[case::negative_delay("playlist:\n  delay: -1\n  tracks: []\n", "-1")]
#[case::float_delay("playlist:\n  delay: 1.5\n  tracks: []\n", "1.5")]
#[case::string_repeat("playlist:\n  repeat: sometimes\n  tracks: []\n", "sometimes")]
#[case::unknown_top_key("playlist:\n  tracks: []\nextra: 1\n", "extra")]
#[case::unknown_playlist_key("playlist:\n  tempo: 3\n  tracks: []\n", "tempo")]
#[case::unknown_track_key("playlist:\n  tracks:\n    - string: a\n      volume: 11\n", "volume")]
#[case::vars_not_mapping("playlist:\n  tracks:\n    - string: a\n      vars: [1, 2]\n", "map")]
#[case::tracks_not_sequence("playlist:\n  tracks: one\n", "sequence")]
#[case::file_not_string("playlist:\n  tracks:\n    - file: [a]\n", "string")]
fn invalid_documents_are_rejected(#[case] yaml: &str, #[case] needle: &str) {
    let err = config::parse_str(yaml).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)), "got: {err}");
    let msg = err.to_string();
    assert!(msg.contains(needle), "expected '{needle}' in: {msg}");
}

#[test]
fn malformed_yaml_is_rejected() {
    let err = config::parse_str(": : broken : [unclosed").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)), "got: {err}");
}

// ---------------------------------------------------------------------------
// 3. Files
// ---------------------------------------------------------------------------

#[test]
fn load_at_reads_file() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("list.yaml");
    file.write_str("playlist:\n  delay: 1\n  tracks:\n    - string: hi\n").expect("write");
    file.assert(predicate::path::exists());

    let cfg = config::load_at(file.path()).expect("load");
    assert_eq!(cfg.delay, 1);
    assert_eq!(cfg.tracks.len(), 1);
}

#[test]
fn load_invalid_file_reports_path() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("bad.yaml");
    file.write_str("playlist:\n  tracks:\n    - file: a\n      string: b\n").expect("write");

    let err = config::load_at(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "got: {err}");
    assert!(err.to_string().contains("bad.yaml"), "must contain file path, got: {err}");
}

#[test]
fn load_missing_file_reports_not_found() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let err = config::load_at(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound { .. }));
    assert!(err.to_string().contains("absent.yaml"));
}
