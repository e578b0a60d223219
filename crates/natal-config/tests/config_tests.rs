use natal::EngineSettings;
use natal_config::{load_engine_settings, parse_engine_settings};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn test_empty_config_is_default() {
    assert_eq!(parse_engine_settings("").unwrap(), EngineSettings::default());
}

#[test]
fn test_full_config() {
    let file = write_config(
        r#"
[engine]
natal_quincunx = true
default_birth_hour = 6
default_birth_minute = 30

[narrative]
max_strengths = 3
max_challenges = 2

[celebrities]
matches = 8
"#,
    );
    let settings = load_engine_settings(Some(file.path())).unwrap();
    assert!(settings.natal_quincunx);
    assert_eq!(settings.default_birth_hour, 6);
    assert_eq!(settings.default_birth_minute, 30);
    assert_eq!(settings.max_strengths, 3);
    assert_eq!(settings.max_challenges, 2);
    assert_eq!(settings.celebrity_matches, 8);
}

#[test]
fn test_partial_config_keeps_defaults() {
    let settings = parse_engine_settings("[narrative]\nmax_strengths = 2\n").unwrap();
    assert_eq!(settings.max_strengths, 2);
    assert_eq!(settings.max_challenges, 4);
    assert_eq!(settings.default_birth_hour, 12);
}

#[test]
fn test_unknown_key_rejected() {
    assert!(parse_engine_settings("[engine]\nhouse_system = \"placidus\"\n").is_err());
    assert!(parse_engine_settings("[rendering]\nscale = 2\n").is_err());
}

#[test]
fn test_bad_default_time_rejected() {
    let err = parse_engine_settings("[engine]\ndefault_birth_hour = 24\n").unwrap_err();
    assert!(err.to_string().contains("clock time"));
}

#[test]
fn test_missing_explicit_path_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("natal.toml");
    assert!(load_engine_settings(Some(&missing)).is_err());
}
