use rstest::rstest;
use serde::{Deserialize, Serialize};
use spellcard_fs::{ConfigStore, Error, NormalizedPath};
use std::fs;
use tempfile::TempDir;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct TestConfig {
    output_dir: String,
    timeout_secs: u64,
}

#[rstest]
#[case("config.toml", "output_dir = \"src/spells\"\ntimeout_secs = 30")]
#[case("config.json", r#"{"output_dir": "src/spells", "timeout_secs": 30}"#)]
#[case("config.yaml", "output_dir: src/spells\ntimeout_secs: 30")]
#[case("config.yml", "output_dir: src/spells\ntimeout_secs: 30")]
fn test_load_by_extension(#[case] file_name: &str, #[case] content: &str) {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join(file_name);
    fs::write(&file_path, content).unwrap();

    let config: TestConfig = ConfigStore::new()
        .load(&NormalizedPath::new(&file_path))
        .unwrap();

    assert_eq!(
        config,
        TestConfig {
            output_dir: "src/spells".into(),
            timeout_secs: 30
        }
    );
}

#[test]
fn test_unsupported_extension() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("config.ini");
    fs::write(&file_path, "output_dir=x").unwrap();

    let result: Result<TestConfig, _> = ConfigStore::new().load(&NormalizedPath::new(&file_path));
    assert!(matches!(result, Err(Error::UnsupportedFormat { .. })));
}

#[test]
fn test_parse_error_names_format() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("config.toml");
    fs::write(&file_path, "output_dir = ").unwrap();

    let result: Result<TestConfig, _> = ConfigStore::new().load(&NormalizedPath::new(&file_path));
    match result {
        Err(Error::ConfigParse { format, .. }) => assert_eq!(format, "TOML"),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_save_then_load() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("nested").join("config.toml"));
    let config = TestConfig {
        output_dir: "cards".into(),
        timeout_secs: 5,
    };

    let store = ConfigStore::new();
    store.save(&path, &config).unwrap();
    let loaded: TestConfig = store.load(&path).unwrap();

    assert_eq!(loaded, config);
}
