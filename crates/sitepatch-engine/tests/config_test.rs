use sitepatch_engine::config::{ConfigLoader, RunnerConfig};
use std::io::Write;
use std::time::Duration;

#[test]
fn test_defaults() {
    let config = RunnerConfig::default();
    assert_eq!(config.interval_ms, 100);
    assert_eq!(config.extra_tries, 3);
    assert_eq!(config.interval(), Duration::from_millis(100));
}

#[tokio::test]
async fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "runner:\n  interval_ms: 250\n  extra_tries: 1").unwrap();

    let config = ConfigLoader::load_from(file.path()).await.unwrap();
    assert_eq!(config.runner.interval_ms, 250);
    assert_eq!(config.runner.extra_tries, 1);
}

#[tokio::test]
async fn test_missing_fields_fall_back_to_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "runner:\n  interval_ms: 50").unwrap();

    let config = ConfigLoader::load_from(file.path()).await.unwrap();
    assert_eq!(config.runner.interval_ms, 50);
    assert_eq!(config.runner.extra_tries, 3);
}

#[tokio::test]
async fn test_malformed_yaml_is_a_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "runner: [not, a, mapping]").unwrap();

    let result = ConfigLoader::load_from(file.path()).await;
    assert!(matches!(
        result,
        Err(sitepatch_engine::config::ConfigError::Parse(_))
    ));
}
