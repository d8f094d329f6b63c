use tempfile::tempdir;
use vasari_error::VasariErrorKind;
use vasari_models::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_MODEL, OpenAiClient};

#[test]
fn test_from_file_overrides_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("client.toml");
    std::fs::write(
        &path,
        "model = \"gpt-4o-mini\"\ntimeout_secs = 5\nmax_retries = 1\n",
    )
    .expect("write config");

    let config = ClientConfig::from_file(&path).expect("load config");
    assert_eq!(config.model(), "gpt-4o-mini");
    assert_eq!(*config.timeout_secs(), 5);
    assert_eq!(*config.max_retries(), 1);
    assert_eq!(config.base_url(), DEFAULT_BASE_URL);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("client.toml");
    std::fs::write(&path, "timeout_secs = 120\n").expect("write config");

    let config = ClientConfig::from_file(&path).expect("load config");
    assert_eq!(config.model(), DEFAULT_MODEL);
    assert_eq!(*config.timeout_secs(), 120);
}

#[test]
fn test_api_key_never_read_from_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("client.toml");
    std::fs::write(&path, "api_key = \"sk-should-be-ignored\"\n").expect("write config");

    let config = ClientConfig::from_file(&path).expect("load config");
    assert_eq!(config.api_key(), "");
}

#[test]
fn test_unparseable_file_is_a_config_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("client.toml");
    std::fs::write(&path, "model = [not toml").expect("write config");

    let err = ClientConfig::from_file(&path).expect_err("expected parse failure");
    assert!(matches!(err.kind(), VasariErrorKind::Config(_)));
}

#[test]
fn test_missing_file_is_a_config_error() {
    let err = ClientConfig::from_file("/nonexistent/vasari.toml").expect_err("expected failure");
    assert!(matches!(err.kind(), VasariErrorKind::Config(_)));
}

#[test]
fn test_empty_api_key_fails_client_construction() {
    let config = ClientConfig::default();
    let err = OpenAiClient::from_config(&config).expect_err("empty key must not construct");
    assert!(matches!(err.kind(), VasariErrorKind::Config(_)));
}

#[test]
fn test_client_construction_with_key() {
    let config = ClientConfig::default().with_api_key("sk-test");
    let client = OpenAiClient::from_config(&config).expect("construction failed");
    assert_eq!(
        vasari_interface::VasariDriver::model_name(&client),
        DEFAULT_MODEL
    );
    assert_eq!(
        vasari_interface::VasariDriver::provider_name(&client),
        "openai"
    );
}
