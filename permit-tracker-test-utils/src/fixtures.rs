//! Access to the fixture files shipped with the web client.

use std::path::PathBuf;

use serde_json::Value;

use crate::error::TestError;

/// Directory holding the shipped `test_data` fixtures
pub fn fixture_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../public/test_data"))
}

/// Raw contents of a fixture file
pub async fn load_fixture(file: &str) -> Result<String, TestError> {
    Ok(tokio::fs::read_to_string(fixture_dir().join(file)).await?)
}

/// Parsed contents of a fixture file
pub async fn load_fixture_json(file: &str) -> Result<Value, TestError> {
    let content = load_fixture(file).await?;

    Ok(serde_json::from_str(&content)?)
}
