//! Integration tests for Configuration System

use sdbview::config::{ConfigLoader, Credentials};
use sdbview::store::fixture::Fixture;
use sdbview::store::{DatabaseClient, MemoryClient};
use sdbview::web::WebServerConfig;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_load_from_file_merges_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("sdbcli.toml");
    std::fs::write(
        &config_file,
        r#"
[credentials]
access_key = "AKID"
secret_key = "SECRET"

[web]
port = 9090

[store]
fixture = "fixtures/demo.toml"

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    assert_eq!(config.credentials.access_key.as_deref(), Some("AKID"));
    assert_eq!(config.credentials.region, "eu-west-1");
    assert_eq!(config.web.host, "127.0.0.1");
    assert_eq!(config.web.port, 9090);
    assert_eq!(
        config.store.fixture,
        Some(PathBuf::from("fixtures/demo.toml"))
    );
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.output, "stderr");

    let web = WebServerConfig::from_config(&config.web, None, Some(7000));
    assert_eq!(web.bind_addr(), "127.0.0.1:7000");

    let creds = Credentials::resolve(None, None, None, &config.credentials).unwrap();
    assert_eq!(creds.secret_key, "SECRET");
}

#[test]
fn test_load_from_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let result = ConfigLoader::load_from_file(&temp_dir.path().join("absent.toml"));
    assert!(result.is_err());
}

#[test]
fn test_fixture_file_seeds_memory_client() {
    let temp_dir = TempDir::new().unwrap();
    let fixture_file = temp_dir.path().join("fixture.toml");
    std::fs::write(
        &fixture_file,
        r#"
[[domains]]
name = "b-domain"

[[domains]]
name = "a-domain"

[[domains.items]]
name = "x"
attributes = [["k", "v"]]
"#,
    )
    .unwrap();

    let fixture = Fixture::load(&fixture_file).unwrap();
    let client = MemoryClient::from_fixture(&fixture);
    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    let domains = rt.block_on(client.list_domains()).unwrap();
    assert_eq!(domains, vec!["a-domain", "b-domain"]);
    let result = rt.block_on(client.select("select * from a-domain")).unwrap();
    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0].attributes[0].value, "v");
}
