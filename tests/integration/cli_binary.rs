//! Integration tests for the sdbcli binary: credential preconditions and a scripted
//! console session over stdin.

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn sdbcli(temp: &TempDir, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_sdbcli"))
        .env_remove("AWS_ACCESS_KEY_ID")
        .env_remove("AWS_SECRET_ACCESS_KEY")
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join("config"))
        .args(["--quiet"])
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    // The process may exit before reading input, so a closed pipe is not a failure
    let _ = child.stdin.take().unwrap().write_all(stdin.as_bytes());
    child.wait_with_output().unwrap()
}

#[test]
fn test_missing_access_key() {
    let temp = TempDir::new().unwrap();
    let output = sdbcli(&temp, &[], "ls\n");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "accessKey: AWS Access Key ID is not set\n"
    );
}

#[test]
fn test_missing_secret_key() {
    let temp = TempDir::new().unwrap();
    let output = sdbcli(&temp, &["-a", "AKID"], "ls\n");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "secret: AWS Secret Key ID is not set\n"
    );
}

#[test]
fn test_console_session_with_fixture() {
    let temp = TempDir::new().unwrap();
    let fixture = temp.path().join("fixture.toml");
    fs::write(
        &fixture,
        r#"
[[domains]]
name = "things"

[[domains.items]]
name = "i1"
attributes = [["color", "red"], ["size", "M"]]

[[domains.items]]
name = "i2"
attributes = [["color", "blue"]]
"#,
    )
    .unwrap();

    let output = sdbcli(
        &temp,
        &["-a", "AKID", "-s", "SECRET", "--fixture", fixture.to_str().unwrap()],
        "ls\nselect * from things\nq\n",
    );
    assert!(
        output.status.success(),
        "stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    let border = "-".repeat(27);
    let expected = format!(
        "> things\n> {b}\n| ItemName | color | size |\n{b}\n| i1       | red   | M    |\n| i2       | blue  |\n{b}\n> ",
        b = border
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout), expected);
}

#[test]
fn test_credentials_from_config_file() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("sdbcli.toml");
    fs::write(
        &config,
        r#"
[credentials]
access_key = "AKID"
secret_key = "SECRET"
"#,
    )
    .unwrap();

    let output = sdbcli(&temp, &["--config", config.to_str().unwrap()], "ls\n");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "> no domains found\n> "
    );
}
