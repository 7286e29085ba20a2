//! Tests that run the server binary itself.

use std::process::Command;

#[test]
fn invalid_port_is_logged_and_exits_with_failure() {
    let output = Command::new(env!("CARGO_BIN_EXE_news-data-proxy"))
        .env("PORT", "not-a-port")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute news-data-proxy");

    assert!(!output.status.success(), "Expected an invalid port to fail startup");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("ERROR") && stderr.contains("Failed to load configuration: Configuration error: Invalid port"),
        "Configuration failure should be logged: {}",
        stderr
    );
}
