use assert_cmd::Command;

fn bookshelf() -> Command {
    let mut cmd = Command::cargo_bin("bookshelf").unwrap();
    cmd.env("BOOKSHELF_CONFIG_DIR", env!("CARGO_MANIFEST_DIR"))
        .env_remove("BOOKSHELF_ENV")
        .env_remove("DATABASE_URL")
        .env_remove("ELEPHANTSQL_URL")
        .env_remove("PORT");
    cmd
}

#[test]
fn help_lists_subcommands() {
    let output = bookshelf().arg("--help").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("serve"));
    assert!(stdout.contains("config"));
}

#[test]
fn config_redacts_database_password() {
    let output = bookshelf()
        .arg("config")
        .env("BOOKSHELF_DATABASE__URL", "postgres://app:hunter2@db:5432/books")
        .env("BOOKSHELF_SERVER__PORT", "9001")
        .output()
        .unwrap();
    assert!(output.status.success());

    let settings: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(settings["database"]["url"], "postgres://app:***@db:5432/books");
    assert_eq!(settings["server"]["port"], 9001);
}

#[test]
fn unknown_service_is_rejected() {
    let output = bookshelf().args(["serve", "users"]).output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn unsupported_environment_fails_to_load() {
    let output = bookshelf().arg("config").env("BOOKSHELF_ENV", "qa").output().unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("unsupported environment"));
}

#[test]
fn prefixed_port_beats_plain_port() {
    let output = bookshelf()
        .arg("config")
        .env("BOOKSHELF_SERVER__PORT", "9001")
        .env("PORT", "8080")
        .output()
        .unwrap();
    assert!(output.status.success());

    let settings: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(settings["server"]["port"], 9001);
}
