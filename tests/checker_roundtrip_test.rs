//! Round-trip tests against a stand-in checker executable.
//!
//! A small shell script plays the checker role: it answers `--version`
//! and prints a canned JSON report, which exercises the locate/run/parse
//! path and the fail-quiet contract of `validate` without a real JSHint
//! installation.

#![cfg(unix)]

use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use jshint_language_server::config::{Args, Config};
use jshint_language_server::{validate, Checker, Position, Severity};

fn write_fake_checker(dir: &tempfile::TempDir, report: &str) -> PathBuf {
    let path = dir.path().join("fake-jshint");
    let mut file = std::fs::File::create(&path).expect("create fake checker");
    writeln!(file, "#!/bin/sh").expect("write script");
    writeln!(file, "if [ \"$1\" = \"--version\" ]; then").expect("write script");
    writeln!(file, "  echo fake-jshint 0.0.1").expect("write script");
    writeln!(file, "  exit 0").expect("write script");
    writeln!(file, "fi").expect("write script");
    // Consume stdin like a real checker would, then emit the report
    writeln!(file, "cat > /dev/null").expect("write script");
    writeln!(file, "cat <<'EOF'").expect("write script");
    writeln!(file, "{report}").expect("write script");
    writeln!(file, "EOF").expect("write script");
    drop(file);

    let mut perms = std::fs::metadata(&path).expect("stat script").permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).expect("mark script executable");
    path
}

fn config_for(program: &PathBuf) -> Config {
    Config::from_args(Args {
        checker: Some(program.display().to_string()),
        config_file: None,
        globals: Vec::new(),
        log_level: "info".to_string(),
    })
    .expect("create config")
}

#[tokio::test]
async fn test_locate_and_run_round_trip() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let program = write_fake_checker(
        &dir,
        r#"{"errors": [
            {"line": 3, "character": 10, "reason": "Missing semicolon", "evidence": "var x = 1"},
            null
        ]}"#,
    );

    let config = config_for(&program);
    let checker = Checker::locate(&config).await.expect("locate checker");

    let annotations = validate(&checker, "var x = 1", &config.check_options()).await;

    assert_eq!(annotations.len(), 1);
    assert_eq!(annotations[0].severity, Severity::Error);
    assert_eq!(annotations[0].from, Position::new(2, 9));
}

#[tokio::test]
async fn test_checker_loads_exactly_once() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let program = write_fake_checker(&dir, r#"{"errors": []}"#);

    // Make the version probe observable by counting its invocations
    let counter = dir.path().join("version-calls");
    let script = std::fs::read_to_string(&program).expect("read script");
    let script = script.replace(
        "echo fake-jshint 0.0.1",
        &format!("echo probe >> {}\n  echo fake-jshint 0.0.1", counter.display()),
    );
    std::fs::write(&program, script).expect("rewrite script");

    let config = config_for(&program);
    let cell: tokio::sync::OnceCell<Option<Checker>> = tokio::sync::OnceCell::new();

    for _ in 0..3 {
        let checker = cell
            .get_or_init(|| async { Checker::locate(&config).await.ok() })
            .await
            .as_ref()
            .expect("checker loads");
        let _ = validate(checker, "var x = 1", &config.check_options()).await;
    }

    let probes = std::fs::read_to_string(&counter).expect("read probe counter");
    assert_eq!(probes.lines().count(), 1, "version probe should run once");
}

#[tokio::test]
async fn test_locate_fails_for_missing_program() {
    let config = config_for(&PathBuf::from("/nonexistent/fake-jshint"));
    assert!(Checker::locate(&config).await.is_err());
}

#[tokio::test]
async fn test_unreadable_report_degrades_to_empty() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let program = write_fake_checker(&dir, "this is not json");

    let config = config_for(&program);
    let checker = Checker::locate(&config).await.expect("locate checker");

    let annotations = validate(&checker, "var x = 1", &config.check_options()).await;
    assert!(annotations.is_empty());
}
