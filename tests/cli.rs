use assert_cmd::Command;

fn cmd() -> Command {
    Command::cargo_bin("readmegen").unwrap()
}

#[test]
fn without_a_terminal_nothing_is_written() {
    let dir = tempfile::tempdir().unwrap();

    cmd()
        .current_dir(dir.path())
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Failed to read answers"));

    assert!(!dir.path().join("README.md").exists());
}
