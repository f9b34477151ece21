use assert_cmd::Command;
use std::fs;

fn docguard() -> Command {
    Command::cargo_bin("docguard").unwrap()
}

const CLEAN_SOURCE: &str = r#"def add(a: int, b: int) -> int:
    """Add two numbers.

    Parameters
    ----------
    a : int
        First addend.
    b : int
        Second addend.

    Returns
    -------
    int
        The sum.
    """
    return a + b
"#;

const DIRTY_SOURCE: &str = r#"def add(a, b):
    """Add.

    Parameters
    ----------
    a
        First addend.
    """
    return a + b
"#;

#[test]
fn check_clean_tree_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("clean.py"), CLEAN_SOURCE).unwrap();

    docguard()
        .args(["check", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicates::str::contains("no violations found"));
}

#[test]
fn check_dirty_tree_exits_nonzero_and_lists_violations() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("dirty.py"), DIRTY_SOURCE).unwrap();

    docguard()
        .args(["check", dir.path().to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicates::str::contains("DOC101"))
        .stdout(predicates::str::contains("DOC103"))
        .stdout(predicates::str::contains("DOC201"));
}

#[test]
fn check_json_format_emits_parseable_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("dirty.py"), DIRTY_SOURCE).unwrap();

    let output = docguard()
        .args(["check", dir.path().to_str().unwrap(), "--format", "json"])
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();
    let reports: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(reports[0]["violations"][0]["code"], 101);
}

#[test]
fn check_quiet_suppresses_summary() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("clean.py"), CLEAN_SOURCE).unwrap();

    docguard()
        .args(["check", dir.path().to_str().unwrap(), "--quiet"])
        .assert()
        .success()
        .stdout(predicates::str::is_empty());
}

#[test]
fn check_respects_discovered_config() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(".docguard.toml"),
        "skip_checking_short_docstrings = false\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("short.py"),
        "def f(a):\n    \"\"\"Do a thing.\"\"\"\n    pass\n",
    )
    .unwrap();

    docguard()
        .args(["check", dir.path().to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicates::str::contains("DOC101"));
}

#[test]
fn check_skip_raises_flag_disables_raise_checks() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("raisy.py"),
        "def f():\n    \"\"\"Do.\n\n    Notes\n    -----\n    Raises nothing documented.\n    \"\"\"\n    raise ValueError('no')\n",
    )
    .unwrap();

    docguard()
        .args([
            "check",
            dir.path().to_str().unwrap(),
            "--skip-raises",
        ])
        .assert()
        .success();
}

#[test]
fn check_writes_report_to_output_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("dirty.py"), DIRTY_SOURCE).unwrap();
    let report_path = dir.path().join("report.json");

    docguard()
        .args([
            "check",
            dir.path().to_str().unwrap(),
            "--format",
            "json",
            "--output",
            report_path.to_str().unwrap(),
        ])
        .assert()
        .failure();
    let reports: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(report_path).unwrap()).unwrap();
    assert!(!reports[0]["violations"].as_array().unwrap().is_empty());
}

#[test]
fn init_writes_config_and_refuses_overwrite() {
    let dir = tempfile::tempdir().unwrap();

    docguard()
        .arg("init")
        .current_dir(dir.path())
        .assert()
        .success();
    assert!(dir.path().join(".docguard.toml").exists());

    docguard()
        .arg("init")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("--force"));

    docguard()
        .args(["init", "--force"])
        .current_dir(dir.path())
        .assert()
        .success();
}
