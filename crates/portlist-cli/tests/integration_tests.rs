//! End-to-end tests for the `portlist` binary.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

/// Test context holding a temporary repository with a `ports/` tree
struct TestContext {
    repo: TempDir,
}

impl TestContext {
    fn new() -> Self {
        let repo = TempDir::new().expect("failed to create temp dir");
        fs::create_dir_all(repo.path().join("ports")).expect("failed to create ports dir");
        Self { repo }
    }

    fn add_port(&self, name: &str, extra: &str) {
        let dir = self.repo.path().join("ports").join(name);
        fs::create_dir_all(&dir).expect("failed to create port dir");
        fs::write(
            dir.join("port.toml"),
            format!("[package]\nname = \"{name}\"\nversion = \"1.0\"\n{extra}"),
        )
        .expect("failed to write port.toml");
    }

    fn portlist_cmd(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_portlist"));
        cmd.arg("--root")
            .arg(self.repo.path())
            .arg("--src-url")
            .arg("https://src.example.org")
            .env_remove("PORTLIST_ROOT")
            .env_remove("PORTLIST_SRC_URL")
            .env_remove("PORTLIST_PROJECT")
            .env_remove("RUST_LOG");
        cmd
    }
}

#[test]
fn test_help_command() {
    let ctx = TestContext::new();
    let output = ctx
        .portlist_cmd()
        .arg("--help")
        .output()
        .expect("failed to run portlist");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("--verbose"));
}

#[test]
fn test_report_output() {
    let ctx = TestContext::new();
    ctx.add_port("zlib", "url = \"https://zlib.net/zlib-1.2.11.tar.gz\"\nlibc = \"glibc\"\n");
    ctx.add_port("curl", "url = \"https://curl.se/curl-7.88.1.tar.bz2\"\ndisabled_arch = [\"arm\"]\n");
    ctx.add_port("devenv", "");
    fs::write(ctx.repo.path().join("ports/curl/nacl.patch"), vec![b'x'; 4096])
        .expect("failed to write patch");

    let output = ctx.portlist_cmd().output().expect("failed to run portlist");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("#summary List of ports available in naclports.\n"));
    assert!(stdout.contains("[https://src.example.org/ports/curl/nacl.patch 4 KiB] ||  || not arm ||"));
    assert!(stdout.contains("|| glibc-only ||  ||  ||"));
    assert!(stdout.contains("\n_Total = 2_\n"));
    assert!(stdout.contains("\n_Total = 1_\n"));
    let curl = stdout.find("ports/curl curl]").expect("curl row missing");
    let zlib = stdout.find("ports/zlib zlib]").expect("zlib row missing");
    assert!(curl < zlib);
}

#[test]
fn test_verbose_logs_to_stderr() {
    let ctx = TestContext::new();
    ctx.add_port("zlib", "url = \"https://zlib.net/zlib.tar.gz\"\n");

    let quiet = ctx.portlist_cmd().output().expect("failed to run portlist");
    let verbose = ctx
        .portlist_cmd()
        .arg("-v")
        .output()
        .expect("failed to run portlist");

    assert!(verbose.status.success());
    assert_eq!(quiet.stdout, verbose.stdout);
    assert!(String::from_utf8_lossy(&verbose.stderr).contains("Found port zlib"));
}

#[test]
fn test_invalid_port_fails() {
    let ctx = TestContext::new();
    ctx.add_port("zlib", "url = \"https://zlib.net/zlib.tar.gz\"\n");
    let broken = ctx.repo.path().join("ports/broken");
    fs::create_dir_all(&broken).expect("failed to create port dir");
    fs::write(broken.join("port.toml"), "[package]\nname = \"broken\"\nversion = \"\"\n")
        .expect("failed to write port.toml");

    let output = ctx.portlist_cmd().output().expect("failed to run portlist");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("version is empty"));
}

#[test]
fn test_git_url_and_libc_override_are_listed() {
    let ctx = TestContext::new();
    ctx.add_port(
        "glib",
        "url = \"git://example.org/glib.git\"\nlibc = \"glibc\"\ndisabled_libc = [\"newlib\"]\n",
    );

    let output = ctx.portlist_cmd().output().expect("failed to run portlist");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[git://example.org/glib.git glib.git]"));
    assert!(stdout.contains("|| glibc-only ||"));
}

#[test]
fn test_project_flag() {
    let ctx = TestContext::new();
    let output = ctx
        .portlist_cmd()
        .args(["--project", "webports"])
        .output()
        .expect("failed to run portlist");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("#summary List of ports available in webports.\n"));
}

#[test]
fn test_missing_ports_dir_fails() {
    let ctx = TestContext::new();
    fs::remove_dir(ctx.repo.path().join("ports")).expect("failed to remove ports dir");

    let output = ctx.portlist_cmd().output().expect("failed to run portlist");
    assert!(!output.status.success());
}
