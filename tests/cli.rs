//! End-to-end tests for the mrtgdf binary

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A command whose HOME (and so cache directory) is a fresh temp dir.
fn mrtgdf(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("mrtgdf");
    cmd.env("HOME", home);
    cmd
}

fn hostname() -> String {
    nix::unistd::gethostname().unwrap().to_string_lossy().into_owned()
}

fn cache_key(path: &Path) -> String {
    use std::os::unix::ffi::OsStrExt;
    path.as_os_str()
        .as_bytes()
        .iter()
        .map(|&b| {
            if b == b'/' || b <= b' ' || b > 0x7E { format!("%{:02X}", b) } else { (b as char).to_string() }
        })
        .collect()
}

fn seed_record(home: &Path, path: &Path, counters: [u64; 5]) -> PathBuf {
    let dir = home.join(".mrtgdf");
    fs::create_dir_all(&dir).unwrap();
    let file = dir.join(cache_key(path));
    let bytes: Vec<u8> = counters.iter().flat_map(|c| c.to_le_bytes()).collect();
    fs::write(&file, bytes).unwrap();
    file
}

/// A temp dir with a home directory and an ordinary (unmounted) directory.
fn fixture() -> (TempDir, PathBuf, PathBuf) {
    let tmp = tempfile::tempdir().unwrap();
    let home = tmp.path().join("home");
    let stub = tmp.path().join("usb");
    fs::create_dir(&home).unwrap();
    fs::create_dir(&stub).unwrap();
    (tmp, home, stub)
}

fn stdout_lines(out: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(out).lines().map(str::to_string).collect()
}

#[test]
fn help_displays() {
    let (_tmp, home, _) = fixture();
    mrtgdf(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("MRTG"));
}

#[test]
fn version_displays() {
    let (_tmp, home, _) = fixture();
    mrtgdf(&home)
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains("mrtgdf"));
}

#[test]
fn missing_path_argument_is_a_usage_error() {
    let (_tmp, home, _) = fixture();
    mrtgdf(&home).assert().code(1).stdout(predicate::str::is_empty());
}

#[test]
fn extra_arguments_are_a_usage_error() {
    let (_tmp, home, _) = fixture();
    mrtgdf(&home).args(["/", "/tmp"]).assert().code(1);
}

#[test]
fn unknown_option_exits_1() {
    let (_tmp, home, _) = fixture();
    mrtgdf(&home).args(["--bogus", "/"]).assert().code(1);
}

#[test]
fn root_reports_live_usage() {
    let (_tmp, home, _) = fixture();
    let out = mrtgdf(&home).arg("/").assert().success().get_output().stdout.clone();
    let lines = stdout_lines(&out);

    assert_eq!(lines.len(), 4);
    for pct in &lines[..2] {
        let v: u32 = pct.parse().unwrap();
        assert!(v <= 100);
    }
    assert_eq!(lines[2], "-");
    assert_eq!(lines[3], hostname());
    assert_eq!(fs::metadata(home.join(".mrtgdf").join("%2F")).unwrap().len(), 40);
}

#[test]
fn double_dash_separates_path() {
    let (_tmp, home, _) = fixture();
    mrtgdf(&home).args(["--", "/"]).assert().success();
}

#[test]
fn nonexistent_path_fails_without_output() {
    let (tmp, home, _) = fixture();
    let gone = tmp.path().join("gone");
    mrtgdf(&home)
        .arg(&gone)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("ERROR: stat "));
}

#[test]
fn unmounted_path_reports_last_known_stats() {
    let (_tmp, home, stub) = fixture();
    seed_record(&home, &stub, [1000, 500, 250, 200, 50]);

    mrtgdf(&home)
        .arg(&stub)
        .assert()
        .success()
        .stdout(format!("75\n75\n-\n{}\n", hostname()));
}

#[test]
fn unmounted_path_without_cache_reports_unknown() {
    let (_tmp, home, stub) = fixture();
    mrtgdf(&home)
        .arg(&stub)
        .assert()
        .code(1)
        .stdout(format!("UNKNOWN\nUNKNOWN\n-\n{}\n", hostname()))
        .stderr(predicate::str::starts_with("ERROR: open "));
}

#[test]
fn truncated_cache_reports_unknown() {
    let (_tmp, home, stub) = fixture();
    let file = seed_record(&home, &stub, [1, 1, 1, 1, 1]);
    fs::write(&file, [0u8; 10]).unwrap();

    mrtgdf(&home)
        .arg(&stub)
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("UNKNOWN\nUNKNOWN\n-\n"))
        .stderr(predicate::str::contains("truncated"));
}

#[test]
fn config_overrides_hostname_and_cache_dir() {
    let (tmp, home, stub) = fixture();
    let cache = tmp.path().join("elsewhere");
    fs::write(
        home.join(".mrtgdf.toml"),
        format!("[cache]\ndir = \"{}\"\n\n[output]\nhostname = \"nas\"\n", cache.display()),
    )
    .unwrap();
    fs::create_dir_all(&cache).unwrap();
    fs::write(cache.join(cache_key(&stub)), [100u64, 0, 0, 10, 10].iter().flat_map(|c| c.to_le_bytes()).collect::<Vec<u8>>()).unwrap();

    mrtgdf(&home).arg(&stub).assert().success().stdout("100\n0\n-\nnas\n");
}

#[test]
fn invalid_config_is_fatal() {
    let (_tmp, home, _) = fixture();
    fs::write(home.join(".mrtgdf.toml"), "not toml at all [").unwrap();
    mrtgdf(&home)
        .arg("/")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(".mrtgdf.toml"));
}

#[test]
fn json_snapshot_for_cached_path() {
    let (_tmp, home, stub) = fixture();
    seed_record(&home, &stub, [1000, 500, 250, 200, 50]);

    let out = mrtgdf(&home).args(["--json"]).arg(&stub).assert().success().get_output().stdout.clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["source"], "cached");
    assert_eq!(v["blocks_available"], 250);
    assert_eq!(v["inode_use_pct"], 75);
}

#[test]
fn verbose_logs_go_to_stderr_only() {
    let (_tmp, home, _) = fixture();
    mrtgdf(&home)
        .args(["-vv", "/"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d+\n\d+\n-\n.+\n$").unwrap())
        .stderr(predicate::str::contains("cache directory"));
}
