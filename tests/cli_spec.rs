mod common;

use std::fs;
use std::process::Command;

use common::sample_dict;

fn scel2ibus() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_scel2ibus"));
    cmd.env_remove("SCEL2IBUS_EXTENSION").env("RUST_LOG", "off");
    cmd
}

#[test]
fn info_prints_header_and_counts() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("sample.scel"), sample_dict()).expect("write fixture");

    let output = scel2ibus().arg("--info").arg(dir.path()).output().expect("run scel2ibus");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    assert!(stdout.contains("sample.scel"));
    assert!(stdout.contains("  Name: 网络流行新词\n"));
    assert!(stdout.contains("  Description: sample\n"));
    assert!(stdout.contains("  Example: 你好\n"));
    assert!(stdout.contains("  Word groups: 2\n"));
    assert!(stdout.contains("  Words: 3\n"));
    assert!(!dir.path().join("sample.txt").exists());
}

#[test]
fn info_reports_undecodable_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("broken.scel"), b"not a dictionary").expect("write fixture");

    let output = scel2ibus().arg("--info").arg(dir.path()).output().expect("run scel2ibus");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR:"));
}

#[test]
fn missing_path_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("typo");

    let output = scel2ibus().arg(&missing).output().expect("run scel2ibus");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Input not found"));
}

#[test]
fn converts_directory_into_output_dir() {
    let dir = tempfile::tempdir().expect("tempdir");
    let src = dir.path().join("src");
    fs::create_dir_all(src.join("net")).expect("create dir");
    fs::write(src.join("net/sample.scel"), sample_dict()).expect("write fixture");
    let out = dir.path().join("out");

    let output = scel2ibus()
        .arg(&src)
        .arg("--output-dir")
        .arg(&out)
        .output()
        .expect("run scel2ibus");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Converted 1 file(s)"));
    let text = fs::read_to_string(out.join("net/sample.txt")).expect("read output");
    assert_eq!(text, "你好 ni'hao 16\n拟好 ni'hao 3\n吗 ma 0\n");
}
