use filetime::{FileTime, set_file_mtime};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(args: &[&str], path: &Path, tz: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dirlist"))
        .args(args)
        .arg(path)
        .env("TZ", tz)
        .output()
        .unwrap()
}

fn create_dated_file() -> TempDir {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("report.bin");
    fs::write(&path, vec![0u8; 1234]).unwrap();
    // 2006-01-02 15:04:05 UTC
    set_file_mtime(&path, FileTime::from_unix_time(1_136_214_245, 0)).unwrap();
    temp
}

#[test]
fn test_long_listing_uses_zone_abbreviation() {
    let temp = create_dated_file();

    let output = run(&["-l"], temp.path(), "America/Denver");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with(" 1234 02 Jan 06 08:04 MST report.bin\n"), "{stdout}");
}

#[test]
fn test_long_listing_in_utc() {
    let temp = create_dated_file();

    for tz in ["UTC", ":Etc/UTC", ""] {
        let output = run(&["-l"], temp.path(), tz);
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.ends_with(" 1234 02 Jan 06 15:04 UTC report.bin\n"), "TZ={tz:?}: {stdout}");
    }
}

#[test]
fn test_missing_path_still_exits_zero() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nowhere");

    let output = run(&["-R"], &missing, "UTC");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Error reading directory: "));
    assert_eq!(stdout.lines().count(), 1);
    assert!(output.stderr.is_empty());
}
