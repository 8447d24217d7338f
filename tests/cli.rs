//! Integration tests for the rpnsheet binary.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

const EPSILON: f64 = 1e-11;

fn run_file(path: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_rpnsheet"))
        .args(args)
        .arg(path)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute rpnsheet");
    collect(output)
}

fn run_stdin(input: &str, args: &[&str]) -> (String, String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_rpnsheet"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn rpnsheet");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");
    collect(child.wait_with_output().expect("Failed to wait for rpnsheet"))
}

fn collect(output: std::process::Output) -> (String, String, i32) {
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);
    (stdout, stderr, exit_code)
}

/// Names must match exactly, values within EPSILON.
fn assert_same_output(expected: &str, actual: &str) {
    let expected: Vec<_> = expected.lines().collect();
    let actual: Vec<_> = actual.lines().collect();
    assert_eq!(expected.len(), actual.len(), "line count differs:\n{:?}", actual);
    for (i, (e, a)) in expected.iter().zip(&actual).enumerate() {
        if i % 2 == 0 {
            assert_eq!(e, a);
            continue;
        }
        let e: f64 = e.parse().unwrap();
        let a: f64 = a.parse().unwrap();
        if e.is_nan() || e.is_infinite() {
            assert_eq!(e.to_string(), a.to_string());
        } else {
            assert!((e - a).abs() < EPSILON, "{} != {}", e, a);
        }
    }
}

fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
}

/// `in.N` is an input sheet; `out.N` is its expected output, or absent when
/// the sheet contains a circular dependency.
#[test]
fn test_data_files() {
    let mut seen = 0;
    for entry in fs::read_dir(data_dir()).unwrap() {
        let path = entry.unwrap().path();
        let file_name = path.file_name().unwrap().to_string_lossy().to_string();
        let Some(id) = file_name.strip_prefix("in.") else {
            continue;
        };
        seen += 1;
        let out_path = data_dir().join(format!("out.{}", id));
        let (stdout, stderr, code) = run_file(&path, &[]);
        assert_eq!(code, 0, "{}: {}", file_name, stderr);
        if out_path.exists() {
            assert_same_output(&fs::read_to_string(&out_path).unwrap(), &stdout);
        } else {
            assert!(
                stdout.starts_with("Circular dependency between"),
                "{}: {}",
                file_name,
                stdout
            );
        }
    }
    assert!(seen >= 3);
}

#[test]
fn test_stdin_default_output() {
    let (stdout, _, code) = run_stdin("2\nA1\n5\nA2\nA1 A1 +\n", &[]);
    assert_eq!(stdout, "A1\n5.0\nA2\n10.0\n");
    assert_eq!(code, 0);
}

#[test]
fn test_readable_output() {
    let (stdout, _, code) = run_stdin("2\nA1\n5\nA2\nA1 A1 +\n", &["--readable"]);
    assert_eq!(stdout, "A1 => 5.0\nA2 => 10.0\n");
    assert_eq!(code, 0);

    let (short, _, _) = run_stdin("2\nA1\n5\nA2\nA1 A1 +\n", &["-r"]);
    assert_eq!(short, stdout);
}

#[test]
fn test_cycle_message() {
    let (stdout, _, code) = run_stdin("3\nA1\n1\nB1\nB2 A1 +\nB2\nA1 B1 +\n", &[]);
    let line = stdout.trim();
    assert!(
        line == "Circular dependency between B1 and B2 detected"
            || line == "Circular dependency between B2 and B1 detected",
        "{}",
        line
    );
    assert_eq!(stdout.lines().count(), 1);
    assert_eq!(code, 0);
}

#[test]
fn test_unknown_cell_fails() {
    let (stdout, stderr, code) = run_stdin("1\nA1\nZ99 +\n", &[]);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Z99"), "{}", stderr);
    assert_ne!(code, 0);
}

#[test]
fn test_invalid_name_fails() {
    let (stdout, stderr, code) = run_stdin("1\nA0\n1\n", &[]);
    assert!(stdout.is_empty());
    assert!(stderr.contains("line 2"), "{}", stderr);
    assert_ne!(code, 0);
}

#[test]
fn test_missing_file_fails() {
    let (_, stderr, code) = run_file(Path::new("/nonexistent/sheet.txt"), &[]);
    assert!(stderr.contains("Failed to read sheet"), "{}", stderr);
    assert_ne!(code, 0);
}

#[test]
fn test_input_file_argument() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"3\nc1\n1 2 +\nC2\nC1 0 /\nC3\n3 -3 +\n").unwrap();
    let (stdout, _, code) = run_file(file.path(), &["-r"]);
    assert_eq!(stdout, "C1 => 3.0\nC2 => 0.0\nC3 => 0.0\n");
    assert_eq!(code, 0);
}
