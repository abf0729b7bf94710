use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn bin() -> String {
    // Cargo sets this for bin targets in integration tests
    env!("CARGO_BIN_EXE_eqstep").to_string()
}

fn run(args: &[&str]) -> Output {
    Command::new(bin())
        .arg("--no-color")
        .args(args)
        .output()
        .expect("run")
}

fn stdout(o: &Output) -> String {
    String::from_utf8_lossy(&o.stdout).into_owned()
}

fn stderr(o: &Output) -> String {
    String::from_utf8_lossy(&o.stderr).into_owned()
}

#[test]
fn shorthand_solves_and_prints_steps() {
    let o = run(&["2x+3=7"]);
    assert!(o.status.success(), "stderr:\n{}", stderr(&o));
    let out = stdout(&o);
    assert!(out.contains("Original equation: 2x+3=7"), "{out}");
    assert!(out.contains("Answer: x = 2"), "{out}");
}

#[test]
fn solve_joins_words() {
    let o = run(&["solve", "2x", "+", "3", "=", "7"]);
    assert!(o.status.success(), "stderr:\n{}", stderr(&o));
    assert!(stdout(&o).contains("Original equation: 2x + 3 = 7"));
}

#[test]
fn json_output_is_machine_readable() {
    let o = run(&["--json", "solve", "3x+2x-1=9"]);
    assert!(o.status.success(), "stderr:\n{}", stderr(&o));
    let v: serde_json::Value = serde_json::from_str(&stdout(&o)).expect("valid json");
    assert_eq!(v["resolution"]["kind"], "unique");
    assert_eq!(v["resolution"]["value"], 2.0);
    assert_eq!(v["answer"], "x = 2");
    assert!(v["steps"].as_array().map(|s| s.len() >= 5).unwrap_or(false));
}

#[test]
fn report_is_written_to_out() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("report.json");
    let o = run(&["solve", "--out", report.to_str().unwrap(), "x-4=0"]);
    assert!(o.status.success(), "stderr:\n{}", stderr(&o));

    let text = fs::read_to_string(&report).expect("report exists");
    let v: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(v["variable"], "x");
    assert_eq!(v["resolution"]["value"], 4.0);
}

#[test]
fn out_may_follow_the_equation() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("r.json");
    let o = run(&["solve", "3x+2x-1=9", "--out", report.to_str().unwrap()]);
    assert!(o.status.success(), "stderr:\n{}", stderr(&o));

    let v: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report).expect("report exists")).unwrap();
    assert_eq!(v["resolution"]["value"], 2.0);
    assert_eq!(v["equation"], "3x+2x-1=9");
}

#[test]
fn minus_signs_in_equation_words() {
    let o = run(&["solve", "2x", "=", "-4"]);
    assert!(o.status.success(), "stderr:\n{}", stderr(&o));
    assert!(stdout(&o).contains("Answer: x = -2"), "{}", stdout(&o));

    let o = run(&["solve", "--", "-x", "=", "3"]);
    assert!(o.status.success(), "stderr:\n{}", stderr(&o));
    assert!(stdout(&o).contains("Answer: x = -3"), "{}", stdout(&o));
}

#[test]
fn rejected_equation_exits_nonzero() {
    let o = run(&["--pretty-errors", "2x+*3=7"]);
    assert!(!o.status.success());
    let err = stderr(&o);
    assert!(err.contains("error:"), "{err}");
    assert!(err.contains("column 4"), "{err}");
    assert!(err.contains("|    ^"), "{err}");
}

#[test]
fn batch_counts_failures() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sheet.txt");
    fs::write(&input, "# homework\n2x+3=7\n5=5\n\nx/2=3\n").unwrap();

    let o = run(&["batch", input.to_str().unwrap()]);
    assert_eq!(o.status.code(), Some(1));
    assert!(stdout(&o).contains("2 solved, 1 failed"), "{}", stdout(&o));
    assert!(stderr(&o).contains("line 3"), "{}", stderr(&o));
}

#[test]
fn arithmetic_subcommand() {
    let o = run(&["arith", "div", "7", "2"]);
    assert!(o.status.success(), "stderr:\n{}", stderr(&o));
    assert!(stdout(&o).contains("Answer: 7 ÷ 2 = 3.5"));

    let o = run(&["arith", "divmod", "1", "0"]);
    assert_eq!(o.status.code(), Some(1));
    assert!(stderr(&o).contains("division by zero"));
}

#[test]
fn tokens_dump() {
    let o = run(&["tokens", "2x+3=7"]);
    assert!(o.status.success(), "stderr:\n{}", stderr(&o));
    let out = stdout(&o);
    assert!(out.contains("=== Normalized ===") && out.contains("=== Tokens ==="), "{out}");
}

#[test]
fn config_init_writes_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("eqstep.toml");
    let p = path.to_str().unwrap();

    let o = run(&["--config", p, "config", "--init"]);
    assert!(o.status.success(), "stderr:\n{}", stderr(&o));
    let written = fs::read_to_string(&path).expect("config written");
    assert!(written.contains("max_iterations = 100"), "{written}");

    let again = run(&["--config", p, "config", "--init"]);
    assert_eq!(again.status.code(), Some(1));
}

#[test]
fn repl_reads_until_exit() {
    let mut child = Command::new(bin())
        .args(["--no-color", "repl"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"2x+3=7\nmul 12 12\ndiv 1\nexit\nx=99\n")
        .unwrap();
    let o = child.wait_with_output().expect("wait");

    assert!(o.status.success(), "stderr:\n{}", stderr(&o));
    let out = stdout(&o);
    assert!(out.contains("Answer: x = 2"), "{out}");
    assert!(out.contains("Answer: 12 × 12 = 144"), "{out}");
    assert!(!out.contains("x = 99"), "{out}");
    assert!(stderr(&o).contains("both numbers are required"));
}
