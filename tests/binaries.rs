// Runs the demo binaries as separate processes

use std::process::{Command, Output};

const COMMAND_DEMO: &str = env!("CARGO_BIN_EXE_command_demo");
const MEMENTO_DEMO: &str = env!("CARGO_BIN_EXE_memento_demo");

fn run(bin: &str, args: &[&str]) -> Output {
    Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn demo binary")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

fn originator_lines(output: &Output) -> Vec<String> {
    stdout_lines(output)
        .into_iter()
        .filter(|l| l.starts_with("Originator:"))
        .collect()
}

#[test]
fn test_command_demo_without_arguments() {
    let output = run(COMMAND_DEMO, &[]);

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![
            "Invoker: Does anybody want something done before I begin?",
            "SimpleCommand: See, I can do simple things like printing (Say Hi!)",
            "Invoker: ...doing something really important...",
            "Invoker: Does anybody want something done after I finish?",
            "ComplexCommand: Complex stuff should be done by a receiver object.",
            "Receiver: Working on (Send email).",
            "Receiver: Also working on (Save report).",
        ]
    );
}

#[test]
fn test_command_demo_polish() {
    let output = run(COMMAND_DEMO, &["--locale", "polish"]);

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[5], "Odbiorca: Pracuję nad (Wyślij email).");
}

#[test]
fn test_verbose_logs_leave_stdout_alone() {
    let quiet = run(COMMAND_DEMO, &[]);
    let verbose = run(COMMAND_DEMO, &["-vv"]);

    assert!(verbose.status.success());
    assert_eq!(quiet.stdout, verbose.stdout);
    assert!(quiet.stderr.is_empty());
    assert!(!verbose.stderr.is_empty());
}

#[test]
fn test_rust_log_overrides_verbosity() {
    let output = Command::new(MEMENTO_DEMO)
        .args(["-vv", "--seed", "1"])
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to spawn demo binary");

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}

#[test]
fn test_memento_demo_without_arguments() {
    let output = run(MEMENTO_DEMO, &[]);

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(
        lines[0],
        "Originator: My initial state is: Super-duper-super-puper-super."
    );
    assert_eq!(
        lines
            .iter()
            .filter(|l| *l == "Caretaker: Saving Originator's state...")
            .count(),
        3
    );
    assert!(lines.contains(&"Client: Now, let's rollback!".to_string()));
    assert!(lines.contains(&"Client: Once more!".to_string()));
    assert_eq!(
        lines
            .iter()
            .filter(|l| l.starts_with("Caretaker: Restoring state to: "))
            .count(),
        2
    );
}

#[test]
fn test_memento_demo_seed_is_reproducible() {
    let first = run(MEMENTO_DEMO, &["--seed", "7", "--backups", "1"]);
    let second = run(MEMENTO_DEMO, &["--seed", "7", "--backups", "1"]);

    assert!(first.status.success());
    assert!(second.status.success());
    assert_eq!(originator_lines(&first), originator_lines(&second));
    assert_eq!(originator_lines(&first).len(), 4);
}

#[test]
fn test_memento_demo_flags_reach_config() {
    let output = run(
        MEMENTO_DEMO,
        &[
            "--initial-state",
            "custom-start",
            "--state-length",
            "5",
            "--preview-len",
            "3",
            "--backups",
            "2",
            "--seed",
            "3",
        ],
    );

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines[0], "Originator: My initial state is: custom-start");

    let changed: Vec<&String> = lines
        .iter()
        .filter(|l| l.starts_with("Originator: and my state has changed to: "))
        .collect();
    assert_eq!(changed.len(), 2);
    for line in changed {
        let state = line.trim_start_matches("Originator: and my state has changed to: ");
        assert_eq!(state.len(), 5);
    }

    assert!(lines.iter().any(|l| l.ends_with("(cus...)")));
}
