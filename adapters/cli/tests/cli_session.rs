use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

fn run_ricochet(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_ricochet"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to launch the ricochet binary");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("failed to send commands");

    child.wait_with_output().expect("ricochet did not finish")
}

#[test]
fn scripted_session_draws_and_previews() {
    let output = run_ricochet(&["--seed", "7"], "draw\nred\nbogus\nquit\n");

    assert!(output.status.success(), "session should exit cleanly");
    let stdout = String::from_utf8(output.stdout).expect("utf-8 output");
    assert!(stdout.starts_with("Welcome to Ricochet Robots.\n"));
    assert!(stdout.contains("new goal: "), "draw should report the goal");
    assert!(
        stdout.contains("the red robot can reach: ") || stdout.contains("the red robot cannot move"),
        "bare color should preview slides"
    );
    assert!(stdout.contains("unknown robot color `bogus`"));
}

#[test]
fn oversized_board_is_refused_before_play() {
    let output = run_ricochet(&["--columns", "300"], "quit\n");

    assert!(!output.status.success(), "oversized board should fail");
    let stderr = String::from_utf8(output.stderr).expect("utf-8 output");
    assert!(
        stderr.contains("limited to 255"),
        "error should name the limit: {stderr}"
    );
}
