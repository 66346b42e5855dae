// tests/engine_fake_invoker.rs
//
// Engine behaviour against a fake invoker: no processes are spawned.

mod common;
use crate::common::builders::OptionsBuilder;
use crate::common::fake_invoker::{FakeInvoker, FakeResponse, MemoryConsole};
use crate::common::init_tracing;

use shellrunner::script::Marker;
use shellrunner::{CommandSpec, Engine, Env, ShellKind, ShellRunnerError, run_with};

#[test]
fn success_returns_parsed_result() {
    init_tracing();
    let invoker = FakeInvoker::new([FakeResponse::ok("hello world\n", "0")]);
    let mut console = MemoryConsole::default();
    let options = OptionsBuilder::new().shell("/bin/bash").build();

    let result = run_with(
        &"echo hello world".into(),
        &options,
        &Env::default(),
        &invoker,
        &mut console,
    )
    .unwrap();

    assert_eq!(result.out(), "hello world");
    assert_eq!(result.status(), 0);
    assert_eq!(result.pipestatus(), &[0]);

    let calls = invoker.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0.kind, ShellKind::Bash);
    assert!(calls[0].1.starts_with("echo hello world\n"));
    assert!(calls[0].1.contains("${PIPESTATUS[@]}"));
}

#[test]
fn pipefail_status_is_rightmost_failure() {
    init_tracing();
    let invoker = FakeInvoker::new([FakeResponse::ok("hello", "1 2 0")]);
    let options = OptionsBuilder::new().shell("zsh").check(false).build();

    let result = run_with(
        &"(exit 1) | (exit 2) | echo hello".into(),
        &options,
        &Env::default(),
        &invoker,
        &mut MemoryConsole::default(),
    )
    .unwrap();

    assert_eq!(result.out(), "hello");
    assert_eq!(result.status(), 2);
    assert_eq!(result.pipestatus(), &[1, 2, 0]);
}

#[test]
fn check_raises_with_full_context() {
    init_tracing();
    let invoker = FakeInvoker::new([FakeResponse::ok("grep: /no/such/file: No such file", "2")]);
    let options = OptionsBuilder::new().shell("sh").build();

    let err = run_with(
        &"grep x /no/such/file".into(),
        &options,
        &Env::default(),
        &invoker,
        &mut MemoryConsole::default(),
    )
    .unwrap_err();

    let failure = err.as_failure().expect("expected a command failure");
    assert_eq!(failure.command(), "grep x /no/such/file");
    assert_eq!(failure.out(), "grep: /no/such/file: No such file");
    assert_eq!(failure.status(), 2);
    assert_eq!(failure.pipestatus(), &[2]);
    assert_eq!(err.to_string(), "Command exited with non-zero status: [2]");
}

#[test]
fn check_false_never_raises() {
    init_tracing();
    let invoker = FakeInvoker::new([FakeResponse::ok("", "1")]);
    let options = OptionsBuilder::new().shell("sh").check(false).build();

    let result = run_with(
        &"false".into(),
        &options,
        &Env::default(),
        &invoker,
        &mut MemoryConsole::default(),
    )
    .unwrap();
    assert_eq!(result.status(), 1);
    assert!(!result.success());
}

#[test]
fn console_echoes_follow_options() {
    init_tracing();
    let spec = CommandSpec::from(["cd /tmp", "ls"]);
    let env = Env::default();

    let invoker = FakeInvoker::new([
        FakeResponse::ok("a\nb\n", "0"),
        FakeResponse::ok("a\nb\n", "0"),
        FakeResponse::ok("boom", "3"),
    ]);

    let mut console = MemoryConsole::default();
    let loud = OptionsBuilder::new()
        .shell("bash")
        .show_output(true)
        .show_commands(true)
        .build();
    run_with(&spec, &loud, &env, &invoker, &mut console).unwrap();
    assert_eq!(console.commands, vec!["cd /tmp; ls".to_string()]);
    assert_eq!(console.outputs, vec!["a\nb".to_string()]);

    let mut console = MemoryConsole::default();
    let quiet = OptionsBuilder::new().shell("bash").build();
    run_with(&spec, &quiet, &env, &invoker, &mut console).unwrap();
    assert!(console.commands.is_empty());
    assert!(console.outputs.is_empty());

    // Output is still echoed when the run fails.
    let mut console = MemoryConsole::default();
    let err = run_with(&spec, &loud, &env, &invoker, &mut console).unwrap_err();
    assert!(err.as_failure().is_some());
    assert_eq!(console.outputs, vec!["boom".to_string()]);
}

#[test]
fn missing_marker_falls_back_to_exit_code() {
    init_tracing();
    let invoker = FakeInvoker::new([FakeResponse::without_marker("killed\n", 137)]);
    let options = OptionsBuilder::new().shell("bash").check(false).build();

    let result = run_with(
        &"sleep 100".into(),
        &options,
        &Env::default(),
        &invoker,
        &mut MemoryConsole::default(),
    )
    .unwrap();

    assert_eq!(result.out(), "killed");
    assert_eq!(result.status(), 137);
    assert_eq!(result.pipestatus(), &[137]);
}

#[test]
fn empty_sequence_is_rejected_before_spawning() {
    init_tracing();
    let invoker = FakeInvoker::new([]);
    let options = OptionsBuilder::new().shell("bash").build();

    let err = run_with(
        &CommandSpec::Sequence(vec![]),
        &options,
        &Env::default(),
        &invoker,
        &mut MemoryConsole::default(),
    )
    .unwrap_err();

    assert!(matches!(err, ShellRunnerError::EmptyCommand));
    assert!(invoker.calls().is_empty());
}

#[test]
fn fixed_marker_is_used_in_script() {
    init_tracing();
    let invoker = FakeInvoker::new([FakeResponse::ok("x", "0")]);
    let mut console = MemoryConsole::default();
    let marker = Marker::from_token("feedface");
    let options = OptionsBuilder::new().shell("fish").build();

    let result = Engine::new(&invoker, &mut console)
        .with_marker(marker)
        .execute(&"echo x".into(), &options, &Env::default())
        .unwrap();

    assert_eq!(result.out(), "x");
    let script = invoker.last_script().unwrap();
    assert!(script.ends_with(
        r#"printf '\n%s%s:' '__SHELLRUNNER_feed' 'face__'; printf ' %s' $__shellrunner_ps; printf '\n'"#
    ));
}

#[test]
fn every_run_gets_a_fresh_marker() {
    init_tracing();
    let invoker = FakeInvoker::new([FakeResponse::ok("", "0"), FakeResponse::ok("", "0")]);
    let options = OptionsBuilder::new().shell("sh").build();
    let env = Env::default();

    for _ in 0..2 {
        run_with(&"true".into(), &options, &env, &invoker, &mut MemoryConsole::default()).unwrap();
    }

    let calls = invoker.calls();
    assert_ne!(calls[0].1, calls[1].1);
}

#[test]
fn result_destructures_positionally() {
    init_tracing();
    let invoker = FakeInvoker::new([FakeResponse::ok("out", "0 1")]);
    let options = OptionsBuilder::new().shell("bash").check(false).build();

    let result = run_with(
        &"true | false".into(),
        &options,
        &Env::default(),
        &invoker,
        &mut MemoryConsole::default(),
    )
    .unwrap();

    let (out, status, pipestatus): (String, i32, Vec<i32>) = result.into();
    assert_eq!(out, "out");
    assert_eq!(status, 1);
    assert_eq!(pipestatus, vec![0, 1]);
}
