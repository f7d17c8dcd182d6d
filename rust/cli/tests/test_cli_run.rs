use std::io::Write as _;

use showdown_cli::run;

#[test]
fn compare_command_exits_zero_and_prints_outcome() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();

    let code = run(
        ["showdown", "compare", "2S 3S 2H 4S 5S", "AH QD 9H 7H 5H"],
        &mut out,
        &mut err,
    );

    assert_eq!(code, 0);
    let stdout = String::from_utf8_lossy(&out);
    assert!(stdout.contains("Outcome: left"), "stdout: {}", stdout);
}

#[test]
fn compare_command_rejects_bad_input_with_exit_two() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();

    let code = run(
        ["showdown", "compare", "2S 3S", "AH QD 9H 7H 5H"],
        &mut out,
        &mut err,
    );

    assert_eq!(code, 2);
    let stderr = String::from_utf8_lossy(&err);
    assert!(stderr.contains("Invalid input"), "stderr: {}", stderr);
}

#[test]
fn rank_command_prints_the_best_category() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();

    let code = run(["showdown", "rank", "2D TD 6D 8D 4D"], &mut out, &mut err);

    assert_eq!(code, 0);
    let stdout = String::from_utf8_lossy(&out);
    assert!(stdout.contains("Category: Flush"), "stdout: {}", stdout);
}

#[test]
fn help_lists_all_subcommands_and_exits_zero() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();

    let code = run(["showdown", "--help"], &mut out, &mut err);

    assert_eq!(code, 0);
    let stdout = String::from_utf8_lossy(&out);
    for cmd in ["compare", "rank", "batch"] {
        assert!(stdout.contains(cmd), "help should list '{}'", cmd);
    }
}

#[test]
fn unknown_subcommand_exits_two() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();

    let code = run(["showdown", "shuffle"], &mut out, &mut err);

    assert_eq!(code, 2);
    assert!(!err.is_empty());
}

#[test]
fn batch_command_runs_a_file_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("pairs.txt");
    let mut f = std::fs::File::create(&input).unwrap();
    writeln!(f, "2S 3S 2H 4S 5S AH QD 9H 7H 5H").unwrap();
    writeln!(f, "JH 5D 7H TC JS JD JC TS 5S 7S").unwrap();

    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();

    let code = run(
        ["showdown", "batch", "--input", input.to_str().unwrap()],
        &mut out,
        &mut err,
    );

    assert_eq!(code, 0);
    let stdout = String::from_utf8_lossy(&out);
    assert!(stdout.contains("1: left"), "stdout: {}", stdout);
    assert!(stdout.contains("2: tie"), "stdout: {}", stdout);
}

#[test]
fn batch_command_with_log_writes_jsonl_records() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("pairs.txt");
    let log = dir.path().join("records.jsonl");
    let mut f = std::fs::File::create(&input).unwrap();
    writeln!(f, "2S 3S 2H 4S 5S AH QD 9H 7H 5H").unwrap();

    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();

    let code = run(
        [
            "showdown",
            "batch",
            "--input",
            input.to_str().unwrap(),
            "--log",
            log.to_str().unwrap(),
        ],
        &mut out,
        &mut err,
    );

    assert_eq!(code, 0);
    let records = std::fs::read_to_string(&log).unwrap();
    assert_eq!(records.lines().count(), 1);
    assert!(records.contains("\"record_id\""));
    assert!(records.contains("\"ts\""));
}

#[test]
fn missing_batch_input_file_exits_two() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();

    let code = run(
        ["showdown", "batch", "--input", "no/such/file.txt"],
        &mut out,
        &mut err,
    );

    assert_eq!(code, 2);
    let stderr = String::from_utf8_lossy(&err);
    assert!(stderr.contains("I/O error"), "stderr: {}", stderr);
}
