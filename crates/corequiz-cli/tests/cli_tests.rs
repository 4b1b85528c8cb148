//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// The binary in an isolated working directory, without colors or banner.
fn corequiz(dir: &TempDir) -> Command {
    let mut cmd = bare(dir);
    cmd.args(["--no-color", "--no-banner"]);
    cmd
}

fn bare(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("corequiz").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("NO_COLOR", "1")
        .env_remove("COREQUIZ_PROMPT")
        .env_remove("COREQUIZ_SEED")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn quit_says_goodbye() {
    let dir = TempDir::new().unwrap();

    corequiz(&dir)
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bye!"));
}

#[test]
fn end_of_input_exits_cleanly() {
    let dir = TempDir::new().unwrap();

    corequiz(&dir)
        .write_stdin("help\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Bye!"));
}

#[test]
fn list_shows_sample_quizzes() {
    let dir = TempDir::new().unwrap();

    corequiz(&dir)
        .write_stdin("list\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[0]: Capital of Italy"))
        .stdout(predicate::str::contains("[3]: Capital of Portugal"));
}

#[test]
fn no_samples_starts_empty() {
    let dir = TempDir::new().unwrap();

    corequiz(&dir)
        .arg("--no-samples")
        .write_stdin("list\nshow 5\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Capital").not())
        .stdout(predicate::str::contains("Error: no quiz with id 5"));
}

#[test]
fn add_then_show() {
    let dir = TempDir::new().unwrap();

    corequiz(&dir)
        .write_stdin("add\n2+2?\n4\nshow 4\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added: 2+2? => 4"))
        .stdout(predicate::str::contains("[4]: 2+2? => 4"));
}

#[test]
fn edit_replaces_quiz() {
    let dir = TempDir::new().unwrap();

    corequiz(&dir)
        .write_stdin("edit 0\nCapital of Germany\nBerlin\nshow 0\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[0]: Capital of Germany => Berlin"));
}

#[test]
fn delete_then_show_reports_missing() {
    let dir = TempDir::new().unwrap();

    corequiz(&dir)
        .write_stdin("delete 1\nshow 1\nlist\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted quiz 1"))
        .stdout(predicate::str::contains("Error: no quiz with id 1"))
        .stdout(predicate::str::contains("[1]: ").not());
}

#[test]
fn test_command_ignores_case() {
    let dir = TempDir::new().unwrap();

    corequiz(&dir)
        .write_stdin("test 1\n  pARIS \ntest 1\nLyon\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your answer is CORRECT"))
        .stdout(predicate::str::contains("Your answer is INCORRECT"));
}

#[test]
fn missing_id_is_reported() {
    let dir = TempDir::new().unwrap();

    corequiz(&dir)
        .write_stdin("show\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("missing id parameter for 'show'"));
}

#[test]
fn unknown_command_is_reported() {
    let dir = TempDir::new().unwrap();

    corequiz(&dir)
        .write_stdin("xyzzy\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command: 'xyzzy'"));
}

#[test]
fn play_single_quiz_to_the_end() {
    let dir = TempDir::new().unwrap();

    corequiz(&dir)
        .arg("--no-samples")
        .write_stdin("add\n2+2?\n4\nplay\n 4 \nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Correct - 1 right so far"))
        .stdout(predicate::str::contains("Nothing left to ask."))
        .stdout(predicate::str::contains("Game over. Score: 1"));
}

#[test]
fn play_wrong_answer_ends_game() {
    let dir = TempDir::new().unwrap();

    corequiz(&dir)
        .args(["--seed", "3"])
        .write_stdin("p\nAtlantis\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("INCORRECT"))
        .stdout(predicate::str::contains("Game over. Score: 0"))
        // Block-digit zero.
        .stdout(predicate::str::contains("█ █"));
}

#[test]
fn title_banner_is_shown_by_default() {
    let dir = TempDir::new().unwrap();

    bare(&dir)
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("CORE Quiz"));
}

#[test]
fn local_config_file_is_used() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("corequiz.toml"),
        r#"
seed_samples = false
banner = false
color = false

[[quizzes]]
question = "Largest planet"
answer = "Jupiter"
"#,
    )
    .unwrap();

    bare(&dir)
        .write_stdin("list\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[0]: Largest planet"))
        .stdout(predicate::str::contains("Capital").not())
        .stdout(predicate::str::contains("CORE Quiz").not());
}

#[test]
fn explicit_missing_config_fails() {
    let dir = TempDir::new().unwrap();

    corequiz(&dir)
        .args(["--config", "nowhere.toml"])
        .write_stdin("q\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("corequiz.toml"), "prompt = [").unwrap();

    corequiz(&dir)
        .write_stdin("q\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config"));
}

#[test]
fn bad_seed_env_fails() {
    let dir = TempDir::new().unwrap();

    corequiz(&dir)
        .env("COREQUIZ_SEED", "lots")
        .write_stdin("q\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("COREQUIZ_SEED"));
}
