mod assert_cmd {
    use std::io::Write;
    use std::process::{Command, Output, Stdio};

    pub trait CommandCargoExt {
        fn cargo_bin(name: &str) -> Self;
    }

    impl CommandCargoExt for Command {
        fn cargo_bin(name: &str) -> Self {
            let var = format!("CARGO_BIN_EXE_{name}");
            let path = std::env::var(&var).unwrap_or_else(|_| {
                let mut p = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
                p.push("target/debug");
                p.push(name);
                p.to_string_lossy().into_owned()
            });
            Command::new(path)
        }
    }

    pub trait AssertCmd {
        fn assert(self) -> Assert;
        fn assert_with_stdin(self, input: &str) -> Assert;
    }

    pub struct Assert {
        output: Output,
    }

    impl Assert {
        pub fn success(self) -> Self {
            assert!(self.output.status.success());
            self
        }

        pub fn failure(self) -> Self {
            assert!(!self.output.status.success());
            self
        }

        pub fn stdout<P: Fn(&str) -> bool>(self, pred: P) -> Self {
            let out = String::from_utf8_lossy(&self.output.stdout);
            assert!(pred(&out), "unexpected stdout: {out}");
            self
        }

        pub fn stderr<P: Fn(&str) -> bool>(self, pred: P) -> Self {
            let err = String::from_utf8_lossy(&self.output.stderr);
            assert!(pred(&err), "unexpected stderr: {err}");
            self
        }
    }

    impl AssertCmd for Command {
        fn assert(mut self) -> Assert {
            let output = self.output().expect("run command");
            Assert { output }
        }

        fn assert_with_stdin(mut self, input: &str) -> Assert {
            let mut child = self
                .stdin(Stdio::piped())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .spawn()
                .expect("spawn command");
            child
                .stdin
                .take()
                .expect("stdin")
                .write_all(input.as_bytes())
                .expect("write stdin");
            let output = child.wait_with_output().expect("wait command");
            Assert { output }
        }
    }

    pub mod prelude {
        pub use super::{AssertCmd, CommandCargoExt};
    }
}

mod predicates {
    pub mod str {
        pub fn contains(s: &str) -> impl Fn(&str) -> bool + '_ {
            move |input: &str| input.contains(s)
        }
    }
}

use assert_cmd::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn dict_path(tmp: &TempDir) -> PathBuf {
    tmp.path().join("dictionary.json")
}

/// 環境の影響を受けないよう temp ディレクトリに閉じ込める
fn word_dict(tmp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("word_dict");
    cmd.current_dir(tmp.path());
    cmd.env("XDG_DATA_HOME", tmp.path());
    cmd.env_remove("WORD_DICT_PATH");
    cmd.env_remove("WORD_DICT_ENV_PATH");
    cmd.env_remove("RUST_LOG");
    cmd.arg("--dict").arg(dict_path(tmp));
    cmd
}

fn run_once(tmp: &TempDir, args: &[&str]) -> Command {
    let mut cmd = word_dict(tmp);
    cmd.arg("run").args(args);
    cmd
}

#[test]
fn add_writes_durable_file() {
    let tmp = TempDir::new().unwrap();
    run_once(&tmp, &["add", "cat", "a small domesticated feline"])
        .assert()
        .success()
        .stdout(contains("Added 'cat'."));

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dict_path(&tmp)).unwrap()).unwrap();
    assert_eq!(
        saved,
        serde_json::json!({"cat": "a small domesticated feline"})
    );
}

#[test]
fn entries_survive_between_runs() {
    let tmp = TempDir::new().unwrap();
    run_once(&tmp, &["add", "apple", "a", "fruit"]).assert().success();

    run_once(&tmp, &["lookup", "apple"])
        .assert()
        .success()
        .stdout(contains("apple: a fruit"));

    run_once(&tmp, &["lookup", "aple"])
        .assert()
        .success()
        .stdout(contains("Did you mean:"))
        .stdout(contains("  - apple"));
}

#[test]
fn invalid_command_fails_without_writing() {
    let tmp = TempDir::new().unwrap();
    run_once(&tmp, &["add", "lonely"])
        .assert()
        .failure()
        .stdout(contains("Unknown or invalid command. Type 'help'."));
    assert!(!dict_path(&tmp).exists());
}

#[test]
fn interactive_session_round_trip() {
    let tmp = TempDir::new().unwrap();
    let script = "\
add cat \"a small domesticated feline\"
edit cat a furry pet
lookup cat
list C
remove cat
lookup cat
quit
";
    word_dict(&tmp)
        .assert_with_stdin(script)
        .success()
        .stdout(contains("Dictionary App - type 'help' for commands."))
        .stdout(contains("Added 'cat'."))
        .stdout(contains("Updated 'cat'."))
        .stdout(contains("cat: a furry pet"))
        .stdout(contains("Removed 'cat'."))
        .stdout(contains("'cat' not found."))
        .stdout(|out| !out.contains("Did you mean:"))
        .stdout(contains("Bye!"));

    let saved = fs::read_to_string(dict_path(&tmp)).unwrap();
    assert_eq!(saved.trim(), "{}");
}

#[test]
fn corrupt_file_starts_empty_with_warning() {
    let tmp = TempDir::new().unwrap();
    fs::write(dict_path(&tmp), "[\"not\", \"an object\"]").unwrap();

    word_dict(&tmp)
        .assert_with_stdin("list\nexit\n")
        .success()
        .stdout(contains("No entries."))
        .stderr(contains("starting empty"));

    assert!(tmp.path().join("dictionary.json.corrupt").exists());
}

#[test]
fn eof_ends_session() {
    let tmp = TempDir::new().unwrap();
    word_dict(&tmp)
        .assert_with_stdin("help\n")
        .success()
        .stdout(contains("lookup WORD"))
        .stdout(contains("Bye!"));
}

#[test]
fn config_show_prints_resolved_path() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = word_dict(&tmp);
    cmd.args(["config", "show"]);
    cmd.assert()
        .success()
        .stdout(contains("dictionary.json"));
}

fn migrate_dict(tmp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("migrate_dict");
    cmd.current_dir(tmp.path());
    cmd.env("XDG_DATA_HOME", tmp.path());
    cmd.env_remove("WORD_DICT_PATH");
    cmd.env_remove("WORD_DICT_ENV_PATH");
    cmd.env_remove("RUST_LOG");
    cmd.arg(dict_path(tmp));
    cmd
}

#[test]
fn migrate_rewrites_canonical_form() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        dict_path(&tmp),
        r#"{"n": 1, "blank": " ", " padded ": "kept", "b": "x"}"#,
    )
    .unwrap();

    migrate_dict(&tmp)
        .assert()
        .success()
        .stdout(contains("dictionary migrated (3 entries)"));

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dict_path(&tmp)).unwrap()).unwrap();
    assert_eq!(
        saved,
        serde_json::json!({ "b": "x", "n": "1", "padded": "kept" })
    );
    assert!(!tmp.path().join("dictionary.json.tmp").exists());
}

#[test]
fn migrate_refuses_corrupt_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(dict_path(&tmp), "{ not json").unwrap();

    migrate_dict(&tmp)
        .assert()
        .failure()
        .stderr(contains("cannot migrate"));

    assert_eq!(fs::read_to_string(dict_path(&tmp)).unwrap(), "{ not json");
    assert!(tmp.path().join("dictionary.json.corrupt").exists());
}

#[test]
fn migrate_without_file_is_a_no_op() {
    let tmp = TempDir::new().unwrap();

    migrate_dict(&tmp)
        .assert()
        .success()
        .stdout(contains("no dictionary at"));

    assert!(!dict_path(&tmp).exists());
}
