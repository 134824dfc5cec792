use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use serde_json::Value;

fn censor(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_censor"))
        .current_dir(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run censor")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).trim_end().to_string()
}

#[test]
fn check_reports_and_sets_exit_code() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;

    let out = censor(dir.path(), &["check", "that darn dog"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out), "profane");

    let out = censor(
        dir.path(),
        &["--disable-tier", "possibly_offensive", "check", "that darn dog"],
    );
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "clean");
    Ok(())
}

#[test]
fn clean_ish_masks_obfuscated_words() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let out = censor(dir.path(), &["clean-ish", "Sh1t happens"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "**** happens");
    Ok(())
}

#[test]
fn flags_edit_words_and_mask() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let out = censor(
        dir.path(),
        &["--add-word", "frak=2", "--remove-word", "darn", "--mask", "[x]", "clean", "frak that darn dog"],
    );
    assert!(out.status.success());
    assert_eq!(stdout(&out), "[x] that darn dog");
    Ok(())
}

#[test]
fn clean_reads_stdin() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let mut child = Command::new(env!("CARGO_BIN_EXE_censor"))
        .current_dir(dir.path())
        .arg("clean")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"well damn it\n")?;
    let out = child.wait_with_output()?;
    assert_eq!(stdout(&out), "well **** it");
    Ok(())
}

#[test]
fn config_file_in_working_directory_is_used() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("fr.toml"), "[words]\nzut = 2\n")?;
    std::fs::write(
        dir.path().join("censor.toml"),
        "[engine]\nlocale = \"fr\"\n\n[locales]\nfr = \"fr.toml\"\n",
    )?;

    let out = censor(dir.path(), &["check", "zut alors"]);
    assert_eq!(out.status.code(), Some(1));

    let out = censor(dir.path(), &["check", "darn"]);
    assert_eq!(out.status.code(), Some(0));
    Ok(())
}

#[test]
fn hits_and_words_print_json() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;

    let out = censor(dir.path(), &["hits", "Sh1t happens"]);
    let plan: Value = serde_json::from_slice(&out.stdout)?;
    assert_eq!(plan[0]["fragment"], "Sh1t");
    assert_eq!(plan[0]["term"], "shit");
    assert_eq!(plan[0]["tier"], 2);

    let out = censor(dir.path(), &["--add-word", "frak", "words"]);
    let words: Value = serde_json::from_slice(&out.stdout)?;
    assert_eq!(words["locale"], "en");
    assert_eq!(words["words"]["frak"], 5);
    assert_eq!(words["words"]["darn"], 4);
    Ok(())
}

#[test]
fn unknown_locale_fails() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let out = censor(dir.path(), &["--locale", "xx", "check", "hi"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("unknown locale `xx`"));
    Ok(())
}
