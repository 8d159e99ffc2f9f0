use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const SAMPLE: &str = "; deployment settings
name = demo

[server]
host = 0.0.0.0
url = http://host/?a=b

[db]
user = admin
";

#[test]
fn test_ini_to_json_on_stdout() -> Result<()> {
    let dir = tempdir()?;
    let input_path = dir.path().join("app.ini");
    fs::write(&input_path, SAMPLE)?;

    let mut cmd = Command::cargo_bin("inidoc")?;
    cmd.arg(&input_path).arg("--to").arg("json");

    cmd.assert().success().stdout(predicate::str::contains(
        r#""server":{"host":"0.0.0.0","url":"http://host/?a=b"}"#,
    ));

    dir.close()?;
    Ok(())
}

#[test]
fn test_stdin_is_normalised() -> Result<()> {
    let mut cmd = Command::cargo_bin("inidoc")?;
    cmd.write_stdin(SAMPLE);

    let output = cmd.assert().success().get_output().stdout.clone();
    insta::assert_snapshot!(String::from_utf8(output)?, @r"
    name = demo

    [server]
    host = 0.0.0.0
    url = http://host/?a=b

    [db]
    user = admin
    ");
    Ok(())
}

#[test]
fn test_format_inferred_from_output_path() -> Result<()> {
    let dir = tempdir()?;
    let input_path = dir.path().join("app.ini");
    let output_path = dir.path().join("app.yaml");
    fs::write(&input_path, SAMPLE)?;

    let mut cmd = Command::cargo_bin("inidoc")?;
    cmd.arg(&input_path).arg("-o").arg(&output_path);
    cmd.assert().success();

    let mut back = Command::cargo_bin("inidoc")?;
    back.arg(&output_path).arg("--to").arg("ini");
    back.assert()
        .success()
        .stdout(predicate::str::contains("[db]\nuser = admin\n"));

    dir.close()?;
    Ok(())
}

#[test]
fn test_existing_output_is_replaced_with_yes() -> Result<()> {
    let dir = tempdir()?;
    let output_path = dir.path().join("out.ini");
    fs::write(&output_path, "old = 1\n")?;

    let mut cmd = Command::cargo_bin("inidoc")?;
    cmd.arg("-o").arg(&output_path).arg("-y").write_stdin("new = 2\n");
    cmd.assert().success();

    assert_eq!(fs::read_to_string(&output_path)?, "new = 2\n");
    dir.close()?;
    Ok(())
}

#[test]
fn test_no_escape_keeps_backslashes() -> Result<()> {
    let mut escaped = Command::cargo_bin("inidoc")?;
    escaped.write_stdin("dir = C:\\\\tmp\n");
    escaped
        .assert()
        .success()
        .stdout(predicate::eq("dir = C:\\\\tmp\n"));

    let mut raw = Command::cargo_bin("inidoc")?;
    raw.arg("--no-escape")
        .arg("--to")
        .arg("json")
        .write_stdin("dir = C:\\\\tmp\n");
    raw.assert()
        .success()
        .stdout(predicate::str::contains(r#""dir":"C:\\\\tmp""#));
    Ok(())
}

#[test]
fn test_missing_input_file() -> Result<()> {
    let dir = tempdir()?;

    let mut cmd = Command::cargo_bin("inidoc")?;
    cmd.arg(dir.path().join("missing.ini"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));

    dir.close()?;
    Ok(())
}

#[test]
fn test_invalid_json_input() -> Result<()> {
    let mut cmd = Command::cargo_bin("inidoc")?;
    cmd.arg("--from").arg("json").write_stdin("this is not json");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read stdin as Json"));
    Ok(())
}
