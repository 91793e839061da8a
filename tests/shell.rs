use std::ffi::OsStr;
use std::io::Write;
use std::os::unix::ffi::OsStrExt;
use std::os::unix::process::CommandExt;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn hsh(home: &Path, args: &[&str], input: &str) -> Result<Output, Box<dyn std::error::Error>> {
    hsh_with(home, args, input.as_bytes(), &[])
}

fn hsh_with(
    home: &Path,
    args: &[&str],
    input: &[u8],
    extra_env: &[(&str, &OsStr)],
) -> Result<Output, Box<dyn std::error::Error>> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_hsh"))
        .arg0("hsh")
        .args(args)
        .env_clear()
        .env("HOME", home)
        .env("PATH", "/usr/bin:/bin")
        .envs(extra_env.iter().copied())
        .current_dir(home)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    child
        .stdin
        .take()
        .ok_or("stdin not piped")?
        .write_all(input)?;
    Ok(child.wait_with_output()?)
}

fn run(input: &str) -> Result<(TempDir, Output), Box<dyn std::error::Error>> {
    let home = tempfile::tempdir()?;
    let output = hsh(home.path(), &[], input)?;
    Ok((home, output))
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_runs_external_commands() -> Result<(), Box<dyn std::error::Error>> {
    let (_home, output) = run("echo hello world\n/bin/echo  spaced   out\n")?;
    assert_eq!(stdout(&output), "hello world\nspaced out\n");
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn test_status_variable_and_pid() -> Result<(), Box<dyn std::error::Error>> {
    let (_home, output) = run("false\necho $?\necho $$\n")?;
    let out = stdout(&output);
    let mut lines = out.lines();
    assert_eq!(lines.next(), Some("1"));
    let pid = lines.next().ok_or("missing pid line")?;
    assert!(!pid.is_empty() && pid.chars().all(|c| c.is_ascii_digit()));
    Ok(())
}

#[test]
fn test_chaining() -> Result<(), Box<dyn std::error::Error>> {
    let (_home, output) = run("false && echo no || echo yes; echo done\ntrue || echo skipped\n")?;
    assert_eq!(stdout(&output), "yes\ndone\n");
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn test_not_found_diagnostic() -> Result<(), Box<dyn std::error::Error>> {
    let (_home, output) = run("\n\nnosuchcommand_hsh arg\n")?;
    assert_eq!(stderr(&output), "hsh: 3: nosuchcommand_hsh: not found\n");
    assert_eq!(output.status.code(), Some(127));
    Ok(())
}

#[test]
fn test_directory_is_not_executable() -> Result<(), Box<dyn std::error::Error>> {
    let (_home, output) = run("/tmp\n")?;
    assert!(stderr(&output).starts_with("hsh: 1: /tmp: "));
    assert_eq!(output.status.code(), Some(126));
    Ok(())
}

#[test]
fn test_environment_builtins_reach_children() -> Result<(), Box<dyn std::error::Error>> {
    let (_home, output) = run(
        "setenv GREETING hi\nsh -c 'echo $GREETING'\nunsetenv GREETING\nsh -c 'echo [$GREETING]'\n",
    )?;
    assert_eq!(stdout(&output), "hi\n[]\n");
    Ok(())
}

#[test]
fn test_export_and_env_listing() -> Result<(), Box<dyn std::error::Error>> {
    let (_home, output) = run("export COLOR=blue\nenv\n")?;
    assert!(stdout(&output).lines().any(|line| line == "COLOR=blue"));
    Ok(())
}

#[test]
fn test_alias() -> Result<(), Box<dyn std::error::Error>> {
    let (_home, output) = run("alias greet='echo hello'\ngreet world\nalias greet\nalias nope\n")?;
    assert_eq!(stdout(&output), "hello world\ngreet='echo hello'\n");
    assert_eq!(stderr(&output), "hsh: 4: alias: nope not found\n");
    assert_eq!(output.status.code(), Some(1));
    Ok(())
}

#[test]
fn test_cd() -> Result<(), Box<dyn std::error::Error>> {
    let (home, output) = run("cd\npwd\ncd /nonexistent_hsh_dir\n")?;
    let home = home.path().canonicalize()?;
    assert_eq!(stdout(&output).trim_end(), home.display().to_string());
    assert_eq!(
        stderr(&output),
        "hsh: 3: cd: can't cd to /nonexistent_hsh_dir: No such file or directory\n"
    );
    assert_eq!(output.status.code(), Some(2));
    Ok(())
}

#[test]
fn test_cd_updates_pwd_and_oldpwd() -> Result<(), Box<dyn std::error::Error>> {
    let (home, output) = run("cd /\ncd -\nenv\n")?;
    let home = home.path().canonicalize()?.display().to_string();
    let out = stdout(&output);
    let mut lines = out.lines();

    assert_eq!(lines.next(), Some(home.as_str()));
    let env: Vec<&str> = lines.collect();
    assert!(env.contains(&format!("PWD={}", home).as_str()));
    assert!(env.contains(&"OLDPWD=/"));
    assert_eq!(stderr(&output), "");
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn test_cd_dash_without_oldpwd() -> Result<(), Box<dyn std::error::Error>> {
    let (_home, output) = run("cd -\n")?;
    assert_eq!(stderr(&output), "hsh: 1: cd: OLDPWD not set\n");
    assert_eq!(output.status.code(), Some(1));
    Ok(())
}

#[test]
fn test_non_utf8_environment() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempfile::tempdir()?;
    let latin = OsStr::from_bytes(b"caf\xe9");
    let output = hsh_with(home.path(), &[], b"echo ok\n", &[("LATIN", latin)])?;
    assert_eq!(stdout(&output), "ok\n");
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn test_non_utf8_input_line() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempfile::tempdir()?;
    let output = hsh_with(home.path(), &[], b"echo caf\xe9\necho after\n", &[])?;
    assert_eq!(stdout(&output), "caf\u{fffd}\nafter\n");
    assert_eq!(stderr(&output), "");
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn test_non_utf8_history_file_is_still_saved() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempfile::tempdir()?;
    let history = home.path().join(".simple_shell_history");
    std::fs::write(&history, b"echo caf\xe9\n")?;

    hsh(home.path(), &[], "echo next\n")?;
    let saved = std::fs::read_to_string(&history)?;
    assert_eq!(saved, "echo caf\u{fffd}\necho next\n");
    Ok(())
}

#[test]
fn test_exit() -> Result<(), Box<dyn std::error::Error>> {
    let (_home, output) = run("exit 42\necho after\n")?;
    assert_eq!(stdout(&output), "");
    assert_eq!(output.status.code(), Some(42));

    let (_home, output) = run("sh -c 'exit 7'\nexit\n")?;
    assert_eq!(output.status.code(), Some(7));
    Ok(())
}

#[test]
fn test_exit_illegal_number() -> Result<(), Box<dyn std::error::Error>> {
    let (_home, output) = run("exit abc\necho still here\n")?;
    assert_eq!(stdout(&output), "still here\n");
    assert_eq!(stderr(&output), "hsh: 1: exit: Illegal number: abc\n");
    Ok(())
}

#[test]
fn test_signal_status() -> Result<(), Box<dyn std::error::Error>> {
    let (_home, output) = run("sh -c 'kill -TERM $$'\necho $?\n")?;
    assert_eq!(stdout(&output), "143\n");
    Ok(())
}

#[test]
fn test_comments() -> Result<(), Box<dyn std::error::Error>> {
    let (_home, output) = run("# nothing\necho visible # hidden\n")?;
    assert_eq!(stdout(&output), "visible\n");
    Ok(())
}

#[test]
fn test_history_persists() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempfile::tempdir()?;
    hsh(home.path(), &[], "echo one\n\necho two # note\n")?;

    let saved = std::fs::read_to_string(home.path().join(".simple_shell_history"))?;
    assert_eq!(saved, "echo one\necho two\n");

    let output = hsh(home.path(), &[], "history\n")?;
    assert_eq!(stdout(&output), "    1  echo one\n    2  echo two\n");
    Ok(())
}

#[test]
fn test_script_file() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempfile::tempdir()?;
    let script = home.path().join("script.hsh");
    std::fs::write(&script, "echo from script\nexit 3\necho unreachable\n")?;

    let script = script.to_string_lossy().into_owned();
    let output = hsh(home.path(), &[&script], "echo from stdin\n")?;
    assert_eq!(stdout(&output), "from script\n");
    assert_eq!(output.status.code(), Some(3));
    Ok(())
}

#[test]
fn test_missing_script() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempfile::tempdir()?;
    let output = hsh(home.path(), &["/nonexistent/script.hsh"], "")?;
    assert_eq!(stderr(&output), "hsh: 0: Can't open /nonexistent/script.hsh\n");
    assert_eq!(output.status.code(), Some(127));
    Ok(())
}

#[test]
fn test_explicit_config_file() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempfile::tempdir()?;
    let rc = home.path().join("rc");
    std::fs::write(&rc, "# startup\nalias hi='echo hi from rc'\n")?;

    let rc = rc.to_string_lossy().into_owned();
    let output = hsh(home.path(), &["--config", &rc], "hi\nnosuch\n")?;
    assert_eq!(stdout(&output), "hi from rc\n");
    assert_eq!(stderr(&output), "hsh: 2: nosuch: not found\n");
    Ok(())
}
