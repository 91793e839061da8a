use std::io::Write;
use std::os::unix::process::{CommandExt, ExitStatusExt};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use super::ProcessError;

/// Maps a child's exit status to the shell's `$?`: the exit code when it
/// exited, `128 + N` when killed by signal N.
pub fn status_code(status: ExitStatus) -> i32 {
    match (status.code(), status.signal()) {
        (Some(code), _) => code,
        (None, Some(signal)) => 128 + signal,
        (None, None) => 1,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Runs `program` with `args` (argument 0 included, kept as typed) and
    /// exactly the given environment, blocking until it terminates.
    pub fn run<'a>(
        &self,
        program: &Path,
        args: &[String],
        environ: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<i32, ProcessError> {
        let mut command = Command::new(program);
        if let Some(arg0) = args.first() {
            command.arg0(arg0);
        }
        command
            .args(args.iter().skip(1))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .env_clear()
            .envs(environ);

        // the child must not inherit output still sitting in our buffer
        std::io::stdout().flush().map_err(ProcessError::Wait)?;

        let mut child = command.spawn().map_err(ProcessError::Spawn)?;
        tracing::debug!(pid = child.id(), program = %program.display(), "spawned child");

        let status = child.wait().map_err(ProcessError::Wait)?;
        let code = status_code(status);
        tracing::debug!(status = code, "child exited");
        Ok(code)
    }
}
