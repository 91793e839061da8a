use std::fs::File;
use std::io::{BufReader, IsTerminal, Write};

pub mod chain;
pub mod dispatch;
pub mod expand;
pub mod pipeline;
pub mod tokenizer;

use crate::{
    core::{
        config::Config,
        env::{EnvStore, ShellPaths},
        ShellContext,
    },
    error::ShellError,
    flags::Flags,
    input::{
        history::{History, HISTORY_MAX},
        BufferedInput, EditorInput, InterruptibleReader, Line, LineSource,
    },
    process::{InterruptFlag, ProcessExecutor},
};

use chain::strip_comment;
use pipeline::Pipeline;

const PROMPT: &str = "$ ";

pub struct Shell {
    ctx: ShellContext,
    input: Box<dyn LineSource>,
    pipeline: Pipeline,
    config: Option<Config>,
}

impl Shell {
    /// Sets up the context and picks the input: the script named on the
    /// command line, the line editor when stdin is a terminal, or plain
    /// stdin otherwise.
    pub fn new(flags: &Flags, program_name: impl Into<String>) -> Result<Self, ShellError> {
        let env = EnvStore::new();
        let paths = match ShellPaths::new(&env) {
            Ok(paths) => Some(paths),
            Err(e) => {
                tracing::warn!("{}; history will not be saved", e);
                None
            }
        };
        let history = match &paths {
            Some(paths) => History::new(paths.history_file(), HISTORY_MAX).unwrap_or_else(|e| {
                tracing::warn!("{}; keeping history in memory", e);
                History::in_memory(HISTORY_MAX)
            }),
            None => History::in_memory(HISTORY_MAX),
        };

        let script = match flags.script() {
            Some(path) => Some(File::open(path).map_err(|source| ShellError::ScriptOpen {
                path: path.to_string(),
                source,
            })?),
            None => None,
        };
        let interactive = script.is_none() && std::io::stdin().is_terminal();
        let ctx = ShellContext::new(program_name, interactive, env, history);

        let mut pipeline = Pipeline::new(ProcessExecutor::new());
        let input: Box<dyn LineSource> = match script {
            Some(file) => Box::new(BufferedInput::new(BufReader::new(file))),
            None if interactive => {
                let interrupt = InterruptFlag::new();
                interrupt.install()?;
                pipeline = pipeline.with_interrupt(interrupt.clone());
                match EditorInput::new(&ctx) {
                    Ok(editor) => Box::new(editor),
                    Err(e) => {
                        tracing::warn!("line editor unavailable: {}", e);
                        let stdin = InterruptibleReader::stdin(interrupt.clone());
                        Box::new(BufferedInput::interactive(BufReader::new(stdin), interrupt))
                    }
                }
            }
            None => Box::new(BufferedInput::new(std::io::stdin().lock())),
        };

        let config = match flags.get_value("config") {
            Some(path) => Some(Config::explicit(path.into())),
            None if interactive => paths.map(|paths| Config::new(paths.rc_file())),
            None => None,
        };
        tracing::debug!(interactive, script = flags.script(), "shell ready");

        Ok(Shell {
            ctx,
            input,
            pipeline,
            config,
        })
    }

    /// Reads and runs lines until end of input or `exit`, then saves the
    /// history. Returns the status the process should exit with.
    pub fn run(&mut self) -> Result<i32, ShellError> {
        self.run_startup_file()?;

        let prompt = if self.ctx.interactive { PROMPT } else { "" };
        while self.ctx.exit_request.is_none() {
            self.input.sync(&self.ctx);
            match self.input.read_line(prompt) {
                Ok(Line::Text(line)) => self.handle_line(&line),
                Ok(Line::Interrupted) => continue,
                Ok(Line::Eof) => {
                    if self.ctx.interactive {
                        writeln!(std::io::stdout())?;
                    }
                    break;
                }
                Err(e) => {
                    self.save_history();
                    return Err(e.into());
                }
            }
        }

        self.save_history();
        Ok(self.ctx.exit_status())
    }

    fn handle_line(&mut self, line: &str) {
        self.ctx.line_count += 1;
        self.pipeline.run_line(&mut self.ctx, line);

        let entry = strip_comment(line).trim();
        if !entry.is_empty() {
            self.ctx.history.add(entry);
            self.input.record(entry);
        }
    }

    /// Runs the startup file. Its lines are neither counted nor recorded.
    fn run_startup_file(&mut self) -> Result<(), ShellError> {
        let Some(config) = &self.config else {
            return Ok(());
        };

        let lines = config.load()?;
        tracing::debug!(path = %config.rc_path().display(), lines = lines.len(), "running startup file");
        for line in &lines {
            self.pipeline.run_line(&mut self.ctx, line);
            if self.ctx.exit_request.is_some() {
                break;
            }
        }
        Ok(())
    }

    fn save_history(&self) {
        if self.ctx.history.path().is_none() {
            return;
        }
        if let Err(e) = self.ctx.history.save() {
            tracing::warn!("couldn't save history: {}", e);
        }
    }
}
