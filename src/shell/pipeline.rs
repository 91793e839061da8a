use std::io::Write;
use std::path::Path;

use super::chain::{split_chain, strip_comment};
use super::dispatch::Dispatch;
use super::expand::{expand_alias, expand_vars};
use super::tokenizer::tokenize;
use crate::core::commands::{Command, Flow};
use crate::core::ShellContext;
use crate::process::{InterruptFlag, ProcessExecutor};

/// Runs input lines against a context: chain splitting, gating,
/// substitution, tokenizing, dispatch and execution.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    executor: ProcessExecutor,
    interrupt: Option<InterruptFlag>,
}

impl Pipeline {
    pub fn new(executor: ProcessExecutor) -> Self {
        Self {
            executor,
            interrupt: None,
        }
    }

    /// Clears `interrupt` after every child so a Ctrl-C aimed at the child
    /// is not taken for one at the prompt.
    pub fn with_interrupt(mut self, interrupt: InterruptFlag) -> Self {
        self.interrupt = Some(interrupt);
        self
    }

    /// Processes one input line. Stops early once `exit` has run.
    pub fn run_line(&self, ctx: &mut ShellContext, line: &str) {
        ctx.line = strip_comment(line).to_string();
        if ctx.line.trim().is_empty() {
            return;
        }

        let segments = split_chain(&ctx.line);
        tracing::trace!(?segments, "split line");

        for segment in &segments {
            if !segment.chain.should_run(ctx.last_status) {
                tracing::debug!(
                    segment = %segment.text.trim(),
                    chain = ?segment.chain,
                    status = ctx.last_status,
                    "skipped"
                );
                continue;
            }

            self.run_segment(ctx, &segment.text);
            if ctx.exit_request.is_some() {
                break;
            }
        }
    }

    fn run_segment(&self, ctx: &mut ShellContext, text: &str) {
        let aliased = expand_alias(text, &ctx.aliases);
        let expanded = expand_vars(&aliased, &ctx.env, ctx.special_vars());
        ctx.argv = tokenize(&expanded);
        if ctx.argv.is_empty() {
            return;
        }

        let dispatch = Dispatch::resolve(ctx);
        let argv = ctx.argv.clone();
        let name = &argv[0];

        let status = match dispatch {
            Dispatch::Builtin(builtin) => match builtin.execute(ctx, &argv[1..]) {
                Ok(Flow::Continue(status)) => status,
                Ok(Flow::Exit(code)) => {
                    ctx.exit_request = Some(code);
                    code
                }
                Err(err) => {
                    ctx.report(name, &err);
                    err.status()
                }
            },
            Dispatch::External(path) => self.launch(ctx, &path, &argv),
            Dispatch::Denied(_, denial) => {
                ctx.report(name, denial);
                126
            }
            Dispatch::NotFound => {
                ctx.report(name, "not found");
                127
            }
        };

        ctx.last_status = status;
    }

    fn launch(&self, ctx: &mut ShellContext, path: &Path, argv: &[String]) -> i32 {
        let result = self.executor.run(path, argv, ctx.env.pairs());

        if let Some(interrupt) = &self.interrupt {
            if interrupt.take() && ctx.interactive {
                end_interrupted_line(std::io::stdout());
            }
        }

        match result {
            Ok(status) => status,
            Err(err) => {
                let status = err.status();
                ctx.report(&argv[0], err);
                status
            }
        }
    }
}

/// Moves past the `^C` the terminal echoed while a child was running.
fn end_interrupted_line(mut out: impl Write) {
    if let Err(e) = writeln!(out).and_then(|()| out.flush()) {
        tracing::warn!("couldn't write to stdout: {}", e);
    }
}
