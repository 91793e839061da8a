use rustyline::{error::ReadlineError, history::FileHistory, Editor};

use super::{InputError, Line, LineSource, ShellCompleter};
use crate::core::ShellContext;

/// Terminal input through the line editor. Recall is seeded from the
/// shell's own history; the editor never writes a history file.
pub struct EditorInput {
    editor: Editor<ShellCompleter, FileHistory>,
    /// `PATH` the command list was last built from; `None` until the
    /// first sync.
    synced_path: Option<Option<String>>,
}

impl EditorInput {
    pub fn new(ctx: &ShellContext) -> Result<Self, InputError> {
        let mut editor = Editor::<ShellCompleter, FileHistory>::new()?;
        editor.set_helper(Some(ShellCompleter::new()));

        let mut input = Self {
            editor,
            synced_path: None,
        };
        for line in ctx.history.lines() {
            input.record(line);
        }
        input.sync(ctx);
        Ok(input)
    }
}

impl LineSource for EditorInput {
    fn read_line(&mut self, prompt: &str) -> Result<Line, InputError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Line::Text(line)),
            Err(ReadlineError::Interrupted) => Ok(Line::Interrupted),
            Err(ReadlineError::Eof) => Ok(Line::Eof),
            Err(e) => Err(e.into()),
        }
    }

    fn record(&mut self, line: &str) {
        if let Err(e) = self.editor.add_history_entry(line) {
            tracing::warn!("couldn't add to line editor history: {}", e);
        }
    }

    fn sync(&mut self, ctx: &ShellContext) {
        let path_var = ctx.env.get("PATH");
        let Some(helper) = self.editor.helper_mut() else {
            return;
        };

        helper.update_aliases(ctx.aliases.names());
        let current = path_var.map(String::from);
        if self.synced_path.as_ref() != Some(&current) {
            helper.refresh_commands(path_var);
            self.synced_path = Some(current);
        }
    }
}
