mod command;

use std::borrow::Cow;

use rustyline::{
    completion::{Completer, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

pub use command::CommandCompleter;

use crate::highlight::SyntaxHighlighter;

/// Line-editor helper: completes the command word and colours the line.
#[derive(Clone, Default)]
pub struct ShellCompleter {
    command_completer: CommandCompleter,
    highlighter: SyntaxHighlighter,
}

impl ShellCompleter {
    pub fn new() -> Self {
        Self {
            command_completer: CommandCompleter::new(),
            highlighter: SyntaxHighlighter::new(),
        }
    }

    pub fn refresh_commands(&mut self, path_var: Option<&str>) {
        self.command_completer.refresh_commands(path_var);
    }

    pub fn update_aliases<'a>(&mut self, names: impl Iterator<Item = &'a str>) {
        self.command_completer.update_aliases(names);
    }
}

/// Start of the word under the cursor and whether it is in command
/// position (first word of the line or of a chained segment).
fn current_word(line: &str) -> (usize, bool) {
    let start = line
        .rfind(|c: char| c.is_whitespace() || c == ';' || c == '&' || c == '|')
        .map_or(0, |i| i + 1);
    let before = line[..start].trim_end();
    let command_position = before.is_empty() || before.ends_with([';', '&', '|']);
    (start, command_position)
}

impl Helper for ShellCompleter {}

impl Highlighter for ShellCompleter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if !self.highlighter.enabled() {
            return Cow::Borrowed(line);
        }
        Cow::Owned(
            self.highlighter
                .highlight_command(line, |word| self.command_completer.is_known(word)),
        )
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        self.highlighter.enabled()
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(self.highlighter.highlight_hint(hint))
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;
}

impl Validator for ShellCompleter {}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, command_position) = current_word(&line[..pos]);
        if !command_position {
            return Ok((pos, Vec::new()));
        }
        Ok((start, self.command_completer.complete_command(&line[start..pos])))
    }
}
