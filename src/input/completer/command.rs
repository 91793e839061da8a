use std::{collections::BTreeSet, fs};

use rustyline::completion::Pair;

use crate::core::commands::BUILTINS;
use crate::shell::tokenizer::tokenize_with;

/// Names that can start a command: builtins, aliases and everything on
/// `PATH` at the time of the last refresh.
#[derive(Clone, Default)]
pub struct CommandCompleter {
    commands: BTreeSet<String>,
    aliases: BTreeSet<String>,
}

impl CommandCompleter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refresh_commands(&mut self, path_var: Option<&str>) {
        self.commands.clear();
        self.commands
            .extend(BUILTINS.iter().map(|(name, _)| name.to_string()));

        let Some(path_var) = path_var else {
            return;
        };
        for dir in tokenize_with(path_var, &[':']) {
            let Ok(entries) = fs::read_dir(dir) else {
                continue;
            };
            for entry in entries.filter_map(Result::ok) {
                let is_file = entry
                    .file_type()
                    .map(|t| t.is_file() || t.is_symlink())
                    .unwrap_or(false);
                if let (true, Some(name)) = (is_file, entry.file_name().to_str()) {
                    self.commands.insert(name.to_string());
                }
            }
        }
    }

    pub fn update_aliases<'a>(&mut self, names: impl Iterator<Item = &'a str>) {
        self.aliases = names.map(String::from).collect();
    }

    pub fn is_known(&self, word: &str) -> bool {
        word.contains('/') || self.commands.contains(word) || self.aliases.contains(word)
    }

    pub fn complete_command(&self, input: &str) -> Vec<Pair> {
        let commands = self
            .commands
            .range(input.to_string()..)
            .take_while(|cmd| cmd.starts_with(input))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            });
        let aliases = self
            .aliases
            .iter()
            .filter(|alias| alias.starts_with(input))
            .map(|alias| Pair {
                display: format!("{} (alias)", alias),
                replacement: alias.clone(),
            });

        commands.chain(aliases).collect()
    }
}
