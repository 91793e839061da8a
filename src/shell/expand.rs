use std::borrow::Cow;

use crate::core::{alias::AliasStore, env::EnvStore};

/// Values `$?` and `$$` expand to.
#[derive(Debug, Clone, Copy)]
pub struct SpecialVars {
    pub last_status: i32,
    pub pid: u32,
}

/// Replaces the first word of `segment` with its alias value. The value is
/// inserted as-is and not expanded again.
pub fn expand_alias<'a>(segment: &'a str, aliases: &AliasStore) -> Cow<'a, str> {
    let trimmed = segment.trim_start();
    let offset = segment.len() - trimmed.len();
    let word_len = trimmed
        .find(|c: char| c.is_ascii_whitespace())
        .unwrap_or(trimmed.len());
    let word = &trimmed[..word_len];

    if word.is_empty() {
        return Cow::Borrowed(segment);
    }

    match aliases.get(word) {
        Some(value) => {
            tracing::trace!(alias = word, value, "expanding alias");
            let mut expanded = String::with_capacity(segment.len() + value.len());
            expanded.push_str(&segment[..offset]);
            expanded.push_str(value);
            expanded.push_str(&trimmed[word_len..]);
            Cow::Owned(expanded)
        }
        None => Cow::Borrowed(segment),
    }
}

/// Expands `$?`, `$$` and `$NAME` outside single quotes. Unset names expand
/// to nothing; a `$` not followed by one of those forms is kept.
pub fn expand_vars<'a>(segment: &'a str, env: &EnvStore, special: SpecialVars) -> Cow<'a, str> {
    if !segment.contains('$') {
        return Cow::Borrowed(segment);
    }

    let mut result = String::with_capacity(segment.len());
    let mut in_single = false;
    let mut in_double = false;
    let mut rest = segment;

    while let Some(c) = rest.chars().next() {
        rest = &rest[c.len_utf8()..];
        match c {
            '\'' if !in_double => {
                in_single = !in_single;
                result.push(c);
            }
            '"' if !in_single => {
                in_double = !in_double;
                result.push(c);
            }
            '$' if !in_single => {
                let consumed = expand_one(rest, env, special, &mut result);
                rest = &rest[consumed..];
            }
            _ => result.push(c),
        }
    }

    Cow::Owned(result)
}

/// Expands the reference that follows a `$`, pushing the value onto `out`.
/// Returns how many bytes of `after` were consumed.
fn expand_one(after: &str, env: &EnvStore, special: SpecialVars, out: &mut String) -> usize {
    match after.chars().next() {
        Some('?') => {
            out.push_str(&special.last_status.to_string());
            1
        }
        Some('$') => {
            out.push_str(&special.pid.to_string());
            1
        }
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            let len = after
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(after.len());
            let name = &after[..len];
            out.push_str(env.get(name).unwrap_or_default());
            len
        }
        _ => {
            out.push('$');
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn special(last_status: i32) -> SpecialVars {
        SpecialVars {
            last_status,
            pid: 4242,
        }
    }

    fn env() -> EnvStore {
        EnvStore::from_vars([("HOME", "/home/test"), ("EMPTY", ""), ("_X1", "x")])
    }

    #[test]
    fn test_expand_alias_first_word_only() -> Result<(), Box<dyn std::error::Error>> {
        let mut aliases = AliasStore::new();
        aliases.set("ll", "ls -l")?;

        assert_eq!(expand_alias("ll /tmp", &aliases), "ls -l /tmp");
        assert_eq!(expand_alias("  ll", &aliases), "  ls -l");
        assert_eq!(expand_alias("echo ll", &aliases), "echo ll");
        Ok(())
    }

    #[test]
    fn test_expand_alias_is_single_pass() -> Result<(), Box<dyn std::error::Error>> {
        let mut aliases = AliasStore::new();
        aliases.set("a", "b x")?;
        aliases.set("b", "c y")?;
        assert_eq!(expand_alias("a", &aliases), "b x");

        aliases.set("ls", "ls -F")?;
        assert_eq!(expand_alias("ls", &aliases), "ls -F");
        Ok(())
    }

    #[test]
    fn test_no_expansion_needed() {
        let aliases = AliasStore::new();
        assert!(matches!(expand_alias("ls -l", &aliases), Cow::Borrowed(_)));
        assert!(matches!(expand_vars("ls -l", &env(), special(0)), Cow::Borrowed(_)));
    }

    #[test]
    fn test_special_vars() {
        assert_eq!(expand_vars("echo $?", &env(), special(2)), "echo 2");
        assert_eq!(expand_vars("echo $$", &env(), special(0)), "echo 4242");
        assert_eq!(expand_vars("$?$$", &env(), special(1)), "14242");
    }

    #[test]
    fn test_named_vars() {
        let env = env();
        assert_eq!(expand_vars("cd $HOME/bin", &env, special(0)), "cd /home/test/bin");
        assert_eq!(expand_vars("echo [$UNSET_VAR]", &env, special(0)), "echo []");
        assert_eq!(expand_vars("echo [$EMPTY]", &env, special(0)), "echo []");
        assert_eq!(expand_vars("echo $_X1.", &env, special(0)), "echo x.");
    }

    #[test]
    fn test_literal_dollar() {
        let env = env();
        assert_eq!(expand_vars("echo $", &env, special(0)), "echo $");
        assert_eq!(expand_vars("echo $ 5", &env, special(0)), "echo $ 5");
        assert_eq!(expand_vars("echo $1", &env, special(0)), "echo $1");
    }

    #[test]
    fn test_single_quotes_suppress_expansion() {
        let env = env();
        assert_eq!(expand_vars("echo '$HOME'", &env, special(0)), "echo '$HOME'");
        assert_eq!(expand_vars("echo \"$HOME\"", &env, special(0)), "echo \"/home/test\"");
        assert_eq!(expand_vars("echo \"'$HOME'\"", &env, special(0)), "echo \"'/home/test'\"");
    }

    #[test]
    fn test_values_are_not_rescanned() -> Result<(), Box<dyn std::error::Error>> {
        let mut env = env();
        env.set("NESTED", "$HOME")?;
        assert_eq!(expand_vars("echo $NESTED", &env, special(0)), "echo $HOME");
        Ok(())
    }
}
