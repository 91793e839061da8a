use crate::error::ShellError;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: BTreeMap<String, Flag>,
    /// First non-option argument: a script to read commands from.
    script: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    /// Whether the flag consumes the next argument.
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = BTreeMap::new();
        let mut add = |name: &str, short: &str, long: &str, description: &str, takes_value| {
            flags.insert(
                name.to_string(),
                Flag {
                    short: short.to_string(),
                    long: long.to_string(),
                    description: description.to_string(),
                    takes_value,
                    value: None,
                },
            );
        };

        add("help", "-h", "--help", "Print this help message", false);
        add("version", "-v", "--version", "Show version information", false);
        add("config", "-c", "--config", "Run FILE instead of ~/.hshrc at startup", true);
        add("debug", "-d", "--debug", "Log debug output to stderr", false);

        Flags {
            flags,
            script: None,
        }
    }

    /// Parses options up to the first operand, which names the script.
    /// Anything after the script is left alone.
    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            if !arg.starts_with('-') || arg == "-" {
                self.script = Some(arg.clone());
                break;
            }

            let flag = self
                .flags
                .values_mut()
                .find(|flag| arg == &flag.short || arg == &flag.long)
                .ok_or_else(|| ShellError::FlagError(format!("unknown option: {}", arg)))?;

            flag.value = if flag.takes_value {
                let value = iter.next().ok_or_else(|| {
                    ShellError::FlagError(format!("Flag {} requires a value", arg))
                })?;
                Some(value.clone())
            } else {
                Some("true".to_string())
            };
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags.get(name).and_then(|f| f.value.as_ref())
    }

    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    pub fn print_help(&self) {
        println!("Usage: hsh [OPTIONS] [SCRIPT]");
        println!("\nOptions:");
        for flag in self.flags.values() {
            let long = if flag.takes_value {
                format!("{} FILE", flag.long)
            } else {
                flag.long.clone()
            };
            println!("  {}, {:<15} {}", flag.short, long, flag.description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_arguments() -> Result<(), ShellError> {
        let mut flags = Flags::new();
        flags.parse(&[])?;
        assert!(!flags.is_set("help"));
        assert_eq!(flags.script(), None);
        Ok(())
    }

    #[test]
    fn test_short_and_long() -> Result<(), ShellError> {
        let mut flags = Flags::new();
        flags.parse(&args(&["-d", "--config", "/tmp/rc"]))?;
        assert!(flags.is_set("debug"));
        assert_eq!(flags.get_value("config").map(String::as_str), Some("/tmp/rc"));
        Ok(())
    }

    #[test]
    fn test_script_stops_option_parsing() -> Result<(), ShellError> {
        let mut flags = Flags::new();
        flags.parse(&args(&["run.sh", "-h"]))?;
        assert_eq!(flags.script(), Some("run.sh"));
        assert!(!flags.is_set("help"));
        Ok(())
    }

    #[test]
    fn test_errors() {
        let mut flags = Flags::new();
        assert!(matches!(
            flags.parse(&args(&["-c"])),
            Err(ShellError::FlagError(_))
        ));
        assert!(matches!(
            flags.parse(&args(&["--bogus"])),
            Err(ShellError::FlagError(_))
        ));
    }
}
