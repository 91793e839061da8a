use inksac::prelude::*;

/// Colours the line being edited: the command word cyan when it names
/// something runnable, red when it does not, options yellow.
#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    pub fn enabled(&self) -> bool {
        !matches!(self.color_support, ColorSupport::NoColor)
    }

    /// Whitespace between words is preserved so the cursor position the
    /// editor tracks still lines up.
    pub fn highlight_command(&self, input: &str, is_known: impl Fn(&str) -> bool) -> String {
        if !self.enabled() {
            return input.to_string();
        }

        let mut out = String::with_capacity(input.len() * 2);
        let mut word = String::new();
        let mut expect_command = true;

        for c in input.chars() {
            let separator = c == ';' || c == '&' || c == '|';
            if c.is_whitespace() || separator {
                out.push_str(&self.paint_word(&word, expect_command, &is_known));
                if !word.is_empty() {
                    expect_command = false;
                }
                if separator {
                    expect_command = true;
                }
                word.clear();
                out.push(c);
            } else {
                word.push(c);
            }
        }
        out.push_str(&self.paint_word(&word, expect_command, &is_known));
        out
    }

    fn paint_word(&self, word: &str, is_command: bool, is_known: &impl Fn(&str) -> bool) -> String {
        if word.is_empty() {
            return String::new();
        }

        if is_command {
            let style = if is_known(word) {
                Style::builder().foreground(Color::Cyan).bold().build()
            } else {
                Style::builder().foreground(Color::Red).build()
            };
            word.style(style).to_string()
        } else if word.starts_with('-') {
            let flag_style = Style::builder().foreground(Color::Yellow).build();
            word.style(flag_style).to_string()
        } else {
            word.to_string()
        }
    }

    pub fn highlight_hint(&self, hint: &str) -> String {
        if !self.enabled() {
            return hint.to_string();
        }

        let hint_style = Style::builder()
            .foreground(Color::RGB(128, 128, 128))
            .build();

        hint.style(hint_style).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_passes_through() {
        let highlighter = SyntaxHighlighter::plain();
        assert_eq!(
            highlighter.highlight_command("ls  -l && echo", |_| true),
            "ls  -l && echo"
        );
        assert_eq!(highlighter.highlight_hint("hint"), "hint");
    }
}
