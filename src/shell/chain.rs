/// How a segment is gated by the status of the segment before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainType {
    /// First segment on the line.
    Normal,
    /// `||`
    Or,
    /// `&&`
    And,
    /// `;`
    Sequence,
}

impl ChainType {
    /// Whether a segment of this type runs after a command that exited
    /// with `previous_status`.
    pub fn should_run(self, previous_status: i32) -> bool {
        match self {
            ChainType::Normal | ChainType::Sequence => true,
            ChainType::And => previous_status == 0,
            ChainType::Or => previous_status != 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub chain: ChainType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quote {
    None,
    Single,
    Double,
}

/// Splits `line` at unquoted, unescaped `;`, `&&` and `||`.
///
/// Quotes are kept in the segment text for the tokenizer; a backslash in
/// front of an operator character is dropped and the character kept. A
/// lone `&` or `|` is plain text.
pub fn split_chain(line: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chain = ChainType::Normal;
    let mut quote = Quote::None;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Quote::Single, '\'') | (Quote::Double, '"') => {
                quote = Quote::None;
                current.push(c);
            }
            (Quote::Single, _) | (Quote::Double, _) => current.push(c),
            (Quote::None, '\'') => {
                quote = Quote::Single;
                current.push(c);
            }
            (Quote::None, '"') => {
                quote = Quote::Double;
                current.push(c);
            }
            (Quote::None, '\\') => match chars.peek() {
                Some(&next @ (';' | '&' | '|')) => {
                    current.push(next);
                    chars.next();
                }
                _ => current.push(c),
            },
            (Quote::None, '&') if chars.peek() == Some(&'&') => {
                chars.next();
                segments.push(Segment {
                    text: std::mem::take(&mut current),
                    chain,
                });
                chain = ChainType::And;
            }
            (Quote::None, '|') if chars.peek() == Some(&'|') => {
                chars.next();
                segments.push(Segment {
                    text: std::mem::take(&mut current),
                    chain,
                });
                chain = ChainType::Or;
            }
            (Quote::None, ';') => {
                segments.push(Segment {
                    text: std::mem::take(&mut current),
                    chain,
                });
                chain = ChainType::Sequence;
            }
            (Quote::None, _) => current.push(c),
        }
    }

    segments.push(Segment {
        text: current,
        chain,
    });
    segments
}

/// Cuts the line at a `#` that starts a word, outside quotes.
pub fn strip_comment(line: &str) -> &str {
    let mut quote = Quote::None;
    let mut previous: Option<char> = None;

    for (pos, c) in line.char_indices() {
        match (quote, c) {
            (Quote::None, '\'') => quote = Quote::Single,
            (Quote::None, '"') => quote = Quote::Double,
            (Quote::Single, '\'') | (Quote::Double, '"') => quote = Quote::None,
            (Quote::None, '#') if previous.map_or(true, char::is_whitespace) => {
                return &line[..pos];
            }
            _ => {}
        }
        previous = Some(c);
    }
    line
}
