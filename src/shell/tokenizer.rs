/// Splits a segment into arguments on ASCII whitespace.
///
/// Single and double quotes group their contents into one argument and are
/// removed, so `''` produces an empty argument. Runs of whitespace never
/// produce empty arguments.
pub fn tokenize(segment: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for c in segment.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '\'' || c == '"' => {
                quote = Some(c);
                in_token = true;
            }
            None if c.is_ascii_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            None => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_token {
        tokens.push(current);
    }
    tokens
}

/// Splits on any of `delims` with no quote handling, skipping empty pieces.
pub fn tokenize_with<'a>(text: &'a str, delims: &[char]) -> Vec<&'a str> {
    text.split(|c| delims.contains(&c))
        .filter(|piece| !piece.is_empty())
        .collect()
}
