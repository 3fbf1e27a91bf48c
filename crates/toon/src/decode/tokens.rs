//! Inline tokenization and quoted-string unescaping.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// A quoted run was opened but never closed.
    UnterminatedString,
    /// Input ended in the middle of an escape sequence.
    UnterminatedEscape,
    /// An escape other than `\\ \" \n \r \t`.
    InvalidEscape(char),
    /// A token that starts with `"` but is not a well-formed quoted string.
    MalformedQuoted,
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::UnterminatedString => f.write_str("unterminated string"),
            TokenError::UnterminatedEscape => f.write_str("unterminated escape sequence"),
            TokenError::InvalidEscape(c) => write!(f, "invalid escape sequence \\{c}"),
            TokenError::MalformedQuoted => f.write_str("malformed quoted string"),
        }
    }
}

/// Remove surrounding quotes and unescape the five supported sequences.
pub fn unquote_string(token: &str) -> Result<String, TokenError> {
    if token.len() < 2 || !token.starts_with('"') || !token.ends_with('"') {
        return Err(TokenError::MalformedQuoted);
    }
    let inner = &token[1..token.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other) => return Err(TokenError::InvalidEscape(other)),
            None => return Err(TokenError::UnterminatedEscape),
        }
    }
    Ok(out)
}

/// Split a delimiter-separated segment into trimmed raw tokens. Delimiters
/// inside quoted runs do not split; quotes and escapes are preserved for the
/// primitive decoder.
pub fn split_inline_values(segment: &str, delimiter: char) -> Result<Vec<String>, TokenError> {
    if segment.trim().is_empty() {
        return Ok(Vec::new());
    }
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut escaped = false;

    for ch in segment.chars() {
        if escaped {
            current.push(ch);
            escaped = false;
        } else if ch == '\\' && in_quotes {
            current.push(ch);
            escaped = true;
        } else if ch == '"' {
            current.push(ch);
            in_quotes = !in_quotes;
        } else if ch == delimiter && !in_quotes {
            tokens.push(current.trim().to_string());
            current.clear();
        } else {
            current.push(ch);
        }
    }
    if in_quotes {
        return Err(TokenError::UnterminatedString);
    }
    tokens.push(current.trim().to_string());
    Ok(tokens)
}

/// Byte index of the first occurrence of `target` outside quoted runs.
pub fn find_outside_quotes(s: &str, target: char) -> Option<usize> {
    let mut in_quotes = false;
    let mut escaped = false;
    for (idx, ch) in s.char_indices() {
        if escaped {
            escaped = false;
        } else if ch == '\\' && in_quotes {
            escaped = true;
        } else if ch == '"' {
            in_quotes = !in_quotes;
        } else if ch == target && !in_quotes {
            return Some(idx);
        }
    }
    None
}
