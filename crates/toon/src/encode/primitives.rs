//! Quoting and key rules, plus header rendering.

use crate::error::{Error, Result};
use crate::options::Delimiter;
use crate::value::Value;

/// Delimiter information for quoting decisions.
#[derive(Debug, Clone, Copy)]
pub struct QuoteContext {
    pub active: Delimiter,
    pub document: Delimiter,
    pub in_array: bool,
}

/// Apply the quoting rules to a string scalar.
pub fn format_string(s: &str, ctx: QuoteContext) -> Result<String> {
    validate_characters(s)?;
    if needs_quoting(s, ctx) {
        quote_string(s)
    } else {
        Ok(s.to_string())
    }
}

/// Whether the string must be quoted in the supplied context.
pub fn needs_quoting(s: &str, ctx: QuoteContext) -> bool {
    if s.is_empty() {
        return true;
    }
    if s.trim() != s {
        return true;
    }
    if matches!(s, "true" | "false" | "null") {
        return true;
    }
    if looks_numeric(s) || has_leading_zero_decimal(s) {
        return true;
    }
    if s.contains([':', '\\', '"', '[', ']', '{', '}']) {
        return true;
    }
    if s.contains(['\n', '\r', '\t']) {
        return true;
    }
    if s.starts_with('-') {
        return true;
    }
    let scope = if ctx.in_array { ctx.active } else { ctx.document };
    s.contains(scope.as_char())
}

/// Escape and wrap in double quotes.
pub fn quote_string(s: &str) -> Result<String> {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => return Err(Error::InvalidChar(c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    Ok(out)
}

/// Reject control characters other than HTAB, LF, CR.
pub fn validate_characters(s: &str) -> Result<()> {
    for ch in s.chars() {
        if (ch as u32) < 0x20 && !matches!(ch, '\n' | '\r' | '\t') {
            return Err(Error::InvalidChar(ch as u32));
        }
    }
    Ok(())
}

/// Whether the string matches the numeric-literal grammar: optional `-`,
/// digits, optional fraction, optional exponent.
pub fn looks_numeric(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    if bytes.first() == Some(&b'-') {
        i += 1;
    }
    let start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == start {
        return false;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        if i == bytes.len() || !bytes[i].is_ascii_digit() {
            return false;
        }
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        if i == bytes.len() || !bytes[i].is_ascii_digit() {
            return false;
        }
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }
    i == bytes.len()
}

/// `0` followed by another digit, e.g. `007`.
pub fn has_leading_zero_decimal(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() >= 2 && bytes[0] == b'0' && bytes[1].is_ascii_digit()
}

/// Whether the key satisfies the unquoted identifier pattern
/// `(letter|_)(letter|digit|_|.)*`.
pub fn is_valid_unquoted_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphabetic() || c.is_numeric() || c == '_' || c == '.')
}

/// Apply key quoting rules.
pub fn encode_key(key: &str) -> Result<String> {
    if is_valid_unquoted_key(key) {
        Ok(key.to_string())
    } else {
        quote_string(key)
    }
}

/// Render a primitive to its token form.
pub fn format_primitive(value: &Value, ctx: QuoteContext) -> Result<String> {
    match value {
        Value::Null => Ok(String::from("null")),
        Value::Bool(true) => Ok(String::from("true")),
        Value::Bool(false) => Ok(String::from("false")),
        Value::Number(n) => Ok(n.as_str().to_string()),
        Value::String(s) => format_string(s, ctx),
        other => Err(Error::UnsupportedValue(format!(
            "non-primitive {other:?} where a primitive is required"
        ))),
    }
}

/// Render an array header:
/// `key_literal [ # len delim ] { fields }:` with comma always omitted from
/// the bracket and the marker optional.
pub fn render_header(
    key_literal: &str,
    length: usize,
    delimiter: Delimiter,
    marker: bool,
    fields: Option<&[String]>,
) -> Result<String> {
    let mut out = String::new();
    out.push_str(key_literal);
    out.push('[');
    if marker {
        out.push('#');
    }
    out.push_str(&length.to_string());
    if let Some(symbol) = delimiter.bracket_symbol() {
        out.push(symbol);
    }
    out.push(']');
    if let Some(fields) = fields {
        out.push('{');
        for (idx, field) in fields.iter().enumerate() {
            if idx > 0 {
                out.push(delimiter.as_char());
            }
            out.push_str(&encode_key(field)?);
        }
        out.push('}');
    }
    out.push(':');
    Ok(out)
}
