//! Builds data-model values from preprocessed lines.

use crate::decode::scanner::{self, Line};
use crate::decode::tokens::{self, TokenError};
use crate::encode::primitives::{is_valid_unquoted_key, looks_numeric};
use crate::error::{Error, Result};
use crate::number::{has_forbidden_leading_zeros, Number};
use crate::options::{DecodeOptions, Delimiter};
use crate::value::{Object, Value};

/// Parse a whole document into a model value.
pub fn decode_str(input: &str, options: &DecodeOptions) -> Result<Value> {
    let lines = scanner::scan(input, options)?;
    let mut parser = Parser {
        lines,
        pos: 0,
        cfg: options,
    };
    parser.parse_document()
}

/// Parsed form of an array header line:
/// `key [ # length delim ] { fields }: inline`
#[derive(Debug)]
struct Header<'a> {
    key: String,
    length: usize,
    delimiter: Delimiter,
    fields: Vec<String>,
    inline: &'a str,
}

struct Parser<'a, 'o> {
    lines: Vec<Line<'a>>,
    pos: usize,
    cfg: &'o DecodeOptions,
}

impl<'a, 'o> Parser<'a, 'o> {
    fn parse_document(&mut self) -> Result<Value> {
        self.skip_blanks();
        if self.pos >= self.lines.len() {
            // The empty document is the empty object.
            return Ok(Value::Object(Object::default()));
        }

        let remaining = self.lines[self.pos..].iter().filter(|l| !l.blank).count();
        let first = self.lines[self.pos];
        let header = self.try_parse_header(first.content, first.number)?;

        if remaining == 1 && header.is_none() && !is_key_value(first.content) {
            let token = first.content.trim();
            let value = self.decode_primitive_token(token, first.number)?;
            self.pos += 1;
            return Ok(value);
        }

        if let Some(header) = header {
            if first.indent == 0 && header.key.is_empty() {
                self.pos += 1;
                return self.parse_array(&header, 0);
            }
        }

        Ok(Value::Object(self.parse_object(0)?))
    }

    fn parse_object(&mut self, depth: usize) -> Result<Object> {
        let mut obj = Object::default();
        while self.pos < self.lines.len() {
            let line = self.lines[self.pos];
            if line.blank {
                self.pos += 1;
                continue;
            }
            if line.indent < depth {
                break;
            }
            if line.indent > depth {
                return Err(Error::IndentUnexpected { line: line.number });
            }

            if let Some(header) = self.try_parse_header(line.content, line.number)? {
                if header.key.is_empty() {
                    return Err(Error::InvalidHeader {
                        line: line.number,
                        reason: String::from("arrays within objects must have a key"),
                    });
                }
                self.pos += 1;
                let value = self.parse_array(&header, depth)?;
                obj.push(header.key, value);
                continue;
            }

            let (key, rest) = self.split_key_value(line.content, line.number)?;
            self.pos += 1;
            if rest.is_empty() {
                let nested = self.parse_object(depth + 1)?;
                obj.push(key, Value::Object(nested));
            } else {
                let value = self.decode_primitive_token(rest, line.number)?;
                obj.push(key, value);
            }
        }
        Ok(obj)
    }

    fn parse_array(&mut self, header: &Header<'a>, depth: usize) -> Result<Value> {
        let header_line = self.lines[self.pos - 1].number;
        let delimiter = header.delimiter.as_char();

        // Case 1: inline values on the header line.
        if !header.inline.is_empty() {
            let raw = tokens::split_inline_values(header.inline, delimiter)
                .map_err(|e| quoted_error(header_line, e))?;
            let mut values = Vec::with_capacity(raw.len());
            for token in &raw {
                values.push(self.decode_primitive_token(token, header_line)?);
            }
            if self.cfg.strict && values.len() != header.length {
                return Err(Error::LengthMismatch {
                    line: header_line,
                    expected: header.length,
                    actual: values.len(),
                });
            }
            return Ok(Value::Array(values));
        }

        // Case 2: tabular rows under a field list.
        if !header.fields.is_empty() {
            return self.parse_tabular_rows(header, depth, delimiter);
        }

        // Case 3: list items, one per `-` line.
        self.parse_list_items(header, depth)
    }

    fn parse_tabular_rows(
        &mut self,
        header: &Header<'a>,
        depth: usize,
        delimiter: char,
    ) -> Result<Value> {
        let mut rows: Vec<Value> = Vec::with_capacity(header.length);
        while self.pos < self.lines.len() {
            let line = self.lines[self.pos];
            if line.blank {
                if self.cfg.strict {
                    // A blank only terminates the array when the next
                    // non-blank line leaves it.
                    match self.next_non_blank_indent() {
                        Some(indent) if indent > depth => {
                            return Err(Error::BlankInsideArray { line: line.number });
                        }
                        _ => break,
                    }
                }
                self.pos += 1;
                continue;
            }
            if line.indent <= depth {
                break;
            }
            if line.indent != depth + 1 {
                return Err(Error::IndentUnexpected { line: line.number });
            }
            let trimmed = line.content.trim();
            // A key-value line at row indent belongs to the enclosing object.
            if tokens::find_outside_quotes(trimmed, ':').is_some() {
                break;
            }
            self.pos += 1;

            let raw = tokens::split_inline_values(trimmed, delimiter)
                .map_err(|e| quoted_error(line.number, e))?;
            if self.cfg.strict && raw.len() != header.fields.len() {
                return Err(Error::RowWidthMismatch {
                    line: line.number,
                    expected: header.fields.len(),
                    actual: raw.len(),
                });
            }
            let mut row = Object::default();
            for (idx, field) in header.fields.iter().enumerate() {
                if idx >= raw.len() {
                    break;
                }
                let value = self.decode_primitive_token(&raw[idx], line.number)?;
                row.push(field.clone(), value);
            }
            rows.push(Value::Object(row));
            if self.cfg.strict && rows.len() > header.length {
                return Err(Error::LengthMismatch {
                    line: line.number,
                    expected: header.length,
                    actual: rows.len(),
                });
            }
        }
        if self.cfg.strict && rows.len() != header.length {
            return Err(Error::LengthMismatch {
                line: self.lines[self.pos - 1].number,
                expected: header.length,
                actual: rows.len(),
            });
        }
        Ok(Value::Array(rows))
    }

    fn parse_list_items(&mut self, header: &Header<'a>, depth: usize) -> Result<Value> {
        let mut values: Vec<Value> = Vec::with_capacity(header.length);
        while self.pos < self.lines.len() {
            let line = self.lines[self.pos];
            if line.blank {
                if self.cfg.strict {
                    match self.next_non_blank_indent() {
                        Some(indent) if indent > depth => {
                            return Err(Error::BlankInsideArray { line: line.number });
                        }
                        _ => break,
                    }
                }
                self.pos += 1;
                continue;
            }
            if line.indent <= depth {
                break;
            }
            if line.indent != depth + 1 {
                return Err(Error::IndentUnexpected { line: line.number });
            }
            if !line.content.starts_with('-') {
                break;
            }
            let item = line.content[1..].trim();
            self.pos += 1;

            // Object elements: the fields live on sibling lines.
            if item.is_empty() || item == "{}" {
                let mut obj = Object::default();
                self.collect_object_list_siblings(&mut obj, depth)?;
                values.push(Value::Object(obj));
                continue;
            }

            // A bare inner array.
            if item.starts_with('[') {
                let inner = self
                    .try_parse_header(item, line.number)?
                    .ok_or_else(|| Error::InvalidHeader {
                        line: line.number,
                        reason: String::from("invalid array header in list item"),
                    })?;
                values.push(self.parse_array(&inner, depth + 1)?);
                continue;
            }

            // A keyed array as the element's first field.
            if let Some(inner) = self.try_parse_header(item, line.number)? {
                if inner.key.is_empty() {
                    return Err(Error::InvalidHeader {
                        line: line.number,
                        reason: String::from("arrays within objects must have a key"),
                    });
                }
                let array = self.parse_array(&inner, depth + 1)?;
                let mut obj = Object::default();
                obj.push(inner.key.clone(), array);
                self.collect_object_list_siblings(&mut obj, depth)?;
                values.push(Value::Object(obj));
                continue;
            }

            // A key-value pair as the element's first field.
            if is_key_value(item) {
                let (key, rest) = self.split_key_value(item, line.number)?;
                let mut obj = Object::default();
                if rest.is_empty() {
                    let nested = self.parse_object(depth + 3)?;
                    obj.push(key, Value::Object(nested));
                } else {
                    let value = self.decode_primitive_token(rest, line.number)?;
                    obj.push(key, value);
                }
                self.collect_object_list_siblings(&mut obj, depth)?;
                values.push(Value::Object(obj));
                continue;
            }

            values.push(self.decode_primitive_token(item, line.number)?);
        }

        if self.cfg.strict && values.len() != header.length {
            return Err(Error::LengthMismatch {
                line: self.lines[self.pos - 1].number,
                expected: header.length,
                actual: values.len(),
            });
        }
        Ok(Value::Array(values))
    }

    /// Gather the remaining fields of an object list element: key-value and
    /// header lines two levels below the array header.
    fn collect_object_list_siblings(&mut self, obj: &mut Object, depth: usize) -> Result<()> {
        while self.pos < self.lines.len() {
            let line = self.lines[self.pos];
            if line.blank {
                if self.cfg.strict {
                    match self.next_non_blank_indent() {
                        Some(indent) if indent > depth + 1 => {
                            return Err(Error::BlankInsideArray { line: line.number });
                        }
                        _ => break,
                    }
                }
                self.pos += 1;
                continue;
            }
            if line.indent <= depth + 1 {
                break;
            }
            if line.indent != depth + 2 {
                return Err(Error::IndentUnexpected { line: line.number });
            }

            if let Some(header) = self.try_parse_header(line.content, line.number)? {
                if header.key.is_empty() {
                    return Err(Error::InvalidHeader {
                        line: line.number,
                        reason: String::from("arrays within objects must have a key"),
                    });
                }
                self.pos += 1;
                let value = self.parse_array(&header, depth + 2)?;
                obj.push(header.key, value);
                continue;
            }

            let (key, rest) = self.split_key_value(line.content, line.number)?;
            self.pos += 1;
            if rest.is_empty() {
                let nested = self.parse_object(depth + 3)?;
                obj.push(key, Value::Object(nested));
            } else {
                let value = self.decode_primitive_token(rest, line.number)?;
                obj.push(key, value);
            }
        }
        Ok(())
    }

    fn try_parse_header(&self, content: &'a str, line: usize) -> Result<Option<Header<'a>>> {
        let Some(colon) = tokens::find_outside_quotes(content, ':') else {
            return Ok(None);
        };
        let left = content[..colon].trim();
        let inline = content[colon + 1..].trim();
        if left.is_empty() {
            return Ok(None);
        }
        let Some(bracket_start) = tokens::find_outside_quotes(left, '[') else {
            return Ok(None);
        };
        let rest = &left[bracket_start + 1..];
        let Some(bracket_end) = tokens::find_outside_quotes(rest, ']') else {
            return Err(Error::InvalidHeader {
                line,
                reason: String::from("missing closing bracket"),
            });
        };
        let key_part = left[..bracket_start].trim();
        let bracket_segment = &rest[..bracket_end];
        let field_segment = rest[bracket_end + 1..].trim();

        let key = if key_part.is_empty() {
            String::new()
        } else {
            self.decode_key_token(key_part, line)?
        };
        let (length, delimiter) = parse_bracket_segment(bracket_segment, line)?;

        let mut fields = Vec::new();
        if !field_segment.is_empty() {
            if !field_segment.starts_with('{') || !field_segment.ends_with('}') {
                return Err(Error::InvalidHeader {
                    line,
                    reason: String::from("invalid field segment"),
                });
            }
            let inner = &field_segment[1..field_segment.len() - 1];
            if !inner.is_empty() {
                let raw = tokens::split_inline_values(inner, delimiter.as_char())
                    .map_err(|e| quoted_error(line, e))?;
                for token in &raw {
                    fields.push(self.decode_key_token(token, line)?);
                }
            }
        }

        Ok(Some(Header {
            key,
            length,
            delimiter,
            fields,
            inline,
        }))
    }

    fn split_key_value(&self, content: &'a str, line: usize) -> Result<(String, &'a str)> {
        let Some(colon) = tokens::find_outside_quotes(content, ':') else {
            return Err(Error::InvalidKey {
                line,
                reason: String::from("missing ':' after key"),
            });
        };
        let key = self.decode_key_token(content[..colon].trim(), line)?;
        Ok((key, content[colon + 1..].trim()))
    }

    fn decode_key_token(&self, token: &str, line: usize) -> Result<String> {
        if token.is_empty() {
            return Err(Error::InvalidKey {
                line,
                reason: String::from("empty key"),
            });
        }
        if token.starts_with('"') {
            return tokens::unquote_string(token).map_err(|e| quoted_error(line, e));
        }
        if !is_valid_unquoted_key(token) {
            return Err(Error::InvalidKey {
                line,
                reason: format!("invalid unquoted key {token:?}"),
            });
        }
        Ok(token.to_string())
    }

    fn decode_primitive_token(&self, token: &str, line: usize) -> Result<Value> {
        if token.is_empty() {
            return Ok(Value::String(String::new()));
        }
        if token.starts_with('"') {
            let unquoted = tokens::unquote_string(token).map_err(|e| quoted_error(line, e))?;
            return Ok(Value::String(unquoted));
        }
        match token {
            "true" => return Ok(Value::Bool(true)),
            "false" => return Ok(Value::Bool(false)),
            "null" => return Ok(Value::Null),
            _ => {}
        }
        if has_forbidden_leading_zeros(token) {
            return Ok(Value::String(token.to_string()));
        }
        if looks_numeric(token) {
            // Out-of-range exponents overflow to infinity; such tokens stay
            // strings so their digits survive.
            if let Ok(parsed) = token.parse::<f64>() {
                if let Some(number) = Number::from_f64(parsed) {
                    return Ok(Value::Number(number));
                }
            }
        }
        Ok(Value::String(token.to_string()))
    }

    fn skip_blanks(&mut self) {
        while self.pos < self.lines.len() && self.lines[self.pos].blank {
            self.pos += 1;
        }
    }

    /// Indent of the next non-blank line after the cursor, if any.
    fn next_non_blank_indent(&self) -> Option<usize> {
        self.lines[self.pos + 1..]
            .iter()
            .find(|l| !l.blank)
            .map(|l| l.indent)
    }
}

fn parse_bracket_segment(segment: &str, line: usize) -> Result<(usize, Delimiter)> {
    // The `#` marker is informational on parse.
    let segment = segment.strip_prefix('#').unwrap_or(segment);
    if segment.is_empty() {
        return Err(Error::InvalidHeader {
            line,
            reason: String::from("missing array length"),
        });
    }
    let mut digits = String::new();
    let mut delimiter = Delimiter::Comma;
    for ch in segment.chars() {
        match ch {
            '0'..='9' => digits.push(ch),
            '\t' => delimiter = Delimiter::Tab,
            '|' => delimiter = Delimiter::Pipe,
            other => {
                return Err(Error::InvalidHeader {
                    line,
                    reason: format!("invalid delimiter symbol {other:?}"),
                });
            }
        }
    }
    if digits.is_empty() {
        return Err(Error::InvalidHeader {
            line,
            reason: String::from("missing digits in array length"),
        });
    }
    let length = digits.parse::<usize>().map_err(|e| Error::InvalidHeader {
        line,
        reason: e.to_string(),
    })?;
    Ok((length, delimiter))
}

fn is_key_value(content: &str) -> bool {
    matches!(tokens::find_outside_quotes(content, ':'), Some(idx) if idx > 0)
}

fn quoted_error(line: usize, err: TokenError) -> Error {
    Error::InvalidQuotedString {
        line,
        reason: err.to_string(),
    }
}
