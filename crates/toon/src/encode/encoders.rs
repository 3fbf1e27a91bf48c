//! Layout selection and line emission for the three array forms.

use crate::encode::primitives::{self, QuoteContext};
use crate::encode::writer::LineWriter;
use crate::error::Result;
use crate::options::EncodeOptions;
use crate::value::{Field, Object, Value};

pub(crate) struct Encoder<'a> {
    cfg: &'a EncodeOptions,
    w: LineWriter,
}

impl<'a> Encoder<'a> {
    pub fn new(cfg: &'a EncodeOptions) -> Self {
        Self {
            cfg,
            w: LineWriter::new(cfg.indent),
        }
    }

    pub fn into_string(self) -> String {
        self.w.into_string()
    }

    fn ctx(&self, in_array: bool) -> QuoteContext {
        QuoteContext {
            active: self.cfg.array_delimiter,
            document: self.cfg.document_delimiter,
            in_array,
        }
    }

    pub fn encode_root(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Array(items) => self.encode_array("", items, 0),
            Value::Object(obj) => {
                // An empty root object is the empty document.
                self.encode_fields(&obj.fields, 0)
            }
            primitive => {
                let token = primitives::format_primitive(primitive, self.ctx(false))?;
                self.w.line(0, &token);
                Ok(())
            }
        }
    }

    fn encode_fields(&mut self, fields: &[Field], depth: usize) -> Result<()> {
        for field in fields {
            match &field.value {
                Value::Object(obj) => {
                    let key = primitives::encode_key(&field.key)?;
                    self.w.line(depth, &format!("{key}:"));
                    self.encode_fields(&obj.fields, depth + 1)?;
                }
                Value::Array(items) => {
                    self.encode_array(&field.key, items, depth)?;
                }
                primitive => {
                    let key = primitives::encode_key(&field.key)?;
                    let token = primitives::format_primitive(primitive, self.ctx(false))?;
                    self.w.line(depth, &format!("{key}: {token}"));
                }
            }
        }
        Ok(())
    }

    fn encode_array(&mut self, key: &str, values: &[Value], depth: usize) -> Result<()> {
        let key_literal = if key.is_empty() {
            String::new()
        } else {
            primitives::encode_key(key)?
        };
        let delimiter = self.cfg.array_delimiter;
        let ctx = self.ctx(true);

        if values.iter().all(Value::is_primitive) {
            let header = primitives::render_header(
                &key_literal,
                values.len(),
                delimiter,
                self.cfg.length_markers,
                None,
            )?;
            let line = self.inline_line(header, values, ctx)?;
            self.w.line(depth, &line);
            return Ok(());
        }

        if let Some(fields) = detect_tabular(values) {
            let header = primitives::render_header(
                &key_literal,
                values.len(),
                delimiter,
                self.cfg.length_markers,
                Some(&fields),
            )?;
            self.w.line(depth, &header);
            self.encode_tabular_rows(values, &fields, depth + 1, ctx)?;
            return Ok(());
        }

        let header = primitives::render_header(
            &key_literal,
            values.len(),
            delimiter,
            self.cfg.length_markers,
            None,
        )?;
        self.w.line(depth, &header);
        for item in values {
            self.encode_array_item(item, depth + 1)?;
        }
        Ok(())
    }

    fn inline_line(&self, header: String, values: &[Value], ctx: QuoteContext) -> Result<String> {
        let mut line = header;
        if !values.is_empty() {
            line.push(' ');
            for (idx, value) in values.iter().enumerate() {
                if idx > 0 {
                    line.push(self.cfg.array_delimiter.as_char());
                }
                line.push_str(&primitives::format_primitive(value, ctx)?);
            }
        }
        Ok(line)
    }

    fn encode_tabular_rows(
        &mut self,
        rows: &[Value],
        fields: &[String],
        depth: usize,
        ctx: QuoteContext,
    ) -> Result<()> {
        for row in rows {
            let Value::Object(obj) = row else {
                unreachable!("tabular detection admits only objects");
            };
            let mut line = String::new();
            for (idx, field) in fields.iter().enumerate() {
                if idx > 0 {
                    line.push(self.cfg.array_delimiter.as_char());
                }
                let token = match obj.get(field) {
                    Some(value) => primitives::format_primitive(value, ctx)?,
                    None => String::from("null"),
                };
                line.push_str(&token);
            }
            self.w.line(depth, &line);
        }
        Ok(())
    }

    fn encode_array_item(&mut self, item: &Value, depth: usize) -> Result<()> {
        match item {
            Value::Object(obj) => self.encode_object_list_item(obj, depth),
            Value::Array(items) => self.encode_array_for_list_item("", items, depth),
            primitive => {
                let token = primitives::format_primitive(primitive, self.ctx(true))?;
                self.w.line(depth, &format!("- {token}"));
                Ok(())
            }
        }
    }

    /// One object element of a list array: the first field shares the `- `
    /// line when it can, the remaining fields nest one level deeper.
    fn encode_object_list_item(&mut self, obj: &Object, depth: usize) -> Result<()> {
        if obj.is_empty() {
            self.w.line(depth, "- {}");
            return Ok(());
        }
        let first = &obj.fields[0];
        let rest = &obj.fields[1..];
        if first.value.is_primitive() {
            let key = primitives::encode_key(&first.key)?;
            let token = primitives::format_primitive(&first.value, self.ctx(true))?;
            self.w.line(depth, &format!("- {key}: {token}"));
            return self.encode_fields(rest, depth + 1);
        }
        if let Value::Array(items) = &first.value {
            let key_literal = primitives::encode_key(&first.key)?;
            self.encode_array_for_list_item(&key_literal, items, depth)?;
            return self.encode_fields(rest, depth + 1);
        }
        self.w.line(depth, "-");
        self.encode_fields(&obj.fields, depth + 1)
    }

    /// Render an array whose header rides a `- ` item line.
    fn encode_array_for_list_item(
        &mut self,
        key_literal: &str,
        values: &[Value],
        depth: usize,
    ) -> Result<()> {
        let delimiter = self.cfg.array_delimiter;
        let ctx = self.ctx(true);

        if let Some(fields) = detect_tabular(values) {
            let header = primitives::render_header(
                key_literal,
                values.len(),
                delimiter,
                self.cfg.length_markers,
                Some(&fields),
            )?;
            self.w.line(depth, &format!("- {header}"));
            return self.encode_tabular_rows(values, &fields, depth + 1, ctx);
        }

        if values.iter().all(Value::is_primitive) {
            let header = primitives::render_header(
                key_literal,
                values.len(),
                delimiter,
                self.cfg.length_markers,
                None,
            )?;
            let line = self.inline_line(header, values, ctx)?;
            self.w.line(depth, &format!("- {line}"));
            return Ok(());
        }

        let header = primitives::render_header(
            key_literal,
            values.len(),
            delimiter,
            self.cfg.length_markers,
            None,
        )?;
        self.w.line(depth, &format!("- {header}"));
        for item in values {
            self.encode_array_item(item, depth + 1)?;
        }
        Ok(())
    }
}

/// Tabular detection: every element must be a non-empty object carrying the
/// first element's fields in the same order, every value primitive, no
/// duplicate keys. Any deviation falls back to the object-list layout.
pub fn detect_tabular(values: &[Value]) -> Option<Vec<String>> {
    let Some(Value::Object(first)) = values.first() else {
        return None;
    };
    if first.is_empty() {
        return None;
    }
    let mut fields: Vec<String> = Vec::with_capacity(first.len());
    for field in &first.fields {
        if !field.value.is_primitive() || fields.contains(&field.key) {
            return None;
        }
        fields.push(field.key.clone());
    }
    for value in &values[1..] {
        let Value::Object(obj) = value else {
            return None;
        };
        if obj.len() != fields.len() {
            return None;
        }
        for (field, expected) in obj.fields.iter().zip(&fields) {
            if field.key != *expected || !field.value.is_primitive() {
                return None;
            }
        }
    }
    Some(fields)
}
