use chrono::{DateTime, SecondsFormat, Utc};

/// Character used to split values inside array scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    /// The default delimiter. It is omitted from header brackets.
    #[default]
    Comma,
    /// HTAB between values.
    Tab,
    /// `|` between values.
    Pipe,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
        }
    }

    /// Symbol rendered inside a header bracket; comma is always omitted.
    pub fn bracket_symbol(self) -> Option<char> {
        match self {
            Delimiter::Comma => None,
            Delimiter::Tab => Some('\t'),
            Delimiter::Pipe => Some('|'),
        }
    }
}

impl std::fmt::Display for Delimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Delimiter::Comma => "comma",
            Delimiter::Tab => "tab",
            Delimiter::Pipe => "pipe",
        })
    }
}

/// Formatter applied to date-time values during normalization.
pub type TimeFormatter = fn(&DateTime<Utc>) -> String;

fn rfc3339_utc(t: &DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

#[derive(Debug, Clone)]
pub struct EncodeOptions {
    /// Spaces per indentation level.
    pub indent: usize,
    /// Delimiter that influences quoting outside array scopes.
    pub document_delimiter: Delimiter,
    /// Active delimiter declared by array headers.
    pub array_delimiter: Delimiter,
    /// Emit the optional `#` marker before header lengths.
    pub length_markers: bool,
    /// Renders date-times to strings; defaults to RFC 3339 in UTC.
    pub time_formatter: TimeFormatter,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            document_delimiter: Delimiter::Comma,
            array_delimiter: Delimiter::Comma,
            length_markers: false,
            time_formatter: rfc3339_utc,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// Expected indentation step.
    pub indent: usize,
    /// Reject length mismatches, indentation violations, and blank lines
    /// inside array bodies.
    pub strict: bool,
    /// Accepted for parity with the encoder configuration.
    pub document_delimiter: Delimiter,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            strict: true,
            document_delimiter: Delimiter::Comma,
        }
    }
}
