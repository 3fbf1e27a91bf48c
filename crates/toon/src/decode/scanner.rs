//! Line preprocessing: indexed lines with indent level and content.

use crate::error::{Error, Result};
use crate::options::DecodeOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based source line number.
    pub number: usize,
    /// Indent level (leading columns divided by the configured step).
    pub indent: usize,
    pub content: &'a str,
    pub blank: bool,
}

/// Split input into indexed lines. CRLF folds to LF, a single trailing
/// empty line from a terminal newline is dropped, and indentation is
/// validated against the configured step in strict mode.
pub fn scan<'a>(input: &'a str, options: &DecodeOptions) -> Result<Vec<Line<'a>>> {
    let step = options.indent.max(1);
    let mut raw: Vec<&str> = input.split('\n').map(|l| l.strip_suffix('\r').unwrap_or(l)).collect();
    if raw.last() == Some(&"") {
        raw.pop();
    }

    let mut lines = Vec::with_capacity(raw.len());
    for (idx, line) in raw.iter().enumerate() {
        let number = idx + 1;
        let mut columns = 0usize;
        let mut start = None;
        for (pos, byte) in line.bytes().enumerate() {
            match byte {
                b' ' => columns += 1,
                b'\t' => {
                    if options.strict {
                        return Err(Error::IndentStep {
                            line: number,
                            reason: String::from("tabs are not allowed in indentation"),
                        });
                    }
                    columns += 1;
                }
                _ => {
                    start = Some(pos);
                    break;
                }
            }
        }
        let Some(start) = start else {
            // Whitespace-only line.
            lines.push(Line {
                number,
                indent: 0,
                content: "",
                blank: true,
            });
            continue;
        };
        if options.strict && columns % step != 0 {
            return Err(Error::IndentStep {
                line: number,
                reason: format!("indentation must be a multiple of {step} spaces"),
            });
        }
        lines.push(Line {
            number,
            indent: columns / step,
            content: &line[start..],
            blank: false,
        });
    }
    Ok(lines)
}
