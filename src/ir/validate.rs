//! Structural validation of TSPL job text.
//!
//! A cheap static check, not a printer simulator. It answers one question:
//! would the printer see a complete job?
//!
//! - `SIZE` is present
//! - `CLS` is present
//! - at least one `PRINT`
//! - exactly one `END`, and it is the last instruction
//! - every `TEXT`/`BARCODE` sits between a `CLS` and the following `PRINT`

use thiserror::Error;

use super::codegen::CommandStream;

/// A structural problem found in a command stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("missing SIZE instruction")]
    MissingSize,

    #[error("missing CLS instruction")]
    MissingCls,

    #[error("missing PRINT instruction")]
    MissingPrint,

    #[error("missing END instruction")]
    MissingEnd,

    #[error("expected exactly one END, found {0}")]
    MultipleEnd(usize),

    #[error("END is not the last instruction")]
    EndNotLast,

    #[error("{keyword} on line {line} is outside a CLS..PRINT block")]
    ContentOutsideLabel { keyword: String, line: usize },
}

/// Check `stream` and return every violation found, in line order where
/// applicable. An empty result means the stream is structurally complete.
///
/// ```
/// use etiqueta::ir::{validate, CommandStream, Violation};
///
/// let stream = CommandStream::from_raw("SIZE 50 mm,20 mm\r\nCLS\r\nPRINT 1\r\n");
/// assert_eq!(validate(&stream), vec![Violation::MissingEnd]);
/// ```
pub fn validate(stream: &CommandStream) -> Vec<Violation> {
    let mut violations = Vec::new();

    let mut has_size = false;
    let mut has_cls = false;
    let mut prints = 0usize;
    let mut ends = 0usize;
    let mut last_keyword = String::new();
    let mut in_label = false;

    for (idx, line) in stream.lines().enumerate() {
        // firmware accepts instructions in any case
        let keyword = line
            .split_whitespace()
            .next()
            .unwrap_or("")
            .to_ascii_uppercase();
        match keyword.as_str() {
            "SIZE" => has_size = true,
            "CLS" => {
                has_cls = true;
                in_label = true;
            }
            "PRINT" => {
                prints += 1;
                in_label = false;
            }
            "END" => ends += 1,
            "TEXT" | "BARCODE" if !in_label => {
                violations.push(Violation::ContentOutsideLabel {
                    keyword: keyword.clone(),
                    line: idx + 1,
                });
            }
            _ => {}
        }
        last_keyword = keyword;
    }

    if !has_size {
        violations.push(Violation::MissingSize);
    }
    if !has_cls {
        violations.push(Violation::MissingCls);
    }
    if prints == 0 {
        violations.push(Violation::MissingPrint);
    }
    match ends {
        0 => violations.push(Violation::MissingEnd),
        1 if last_keyword != "END" => violations.push(Violation::EndNotLast),
        1 => {}
        n => violations.push(Violation::MultipleEnd(n)),
    }

    violations
}

/// Shorthand for `validate(stream).is_empty()`.
pub fn is_valid(stream: &CommandStream) -> bool {
    validate(stream).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(lines: &[&str]) -> CommandStream {
        let mut text = lines.join("\r\n");
        text.push_str("\r\n");
        CommandStream::from_raw(text)
    }

    #[test]
    fn test_complete_job() {
        let s = stream(&[
            "SIZE 50 mm,20 mm",
            "GAP 2 mm,0",
            "CLS",
            "TEXT 10,10,\"2\",0,1,1,\"A\"",
            "PRINT 1",
            "END",
        ]);
        assert!(is_valid(&s));
    }

    #[test]
    fn test_empty_stream() {
        let v = validate(&CommandStream::default());
        assert_eq!(
            v,
            vec![
                Violation::MissingSize,
                Violation::MissingCls,
                Violation::MissingPrint,
                Violation::MissingEnd
            ]
        );
    }

    #[test]
    fn test_two_ends() {
        let s = stream(&["SIZE 50 mm,20 mm", "CLS", "PRINT 1", "END", "CLS", "PRINT 1", "END"]);
        assert_eq!(validate(&s), vec![Violation::MultipleEnd(2)]);
    }

    #[test]
    fn test_end_not_last() {
        let s = stream(&["SIZE 50 mm,20 mm", "CLS", "END", "PRINT 1"]);
        assert_eq!(validate(&s), vec![Violation::EndNotLast]);
    }

    #[test]
    fn test_content_after_print() {
        let s = stream(&[
            "SIZE 50 mm,20 mm",
            "CLS",
            "PRINT 1",
            "BARCODE 0,0,\"128\",40,0,0,1,2,\"X\"",
            "END",
        ]);
        assert_eq!(
            validate(&s),
            vec![Violation::ContentOutsideLabel {
                keyword: "BARCODE".into(),
                line: 4
            }]
        );
    }

    #[test]
    fn test_lowercase_instructions() {
        let s = stream(&[
            "size 50 mm,20 mm",
            "Cls",
            "text 10,10,\"2\",0,1,1,\"A\"",
            "print 1",
            "end",
        ]);
        assert!(is_valid(&s));

        let s = stream(&["size 50 mm,20 mm", "print 1", "barcode 0,0,\"128\",40,0,0,1,2,\"X\"", "end"]);
        assert_eq!(
            validate(&s),
            vec![
                Violation::ContentOutsideLabel {
                    keyword: "BARCODE".into(),
                    line: 3
                },
                Violation::MissingCls,
            ]
        );
    }

    #[test]
    fn test_violation_messages() {
        assert_eq!(Violation::MissingCls.to_string(), "missing CLS instruction");
        assert_eq!(
            Violation::MultipleEnd(3).to_string(),
            "expected exactly one END, found 3"
        );
    }
}
