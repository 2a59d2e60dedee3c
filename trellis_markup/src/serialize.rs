// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::MarkupError;

/// The indentation unit: two spaces per level.
pub const INDENT_UNIT: &str = "  ";

/// One serialized line: an indent level and the line text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    /// Indent depth, in units of [`INDENT_UNIT`].
    pub indent: usize,
    /// Line text, emitted verbatim after the indent prefix.
    pub text: String,
}

impl Line {
    /// Creates a line at the given indent level.
    #[must_use]
    pub fn new(indent: usize, text: impl Into<String>) -> Self {
        Self {
            indent,
            text: text.into(),
        }
    }
}

/// Joins lines into output text.
///
/// Each line becomes `indent * INDENT_UNIT + text + "\n"`. Empty text still
/// emits the indent-prefixed blank line.
#[must_use]
pub fn join_lines(lines: &[Line]) -> String {
    let mut out = String::new();
    for line in lines {
        for _ in 0..line.indent {
            out.push_str(INDENT_UNIT);
        }
        out.push_str(&line.text);
        out.push('\n');
    }
    out
}

/// Writes `text` to `<dir>/<name>.<ext>`, fully overwriting any existing
/// content, and returns the written path.
///
/// The write is a plain whole-file overwrite with no atomicity guarantee;
/// I/O failures are propagated unchanged.
pub fn write_document(
    dir: &Path,
    name: &str,
    ext: &str,
    text: &str,
) -> Result<PathBuf, MarkupError> {
    let path = dir.join(format!("{name}.{ext}"));
    fs::write(&path, text)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::{join_lines, write_document, Line};

    #[test]
    fn joins_with_two_space_indent() {
        let lines = [
            Line::new(0, "<div>"),
            Line::new(1, "hi"),
            Line::new(0, "</div>"),
        ];
        assert_eq!(join_lines(&lines), "<div>\n  hi\n</div>\n");
    }

    #[test]
    fn blank_text_still_emits_indented_line() {
        let lines = [Line::new(2, "")];
        assert_eq!(join_lines(&lines), "    \n");
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = std::env::temp_dir();
        let name = "trellis_markup_write_test";
        let first = write_document(&dir, name, "html", "first").unwrap();
        let second = write_document(&dir, name, "html", "second").unwrap();
        assert_eq!(first, second);
        assert_eq!(std::fs::read_to_string(&second).unwrap(), "second");
        let _ = std::fs::remove_file(second);
    }
}
