//! Comment stripping for TeX sources

use tracing::trace;

use crate::constants::COMMENT_MARKER;

/// Remove TeX comments from `text`.
///
/// Everything from an unescaped `%` up to the end of its line is dropped.
/// Line breaks (`\n` and `\r\n`) are kept, as is any text before the marker.
/// A `%` preceded by an odd number of backslashes is a literal percent sign.
pub fn clean(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    let mut removed = 0;

    for line in text.split_inclusive('\n') {
        let (body, terminator) = split_terminator(line);
        match comment_start(body) {
            Some(index) => {
                removed += body.len() - index;
                cleaned.push_str(&body[..index]);
            }
            None => cleaned.push_str(body),
        }
        cleaned.push_str(terminator);
    }

    trace!("Removed {} bytes of comments", removed);
    cleaned
}

fn split_terminator(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

/// Byte offset of the first comment marker that is not escaped
fn comment_start(line: &str) -> Option<usize> {
    let mut backslashes = 0usize;
    for (index, ch) in line.char_indices() {
        if ch == '\\' {
            backslashes += 1;
            continue;
        }
        if ch == COMMENT_MARKER && backslashes % 2 == 0 {
            return Some(index);
        }
        backslashes = 0;
    }
    None
}
