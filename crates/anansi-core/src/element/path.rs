//! Rendering and splitting element paths
//!
//! Keys are joined with `.`, indices appended as `[i]`. A literal `.`, `[`,
//! `]` or `\` inside a key is escaped with `\`.

use std::fmt::Write;

use super::Segment;
use crate::error::{AnansiError, Result};
use crate::walk::Path;

const ESCAPED: [char; 4] = ['.', '[', ']', '\\'];

/// Render the segments traversed by `path` as one element path.
///
/// The root path renders as the empty string.
pub fn element_path<V>(path: &Path<V, Segment>) -> String {
    let mut rendered = String::new();
    for (position, step) in path.steps().iter().enumerate() {
        match step.over() {
            Some(Segment::Key(key)) => {
                if position > 0 {
                    rendered.push('.');
                }
                push_escaped(&mut rendered, key);
            }
            Some(Segment::Index(index)) => {
                let _ = write!(rendered, "[{}]", index);
            }
            None => {}
        }
    }
    rendered
}

fn push_escaped(rendered: &mut String, key: &str) {
    for c in key.chars() {
        if ESCAPED.contains(&c) {
            rendered.push('\\');
        }
        rendered.push(c);
    }
}

/// Split an element path back into its segments.
///
/// The empty string is the root and yields no segments. A path that begins
/// with `[i]` starts with an index; an empty key is only produced after a
/// separator, e.g. `a.` is `a` followed by the empty key.
///
/// # Errors
/// [`AnansiError::InvalidValue`] for a dangling escape, an unterminated or
/// non-numeric index, a stray `]`, or a key that follows an index without a
/// `.` separator.
pub fn split_element_path(rendered: &str) -> Result<Vec<Segment>> {
    let invalid = || AnansiError::invalid_value("element path", rendered);
    let mut segments = Vec::new();
    // The key being read, if one is open
    let mut key = Some(String::new());
    let mut chars = rendered.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let escaped = chars.next().ok_or_else(invalid)?;
                key.as_mut().ok_or_else(invalid)?.push(escaped);
            }
            '.' => {
                if let Some(done) = key.take() {
                    segments.push(Segment::Key(done));
                }
                key = Some(String::new());
            }
            '[' => {
                if let Some(done) = key.take() {
                    if !done.is_empty() || !segments.is_empty() {
                        segments.push(Segment::Key(done));
                    }
                }
                let mut digits = String::new();
                let mut closed = false;
                for d in chars.by_ref() {
                    if d == ']' {
                        closed = true;
                        break;
                    }
                    digits.push(d);
                }
                if !closed || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                let index = digits.parse().map_err(|_| invalid())?;
                segments.push(Segment::Index(index));
            }
            ']' => return Err(invalid()),
            other => key.as_mut().ok_or_else(invalid)?.push(other),
        }
    }

    if let Some(done) = key {
        if !done.is_empty() || !segments.is_empty() {
            segments.push(Segment::Key(done));
        }
    }
    Ok(segments)
}
