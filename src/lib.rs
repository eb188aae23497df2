#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// Byte offset into a named source. Sources over 4 GiB saturate at
/// `u32::MAX`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }

    pub fn is_null(&self) -> bool {
        self.1.as_str() == "<null>"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Returns the 1-based line number, the full line text and the byte
/// column of `position` within `source`.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos >= source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    None
}


/// Formats an error the way `display_error` prints it:
///
/// ```text
/// Error: name (tip)
/// -> file.js
///    |
/// 20 | let a = @;
///    | --------^
/// ```
///
/// Errors without a real position only get the first line.
pub fn render_error(error: &Error, source: &str) -> String {
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }

    let position = error.get_position();
    if position.is_null() {
        return out;
    }

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("-> {}\n", position.1));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let column = line_text[..line_pos].chars().count();
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

pub fn display_error(error: &Error, source: &str) {
    eprint!("{}", render_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
