use std::fmt::Write as _;

use crate::foundation::core::{Align2, Alignment, Color, Point, Size};

/// A value with a protocol token representation.
pub(crate) trait Token {
    /// Append the token text to `out`.
    fn write_token(&self, out: &mut String);
}

impl<T: Token + ?Sized> Token for &T {
    fn write_token(&self, out: &mut String) {
        (**self).write_token(out);
    }
}

impl Token for f64 {
    fn write_token(&self, out: &mut String) {
        // Shortest round-trip representation, `2.0` prints as `2`.
        let _ = write!(out, "{self}");
    }
}

impl Token for i32 {
    fn write_token(&self, out: &mut String) {
        let _ = write!(out, "{self}");
    }
}

impl Token for u32 {
    fn write_token(&self, out: &mut String) {
        let _ = write!(out, "{self}");
    }
}

impl Token for usize {
    fn write_token(&self, out: &mut String) {
        let _ = write!(out, "{self}");
    }
}

impl Token for bool {
    fn write_token(&self, out: &mut String) {
        out.push(if *self { '1' } else { '0' });
    }
}

/// Append `text` so that it stays on one physical line.
///
/// Line breaks become `;`, the viewer's line-break escape. Other control characters except tab
/// become spaces. `"` becomes `'`: a quoted value ends at the next `"`.
pub(crate) fn write_escaped(text: &str, out: &mut String) {
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                chars.next_if_eq(&'\n');
                out.push(';');
            }
            '\n' => out.push(';'),
            '"' => out.push('\''),
            c if c.is_control() && c != '\t' => out.push(' '),
            c => out.push(c),
        }
    }
}

impl Token for str {
    fn write_token(&self, out: &mut String) {
        let mut text = String::with_capacity(self.len());
        write_escaped(self, &mut text);
        if text.contains(char::is_whitespace) {
            out.push('"');
            out.push_str(&text);
            out.push('"');
        } else {
            out.push_str(&text);
        }
    }
}

impl Token for String {
    fn write_token(&self, out: &mut String) {
        self.as_str().write_token(out);
    }
}

impl<T: Token> Token for (T, T) {
    fn write_token(&self, out: &mut String) {
        out.push('(');
        self.0.write_token(out);
        out.push(',');
        self.1.write_token(out);
        out.push(')');
    }
}

impl Token for Point {
    fn write_token(&self, out: &mut String) {
        (self.x, self.y).write_token(out);
    }
}

impl Token for Size {
    fn write_token(&self, out: &mut String) {
        (self.width, self.height).write_token(out);
    }
}

impl Token for Color {
    fn write_token(&self, out: &mut String) {
        let _ = write!(out, "({},{},{}", self.r, self.g, self.b);
        if !self.is_opaque() {
            let _ = write!(out, ",{}", self.a);
        }
        out.push(')');
    }
}

impl Token for Alignment {
    fn write_token(&self, out: &mut String) {
        out.push(self.to_char());
    }
}

impl Token for Align2 {
    fn write_token(&self, out: &mut String) {
        self.horizontal.write_token(out);
        self.vertical.write_token(out);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/protocol/format.rs"]
mod tests;
