use crate::protocol::format::{Token, write_escaped};

/// One protocol command line under construction.
///
/// The line starts with the command keyword; every option is appended as ` key=value` and only
/// when present. The terminating line break is added by the output channel.
#[derive(Debug, Clone)]
pub(crate) struct CommandLine {
    buf: String,
}

impl CommandLine {
    pub(crate) fn new(keyword: &str) -> Self {
        Self {
            buf: keyword.to_owned(),
        }
    }

    /// Append a positional argument separated by a single space.
    pub(crate) fn arg<T: Token + ?Sized>(&mut self, value: &T) -> &mut Self {
        self.buf.push(' ');
        value.write_token(&mut self.buf);
        self
    }

    /// Append the rest of the line without quoting; line breaks are escaped.
    pub(crate) fn rest(&mut self, text: &str) -> &mut Self {
        self.buf.push(' ');
        write_escaped(text, &mut self.buf);
        self
    }

    /// Append ` key=value` unconditionally.
    pub(crate) fn field<T: Token + ?Sized>(&mut self, key: &str, value: &T) -> &mut Self {
        self.buf.push(' ');
        self.buf.push_str(key);
        self.buf.push('=');
        value.write_token(&mut self.buf);
        self
    }

    /// Append ` key=value` iff `value` is present.
    pub(crate) fn opt<T: Token>(&mut self, key: &str, value: &Option<T>) -> &mut Self {
        if let Some(v) = value {
            self.field(key, v);
        }
        self
    }

    /// Append one ` key=value` per element, in order.
    pub(crate) fn each<T: Token>(&mut self, key: &str, values: &[T]) -> &mut Self {
        for v in values {
            self.field(key, v);
        }
        self
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.buf
    }

    pub(crate) fn into_string(self) -> String {
        self.buf
    }
}

#[cfg(test)]
#[path = "../../tests/unit/protocol/line.rs"]
mod tests;
