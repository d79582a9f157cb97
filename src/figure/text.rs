use crate::figure::{Command, Common, Drawable, Figure};
use crate::foundation::core::{Align2, Point};
use crate::protocol::line::CommandLine;

/// Text label.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Text {
    text: Option<String>,
    center: Option<Point>,
    font: Option<f64>,
    align: Option<Align2>,
    common: Common,
}

impl Text {
    pub(crate) fn with_text(text: String) -> Self {
        Self {
            text: Some(text),
            ..Self::default()
        }
    }
}

impl Command for Text {
    fn encode(&self, out: &mut Vec<String>) {
        let mut line = CommandLine::new("text");
        line.opt("m", &self.text)
            .opt("c", &self.center)
            .opt("s", &self.font);
        self.common.write_color(&mut line);
        line.opt("a", &self.align);
        self.common.write_tail(&mut line);
        out.push(line.into_string());
    }

    fn function(&self) -> Option<&str> {
        self.common.func()
    }
}

impl Drawable for Text {
    fn common_mut(&mut self) -> &mut Common {
        &mut self.common
    }
}

impl Figure<'_, Text> {
    /// Set the payload. Payloads containing whitespace are quoted on the wire.
    pub fn text(self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.edit(|t| t.text = Some(text))
    }

    /// Set the anchor point.
    pub fn center(self, center: impl Into<Point>) -> Self {
        let center = center.into();
        self.edit(|t| t.center = Some(center))
    }

    /// Set the font size.
    pub fn font(self, font: impl Into<f64>) -> Self {
        let font = font.into();
        self.edit(|t| t.font = Some(font))
    }

    /// Set the alignment of the label relative to its anchor.
    pub fn align(self, align: impl Into<Align2>) -> Self {
        let align = align.into();
        self.edit(|t| t.align = Some(align))
    }
}
