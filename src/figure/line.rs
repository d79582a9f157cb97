use crate::figure::{Command, Common, Drawable, Figure};
use crate::foundation::core::Point;
use crate::protocol::line::CommandLine;

/// Straight segment between two points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Line {
    start: Option<Point>,
    finish: Option<Point>,
    width: Option<f64>,
    common: Common,
}

impl Line {
    pub(crate) fn between(start: Point, finish: Point) -> Self {
        Self {
            start: Some(start),
            finish: Some(finish),
            ..Self::default()
        }
    }
}

impl Command for Line {
    fn encode(&self, out: &mut Vec<String>) {
        let mut line = CommandLine::new("line");
        line.opt("s", &self.start)
            .opt("f", &self.finish)
            .opt("w", &self.width);
        self.common.write_color(&mut line);
        self.common.write_tail(&mut line);
        out.push(line.into_string());
    }

    fn function(&self) -> Option<&str> {
        self.common.func()
    }
}

impl Drawable for Line {
    fn common_mut(&mut self) -> &mut Common {
        &mut self.common
    }
}

impl Figure<'_, Line> {
    /// Set the first endpoint.
    pub fn start(self, start: impl Into<Point>) -> Self {
        let start = start.into();
        self.edit(|l| l.start = Some(start))
    }

    /// Set the second endpoint.
    pub fn finish(self, finish: impl Into<Point>) -> Self {
        let finish = finish.into();
        self.edit(|l| l.finish = Some(finish))
    }

    /// Set the stroke width.
    pub fn width(self, width: impl Into<f64>) -> Self {
        let width = width.into();
        self.edit(|l| l.width = Some(width))
    }
}
