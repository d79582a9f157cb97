use crate::figure::{Command, Common, Drawable, Figure};
use crate::foundation::core::{Align2, Point, Size};
use crate::protocol::line::CommandLine;

/// Axis-aligned rectangle anchored at `center` according to its alignment.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Rect {
    center: Option<Point>,
    size: Option<Size>,
    width: Option<f64>,
    fill: Option<bool>,
    align: Option<Align2>,
    common: Common,
}

impl Rect {
    pub(crate) fn at(center: Point, size: Size) -> Self {
        Self {
            center: Some(center),
            size: Some(size),
            ..Self::default()
        }
    }
}

impl Command for Rect {
    fn encode(&self, out: &mut Vec<String>) {
        let mut line = CommandLine::new("rect");
        line.opt("c", &self.center)
            .opt("s", &self.size)
            .opt("w", &self.width)
            .opt("f", &self.fill);
        self.common.write_color(&mut line);
        line.opt("a", &self.align);
        self.common.write_tail(&mut line);
        out.push(line.into_string());
    }

    fn function(&self) -> Option<&str> {
        self.common.func()
    }
}

impl Drawable for Rect {
    fn common_mut(&mut self) -> &mut Common {
        &mut self.common
    }
}

impl Figure<'_, Rect> {
    /// Set the anchor point.
    pub fn center(self, center: impl Into<Point>) -> Self {
        let center = center.into();
        self.edit(|r| r.center = Some(center))
    }

    /// Set width and height.
    pub fn size(self, size: impl Into<Size>) -> Self {
        let size = size.into();
        self.edit(|r| r.size = Some(size))
    }

    /// Set the stroke width.
    pub fn width(self, width: impl Into<f64>) -> Self {
        let width = width.into();
        self.edit(|r| r.width = Some(width))
    }

    /// Fill the interior instead of stroking the outline.
    pub fn fill(self, fill: bool) -> Self {
        self.edit(|r| r.fill = Some(fill))
    }

    /// Set the alignment of the rectangle relative to its anchor.
    pub fn align(self, align: impl Into<Align2>) -> Self {
        let align = align.into();
        self.edit(|r| r.align = Some(align))
    }
}
