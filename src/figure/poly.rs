use crate::figure::{Command, Common, Drawable, Figure};
use crate::foundation::core::{Align2, Point};
use crate::protocol::line::CommandLine;

/// Polygon through an ordered list of vertices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Poly {
    points: Vec<Point>,
    width: Option<f64>,
    fill: Option<bool>,
    align: Option<Align2>,
    common: Common,
}

impl Command for Poly {
    fn encode(&self, out: &mut Vec<String>) {
        let mut line = CommandLine::new("poly");
        line.each("p", &self.points)
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

impl Drawable for Poly {
    fn common_mut(&mut self) -> &mut Common {
        &mut self.common
    }
}

impl Figure<'_, Poly> {
    /// Append one vertex.
    pub fn point(self, point: impl Into<Point>) -> Self {
        let point = point.into();
        self.edit(|p| p.points.push(point))
    }

    /// Append every vertex of `points`, in order.
    pub fn points<P: Into<Point>>(self, points: impl IntoIterator<Item = P>) -> Self {
        self.edit(|p| p.points.extend(points.into_iter().map(Into::into)))
    }

    /// Set the stroke width.
    pub fn width(self, width: impl Into<f64>) -> Self {
        let width = width.into();
        self.edit(|p| p.width = Some(width))
    }

    /// Fill the interior.
    pub fn fill(self, fill: bool) -> Self {
        self.edit(|p| p.fill = Some(fill))
    }

    /// Set the alignment of the polygon relative to its vertices.
    pub fn align(self, align: impl Into<Align2>) -> Self {
        let align = align.into();
        self.edit(|p| p.align = Some(align))
    }
}
