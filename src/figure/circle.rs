use crate::figure::{Command, Common, Drawable, Figure};
use crate::foundation::core::Point;
use crate::protocol::line::CommandLine;

/// Circle or circular arc.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Circle {
    center: Option<Point>,
    radius: Option<f64>,
    arc: Option<(f64, f64)>,
    width: Option<f64>,
    fill: Option<bool>,
    common: Common,
}

impl Circle {
    pub(crate) fn at(center: Point, radius: f64) -> Self {
        Self {
            center: Some(center),
            radius: Some(radius),
            ..Self::default()
        }
    }
}

impl Command for Circle {
    fn encode(&self, out: &mut Vec<String>) {
        let mut line = CommandLine::new("circle");
        line.opt("c", &self.center)
            .opt("r", &self.radius)
            .opt("arc", &self.arc)
            .opt("w", &self.width)
            .opt("f", &self.fill);
        self.common.write_color(&mut line);
        self.common.write_tail(&mut line);
        out.push(line.into_string());
    }

    fn function(&self) -> Option<&str> {
        self.common.func()
    }
}

impl Drawable for Circle {
    fn common_mut(&mut self) -> &mut Common {
        &mut self.common
    }
}

impl Figure<'_, Circle> {
    /// Set the center.
    pub fn center(self, center: impl Into<Point>) -> Self {
        let center = center.into();
        self.edit(|c| c.center = Some(center))
    }

    /// Set the radius.
    pub fn radius(self, radius: impl Into<f64>) -> Self {
        let radius = radius.into();
        self.edit(|c| c.radius = Some(radius))
    }

    /// Restrict drawing to the arc between two angles, in the viewer's angle units.
    pub fn arc(self, from: impl Into<f64>, to: impl Into<f64>) -> Self {
        let arc = (from.into(), to.into());
        self.edit(|c| c.arc = Some(arc))
    }

    /// Set the stroke width.
    pub fn width(self, width: impl Into<f64>) -> Self {
        let width = width.into();
        self.edit(|c| c.width = Some(width))
    }

    /// Fill the disc instead of stroking the outline.
    pub fn fill(self, fill: bool) -> Self {
        self.edit(|c| c.fill = Some(fill))
    }
}
