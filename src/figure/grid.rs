use crate::figure::{Command, Common, Drawable, Figure};
use crate::foundation::core::{Align2, Point, Size};
use crate::protocol::line::CommandLine;

/// Rectangle subdivided into `columns x rows` cells.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Grid {
    center: Option<Point>,
    size: Option<Size>,
    dims: Option<(usize, usize)>,
    width: Option<f64>,
    fill: Option<bool>,
    align: Option<Align2>,
    common: Common,
}

impl Grid {
    pub(crate) fn at(center: Point, size: Size, dims: (usize, usize)) -> Self {
        Self {
            center: Some(center),
            size: Some(size),
            dims: Some(dims),
            ..Self::default()
        }
    }
}

impl Command for Grid {
    fn encode(&self, out: &mut Vec<String>) {
        let mut line = CommandLine::new("grid");
        line.opt("c", &self.center)
            .opt("s", &self.size)
            .opt("d", &self.dims)
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

impl Drawable for Grid {
    fn common_mut(&mut self) -> &mut Common {
        &mut self.common
    }
}

impl Figure<'_, Grid> {
    /// Set the anchor point.
    pub fn center(self, center: impl Into<Point>) -> Self {
        let center = center.into();
        self.edit(|g| g.center = Some(center))
    }

    /// Set the overall width and height.
    pub fn size(self, size: impl Into<Size>) -> Self {
        let size = size.into();
        self.edit(|g| g.size = Some(size))
    }

    /// Set the number of columns and rows.
    pub fn dims(self, columns: usize, rows: usize) -> Self {
        self.edit(|g| g.dims = Some((columns, rows)))
    }

    /// Set the stroke width.
    pub fn width(self, width: impl Into<f64>) -> Self {
        let width = width.into();
        self.edit(|g| g.width = Some(width))
    }

    /// Fill the cells.
    pub fn fill(self, fill: bool) -> Self {
        self.edit(|g| g.fill = Some(fill))
    }

    /// Set the alignment of the grid relative to its anchor.
    pub fn align(self, align: impl Into<Align2>) -> Self {
        let align = align.into();
        self.edit(|g| g.align = Some(align))
    }
}
