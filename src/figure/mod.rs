//! Primitive descriptors and the emission guard.
//!
//! Every primitive lives inside a [`Figure`] borrowed from a [`Scene`]. The figure owns the only
//! right to emit its command: it serializes exactly once, either on an explicit
//! [`Figure::draw`] or when it is dropped. Moving a figure moves that right with it, so chained
//! setters (`scene.rect().center(c).fill(true)`) always operate on the same logical owner.

use crate::foundation::core::Color;
use crate::protocol::line::CommandLine;
use crate::scene::Scene;

pub(crate) mod circle;
pub(crate) mod grid;
pub(crate) mod init;
pub(crate) mod line;
pub(crate) mod poly;
pub(crate) mod rect;
pub(crate) mod text;

/// A command that serializes into protocol lines.
pub trait Command: Clone + std::fmt::Debug {
    /// Append the command's lines, without line breaks, to `out`.
    fn encode(&self, out: &mut Vec<String>);

    /// Interpolation function referenced by this command, if any.
    fn function(&self) -> Option<&str> {
        None
    }
}

/// A command with the fields shared by every drawable kind.
pub trait Drawable: Command {
    /// Mutable access to the shared fields.
    fn common_mut(&mut self) -> &mut Common;
}

/// Fields shared by every drawable kind: color, animation identity, keep flag and tags.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Common {
    color: Option<Color>,
    id: Option<i32>,
    func: Option<String>,
    keep: Option<bool>,
    tags: Vec<String>,
}

impl Common {
    pub(crate) fn write_color(&self, line: &mut CommandLine) {
        line.opt("col", &self.color);
    }

    /// Animation fields, keep flag, then one `t=` per tag.
    pub(crate) fn write_tail(&self, line: &mut CommandLine) {
        line.opt("id", &self.id)
            .opt("fu", &self.func)
            .opt("k", &self.keep)
            .each("t", &self.tags);
    }

    pub(crate) fn func(&self) -> Option<&str> {
        self.func.as_deref()
    }
}

/// Emission guard around one primitive.
///
/// Invariant: at most one emission per logical primitive. `emitted` only ever goes from `false`
/// to `true`.
pub struct Figure<'s, C: Command> {
    scene: &'s Scene,
    cmd: C,
    emitted: bool,
}

impl<'s, C: Command> Figure<'s, C> {
    pub(crate) fn new(scene: &'s Scene, cmd: C) -> Self {
        Self {
            scene,
            cmd,
            emitted: false,
        }
    }

    /// Emit the accumulated state now. Later calls and the final drop are no-ops.
    pub fn draw(&mut self) {
        if self.emitted {
            return;
        }
        self.emitted = true;
        self.scene.emit_command(&self.cmd);
    }

    /// Transfer emission responsibility to a new handle carrying a copy of every field.
    ///
    /// `self` is marked emitted; the returned figure emits unless `self` already had.
    pub fn take(&mut self) -> Self {
        Self {
            scene: self.scene,
            cmd: self.cmd.clone(),
            emitted: std::mem::replace(&mut self.emitted, true),
        }
    }

    /// Replace this figure's state with `other` without emitting the previous state.
    pub fn overwrite(&mut self, other: Self) {
        let previous = std::mem::replace(self, other);
        previous.discard();
    }

    /// Drop without emitting.
    pub fn discard(mut self) {
        self.emitted = true;
    }

    /// Return `true` once the figure was emitted, transferred away, or discarded.
    pub fn is_emitted(&self) -> bool {
        self.emitted
    }

    /// Lines this figure would emit right now.
    pub fn preview(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.cmd.encode(&mut out);
        out
    }

    pub(crate) fn edit(mut self, f: impl FnOnce(&mut C)) -> Self {
        f(&mut self.cmd);
        self
    }
}

impl<C: Drawable> Figure<'_, C> {
    /// Set the color.
    pub fn color(self, color: impl Into<Color>) -> Self {
        let color = color.into();
        self.edit(|c| c.common_mut().color = Some(color))
    }

    /// Append a free-form tag. Tags are emitted last, in insertion order.
    pub fn tag(self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        self.edit(|c| c.common_mut().tags.push(tag))
    }

    /// Set the persistent identifier tying this primitive to its counterpart in the next frame.
    pub fn id(self, id: i32) -> Self {
        self.edit(|c| c.common_mut().id = Some(id))
    }

    /// Reference a registered interpolation function used to tween towards the next frame.
    pub fn func(self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.edit(|c| c.common_mut().func = Some(name))
    }

    /// Ask the viewer to keep this primitive on screen in later frames.
    pub fn keep(self, keep: bool) -> Self {
        self.edit(|c| c.common_mut().keep = Some(keep))
    }
}

impl<C: Command> Drop for Figure<'_, C> {
    fn drop(&mut self) {
        self.draw();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/figure/guard.rs"]
mod tests;
