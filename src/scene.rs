use std::cell::RefCell;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use crate::animation::curve::Curve;
use crate::animation::registry::FunctionRegistry;
use crate::figure::circle::Circle;
use crate::figure::grid::Grid;
use crate::figure::init::InitSettings;
use crate::figure::line::Line;
use crate::figure::poly::Poly;
use crate::figure::rect::Rect;
use crate::figure::text::Text;
use crate::figure::{Command, Figure};
use crate::foundation::core::{Point, Size};
use crate::foundation::error::{SceneError, SceneResult};
use crate::output::sink::{LineSink, MemorySink, WriterSink};
use crate::protocol::line::CommandLine;

/// Counters reported by [`Scene::finish`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct SceneStats {
    /// Number of frame boundaries emitted.
    pub frames: u64,
    /// Number of lines written, frame boundaries included.
    pub lines: u64,
}

#[derive(Debug, Default)]
struct StreamState {
    stats: SceneStats,
    failure: Option<io::Error>,
}

/// Output channel of one scene stream.
///
/// A scene owns the sink every primitive serializes into, the interpolation function registry
/// and the frame counter. It is single-threaded; figures borrow it, so the stream cannot be
/// finished while a figure is still pending.
pub struct Scene {
    sink: RefCell<Box<dyn LineSink>>,
    functions: RefCell<FunctionRegistry>,
    state: RefCell<StreamState>,
}

impl Scene {
    /// Stream into `sink`.
    pub fn new(sink: impl LineSink + 'static) -> Self {
        Self {
            sink: RefCell::new(Box::new(sink)),
            functions: RefCell::new(FunctionRegistry::new()),
            state: RefCell::new(StreamState::default()),
        }
    }

    /// Stream into buffered standard output.
    pub fn stdout() -> Self {
        Self::new(WriterSink::stdout())
    }

    /// Stream into a new file at `path`.
    pub fn create(path: impl AsRef<Path>) -> SceneResult<Self> {
        let sink: WriterSink<BufWriter<File>> = WriterSink::create(path)?;
        Ok(Self::new(sink))
    }

    /// Stream into memory; the returned handle observes every emitted line.
    pub fn in_memory() -> (Self, MemorySink) {
        let sink = MemorySink::new();
        (Self::new(sink.clone()), sink)
    }

    /// Scene settings; emitted as `size`, `speed`, ... lines.
    pub fn init(&self) -> Figure<'_, InitSettings> {
        Figure::new(self, InitSettings::default())
    }

    /// Scene settings pre-filled from `settings`.
    pub fn init_with(&self, settings: InitSettings) -> Figure<'_, InitSettings> {
        Figure::new(self, settings)
    }

    /// Empty rectangle.
    pub fn rect(&self) -> Figure<'_, Rect> {
        Figure::new(self, Rect::default())
    }

    /// Rectangle with center and size.
    pub fn rect_at(&self, center: impl Into<Point>, size: impl Into<Size>) -> Figure<'_, Rect> {
        Figure::new(self, Rect::at(center.into(), size.into()))
    }

    /// Empty circle.
    pub fn circle(&self) -> Figure<'_, Circle> {
        Figure::new(self, Circle::default())
    }

    /// Circle with center and radius.
    pub fn circle_at(
        &self,
        center: impl Into<Point>,
        radius: impl Into<f64>,
    ) -> Figure<'_, Circle> {
        Figure::new(self, Circle::at(center.into(), radius.into()))
    }

    /// Empty segment.
    pub fn line(&self) -> Figure<'_, Line> {
        Figure::new(self, Line::default())
    }

    /// Segment between two points.
    pub fn segment(&self, start: impl Into<Point>, finish: impl Into<Point>) -> Figure<'_, Line> {
        Figure::new(self, Line::between(start.into(), finish.into()))
    }

    /// Empty grid.
    pub fn grid(&self) -> Figure<'_, Grid> {
        Figure::new(self, Grid::default())
    }

    /// Grid with center, size and `(columns, rows)`.
    pub fn grid_at(
        &self,
        center: impl Into<Point>,
        size: impl Into<Size>,
        dims: (usize, usize),
    ) -> Figure<'_, Grid> {
        Figure::new(self, Grid::at(center.into(), size.into(), dims))
    }

    /// Polygon without vertices.
    pub fn poly(&self) -> Figure<'_, Poly> {
        Figure::new(self, Poly::default())
    }

    /// Empty text label.
    pub fn text(&self) -> Figure<'_, Text> {
        Figure::new(self, Text::default())
    }

    /// Text label with its payload.
    pub fn label(&self, text: impl Into<String>) -> Figure<'_, Text> {
        Figure::new(self, Text::with_text(text.into()))
    }

    /// End the current frame: emit `tick` and flush the channel.
    ///
    /// Lines emitted before the first tick are persistent background state.
    pub fn tick(&self) {
        let written = self.emit("tick");
        self.flush_sink();
        if !written {
            return;
        }
        let mut state = self.state.borrow_mut();
        state.stats.frames += 1;
        tracing::debug!(
            frame = state.stats.frames,
            lines = state.stats.lines,
            "frame boundary"
        );
    }

    /// Ask the viewer to hide primitives carrying `tag`.
    pub fn disable_tag(&self, tag: &str) {
        let mut line = CommandLine::new("disable");
        line.rest(tag);
        self.emit(line.as_str());
    }

    /// Show a free-form message in the viewer.
    pub fn message(&self, text: &str) {
        let mut line = CommandLine::new("msg");
        line.rest(text);
        self.emit(line.as_str());
    }

    /// Register an interpolation function and emit its `setfunc` line.
    ///
    /// Must happen before any primitive references `name` through `func`.
    pub fn set_func(&self, name: impl Into<String>, curve: impl Into<Curve>) -> SceneResult<()> {
        let name = name.into();
        let mut functions = self.functions.borrow_mut();
        let curve = functions.register(name.clone(), curve.into())?;

        let mut line = CommandLine::new("setfunc");
        line.arg(name.as_str());
        for v in curve.samples() {
            line.arg(v);
        }
        self.emit(line.as_str());
        Ok(())
    }

    /// Return `true` when `name` may be referenced by a primitive.
    pub fn has_func(&self, name: &str) -> bool {
        self.functions.borrow().contains(name)
    }

    /// Number of frame boundaries emitted so far.
    pub fn frame(&self) -> u64 {
        self.state.borrow().stats.frames
    }

    /// Counters so far.
    pub fn stats(&self) -> SceneStats {
        self.state.borrow().stats
    }

    /// Flush the channel and report the first output failure, if any happened.
    pub fn flush(&self) -> SceneResult<()> {
        self.flush_sink();
        match &self.state.borrow().failure {
            Some(err) => Err(SceneError::Io(io::Error::new(err.kind(), err.to_string()))),
            None => Ok(()),
        }
    }

    /// Flush and close the stream.
    #[tracing::instrument(skip(self))]
    pub fn finish(self) -> SceneResult<SceneStats> {
        self.flush()?;
        let stats = self.stats();
        tracing::debug!(frames = stats.frames, lines = stats.lines, "scene finished");
        Ok(stats)
    }

    pub(crate) fn emit_command<C: Command>(&self, cmd: &C) {
        if let Some(name) = cmd.function()
            && !self.has_func(name)
        {
            tracing::warn!(func = name, "primitive references an unregistered function");
        }
        let mut lines = Vec::with_capacity(1);
        cmd.encode(&mut lines);
        for line in &lines {
            self.emit(line);
        }
    }

    /// Write one line; returns `false` when the line was dropped.
    fn emit(&self, line: &str) -> bool {
        let mut state = self.state.borrow_mut();
        if state.failure.is_some() {
            return false;
        }
        tracing::trace!(line, "emit");
        match self.sink.borrow_mut().write_line(line) {
            Ok(()) => {
                state.stats.lines += 1;
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "scene output failed, dropping further lines");
                state.failure = Some(err);
                false
            }
        }
    }

    fn flush_sink(&self) {
        let mut state = self.state.borrow_mut();
        if state.failure.is_some() {
            return;
        }
        if let Err(err) = self.sink.borrow_mut().flush() {
            tracing::error!(error = %err, "scene flush failed, dropping further lines");
            state.failure = Some(err);
        }
    }
}

impl Drop for Scene {
    fn drop(&mut self) {
        self.flush_sink();
    }
}

#[cfg(test)]
#[path = "../tests/unit/scene.rs"]
mod tests;
