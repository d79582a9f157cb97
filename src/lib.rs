//! Client library for streaming animated 2D vector scenes to an external viewer.
//!
//! A scene is a sequence of newline-terminated text commands (`rect`, `circle`, `line`, `grid`,
//! `poly`, `text`, scene settings and `tick` frame boundaries) written to one output channel.
//! The viewer consumes the stream incrementally and owns all rendering and tweening.
//!
//! # Model
//!
//! - A [`Scene`] wraps the output channel ([`LineSink`]) and hands out primitives.
//! - Each primitive is a [`Figure`]: setters are chained by value, and the figure serializes
//!   exactly once, on [`Figure::draw`] or when it goes out of scope.
//! - [`Scene::tick`] ends a frame and flushes, so the viewer sees complete frames.
//! - Primitives carrying the same [`id`](Figure::id) in consecutive frames are interpolated by the
//!   viewer, eased by a curve registered with [`Scene::set_func`].
//!
//! ```
//! use rviewer::{Color, Scene};
//!
//! let (scene, sink) = Scene::in_memory();
//! scene.init().size(80.0, 60.0).speed(30.0);
//! scene.tick();
//! scene
//!     .rect_at((40.0, 30.0), (10.0, 10.0))
//!     .fill(true)
//!     .color(Color::RED);
//! scene.tick();
//!
//! assert_eq!(
//!     sink.lines(),
//!     ["size (80,60)", "speed 30", "tick", "rect c=(40,30) s=(10,10) f=1 col=(255,0,0)", "tick"]
//! );
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod figure;
mod foundation;
mod output;
mod protocol;
mod scene;

/// Built-in demo scenes.
pub mod demo;

pub use animation::curve::Curve;
pub use animation::ease::Ease;
pub use animation::registry::{BUILTIN_LINEAR, FunctionRegistry};
pub use figure::circle::Circle;
pub use figure::grid::Grid;
pub use figure::init::InitSettings;
pub use figure::line::Line;
pub use figure::poly::Poly;
pub use figure::rect::Rect;
pub use figure::text::Text;
pub use figure::{Command, Common, Drawable, Figure};
pub use foundation::core::{Align2, Alignment, Color, Point, Size};
pub use foundation::error::{SceneError, SceneResult};
pub use output::sink::{LineSink, MemorySink, WriterSink};
pub use scene::{Scene, SceneStats};
