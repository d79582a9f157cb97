use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::figure::{Command, Figure};
use crate::foundation::error::{SceneError, SceneResult};
use crate::protocol::format::Token;
use crate::protocol::line::CommandLine;

/// Scene-wide viewer settings.
///
/// Emitted as one line per present setting, normally once at the start of the stream, in the
/// order `size`, `width`, `svgwidth`, `font`, `speed`, `shift`, `in_betweens`, `flipy`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InitSettings {
    /// Scene width and height in scene units.
    pub size: Option<(f64, f64)>,
    /// Default stroke width.
    pub width: Option<f64>,
    /// Stroke width scale used for SVG export.
    pub svg_width: Option<f64>,
    /// Default font size.
    pub font: Option<f64>,
    /// Playback speed in frames per second.
    pub speed: Option<f64>,
    /// Offset applied to every coordinate.
    pub shift: Option<(f64, f64)>,
    /// Number of rendered steps per transition between two frames.
    pub in_betweens: Option<u32>,
    /// Flip the y axis so that it points up.
    pub flipy: Option<bool>,
}

impl InitSettings {
    /// Parse settings from JSON and validate them.
    pub fn from_json(s: &str) -> SceneResult<Self> {
        let settings: Self = serde_json::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file and validate them.
    pub fn from_path(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read settings '{}'", path.display()))?;
        Self::from_json(&s)
    }

    /// Check that every present setting is usable by the viewer.
    pub fn validate(&self) -> SceneResult<()> {
        if let Some((w, h)) = self.size
            && !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0)
        {
            return Err(SceneError::validation(format!(
                "size must be positive and finite, got ({w},{h})"
            )));
        }
        for (name, value) in [
            ("width", self.width),
            ("svg_width", self.svg_width),
            ("font", self.font),
            ("speed", self.speed),
        ] {
            if let Some(v) = value
                && !(v.is_finite() && v > 0.0)
            {
                return Err(SceneError::validation(format!(
                    "{name} must be positive and finite, got {v}"
                )));
            }
        }
        if self.in_betweens == Some(0) {
            return Err(SceneError::validation("in_betweens must be >= 1"));
        }
        Ok(())
    }

    /// Fill every unset field of `self` from `other`.
    pub fn or(self, other: &InitSettings) -> Self {
        Self {
            size: self.size.or(other.size),
            width: self.width.or(other.width),
            svg_width: self.svg_width.or(other.svg_width),
            font: self.font.or(other.font),
            speed: self.speed.or(other.speed),
            shift: self.shift.or(other.shift),
            in_betweens: self.in_betweens.or(other.in_betweens),
            flipy: self.flipy.or(other.flipy),
        }
    }
}

fn setting<T: Token>(out: &mut Vec<String>, keyword: &str, value: &Option<T>) {
    if let Some(v) = value {
        let mut line = CommandLine::new(keyword);
        line.arg(v);
        out.push(line.into_string());
    }
}

impl Command for InitSettings {
    fn encode(&self, out: &mut Vec<String>) {
        setting(out, "size", &self.size);
        setting(out, "width", &self.width);
        setting(out, "svgwidth", &self.svg_width);
        setting(out, "font", &self.font);
        setting(out, "speed", &self.speed);
        setting(out, "shift", &self.shift);
        setting(out, "in_betweens", &self.in_betweens);
        setting(out, "flipy", &self.flipy);
    }
}

impl Figure<'_, InitSettings> {
    /// Set the scene size.
    pub fn size(self, width: impl Into<f64>, height: impl Into<f64>) -> Self {
        let size = (width.into(), height.into());
        self.edit(|s| s.size = Some(size))
    }

    /// Set the default stroke width.
    pub fn width(self, width: impl Into<f64>) -> Self {
        let width = width.into();
        self.edit(|s| s.width = Some(width))
    }

    /// Set the SVG export stroke width.
    pub fn svg_width(self, width: impl Into<f64>) -> Self {
        let width = width.into();
        self.edit(|s| s.svg_width = Some(width))
    }

    /// Set the default font size.
    pub fn font(self, font: impl Into<f64>) -> Self {
        let font = font.into();
        self.edit(|s| s.font = Some(font))
    }

    /// Set the playback speed in frames per second.
    pub fn speed(self, speed: impl Into<f64>) -> Self {
        let speed = speed.into();
        self.edit(|s| s.speed = Some(speed))
    }

    /// Offset every coordinate.
    pub fn shift(self, dx: impl Into<f64>, dy: impl Into<f64>) -> Self {
        let shift = (dx.into(), dy.into());
        self.edit(|s| s.shift = Some(shift))
    }

    /// Set the number of rendered steps per transition.
    pub fn in_betweens(self, steps: u32) -> Self {
        self.edit(|s| s.in_betweens = Some(steps))
    }

    /// Flip the y axis.
    pub fn flipy(self, flip: bool) -> Self {
        self.edit(|s| s.flipy = Some(flip))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/figure/init.rs"]
mod tests;
