use serde::{Deserialize, Serialize};

pub use kurbo::{Point, Size};

/// Straight-alpha RGBA8 color as understood by the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, `255` is fully opaque.
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Color {
    /// Fully opaque black.
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Fully opaque white.
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Fully opaque red.
    pub const RED: Color = Color::rgb(255, 0, 0);
    /// Fully opaque green.
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    /// Fully opaque blue.
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    /// Fully opaque yellow.
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    /// Fully opaque cyan.
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    /// Fully opaque magenta.
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    /// Fully opaque orange.
    pub const ORANGE: Color = Color::rgb(255, 165, 0);

    /// Opaque color from three channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Color from four channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque gray with all three channels set to `level`.
    pub const fn gray(level: u8) -> Self {
        Self::rgb(level, level, level)
    }

    /// Same color with a different alpha channel.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Return `true` when the alpha channel is `255`.
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::rgba(r, g, b, a)
    }
}

/// Placement of a primitive relative to its anchor point along one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alignment {
    /// Anchor sits at the start of the extent.
    Begin,
    /// Anchor sits in the middle of the extent.
    #[default]
    Center,
    /// Anchor sits at the end of the extent.
    End,
}

impl Alignment {
    /// Single-letter wire code.
    pub const fn to_char(self) -> char {
        match self {
            Self::Begin => 'B',
            Self::Center => 'C',
            Self::End => 'E',
        }
    }

    /// Parse a wire code. Unknown letters fall back to [`Alignment::Center`].
    pub const fn from_char(c: char) -> Self {
        match c {
            'B' | 'b' => Self::Begin,
            'E' | 'e' => Self::End,
            _ => Self::Center,
        }
    }
}

/// Horizontal and vertical alignment of a primitive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Align2 {
    /// Horizontal alignment.
    pub horizontal: Alignment,
    /// Vertical alignment.
    pub vertical: Alignment,
}

impl Align2 {
    /// Build from both axes.
    pub const fn new(horizontal: Alignment, vertical: Alignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Build from a pair of letter codes such as `('B', 'E')`.
    pub const fn from_chars(horizontal: char, vertical: char) -> Self {
        Self::new(
            Alignment::from_char(horizontal),
            Alignment::from_char(vertical),
        )
    }
}

impl From<(Alignment, Alignment)> for Align2 {
    fn from((h, v): (Alignment, Alignment)) -> Self {
        Self::new(h, v)
    }
}

impl From<(char, char)> for Align2 {
    fn from((h, v): (char, char)) -> Self {
        Self::from_chars(h, v)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
