use std::f64::consts::PI;

/// Named easing shapes that [`Curve::from_ease`](crate::Curve::from_ease) samples into the
/// `setfunc` tables the viewer tweens with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Constant speed; same shape as the built-in `line` function.
    Linear,
    /// Starts slow, `t²`.
    InQuad,
    /// Ends slow.
    OutQuad,
    /// Slow at both ends, quadratic.
    InOutQuad,
    /// Starts slow, `t³`.
    InCubic,
    /// Ends slow, cubic.
    OutCubic,
    /// Slow at both ends, cubic.
    InOutCubic,
    /// Half a cosine wave.
    InOutSine,
}

impl Ease {
    /// Every easing function, in declaration order.
    pub const ALL: [Ease; 8] = [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::InOutSine,
    ];

    /// Eased progress for transition progress `t`; clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => quad(t),
            Self::OutQuad => mirror(quad, t),
            Self::InOutQuad => in_out(quad, t),
            Self::InCubic => cubic(t),
            Self::OutCubic => mirror(cubic, t),
            Self::InOutCubic => in_out(cubic, t),
            Self::InOutSine => (1.0 - (t * PI).cos()) / 2.0,
        }
    }
}

fn quad(t: f64) -> f64 {
    t * t
}

fn cubic(t: f64) -> f64 {
    t * t * t
}

/// Ease-out shape of the ease-in curve `f`.
fn mirror(f: fn(f64) -> f64, t: f64) -> f64 {
    1.0 - f(1.0 - t)
}

/// `f` over the first half of the transition, its mirror over the second.
fn in_out(f: fn(f64) -> f64, t: f64) -> f64 {
    if t < 0.5 {
        f(2.0 * t) / 2.0
    } else {
        1.0 - f(2.0 - 2.0 * t) / 2.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
