use crate::animation::ease::Ease;

/// Sampled interpolation curve spanning one transition between two frames.
///
/// Samples are the eased progress at the interior in-between positions; the endpoints `0` and
/// `1` are implied by the viewer and never stored.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Curve {
    samples: Vec<f64>,
}

impl Curve {
    /// Wrap raw samples.
    pub fn from_samples(samples: impl Into<Vec<f64>>) -> Self {
        Self {
            samples: samples.into(),
        }
    }

    /// Sample `f` at `i / in_betweens` for every `i` in `1..in_betweens`.
    pub fn from_fn(in_betweens: usize, f: impl Fn(f64) -> f64) -> Self {
        let n = in_betweens as f64;
        Self {
            samples: (1..in_betweens).map(|i| f(i as f64 / n)).collect(),
        }
    }

    /// Sample an easing function, see [`Curve::from_fn`].
    pub fn from_ease(ease: Ease, in_betweens: usize) -> Self {
        Self::from_fn(in_betweens, |t| ease.apply(t))
    }

    /// Borrow the samples.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Return `true` when the curve has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Index of the first non-finite sample, if any.
    pub(crate) fn first_non_finite(&self) -> Option<usize> {
        self.samples.iter().position(|v| !v.is_finite())
    }
}

impl From<Vec<f64>> for Curve {
    fn from(samples: Vec<f64>) -> Self {
        Self::from_samples(samples)
    }
}

impl From<&[f64]> for Curve {
    fn from(samples: &[f64]) -> Self {
        Self::from_samples(samples)
    }
}

impl<const N: usize> From<[f64; N]> for Curve {
    fn from(samples: [f64; N]) -> Self {
        Self::from_samples(samples)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/curve.rs"]
mod tests;
