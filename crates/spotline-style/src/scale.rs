//! Color-scale sampling for per-track coloring.

use crate::color::Rgb;

/// Maps a normalized scalar in [0, 1] to a color.
///
/// Track coloring only needs this one operation, so any monotonic perceptual
/// ramp qualifies. Implemented for plain closures as well, so callers can
/// inject an ad-hoc ramp without a newtype.
pub trait ColorScale {
    /// Sample the scale at `t`. Implementations clamp `t` to [0, 1].
    fn sample(&self, t: f32) -> Rgb;
}

impl<F> ColorScale for F
where
    F: Fn(f32) -> Rgb,
{
    fn sample(&self, t: f32) -> Rgb {
        self(t.clamp(0.0, 1.0))
    }
}

/// A scale interpolating linearly between evenly spaced anchor colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpolatedScale {
    anchors: Vec<Rgb>,
}

impl InterpolatedScale {
    /// Build a scale from anchor colors, evenly spaced over [0, 1].
    ///
    /// A single anchor yields a constant scale; zero anchors yield black.
    #[must_use]
    pub fn new(anchors: impl IntoIterator<Item = Rgb>) -> Self {
        Self {
            anchors: anchors.into_iter().collect(),
        }
    }

    /// The jet-like ramp conventionally used for track coloring:
    /// dark blue → blue → cyan → yellow → red → dark red.
    #[must_use]
    pub fn jet() -> Self {
        Self::new([
            Rgb::new(0, 0, 143),
            Rgb::new(0, 0, 255),
            Rgb::new(0, 255, 255),
            Rgb::new(255, 255, 0),
            Rgb::new(255, 0, 0),
            Rgb::new(128, 0, 0),
        ])
    }

    #[must_use]
    pub fn anchor_count(&self) -> usize {
        self.anchors.len()
    }
}

impl Default for InterpolatedScale {
    fn default() -> Self {
        Self::jet()
    }
}

impl ColorScale for InterpolatedScale {
    fn sample(&self, t: f32) -> Rgb {
        match self.anchors.len() {
            0 => Rgb::new(0, 0, 0),
            1 => self.anchors[0],
            n => {
                let t = t.clamp(0.0, 1.0);
                let scaled = t * (n - 1) as f32;
                let lower = (scaled.floor() as usize).min(n - 2);
                let frac = scaled - lower as f32;
                self.anchors[lower].lerp(self.anchors[lower + 1], frac)
            }
        }
    }
}
