use super::{HAND_LIGHTNESS, LOG_F, MAX_HUE, MAX_MS, SWEEP_LIGHTNESS, SWEEP_SATURATION};
use derive_more::{Deref, Display, From, Into};
use palette::encoding;
use palette::{FromColor, Hsl, Srgb, Srgba, WithAlpha};

/// Hue in degrees, `120` for a fast frame down to `0` for a stalled one.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, Deref, From, Into)]
pub struct Hue(f64);

impl Hue {
    /// Logarithmic mapping of a frame interval onto green..red.
    ///
    /// Anything under `LOG_F` ms is fully green, anything over `MAX_MS` is fully red.
    pub fn from_elapsed(ms_delta: f64) -> Self {
        let mult = MAX_HUE / (MAX_MS / LOG_F).ln();
        let shift = (mult * (ms_delta / LOG_F).ln()).max(0.0).min(MAX_HUE);
        Self(MAX_HUE - shift)
    }

    pub fn degrees(&self) -> f64 {
        self.0
    }

    pub fn sweep_color(&self, opacity: f64) -> Srgba<f64> {
        self.color(SWEEP_LIGHTNESS).with_alpha(opacity)
    }

    pub fn hand_color(&self) -> Srgba<f64> {
        self.color(HAND_LIGHTNESS).with_alpha(1.0)
    }

    pub fn css_sweep(&self) -> String {
        self.css(SWEEP_LIGHTNESS)
    }

    pub fn css_hand(&self) -> String {
        self.css(HAND_LIGHTNESS)
    }

    fn color(&self, lightness: f64) -> Srgb<f64> {
        Srgb::<f64>::from_color(Hsl::<encoding::Srgb, f64>::new(
            self.0,
            SWEEP_SATURATION,
            lightness,
        ))
    }

    fn css(&self, lightness: f64) -> String {
        format!(
            "hsl({}, {}%, {}%)",
            self.0,
            SWEEP_SATURATION * 100.0,
            lightness * 100.0
        )
    }
}
