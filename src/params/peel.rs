//! Peel overlay parameters.

use super::ConfigError;

/// Phase relationship between the four corner oscillators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeelAnimation {
    /// All corners share one phase
    Synced,
    /// Each corner is offset by a quarter cycle
    PerCorner,
}

/// Audio signal driving the peel amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeelAudioSource {
    /// Low-band energy every frame
    Continuous,
    /// Full-strength pulse on every detected beat
    OnBeat,
    /// Pulse on every 2nd beat
    OnSecondBeat,
    /// Pulse on every 4th beat
    OnFourthBeat,
}

/// Corner-localized peel overlay, composed after the active warp mode
#[derive(Debug, Clone)]
pub struct PeelConfig {
    pub enabled: bool,
    /// Peak lift scale (dimensionless; lift grows toward the corners)
    pub amount: f32,
    /// In-plane pull toward the plane center, as a fraction of the lift
    pub curl: f32,
    /// Amplitude of the slow curl oscillation added on top of `curl`
    pub drift: f32,
    /// Strength of the coherent-noise perturbation of the lift
    pub texture_amount: f32,
    pub animation: PeelAnimation,
    pub audio_source: PeelAudioSource,
}

impl Default for PeelConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            amount: 0.3,
            curl: 0.4,
            drift: 0.2,
            texture_amount: 0.5,
            animation: PeelAnimation::Synced,
            audio_source: PeelAudioSource::Continuous,
        }
    }
}

impl PeelConfig {
    /// Checked even when the overlay is disabled, so a bad value surfaces
    /// when it is set rather than when the overlay is switched on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(ConfigError::FactorOutOfRange {
                name: "peel amount",
                value: self.amount,
            });
        }
        let finite = |name: &'static str, value: f32| {
            if value.is_finite() {
                Ok(())
            } else {
                Err(ConfigError::FactorOutOfRange { name, value })
            }
        };
        finite("peel curl", self.curl)?;
        finite("peel drift", self.drift)?;
        finite("peel texture_amount", self.texture_amount)
    }
}
