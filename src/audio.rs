//! Per-frame audio analysis snapshot consumed by the evaluator.

use crate::params::PeelAudioSource;

/// Audio frequency band energies and beat pulses for one frame
///
/// Produced once per frame by an external FFT/beat-detection collaborator;
/// this crate only reads it. Band energies are normalized loudness in [0, 1].
#[derive(Clone, Copy, Debug, Default)]
pub struct AudioSnapshot {
    pub low: f32,  // Bass (20-200 Hz)
    pub mid: f32,  // Mids (200-1000 Hz)
    pub high: f32, // Highs (1000-4000 Hz)
    /// Overall loudness across the spectrum
    pub overall: f32,
    /// Beat detected this frame
    pub beat: bool,
    /// True only on every 2nd detected beat
    pub beat2: bool,
    /// True only on every 4th detected beat
    pub beat4: bool,
}

impl AudioSnapshot {
    /// Scalar driving the peel overlay for the configured audio source
    ///
    /// Beat-gated sources produce a full-strength pulse on the matching beat
    /// frame and zero otherwise.
    pub fn peel_drive(&self, source: PeelAudioSource) -> f32 {
        let pulse = |hit: bool| if hit { 1.0 } else { 0.0 };
        match source {
            PeelAudioSource::Continuous => self.low,
            PeelAudioSource::OnBeat => pulse(self.beat),
            PeelAudioSource::OnSecondBeat => pulse(self.beat2),
            PeelAudioSource::OnFourthBeat => pulse(self.beat4),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continuous_drive_tracks_low_band() {
        let audio = AudioSnapshot {
            low: 0.7,
            ..Default::default()
        };
        assert_eq!(audio.peel_drive(PeelAudioSource::Continuous), 0.7);
    }

    #[test]
    fn test_beat_drives_are_gated_pulses() {
        let audio = AudioSnapshot {
            low: 0.7,
            beat: true,
            beat2: false,
            beat4: true,
            ..Default::default()
        };
        assert_eq!(audio.peel_drive(PeelAudioSource::OnBeat), 1.0);
        assert_eq!(audio.peel_drive(PeelAudioSource::OnSecondBeat), 0.0);
        assert_eq!(audio.peel_drive(PeelAudioSource::OnFourthBeat), 1.0);
    }
}
