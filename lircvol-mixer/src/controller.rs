//! Volume and mute transitions driven by remote key presses

use tracing::debug;

use crate::error::Result;
use crate::mixer::Mixer;

/// Endpoint index all operations address. The daemon controls exactly one
/// mixer endpoint.
pub const MIXER_ENDPOINT: u32 = 0;

/// Default fractional volume change per key press.
pub const DEFAULT_VOLUME_STEP: f32 = 0.05;

/// A volume adjustment: direction plus step magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VolumeOp {
    Increase(f32),
    Decrease(f32),
}

impl VolumeOp {
    fn delta(self) -> f32 {
        match self {
            VolumeOp::Increase(step) => step,
            VolumeOp::Decrease(step) => -step,
        }
    }
}

/// Translates recognized remote keys into mixer mutations.
pub struct VolumeController<M> {
    mixer: M,
    step: f32,
}

impl<M: Mixer> VolumeController<M> {
    pub fn new(mixer: M) -> Self {
        Self::with_step(mixer, DEFAULT_VOLUME_STEP)
    }

    pub fn with_step(mixer: M, step: f32) -> Self {
        Self { mixer, step }
    }

    /// Applies the effect of one remote key. Unrecognized keys are a no-op.
    pub fn handle_key(&mut self, key: &str) -> Result<()> {
        match key {
            "KEY_VOLUMEUP" => {
                self.adjust(VolumeOp::Increase(self.step))?;
                // Mute query is best-effort: a failed read counts as "not muted".
                if self.mixer.is_muted(MIXER_ENDPOINT).unwrap_or(false) {
                    self.mixer.set_mute(MIXER_ENDPOINT, false)?;
                }
                Ok(())
            }
            "KEY_VOLUMEDOWN" => self.adjust(VolumeOp::Decrease(self.step)),
            "KEY_MUTE" => {
                let muted = self.mixer.is_muted(MIXER_ENDPOINT).unwrap_or(false);
                self.mixer.set_mute(MIXER_ENDPOINT, !muted)
            }
            other => {
                debug!("ignoring unrecognized key: {}", other);
                Ok(())
            }
        }
    }

    /// Read-modify-write over every channel, clamped to `[0.0, 1.0]`.
    ///
    /// Not atomic with respect to other clients of the same endpoint; the
    /// daemon assumes it is the only writer on its dispatch path. Read
    /// failures abort before any write is attempted.
    pub fn adjust(&mut self, op: VolumeOp) -> Result<()> {
        let channels = self.mixer.channel_count(MIXER_ENDPOINT)?;
        let mut values = self.mixer.values(MIXER_ENDPOINT, channels)?;

        for value in &mut values {
            *value = (*value + op.delta()).clamp(0.0, 1.0);
        }

        self.mixer.set_values(MIXER_ENDPOINT, &values)
    }

    pub fn mixer(&self) -> &M {
        &self.mixer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MixerError;
    use approx::assert_relative_eq;

    #[derive(Default)]
    struct MockMixer {
        values: Vec<f32>,
        muted: bool,
        fail_reads: bool,
        fail_mute_query: bool,
        value_writes: usize,
        mute_writes: usize,
    }

    impl Mixer for MockMixer {
        fn channel_count(&self, _endpoint: u32) -> Result<usize> {
            if self.fail_reads {
                return Err(MixerError::read("device unavailable"));
            }
            Ok(self.values.len())
        }

        fn values(&self, _endpoint: u32, max_channels: usize) -> Result<Vec<f32>> {
            if self.fail_reads {
                return Err(MixerError::read("device unavailable"));
            }
            Ok(self.values.iter().copied().take(max_channels).collect())
        }

        fn set_values(&mut self, _endpoint: u32, values: &[f32]) -> Result<()> {
            self.value_writes += 1;
            self.values = values.to_vec();
            Ok(())
        }

        fn is_muted(&self, _endpoint: u32) -> Result<bool> {
            if self.fail_mute_query {
                return Err(MixerError::read("switch query failed"));
            }
            Ok(self.muted)
        }

        fn set_mute(&mut self, _endpoint: u32, muted: bool) -> Result<()> {
            self.mute_writes += 1;
            self.muted = muted;
            Ok(())
        }
    }

    fn controller(values: &[f32]) -> VolumeController<MockMixer> {
        VolumeController::new(MockMixer {
            values: values.to_vec(),
            ..Default::default()
        })
    }

    #[test]
    fn volume_up_raises_every_channel() {
        let mut ctl = controller(&[0.5, 0.3]);
        ctl.handle_key("KEY_VOLUMEUP").unwrap();
        assert_relative_eq!(ctl.mixer.values[0], 0.55);
        assert_relative_eq!(ctl.mixer.values[1], 0.35);
    }

    #[test]
    fn volume_up_clamps_at_full() {
        let mut ctl = controller(&[0.97]);
        ctl.handle_key("KEY_VOLUMEUP").unwrap();
        assert_relative_eq!(ctl.mixer.values[0], 1.0);
    }

    #[test]
    fn volume_down_clamps_at_zero() {
        let mut ctl = controller(&[0.02]);
        ctl.handle_key("KEY_VOLUMEDOWN").unwrap();
        assert_relative_eq!(ctl.mixer.values[0], 0.0);
    }

    #[test]
    fn volume_up_unmutes_a_muted_endpoint() {
        let mut ctl = controller(&[0.5]);
        ctl.mixer.muted = true;
        ctl.handle_key("KEY_VOLUMEUP").unwrap();
        assert!(!ctl.mixer.muted);
    }

    #[test]
    fn volume_up_skips_unmute_when_query_fails() {
        let mut ctl = controller(&[0.5]);
        ctl.mixer.muted = true;
        ctl.mixer.fail_mute_query = true;
        ctl.handle_key("KEY_VOLUMEUP").unwrap();
        // Query defaulted to "not muted", so no unmute write was issued.
        assert_eq!(ctl.mixer.mute_writes, 0);
        assert_relative_eq!(ctl.mixer.values[0], 0.55);
    }

    #[test]
    fn mute_toggles_on_consecutive_presses() {
        let mut ctl = controller(&[0.5]);
        assert!(!ctl.mixer.muted);
        ctl.handle_key("KEY_MUTE").unwrap();
        assert!(ctl.mixer.muted);
        ctl.handle_key("KEY_MUTE").unwrap();
        assert!(!ctl.mixer.muted);
    }

    #[test]
    fn mute_query_failure_defaults_to_unmuted() {
        let mut ctl = controller(&[0.5]);
        ctl.mixer.muted = true;
        ctl.mixer.fail_mute_query = true;
        // Toggle reads "false" and mutes again rather than unmuting.
        ctl.handle_key("KEY_MUTE").unwrap();
        assert!(ctl.mixer.muted);
        assert_eq!(ctl.mixer.mute_writes, 1);
    }

    #[test]
    fn unrecognized_key_is_a_noop() {
        let mut ctl = controller(&[0.5]);
        ctl.handle_key("KEY_POWER").unwrap();
        assert_eq!(ctl.mixer.value_writes, 0);
        assert_eq!(ctl.mixer.mute_writes, 0);
    }

    #[test]
    fn read_failure_aborts_before_any_write() {
        let mut ctl = controller(&[0.5]);
        ctl.mixer.fail_reads = true;
        let err = ctl.handle_key("KEY_VOLUMEDOWN").unwrap_err();
        assert!(matches!(err, MixerError::Read(_)));
        assert_eq!(ctl.mixer.value_writes, 0);
    }

    #[test]
    fn adjust_applies_tagged_operations() {
        let mut ctl = controller(&[0.4]);
        ctl.adjust(VolumeOp::Increase(0.1)).unwrap();
        assert_relative_eq!(ctl.mixer.values[0], 0.5);
        ctl.adjust(VolumeOp::Decrease(0.2)).unwrap();
        assert_relative_eq!(ctl.mixer.values[0], 0.3);
    }
}
