//! ALSA simple-mixer backend
//!
//! Maps the raw playback volume range of one simple mixer control onto the
//! fractional `[0.0, 1.0]` scale the controller works in. The endpoint index
//! is ignored: an `AlsaMixer` is bound to exactly one control at open time.

use ::alsa::mixer::{Mixer as AlsaHandle, Selem, SelemChannelId, SelemId};

use crate::error::{MixerError, Result};
use crate::mixer::Mixer;

// Playback channels probed in ALSA's own order.
const CHANNELS: &[SelemChannelId] = &[
    SelemChannelId::FrontLeft,
    SelemChannelId::FrontRight,
    SelemChannelId::RearLeft,
    SelemChannelId::RearRight,
    SelemChannelId::FrontCenter,
    SelemChannelId::Woofer,
    SelemChannelId::SideLeft,
    SelemChannelId::SideRight,
    SelemChannelId::RearCenter,
];

pub struct AlsaMixer {
    handle: AlsaHandle,
    selem_id: SelemId,
}

impl AlsaMixer {
    /// Opens `card` and binds to the named simple mixer control
    /// (typically `"default"` / `"Master"`).
    pub fn open(card: &str, control: &str) -> Result<Self> {
        let handle = AlsaHandle::new(card, false)
            .map_err(|e| MixerError::read(format!("open mixer on {card}: {e}")))?;
        let selem_id = SelemId::new(control, 0);
        if handle.find_selem(&selem_id).is_none() {
            return Err(MixerError::read(format!(
                "no mixer control named {control} on {card}"
            )));
        }
        Ok(Self { handle, selem_id })
    }

    fn selem(&self) -> Result<Selem<'_>> {
        self.handle
            .find_selem(&self.selem_id)
            .ok_or_else(|| MixerError::read("mixer control disappeared"))
    }

    fn volume_span(selem: &Selem<'_>) -> Result<(i64, f32)> {
        let (min, max) = selem.get_playback_volume_range();
        if max <= min {
            return Err(MixerError::read("control has an empty volume range"));
        }
        Ok((min, (max - min) as f32))
    }

    fn active_channels(selem: &Selem<'_>) -> Vec<SelemChannelId> {
        CHANNELS
            .iter()
            .copied()
            .filter(|&ch| selem.get_playback_volume(ch).is_ok())
            .collect()
    }
}

impl Mixer for AlsaMixer {
    fn channel_count(&self, _endpoint: u32) -> Result<usize> {
        let selem = self.selem()?;
        let channels = Self::active_channels(&selem);
        if channels.is_empty() {
            return Err(MixerError::read("control has no playback channels"));
        }
        Ok(channels.len())
    }

    fn values(&self, _endpoint: u32, max_channels: usize) -> Result<Vec<f32>> {
        let selem = self.selem()?;
        let (min, span) = Self::volume_span(&selem)?;
        Self::active_channels(&selem)
            .into_iter()
            .take(max_channels)
            .map(|ch| {
                let raw = selem
                    .get_playback_volume(ch)
                    .map_err(|e| MixerError::read(e.to_string()))?;
                Ok((raw - min) as f32 / span)
            })
            .collect()
    }

    fn set_values(&mut self, _endpoint: u32, values: &[f32]) -> Result<()> {
        let selem = self
            .selem()
            .map_err(|_| MixerError::write("mixer control disappeared"))?;
        let (min, span) = Self::volume_span(&selem)
            .map_err(|_| MixerError::write("control has an empty volume range"))?;
        for (ch, &value) in Self::active_channels(&selem).iter().zip(values) {
            let raw = min + (value.clamp(0.0, 1.0) * span).round() as i64;
            selem
                .set_playback_volume(*ch, raw)
                .map_err(|e| MixerError::write(e.to_string()))?;
        }
        Ok(())
    }

    fn is_muted(&self, _endpoint: u32) -> Result<bool> {
        let selem = self.selem()?;
        let switch = selem
            .get_playback_switch(SelemChannelId::FrontLeft)
            .map_err(|e| MixerError::read(e.to_string()))?;
        // Switch off means muted.
        Ok(switch == 0)
    }

    fn set_mute(&mut self, _endpoint: u32, muted: bool) -> Result<()> {
        let selem = self
            .selem()
            .map_err(|_| MixerError::write("mixer control disappeared"))?;
        selem
            .set_playback_switch_all(if muted { 0 } else { 1 })
            .map_err(|e| MixerError::write(e.to_string()))
    }
}
