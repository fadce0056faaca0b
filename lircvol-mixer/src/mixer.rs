//! The mixer endpoint seam between the daemon and the host audio stack

use crate::error::Result;

/// One addressable mixer endpoint per index: a set of per-channel values in
/// `[0.0, 1.0]` plus an independent boolean mute flag.
///
/// Read failures surface as [`MixerError::Read`](crate::MixerError::Read) and
/// write failures as [`MixerError::Write`](crate::MixerError::Write). The
/// mute query is special: callers are expected to treat a failed `is_muted`
/// as "not muted" rather than propagate it.
pub trait Mixer {
    /// Number of channels exposed by the endpoint.
    fn channel_count(&self, endpoint: u32) -> Result<usize>;

    /// Current value of every channel, at most `max_channels` entries.
    fn values(&self, endpoint: u32, max_channels: usize) -> Result<Vec<f32>>;

    /// Write all channel values back. Values are expected in `[0.0, 1.0]`.
    fn set_values(&mut self, endpoint: u32, values: &[f32]) -> Result<()>;

    fn is_muted(&self, endpoint: u32) -> Result<bool>;

    fn set_mute(&mut self, endpoint: u32, muted: bool) -> Result<()>;
}
