//! lircvol Mixer Control
//!
//! Volume and mute control over one host mixer endpoint, driven by the
//! lircvol daemon.
//!
//! ## Architecture
//!
//! ```text
//! lircvol-daemon (Session)
//!   │
//!   └─> VolumeController (key -> volume/mute transition)
//!         │
//!         └─> Mixer trait (endpoint seam)
//!               │
//!               └─> AlsaMixer (optional `alsa` feature)
//! ```
//!
//! The [`Mixer`] trait is the boundary to the host audio stack: everything
//! above it is synchronous, endpoint-agnostic and fully testable without
//! audio hardware.

#[cfg(feature = "alsa")]
pub mod alsa;
pub mod controller;
pub mod error;
pub mod mixer;

#[cfg(feature = "alsa")]
pub use alsa::AlsaMixer;
pub use controller::{VolumeController, VolumeOp, DEFAULT_VOLUME_STEP, MIXER_ENDPOINT};
pub use error::{MixerError, Result};
pub use mixer::Mixer;
