//! Error types for mixer control

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MixerError>;

#[derive(Error, Debug)]
pub enum MixerError {
    /// Channel count, channel values or mute state could not be read.
    #[error("mixer read failed: {0}")]
    Read(String),

    /// Channel values or mute state could not be written.
    #[error("mixer write failed: {0}")]
    Write(String),
}

impl MixerError {
    pub fn read<S: Into<String>>(msg: S) -> Self {
        Self::Read(msg.into())
    }

    pub fn write<S: Into<String>>(msg: S) -> Self {
        Self::Write(msg.into())
    }
}
