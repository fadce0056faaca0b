//! Per-connection orchestration: framing, parsing, volume control
//!
//! A [`Session`] is created once per lircd connection and driven entirely by
//! an external transport: `on_data` for byte chunks, `on_closed` when the
//! connection is lost. Processing is synchronous and single-dispatch; the
//! session never assumes ownership of the event loop.

use lircvol_mixer::{Mixer, MixerError, VolumeController};
use thiserror::Error;
use tracing::{debug, trace};

use crate::framer::{AllocError, LineFramer};
use crate::parser::parse_key;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Allocation(#[from] AllocError),

    #[error(transparent)]
    Mixer(#[from] MixerError),
}

pub struct Session<M> {
    framer: LineFramer,
    controller: VolumeController<M>,
    closed: bool,
}

impl<M: Mixer> Session<M> {
    pub fn new(controller: VolumeController<M>) -> Self {
        Self {
            framer: LineFramer::new(),
            controller,
            closed: false,
        }
    }

    /// Handles one chunk delivered by the transport.
    ///
    /// Every complete line in the chunk (plus the retained tail) is parsed
    /// and recognized keys are applied to the mixer before this returns. An
    /// allocation or mixer failure aborts the remaining lines of the batch
    /// and leaves the session unusable beyond logging.
    pub fn on_data(&mut self, chunk: &[u8]) -> Result<(), SessionError> {
        if self.closed {
            trace!("dropping {} bytes received after close", chunk.len());
            return Ok(());
        }

        let controller = &mut self.controller;
        self.framer.feed(chunk, |line| match parse_key(line) {
            Some(key) => {
                trace!("remote key: {}", key);
                controller.handle_key(key).map_err(SessionError::from)
            }
            None => Ok(()),
        })
    }

    /// Connection-loss signal from the transport. No further mixer
    /// mutations are issued once this has been called.
    pub fn on_closed(&mut self) {
        if !self.closed {
            debug!("control daemon connection closed");
            self.closed = true;
        }
    }

    /// Bytes waiting for a newline. Grows without bound on a delimiter-free
    /// stream.
    pub fn pending_bytes(&self) -> usize {
        self.framer.pending_len()
    }

    pub fn controller(&self) -> &VolumeController<M> {
        &self.controller
    }
}
