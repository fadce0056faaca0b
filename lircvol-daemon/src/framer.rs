//! Incremental line framing for the lircd byte stream
//!
//! lircd writes newline-terminated notification lines, but the socket
//! delivers arbitrary chunks: zero, one or many lines per read, and lines may
//! split across reads. The framer turns that stream back into whole lines,
//! retaining any unterminated tail between passes.

use std::collections::TryReserveError;

use thiserror::Error;

/// Pending-buffer growth failed under memory pressure.
#[derive(Error, Debug)]
#[error("failed to grow pending buffer: {0}")]
pub struct AllocError(#[from] TryReserveError);

#[derive(Default)]
pub struct LineFramer {
    pending: Vec<u8>,
}

impl LineFramer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes received but not yet resolved into a complete line.
    ///
    /// This grows without bound if the stream never produces a delimiter.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Feeds one chunk, invoking `on_line` for every complete line (delimiter
    /// excluded) across the retained tail and the new bytes, in order.
    ///
    /// A callback error aborts the pass immediately: remaining lines in the
    /// chunk are not dispatched. On success the retained tail holds exactly
    /// the bytes after the last newline seen so far.
    pub fn feed<E, F>(&mut self, chunk: &[u8], mut on_line: F) -> Result<(), E>
    where
        E: From<AllocError>,
        F: FnMut(&[u8]) -> Result<(), E>,
    {
        if self.pending.is_empty() {
            // Fast path: scan the chunk in place, copy only the leftover tail.
            let rest = split_lines(chunk, &mut on_line)?;
            if !rest.is_empty() {
                self.append(rest)?;
            }
        } else {
            // A line may span the retained tail and this chunk, so the chunk
            // has to be appended before scanning.
            self.append(chunk)?;
            let mut consumed = 0;
            while let Some(pos) = find_newline(&self.pending[consumed..]) {
                let end = consumed + pos;
                let result = on_line(&self.pending[consumed..end]);
                consumed = end + 1;
                if result.is_err() {
                    self.pending.drain(..consumed);
                    return result;
                }
            }
            self.pending.drain(..consumed);
        }
        Ok(())
    }

    fn append<E: From<AllocError>>(&mut self, bytes: &[u8]) -> Result<(), E> {
        self.pending
            .try_reserve(bytes.len())
            .map_err(AllocError::from)
            .map_err(E::from)?;
        self.pending.extend_from_slice(bytes);
        Ok(())
    }
}

fn find_newline(buf: &[u8]) -> Option<usize> {
    buf.iter().position(|&b| b == b'\n')
}

/// Dispatches every complete line in `buf`, returning the unterminated tail.
fn split_lines<'a, E, F>(buf: &'a [u8], on_line: &mut F) -> Result<&'a [u8], E>
where
    F: FnMut(&[u8]) -> Result<(), E>,
{
    let mut rest = buf;
    while let Some(pos) = find_newline(rest) {
        on_line(&rest[..pos])?;
        rest = &rest[pos + 1..];
    }
    Ok(rest)
}
