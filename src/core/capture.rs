//! The blocking receive and decode loop.

use std::io::Write;

use crate::core::decode::{
    self,
    MIN_FRAME_LEN,
};
use crate::core::link::Link;
use crate::{
    Error,
    Result,
};

/// Default number of bytes read per frame. Enough for any Ethernet/IPv4 ARP
/// frame including the padding up to the Ethernet minimum.
pub const DEFAULT_CAPACITY: usize = 60;

/// A frame read from a link, owned by a single loop iteration.
#[derive(Debug)]
pub struct RawFrame {
    buffer: Vec<u8>,
    len: usize,
}

impl RawFrame {
    /// Returns the number of bytes the buffer was allocated with.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the number of bytes received.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the received bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[.. self.len]
    }
}

/// Reads one frame from a link into a freshly allocated buffer of `capacity`
/// bytes. Blocks until a frame arrives.
pub fn read_frame<L: Link>(link: &mut L, capacity: usize) -> Result<RawFrame> {
    let mut buffer = vec![0; capacity];
    let len = link.recv(&mut buffer)?;

    // A link never reports more than it was given room for.
    let len = std::cmp::min(len, capacity);

    Ok(RawFrame { buffer, len })
}

/// Reads, decodes and prints frames from a link until a fatal error occurs.
///
/// Decoded records go to `out`, one per line. Frames which fail to decode
/// produce a diagnostic line on `err` and capturing continues.
pub fn run<L, O, E>(link: &mut L, capacity: usize, out: &mut O, err: &mut E) -> Result<()>
where
    L: Link,
    O: Write,
    E: Write,
{
    if capacity < MIN_FRAME_LEN {
        warn!(
            "Buffer of {} bytes is smaller than an ARP frame ({} bytes), every frame will be \
             rejected.",
            capacity, MIN_FRAME_LEN
        );
    }

    loop {
        let frame = read_frame(link, capacity)?;
        debug!("Read frame of {} bytes.", frame.len());

        match decode::decode(frame.as_bytes()) {
            Ok(record) => {
                writeln!(out, "{}", record)
                    .and_then(|_| out.flush())
                    .map_err(Error::Output)?;
            }
            Err(ref diagnostic) if diagnostic.is_diagnostic() => {
                // Diagnostics that cannot be written are only logged.
                if let Err(write_err) = writeln!(err, "{}", diagnostic) {
                    debug!("Dropped diagnostic '{}': {}.", diagnostic, write_err);
                }
            }
            Err(fatal) => return Err(fatal),
        }
    }
}
