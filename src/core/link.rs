use std::fmt::{
    Display,
    Formatter,
    Result as FmtResult,
};

use crate::Result;

/// Kernel level index of a network interface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InterfaceIndex(u32);

impl InterfaceIndex {
    pub fn new(index: u32) -> InterfaceIndex {
        InterfaceIndex(index)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl Display for InterfaceIndex {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "ifindex {}", self.0)
    }
}

/// A low level interface for receiving frames from a link.
pub trait Link {
    /// Reads a single frame from the link into the buffer and returns the
    /// number of bytes copied in. Blocks until a frame arrives.
    ///
    /// Frames longer than the buffer are truncated to the buffer length.
    fn recv(&mut self, buffer: &mut [u8]) -> Result<usize>;
}

impl<'a, L: Link + ?Sized> Link for &'a mut L {
    fn recv(&mut self, buffer: &mut [u8]) -> Result<usize> {
        (**self).recv(buffer)
    }
}
