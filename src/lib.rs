#[cfg(test)]
#[macro_use]
extern crate assert_matches;
extern crate byteorder;
extern crate libc;
#[macro_use]
extern crate log;
#[cfg(test)]
extern crate rand;

use std::error::Error as StdError;
use std::fmt::{
    Display,
    Formatter,
    Result as FmtResult,
};
use std::io;

pub mod core;

#[cfg(target_os = "linux")]
pub mod linux;

use crate::core::link::InterfaceIndex;

#[derive(Debug)]
pub enum Error {
    /// Indicates an interface name that does not fit in an ifreq.
    NameTooLong { name: String, max: usize },
    /// Indicates the raw socket could not be created.
    SocketCreateFailed(io::Error),
    /// Indicates the kernel does not know the interface.
    InterfaceLookupFailed { name: String, cause: io::Error },
    /// Indicates the socket could not be bound to the interface.
    BindFailed {
        index: InterfaceIndex,
        cause: io::Error,
    },
    /// Indicates a read from the capture socket failed.
    ReadFailed(io::Error),
    /// Indicates a decoded record could not be written out.
    Output(io::Error),
    /// Indicates a frame shorter than the Ethernet + ARP layout.
    FrameTooSmall { got: usize, need: usize },
    /// Indicates a frame carrying something other than ARP.
    WrongEthertype(u16),
}

impl Error {
    /// Checks if the error only concerns a single frame and capture can go on.
    pub fn is_diagnostic(&self) -> bool {
        match *self {
            Error::FrameTooSmall { .. } | Error::WrongEthertype(_) => true,
            _ => false,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match *self {
            Error::NameTooLong { ref name, max } => write!(
                f,
                "Interface name too long ('{}' is {} bytes, at most {} allowed).",
                name,
                name.len(),
                max
            ),
            Error::SocketCreateFailed(ref cause) => {
                write!(f, "Could not create socket: {}.", cause)
            }
            Error::InterfaceLookupFailed {
                ref name,
                ref cause,
            } => write!(f, "ioctl failed for interface '{}': {}.", name, cause),
            Error::BindFailed { index, ref cause } => {
                write!(f, "Could not bind socket to {}: {}.", index, cause)
            }
            Error::ReadFailed(ref cause) => write!(f, "Could not read from socket: {}.", cause),
            Error::Output(ref cause) => write!(f, "Could not write record: {}.", cause),
            Error::FrameTooSmall { got, need } => write!(
                f,
                "Received too small of a packet (got {} bytes, need {} bytes).",
                got, need
            ),
            Error::WrongEthertype(eth_type) => {
                write!(f, "Not an ARP packet (ethertype 0x{:04x}).", eth_type)
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match *self {
            Error::SocketCreateFailed(ref cause)
            | Error::ReadFailed(ref cause)
            | Error::Output(ref cause) => Some(cause),
            Error::InterfaceLookupFailed { ref cause, .. } | Error::BindFailed { ref cause, .. } => {
                Some(cause)
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
