use std::io::Write;

use crate::core::capture;
use crate::linux::resolve::resolve;
use crate::linux::socket::CaptureSocket;
use crate::linux::sys::Kernel;
use crate::Result;

/// Captures and prints ARP frames arriving on the interface named `ifr_name`.
///
/// Resolves the interface, binds a capture socket to it and runs the capture
/// loop with it. Only returns on a fatal error, after the socket is closed.
pub fn run<K, O, E>(kernel: K, ifr_name: &str, capacity: usize, out: &mut O, err: &mut E) -> Result<()>
where
    K: Kernel,
    O: Write,
    E: Write,
{
    let index = resolve(&kernel, ifr_name)?;
    let mut socket = CaptureSocket::open(kernel, index)?;

    info!("Capturing ARP frames on '{}' ({}).", ifr_name, index);

    capture::run(&mut socket, capacity, out, err)
}
