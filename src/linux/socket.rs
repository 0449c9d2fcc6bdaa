use crate::core::link::{
    InterfaceIndex,
    Link,
};
use crate::core::repr::eth_types;
use crate::linux::sys::{
    Fd,
    Kernel,
    Libc,
};
use crate::{
    Error,
    Result,
};

/// A [packet socket](http://man7.org/linux/man-pages/man7/packet.7.html)
/// bound to a single interface, receiving ARP frames only.
///
/// The socket is closed when dropped.
#[derive(Debug)]
pub struct CaptureSocket<K: Kernel = Libc> {
    fd: Fd<K>,
    index: InterfaceIndex,
}

impl<K: Kernel> CaptureSocket<K> {
    /// Opens a packet socket for ARP frames and binds it to an interface.
    pub fn open(kernel: K, index: InterfaceIndex) -> Result<CaptureSocket<K>> {
        let fd = Fd::packet_socket(kernel, eth_types::ARP).map_err(Error::SocketCreateFailed)?;

        // On failure fd is dropped here, closing the socket.
        fd.kernel()
            .bind_interface(fd.raw(), eth_types::ARP, index)
            .map_err(|cause| Error::BindFailed { index, cause })?;

        debug!("Bound socket {} to {}.", fd.raw(), index);

        Ok(CaptureSocket { fd, index })
    }

    /// Returns the interface the socket is bound to.
    pub fn index(&self) -> InterfaceIndex {
        self.index
    }
}

impl<K: Kernel> Link for CaptureSocket<K> {
    fn recv(&mut self, buffer: &mut [u8]) -> Result<usize> {
        self.fd
            .kernel()
            .read(self.fd.raw(), buffer)
            .map_err(Error::ReadFailed)
    }
}
