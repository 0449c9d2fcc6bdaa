use std::ffi::CStr;
use std::io;
use std::mem;
use std::os::unix::io::RawFd;

use crate::core::link::InterfaceIndex;
use crate::linux::libc as _libc;

/// The system calls needed to capture frames from an interface.
pub trait Kernel {
    /// Opens an `AF_PACKET` raw socket receiving frames with the given
    /// ethertype.
    fn packet_socket(&self, eth_type: u16) -> io::Result<RawFd>;

    /// Looks up the index of the interface named `ifr_name` via `SIOCGIFINDEX`
    /// on an open socket.
    fn interface_index(&self, fd: RawFd, ifr_name: &CStr) -> io::Result<u32>;

    /// Binds a packet socket to an interface.
    fn bind_interface(&self, fd: RawFd, eth_type: u16, index: InterfaceIndex) -> io::Result<()>;

    /// Reads a single frame, blocking until one arrives.
    fn read(&self, fd: RawFd, buffer: &mut [u8]) -> io::Result<usize>;

    fn close(&self, fd: RawFd);
}

impl<'a, K: Kernel + ?Sized> Kernel for &'a K {
    fn packet_socket(&self, eth_type: u16) -> io::Result<RawFd> {
        (**self).packet_socket(eth_type)
    }

    fn interface_index(&self, fd: RawFd, ifr_name: &CStr) -> io::Result<u32> {
        (**self).interface_index(fd, ifr_name)
    }

    fn bind_interface(&self, fd: RawFd, eth_type: u16, index: InterfaceIndex) -> io::Result<()> {
        (**self).bind_interface(fd, eth_type, index)
    }

    fn read(&self, fd: RawFd, buffer: &mut [u8]) -> io::Result<usize> {
        (**self).read(fd, buffer)
    }

    fn close(&self, fd: RawFd) {
        (**self).close(fd)
    }
}

/// The running kernel, via libc.
#[derive(Clone, Copy, Debug, Default)]
pub struct Libc;

impl Kernel for Libc {
    fn packet_socket(&self, eth_type: u16) -> io::Result<RawFd> {
        let fd = unsafe {
            libc::socket(
                libc::AF_PACKET,
                libc::SOCK_RAW,
                eth_type.to_be() as libc::c_int,
            )
        };

        if fd == -1 {
            Err(io::Error::last_os_error())
        } else {
            Ok(fd)
        }
    }

    fn interface_index(&self, fd: RawFd, ifr_name: &CStr) -> io::Result<u32> {
        let mut ifreq = _libc::c_ifreq::with_name(ifr_name);

        if unsafe { libc::ioctl(fd, _libc::SIOCGIFINDEX as _, &mut ifreq as *mut _libc::c_ifreq) }
            == -1
        {
            return Err(io::Error::last_os_error());
        }

        Ok(ifreq.ifr_ifindex as u32)
    }

    fn bind_interface(&self, fd: RawFd, eth_type: u16, index: InterfaceIndex) -> io::Result<()> {
        // http://man7.org/linux/man-pages/man7/packet.7.html
        let mut addr: libc::sockaddr_ll = unsafe { mem::zeroed() };
        addr.sll_family = libc::AF_PACKET as libc::c_ushort;
        addr.sll_protocol = eth_type.to_be();
        addr.sll_ifindex = index.as_u32() as libc::c_int;

        let bound = unsafe {
            libc::bind(
                fd,
                &addr as *const libc::sockaddr_ll as *const libc::sockaddr,
                mem::size_of::<libc::sockaddr_ll>() as libc::socklen_t,
            )
        };

        if bound == -1 {
            Err(io::Error::last_os_error())
        } else {
            Ok(())
        }
    }

    fn read(&self, fd: RawFd, buffer: &mut [u8]) -> io::Result<usize> {
        let read = unsafe {
            libc::read(
                fd,
                buffer.as_mut_ptr() as *mut libc::c_void,
                buffer.len(),
            )
        };

        if read < 0 {
            Err(io::Error::last_os_error())
        } else {
            Ok(read as usize)
        }
    }

    fn close(&self, fd: RawFd) {
        unsafe {
            libc::close(fd);
        }
    }
}

/// A file descriptor closed through its kernel when dropped.
#[derive(Debug)]
pub struct Fd<K: Kernel> {
    kernel: K,
    raw: RawFd,
}

impl<K: Kernel> Fd<K> {
    /// Opens a packet socket for an ethertype.
    pub fn packet_socket(kernel: K, eth_type: u16) -> io::Result<Fd<K>> {
        let raw = kernel.packet_socket(eth_type)?;
        debug!("Opened packet socket {} for ethertype 0x{:04x}.", raw, eth_type);
        Ok(Fd { kernel, raw })
    }

    pub fn raw(&self) -> RawFd {
        self.raw
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }
}

impl<K: Kernel> Drop for Fd<K> {
    fn drop(&mut self) {
        debug!("Closing socket {}.", self.raw);
        self.kernel.close(self.raw);
    }
}
