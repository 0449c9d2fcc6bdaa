use std::ffi::CString;
use std::io;

use crate::core::link::InterfaceIndex;
use crate::core::repr::eth_types;
use crate::linux::libc::MAX_IFR_NAME_LEN;
use crate::linux::sys::{
    Fd,
    Kernel,
};
use crate::{
    Error,
    Result,
};

/// Resolves an interface name such as `eth0` to its kernel index.
///
/// A short lived packet socket is opened to issue the query and is closed
/// before returning, whatever the outcome.
pub fn resolve<K: Kernel>(kernel: &K, ifr_name: &str) -> Result<InterfaceIndex> {
    if ifr_name.len() > MAX_IFR_NAME_LEN {
        return Err(Error::NameTooLong {
            name: String::from(ifr_name),
            max: MAX_IFR_NAME_LEN,
        });
    }

    let c_name = CString::new(ifr_name).map_err(|_| Error::InterfaceLookupFailed {
        name: String::from(ifr_name),
        cause: io::Error::new(io::ErrorKind::InvalidInput, "name contains a NUL byte"),
    })?;

    let fd = Fd::packet_socket(kernel, eth_types::ARP).map_err(Error::SocketCreateFailed)?;

    let index = kernel
        .interface_index(fd.raw(), &c_name)
        .map_err(|cause| Error::InterfaceLookupFailed {
            name: String::from(ifr_name),
            cause,
        })?;

    debug!("Resolved interface '{}' to index {}.", ifr_name, index);

    Ok(InterfaceIndex::new(index))
}
