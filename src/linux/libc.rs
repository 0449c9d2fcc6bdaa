use std::ffi::CStr;

pub const SIOCGIFINDEX: libc::c_ulong = 0x8933;

/// Longest interface name that fits in an ifreq with its NUL terminator.
pub const MAX_IFR_NAME_LEN: usize = libc::IF_NAMESIZE - 1;

#[repr(C)]
#[derive(Clone, Copy, Debug)]
/// [https://linux.die.net/man/7/netdevice](https://linux.die.net/man/7/netdevice)
pub struct c_ifreq {
    pub ifr_name: [libc::c_char; libc::IF_NAMESIZE],
    pub ifr_ifindex: libc::c_int,
    // Rest of the ifr_ifru union, the kernel copies the whole struct.
    _ifr_pad: [u8; 20],
}

impl c_ifreq {
    /// Creates an ifreq for an interface name. Names longer than
    /// MAX_IFR_NAME_LEN are truncated.
    pub fn with_name(ifr_name: &CStr) -> c_ifreq {
        let mut ifreq = c_ifreq {
            ifr_name: [0; libc::IF_NAMESIZE],
            ifr_ifindex: 0,
            _ifr_pad: [0; 20],
        };

        for (i, c) in ifr_name.to_bytes().iter().take(MAX_IFR_NAME_LEN).enumerate() {
            ifreq.ifr_name[i] = *c as libc::c_char;
        }

        ifreq
    }
}
