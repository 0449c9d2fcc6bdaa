use std::fmt::{
    Display,
    Formatter,
    Result as FmtResult,
};

use byteorder::{
    ByteOrder,
    NetworkEndian,
};

use crate::{
    Error,
    Result,
};

/// [MAC address](https://en.wikipedia.org/wiki/MAC_address) in network byte order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Address([u8; 6]);

impl Address {
    /// Creates a MAC address from a network byte order buffer.
    pub fn new(addr: [u8; 6]) -> Address {
        Address(addr)
    }

}

impl Display for Address {
    /// Formats the address as six lowercase, zero padded hex octets joined by
    /// colons.
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5],
        )
    }
}

/// [https://en.wikipedia.org/wiki/EtherType](https://en.wikipedia.org/wiki/EtherType)
pub mod eth_types {
    pub const ARP: u16 = 0x806;
}

mod fields {
    use std::ops::{
        Range,
        RangeFrom,
    };

    pub const PAYLOAD_TYPE: Range<usize> = 12 .. 14;

    pub const PAYLOAD: RangeFrom<usize> = 14 ..;
}

/// Read only view of a byte buffer as an Ethernet II frame.
#[derive(Debug)]
pub struct Frame<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> AsRef<[u8]> for Frame<T> {
    fn as_ref(&self) -> &[u8] {
        self.buffer.as_ref()
    }
}

impl<T: AsRef<[u8]>> Frame<T> {
    pub const HEADER_LEN: usize = 14;

    /// Tries to create an Ethernet frame view over a byte buffer.
    pub fn try_new(buffer: T) -> Result<Frame<T>> {
        let len = buffer.as_ref().len();
        if len < Self::HEADER_LEN {
            Err(Error::FrameTooSmall {
                got: len,
                need: Self::HEADER_LEN,
            })
        } else {
            Ok(Frame { buffer })
        }
    }

    pub fn payload_type(&self) -> u16 {
        NetworkEndian::read_u16(&self.buffer.as_ref()[fields::PAYLOAD_TYPE])
    }

    pub fn payload(&self) -> &[u8] {
        &self.buffer.as_ref()[fields::PAYLOAD]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_mac_string(s: &str) -> bool {
        let octets: Vec<_> = s.split(':').collect();
        s.len() == 17
            && octets.len() == 6
            && octets.iter().all(|octet| {
                octet.len() == 2
                    && octet
                        .chars()
                        .all(|c| c.is_ascii_digit() || ('a' ..= 'f').contains(&c))
            })
    }

    #[test]
    fn test_display() {
        let addr = Address::new([0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
        assert_eq!(addr.to_string(), "aa:bb:cc:dd:ee:ff");
    }

    #[test]
    fn test_display_zero_pads() {
        let addr = Address::new([0x00, 0x01, 0x0A, 0x10, 0x02, 0x00]);
        assert_eq!(addr.to_string(), "00:01:0a:10:02:00");
    }

    #[test]
    fn test_display_random_addresses() {
        for _ in 0 .. 1000 {
            let mut bytes = [0; 6];
            for byte in bytes.iter_mut() {
                *byte = rand::random::<u8>();
            }
            let s = Address::new(bytes).to_string();
            assert!(is_mac_string(&s), "bad MAC string {}", s);
        }
    }

    #[test]
    fn test_frame_too_short() {
        assert_matches!(
            Frame::try_new(&[0u8; 13][..]),
            Err(Error::FrameTooSmall { got: 13, need: 14 })
        );
    }

    #[test]
    fn test_frame_fields() {
        let buffer = [
            0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x06, 0x11, 0x22, 0x33, 0x44, 0x55, 0x08, 0x06,
            0xDE, 0xAD,
        ];
        let frame = Frame::try_new(&buffer[..]).unwrap();
        assert_eq!(frame.payload_type(), eth_types::ARP);
        assert_eq!(frame.payload(), &[0xDE, 0xAD]);
    }
}
