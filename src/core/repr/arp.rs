use std::fmt::{
    Display,
    Formatter,
    Result as FmtResult,
};

use byteorder::{
    ByteOrder,
    NetworkEndian,
};

use crate::core::repr::{
    EthernetAddress,
    Ipv4Address,
};
use crate::{
    Error,
    Result,
};

/// https://www.iana.org/assignments/arp-parameters/arp-parameters.xhtml#arp-parameters-1
pub mod ops {
    pub const REQUEST: u16 = 1;

    pub const REPLY: u16 = 2;

    pub const RARP_REQUEST: u16 = 3;

    pub const RARP_REPLY: u16 = 4;

    pub const INARP_REQUEST: u16 = 8;

    pub const INARP_REPLY: u16 = 9;

    pub const ATMARP_NAK: u16 = 10;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Request,
    Reply,
    RarpRequest,
    RarpReply,
    InarpRequest,
    InarpReply,
    AtmarpNak,
    Unknown(u16),
}

impl From<u16> for Op {
    fn from(code: u16) -> Op {
        match code {
            ops::REQUEST => Op::Request,
            ops::REPLY => Op::Reply,
            ops::RARP_REQUEST => Op::RarpRequest,
            ops::RARP_REPLY => Op::RarpReply,
            ops::INARP_REQUEST => Op::InarpRequest,
            ops::INARP_REPLY => Op::InarpReply,
            ops::ATMARP_NAK => Op::AtmarpNak,
            code => Op::Unknown(code),
        }
    }
}

impl Display for Op {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match *self {
            Op::Request => write!(f, "REQUEST"),
            Op::Reply => write!(f, "REPLY"),
            Op::RarpRequest => write!(f, "RARP_REQUEST"),
            Op::RarpReply => write!(f, "RARP_REPLY"),
            Op::InarpRequest => write!(f, "INARP_REQUEST"),
            Op::InarpReply => write!(f, "INARP_REPLY"),
            Op::AtmarpNak => write!(f, "ATMARP_NAK"),
            Op::Unknown(code) => write!(f, "UNKNOWN({})", code),
        }
    }
}

mod fields {
    use std::ops::Range;

    pub const OP: Range<usize> = 6 .. 8;

    pub const SOURCE_HW_ADDR: Range<usize> = 8 .. 14;

    pub const SOURCE_PROTO_ADDR: Range<usize> = 14 .. 18;

    pub const TARGET_HW_ADDR: Range<usize> = 18 .. 24;

    pub const TARGET_PROTO_ADDR: Range<usize> = 24 .. 28;
}

/// An ARP packet with Ethernet hardware and IPv4 protocol addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Arp {
    pub op: Op,
    pub source_hw_addr: EthernetAddress,
    pub source_proto_addr: Ipv4Address,
    pub target_hw_addr: EthernetAddress,
    pub target_proto_addr: Ipv4Address,
}

impl Arp {
    /// Size of the fixed header (hardware type, protocol type, address
    /// lengths and opcode).
    pub const HEADER_LEN: usize = 8;

    /// Size of the Ethernet/IPv4 address block following the header.
    pub const ADDR_BLOCK_LEN: usize = 6 + 4 + 6 + 4;

    /// Size of an Ethernet/IPv4 ARP packet.
    pub const BUFFER_LEN: usize = Self::HEADER_LEN + Self::ADDR_BLOCK_LEN;

    /// Attempts to deserialize a buffer into an ARP packet.
    ///
    /// The address block is always read with the Ethernet/IPv4 layout. The
    /// hardware type, protocol type and address lengths in the header are not
    /// consulted, so packets for other address families are misread rather
    /// than rejected.
    pub fn deserialize(buffer: &[u8]) -> Result<Arp> {
        if buffer.len() < Self::BUFFER_LEN {
            return Err(Error::FrameTooSmall {
                got: buffer.len(),
                need: Self::BUFFER_LEN,
            });
        }

        let mut source_hw_addr = [0; 6];
        let mut source_proto_addr = [0; 4];
        let mut target_hw_addr = [0; 6];
        let mut target_proto_addr = [0; 4];
        source_hw_addr.copy_from_slice(&buffer[fields::SOURCE_HW_ADDR]);
        source_proto_addr.copy_from_slice(&buffer[fields::SOURCE_PROTO_ADDR]);
        target_hw_addr.copy_from_slice(&buffer[fields::TARGET_HW_ADDR]);
        target_proto_addr.copy_from_slice(&buffer[fields::TARGET_PROTO_ADDR]);

        Ok(Arp {
            op: Op::from(NetworkEndian::read_u16(&buffer[fields::OP])),
            source_hw_addr: EthernetAddress::new(source_hw_addr),
            source_proto_addr: Ipv4Address::new(source_proto_addr),
            target_hw_addr: EthernetAddress::new(target_hw_addr),
            target_proto_addr: Ipv4Address::new(target_proto_addr),
        })
    }
}
